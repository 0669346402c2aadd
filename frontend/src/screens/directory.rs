//! Read-only screens that list whatever their endpoint returns.

use dioxus::prelude::*;

use crate::components::{Listing, ScreenFrame};
use crate::route::Route;

#[component]
fn Directory(
    route: Route,
    path: &'static str,
    subtitle: &'static str,
    empty: &'static str,
) -> Element {
    rsx! {
        ScreenFrame { title: route.title(), subtitle,
            Listing { path, empty }
        }
    }
}

#[component]
pub fn DefiConnectionsPage() -> Element {
    rsx! {
        Directory {
            route: Route::DefiConnectionsPage {},
            path: "defi/connections",
            subtitle: "Applications allowed to talk to your wallet.",
            empty: "No application is connected."
        }
    }
}

#[component]
pub fn CryptoAiPage() -> Element {
    rsx! {
        Directory {
            route: Route::CryptoAiPage {},
            path: "ai/signals",
            subtitle: "Signals are informational and not financial advice.",
            empty: "No signal right now."
        }
    }
}

#[component]
pub fn VeterinariansPage() -> Element {
    rsx! {
        Directory {
            route: Route::VeterinariansPage {},
            path: "directory/veterinarians",
            subtitle: "Clinics that accept crypto payments.",
            empty: "No veterinarian listed yet."
        }
    }
}

#[component]
pub fn PetStoresPage() -> Element {
    rsx! {
        Directory {
            route: Route::PetStoresPage {},
            path: "directory/pet-stores",
            subtitle: "Shops that accept crypto payments.",
            empty: "No pet store listed yet."
        }
        div { class: "w-full max-w-4xl mx-auto px-4",
            Link { class: "link link-primary", to: Route::AdvertisingFormPage {}, "List your business" }
        }
    }
}

#[component]
pub fn GovernancePage() -> Element {
    rsx! {
        Directory {
            route: Route::GovernancePage {},
            path: "governance/proposals",
            subtitle: "Open proposals and their current tally.",
            empty: "No open proposal."
        }
    }
}

#[component]
pub fn PoolsPage() -> Element {
    rsx! {
        Directory {
            route: Route::PoolsPage {},
            path: "pools",
            subtitle: "Liquidity pools and their yearly yield.",
            empty: "No pool available."
        }
    }
}

#[component]
pub fn SolarflarePage() -> Element {
    rsx! {
        Directory {
            route: Route::SolarflarePage {},
            path: "solarflare",
            subtitle: "Status of the Solarflare network.",
            empty: "No status reported."
        }
    }
}

#[component]
pub fn MetricsPage() -> Element {
    rsx! {
        Directory {
            route: Route::MetricsPage {},
            path: "metrics",
            subtitle: "Network and market figures.",
            empty: "No metric available."
        }
    }
}
