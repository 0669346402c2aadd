use dioxus::prelude::*;
use readable::num::Unsigned;
use wallet_types::asset::{total_fiat_value, AssetBalance};

use crate::components::{Loading, ScreenFrame};
use crate::providers::{AuthContext, QueryClient, Tooltip, WalletContext};
use crate::route::Route;

pub fn format_fiat(value: f64) -> String {
    format!("${value:.2}")
}

fn quick_actions() -> [(Route, &'static str); 4] {
    [
        (Route::SendPage {}, "Send an asset to another address"),
        (Route::ReceiveScreen {}, "Show the deposit address of an asset"),
        (Route::SwapPage {}, "Exchange one asset for another"),
        (Route::FiatPage {}, "Buy with a card or bank transfer"),
    ]
}

#[component]
pub fn Dashboard() -> Element {
    let client = QueryClient::use_client();
    let auth = AuthContext::use_auth();
    let wallet = WalletContext::use_wallet();

    let assets = use_resource(move || {
        let session = auth.session();
        async move { client.fetch::<Vec<AssetBalance>>("assets", session.as_ref()).await }
    });

    let active = wallet.active();
    let summary = match &*assets.read_unchecked() {
        Some(Ok(assets)) => rsx! {
            div { class: "stats stats-vertical sm:stats-horizontal shadow w-full",
                div { class: "stat",
                    div { class: "stat-title", "Total balance" }
                    div { class: "stat-value", "{format_fiat(total_fiat_value(assets))}" }
                }
                div { class: "stat",
                    div { class: "stat-title", "Assets" }
                    div { class: "stat-value", "{Unsigned::from(assets.len() as u64)}" }
                    div { class: "stat-actions",
                        Link { class: "btn btn-sm", to: Route::MyAssetsPage {}, "View all" }
                    }
                }
            }
        },
        Some(Err(e)) => rsx! {
            div { class: "alert alert-error", "{e}" }
        },
        None => rsx! {
            Loading {}
        },
    };

    rsx! {
        ScreenFrame { title: "Dashboard",
            div { class: "flex flex-col gap-6",
                if let Some(active) = active {
                    div { class: "text-base-content opacity-80",
                        "Active wallet: "
                        span { class: "font-semibold", "{active.name}" }
                        span { class: "font-mono ml-2 opacity-60", "{active.fingerprint}" }
                    }
                } else {
                    div { class: "alert alert-info",
                        span { "No wallet on this device yet." }
                        Link { class: "btn btn-sm btn-primary", to: Route::WelcomeScreen {}, "Set one up" }
                    }
                }
                {summary}
                div { class: "grid grid-cols-2 sm:grid-cols-4 gap-4",
                    for (route , tip) in quick_actions() {
                        Tooltip { key: "{route}", tip,
                            Link { class: "btn btn-outline w-full", to: route.clone(), "{route.title()}" }
                        }
                    }
                }
            }
        }
    }
}
