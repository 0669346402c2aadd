use dioxus::prelude::*;
use wallet_types::asset::MarketQuote;

use crate::components::{Loading, ScreenFrame};
use crate::providers::{AuthContext, QueryClient};
use crate::route::Route;
use crate::screens::assets::format_change;
use crate::screens::dashboard::format_fiat;

#[component]
pub fn TradePage() -> Element {
    let client = QueryClient::use_client();
    let auth = AuthContext::use_auth();

    let markets = use_resource(move || {
        let session = auth.session();
        async move { client.fetch::<Vec<MarketQuote>>("markets", session.as_ref()).await }
    });

    let content = match &*markets.read_unchecked() {
        Some(Ok(markets)) => rsx! {
            div { class: "overflow-x-auto",
                table { class: "table table-pin-rows",
                    thead {
                        tr { class: "shadow bg-base-200",
                            th { class: "text-base", "Market" }
                            th { class: "text-base text-right", "Price" }
                            th { class: "text-base text-right", "24h" }
                        }
                    }
                    tbody {
                        for market in markets {
                            tr { key: "{market.id}", class: "hover",
                                td {
                                    Link {
                                        class: "link link-hover font-semibold",
                                        to: Route::CryptoDetailPage {
                                            id: market.id.clone(),
                                        },
                                        "{market.name}"
                                    }
                                    span { class: "ml-2 opacity-60", "{market.symbol}" }
                                }
                                td { class: "text-right font-mono", "{format_fiat(market.price)}" }
                                td { class: "text-right font-mono", "{format_change(market.change_24h)}" }
                            }
                        }
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
        ScreenFrame { title: "Trade", {content} }
    }
}
