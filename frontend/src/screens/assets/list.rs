use dioxus::prelude::*;
use wallet_types::asset::{total_fiat_value, AssetBalance};

use crate::components::{Loading, ScreenFrame};
use crate::providers::{AuthContext, QueryClient};
use crate::route::Route;
use crate::screens::dashboard::format_fiat;

#[component]
pub fn MyAssetsPage() -> Element {
    let client = QueryClient::use_client();
    let auth = AuthContext::use_auth();

    let assets = use_resource(move || {
        let session = auth.session();
        async move { client.fetch::<Vec<AssetBalance>>("assets", session.as_ref()).await }
    });

    let content = match &*assets.read_unchecked() {
        Some(Ok(assets)) if assets.is_empty() => rsx! {
            p { class: "opacity-70", "You do not hold any asset yet." }
            Link { class: "btn btn-primary mt-4", to: Route::FiatPage {}, "Buy crypto" }
        },
        Some(Ok(assets)) => rsx! {
            div { class: "overflow-x-auto",
                table { class: "table table-pin-rows",
                    thead {
                        tr { class: "shadow bg-base-200",
                            th { class: "text-base", "Asset" }
                            th { class: "text-base text-right", "Amount" }
                            th { class: "text-base text-right", "Value" }
                            th {}
                        }
                    }
                    tbody {
                        for asset in assets {
                            tr { key: "{asset.id}",
                                td {
                                    div { class: "font-semibold", "{asset.name}" }
                                    div { class: "text-sm opacity-60", "{asset.symbol}" }
                                }
                                td { class: "text-right font-mono", "{asset.amount}" }
                                td { class: "text-right font-mono", "{format_fiat(asset.fiat_value)}" }
                                td {
                                    Link {
                                        class: "btn btn-ghost btn-xs",
                                        to: Route::AssetTransactionsPage {
                                            asset_id: asset.id.clone(),
                                        },
                                        "History"
                                    }
                                }
                            }
                        }
                    }
                    tfoot {
                        tr {
                            th { "Total" }
                            th {}
                            th { class: "text-right font-mono", "{format_fiat(total_fiat_value(assets))}" }
                            th {}
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
        ScreenFrame { title: "My assets", {content} }
    }
}
