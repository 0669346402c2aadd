use dioxus::prelude::*;
use wallet_types::asset::{Transaction, TransactionKind};

use crate::components::{Loading, ScreenFrame};
use crate::providers::{AuthContext, QueryClient};
use crate::route::Route;
use crate::utils::time::format_datetime;

fn kind_class(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Sent => "badge badge-error",
        TransactionKind::Received => "badge badge-success",
        TransactionKind::Swapped => "badge badge-info",
    }
}

#[component]
pub fn AssetTransactionsPage(asset_id: String) -> Element {
    let client = QueryClient::use_client();
    let auth = AuthContext::use_auth();

    // Props are not reactive by themselves, so mirror the id into a signal.
    let mut id = use_signal(|| asset_id.clone());
    if *id.peek() != asset_id {
        id.set(asset_id.clone());
    }

    let transactions = use_resource(move || {
        let session = auth.session();
        let id = id();
        async move {
            let segments = ["assets", id.as_str(), "transactions"];
            client.fetch_at::<Vec<Transaction>>(&segments, session.as_ref()).await
        }
    });

    let content = match &*transactions.read_unchecked() {
        Some(Ok(transactions)) if transactions.is_empty() => rsx! {
            p { class: "opacity-70", "No transaction for this asset yet." }
        },
        Some(Ok(transactions)) => rsx! {
            div { class: "overflow-x-auto",
                table { class: "table table-pin-rows",
                    thead {
                        tr { class: "shadow bg-base-200",
                            th { class: "text-base", "Type" }
                            th { class: "text-base text-right", "Amount" }
                            th { class: "text-base", "Counterparty" }
                            th { class: "text-base", "Date" }
                        }
                    }
                    tbody {
                        for transaction in transactions {
                            tr { key: "{transaction.id}",
                                td {
                                    span { class: kind_class(transaction.kind), "{transaction.kind.as_ref()}" }
                                }
                                td { class: "text-right font-mono", "{transaction.amount}" }
                                td { class: "font-mono break-all", "{transaction.counterparty}" }
                                td { "{format_datetime(transaction.timestamp)}" }
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
        ScreenFrame { title: "Transactions",
            div { class: "flex justify-between items-center mb-4",
                span { class: "badge badge-lg badge-outline uppercase", "{asset_id}" }
                Link { class: "btn btn-ghost btn-sm", to: Route::MyAssetsPage {}, "Back to assets" }
            }
            {content}
        }
    }
}
