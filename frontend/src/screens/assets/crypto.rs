use dioxus::prelude::*;
use wallet_types::asset::MarketQuote;

use crate::components::{Loading, ScreenFrame};
use crate::providers::{AuthContext, QueryClient};
use crate::route::Route;
use crate::screens::dashboard::format_fiat;

pub fn format_change(change: f64) -> String {
    format!("{change:+.2}%")
}

fn change_class(change: f64) -> &'static str {
    if change < 0.0 { "stat-desc text-error" } else { "stat-desc text-success" }
}

#[component]
pub fn CryptoDetailPage(id: String) -> Element {
    let client = QueryClient::use_client();
    let auth = AuthContext::use_auth();

    let mut market = use_signal(|| id.clone());
    if *market.peek() != id {
        market.set(id.clone());
    }

    let quote = use_resource(move || {
        let session = auth.session();
        let id = market();
        async move {
            client.fetch_at::<MarketQuote>(&["markets", id.as_str()], session.as_ref()).await
        }
    });

    let content = match &*quote.read_unchecked() {
        Some(Ok(quote)) => rsx! {
            div { class: "stats shadow w-full",
                div { class: "stat",
                    div { class: "stat-title", "{quote.name} ({quote.symbol})" }
                    div { class: "stat-value font-mono", "{format_fiat(quote.price)}" }
                    div { class: change_class(quote.change_24h), "{format_change(quote.change_24h)} in 24h" }
                }
            }
            div { class: "flex gap-2 mt-6",
                Link { class: "btn btn-primary", to: Route::FiatPage {}, "Buy" }
                Link { class: "btn", to: Route::SellPage {}, "Sell" }
                Link { class: "btn", to: Route::SwapPage {}, "Swap" }
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
        ScreenFrame { title: "Market",
            {content}
            Link { class: "link mt-6 block", to: Route::TradePage {}, "All markets" }
        }
    }
}
