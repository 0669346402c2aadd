//! Screens that move value: each one validates its form into a params struct, posts it and
//! reports the returned receipt.

mod bridge;
mod fiat;
mod send;
mod swap;
mod trade;

pub use bridge::BridgePage;
pub use fiat::{FiatPage, SellPage};
pub use send::SendPage;
pub use swap::SwapPage;
pub use trade::TradePage;

use dioxus::prelude::*;
use serde::Serialize;
use wallet_types::listing::Receipt;

use crate::components::{notify, Level, Toast};
use crate::providers::{AuthContext, QueryClient};
use crate::route::Route;

/// Posts a validated form and moves on once the backend acknowledged it.
#[derive(Clone, Copy)]
struct Submitter {
    client: QueryClient,
    auth: AuthContext,
    nav: Navigator,
    submitting: Signal<bool>,
}

impl Submitter {
    fn use_submitter() -> Self {
        Self {
            client: QueryClient::use_client(),
            auth: AuthContext::use_auth(),
            nav: navigator(),
            submitting: use_signal(bool::default),
        }
    }

    fn busy(&self) -> bool {
        (self.submitting)()
    }

    fn submit<B: Serialize + 'static>(mut self, path: &'static str, body: B, next: Route) {
        if *self.submitting.peek() {
            return;
        }
        self.submitting.set(true);
        spawn(async move {
            let session = self.auth.session();
            if let Some(receipt) =
                self.client.mutate::<_, Receipt>(path, &body, session.as_ref()).await.toast()
            {
                tracing::info!(path, receipt = %receipt.id, "submitted");
                notify(Level::Success, receipt.message);
                self.nav.push(next);
            }
            self.submitting.set(false);
        });
    }
}

#[component]
fn Choice(
    label: &'static str,
    options: &'static [&'static str],
    value: Signal<String>,
) -> Element {
    let mut value = value;

    rsx! {
        div { class: "label",
            span { class: "label-text", "{label}" }
        }
        select {
            class: "select select-bordered w-full",
            onchange: move |e| value.set(e.value()),
            option { value: "", selected: value.read().is_empty(), disabled: true, "Select" }
            for choice in options {
                option {
                    key: "{choice}",
                    value: "{choice}",
                    selected: *value.read() == *choice,
                    "{choice}"
                }
            }
        }
    }
}
