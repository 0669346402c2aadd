use dioxus::prelude::*;
use wallet_types::asset::DepositAddress;

use crate::components::{AssetSelect, Loading, ScreenFrame};
use crate::providers::{AuthContext, QueryClient, WalletContext};

#[component]
pub fn ReceiveScreen() -> Element {
    let client = QueryClient::use_client();
    let auth = AuthContext::use_auth();
    let wallet = WalletContext::use_wallet();
    let asset_id = use_signal(String::default);

    let address = use_resource(move || {
        let session = auth.session();
        let asset_id = asset_id();
        async move {
            if asset_id.is_empty() {
                return None;
            }
            let segments = ["assets", asset_id.as_str(), "address"];
            Some(client.fetch_at::<DepositAddress>(&segments, session.as_ref()).await)
        }
    });

    let details = match &*address.read_unchecked() {
        Some(Some(Ok(DepositAddress { address, network }))) => rsx! {
            div { class: "card bg-base-200 shadow",
                div { class: "card-body",
                    div { class: "badge badge-outline", "{network}" }
                    p { class: "font-mono break-all select-all text-lg", "{address}" }
                }
            }
        },
        Some(Some(Err(e))) => rsx! {
            div { class: "alert alert-error", "{e}" }
        },
        Some(None) => rsx! {
            p { class: "opacity-70", "Choose an asset to see its deposit address." }
        },
        None => rsx! {
            Loading {}
        },
    };

    rsx! {
        ScreenFrame { title: "Receive", subtitle: "Only send the selected asset to this address.",
            div { class: "flex flex-col gap-6 max-w-xl",
                if let Some(active) = wallet.active() {
                    p { class: "opacity-80",
                        "Receiving into "
                        span { class: "font-semibold", "{active.name}" }
                    }
                }
                div { class: "form-control",
                    AssetSelect { label: "Asset", value: asset_id }
                }
                {details}
            }
        }
    }
}
