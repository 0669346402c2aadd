use anyhow::Result;
use dioxus::prelude::*;
use wallet_types::asset::AssetBalance;

use crate::providers::{AuthContext, QueryClient};

pub fn require(name: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        anyhow::bail!("{name} can not be empty");
    }
    Ok(value.to_owned())
}

pub fn parse_amount(value: &str) -> Result<f64> {
    let amount: f64 = require("Amount", value)?
        .parse()
        .map_err(|_| anyhow::anyhow!("Amount must be a number"))?;
    if !amount.is_finite() || amount <= 0.0 {
        anyhow::bail!("Amount must be greater than zero");
    }
    Ok(amount)
}

#[component]
pub fn Field(
    label: &'static str,
    value: Signal<String>,
    #[props(default = "text")] kind: &'static str,
    placeholder: Option<&'static str>,
    autocomplete: Option<&'static str>,
) -> Element {
    let mut value = value;

    rsx! {
        div { class: "label",
            span { class: "label-text", "{label}" }
        }
        input {
            class: "input input-bordered w-full",
            r#type: kind,
            value: "{value}",
            placeholder: placeholder.unwrap_or_default(),
            autocomplete: autocomplete.unwrap_or("off"),
            oninput: move |e| value.set(e.value())
        }
    }
}

/// Picks one of the signed in user's assets by id.
#[component]
pub fn AssetSelect(label: &'static str, value: Signal<String>) -> Element {
    let mut value = value;
    let client = QueryClient::use_client();
    let auth = AuthContext::use_auth();
    let assets = use_resource(move || {
        let session = auth.session();
        async move { client.fetch::<Vec<AssetBalance>>("assets", session.as_ref()).await }
    });

    let options = match &*assets.read_unchecked() {
        Some(Ok(assets)) => assets.clone(),
        _ => Vec::default(),
    };

    rsx! {
        div { class: "label",
            span { class: "label-text", "{label}" }
        }
        select {
            class: "select select-bordered w-full",
            onchange: move |e| value.set(e.value()),
            option { value: "", selected: value.read().is_empty(), disabled: true, "Select an asset" }
            for asset in options {
                option {
                    key: "{asset.id}",
                    value: "{asset.id}",
                    selected: *value.read() == asset.id,
                    "{asset.name} ({asset.symbol})"
                }
            }
        }
    }
}
