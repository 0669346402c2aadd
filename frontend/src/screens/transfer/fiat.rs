use anyhow::Result;
use dioxus::prelude::*;
use wallet_types::listing::FiatParams;

use super::{Choice, Submitter};
use crate::components::{parse_amount, require, AssetSelect, Field, ScreenFrame, Toast};
use crate::route::Route;

pub const CURRENCIES: &[&str] = &["USD", "EUR", "GBP", "JPY"];

pub fn fiat(asset_id: &str, currency: &str, amount: &str) -> Result<FiatParams> {
    let asset_id = require("Asset", asset_id)?;
    let currency = require("Currency", currency)?.to_ascii_uppercase();
    if !CURRENCIES.contains(&currency.as_str()) {
        anyhow::bail!("{currency} is not a supported currency");
    }
    Ok(FiatParams { asset_id, currency, amount: parse_amount(amount)? })
}

#[component]
fn FiatForm(path: &'static str, action: &'static str, amount_label: &'static str) -> Element {
    let submitter = Submitter::use_submitter();
    let asset_id = use_signal(String::default);
    let currency = use_signal(|| CURRENCIES[0].to_owned());
    let amount = use_signal(String::default);

    let onclick = move |_: Event<MouseData>| {
        if let Some(params) = fiat(&asset_id(), &currency(), &amount()).toast() {
            submitter.submit(path, params, Route::Dashboard {});
        }
    };

    rsx! {
        div { class: "form-control max-w-xl",
            AssetSelect { label: "Asset", value: asset_id }
            Choice { label: "Currency", options: CURRENCIES, value: currency }
            Field { label: amount_label, value: amount, kind: "number" }
            button { class: "btn btn-primary mt-8", disabled: submitter.busy(), onclick, "{action}" }
        }
    }
}

#[component]
pub fn FiatPage() -> Element {
    rsx! {
        ScreenFrame { title: "Buy crypto", subtitle: "Pay by card or bank transfer.",
            FiatForm { path: "fiat/buy", action: "Buy", amount_label: "Amount to spend" }
        }
    }
}

#[component]
pub fn SellPage() -> Element {
    rsx! {
        ScreenFrame { title: "Sell", subtitle: "Proceeds are paid to your linked bank account.",
            FiatForm { path: "fiat/sell", action: "Sell", amount_label: "Amount to sell" }
        }
    }
}
