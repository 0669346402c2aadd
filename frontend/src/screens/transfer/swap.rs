use anyhow::Result;
use dioxus::prelude::*;
use wallet_types::listing::SwapParams;

use super::Submitter;
use crate::components::{parse_amount, require, AssetSelect, Field, ScreenFrame, Toast};
use crate::route::Route;

pub fn swap(from: &str, to: &str, amount: &str) -> Result<SwapParams> {
    let from = require("From", from)?;
    let to = require("To", to)?;
    if from == to {
        anyhow::bail!("Pick two different assets");
    }
    Ok(SwapParams { from, to, amount: parse_amount(amount)? })
}

#[component]
pub fn SwapPage() -> Element {
    let submitter = Submitter::use_submitter();
    let mut from = use_signal(String::default);
    let mut to = use_signal(String::default);
    let amount = use_signal(String::default);

    let onclick = move |_: Event<MouseData>| {
        if let Some(params) = swap(&from(), &to(), &amount()).toast() {
            submitter.submit("swap", params, Route::MyAssetsPage {});
        }
    };
    let flip = move |_: Event<MouseData>| {
        let previous = from();
        from.set(to());
        to.set(previous);
    };

    rsx! {
        ScreenFrame { title: "Swap",
            div { class: "form-control max-w-xl",
                AssetSelect { label: "From", value: from }
                button { class: "btn btn-ghost btn-sm self-center mt-2", onclick: flip, "⇅" }
                AssetSelect { label: "To", value: to }
                Field { label: "Amount", value: amount, kind: "number" }
                button { class: "btn btn-primary mt-8", disabled: submitter.busy(), onclick, "Swap" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap() {
        assert_eq!(
            swap("btc", "eth", "0.1").unwrap(),
            SwapParams { from: "btc".into(), to: "eth".into(), amount: 0.1 }
        );
    }

    #[test]
    fn test_swap_same_asset() {
        assert_eq!(swap("btc", "btc", "1").unwrap_err().to_string(), "Pick two different assets");
    }
}
