use anyhow::Result;
use dioxus::prelude::*;
use wallet_types::listing::TransferParams;

use super::Submitter;
use crate::components::{parse_amount, require, AssetSelect, Field, ScreenFrame, Toast};
use crate::route::Route;

pub fn transfer(asset_id: &str, recipient: &str, amount: &str) -> Result<TransferParams> {
    let asset_id = require("Asset", asset_id)?;
    let recipient = require("Recipient", recipient)?;
    if recipient.contains(char::is_whitespace) {
        anyhow::bail!("Recipient address can not contain spaces");
    }
    Ok(TransferParams { asset_id, recipient, amount: parse_amount(amount)? })
}

#[component]
pub fn SendPage() -> Element {
    let submitter = Submitter::use_submitter();
    let asset_id = use_signal(String::default);
    let recipient = use_signal(String::default);
    let amount = use_signal(String::default);

    let onclick = move |_: Event<MouseData>| {
        if let Some(params) = transfer(&asset_id(), &recipient(), &amount()).toast() {
            submitter.submit("transactions/send", params, Route::MyAssetsPage {});
        }
    };

    rsx! {
        ScreenFrame { title: "Send",
            div { class: "form-control max-w-xl",
                AssetSelect { label: "Asset", value: asset_id }
                Field { label: "Recipient address", value: recipient, placeholder: "0x..." }
                Field { label: "Amount", value: amount, kind: "number" }
                button { class: "btn btn-primary mt-8", disabled: submitter.busy(), onclick, "Send" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_transfer() {
        assert_eq!(
            transfer("eth", " 0xabc ", "1.5").unwrap(),
            TransferParams { asset_id: "eth".into(), recipient: "0xabc".into(), amount: 1.5 }
        );
    }

    #[rstest]
    #[case("", "0xabc", "1")]
    #[case("eth", "", "1")]
    #[case("eth", "0x ab", "1")]
    #[case("eth", "0xabc", "0")]
    fn test_transfer_invalid(
        #[case] asset_id: &str,
        #[case] recipient: &str,
        #[case] amount: &str,
    ) {
        assert!(transfer(asset_id, recipient, amount).is_err());
    }
}
