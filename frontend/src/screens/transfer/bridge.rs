use anyhow::Result;
use dioxus::prelude::*;
use wallet_types::listing::BridgeParams;

use super::{Choice, Submitter};
use crate::components::{parse_amount, require, AssetSelect, Field, ScreenFrame, Toast};
use crate::route::Route;

pub const CHAINS: &[&str] = &["ethereum", "arbitrum", "optimism", "polygon", "base", "solana"];

fn chain(name: &str, value: &str) -> Result<String> {
    let value = require(name, value)?;
    if !CHAINS.contains(&value.as_str()) {
        anyhow::bail!("{value} is not a supported chain");
    }
    Ok(value)
}

pub fn bridge(
    asset_id: &str,
    from_chain: &str,
    to_chain: &str,
    amount: &str,
) -> Result<BridgeParams> {
    let asset_id = require("Asset", asset_id)?;
    let from_chain = chain("Source chain", from_chain)?;
    let to_chain = chain("Destination chain", to_chain)?;
    if from_chain == to_chain {
        anyhow::bail!("Source and destination chain must differ");
    }
    Ok(BridgeParams { asset_id, from_chain, to_chain, amount: parse_amount(amount)? })
}

#[component]
pub fn BridgePage() -> Element {
    let submitter = Submitter::use_submitter();
    let asset_id = use_signal(String::default);
    let from_chain = use_signal(String::default);
    let to_chain = use_signal(String::default);
    let amount = use_signal(String::default);

    let onclick = move |_: Event<MouseData>| {
        if let Some(params) = bridge(&asset_id(), &from_chain(), &to_chain(), &amount()).toast() {
            submitter.submit("bridge", params, Route::MyAssetsPage {});
        }
    };

    rsx! {
        ScreenFrame { title: "Bridge", subtitle: "Transfers across chains can take several minutes.",
            div { class: "form-control max-w-xl",
                AssetSelect { label: "Asset", value: asset_id }
                Choice { label: "From chain", options: CHAINS, value: from_chain }
                Choice { label: "To chain", options: CHAINS, value: to_chain }
                Field { label: "Amount", value: amount, kind: "number" }
                button { class: "btn btn-primary mt-8", disabled: submitter.busy(), onclick, "Bridge" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_bridge() {
        assert_eq!(
            bridge("usdc", "ethereum", "base", "100").unwrap(),
            BridgeParams {
                asset_id: "usdc".into(),
                from_chain: "ethereum".into(),
                to_chain: "base".into(),
                amount: 100.0
            }
        );
    }

    #[rstest]
    #[case("usdc", "ethereum", "ethereum", "1")]
    #[case("usdc", "ethereum", "moon", "1")]
    #[case("usdc", "", "base", "1")]
    #[case("", "ethereum", "base", "1")]
    #[case("usdc", "ethereum", "base", "-1")]
    fn test_bridge_invalid(
        #[case] asset_id: &str,
        #[case] from_chain: &str,
        #[case] to_chain: &str,
        #[case] amount: &str,
    ) {
        assert!(bridge(asset_id, from_chain, to_chain, amount).is_err());
    }
}
