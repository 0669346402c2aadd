//! Generic shapes used by the directory-style screens and the form endpoints.

use derivative::Derivative;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of a listing endpoint (pools, proposals, stores, signals...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListingItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// Acknowledgement returned by every form endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Receipt {
    pub id: Uuid,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransferParams {
    pub asset_id: String,
    pub recipient: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwapParams {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BridgeParams {
    pub asset_id: String,
    pub from_chain: String,
    pub to_chain: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FiatParams {
    pub asset_id: String,
    pub currency: String,
    pub amount: f64,
}

#[derive(Clone, Derivative, Serialize, Deserialize, PartialEq, Eq)]
#[derivative(Debug)]
pub struct AdvertisingParams {
    pub business: String,
    #[derivative(Debug = "ignore")]
    pub email: String,
    pub message: String,
}
