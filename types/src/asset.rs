use serde::{Deserialize, Serialize};
use strum::AsRefStr;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetBalance {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub amount: f64,
    pub fiat_value: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, AsRefStr, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Sent,
    Received,
    Swapped,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub amount: f64,
    pub counterparty: String,
    pub timestamp: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketQuote {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change_24h: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DepositAddress {
    pub address: String,
    pub network: String,
}

pub fn total_fiat_value(balances: &[AssetBalance]) -> f64 {
    balances.iter().map(|balance| balance.fiat_value).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_fiat_value() {
        let balance = |id: &str, fiat_value| AssetBalance {
            id: id.into(),
            symbol: id.to_uppercase(),
            name: id.into(),
            amount: 1.0,
            fiat_value,
        };
        assert_eq!(total_fiat_value(&[]), 0.0);
        assert_eq!(total_fiat_value(&[balance("btc", 100.5), balance("eth", 20.25)]), 120.75);
    }

    #[test]
    fn test_transaction_kind_wire_name() {
        assert_eq!(serde_json::to_string(&TransactionKind::Received).unwrap(), "\"received\"");
    }
}
