#![deny(clippy::all)]

pub mod asset;
pub mod auth;
pub mod listing;
pub mod mnemonic;
