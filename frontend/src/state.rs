use dioxus::prelude::*;
use dioxus_sdk::storage::{use_synced_storage, LocalStorage};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, AsRefStr, EnumIter, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
    Cupcake,
    Synthwave,
    Forest,
}

impl Theme {
    const THEME_KEY: &'static str = "wallet-theme";

    /// The persisted theme. Called once by the app, which provides it as context.
    pub fn use_stored() -> Signal<Self> {
        use_synced_storage::<LocalStorage, Self>(Self::THEME_KEY.into(), || Self::Light)
    }

    pub fn use_theme() -> Signal<Self> {
        use_context()
    }
}
