use dioxus::prelude::*;
use dioxus_sdk::storage::{use_synced_storage, LocalStorage};
use serde::{Deserialize, Serialize};

const TOOLTIP_KEY: &str = "wallet-tooltips";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TooltipConfig {
    pub enabled: bool,
    pub delay_ms: u32,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self { enabled: true, delay_ms: 700 }
    }
}

#[derive(Clone, Copy)]
pub struct TooltipContext(Signal<TooltipConfig>);

impl TooltipContext {
    pub fn use_tooltip() -> Self {
        use_context()
    }

    pub fn config(&self) -> TooltipConfig {
        *self.0.read()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.0.write().enabled = enabled;
    }

    #[cfg(test)]
    pub fn use_fixed() -> Self {
        let config = use_signal(TooltipConfig::default);
        use_context_provider(|| TooltipContext(config))
    }
}

#[component]
pub fn TooltipProvider(children: Element) -> Element {
    let config = use_synced_storage::<LocalStorage, TooltipConfig>(
        TOOLTIP_KEY.into(),
        TooltipConfig::default,
    );
    use_context_provider(|| TooltipContext(config));

    rsx! {
        {children}
    }
}

#[component]
pub fn Tooltip(#[props(into)] tip: String, children: Element) -> Element {
    let TooltipConfig { enabled, delay_ms } = TooltipContext::use_tooltip().config();

    if enabled {
        rsx! {
            div {
                class: "tooltip tooltip-bottom",
                style: "--tooltip-delay: {delay_ms}ms",
                "data-tip": "{tip}",
                {children}
            }
        }
    } else {
        rsx! {
            {children}
        }
    }
}
