use dioxus::prelude::*;
use strum::{AsRefStr, EnumIter};

use crate::components::{Sonner, Toaster};
use crate::config::Config;
use crate::providers::{AuthProvider, QueryClientProvider, TooltipProvider, WalletProvider};
use crate::route::Route;
use crate::state::Theme;

/// Scopes established around the router, outermost first.
#[derive(Debug, Clone, Copy, AsRefStr, EnumIter, PartialEq, Eq, PartialOrd, Ord)]
pub enum Provider {
    QueryClient,
    Auth,
    Wallet,
    Tooltip,
    Notifications,
    Router,
}

pub const PROVIDER_ORDER: [Provider; 6] = [
    Provider::QueryClient,
    Provider::Auth,
    Provider::Wallet,
    Provider::Tooltip,
    Provider::Notifications,
    Provider::Router,
];

#[component]
pub fn App() -> Element {
    let config = use_hook(|| {
        Config::from_env().unwrap_or_else(|error| {
            tracing::error!(%error, "invalid build configuration, falling back to defaults");
            Config::default()
        })
    });
    let Config { api_url, notice_ms } = config;
    let theme = Theme::use_stored();
    use_context_provider(|| theme);
    let theme = theme();

    // Keep in sync with `PROVIDER_ORDER`.
    rsx! {
        div { class: "min-h-screen bg-base-100", "data-theme": "{theme.as_ref()}",
            QueryClientProvider { api_url,
                AuthProvider {
                    WalletProvider {
                        TooltipProvider {
                            Toaster {}
                            Sonner { duration_ms: notice_ms }
                            Router::<Route> {}
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_provider_order_is_declaration_order() {
        assert_eq!(PROVIDER_ORDER.to_vec(), Provider::iter().collect_vec());
        assert!(PROVIDER_ORDER.iter().tuple_windows().all(|(outer, inner)| outer < inner));
    }

    #[test]
    fn test_auth_is_established_before_routing() {
        let position = |provider| PROVIDER_ORDER.iter().position(|p| *p == provider).unwrap();
        assert_eq!(position(Provider::QueryClient), 0);
        assert!(position(Provider::Auth) < position(Provider::Wallet));
        assert!(position(Provider::Auth) < position(Provider::Router));
        assert_eq!(position(Provider::Router), PROVIDER_ORDER.len() - 1);
    }
}
