//! Server side rendering of the router with pinned contexts.

use dioxus::prelude::*;

use crate::config::Config;
use crate::providers::{AuthContext, AuthStatus, QueryClientProvider, TooltipContext, WalletContext};
use crate::route::Route;
use crate::state::Theme;

#[component]
fn Contexts(status: AuthStatus, children: Element) -> Element {
    AuthContext::use_fixed(status);
    WalletContext::use_fixed();
    TooltipContext::use_fixed();
    let theme = use_signal(|| Theme::Light);
    use_context_provider(|| theme);

    rsx! {
        {children}
    }
}

/// Context state after the routed tree has rendered.
#[component]
fn Observed() -> Element {
    let auth = AuthContext::use_auth();
    let wallet = WalletContext::use_wallet();
    let return_to = auth.return_to().map(|route| route.to_string()).unwrap_or_default();

    rsx! {
        div { id: "observed",
            "return-to:{return_to}"
            if wallet.pending().is_some() {
                " pending-backup"
            }
        }
    }
}

#[component]
fn Harness(route: Route, status: AuthStatus) -> Element {
    rsx! {
        QueryClientProvider { api_url: Config::default().api_url,
            Contexts { status,
                Router::<Route> {
                    config: move || {
                        RouterConfig::default().history(MemoryHistory::with_initial_path(route.clone()))
                    }
                }
                Observed {}
            }
        }
    }
}

/// Renders the first frame of `route` while auth is pinned to `status`.
pub fn render(route: Route, status: AuthStatus) -> String {
    let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { route, status });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
