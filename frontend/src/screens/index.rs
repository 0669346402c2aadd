use dioxus::prelude::*;

use crate::providers::{AuthContext, AuthStatus};
use crate::route::Route;

#[component]
pub fn Index() -> Element {
    let nav = navigator();
    let auth = AuthContext::use_auth();
    if matches!(auth.status(), AuthStatus::SignedIn(_)) {
        nav.replace(Route::Dashboard {});
    }

    rsx! {
        div { class: "hero min-h-screen bg-base-200",
            div { class: "hero-content text-center",
                div { class: "max-w-md",
                    h1 { class: "text-5xl font-bold text-base-content", "Your keys, your coins" }
                    p { class: "py-6 text-base-content opacity-80",
                        "A self-custody wallet for your crypto, NFTs and DeFi positions."
                    }
                    div { class: "flex justify-center gap-4",
                        Link { class: "btn btn-primary", to: Route::WelcomeScreen {}, "Get started" }
                        Link { class: "btn btn-ghost", to: Route::LoginPage {}, "Log in" }
                    }
                }
            }
        }
    }
}
