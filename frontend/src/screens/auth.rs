use dioxus::prelude::*;

use crate::providers::{AuthContext, WalletContext};
use crate::route::Route;

/// Confirmation step shown before entering the wallet, outside of the shared layout.
#[component]
pub fn AuthScreen() -> Element {
    let nav = navigator();
    let mut auth = AuthContext::use_auth();
    let wallet = WalletContext::use_wallet();

    let email = auth.session().map(|session| session.email).unwrap_or_default();
    let active = wallet.active();

    let onclick_continue = move |_: Event<MouseData>| {
        nav.push(auth.take_return_to());
    };
    let onclick_logout = move |_: Event<MouseData>| {
        nav.replace(Route::Index {});
        auth.sign_out();
    };

    rsx! {
        div { class: "bg-base-100 min-h-screen flex flex-col justify-center items-center px-4",
            div { class: "card w-full max-w-md bg-base-200 shadow",
                div { class: "card-body items-center text-center",
                    h2 { class: "card-title text-2xl", "Welcome back" }
                    p { class: "opacity-80", "Signed in as {email}" }
                    if let Some(active) = active {
                        p { class: "text-sm opacity-70", "{active.name} · {active.fingerprint}" }
                    } else {
                        Link { class: "link link-primary text-sm", to: Route::WelcomeScreen {},
                            "Set up a wallet"
                        }
                    }
                    div { class: "card-actions mt-4",
                        button { class: "btn btn-primary", onclick: onclick_continue, "Continue" }
                        button { class: "btn btn-ghost", onclick: onclick_logout, "Log out" }
                    }
                }
            }
        }
    }
}
