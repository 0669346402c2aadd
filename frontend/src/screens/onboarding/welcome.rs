use dioxus::prelude::*;

use crate::providers::{AuthContext, AuthStatus};
use crate::route::Route;

#[component]
pub fn WelcomeScreen() -> Element {
    let auth = AuthContext::use_auth();
    // A signed in user goes straight to generating a phrase.
    let create = if matches!(auth.status(), AuthStatus::SignedIn(_)) {
        Route::SeedPhrasePage {}
    } else {
        Route::EmailSignupPage {}
    };

    rsx! {
        div { class: "bg-base-100 min-h-screen flex flex-col justify-center items-center px-4 gap-6",
            h1 { class: "text-4xl font-extrabold text-base-content text-center", "Welcome" }
            p { class: "text-base-content opacity-80 text-center max-w-md",
                "Create a new wallet or restore one you already have with its recovery phrase."
            }
            div { class: "flex flex-col w-full max-w-sm gap-4",
                Link { class: "btn btn-primary", to: create, "Create a new wallet" }
                Link { class: "btn btn-outline", to: Route::ImportWalletPage {}, "I already have a wallet" }
            }
            Link { class: "link text-sm opacity-70", to: Route::PrivacyPolicyPage {}, "Privacy policy" }
        }
    }
}
