use dioxus::prelude::*;
use wallet_types::mnemonic::{LONG_WORD_COUNT, WORD_COUNT};

use crate::components::{notify, Level, Toast};
use crate::providers::{AuthContext, AuthStatus, WalletContext};
use crate::route::Route;

/// Where to go once a phrase is imported.
pub fn import_destination(status: &AuthStatus) -> Route {
    if matches!(status, AuthStatus::SignedIn(_)) {
        Route::Dashboard {}
    } else {
        Route::LoginPage {}
    }
}

#[component]
pub fn ImportWalletPage() -> Element {
    let nav = navigator();
    let auth = AuthContext::use_auth();
    let mut wallet = WalletContext::use_wallet();
    let mut phrase = use_signal(String::default);

    let onclick = move |_: Event<MouseData>| {
        let raw = phrase.peek().clone();
        if let Some(imported) = wallet.import(&raw).toast() {
            phrase.set(String::default());
            notify(Level::Success, format!("{} imported", imported.name));
            nav.replace(import_destination(&auth.status()));
        }
    };

    rsx! {
        div { class: "bg-base-100 min-h-screen flex flex-col justify-center py-12 px-4 lg:px-8",
            div { class: "sm:mx-auto sm:w-full sm:max-w-md",
                h2 { class: "text-base-content mt-6 text-center text-3xl leading-9 font-extrabold",
                    "Import a wallet"
                }
                p { class: "text-base-content opacity-70 text-center mt-2",
                    "Enter your {WORD_COUNT} or {LONG_WORD_COUNT} word recovery phrase, separated by spaces."
                }
            }
            div { class: "mt-8 sm:mx-auto sm:w-full sm:max-w-md",
                div { class: "bg-base-200 rounded-box py-8 px-6 shadow",
                    div { class: "form-control",
                        textarea {
                            class: "textarea textarea-bordered w-full font-mono h-32",
                            autocomplete: "off",
                            spellcheck: "false",
                            value: "{phrase}",
                            oninput: move |e| phrase.set(e.value())
                        }
                        button { class: "btn btn-primary mt-8", onclick, "Import" }
                    }
                    div { class: "mt-4 text-center text-sm",
                        Link { class: "link", to: Route::WelcomeScreen {}, "Back" }
                    }
                }
            }
        }
    }
}
