use dioxus::prelude::*;
use wallet_types::mnemonic::CHALLENGE_SIZE;

use crate::components::{notify, Level, Toast};
use crate::providers::WalletContext;
use crate::route::Route;

#[component]
pub fn VerifySeedPage() -> Element {
    let nav = navigator();
    let mut wallet = WalletContext::use_wallet();
    let mut answers = use_signal(|| vec![String::default(); CHALLENGE_SIZE]);

    let Some(backup) = wallet.pending() else {
        return rsx! {
            div { class: "bg-base-100 min-h-screen flex flex-col justify-center items-center gap-4 px-4",
                p { class: "text-base-content", "There is no recovery phrase to verify." }
                Link { class: "btn btn-primary", to: Route::WelcomeScreen {}, "Start over" }
            }
        };
    };

    let numbers = backup.challenge.iter().map(|position| position + 1).collect::<Vec<_>>();

    let onclick = move |_: Event<MouseData>| {
        if let Some(created) = wallet.confirm_backup(answers.read().as_slice()).toast() {
            notify(Level::Success, format!("{} is ready", created.name));
            nav.replace(Route::Dashboard {});
        }
    };

    rsx! {
        div { class: "bg-base-100 min-h-screen flex flex-col justify-center py-12 px-4 lg:px-8",
            div { class: "sm:mx-auto sm:w-full sm:max-w-md",
                h2 { class: "text-base-content mt-6 text-center text-3xl leading-9 font-extrabold",
                    "Verify your recovery phrase"
                }
                p { class: "text-base-content opacity-70 text-center mt-2",
                    "Enter the requested words from your phrase."
                }
            }
            div { class: "mt-8 sm:mx-auto sm:w-full sm:max-w-md",
                div { class: "bg-base-200 rounded-box py-8 px-6 shadow",
                    div { class: "form-control",
                        for (slot , number) in numbers.into_iter().enumerate() {
                            div { key: "{number}",
                                div { class: "label",
                                    span { class: "label-text", "Word #{number}" }
                                }
                                input {
                                    class: "input input-bordered w-full font-mono",
                                    autocomplete: "off",
                                    value: answers.read().get(slot).cloned().unwrap_or_default(),
                                    oninput: move |e| {
                                        if let Some(answer) = answers.write().get_mut(slot) {
                                            *answer = e.value();
                                        }
                                    }
                                }
                            }
                        }
                        button { class: "btn btn-primary mt-8", onclick, "Verify" }
                    }
                    div { class: "mt-4 text-center text-sm",
                        Link { class: "link", to: Route::SeedPhrasePage {}, "Show a new phrase" }
                    }
                }
            }
        }
    }
}
