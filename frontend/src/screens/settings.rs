use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::components::ScreenFrame;
use crate::providers::{AuthContext, TooltipContext, WalletContext};
use crate::route::Route;
use crate::state::Theme;
use crate::utils::time::format_datetime;

#[component]
pub fn SettingsPage() -> Element {
    let nav = navigator();
    let mut auth = AuthContext::use_auth();
    let mut wallet = WalletContext::use_wallet();
    let mut tooltip = TooltipContext::use_tooltip();
    let mut theme = Theme::use_theme();

    let email = auth.session().map(|session| session.email).unwrap_or_default();
    let tooltips = tooltip.config().enabled;
    let active = wallet.active().map(|active| active.id);
    let wallets = wallet.wallets();

    rsx! {
        ScreenFrame { title: "Settings",
            div { class: "flex flex-col gap-8",
                section {
                    h2 { class: "text-xl font-semibold mb-2", "Account" }
                    p { class: "opacity-80", "{email}" }
                    button {
                        class: "btn btn-outline btn-error mt-4",
                        onclick: move |_| {
                            nav.replace(Route::WelcomeScreen {});
                            auth.sign_out();
                        },
                        "Log out"
                    }
                }
                section {
                    h2 { class: "text-xl font-semibold mb-2", "Appearance" }
                    div { class: "join",
                        for t in Theme::iter() {
                            button {
                                key: "{t.as_ref()}",
                                class: "btn join-item",
                                "data-theme": "{t.as_ref()}",
                                disabled: t == theme(),
                                onclick: move |_| theme.set(t),
                                "{t.as_ref()}"
                            }
                        }
                    }
                    label { class: "label cursor-pointer justify-start gap-4 mt-4",
                        input {
                            r#type: "checkbox",
                            class: "toggle toggle-primary",
                            checked: tooltips,
                            onclick: move |_| tooltip.set_enabled(!tooltips)
                        }
                        span { class: "label-text", "Show hints on hover" }
                    }
                }
                section {
                    h2 { class: "text-xl font-semibold mb-2", "Wallets" }
                    if wallets.is_empty() {
                        p { class: "opacity-70", "No wallet on this device yet." }
                    } else {
                        table { class: "table",
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Fingerprint" }
                                    th { "Origin" }
                                    th { "Added at" }
                                    th {}
                                }
                            }
                            tbody {
                                for w in wallets {
                                    tr { key: "{w.id}",
                                        td { "{w.name}" }
                                        td { class: "font-mono", "{w.fingerprint}" }
                                        td { "{w.origin.as_ref()}" }
                                        td { "{format_datetime(w.created_at)}" }
                                        td {
                                            button {
                                                class: "btn btn-xs",
                                                disabled: active == Some(w.id),
                                                onclick: move |_| {
                                                    wallet.select(w.id);
                                                },
                                                "Use"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    div { class: "flex gap-2 mt-4",
                        Link { class: "btn btn-sm", to: Route::SeedPhrasePage {}, "Create wallet" }
                        Link { class: "btn btn-sm", to: Route::ImportWalletPage {}, "Import wallet" }
                    }
                }
                section {
                    Link { class: "link", to: Route::PrivacyPolicyPage {}, "Privacy policy" }
                }
            }
        }
    }
}
