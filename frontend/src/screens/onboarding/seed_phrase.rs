use dioxus::prelude::*;

use crate::providers::{AuthContext, AuthStatus, WalletContext};
use crate::route::Route;

#[component]
pub fn SeedPhrasePage() -> Element {
    let nav = navigator();
    let auth = AuthContext::use_auth();
    let mut wallet = WalletContext::use_wallet();
    let mut acknowledged = use_signal(bool::default);

    // Survive a re-render but start over on a fresh visit. No phrase is generated for a
    // signed-out visitor.
    let signed_in = matches!(auth.status(), AuthStatus::SignedIn(_));
    let backup = use_hook(move || signed_in.then(|| wallet.begin_backup()));
    let Some(backup) = backup.filter(|_| signed_in) else {
        nav.replace(Route::EmailSignupPage {});
        return None;
    };
    let words = backup.mnemonic.words().to_vec();

    rsx! {
        div { class: "bg-base-100 min-h-screen flex flex-col items-center py-12 px-4 gap-6",
            h1 { class: "text-3xl font-extrabold text-base-content", "Your recovery phrase" }
            div { class: "alert alert-warning max-w-xl",
                "Write these words down in order and keep them offline. "
                "Anyone with them controls your wallet. They will not be shown again."
            }
            ol { class: "grid grid-cols-2 sm:grid-cols-3 gap-3 w-full max-w-xl",
                for (number , word) in (1..).zip(words) {
                    li { key: "{number}", class: "bg-base-200 rounded-box px-4 py-2 font-mono",
                        span { class: "opacity-50 mr-2", "{number}." }
                        "{word}"
                    }
                }
            }
            label { class: "label cursor-pointer gap-4",
                input {
                    r#type: "checkbox",
                    class: "checkbox checkbox-primary",
                    checked: acknowledged(),
                    onclick: move |_| acknowledged.set(!acknowledged())
                }
                span { class: "label-text", "I have written down my recovery phrase" }
            }
            button {
                class: "btn btn-primary w-full max-w-sm",
                disabled: !acknowledged(),
                onclick: move |_| {
                    nav.push(Route::VerifySeedPage {});
                },
                "Continue"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use time::{Duration, OffsetDateTime};
    use wallet_types::auth::Session;

    use super::*;
    use crate::testing::render;

    #[test]
    fn test_signed_out_generates_no_phrase() {
        let html = render(Route::SeedPhrasePage {}, AuthStatus::SignedOut);
        assert!(!html.contains("Your recovery phrase"), "{html}");
        assert!(!html.contains("pending-backup"), "{html}");
    }

    #[test]
    fn test_signed_in_shows_pending_phrase() {
        let session = Session {
            email: "satoshi@example.com".into(),
            token: "token".into(),
            expires_at: OffsetDateTime::now_utc() + Duration::hours(1),
        };
        let html = render(Route::SeedPhrasePage {}, AuthStatus::SignedIn(session));
        assert!(html.contains("Your recovery phrase"), "{html}");
        assert!(html.contains("pending-backup"), "{html}");
    }
}
