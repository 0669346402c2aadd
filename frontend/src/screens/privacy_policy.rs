use dioxus::prelude::*;

use crate::components::ScreenFrame;
use crate::route::Route;

const SECTIONS: &[(&str, &str)] = &[
    (
        "Your recovery phrase",
        "Recovery phrases are generated and checked on your device. They are never sent to our \
         servers and never written to storage; only a short fingerprint is kept to tell your \
         wallets apart.",
    ),
    (
        "Account data",
        "We store the email address you sign up with and the sessions issued to it. Sessions \
         expire and can be ended at any time by logging out.",
    ),
    (
        "Market and directory data",
        "Prices, pools, proposals and partner listings are fetched from our API when you open a \
         screen and are kept in memory only while the app is open.",
    ),
    (
        "Preferences",
        "Your theme and hint settings are saved in your browser's local storage.",
    ),
];

#[component]
pub fn PrivacyPolicyPage() -> Element {
    let title = Route::PrivacyPolicyPage {}.title();

    rsx! {
        ScreenFrame { title,
            for (heading, body) in SECTIONS {
                section { key: "{heading}", class: "mb-6",
                    h2 { class: "text-xl font-semibold text-base-content", "{heading}" }
                    p { class: "mt-2 text-base-content opacity-80", "{body}" }
                }
            }
            Link { class: "btn btn-ghost", to: Route::Index {}, "Back" }
        }
    }
}
