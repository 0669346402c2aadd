use dioxus::prelude::*;
use itertools::Itertools;

use crate::route::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.iter().join("/");
    tracing::debug!(%path, "no route matched");

    rsx! {
        div { class: "hero min-h-screen bg-base-200",
            div { class: "hero-content text-center",
                div { class: "max-w-md",
                    h1 { class: "text-6xl font-bold text-base-content", "404" }
                    p { class: "py-6 text-base-content", "Oops! /{path} does not exist." }
                    Link { class: "btn btn-primary", to: Route::Index {}, "Return to home" }
                }
            }
        }
    }
}
