use dioxus::prelude::*;
use url::Url;
use wallet_types::listing::ListingItem;

use super::Loading;
use crate::providers::{AuthContext, QueryClient};

/// Returns `link` only when it is an absolute `http` or `https` URL.
pub fn external_link(link: &str) -> Option<&str> {
    let url = Url::parse(link).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(link)
}

/// Table of [`ListingItem`]s served by `path`.
#[component]
pub fn Listing(path: &'static str, empty: &'static str) -> Element {
    let client = QueryClient::use_client();
    let auth = AuthContext::use_auth();

    let items = use_resource(move || {
        let session = auth.session();
        async move { client.fetch::<Vec<ListingItem>>(path, session.as_ref()).await }
    });

    match &*items.read_unchecked() {
        Some(Ok(items)) if items.is_empty() => rsx! {
            p { class: "text-base-content opacity-70", "{empty}" }
        },
        Some(Ok(items)) => rsx! {
            ul { class: "menu bg-base-200 rounded-box w-full",
                for item in items {
                    li { key: "{item.id}",
                        div { class: "flex justify-between items-center",
                            div {
                                div { class: "font-semibold", "{item.title}" }
                                if let Some(subtitle) = &item.subtitle {
                                    div { class: "text-sm opacity-70", "{subtitle}" }
                                }
                            }
                            div { class: "flex items-center gap-4",
                                if let Some(value) = &item.value {
                                    span { class: "badge badge-primary", "{value}" }
                                }
                                if let Some(link) = item.link.as_deref().and_then(external_link) {
                                    a {
                                        class: "link link-accent",
                                        href: "{link}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        "Open"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
        Some(Err(e)) => rsx! {
            div { class: "alert alert-error", "{e}" }
        },
        None => rsx! {
            Loading {}
        },
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("https://example.com/offer?id=1", true)]
    #[case("http://example.com", true)]
    #[case("javascript:alert(1)", false)]
    #[case("JavaScript:alert(document.cookie)", false)]
    #[case("data:text/html,<script>alert(1)</script>", false)]
    #[case("/relative/path", false)]
    #[case("//example.com", false)]
    #[case("ftp://example.com/file", false)]
    fn test_external_link(#[case] link: &str, #[case] allowed: bool) {
        assert_eq!(external_link(link), allowed.then_some(link));
    }
}
