use dioxus::prelude::*;

#[component]
pub fn ScreenFrame(
    title: &'static str,
    subtitle: Option<&'static str>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "w-full max-w-4xl mx-auto px-4 py-8",
            h1 { class: "text-base-content text-3xl font-extrabold", "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "text-base-content opacity-70 mt-2", "{subtitle}" }
            }
            div { class: "mt-6", {children} }
        }
    }
}
