use anyhow::Result;
use dioxus::prelude::*;
use wallet_types::listing::{AdvertisingParams, Receipt};

use crate::components::{notify, require, Field, Level, ScreenFrame, Toast};
use crate::providers::{AuthContext, QueryClient};
use crate::route::Route;

pub const MAX_MESSAGE_LEN: usize = 500;

pub fn advertising(business: &str, email: &str, message: &str) -> Result<AdvertisingParams> {
    let business = require("Business name", business)?;
    let email = require("Contact email", email)?;
    if !email.contains('@') {
        anyhow::bail!("Contact email is not valid");
    }
    let message = require("Message", message)?;
    if message.chars().count() > MAX_MESSAGE_LEN {
        anyhow::bail!("Message can not be longer than {MAX_MESSAGE_LEN} characters");
    }
    Ok(AdvertisingParams { business, email, message })
}

#[component]
pub fn AdvertisingFormPage() -> Element {
    let nav = navigator();
    let client = QueryClient::use_client();
    let auth = AuthContext::use_auth();

    let business = use_signal(String::default);
    let email = use_signal(|| auth.session().map(|session| session.email).unwrap_or_default());
    let mut message = use_signal(String::default);
    let mut submitting = use_signal(bool::default);

    let onclick = move |_: Event<MouseData>| {
        let Some(params) = advertising(&business(), &email(), &message()).toast() else {
            return;
        };
        submitting.set(true);
        spawn(async move {
            let session = auth.session();
            if let Some(receipt) = client
                .mutate::<_, Receipt>("advertising", &params, session.as_ref())
                .await
                .toast()
            {
                notify(Level::Success, receipt.message);
                nav.push(Route::DiscoverPage {});
            }
            submitting.set(false);
        });
    };

    rsx! {
        ScreenFrame {
            title: "Advertise with us",
            subtitle: "Tell us about your business and we will get back to you.",
            div { class: "form-control max-w-xl",
                Field { label: "Business name", value: business, autocomplete: "organization" }
                Field { label: "Contact email", value: email, kind: "email", autocomplete: "email" }
                div { class: "label",
                    span { class: "label-text", "Message" }
                    span { class: "label-text-alt", "{message.read().chars().count()}/{MAX_MESSAGE_LEN}" }
                }
                textarea {
                    class: "textarea textarea-bordered w-full h-32",
                    value: "{message}",
                    oninput: move |e| message.set(e.value())
                }
                button { class: "btn btn-primary mt-8", disabled: submitting(), onclick, "Send" }
            }
        }
    }
}
