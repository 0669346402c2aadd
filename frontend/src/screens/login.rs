use anyhow::Result;
use dioxus::prelude::*;
use wallet_types::auth::{LoginParams, Session};

use crate::components::{require, Field, Toast};
use crate::providers::{AuthContext, AuthStatus, QueryClient};
use crate::route::Route;

pub const MIN_PASSWORD_LEN: usize = 8;

pub fn credentials(email: &str, password: &str) -> Result<LoginParams> {
    let email = require("Email", email)?;
    if !email.contains('@') {
        anyhow::bail!("Email is not valid");
    }
    if password.len() < MIN_PASSWORD_LEN {
        anyhow::bail!("Password must have at least {MIN_PASSWORD_LEN} characters");
    }
    Ok(LoginParams { email, password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> Element {
    let nav = navigator();
    let client = QueryClient::use_client();
    let mut auth = AuthContext::use_auth();

    let email = use_signal(String::default);
    let password = use_signal(String::default);
    let mut submitting = use_signal(bool::default);

    if matches!(auth.status(), AuthStatus::SignedIn(_)) {
        nav.replace(Route::Dashboard {});
    }

    let onclick = move |_: Event<MouseData>| {
        let Some(params) = credentials(&email(), &password()).toast() else {
            return;
        };
        submitting.set(true);
        spawn(async move {
            if let Some(session) =
                client.mutate::<_, Session>("auth/login", &params, None).await.toast()
            {
                auth.sign_in(session);
                nav.replace(auth.take_return_to());
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "bg-base-100 min-h-screen flex flex-col justify-center py-12 px-4 lg:px-8",
            div { class: "sm:mx-auto sm:w-full sm:max-w-md",
                h2 { class: "text-base-content mt-6 text-center text-3xl leading-9 font-extrabold",
                    "Log in"
                }
            }
            div { class: "mt-8 sm:mx-auto sm:w-full sm:max-w-md",
                div { class: "bg-base-200 rounded-box py-8 px-6 shadow",
                    div { class: "form-control",
                        Field { label: "Email", value: email, kind: "email", autocomplete: "email" }
                        Field {
                            label: "Password",
                            value: password,
                            kind: "password",
                            autocomplete: "current-password"
                        }
                        button {
                            class: "btn btn-primary mt-8",
                            disabled: submitting(),
                            onclick,
                            "Log in"
                        }
                    }
                    div { class: "mt-4 text-center text-sm",
                        "No wallet yet? "
                        Link { class: "link link-primary", to: Route::WelcomeScreen {}, "Create one" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use fake::faker::internet::en::{Password, SafeEmail};
    use fake::Fake;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_credentials() {
        let email: String = SafeEmail().fake();
        let password: String = Password(MIN_PASSWORD_LEN..32).fake();
        let params = credentials(&format!(" {email} "), &password).unwrap();
        assert_eq!(params, LoginParams { email, password });
    }

    #[rstest]
    #[case("", "password123")]
    #[case("not-an-email", "password123")]
    #[case("satoshi@example.com", "short")]
    fn test_credentials_invalid(#[case] email: &str, #[case] password: &str) {
        assert!(credentials(email, password).is_err());
    }
}
