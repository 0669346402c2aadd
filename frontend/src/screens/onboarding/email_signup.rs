use anyhow::Result;
use dioxus::prelude::*;
use wallet_types::auth::{Session, SignupParams};

use crate::components::{Field, Toast};
use crate::providers::{AuthContext, QueryClient};
use crate::route::Route;
use crate::screens::login::credentials;

pub fn signup(email: &str, password: &str, confirm: &str) -> Result<SignupParams> {
    let params = credentials(email, password)?;
    if password != confirm {
        anyhow::bail!("Passwords do not match");
    }
    Ok(params)
}

#[component]
pub fn EmailSignupPage() -> Element {
    let nav = navigator();
    let client = QueryClient::use_client();
    let mut auth = AuthContext::use_auth();

    let email = use_signal(String::default);
    let password = use_signal(String::default);
    let confirm = use_signal(String::default);
    let mut submitting = use_signal(bool::default);

    let onclick = move |_: Event<MouseData>| {
        let Some(params) = signup(&email(), &password(), &confirm()).toast() else {
            return;
        };
        submitting.set(true);
        spawn(async move {
            if let Some(session) =
                client.mutate::<_, Session>("auth/signup", &params, None).await.toast()
            {
                auth.sign_in(session);
                nav.push(Route::SeedPhrasePage {});
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "bg-base-100 min-h-screen flex flex-col justify-center py-12 px-4 lg:px-8",
            div { class: "sm:mx-auto sm:w-full sm:max-w-md",
                h2 { class: "text-base-content mt-6 text-center text-3xl leading-9 font-extrabold",
                    "Create your account"
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
                            autocomplete: "new-password"
                        }
                        Field {
                            label: "Confirm password",
                            value: confirm,
                            kind: "password",
                            autocomplete: "new-password"
                        }
                        button {
                            class: "btn btn-primary mt-8",
                            disabled: submitting(),
                            onclick,
                            "Continue"
                        }
                    }
                    div { class: "mt-4 text-center text-sm",
                        "Already registered? "
                        Link { class: "link link-primary", to: Route::LoginPage {}, "Log in" }
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

    use super::*;
    use crate::screens::login::MIN_PASSWORD_LEN;

    #[test]
    fn test_signup() {
        let email: String = SafeEmail().fake();
        let password: String = Password(MIN_PASSWORD_LEN..32).fake();
        let params = signup(&email, &password, &password).unwrap();
        assert_eq!(params.email, email);
        assert_eq!(params.password, password);
    }

    #[test]
    fn test_signup_mismatched_confirmation() {
        let email: String = SafeEmail().fake();
        let error = signup(&email, "password123", "password124").unwrap_err();
        assert_eq!(error.to_string(), "Passwords do not match");
    }

    #[test]
    fn test_signup_checks_credentials_first() {
        let error = signup("satoshi@example.com", "short", "other").unwrap_err();
        assert_eq!(
            error.to_string(),
            format!("Password must have at least {MIN_PASSWORD_LEN} characters")
        );
    }
}
