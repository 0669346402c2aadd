use dioxus::prelude::*;

use super::Loading;
use crate::providers::{AuthContext, AuthStatus};
use crate::route::Route;

#[derive(Debug, Clone, PartialEq)]
pub enum Gate {
    Render,
    Wait,
    Redirect(Route),
}

pub fn gate(status: &AuthStatus) -> Gate {
    match status {
        AuthStatus::SignedIn(_) => Gate::Render,
        AuthStatus::Restoring(_) => Gate::Wait,
        AuthStatus::SignedOut => Gate::Redirect(Route::LoginPage {}),
    }
}

/// Layout wrapping every protected route. Renders nothing of the target until the auth
/// provider has settled on a signed in session.
#[component]
pub fn ProtectedRoute() -> Element {
    let mut auth = AuthContext::use_auth();
    let route = use_route::<Route>();

    match gate(&auth.status()) {
        Gate::Render => rsx! {
            Outlet::<Route> {}
        },
        Gate::Wait => rsx! {
            Loading {}
        },
        Gate::Redirect(to) => {
            tracing::debug!(%route, %to, "unauthenticated, redirecting");
            auth.remember(route);
            navigator().replace(to);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use time::{Duration, OffsetDateTime};
    use wallet_types::auth::Session;

    use super::*;
    use crate::route::{Access, Chrome};
    use crate::testing::render;

    fn session() -> Session {
        Session {
            email: "satoshi@example.com".into(),
            token: "token".into(),
            expires_at: OffsetDateTime::now_utc() + Duration::hours(1),
        }
    }

    #[test]
    fn test_signed_out_redirects_to_login() {
        let gate = gate(&AuthStatus::SignedOut);
        assert_eq!(gate, Gate::Redirect(Route::LoginPage {}));
        let Gate::Redirect(to) = gate else { unreachable!() };
        assert_eq!(to.access(), Access::Public);
        assert_eq!(to.chrome(), Chrome::None);
    }

    #[test]
    fn test_restoring_waits() {
        assert_eq!(gate(&AuthStatus::Restoring(session())), Gate::Wait);
    }

    #[test]
    fn test_signed_in_renders() {
        assert_eq!(gate(&AuthStatus::SignedIn(session())), Gate::Render);
    }

    #[rstest]
    fn test_signed_out_renders_no_protected_content(
        #[values(
            "/auth",
            "/discover",
            "/dashboard",
            "/my-assets",
            "/my-assets/btc/transactions",
            "/receive",
            "/crypto/eth",
            "/settings",
            "/send",
            "/swap",
            "/advertising-form",
            "/fiat"
        )]
        path: &str,
    ) {
        let route: Route = path.parse().unwrap();
        assert_eq!(route.access(), Access::Protected);

        let html = render(route, AuthStatus::SignedOut);
        assert!(!html.contains("<h1"), "{path}: {html}");
        assert!(!html.contains("<h2"), "{path}: {html}");
        assert!(!html.contains("navbar"), "{path}: {html}");
        assert!(html.contains(&format!("return-to:{path}")), "{path}: {html}");
    }

    #[test]
    fn test_restoring_renders_loading_only() {
        let html = render(Route::Dashboard {}, AuthStatus::Restoring(session()));
        assert!(html.contains("loading-spinner"), "{html}");
        assert!(!html.contains("navbar"), "{html}");
        assert!(!html.contains("<h1"), "{html}");
        assert!(!html.contains("return-to:/"), "{html}");
    }

    #[test]
    fn test_signed_in_renders_layout_and_screen() {
        let html = render(Route::DiscoverPage {}, AuthStatus::SignedIn(session()));
        assert!(html.contains("navbar"), "{html}");
        assert!(html.contains("Everything you can do with your wallet."), "{html}");
    }

    #[test]
    fn test_signed_in_auth_screen_has_no_layout() {
        let html = render(Route::AuthScreen {}, AuthStatus::SignedIn(session()));
        assert!(html.contains("Welcome back"), "{html}");
        assert!(!html.contains("navbar"), "{html}");
    }
}
