use dioxus::prelude::*;
use dioxus_sdk::storage::{use_synced_storage, LocalStorage};
use time::OffsetDateTime;
use wallet_types::auth::{Session, SessionInfo};

use super::QueryClient;
use crate::route::Route;

const SESSION_KEY: &str = "wallet-session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStatus {
    /// A stored session exists and is being checked against the backend.
    Restoring(Session),
    SignedOut,
    SignedIn(Session),
}

impl AuthStatus {
    pub fn initial(stored: Option<Session>, now: OffsetDateTime) -> Self {
        match stored {
            Some(session) if !session.is_expired(now) => Self::Restoring(session),
            _ => Self::SignedOut,
        }
    }

    /// Outcome of checking a restored session with `auth/session`.
    pub fn restored(session: Session, result: Result<SessionInfo, crate::Error>) -> Self {
        match result {
            Ok(_) => Self::SignedIn(session),
            Err(error) if error.is_unauthorized() => Self::SignedOut,
            Err(error) => {
                tracing::warn!(%error, "could not verify stored session, keeping it");
                Self::SignedIn(session)
            }
        }
    }

    /// Applies the outcome of checking `checked` only while that same session is still being
    /// restored. A sign-in or sign-out that happened meanwhile wins.
    pub fn settle(&self, checked: &Session, outcome: AuthStatus) -> Option<AuthStatus> {
        match self {
            Self::Restoring(session) if session == checked => Some(outcome),
            _ => None,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Restoring(session) | Self::SignedIn(session) => Some(session),
            Self::SignedOut => None,
        }
    }
}

#[derive(Clone, Copy)]
pub struct AuthContext {
    client: QueryClient,
    stored: Signal<Option<Session>>,
    status: Signal<AuthStatus>,
    return_to: Signal<Option<Route>>,
}

impl AuthContext {
    pub fn use_auth() -> Self {
        use_context()
    }

    pub fn status(&self) -> AuthStatus {
        AuthStatus::clone(&self.status.read())
    }

    pub fn session(&self) -> Option<Session> {
        self.status.read().session().cloned()
    }

    pub fn sign_in(&mut self, session: Session) {
        tracing::info!(email = %session.email, "signed in");
        self.stored.set(Some(session.clone()));
        self.status.set(AuthStatus::SignedIn(session));
    }

    pub fn sign_out(&mut self) {
        tracing::info!("signed out");
        self.stored.set(None);
        self.status.set(AuthStatus::SignedOut);
        self.client.clear();
    }

    /// Route to come back to once a login succeeds.
    pub fn remember(&mut self, route: Route) {
        *self.return_to.write() = Some(route);
    }

    pub fn take_return_to(&mut self) -> Route {
        self.return_to.write().take().unwrap_or(Route::Dashboard {})
    }

    #[cfg(test)]
    pub fn return_to(&self) -> Option<Route> {
        Option::clone(&self.return_to.read())
    }

    /// Context pinned to `status`, without storage or a restore request.
    #[cfg(test)]
    pub fn use_fixed(status: AuthStatus) -> Self {
        let client = QueryClient::use_client();
        let stored = use_signal(|| status.session().cloned());
        let status = use_signal(move || status);
        let return_to = use_signal(Option::default);
        use_context_provider(|| AuthContext { client, stored, status, return_to })
    }
}

#[component]
pub fn AuthProvider(children: Element) -> Element {
    let client = QueryClient::use_client();
    let stored =
        use_synced_storage::<LocalStorage, Option<Session>>(SESSION_KEY.into(), Option::default);
    let status = use_signal(|| {
        AuthStatus::initial(Option::clone(&stored.peek()), OffsetDateTime::now_utc())
    });
    let return_to = use_signal(Option::default);
    let mut auth = use_context_provider(|| {
        tracing::debug!(
            restoring = matches!(*status.peek(), AuthStatus::Restoring(_)),
            "auth provider ready"
        );
        AuthContext { client, stored, status, return_to }
    });

    use_future(move || async move {
        let status = AuthStatus::clone(&auth.status.peek());
        match status {
            AuthStatus::Restoring(session) => {
                let result = client.get::<SessionInfo>("auth/session", Some(&session)).await;
                let outcome = AuthStatus::restored(session.clone(), result);
                let current = AuthStatus::clone(&auth.status.peek());
                match current.settle(&session, outcome) {
                    Some(AuthStatus::SignedIn(session)) => {
                        auth.status.set(AuthStatus::SignedIn(session))
                    }
                    Some(_) => auth.sign_out(),
                    None => tracing::debug!("auth changed while restoring, dropping result"),
                }
            }
            AuthStatus::SignedOut if auth.stored.peek().is_some() => auth.sign_out(),
            _ => {}
        }
    });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use fake::faker::internet::en::SafeEmail;
    use fake::Fake;
    use rstest::rstest;
    use time::Duration;

    use super::*;
    use crate::error::Http;

    fn session(expires_at: OffsetDateTime) -> Session {
        Session { email: SafeEmail().fake(), token: "token".into(), expires_at }
    }

    #[test]
    fn test_initial_without_session() {
        assert_eq!(AuthStatus::initial(None, OffsetDateTime::now_utc()), AuthStatus::SignedOut);
    }

    #[test]
    fn test_initial_with_expired_session() {
        let now = OffsetDateTime::now_utc();
        let expired = session(now - Duration::hours(1));
        assert_eq!(AuthStatus::initial(Some(expired), now), AuthStatus::SignedOut);
    }

    #[test]
    fn test_initial_with_valid_session() {
        let now = OffsetDateTime::now_utc();
        let valid = session(now + Duration::hours(1));
        assert_eq!(AuthStatus::initial(Some(valid.clone()), now), AuthStatus::Restoring(valid));
    }

    #[test]
    fn test_restored() {
        let session = session(OffsetDateTime::now_utc() + Duration::hours(1));
        let info = SessionInfo { email: session.email.clone() };

        assert_eq!(
            AuthStatus::restored(session.clone(), Ok(info)),
            AuthStatus::SignedIn(session.clone())
        );
        assert_eq!(
            AuthStatus::restored(
                session.clone(),
                Err(Http { code: 401, text: "expired".into() }.into())
            ),
            AuthStatus::SignedOut
        );
        assert_eq!(
            AuthStatus::restored(
                session.clone(),
                Err(Http { code: 503, text: "unavailable".into() }.into())
            ),
            AuthStatus::SignedIn(session)
        );
    }

    #[test]
    fn test_settle_while_restoring() {
        let session = session(OffsetDateTime::now_utc() + Duration::hours(1));
        let restoring = AuthStatus::Restoring(session.clone());

        assert_eq!(
            restoring.settle(&session, AuthStatus::SignedIn(session.clone())),
            Some(AuthStatus::SignedIn(session.clone()))
        );
        assert_eq!(
            restoring.settle(&session, AuthStatus::SignedOut),
            Some(AuthStatus::SignedOut)
        );
    }

    #[rstest]
    #[case::signed_in_meanwhile(AuthStatus::SignedIn(
        Session { token: "fresh".into(), ..session(OffsetDateTime::now_utc() + Duration::hours(2)) }
    ))]
    #[case::signed_out_meanwhile(AuthStatus::SignedOut)]
    #[case::other_session_restoring(AuthStatus::Restoring(
        Session { token: "other".into(), ..session(OffsetDateTime::now_utc() + Duration::hours(2)) }
    ))]
    fn test_settle_ignores_stale_result(#[case] current: AuthStatus) {
        let checked = session(OffsetDateTime::now_utc() + Duration::hours(1));
        assert_eq!(current.settle(&checked, AuthStatus::SignedOut), None);
        assert_eq!(current.settle(&checked, AuthStatus::SignedIn(checked.clone())), None);
    }

    #[test]
    fn test_session_accessor() {
        let session = session(OffsetDateTime::now_utc());
        assert_eq!(AuthStatus::Restoring(session.clone()).session(), Some(&session));
        assert_eq!(AuthStatus::SignedIn(session.clone()).session(), Some(&session));
        assert_eq!(AuthStatus::SignedOut.session(), None);
    }
}
