use concat_string::concat_string;
use derivative::Derivative;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// An authenticated session as issued by `auth/login` and `auth/signup`.
#[derive(Clone, Derivative, Serialize, Deserialize, PartialEq, Eq)]
#[derivative(Debug)]
pub struct Session {
    pub email: String,
    #[derivative(Debug = "ignore")]
    pub token: String,
    pub expires_at: OffsetDateTime,
}

impl Session {
    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        now >= self.expires_at
    }

    pub fn bearer(&self) -> String {
        concat_string!("Bearer ", self.token)
    }
}

#[derive(Clone, Derivative, Serialize, Deserialize, PartialEq, Eq)]
#[derivative(Debug)]
pub struct LoginParams {
    pub email: String,
    #[derivative(Debug = "ignore")]
    pub password: String,
}

pub type SignupParams = LoginParams;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionInfo {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use fake::faker::internet::en::SafeEmail;
    use fake::Fake;
    use time::Duration;

    use super::*;

    fn session(expires_at: OffsetDateTime) -> Session {
        Session { email: SafeEmail().fake(), token: "secret-token".into(), expires_at }
    }

    #[test]
    fn test_expiry() {
        let now = OffsetDateTime::now_utc();
        assert!(!session(now + Duration::hours(1)).is_expired(now));
        assert!(session(now).is_expired(now));
        assert!(session(now - Duration::minutes(1)).is_expired(now));
    }

    #[test]
    fn test_debug_hides_secrets() {
        let session = session(OffsetDateTime::now_utc());
        assert!(!format!("{session:?}").contains("secret-token"));

        let params = LoginParams { email: SafeEmail().fake(), password: "hunter22".into() };
        assert!(!format!("{params:?}").contains("hunter22"));
    }

    #[test]
    fn test_bearer() {
        assert_eq!(session(OffsetDateTime::now_utc()).bearer(), "Bearer secret-token");
    }

    #[test]
    fn test_session_serde() {
        let session = session(OffsetDateTime::now_utc().replace_nanosecond(0).unwrap());
        let json = serde_json::to_string(&session).unwrap();
        assert_eq!(serde_json::from_str::<Session>(&json).unwrap(), session);
    }
}
