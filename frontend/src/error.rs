use std::sync::Arc;

#[derive(Debug, thiserror::Error, Clone)]
pub enum Error {
    #[error(transparent)]
    GlooNet(#[from] Arc<gloo::net::Error>),
    #[error(transparent)]
    Http(#[from] Http),
    #[error(transparent)]
    Json(#[from] Arc<serde_json::Error>),
    #[error(transparent)]
    Url(#[from] url::ParseError),
    #[error("\"{0}\" is not a valid path segment")]
    Segment(String),
}

#[derive(Debug, thiserror::Error, Clone)]
#[error("{code} {text}")]
pub struct Http {
    pub code: u16,
    pub text: String,
}

impl Error {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Http(Http { code: 401, .. }))
    }
}

impl From<gloo::net::Error> for Error {
    fn from(value: gloo::net::Error) -> Self {
        Arc::new(value).into()
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Arc::new(value).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_unauthorized() {
        assert!(Error::from(Http { code: 401, text: "expired".into() }).is_unauthorized());
        assert!(!Error::from(Http { code: 500, text: "boom".into() }).is_unauthorized());
        assert!(!Error::from(url::ParseError::EmptyHost).is_unauthorized());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Error::from(Http { code: 404, text: "missing".into() }).to_string(),
            "404 missing"
        );
    }
}
