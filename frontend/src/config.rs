use url::Url;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("WALLET_API_URL is not a valid url: {0}")]
    ApiUrl(#[from] url::ParseError),
    #[error("WALLET_API_URL must be http or https, got {0}")]
    Scheme(String),
    #[error("WALLET_NOTICE_MS is not a positive number: {0}")]
    NoticeDuration(String),
}

/// Build time settings, baked in from the environment of the `dx build` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: Url,
    pub notice_ms: u32,
}

impl Config {
    pub const DEFAULT_API_URL: &'static str = "http://localhost:8080/api/";
    pub const DEFAULT_NOTICE_MS: u32 = 4000;

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::parse(option_env!("WALLET_API_URL"), option_env!("WALLET_NOTICE_MS"))
    }

    pub fn parse(api_url: Option<&str>, notice_ms: Option<&str>) -> Result<Self, ConfigError> {
        let mut api_url = Url::parse(api_url.unwrap_or(Self::DEFAULT_API_URL))?;
        if !matches!(api_url.scheme(), "http" | "https") {
            return Err(ConfigError::Scheme(api_url.scheme().to_owned()));
        }
        // `Url::join` replaces the last segment unless the base ends with a slash.
        if !api_url.path().ends_with('/') {
            let path = concat_string::concat_string!(api_url.path(), "/");
            api_url.set_path(&path);
        }

        let notice_ms = match notice_ms {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or_else(|| ConfigError::NoticeDuration(raw.to_owned()))?,
            None => Self::DEFAULT_NOTICE_MS,
        };

        Ok(Self { api_url, notice_ms })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: Url::parse(Self::DEFAULT_API_URL).expect("default api url is valid"),
            notice_ms: Self::DEFAULT_NOTICE_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(Config::parse(None, None).unwrap(), Config::default());
    }

    #[rstest]
    #[case("https://wallet.example/api", "https://wallet.example/api/")]
    #[case("https://wallet.example/api/", "https://wallet.example/api/")]
    #[case("http://127.0.0.1:3000", "http://127.0.0.1:3000/")]
    fn test_api_url_trailing_slash(#[case] raw: &str, #[case] expected: &str) {
        let config = Config::parse(Some(raw), None).unwrap();
        assert_eq!(config.api_url.as_str(), expected);
        assert_eq!(
            config.api_url.join("assets").unwrap().as_str(),
            concat_string::concat_string!(expected, "assets")
        );
    }

    #[rstest]
    #[case(Some("not a url"), None)]
    #[case(Some("ftp://wallet.example/"), None)]
    #[case(None, Some("0"))]
    #[case(None, Some("soon"))]
    fn test_invalid(#[case] api_url: Option<&str>, #[case] notice_ms: Option<&str>) {
        assert!(Config::parse(api_url, notice_ms).is_err());
    }

    #[test]
    fn test_notice_ms() {
        assert_eq!(Config::parse(None, Some("1500")).unwrap().notice_ms, 1500);
    }
}
