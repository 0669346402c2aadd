//! Data-fetching client shared by every screen.
//!
//! Reads go through [`QueryClient::fetch`], which serves repeated reads of the same path from
//! an in-memory [`QueryCache`]. Writes go through [`QueryClient::mutate`], which drops every
//! cached entry under the written path's top-level segment.

use std::collections::HashMap;

use dioxus::prelude::*;
use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;
use wallet_types::auth::Session;

use crate::error::{Error, Http};

const AUTHORIZATION: &str = "Authorization";
const SEGMENT_BASE: &str = "http://segments.invalid/";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryCache {
    entries: HashMap<String, String>,
}

impl QueryCache {
    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    pub fn insert(&mut self, path: &str, body: String) {
        self.entries.insert(path.to_owned(), body);
    }

    /// Removes `prefix` itself and every path nested below it.
    pub fn invalidate(&mut self, prefix: &str) -> usize {
        let prefix = prefix.trim_end_matches('/');
        let before = self.entries.len();
        self.entries.retain(|path, _| {
            !(path == prefix
                || path.strip_prefix(prefix).is_some_and(|rest| rest.starts_with('/')))
        });
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn scope(path: &str) -> &str {
    path.trim_start_matches('/').split(['/', '?']).next().unwrap_or_default()
}

/// Joins `segments` into a relative request path. Each segment stays a single path segment:
/// `/`, `?`, `#` and `%` are percent-encoded and dot segments are refused.
pub fn resource_path(segments: &[&str]) -> Result<String, Error> {
    if let Some(segment) = segments.iter().find(|segment| matches!(**segment, "" | "." | "..")) {
        return Err(Error::Segment((*segment).to_owned()));
    }

    let mut url = Url::parse(SEGMENT_BASE)?;
    url.path_segments_mut()
        .map_err(|_| Error::Segment(SEGMENT_BASE.to_owned()))?
        .clear()
        .extend(segments);
    Ok(url.path().trim_start_matches('/').to_owned())
}

#[derive(Clone, Copy)]
pub struct QueryClient {
    base: Signal<Url>,
    cache: Signal<QueryCache>,
}

impl QueryClient {
    pub fn use_client() -> Self {
        use_context()
    }

    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base.peek().join(path.trim_start_matches('/'))?)
    }

    fn authorize(builder: RequestBuilder, session: Option<&Session>) -> RequestBuilder {
        match session {
            Some(session) => builder.header(AUTHORIZATION, &session.bearer()),
            None => builder,
        }
    }

    async fn receive(response: Response) -> Result<String, Error> {
        let code = response.status();
        let ok = response.ok();
        let text = response.text().await?;
        if ok { Ok(text) } else { Err(Http { code, text }.into()) }
    }

    /// Uncached GET.
    pub async fn get<T: DeserializeOwned>(
        self,
        path: &str,
        session: Option<&Session>,
    ) -> Result<T, Error> {
        let body = self.get_raw(path, session).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_raw(self, path: &str, session: Option<&Session>) -> Result<String, Error> {
        let url = self.url(path)?;
        tracing::debug!(%url, "fetch");
        let response = Self::authorize(Request::get(url.as_str()), session).send().await?;
        Self::receive(response).await
    }

    pub async fn fetch<T: DeserializeOwned>(
        mut self,
        path: &str,
        session: Option<&Session>,
    ) -> Result<T, Error> {
        let cached = self.cache.peek().get(path).map(str::to_owned);
        let body = if let Some(body) = cached {
            tracing::debug!(path, "query cache hit");
            body
        } else {
            let body = self.get_raw(path, session).await?;
            self.cache.write().insert(path, body.clone());
            body
        };
        Ok(serde_json::from_str(&body)?)
    }

    /// Cached GET of a path built from untrusted segments, see [`resource_path`].
    pub async fn fetch_at<T: DeserializeOwned>(
        self,
        segments: &[&str],
        session: Option<&Session>,
    ) -> Result<T, Error> {
        let path = resource_path(segments)?;
        self.fetch(&path, session).await
    }

    pub async fn mutate<B: Serialize, T: DeserializeOwned>(
        mut self,
        path: &str,
        body: &B,
        session: Option<&Session>,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        tracing::debug!(%url, "mutate");
        let response =
            Self::authorize(Request::post(url.as_str()), session).json(body)?.send().await?;
        let text = Self::receive(response).await?;
        self.invalidate(scope(path));
        Ok(serde_json::from_str(&text)?)
    }

    pub fn invalidate(&mut self, prefix: &str) {
        let removed = self.cache.write().invalidate(prefix);
        tracing::debug!(prefix, removed, "query cache invalidated");
    }

    pub fn clear(&mut self) {
        self.cache.write().clear();
    }
}

#[component]
pub fn QueryClientProvider(api_url: Url, children: Element) -> Element {
    let base = use_signal(|| api_url.clone());
    let cache = use_signal(QueryCache::default);
    use_context_provider(|| {
        tracing::debug!(%api_url, "query client ready");
        QueryClient { base, cache }
    });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn cache(paths: &[&str]) -> QueryCache {
        let mut cache = QueryCache::default();
        for path in paths {
            cache.insert(path, format!("\"{path}\""));
        }
        cache
    }

    #[test]
    fn test_get_insert() {
        let mut cache = QueryCache::default();
        assert!(cache.get("assets").is_none());
        cache.insert("assets", "[]".into());
        assert_eq!(cache.get("assets"), Some("[]"));
        cache.insert("assets", "[1]".into());
        assert_eq!(cache.get("assets"), Some("[1]"));
        assert_eq!(cache.len(), 1);
    }

    #[rstest]
    #[case("assets", 3, &["assetsx", "pools"])]
    #[case("assets/", 3, &["assetsx", "pools"])]
    #[case("assets/btc", 1, &["assets", "assets/eth/transactions", "assetsx", "pools"])]
    #[case("markets", 0, &["assets", "assets/btc", "assets/eth/transactions", "assetsx", "pools"])]
    fn test_invalidate(#[case] prefix: &str, #[case] removed: usize, #[case] left: &[&str]) {
        let mut cache =
            cache(&["assets", "assets/btc", "assets/eth/transactions", "assetsx", "pools"]);
        assert_eq!(cache.invalidate(prefix), removed);
        let mut remaining = cache.entries.keys().map(String::as_str).collect::<Vec<_>>();
        remaining.sort_unstable();
        assert_eq!(remaining, left);
    }

    #[test]
    fn test_clear() {
        let mut cache = cache(&["assets", "pools"]);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[rstest]
    #[case(&["assets", "eth", "transactions"], "assets/eth/transactions")]
    #[case(&["assets", "a?x=1", "transactions"], "assets/a%3Fx=1/transactions")]
    #[case(&["markets", "../../auth/session"], "markets/..%2F..%2Fauth%2Fsession")]
    #[case(&["markets", "btc#top"], "markets/btc%23top")]
    #[case(&["markets", "%2e%2e"], "markets/%252e%252e")]
    fn test_resource_path(#[case] segments: &[&str], #[case] expected: &str) {
        let path = resource_path(segments).unwrap();
        assert_eq!(path, expected);

        let url = Url::parse("http://localhost:8080/api/").unwrap().join(&path).unwrap();
        assert_eq!(url.as_str(), format!("http://localhost:8080/api/{expected}"));
        assert!(url.query().is_none());
        assert!(url.fragment().is_none());
    }

    #[rstest]
    #[case(&["markets", ".."])]
    #[case(&["markets", "."])]
    #[case(&["assets", "", "address"])]
    fn test_resource_path_refuses_dot_segments(#[case] segments: &[&str]) {
        assert!(matches!(resource_path(segments), Err(Error::Segment(_))));
    }

    #[rstest]
    #[case("transactions/send", "transactions")]
    #[case("/fiat/sell", "fiat")]
    #[case("swap", "swap")]
    #[case("assets?page=2", "assets")]
    #[case("", "")]
    fn test_scope(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(scope(path), expected);
    }
}
