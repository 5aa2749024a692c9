use reqwest::Url;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::error::FetchError;
use crate::fetch::auth::UrlParam;
use crate::fetch::{BasicClient, HttpClient, fetch_text};
use crate::parser::parse_payload;
use crate::services::feed_api::FeedApi;

pub const DEFAULT_BASE_URL: &str = "https://api.waqi.info";

/// Client for the World Air Quality Index city feed endpoint.
pub struct WaqiClient<C> {
    base_url: String,
    http: C,
}

impl WaqiClient<UrlParam<BasicClient>> {
    /// Token-authenticated client with a hard per-request timeout.
    pub fn new(base_url: &str, token: String, timeout: Duration) -> anyhow::Result<Self> {
        let http = UrlParam::token(BasicClient::new(timeout)?, token);
        Ok(Self::with_client(base_url, http))
    }
}

impl<C: HttpClient> WaqiClient<C> {
    pub fn with_client(base_url: &str, http: C) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    /// `<base>/feed/<feed_path>/`. The path is inserted verbatim, so callers
    /// pass already-escaped identifiers such as `sao%20paulo`.
    pub fn feed_url(&self, feed_path: &str) -> Result<Url, FetchError> {
        let raw = format!("{}/feed/{}/", self.base_url, feed_path);
        Url::parse(&raw).map_err(|e| FetchError::Url(format!("{raw}: {e}")))
    }
}

impl<C: HttpClient> FeedApi for WaqiClient<C> {
    fn fetch_feed(&self, feed_path: &str) -> Result<Value, FetchError> {
        let url = self.feed_url(feed_path)?;
        debug!(url = %url, "Requesting WAQI feed");

        let body = fetch_text(&self.http, url)?;
        debug!(bytes = body.len(), "WAQI response received");

        parse_payload(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::testing::Unused;

    #[test]
    fn test_feed_url_keeps_escaped_path() {
        let client = WaqiClient::with_client(DEFAULT_BASE_URL, Unused);
        let url = client.feed_url("sao%20paulo").unwrap();
        assert_eq!(url.as_str(), "https://api.waqi.info/feed/sao%20paulo/");
    }

    #[test]
    fn test_feed_url_trims_trailing_slash() {
        let client = WaqiClient::with_client("http://localhost:8080/", Unused);
        let url = client.feed_url("montreal").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/feed/montreal/");
    }

    #[test]
    fn test_feed_url_rejects_bad_base() {
        let client = WaqiClient::with_client("not a url", Unused);
        let err = client.feed_url("seattle").unwrap_err();
        assert!(matches!(err, FetchError::Url(_)));
    }
}
