//! Trait for sources of per-city air-quality feeds.

use serde_json::Value;

use crate::error::FetchError;

/// Abstraction over an air-quality feed provider (e.g., WAQI).
pub trait FeedApi {
    /// Returns the `data` object of the feed at `feed_path`.
    ///
    /// Transport problems, non-2xx responses, malformed bodies and non-"ok"
    /// API statuses all come back as [`FetchError`].
    fn fetch_feed(&self, feed_path: &str) -> Result<Value, FetchError>;
}
