//! Per-city failure classification.

use serde::Serialize;
use thiserror::Error;

/// Why a single city's reading could not be obtained.
///
/// These never abort a run; the pipeline turns each one into a degraded
/// record (see [`crate::records::SummaryRecord::failed`]).
#[derive(Debug, Error)]
pub enum FetchError {
    /// The wrapped error never carries the request URL, which holds the token.
    #[error("request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("WAQI returned status={status}, data={data}")]
    ApiStatus { status: String, data: String },

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid request URL: {0}")]
    Url(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.without_url())
    }
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::Network(_) | FetchError::Url(_) => ErrorKind::Network,
            FetchError::HttpStatus { .. } => ErrorKind::HttpStatus,
            FetchError::ApiStatus { .. } => ErrorKind::ApiStatus,
            FetchError::Decode(_) => ErrorKind::Decode,
        }
    }
}

/// Coarse failure class recorded alongside the free-text message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Network,
    HttpStatus,
    ApiStatus,
    Decode,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Network => "network",
            ErrorKind::HttpStatus => "http_status",
            ErrorKind::ApiStatus => "api_status",
            ErrorKind::Decode => "decode",
        }
    }
}

/// Error attached to a degraded summary record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityError {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&FetchError> for CityError {
    fn from(err: &FetchError) -> Self {
        CityError {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}
