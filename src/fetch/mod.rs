//! Blocking HTTP plumbing: a client trait, a plain reqwest-backed client, and
//! wrappers that decorate requests with credentials.

mod basic;
mod client;
pub mod auth;
#[cfg(test)]
pub(crate) mod testing;

pub use basic::BasicClient;
pub use client::HttpClient;

use reqwest::Url;

use crate::error::FetchError;

/// Executes a GET for `url` and returns the body as text.
///
/// Non-2xx responses are turned into [`FetchError::HttpStatus`] carrying the
/// response body, which WAQI fills with a short explanation.
pub fn fetch_text<C: HttpClient>(client: &C, url: Url) -> Result<String, FetchError> {
    let req = reqwest::blocking::Request::new(reqwest::Method::GET, url);

    let resp = client.execute(req)?;
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().unwrap_or_default();
        return Err(FetchError::HttpStatus {
            status: status.as_u16(),
            body,
        });
    }

    Ok(resp.text()?)
}
