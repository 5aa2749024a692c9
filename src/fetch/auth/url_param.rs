use crate::fetch::client::HttpClient;
use reqwest::Url;

/// An [`HttpClient`] wrapper that appends an API key as a URL query parameter.
///
/// WAQI expects its access token as `?token=<key>` on every feed request.
pub struct UrlParam<C> {
    pub inner: C,
    pub param_name: String,
    pub key: String,
}

impl<C> UrlParam<C> {
    pub fn token(inner: C, key: String) -> Self {
        Self {
            inner,
            param_name: "token".to_string(),
            key,
        }
    }

    fn apply(&self, url: &mut Url) {
        url.query_pairs_mut().append_pair(&self.param_name, &self.key);
    }
}

impl<C: HttpClient> HttpClient for UrlParam<C> {
    fn execute(
        &self,
        mut req: reqwest::blocking::Request,
    ) -> reqwest::Result<reqwest::blocking::Response> {
        self.apply(req.url_mut());
        self.inner.execute(req)
    }
}
