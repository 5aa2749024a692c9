use super::client::HttpClient;

/// Client for tests that only exercise request building.
pub(crate) struct Unused;

impl HttpClient for Unused {
    fn execute(
        &self,
        _req: reqwest::blocking::Request,
    ) -> reqwest::Result<reqwest::blocking::Response> {
        unreachable!("not called in these tests")
    }
}
