use super::client::HttpClient;
use std::time::Duration;

pub struct BasicClient(reqwest::blocking::Client);

impl BasicClient {
    /// Builds a client whose requests are cut off after `timeout`.
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .user_agent(concat!("waqi_aqi/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self(client))
    }
}

impl HttpClient for BasicClient {
    fn execute(&self, req: reqwest::blocking::Request) -> reqwest::Result<reqwest::blocking::Response> {
        self.0.execute(req)
    }
}
