use reqwest::blocking::{Request, Response};

pub trait HttpClient {
    fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
