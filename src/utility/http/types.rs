// Standard library
use std::time::Duration;

// 3rd party crates
use reqwest::Client;

/// Status code and body text of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// [`HttpFetcher`](super::traits::HttpFetcher) backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    pub client: Client,
    pub timeout: Duration,
}
