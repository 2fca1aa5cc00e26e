// 3rd party crates
use async_trait::async_trait;

// Current module imports
use super::errors::FetchError;
use super::types::HttpResponse;

/// Issues a single GET request and hands back the status and body text.
///
/// Implementations must bound every request by a timeout and must not retry.
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}
