// Standard library
use std::time::Duration;

// 3rd party crates
use async_trait::async_trait;
use reqwest::Client;
use tracing::trace;

// Current module imports
use super::errors::FetchError;
use super::traits::HttpFetcher;
use super::types::{HttpResponse, ReqwestFetcher};

impl ReqwestFetcher {
    /// Builds a fetcher with its own client.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self::from_client(client, timeout))
    }

    pub fn from_client(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    fn classify(&self, url: &str, error: reqwest::Error, reading_body: bool) -> FetchError {
        let url = url.to_string();
        if error.is_timeout() {
            FetchError::Timeout {
                url,
                timeout: self.timeout,
            }
        } else if reading_body {
            FetchError::Body { url, source: error }
        } else {
            FetchError::Request { url, source: error }
        }
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        trace!("GET {} (timeout {:?})", url, self.timeout);

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.classify(url, e, false))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| self.classify(url, e, true))?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn fetcher(timeout: Duration) -> ReqwestFetcher {
        let client = Client::builder().no_proxy().build().unwrap();
        ReqwestFetcher::from_client(client, timeout)
    }

    /// Serves exactly one connection with a canned raw HTTP response.
    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 2048];
            let _ = socket.read(&mut buf).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn returns_status_and_body() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 8\r\nConnection: close\r\n\r\n8.8.8.8\n",
        )
        .await;

        let response = fetcher(Duration::from_secs(5)).get(&url).await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, "8.8.8.8\n");
    }

    #[tokio::test]
    async fn non_success_status_is_not_an_error() {
        let url = serve_once(
            "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 4\r\nConnection: close\r\n\r\nbusy",
        )
        .await;

        let response = fetcher(Duration::from_secs(5)).get(&url).await.unwrap();
        assert_eq!(response.status, 503);
        assert_eq!(response.body, "busy");
    }

    #[tokio::test]
    async fn silent_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let err = fetcher(Duration::from_millis(200))
            .get(&format!("http://{}", addr))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Timeout { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn refused_connection_is_a_request_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = fetcher(Duration::from_secs(5))
            .get(&format!("http://{}", addr))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Request { .. }), "got {err:?}");
    }
}
