// Standard library
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

// 3rd party crates
use async_trait::async_trait;

// Current module imports
use super::errors::FetchError;
use super::traits::HttpFetcher;
use super::types::HttpResponse;

/// Canned outcome for one URL.
#[derive(Debug, Clone)]
pub enum Reply {
    Status(u16, &'static str),
    Timeout,
}

/// Answers from a fixed script and records every URL it was asked for.
/// Unscripted URLs time out.
#[derive(Debug, Default)]
pub struct ScriptedFetcher {
    replies: HashMap<String, Reply>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, url: &str, reply: Reply) -> Self {
        self.replies.insert(url.to_string(), reply);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpFetcher for ScriptedFetcher {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());
        match self.replies.get(url) {
            Some(Reply::Status(status, body)) => Ok(HttpResponse {
                status: *status,
                body: body.to_string(),
            }),
            Some(Reply::Timeout) | None => Err(FetchError::Timeout {
                url: url.to_string(),
                timeout: Duration::from_secs(5),
            }),
        }
    }
}
