// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid log level: {0}. Must be one of: error, warn, info, debug, trace")]
    InvalidLogLevel(String),
    #[error("HTTP timeout must be greater than 0, got {0}")]
    InvalidTimeout(u64),
    #[error("HTTP user agent must not be empty")]
    EmptyUserAgent,
}
