// 3rd party crates
use thiserror::Error;

// Project imports
use crate::utility::http::errors::FetchError;

#[derive(Debug, Error)]
pub enum IpDetailsError {
    #[error("Network error from {service}: {error}")]
    Network { service: String, error: FetchError },

    #[error("Unexpected HTTP status {status} from {service}")]
    UnexpectedStatus { service: String, status: u16 },

    #[error("Malformed details document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Details document is not a JSON object")]
    NotAnObject,
}
