// 3rd party crates
use thiserror::Error;

// Project imports
use crate::utility::http::errors::FetchError;

#[derive(Debug, Error)]
pub enum IpDetectionError {
    #[error("Network error from {service}: {error}")]
    Network { service: String, error: FetchError },

    #[error("Unexpected HTTP status {status} from {service}")]
    UnexpectedStatus { service: String, status: u16 },

    #[error("Invalid response from {service}: {response:?}")]
    InvalidResponse { service: String, response: String },

    #[error("No IP detection service returned an address ({attempted} tried)")]
    NoAddressResolved { attempted: usize },
}
