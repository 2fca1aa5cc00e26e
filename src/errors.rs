// 3rd party crates
use thiserror::Error;

// Project imports
use crate::settings::errors::ValidationError;
use crate::utility::ip_detector::errors::IpDetectionError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Unable to determine the public IP address: {0}")]
    AddressUnavailable(#[from] IpDetectionError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
