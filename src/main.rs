// Standard library
use std::process::ExitCode;

// 3rd party crates
use tracing::{error, info};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

// Project modules
mod display;
mod errors;
mod functions;
mod settings;
mod utility;

// Project imports
use crate::errors::AppError;
use crate::functions::run;
use crate::settings::types::{Settings, ValidatedSettings};

/// Crates whose own logging is capped at `error`.
const QUIET_CRATES: [&str; 3] = ["hyper_util=error", "hyper=error", "reqwest=error"];

/// Entry point for the public address report.
///
/// Exits with status 0 when the address was resolved, even if its details
/// could not be fetched, and with status 1 otherwise.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match start().await {
        Ok(()) => ExitCode::SUCCESS,
        // The failure notice is already on stdout.
        Err(e @ AppError::AddressUnavailable(_)) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn start() -> Result<(), AppError> {
    let settings: ValidatedSettings = ValidatedSettings::new(Settings::load()?)?;

    init_logging(&settings.get_log_level())?;
    info!("⚙️ Settings have been loaded.");

    run(&settings).await
}

fn init_logging(log_level: &str) -> Result<(), AppError> {
    let mut filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .parse_lossy(log_level);

    for directive in QUIET_CRATES {
        filter = filter.add_directive(directive.parse()?);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_level(true)
        .init();

    Ok(())
}
