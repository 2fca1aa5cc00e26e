// Standard library
use std::io::{self, Write};
use std::sync::Arc;

// 3rd party crates
use tracing::{debug, warn};

// Project imports
use crate::display::functions::{
    print_address, print_banner, print_details, print_resolution_failure, print_summary,
};
use crate::errors::AppError;
use crate::settings::types::Settings;
use crate::utility::http::traits::HttpFetcher;
use crate::utility::http::types::ReqwestFetcher;
use crate::utility::ip_details::types::DetailFetcher;
use crate::utility::ip_detector::types::{IpDetector, ResolvedAddress};

/// Resolves the public address, looks up its details and prints the report
/// to standard output.
pub async fn run(settings: &Settings) -> Result<(), AppError> {
    let fetcher: Arc<dyn HttpFetcher> = Arc::new(ReqwestFetcher::new(
        settings.get_timeout(),
        &settings.http.user_agent,
    )?);

    let ip_detector = IpDetector::new(Arc::clone(&fetcher));
    let detail_fetcher = DetailFetcher::new(fetcher);

    let mut stdout = io::stdout();
    report(&ip_detector, &detail_fetcher, &mut stdout).await?;
    Ok(())
}

/// Writes the full report to `out`.
///
/// Fails only when no address could be resolved (after printing the failure
/// notice) or when `out` cannot be written. Missing details never fail.
pub async fn report<W: Write>(
    ip_detector: &IpDetector,
    detail_fetcher: &DetailFetcher,
    out: &mut W,
) -> Result<ResolvedAddress, AppError> {
    print_banner(out)?;
    out.flush()?;

    let address = match ip_detector.resolve_public_address().await {
        Ok(address) => address,
        Err(e) => {
            warn!("{}", e);
            print_resolution_failure(out)?;
            out.flush()?;
            return Err(e.into());
        }
    };

    print_address(out, &address)?;
    out.flush()?;

    let details = detail_fetcher.fetch_details(&address).await;
    if details.is_empty() {
        debug!("No details to show for {}", address);
    }
    print_details(out, &details)?;
    print_summary(out, &address)?;
    out.flush()?;

    Ok(address)
}
