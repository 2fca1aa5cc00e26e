// Standard library
use std::sync::Arc;

// Project imports
use crate::utility::http::traits::HttpFetcher;

/// An IP-echo endpoint returning the caller's address as plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IpService {
    pub base_url: &'static str,
    pub path: &'static str,
}

/// A public address in dotted-quad text form, as reported by an echo service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAddress(pub(super) String);

pub struct IpDetector {
    pub services: Vec<IpService>,
    pub fetcher: Arc<dyn HttpFetcher>,
}
