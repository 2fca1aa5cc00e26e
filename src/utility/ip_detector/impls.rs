// Standard library
use std::fmt;
use std::sync::Arc;

// 3rd party crates
use tracing::{debug, info};

// Project imports
use crate::utility::http::traits::HttpFetcher;

// Current module imports
use super::constants::{DOTTED_QUAD_PARTS, IP_ECHO_SERVICES};
use super::errors::IpDetectionError;
use super::types::{IpDetector, IpService, ResolvedAddress};

impl IpService {
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, self.path)
    }
}

impl ResolvedAddress {
    /// Accepts a response body whose trimmed text has exactly four
    /// dot-separated components. The components themselves are not checked.
    pub fn from_body(body: &str) -> Option<Self> {
        let candidate = body.trim();
        if candidate.split('.').count() == DOTTED_QUAD_PARTS {
            Some(Self(candidate.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResolvedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl IpDetector {
    /// Creates a detector over the built-in echo services.
    pub fn new(fetcher: Arc<dyn HttpFetcher>) -> Self {
        Self::with_services(fetcher, IP_ECHO_SERVICES.to_vec())
    }

    pub fn with_services(fetcher: Arc<dyn HttpFetcher>, services: Vec<IpService>) -> Self {
        Self { services, fetcher }
    }

    /// Returns the address reported by the first service that answers with
    /// status 200 and a plausible body. Services after it are not contacted.
    pub async fn resolve_public_address(&self) -> Result<ResolvedAddress, IpDetectionError> {
        for service in &self.services {
            match self.query_ip_service(service).await {
                Ok(address) => {
                    info!("Public address {} reported by {}", address, service.url());
                    return Ok(address);
                }
                Err(e) => {
                    debug!("Skipping IP service: {}", e);
                }
            }
        }

        Err(IpDetectionError::NoAddressResolved {
            attempted: self.services.len(),
        })
    }

    async fn query_ip_service(
        &self,
        service: &IpService,
    ) -> Result<ResolvedAddress, IpDetectionError> {
        let url = service.url();

        let response = self
            .fetcher
            .get(&url)
            .await
            .map_err(|error| IpDetectionError::Network {
                service: url.clone(),
                error,
            })?;

        if response.status != 200 {
            return Err(IpDetectionError::UnexpectedStatus {
                service: url,
                status: response.status,
            });
        }

        ResolvedAddress::from_body(&response.body).ok_or(IpDetectionError::InvalidResponse {
            service: url,
            response: response.body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::utility::http::testing::{Reply, ScriptedFetcher};

    const FIRST: IpService = IpService {
        base_url: "https://first.test",
        path: "",
    };
    const SECOND: IpService = IpService {
        base_url: "https://second.test",
        path: "/ip",
    };
    const THIRD: IpService = IpService {
        base_url: "https://third.test",
        path: "",
    };

    fn detector(fetcher: &Arc<ScriptedFetcher>) -> IpDetector {
        IpDetector::with_services(fetcher.clone(), vec![FIRST, SECOND, THIRD])
    }

    #[test]
    fn body_is_trimmed() {
        let address = ResolvedAddress::from_body("8.8.8.8\n").unwrap();
        assert_eq!(address.as_str(), "8.8.8.8");
        let padded = ResolvedAddress::from_body("  1.2.3.4 \r\n").unwrap();
        assert_eq!(padded.to_string(), "1.2.3.4");
    }

    #[test]
    fn only_dot_count_is_checked() {
        assert!(ResolvedAddress::from_body("2001:db8::1").is_none());
        assert!(ResolvedAddress::from_body("1.2.3").is_none());
        assert!(ResolvedAddress::from_body("1.2.3.4.5").is_none());
        assert!(ResolvedAddress::from_body("").is_none());
        // Loose on purpose: non-numeric and out-of-range parts pass.
        assert!(ResolvedAddress::from_body("a.b.c.d").is_some());
        assert!(ResolvedAddress::from_body("300.1.1.1").is_some());
    }

    #[test]
    fn built_in_services_keep_their_order() {
        let urls: Vec<String> = IP_ECHO_SERVICES.iter().map(IpService::url).collect();
        assert_eq!(
            urls,
            vec![
                "https://api.ipify.org",
                "https://ipinfo.io/ip",
                "https://icanhazip.com",
                "https://ident.me",
                "https://checkip.amazonaws.com",
            ]
        );
    }

    #[tokio::test]
    async fn first_qualifying_service_wins() {
        let fetcher = Arc::new(
            ScriptedFetcher::new()
                .reply("https://first.test", Reply::Status(200, "1.1.1.1\n"))
                .reply("https://second.test/ip", Reply::Status(200, "2.2.2.2")),
        );

        let address = detector(&fetcher).resolve_public_address().await.unwrap();

        assert_eq!(address.as_str(), "1.1.1.1");
        assert_eq!(fetcher.calls(), vec!["https://first.test"]);
    }

    #[tokio::test]
    async fn failures_fall_through_to_next_service() {
        let fetcher = Arc::new(
            ScriptedFetcher::new()
                .reply("https://first.test", Reply::Timeout)
                .reply("https://second.test/ip", Reply::Status(200, "2001:db8::1"))
                .reply("https://third.test", Reply::Status(200, "8.8.8.8\n")),
        );

        let address = detector(&fetcher).resolve_public_address().await.unwrap();

        assert_eq!(address.as_str(), "8.8.8.8");
        assert_eq!(
            fetcher.calls(),
            vec![
                "https://first.test",
                "https://second.test/ip",
                "https://third.test"
            ]
        );
    }

    #[tokio::test]
    async fn non_200_status_is_rejected_even_with_valid_body() {
        let fetcher = Arc::new(
            ScriptedFetcher::new()
                .reply("https://first.test", Reply::Status(201, "1.1.1.1"))
                .reply("https://second.test/ip", Reply::Status(200, "2.2.2.2")),
        );

        let address = detector(&fetcher).resolve_public_address().await.unwrap();
        assert_eq!(address.as_str(), "2.2.2.2");
    }

    #[tokio::test]
    async fn exhausted_list_reports_no_address() {
        let fetcher = Arc::new(
            ScriptedFetcher::new()
                .reply("https://first.test", Reply::Timeout)
                .reply("https://second.test/ip", Reply::Status(503, "busy"))
                .reply("https://third.test", Reply::Status(404, "<html>1.2.3.4</html>")),
        );

        let err = detector(&fetcher).resolve_public_address().await.unwrap_err();

        assert!(matches!(err, IpDetectionError::NoAddressResolved { attempted: 3 }));
        assert_eq!(fetcher.calls().len(), 3);
    }

    #[tokio::test]
    async fn empty_service_list_reports_no_address() {
        let fetcher = Arc::new(ScriptedFetcher::new());
        let detector = IpDetector::with_services(fetcher.clone(), Vec::new());

        let err = detector.resolve_public_address().await.unwrap_err();

        assert!(matches!(err, IpDetectionError::NoAddressResolved { attempted: 0 }));
        assert!(fetcher.calls().is_empty());
    }
}
