// Standard library
use std::collections::BTreeMap;
use std::sync::Arc;

// 3rd party crates
use serde_json::Value;
use tracing::{debug, info};

// Project imports
use crate::utility::http::traits::HttpFetcher;
use crate::utility::ip_detector::types::ResolvedAddress;

// Current module imports
use super::constants::DETAILS_SERVICE_BASE_URL;
use super::errors::IpDetailsError;
use super::types::{AddressDetails, DetailFetcher};

impl AddressDetails {
    /// Parses a JSON object. Strings are kept verbatim, numbers and booleans
    /// in their JSON text form; nulls, arrays and nested objects are dropped.
    pub fn from_json(body: &str) -> Result<Self, IpDetailsError> {
        let Value::Object(object) = serde_json::from_str::<Value>(body)? else {
            return Err(IpDetailsError::NotAnObject);
        };

        let fields = object
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(text) => Some((key, text)),
                Value::Number(number) => Some((key, number.to_string())),
                Value::Bool(flag) => Some((key, flag.to_string())),
                Value::Null | Value::Array(_) | Value::Object(_) => None,
            })
            .collect::<BTreeMap<_, _>>();

        Ok(Self(fields))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AddressDetails {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl DetailFetcher {
    pub fn new(fetcher: Arc<dyn HttpFetcher>) -> Self {
        Self::with_base_url(fetcher, DETAILS_SERVICE_BASE_URL)
    }

    pub fn with_base_url(fetcher: Arc<dyn HttpFetcher>, base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            fetcher,
        }
    }

    pub fn details_url(&self, address: &ResolvedAddress) -> String {
        format!("{}/{}/json", self.base_url, address.as_str())
    }

    /// Looks up the address, returning empty details on any failure.
    pub async fn fetch_details(&self, address: &ResolvedAddress) -> AddressDetails {
        match self.try_fetch_details(address).await {
            Ok(details) => {
                info!("Fetched {} detail fields for {}", details.len(), address);
                details
            }
            Err(e) => {
                debug!("Address details unavailable: {}", e);
                AddressDetails::default()
            }
        }
    }

    async fn try_fetch_details(
        &self,
        address: &ResolvedAddress,
    ) -> Result<AddressDetails, IpDetailsError> {
        let url = self.details_url(address);

        let response = self
            .fetcher
            .get(&url)
            .await
            .map_err(|error| IpDetailsError::Network {
                service: url.clone(),
                error,
            })?;

        if response.status != 200 {
            return Err(IpDetailsError::UnexpectedStatus {
                service: url,
                status: response.status,
            });
        }

        AddressDetails::from_json(&response.body)
    }
}
