// Standard library
use std::collections::BTreeMap;
use std::sync::Arc;

// Project imports
use crate::utility::http::traits::HttpFetcher;

/// Whatever string fields the lookup service returned for an address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressDetails(pub(super) BTreeMap<String, String>);

pub struct DetailFetcher {
    pub base_url: String,
    pub fetcher: Arc<dyn HttpFetcher>,
}
