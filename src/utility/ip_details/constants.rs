/// Lookup service queried as `{base}/{address}/json`.
pub const DETAILS_SERVICE_BASE_URL: &str = "https://ipinfo.io";
