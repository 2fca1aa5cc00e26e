//! Geolocation and organisation lookup for a resolved address.
//!
//! One request, one timeout window, no retries. Whatever goes wrong is logged
//! and turned into an empty [`types::AddressDetails`].

pub mod constants;
pub mod errors;
pub mod impls;
pub mod types;
