//! HTTP access for the lookup services.
//!
//! Components talk to the network through the [`traits::HttpFetcher`] trait so
//! that the resolver and the details fetcher never see `reqwest` directly.
//! [`types::ReqwestFetcher`] is the production implementation; every request it
//! sends carries its own timeout window.

pub mod errors;
pub mod impls;
pub mod traits;
pub mod types;

#[cfg(test)]
pub mod testing;
