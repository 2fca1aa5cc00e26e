//! Human-readable report written to standard output.

pub mod constants;
pub mod functions;
