//! Public address resolution.
//!
//! The detector walks a fixed, ordered list of IP-echo services and returns
//! the first answer that looks like a dotted-quad address. Every failure along
//! the way (transport error, timeout, non-200 status, implausible body) only
//! moves the scan on to the next service; the caller sees an error solely
//! when the whole list is exhausted.
//!
//! # Validation
//!
//! A body is accepted when, after trimming, it splits on `.` into exactly four
//! components. Octet ranges are not checked, so `"a.b.c.d"` passes while an
//! IPv6 literal such as `"2001:db8::1"` does not.
//!
//! # Latency
//!
//! Services are queried one at a time, so the worst case is the number of
//! services times the per-request timeout.

pub mod constants;
pub mod errors;
pub mod impls;
pub mod types;
