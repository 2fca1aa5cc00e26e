// Standard library
use std::io::{self, Write};

// Project imports
use crate::utility::ip_details::types::AddressDetails;
use crate::utility::ip_detector::types::ResolvedAddress;

// Current module imports
use super::constants::{
    DETAILS_HEADING, DETAILS_RULE_WIDTH, DETAIL_FIELDS, LOCATION_KEYS, LOCATION_LABEL, TITLE,
    TITLE_RULE_WIDTH,
};

pub fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", TITLE)?;
    writeln!(out, "{}", "=".repeat(TITLE_RULE_WIDTH))?;
    writeln!(out, "Fetching your public IP address...")
}

pub fn print_resolution_failure<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "❌ Error: Unable to fetch your IP address.")?;
    writeln!(out, "Please check your internet connection and try again.")
}

pub fn print_address<W: Write>(out: &mut W, address: &ResolvedAddress) -> io::Result<()> {
    writeln!(out, "📍 Your public IP address: {}", address)?;
    writeln!(out)?;
    writeln!(out, "Fetching additional details...")
}

/// Prints the details section. Nothing is written for empty details.
pub fn print_details<W: Write>(out: &mut W, details: &AddressDetails) -> io::Result<()> {
    if details.is_empty() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "{}", DETAILS_HEADING)?;
    writeln!(out, "{}", "-".repeat(DETAILS_RULE_WIDTH))?;

    if let Some(location) = location(details) {
        writeln!(out, "{}: {}", LOCATION_LABEL, location)?;
    }

    for (key, label) in DETAIL_FIELDS {
        if let Some(value) = details.get(key) {
            writeln!(out, "{}: {}", label, value)?;
        }
    }

    Ok(())
}

pub fn print_summary<W: Write>(out: &mut W, address: &ResolvedAddress) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "✅ IP address successfully retrieved: {}", address)
}

/// `"city, region, country"`, or `None` unless all three are known.
pub fn location(details: &AddressDetails) -> Option<String> {
    LOCATION_KEYS
        .iter()
        .map(|key| details.get(key))
        .collect::<Option<Vec<_>>>()
        .map(|parts| parts.join(", "))
}
