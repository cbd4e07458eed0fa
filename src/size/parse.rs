//! Byte size parsing
//!
//! Units are case-insensitive and the trailing `b` is optional, so
//! `"512K"`, `"512kb"` and `"512 KB"` all mean 512 000 bytes while
//! `"512Ki"` and `"512KIB"` mean 524 288 bytes.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::units::{Units, BINARY_UNITS, BYTE, DECIMAL_UNITS};
use crate::{ResUnitsError, Result};

// Unit letters are matched as ASCII only, no Unicode case folding

/// SI sizes such as `"512kB"`, `"20 M"` or `"1b"`
pub static DECIMAL_SIZE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9][0-9.]*) ?([bBkKmMgGtTpP][bB]?)$").expect("valid decimal size regex")
});

/// IEC sizes such as `"512KiB"`, `"20 Mi"`
pub static BINARY_SIZE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9][0-9.]*) ?([kKmMgGtTpP][iI][bB]?)$").expect("valid binary size regex")
});

static SPLIT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9][0-9.]*) ?([A-Za-z]+)$").expect("valid split regex"));

/// Parse a size in either SI or IEC notation into bytes
///
/// The notation is picked from the unit: an `i` infix (`KiB`, `Mi`) means
/// powers of 1024, anything else powers of 1000. A unit is required.
///
/// # Examples
/// ```
/// use resunits::size::parse_size;
///
/// assert_eq!(parse_size("512KiB").unwrap(), 512 * 1024);
/// assert_eq!(parse_size("512M").unwrap(), 512_000_000);
/// assert!(parse_size("not-a-size").is_err());
/// ```
pub fn parse_size(input: &str) -> Result<u64> {
    if DECIMAL_SIZE_REGEX.is_match(input) {
        return from_human_size(input);
    }

    if BINARY_SIZE_REGEX.is_match(input) {
        return from_binary_size(input);
    }

    debug!(input = %input, "size format unknown");
    Err(ResUnitsError::UnknownFormat {
        input: input.to_string(),
    })
}

/// Parse an SI size (`"512kB"`, `"20MB"`, `"512"`) into bytes
pub fn from_human_size(input: &str) -> Result<u64> {
    from_size(&with_byte_suffix(input), &DECIMAL_UNITS)
}

/// Parse an IEC size (`"512KiB"`, `"4Gi"`, `"512"`) into bytes
pub fn from_binary_size(input: &str) -> Result<u64> {
    from_size(&with_byte_suffix(input), &BINARY_UNITS)
}

/// Parse a size against the given unit table
///
/// The fractional part of the result is truncated.
pub fn from_size(input: &str, units: &Units) -> Result<u64> {
    let captures = SPLIT_REGEX.captures(input).ok_or_else(|| {
        debug!(input = %input, "no number/unit pair found");
        ResUnitsError::InvalidFormat {
            input: input.to_string(),
        }
    })?;

    let (number, unit) = match (captures.get(1), captures.get(2)) {
        (Some(number), Some(unit)) => (number.as_str(), unit.as_str()),
        _ => {
            return Err(ResUnitsError::InvalidFormat {
                input: input.to_string(),
            })
        }
    };

    let multiplier = units.get(&unit.trim().to_lowercase()).ok_or_else(|| {
        debug!(input = %input, unit = %unit, "size unit unknown");
        ResUnitsError::UnknownUnit {
            unit: unit.to_string(),
            available: units.keys().collect::<Vec<_>>().join(", "),
        }
    })?;

    let value: f64 = number.parse().map_err(|source| {
        debug!(input = %input, "size is not numeric");
        ResUnitsError::InvalidNumber {
            input: number.to_string(),
            source,
        }
    })?;

    let bytes = value * multiplier as f64;
    if !bytes.is_finite() || bytes >= u64::MAX as f64 {
        debug!(input = %input, "size out of range");
        return Err(ResUnitsError::OutOfRange {
            input: input.to_string(),
            target: "u64 bytes",
        });
    }

    Ok(bytes as u64)
}

/// Trim and append `B` unless the input already ends in `b` or `B`
fn with_byte_suffix(input: &str) -> String {
    let input = input.trim();

    if input.ends_with(['b', 'B']) {
        return input.to_string();
    }

    format!("{}{}", input, BYTE)
}
