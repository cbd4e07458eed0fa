//! Byte size formatting
//!
//! Picks the largest unit of a suffix ladder that does not exceed the
//! size and renders the scaled value with a fixed number of significant
//! digits, e.g. `"476.8GiB"`.

use super::units::{Suffix, BINARY_SUFFIXES, DECIMAL_SUFFIXES};

/// How a scaled size is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeFormat {
    /// Significant digits of the scaled value
    pub precision: usize,
    /// Text placed between the value and the suffix
    pub separator: &'static str,
}

impl SizeFormat {
    /// Four significant digits, no separator
    pub const DEFAULT: SizeFormat = SizeFormat {
        precision: 4,
        separator: "",
    };

    pub const fn new(precision: usize) -> Self {
        Self {
            precision,
            separator: "",
        }
    }

    pub const fn with_separator(mut self, separator: &'static str) -> Self {
        self.separator = separator;
        self
    }
}

impl Default for SizeFormat {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Format a size with SI suffixes
///
/// # Examples
/// ```
/// use resunits::size::format_human;
///
/// assert_eq!(format_human(1000), "1kB");
/// assert_eq!(format_human(1048576), "1.049MB");
/// ```
pub fn format_human(bytes: u64) -> String {
    format_size(SizeFormat::DEFAULT, bytes, DECIMAL_SUFFIXES)
}

/// Format a size with IEC suffixes
///
/// # Examples
/// ```
/// use resunits::size::format_binary;
///
/// assert_eq!(format_binary(1024), "1KiB");
/// assert_eq!(format_binary(512_000_000_000), "476.8GiB");
/// ```
pub fn format_binary(bytes: u64) -> String {
    format_size(SizeFormat::DEFAULT, bytes, BINARY_SUFFIXES)
}

/// Format a size with the given rendering and suffix ladder
pub fn format_size(format: SizeFormat, bytes: u64, suffixes: &[Suffix]) -> String {
    let (size, suffix) = calculate_size_and_suffix(bytes as f64, suffixes);
    format!(
        "{}{}{}",
        format_significant(size, format.precision),
        format.separator,
        suffix
    )
}

/// Scale a size to the largest ladder unit it reaches
///
/// Sizes below every threshold fall back to the first rung.
pub fn calculate_size_and_suffix(size: f64, suffixes: &[Suffix]) -> (f64, &'static str) {
    if let Some(rung) = suffixes.iter().rev().find(|rung| size >= rung.unit as f64) {
        return (size / rung.unit as f64, rung.suffix);
    }

    match suffixes.first() {
        Some(rung) => (size / rung.unit as f64, rung.suffix),
        None => (size, ""),
    }
}

/// Render `value` with `precision` significant digits using printf `%g` rules
fn format_significant(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        );
    }

    let decimals = (precision as i32 - 1 - exponent) as usize;
    trim_fraction(&format!("{:.*}", decimals, value)).to_string()
}

fn trim_fraction(number: &str) -> &str {
    if !number.contains('.') {
        return number;
    }

    number.trim_end_matches('0').trim_end_matches('.')
}
