//! Byte size module
//!
//! Parses and formats sizes written with SI (kB, MB, ...) or IEC
//! (KiB, MiB, ...) units.

pub mod format;
pub mod parse;
pub mod quantity;
pub mod units;

// Re-export commonly used functions
pub use format::{calculate_size_and_suffix, format_binary, format_human, format_size, SizeFormat};
pub use parse::{from_binary_size, from_human_size, from_size, parse_size};
pub use quantity::ByteSize;
pub use units::{Suffix, Units, BINARY_SUFFIXES, BINARY_UNITS, DECIMAL_SUFFIXES, DECIMAL_UNITS};
