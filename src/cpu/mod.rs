//! CPU quantities module
//!
//! Parses CPU allocations written either as cores ("2.5") or as
//! millicores ("2500m") and converts between the two.

pub mod parse;
pub mod quantity;

// Re-export commonly used functions
pub use parse::{
    ceil, parse, parse_core, parse_milli, to_cpu, to_seconds, CORE, MILLI_CORE, MILLI_SUFFIX,
};
pub use quantity::Millicores;
