//! resunits - resource quantity parsing
//!
//! Parses and formats the two quantities that show up in container
//! resource limits: CPU (cores and millicores) and byte sizes in SI or
//! IEC notation.

use thiserror::Error;

// Public re-exports
pub mod config;
pub mod cpu;
pub mod size;

pub use config::ResourceLimits;
pub use cpu::Millicores;
pub use size::ByteSize;

// Common error types
#[derive(Debug, Error)]
pub enum ResUnitsError {
    /// The numeric part of a quantity could not be parsed
    #[error("invalid number '{input}': {source}")]
    InvalidNumber {
        input: String,
        #[source]
        source: std::num::ParseFloatError,
    },
    /// Millicore quantities must be whole numbers
    #[error("fractional parts are not allowed when specifying millicores: '{input}'")]
    FractionalMillicores { input: String },
    /// The unit suffix is not part of the unit table in use
    #[error("unit '{unit}' unknown, available units [{available}]")]
    UnknownUnit { unit: String, available: String },
    /// The input matches neither the decimal nor the binary size shape
    #[error("format size '{input}' unknown")]
    UnknownFormat { input: String },
    /// No number/unit pair could be split out of the input
    #[error("invalid format size '{input}'")]
    InvalidFormat { input: String },
    /// The value does not fit the target integer width
    #[error("value '{input}' does not fit in {target}")]
    OutOfRange { input: String, target: &'static str },
    /// Configuration validation or parsing error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<toml::de::Error> for ResUnitsError {
    fn from(err: toml::de::Error) -> Self {
        ResUnitsError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for ResUnitsError {
    fn from(err: toml::ser::Error) -> Self {
        ResUnitsError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for resunits operations
pub type Result<T> = std::result::Result<T, ResUnitsError>;
