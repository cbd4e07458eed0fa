//! Millicore quantity type
//!
//! Wraps a millicore count so resource documents can carry CPU limits
//! written either as `"500m"` strings or as plain core numbers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::parse::{ceil, parse, parse_core, to_cpu, to_seconds, MILLI_SUFFIX};
use crate::ResUnitsError;

/// CPU allocation in millicores (1000 = one core)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawCpu", into = "String")]
pub struct Millicores(u32);

/// Accepted serialized forms of a CPU quantity
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCpu {
    Text(String),
    Cores(f64),
}

impl Millicores {
    pub const ZERO: Millicores = Millicores(0);

    /// Create a quantity from a millicore count
    pub const fn new(millicores: u32) -> Self {
        Self(millicores)
    }

    /// Create a quantity from a core count, truncating to whole millicores
    pub fn from_cores(cores: f32) -> Self {
        Self(to_seconds(cores))
    }

    /// Millicore count
    pub const fn as_millis(self) -> u32 {
        self.0
    }

    /// Core count
    pub fn as_cores(self) -> f32 {
        to_cpu(self.0)
    }

    /// Number of whole cores needed to hold this allocation
    pub fn whole_cores(self) -> u8 {
        ceil(self.as_cores())
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for Millicores {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Millicores> for u32 {
    fn from(value: Millicores) -> Self {
        value.0
    }
}

impl From<Millicores> for String {
    fn from(value: Millicores) -> Self {
        value.to_string()
    }
}

impl FromStr for Millicores {
    type Err = ResUnitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(parse(s)?))
    }
}

impl TryFrom<RawCpu> for Millicores {
    type Error = ResUnitsError;

    fn try_from(raw: RawCpu) -> Result<Self, Self::Error> {
        match raw {
            RawCpu::Text(text) => text.trim().parse(),
            RawCpu::Cores(cores) => Ok(Self(parse_core(&cores.to_string())?)),
        }
    }
}

impl fmt::Display for Millicores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, MILLI_SUFFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("500m".parse::<Millicores>().unwrap(), Millicores::new(500));
        assert_eq!("2".parse::<Millicores>().unwrap(), Millicores::new(2000));
        assert!("2.5m".parse::<Millicores>().is_err());
    }

    #[test]
    fn test_display_is_exact() {
        assert_eq!(Millicores::new(1500).to_string(), "1500m");
        assert_eq!(Millicores::ZERO.to_string(), "0m");
    }

    #[test]
    fn test_core_conversions() {
        let cpu = Millicores::from_cores(1.5);
        assert_eq!(cpu.as_millis(), 1500);
        assert_eq!(cpu.as_cores(), 1.5);
        assert_eq!(cpu.whole_cores(), 2);
        assert_eq!(Millicores::new(3000).whole_cores(), 3);
        assert!(Millicores::ZERO.is_zero());
    }

    #[test]
    fn test_serde_json_forms() {
        let from_text: Millicores = serde_json::from_str("\"250m\"").unwrap();
        assert_eq!(from_text.as_millis(), 250);

        let from_float: Millicores = serde_json::from_str("0.5").unwrap();
        assert_eq!(from_float.as_millis(), 500);

        let from_int: Millicores = serde_json::from_str("4").unwrap();
        assert_eq!(from_int.as_millis(), 4000);

        assert!(serde_json::from_str::<Millicores>("\"1.5m\"").is_err());
        assert!(serde_json::from_str::<Millicores>("-1").is_err());
    }

    #[test]
    fn test_serde_json_roundtrip() {
        let cpu = Millicores::new(1234);
        let json = serde_json::to_string(&cpu).expect("Failed to serialize");
        assert_eq!(json, "\"1234m\"");

        let back: Millicores = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(back, cpu);
    }
}
