//! Byte size quantity type

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::format::format_binary;
use super::parse::parse_size;
use crate::ResUnitsError;

/// A number of bytes
///
/// Parses from SI or IEC strings, displays in IEC units, and serializes
/// as the exact byte count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawByteSize", into = "u64")]
pub struct ByteSize(u64);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawByteSize {
    Bytes(u64),
    Text(String),
}

impl ByteSize {
    pub const ZERO: ByteSize = ByteSize(0);

    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    pub const fn as_u64(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for ByteSize {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ByteSize> for u64 {
    fn from(value: ByteSize) -> Self {
        value.0
    }
}

impl FromStr for ByteSize {
    type Err = ResUnitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(parse_size(s)?))
    }
}

impl TryFrom<RawByteSize> for ByteSize {
    type Error = ResUnitsError;

    fn try_from(raw: RawByteSize) -> Result<Self, Self::Error> {
        match raw {
            RawByteSize::Bytes(bytes) => Ok(Self(bytes)),
            RawByteSize::Text(text) => text.trim().parse(),
        }
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_binary(self.0))
    }
}
