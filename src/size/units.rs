//! Byte unit constants and lookup tables
//!
//! See <http://en.wikipedia.org/wiki/Binary_prefix>.

pub const BYTE_BASE: u64 = 1;
pub const DECIMAL_BASE: u64 = 1000;
pub const BINARY_BASE: u64 = 1024;

pub const KB: u64 = DECIMAL_BASE;
pub const MB: u64 = DECIMAL_BASE * KB;
pub const GB: u64 = DECIMAL_BASE * MB;
pub const TB: u64 = DECIMAL_BASE * GB;
pub const PB: u64 = DECIMAL_BASE * TB;

pub const KIB: u64 = BINARY_BASE;
pub const MIB: u64 = BINARY_BASE * KIB;
pub const GIB: u64 = BINARY_BASE * MIB;
pub const TIB: u64 = BINARY_BASE * GIB;
pub const PIB: u64 = BINARY_BASE * TIB;

/// Mapping from lower-cased unit suffix to the number of bytes in one unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Units {
    entries: &'static [(&'static str, u64)],
}

impl Units {
    /// Build a table from `(lower-cased suffix, multiplier)` pairs
    pub const fn new(entries: &'static [(&'static str, u64)]) -> Self {
        Self { entries }
    }

    /// Multiplier for a unit; the lookup key must already be lower-cased
    pub fn get(&self, unit: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(key, _)| *key == unit)
            .map(|&(_, multiplier)| multiplier)
    }

    /// Unit keys in table order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|&(key, _)| key)
    }
}

/// One rung of a suffix ladder: sizes of at least `unit` bytes are shown
/// with `suffix`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suffix {
    pub unit: u64,
    pub suffix: &'static str,
}

impl Suffix {
    pub const fn new(unit: u64, suffix: &'static str) -> Self {
        Self { unit, suffix }
    }
}

pub const BYTE: &str = "B";

pub const KILO_BYTE: &str = "kB";
pub const MEGA_BYTE: &str = "MB";
pub const GIGA_BYTE: &str = "GB";
pub const TERA_BYTE: &str = "TB";
pub const PETA_BYTE: &str = "PB";

pub const KIBI_BYTE: &str = "KiB";
pub const MEBI_BYTE: &str = "MiB";
pub const GIBI_BYTE: &str = "GiB";
pub const TEBI_BYTE: &str = "TiB";
pub const PEBI_BYTE: &str = "PiB";

/// SI units, powers of 1000
pub static DECIMAL_UNITS: Units = Units::new(&[
    ("b", BYTE_BASE),
    ("kb", KB),
    ("mb", MB),
    ("gb", GB),
    ("tb", TB),
    ("pb", PB),
]);

/// IEC units, powers of 1024
pub static BINARY_UNITS: Units = Units::new(&[
    ("b", BYTE_BASE),
    ("kib", KIB),
    ("mib", MIB),
    ("gib", GIB),
    ("tib", TIB),
    ("pib", PIB),
]);

pub static DECIMAL_SUFFIXES: &[Suffix] = &[
    Suffix::new(BYTE_BASE, BYTE),
    Suffix::new(KB, KILO_BYTE),
    Suffix::new(MB, MEGA_BYTE),
    Suffix::new(GB, GIGA_BYTE),
    Suffix::new(TB, TERA_BYTE),
    Suffix::new(PB, PETA_BYTE),
];

pub static BINARY_SUFFIXES: &[Suffix] = &[
    Suffix::new(BYTE_BASE, BYTE),
    Suffix::new(KIB, KIBI_BYTE),
    Suffix::new(MIB, MEBI_BYTE),
    Suffix::new(GIB, GIBI_BYTE),
    Suffix::new(TIB, TEBI_BYTE),
    Suffix::new(PIB, PEBI_BYTE),
];
