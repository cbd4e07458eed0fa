//! CPU parsing and conversion utilities
//!
//! Millicores are the internal unit: 1000 millicores make one core.

use tracing::debug;

use crate::{ResUnitsError, Result};

/// Suffix marking a millicore quantity
pub const MILLI_SUFFIX: &str = "m";

pub const MILLI_CORE: u32 = 1;
pub const CORE: u32 = MILLI_CORE * 1000;

/// Parse a CPU quantity into millicores
///
/// Inputs ending in `m` are millicores, anything else is a number of cores.
///
/// # Examples
/// ```
/// use resunits::cpu::parse;
///
/// assert_eq!(parse("1000m").unwrap(), 1000);
/// assert_eq!(parse("1").unwrap(), 1000);
/// assert_eq!(parse("2.5").unwrap(), 2500);
/// ```
pub fn parse(input: &str) -> Result<u32> {
    if input.ends_with(MILLI_SUFFIX) {
        return parse_milli(input);
    }

    parse_core(input)
}

/// Parse a millicore quantity such as `"2500m"`
///
/// The value must be a whole number without a minus sign that fits in a `u32`.
pub fn parse_milli(input: &str) -> Result<u32> {
    let number = input.strip_suffix(MILLI_SUFFIX).unwrap_or(input);

    let millis: f64 = number.parse().map_err(|source| {
        debug!(input = %input, "millicores are not numeric");
        ResUnitsError::InvalidNumber {
            input: input.to_string(),
            source,
        }
    })?;

    if !millis.is_finite() {
        return Err(out_of_range(input));
    }

    if millis.fract() != 0.0 {
        debug!(input = %input, "fractional millicores rejected");
        return Err(ResUnitsError::FractionalMillicores {
            input: input.to_string(),
        });
    }

    if millis.is_sign_negative() || millis > f64::from(u32::MAX) {
        return Err(out_of_range(input));
    }

    Ok(millis as u32)
}

/// Parse a core quantity such as `"0.5"` into millicores
///
/// The product is computed in `f32` and truncated, so `"0.0015"` yields `1`.
/// Any negative input is rejected, including `"-0"` and values that would
/// truncate to zero.
pub fn parse_core(input: &str) -> Result<u32> {
    let cores: f32 = input.parse().map_err(|source| {
        debug!(input = %input, "cores are not numeric");
        ResUnitsError::InvalidNumber {
            input: input.to_string(),
            source,
        }
    })?;

    let millis = cores * CORE as f32;
    if !millis.is_finite() || cores.is_sign_negative() || millis >= u32::MAX as f32 {
        return Err(out_of_range(input));
    }

    Ok(to_seconds(cores))
}

/// Convert cores to millicores, truncating toward zero
///
/// Out of range values saturate.
pub fn to_seconds(cpu: f32) -> u32 {
    (cpu * CORE as f32) as u32
}

/// Convert millicores to cores
pub fn to_cpu(millicores: u32) -> f32 {
    millicores as f32 / CORE as f32
}

/// Round a core count up to the next whole core
///
/// The caller must make sure the result fits in a `u8`; larger values saturate.
///
/// # Examples
/// ```
/// use resunits::cpu::ceil;
///
/// assert_eq!(ceil(0.5), 1);
/// assert_eq!(ceil(2.0), 2);
/// ```
pub fn ceil(cpu: f32) -> u8 {
    let cpu = f64::from(cpu);
    let cores = cpu.trunc();

    if cpu.fract() == 0.0 {
        return cores as u8;
    }

    (cores + 1.0) as u8
}

fn out_of_range(input: &str) -> ResUnitsError {
    debug!(input = %input, "cpu quantity out of range");
    ResUnitsError::OutOfRange {
        input: input.to_string(),
        target: "u32 millicores",
    }
}
