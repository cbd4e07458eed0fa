//! Resource limits configuration module
//!
//! A `ResourceLimits` document declares the CPU and memory a workload may
//! use, written the way container limits usually are:
//!
//! ```toml
//! cpu = "500m"
//! memory = "512MiB"
//! ephemeral_storage = "10GB"
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cpu::Millicores;
use crate::size::ByteSize;
use crate::size::units::MIB;
use crate::{ResUnitsError, Result};

/// Largest number of whole cores a limit may round up to
pub const MAX_CORES: u8 = u8::MAX;

/// CPU, memory, and storage limits of a workload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceLimits {
    /// CPU allocation
    pub cpu: Millicores,
    /// Memory limit
    pub memory: ByteSize,
    /// Scratch disk limit, unlimited when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ephemeral_storage: Option<ByteSize>,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            cpu: Millicores::new(1000),
            memory: ByteSize::new(512 * MIB),
            ephemeral_storage: None,
        }
    }
}

impl ResourceLimits {
    /// Create limits with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the limits
    pub fn validate(&self) -> Result<()> {
        if self.cpu.is_zero() {
            return Err(invalid("CPU limit must be greater than 0".to_string()));
        }

        // Whole cores are reported as a u8
        if self.cpu.as_cores() > f32::from(MAX_CORES) {
            return Err(invalid(format!(
                "CPU limit too large: {} (max: {} cores)",
                self.cpu, MAX_CORES
            )));
        }

        if self.memory.is_zero() {
            return Err(invalid("Memory limit must be greater than 0".to_string()));
        }

        if let Some(storage) = self.ephemeral_storage {
            if storage.is_zero() {
                return Err(invalid(
                    "Ephemeral storage limit must be greater than 0".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Set the CPU allocation
    pub fn with_cpu(mut self, cpu: Millicores) -> Self {
        self.cpu = cpu;
        self
    }

    /// Set the memory limit
    pub fn with_memory(mut self, memory: ByteSize) -> Self {
        self.memory = memory;
        self
    }

    /// Set the scratch disk limit
    pub fn with_ephemeral_storage(mut self, storage: ByteSize) -> Self {
        self.ephemeral_storage = Some(storage);
        self
    }

    /// Whole cores needed to satisfy the CPU allocation
    pub fn cores(&self) -> u8 {
        self.cpu.whole_cores()
    }

    /// Parse and validate limits from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let limits: Self = toml::from_str(content)?;
        limits.validate()?;
        Ok(limits)
    }

    /// Serialize the limits as pretty TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn invalid(message: String) -> ResUnitsError {
    warn!(reason = %message, "invalid resource limits");
    ResUnitsError::ConfigError(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn test_default_is_valid() {
        let limits = ResourceLimits::default();
        assert!(limits.validate().is_ok());
        assert_eq!(limits.cores(), 1);
        assert_eq!(limits.memory.to_string(), "512MiB");
    }

    #[test]
    fn test_from_toml_str() {
        let limits = ResourceLimits::from_toml_str(
            r#"
                cpu = "1500m"
                memory = "2Gi"
                ephemeral_storage = "10GB"
            "#,
        )
        .expect("valid limits");

        assert_eq!(limits.cpu.as_millis(), 1500);
        assert_eq!(limits.cores(), 2);
        assert_eq!(limits.memory.as_u64(), 2 << 30);
        assert_eq!(limits.ephemeral_storage, Some(ByteSize::new(10_000_000_000)));
    }

    #[test]
    fn test_from_toml_numeric_values() {
        let limits =
            ResourceLimits::from_toml_str("cpu = 0.25\nmemory = 1048576\n").expect("valid limits");

        assert_eq!(limits.cpu, Millicores::new(250));
        assert_eq!(limits.memory, ByteSize::new(1 << 20));
        assert_eq!(limits.ephemeral_storage, None);
    }

    #[test]
    fn test_from_toml_rejects_bad_quantities() {
        let err =
            ResourceLimits::from_toml_str("cpu = \"2.5m\"\nmemory = \"1GiB\"\n").unwrap_err();
        assert!(matches!(err, ResUnitsError::ConfigError(_)));

        let err = ResourceLimits::from_toml_str("cpu = \"1\"\nmemory = \"1XB\"\n").unwrap_err();
        assert!(matches!(err, ResUnitsError::ConfigError(_)));

        assert!(ResourceLimits::from_toml_str("cpu = \"1\"\n").is_err());
    }

    #[test]
    fn test_validate() {
        let zero_cpu = ResourceLimits::new().with_cpu(Millicores::ZERO);
        assert!(zero_cpu.validate().is_err());

        let zero_memory = ResourceLimits::new().with_memory(ByteSize::ZERO);
        assert!(zero_memory.validate().is_err());

        let zero_storage = ResourceLimits::new().with_ephemeral_storage(ByteSize::ZERO);
        assert!(zero_storage.validate().is_err());

        let too_many_cores = ResourceLimits::new().with_cpu(Millicores::new(256_000));
        assert!(too_many_cores.validate().is_err());

        let max_cores = ResourceLimits::new().with_cpu(Millicores::new(255_000));
        assert!(max_cores.validate().is_ok());
        assert_eq!(max_cores.cores(), 255);
    }

    #[traced_test]
    #[test]
    fn test_validate_logs_reason() {
        let limits = ResourceLimits::new().with_memory(ByteSize::ZERO);
        assert!(limits.validate().is_err());
        assert!(logs_contain("Memory limit must be greater than 0"));
    }

    #[test]
    fn test_toml_roundtrip() {
        let limits = ResourceLimits::new()
            .with_cpu(Millicores::new(750))
            .with_memory(ByteSize::new(3 * MIB + 1))
            .with_ephemeral_storage(ByteSize::new(5 << 30));

        let toml_str = limits.to_toml_string().expect("Failed to serialize to TOML");
        assert!(toml_str.contains("cpu = \"750m\""));

        let deserialized =
            ResourceLimits::from_toml_str(&toml_str).expect("Failed to deserialize from TOML");
        assert_eq!(deserialized, limits);
    }

    #[test]
    fn test_serde_json_roundtrip() {
        let limits = ResourceLimits::new().with_cpu(Millicores::new(2000));
        let json = serde_json::to_string(&limits).expect("Failed to serialize");
        let deserialized: ResourceLimits =
            serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(deserialized, limits);
    }
}
