//! Estimation configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default full-coverage baseline
pub const DEFAULT_BASE_POINTS: u32 = 100;

/// Estimation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimationConfig {
    /// Baseline total every target is normalized against
    pub base_points: u32,
    /// Smallest whole-number share a child/parent pairing may receive
    pub min_share: u32,
    /// Maximum in-flight fetches during portfolio item fan-out
    pub fan_out_concurrency: usize,
}

impl EstimationConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With base points
    #[inline]
    #[must_use]
    pub fn with_base_points(mut self, base_points: u32) -> Self {
        self.base_points = base_points;
        self
    }

    /// With minimum pairing share
    #[inline]
    #[must_use]
    pub fn with_min_share(mut self, min_share: u32) -> Self {
        self.min_share = min_share;
        self
    }

    /// With fan-out concurrency
    #[inline]
    #[must_use]
    pub fn with_fan_out_concurrency(mut self, limit: usize) -> Self {
        self.fan_out_concurrency = limit;
        self
    }

    /// Parse configuration from TOML; missing keys take defaults
    ///
    /// # Errors
    /// - `ConfigError::Parse` on malformed TOML
    /// - `ConfigError::Invalid` if a value is out of range
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    /// `ConfigError::Invalid` naming the first zero-valued field
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_points == 0 {
            return Err(ConfigError::Invalid {
                field: "base_points",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.min_share == 0 {
            return Err(ConfigError::Invalid {
                field: "min_share",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.fan_out_concurrency == 0 {
            return Err(ConfigError::Invalid {
                field: "fan_out_concurrency",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for EstimationConfig {
    fn default() -> Self {
        Self {
            base_points: DEFAULT_BASE_POINTS,
            min_share: 1,
            fan_out_concurrency: 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EstimationConfig::new();
        assert_eq!(config.base_points, 100);
        assert_eq!(config.min_share, 1);
        assert_eq!(config.fan_out_concurrency, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn toml_overrides_and_defaults() {
        let config = EstimationConfig::from_toml_str("min_share = 5\n").unwrap();
        assert_eq!(config.min_share, 5);
        assert_eq!(config.base_points, 100);
    }

    #[test]
    fn zero_values_rejected() {
        let err = EstimationConfig::new().with_base_points(0).validate().unwrap_err();
        assert!(err.to_string().contains("base_points"));

        let err = EstimationConfig::from_toml_str("fan_out_concurrency = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "fan_out_concurrency", .. }));
    }

    #[test]
    fn malformed_toml_rejected() {
        let err = EstimationConfig::from_toml_str("base_points = \"lots\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
