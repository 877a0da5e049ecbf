//! Configuration management for co-activation metrics

use crate::cci::DegeneracyPolicy;
use crate::potential::PotentialField;
use coact_core::{CoactError, CoactResult};
use serde::{Deserialize, Serialize};

/// Metric configuration: which potential to integrate and how strict to be
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricConfig {
    /// Configuration name/profile
    pub name: String,
    /// Handling of frames whose channel sum is zero
    #[serde(default)]
    pub degeneracy_policy: DegeneracyPolicy,
    /// Potential field integrated along the path
    pub potential: PotentialField,
    /// Reject signals with a different channel count (guards against transposed input)
    #[serde(default)]
    pub expected_channels: Option<usize>,
}

impl MetricConfig {
    /// Pure path-length metric (constant unit potential)
    pub fn path_length() -> Self {
        MetricConfig {
            name: "Path Length".to_string(),
            degeneracy_policy: DegeneracyPolicy::Propagate,
            potential: PotentialField::Constant { value: 1.0 },
            expected_channels: None,
        }
    }

    /// Strict configuration for a fixed muscle set
    pub fn strict(potential: PotentialField, channels: usize) -> Self {
        MetricConfig {
            name: format!("Strict {}", potential.description()),
            degeneracy_policy: DegeneracyPolicy::Reject,
            potential,
            expected_channels: Some(channels),
        }
    }

    /// Set the potential field
    pub fn with_potential(mut self, potential: PotentialField) -> Self {
        self.potential = potential;
        self
    }

    /// Set the zero-sum policy
    pub fn with_policy(mut self, policy: DegeneracyPolicy) -> Self {
        self.degeneracy_policy = policy;
        self
    }

    /// Validate entire configuration
    pub fn validate(&self) -> CoactResult<()> {
        if self.name.is_empty() {
            return Err(CoactError::ConfigurationError {
                message: "Configuration name cannot be empty".to_string(),
            });
        }

        if self.expected_channels == Some(0) {
            return Err(CoactError::ConfigurationError {
                message: "Expected channel count must be at least 1".to_string(),
            });
        }

        self.potential.validate().map_err(|e| CoactError::ConfigurationError {
            message: format!("Potential configuration invalid: {}", e),
        })
    }

    /// Export configuration to JSON
    pub fn to_json(&self) -> CoactResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CoactError::ConfigurationError {
            message: format!("Failed to serialize configuration: {}", e),
        })
    }

    /// Import configuration from JSON
    pub fn from_json(json: &str) -> CoactResult<Self> {
        let config: MetricConfig = serde_json::from_str(json).map_err(|e| CoactError::ConfigurationError {
            message: format!("Failed to deserialize configuration: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for MetricConfig {
    fn default() -> Self {
        Self::path_length()
    }
}
