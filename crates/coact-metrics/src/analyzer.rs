//! One-shot co-activation analysis driven by a [`MetricConfig`]

use crate::config::MetricConfig;
use crate::integral::integrate_path;
use crate::path::{compose_path_with_policy, CoactivationPath};
use crate::potential::Potential;
use coact_core::{ActivitySignal, CoactResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, info};
use uuid::Uuid;

/// Everything computed for one trial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricReport {
    /// Identifier of the analysed signal
    pub signal_id: Uuid,
    /// Configuration name the report was produced with
    pub config_name: String,
    pub frames: usize,
    pub channels: usize,
    /// (CCI, mean activity) trajectory
    pub path: CoactivationPath,
    /// Arc-length element per frame
    #[serde(with = "crate::float_serde::vec")]
    pub arc_length: Vec<f64>,
    /// Total discretized path length
    #[serde(with = "crate::float_serde")]
    pub path_length: f64,
    /// Frame-normalized potential path integral
    #[serde(with = "crate::float_serde")]
    pub metric: f64,
    /// Frames whose CCI is NaN or infinite
    pub non_finite_frames: usize,
}

impl MetricReport {
    /// Mean arc length per frame, the metric under a unit potential
    pub fn mean_arc_length(&self) -> f64 {
        self.path_length / self.frames as f64
    }

    /// Export report to JSON
    pub fn to_json(&self) -> CoactResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| coact_core::CoactError::ConfigurationError {
            message: format!("Failed to serialize report: {}", e),
        })
    }
}

/// Stateless analyzer; safe to share across threads
#[derive(Debug, Clone)]
pub struct CoactivationAnalyzer {
    config: MetricConfig,
}

impl CoactivationAnalyzer {
    /// Create analyzer after validating the configuration
    pub fn new(config: MetricConfig) -> CoactResult<Self> {
        config.validate()?;
        Ok(CoactivationAnalyzer { config })
    }

    /// Get analyzer configuration
    pub fn config(&self) -> &MetricConfig {
        &self.config
    }

    /// Analyze with the configured potential
    pub fn analyze(&self, signal: &ActivitySignal) -> CoactResult<MetricReport> {
        self.analyze_with(signal, &self.config.potential)
    }

    /// Analyze with a caller-supplied potential, keeping the configured policy
    pub fn analyze_with<P>(&self, signal: &ActivitySignal, potential: &P) -> CoactResult<MetricReport>
    where
        P: Potential + ?Sized,
    {
        let span = debug_span!(
            "analyze",
            signal_id = %signal.id(),
            frames = signal.frames(),
            channels = signal.channels()
        );
        let _enter = span.enter();

        if let Some(expected) = self.config.expected_channels {
            signal.ensure_channels(expected)?;
        }

        let path = compose_path_with_policy(signal, self.config.degeneracy_policy)?;
        let non_finite_frames = path.x().iter().filter(|v| !v.is_finite()).count();
        debug!(non_finite_frames, "composed co-activation path");

        let integral = integrate_path(&path, potential)?;
        let path_length = integral.path_length();

        info!(
            config = %self.config.name,
            metric = integral.metric,
            path_length,
            "co-activation analysis complete"
        );

        Ok(MetricReport {
            signal_id: signal.id(),
            config_name: self.config.name.clone(),
            frames: signal.frames(),
            channels: signal.channels(),
            path,
            arc_length: integral.arc_length,
            path_length,
            metric: integral.metric,
            non_finite_frames,
        })
    }
}

impl Default for CoactivationAnalyzer {
    fn default() -> Self {
        CoactivationAnalyzer {
            config: MetricConfig::default(),
        }
    }
}
