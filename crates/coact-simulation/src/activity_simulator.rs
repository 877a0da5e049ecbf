//! Multi-muscle activity simulator producing [`ActivitySignal`]s

use crate::activation_patterns::ActivationPattern;
use coact_core::{ActivitySignal, CoactError, CoactResult};
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;

/// Configuration for activity simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Frame rate in Hz
    pub sampling_rate: f64,
    /// One activation pattern per channel, in column order
    pub channel_patterns: Vec<ActivationPattern>,
    /// Gaussian noise standard deviation (0.0 = no noise)
    pub noise_std: f64,
    /// Lower clamp for every sample; positive keeps channel sums non-zero
    pub floor: f64,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl SimulationConfig {
    /// Agonist/antagonist pair cycling in anti-phase
    pub fn antagonist_pair() -> Self {
        Self {
            channel_patterns: vec![
                ActivationPattern::Sinusoidal { frequency: 1.0, amplitude: 0.3, baseline: 0.4, phase: 0.0 },
                ActivationPattern::Sinusoidal { frequency: 1.0, amplitude: 0.3, baseline: 0.4, phase: PI },
            ],
            ..Self::default()
        }
    }

    /// Validate simulation parameters
    pub fn validate(&self) -> CoactResult<()> {
        if !(self.sampling_rate.is_finite() && self.sampling_rate > 0.0) {
            return Err(CoactError::SimulationError {
                message: format!("Sampling rate must be positive, got {}", self.sampling_rate),
            });
        }
        if self.channel_patterns.is_empty() {
            return Err(CoactError::SimulationError {
                message: "At least one channel pattern is required".to_string(),
            });
        }
        if let Some(idx) = self.channel_patterns.iter().position(|p| !p.is_valid()) {
            return Err(CoactError::SimulationError {
                message: format!("Channel {} has invalid pattern parameters", idx),
            });
        }
        if !(self.noise_std.is_finite() && self.noise_std >= 0.0) {
            return Err(CoactError::SimulationError {
                message: "Noise standard deviation must be non-negative".to_string(),
            });
        }
        if !(self.floor.is_finite() && self.floor >= 0.0) {
            return Err(CoactError::SimulationError {
                message: "Floor must be non-negative".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            sampling_rate: 100.0,
            channel_patterns: vec![ActivationPattern::Constant { level: 0.3 }; 2],
            noise_std: 0.01,
            floor: 1e-3,
            seed: None,
        }
    }
}

/// Activity simulator
pub struct ActivitySimulator {
    config: SimulationConfig,
    rng: rand::rngs::StdRng,
    normal_dist: Normal<f64>,
    time_offset: f64,
}

impl ActivitySimulator {
    /// Create new simulator with configuration
    pub fn new(config: SimulationConfig) -> CoactResult<Self> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let rng = rand::rngs::StdRng::seed_from_u64(seed);
        let normal_dist = Normal::new(0.0, config.noise_std)
            .map_err(|e| CoactError::SimulationError {
                message: format!("Failed to create normal distribution: {}", e),
            })?;

        Ok(ActivitySimulator {
            config,
            rng,
            normal_dist,
            time_offset: 0.0,
        })
    }

    /// Generate activity for the given duration (seconds)
    pub fn generate(&mut self, duration: f64) -> CoactResult<ActivitySignal> {
        let frames = (duration * self.config.sampling_rate).round() as usize;
        if !(duration > 0.0) || frames == 0 {
            return Err(CoactError::SimulationError {
                message: format!("Duration {}s yields no frames", duration),
            });
        }

        let channels = self.config.channel_patterns.len();
        let dt = 1.0 / self.config.sampling_rate;
        let mut data = Vec::with_capacity(frames * channels);

        // Frame-interleaved: all channels of frame 0, then frame 1, ...
        for frame_idx in 0..frames {
            let time = self.time_offset + frame_idx as f64 * dt;
            for channel_idx in 0..channels {
                let activation = self.config.channel_patterns[channel_idx].activation_at_time(time);
                let noise = if self.config.noise_std > 0.0 {
                    self.normal_dist.sample(&mut self.rng)
                } else {
                    0.0
                };
                data.push((activation + noise).max(self.config.floor));
            }
        }

        self.time_offset += frames as f64 * dt;
        debug!(frames, channels, "generated simulated activity");

        ActivitySignal::from_interleaved(data, channels)
    }

    /// Generate activity with a random constant level per channel
    pub fn generate_random_holds(&mut self, frames: usize) -> CoactResult<ActivitySignal> {
        let channels = self.config.channel_patterns.len();
        let floor = self.config.floor;
        let levels: Vec<f64> = (0..channels).map(|_| self.rng.gen_range(0.05..0.95)).collect();
        let data = (0..frames)
            .flat_map(|_| levels.iter().copied())
            .map(|level| level.max(floor))
            .collect();
        ActivitySignal::from_interleaved(data, channels)
    }

    /// Reset time offset
    pub fn reset_time(&mut self) {
        self.time_offset = 0.0;
    }

    /// Get current configuration
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}
