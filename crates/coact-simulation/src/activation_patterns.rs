//! Pre-defined activation envelope patterns

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Activation envelope of a single muscle over time (fraction of MVC)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ActivationPattern {
    /// Constant activation level
    Constant { level: f64 },
    /// Sinusoidal contraction cycle
    Sinusoidal {
        frequency: f64,
        amplitude: f64,
        baseline: f64,
        /// Phase offset in radians; `PI` gives an antagonist in anti-phase
        phase: f64,
    },
    /// Linear ramp, holding the end level afterwards
    Ramp {
        start_level: f64,
        end_level: f64,
        duration: f64,
    },
    /// On/off bursts
    Burst {
        on_duration: f64,
        off_duration: f64,
        amplitude: f64,
    },
    /// Exponentially decaying activation
    Fatigue {
        initial_amplitude: f64,
        decay_rate: f64,
    },
}

impl ActivationPattern {
    /// Activation level at given time (seconds)
    pub fn activation_at_time(&self, time: f64) -> f64 {
        match *self {
            ActivationPattern::Constant { level } => level,

            ActivationPattern::Sinusoidal { frequency, amplitude, baseline, phase } => {
                baseline + amplitude * (2.0 * PI * frequency * time + phase).sin()
            }

            ActivationPattern::Ramp { start_level, end_level, duration } => {
                if time >= duration {
                    end_level
                } else {
                    start_level + (end_level - start_level) * (time / duration)
                }
            }

            ActivationPattern::Burst { on_duration, off_duration, amplitude } => {
                let phase = time % (on_duration + off_duration);
                if phase < on_duration {
                    amplitude
                } else {
                    0.0
                }
            }

            ActivationPattern::Fatigue { initial_amplitude, decay_rate } => {
                initial_amplitude * (-decay_rate * time).exp()
            }
        }
    }

    /// Durations and rates must be usable
    pub fn is_valid(&self) -> bool {
        match *self {
            ActivationPattern::Constant { level } => level.is_finite(),
            ActivationPattern::Sinusoidal { frequency, amplitude, baseline, phase } => {
                [frequency, amplitude, baseline, phase].iter().all(|v| v.is_finite())
            }
            ActivationPattern::Ramp { start_level, end_level, duration } => {
                start_level.is_finite() && end_level.is_finite() && duration > 0.0
            }
            ActivationPattern::Burst { on_duration, off_duration, amplitude } => {
                on_duration >= 0.0 && off_duration >= 0.0
                    && on_duration + off_duration > 0.0
                    && amplitude.is_finite()
            }
            ActivationPattern::Fatigue { initial_amplitude, decay_rate } => {
                initial_amplitude.is_finite() && decay_rate.is_finite()
            }
        }
    }

    /// Get pattern description
    pub fn description(&self) -> &'static str {
        match self {
            ActivationPattern::Constant { .. } => "Constant activation",
            ActivationPattern::Sinusoidal { .. } => "Sinusoidal contraction",
            ActivationPattern::Ramp { .. } => "Gradual ramp",
            ActivationPattern::Burst { .. } => "Burst pattern",
            ActivationPattern::Fatigue { .. } => "Muscle fatigue",
        }
    }

    /// Create common preset patterns
    pub fn presets() -> Vec<(&'static str, ActivationPattern)> {
        vec![
            ("Rest", ActivationPattern::Constant { level: 0.05 }),
            ("Moderate Hold", ActivationPattern::Constant { level: 0.4 }),
            ("Agonist Cycle", ActivationPattern::Sinusoidal {
                frequency: 1.0, amplitude: 0.3, baseline: 0.4, phase: 0.0,
            }),
            ("Antagonist Cycle", ActivationPattern::Sinusoidal {
                frequency: 1.0, amplitude: 0.3, baseline: 0.4, phase: PI,
            }),
            ("Warmup", ActivationPattern::Ramp {
                start_level: 0.1, end_level: 0.7, duration: 10.0,
            }),
            ("Exercise Bursts", ActivationPattern::Burst {
                on_duration: 2.0, off_duration: 1.0, amplitude: 0.8,
            }),
            ("Fatigue Test", ActivationPattern::Fatigue {
                initial_amplitude: 0.9, decay_rate: 0.1,
            }),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_values() {
        assert_eq!(ActivationPattern::Constant { level: 0.3 }.activation_at_time(5.0), 0.3);

        let ramp = ActivationPattern::Ramp { start_level: 0.0, end_level: 1.0, duration: 2.0 };
        assert_eq!(ramp.activation_at_time(1.0), 0.5);
        assert_eq!(ramp.activation_at_time(3.0), 1.0);

        let burst = ActivationPattern::Burst { on_duration: 1.0, off_duration: 1.0, amplitude: 0.8 };
        assert_eq!(burst.activation_at_time(0.5), 0.8);
        assert_eq!(burst.activation_at_time(1.5), 0.0);
        assert_eq!(burst.activation_at_time(2.5), 0.8);

        let fatigue = ActivationPattern::Fatigue { initial_amplitude: 1.0, decay_rate: 1.0 };
        assert!((fatigue.activation_at_time(1.0) - (-1.0f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_antagonist_is_anti_phase() {
        let presets = ActivationPattern::presets();
        let agonist = presets.iter().find(|(n, _)| *n == "Agonist Cycle").unwrap().1;
        let antagonist = presets.iter().find(|(n, _)| *n == "Antagonist Cycle").unwrap().1;

        for i in 0..20 {
            let t = i as f64 * 0.05;
            let sum = agonist.activation_at_time(t) + antagonist.activation_at_time(t);
            assert!((sum - 0.8).abs() < 1e-9);
        }
    }

    #[test]
    fn test_validity() {
        for (_, pattern) in ActivationPattern::presets() {
            assert!(pattern.is_valid());
        }
        assert!(!ActivationPattern::Ramp { start_level: 0.0, end_level: 1.0, duration: 0.0 }.is_valid());
        assert!(!ActivationPattern::Burst { on_duration: 0.0, off_duration: 0.0, amplitude: 1.0 }.is_valid());
    }
}
