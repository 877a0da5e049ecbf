//! Co-contraction index after Winter (1990)
//!
//! `cci_i = m * min(row_i) / sum(row_i)`, i.e. the weakest channel's activity
//! relative to the frame mean. Equal activation across all channels gives 1;
//! one dominant channel drives the index to 0.

use coact_core::{ActivitySignal, CoactError, CoactResult};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// What to do with a frame whose channel sum is exactly zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DegeneracyPolicy {
    /// Let IEEE division produce NaN/Inf and carry it downstream
    #[default]
    Propagate,
    /// Fail with `NumericDegeneracy` on the first zero-sum frame
    Reject,
}

/// Co-contraction index per frame, propagating NaN/Inf on zero-sum frames
pub fn cci(signal: &ActivitySignal) -> Vec<f64> {
    let channels = signal.channels() as f64;
    let values: Vec<f64> = signal.rows().map(|row| frame_index(row, channels)).collect();

    let non_finite = values.iter().filter(|v| !v.is_finite()).count();
    if non_finite > 0 {
        warn!(
            signal_id = %signal.id(),
            non_finite,
            "zero channel sum produced non-finite co-contraction values"
        );
    }

    values
}

/// Co-contraction index per frame under an explicit degeneracy policy
pub fn cci_with_policy(signal: &ActivitySignal, policy: DegeneracyPolicy) -> CoactResult<Vec<f64>> {
    match policy {
        DegeneracyPolicy::Propagate => Ok(cci(signal)),
        DegeneracyPolicy::Reject => {
            let channels = signal.channels() as f64;
            signal
                .rows()
                .enumerate()
                .map(|(frame, row)| {
                    if row.iter().sum::<f64>() == 0.0 {
                        Err(CoactError::NumericDegeneracy {
                            frame,
                            reason: "channel sum is zero",
                        })
                    } else {
                        Ok(frame_index(row, channels))
                    }
                })
                .collect()
        }
    }
}

#[inline]
fn frame_index(row: &[f64], channels: f64) -> f64 {
    let min = row.iter().copied().fold(f64::INFINITY, f64::min);
    let sum: f64 = row.iter().sum();
    channels * min / sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_channels_give_unity() {
        for m in 1..=8 {
            let signal = ActivitySignal::from_rows(vec![vec![0.25; m]; 4]).unwrap();
            for value in cci(&signal) {
                assert_eq!(value, 1.0);
            }
        }
    }

    #[test]
    fn test_all_ones_scenario() {
        let signal = ActivitySignal::from_rows(vec![vec![1.0, 1.0]; 3]).unwrap();
        assert_eq!(cci(&signal), vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_single_frame() {
        let signal = ActivitySignal::from_rows(vec![vec![0.5, 1.0, 0.5]]).unwrap();
        assert_eq!(cci(&signal), vec![0.75]);
        assert_eq!(cci_with_policy(&signal, DegeneracyPolicy::Reject).unwrap(), vec![0.75]);
    }

    #[test]
    fn test_alternating_scenario() {
        let signal = ActivitySignal::from_rows(vec![vec![2.0, 0.0], vec![0.0, 2.0]]).unwrap();
        assert_eq!(cci(&signal), vec![0.0, 0.0]);
    }

    #[test]
    fn test_dominance_decreases_toward_zero() {
        let rows: Vec<Vec<f64>> = [1.0, 2.0, 5.0, 10.0, 100.0, 1e6]
            .iter()
            .map(|&dominant| vec![dominant, 1.0, 1.0])
            .collect();
        let signal = ActivitySignal::from_rows(rows).unwrap();
        let values = cci(&signal);

        assert_eq!(values[0], 1.0);
        for pair in values.windows(2) {
            assert!(pair[1] < pair[0]);
            assert!(pair[1] >= 0.0);
        }
        assert!(values[values.len() - 1] < 1e-5);
    }

    #[test]
    fn test_zero_sum_propagates() {
        let signal = ActivitySignal::from_rows(vec![
            vec![1.0, 1.0],
            vec![0.0, 0.0],
            vec![-1.0, 1.0],
        ]).unwrap();
        let values = cci(&signal);
        assert_eq!(values[0], 1.0);
        assert!(values[1].is_nan());
        assert!(values[2].is_infinite());

        let same = cci_with_policy(&signal, DegeneracyPolicy::Propagate).unwrap();
        assert_eq!(same[0], 1.0);
        assert!(same[1].is_nan());
    }

    #[test]
    fn test_zero_sum_rejected() {
        let signal = ActivitySignal::from_rows(vec![
            vec![1.0, 1.0],
            vec![0.5, 0.5],
            vec![0.0, 0.0],
            vec![0.0, 0.0],
        ]).unwrap();
        let result = cci_with_policy(&signal, DegeneracyPolicy::Reject);
        assert_eq!(
            result,
            Err(CoactError::NumericDegeneracy {
                frame: 2,
                reason: "channel sum is zero",
            })
        );
    }

    #[test]
    fn test_reject_matches_propagate_on_clean_data() {
        let signal = ActivitySignal::from_rows(vec![
            vec![0.2, 0.8, 0.4],
            vec![0.6, 0.1, 0.3],
        ]).unwrap();
        assert_eq!(
            cci_with_policy(&signal, DegeneracyPolicy::Reject).unwrap(),
            cci(&signal)
        );
    }
}
