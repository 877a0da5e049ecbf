//! Potential path integral over the co-activation trajectory
//!
//! `metric = Σ φ(x_i, y_i) · dz_i / n`, where `(x, y)` is the
//! (CCI, mean activity) path, `dz` its second-order arc-length element and
//! `n` the frame count. Normalizing by frames rather than by path length
//! keeps trials with equal sampling comparable.

use crate::cci::DegeneracyPolicy;
use crate::gradient::arc_length_elements;
use crate::path::{compose_path_with_policy, CoactivationPath};
use crate::potential::Potential;
use coact_core::{ActivitySignal, CoactError, CoactResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Intermediate and final values of one path integration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathIntegral {
    /// Arc-length element per frame
    #[serde(with = "crate::float_serde::vec")]
    pub arc_length: Vec<f64>,
    /// Potential height per frame
    #[serde(with = "crate::float_serde::vec")]
    pub heights: Vec<f64>,
    /// Frame-normalized line integral
    #[serde(with = "crate::float_serde")]
    pub metric: f64,
}

impl PathIntegral {
    /// Total discretized path length `Σ dz`
    pub fn path_length(&self) -> f64 {
        self.arc_length.iter().sum()
    }
}

/// Integrate a potential along an already composed path
pub fn integrate_path<P>(path: &CoactivationPath, potential: &P) -> CoactResult<PathIntegral>
where
    P: Potential + ?Sized,
{
    let arc_length = arc_length_elements(path.x(), path.y())?;
    let heights = potential.evaluate(path.x(), path.y())?;
    if heights.len() != path.len() {
        return Err(CoactError::PotentialShapeMismatch {
            expected: path.len(),
            actual: heights.len(),
        });
    }

    let weighted: f64 = heights.iter().zip(&arc_length).map(|(h, dz)| h * dz).sum();
    let metric = weighted / path.len() as f64;

    debug!(frames = path.len(), metric, "integrated potential along path");

    Ok(PathIntegral {
        arc_length,
        heights,
        metric,
    })
}

/// Frame-normalized line integral of `potential` along the signal's
/// co-activation path. Zero-sum frames propagate as NaN/Inf.
///
/// Requires at least three frames.
pub fn potential_path_integral<P>(signal: &ActivitySignal, potential: &P) -> CoactResult<f64>
where
    P: Potential + ?Sized,
{
    potential_path_integral_with_policy(signal, potential, DegeneracyPolicy::Propagate)
}

/// [`potential_path_integral`] with an explicit zero-sum policy
pub fn potential_path_integral_with_policy<P>(
    signal: &ActivitySignal,
    potential: &P,
    policy: DegeneracyPolicy,
) -> CoactResult<f64>
where
    P: Potential + ?Sized,
{
    let path = compose_path_with_policy(signal, policy)?;
    Ok(integrate_path(&path, potential)?.metric)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::potential::{Pointwise, PotentialField};

    fn bump_signal() -> ActivitySignal {
        // cci = [1, 0.5, 1], mean = [1, 2, 1], dz = [√5, 0, √5]
        ActivitySignal::from_rows(vec![
            vec![1.0, 1.0],
            vec![1.0, 3.0],
            vec![1.0, 1.0],
        ]).unwrap()
    }

    fn varied_signal() -> ActivitySignal {
        ActivitySignal::from_rows(vec![
            vec![0.10, 0.40, 0.20],
            vec![0.30, 0.35, 0.25],
            vec![0.55, 0.20, 0.30],
            vec![0.60, 0.60, 0.50],
            vec![0.20, 0.90, 0.15],
        ]).unwrap()
    }

    #[test]
    fn test_zero_potential_gives_zero() {
        let zero = |x: &[f64], _y: &[f64]| vec![0.0; x.len()];
        assert_eq!(potential_path_integral(&varied_signal(), &zero).unwrap(), 0.0);
    }

    #[test]
    fn test_unit_potential_gives_mean_arc_length() {
        let signal = bump_signal();
        let metric = potential_path_integral(&signal, &PotentialField::Constant { value: 1.0 }).unwrap();
        let expected = 2.0 * 5.0_f64.sqrt() / 3.0;
        assert!((metric - expected).abs() < 1e-12);

        let path = crate::path::compose_path(&varied_signal());
        let integral = integrate_path(&path, &PotentialField::Constant { value: 1.0 }).unwrap();
        assert!((integral.metric - integral.path_length() / 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_heights_weight_arc_length() {
        let tilt = PotentialField::Linear { a: 0.0, b: 1.0, c: 1.0 };
        let metric = potential_path_integral(&bump_signal(), &tilt).unwrap();
        let expected = 4.0 * 5.0_f64.sqrt() / 3.0;
        assert!((metric - expected).abs() < 1e-12);
    }

    #[test]
    fn test_constant_signal_has_zero_metric() {
        let signal = ActivitySignal::from_rows(vec![vec![0.4, 0.2, 0.3]; 10]).unwrap();
        let metric = potential_path_integral(&signal, &PotentialField::Constant { value: 7.0 }).unwrap();
        assert!(metric.abs() < 1e-12);
    }

    #[test]
    fn test_too_few_frames() {
        let signal = ActivitySignal::from_rows(vec![vec![2.0, 0.0], vec![0.0, 2.0]]).unwrap();
        let result = potential_path_integral(&signal, &PotentialField::Constant { value: 1.0 });
        assert_eq!(result, Err(CoactError::TooFewFrames { frames: 2, required: 3 }));
    }

    #[test]
    fn test_mismatched_potential_output() {
        let short = |x: &[f64], _y: &[f64]| vec![1.0; x.len() - 1];
        let result = potential_path_integral(&varied_signal(), &short);
        assert_eq!(
            result,
            Err(CoactError::PotentialShapeMismatch { expected: 5, actual: 4 })
        );
    }

    struct FailingPotential;

    impl Potential for FailingPotential {
        fn evaluate(&self, _x: &[f64], _y: &[f64]) -> CoactResult<Vec<f64>> {
            Err(CoactError::PotentialFailed {
                reason: "lookup table not loaded".to_string(),
            })
        }
    }

    #[test]
    fn test_potential_failure_propagates() {
        let result = potential_path_integral(&varied_signal(), &FailingPotential);
        assert_eq!(
            result,
            Err(CoactError::PotentialFailed {
                reason: "lookup table not loaded".to_string(),
            })
        );
    }

    #[test]
    fn test_dyn_potential() {
        let boxed: Box<dyn Potential> = Box::new(Pointwise(|x: f64, y: f64| x + y));
        let metric = potential_path_integral(&varied_signal(), boxed.as_ref()).unwrap();
        assert!(metric.is_finite());
        assert!(metric > 0.0);
    }

    #[test]
    fn test_zero_frame_policies() {
        let signal = ActivitySignal::from_rows(vec![
            vec![1.0, 1.0],
            vec![0.0, 0.0],
            vec![1.0, 2.0],
            vec![1.0, 1.0],
        ]).unwrap();
        let unit = PotentialField::Constant { value: 1.0 };

        let propagated = potential_path_integral(&signal, &unit).unwrap();
        assert!(propagated.is_nan());

        let rejected = potential_path_integral_with_policy(&signal, &unit, DegeneracyPolicy::Reject);
        assert!(matches!(rejected, Err(CoactError::NumericDegeneracy { frame: 1, .. })));
    }

    #[test]
    fn test_repeat_calls_are_bit_identical() {
        let signal = varied_signal();
        let field = PotentialField::Gaussian {
            amplitude: 1.5, center_x: 0.8, center_y: 0.4, sigma_x: 0.3, sigma_y: 0.2,
        };
        let first = potential_path_integral(&signal, &field).unwrap();
        let second = potential_path_integral(&signal, &field).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }
}
