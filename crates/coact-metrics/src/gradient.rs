//! Second-order numerical differentiation over frame index
//!
//! Central differences in the interior, second-order one-sided differences
//! at both ends. Unit spacing: the derivative is per frame.

use coact_core::{CoactError, CoactResult};

/// Minimum samples for a second-order one-sided difference
pub const MIN_GRADIENT_SAMPLES: usize = 3;

/// Numerical gradient of a uniformly sampled sequence.
///
/// Exact for polynomials up to degree two, including at the endpoints.
pub fn gradient(values: &[f64]) -> CoactResult<Vec<f64>> {
    let n = values.len();
    if n < MIN_GRADIENT_SAMPLES {
        return Err(CoactError::TooFewFrames {
            frames: n,
            required: MIN_GRADIENT_SAMPLES,
        });
    }

    let mut out = Vec::with_capacity(n);
    out.push((-3.0 * values[0] + 4.0 * values[1] - values[2]) / 2.0);
    out.extend(values.windows(3).map(|w| (w[2] - w[0]) / 2.0));
    out.push((3.0 * values[n - 1] - 4.0 * values[n - 2] + values[n - 3]) / 2.0);

    Ok(out)
}

/// Per-frame arc-length element `dz_i = sqrt(dx_i² + dy_i²)` of a planar path
pub fn arc_length_elements(x: &[f64], y: &[f64]) -> CoactResult<Vec<f64>> {
    if x.len() != y.len() {
        return Err(CoactError::InvalidInput {
            reason: format!("path coordinates differ in length: {} vs {}", x.len(), y.len()),
        });
    }

    let dx = gradient(x)?;
    let dy = gradient(y)?;
    Ok(dx.iter().zip(&dy).map(|(a, b)| (a * a + b * b).sqrt()).collect())
}
