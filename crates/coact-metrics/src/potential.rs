//! Scalar potential fields over the co-contraction / mean-activity plane

use coact_core::{CoactError, CoactResult};
use serde::{Deserialize, Serialize};

/// Height field evaluated along a path.
///
/// Receives the path's x (CCI) and y (mean activity) coordinates and must
/// return one height per point. Any closure or function of type
/// `Fn(&[f64], &[f64]) -> Vec<f64>` is a `Potential`; implement the trait
/// directly when evaluation can fail.
pub trait Potential {
    fn evaluate(&self, x: &[f64], y: &[f64]) -> CoactResult<Vec<f64>>;
}

impl<F> Potential for F
where
    F: Fn(&[f64], &[f64]) -> Vec<f64>,
{
    fn evaluate(&self, x: &[f64], y: &[f64]) -> CoactResult<Vec<f64>> {
        Ok(self(x, y))
    }
}

/// Adapts a point-wise height function `(x, y) -> h` into a [`Potential`]
#[derive(Debug, Clone, Copy)]
pub struct Pointwise<F>(pub F);

impl<F> Potential for Pointwise<F>
where
    F: Fn(f64, f64) -> f64,
{
    fn evaluate(&self, x: &[f64], y: &[f64]) -> CoactResult<Vec<f64>> {
        Ok(x.iter().zip(y).map(|(&a, &b)| (self.0)(a, b)).collect())
    }
}

/// Built-in potential fields, serializable for use in configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PotentialField {
    /// Same height everywhere. `1.0` yields the mean arc length per frame.
    Constant { value: f64 },
    /// Tilted plane `a*x + b*y + c`
    Linear { a: f64, b: f64, c: f64 },
    /// Anisotropic Gaussian hill (positive amplitude) or well (negative)
    Gaussian {
        amplitude: f64,
        center_x: f64,
        center_y: f64,
        sigma_x: f64,
        sigma_y: f64,
    },
    /// Radially symmetric bowl `curvature * r²` around a center
    Paraboloid {
        center_x: f64,
        center_y: f64,
        curvature: f64,
    },
}

impl PotentialField {
    /// Height at a single point
    pub fn height(&self, x: f64, y: f64) -> f64 {
        match *self {
            PotentialField::Constant { value } => value,
            PotentialField::Linear { a, b, c } => a * x + b * y + c,
            PotentialField::Gaussian { amplitude, center_x, center_y, sigma_x, sigma_y } => {
                let u = (x - center_x) / sigma_x;
                let v = (y - center_y) / sigma_y;
                amplitude * (-0.5 * (u * u + v * v)).exp()
            }
            PotentialField::Paraboloid { center_x, center_y, curvature } => {
                let dx = x - center_x;
                let dy = y - center_y;
                curvature * (dx * dx + dy * dy)
            }
        }
    }

    /// Check parameters are finite and widths positive
    pub fn validate(&self) -> CoactResult<()> {
        let params = match *self {
            PotentialField::Constant { value } => vec![value],
            PotentialField::Linear { a, b, c } => vec![a, b, c],
            PotentialField::Gaussian { amplitude, center_x, center_y, sigma_x, sigma_y } => {
                if sigma_x <= 0.0 || sigma_y <= 0.0 {
                    return Err(CoactError::ConfigurationError {
                        message: "Gaussian widths must be positive".to_string(),
                    });
                }
                vec![amplitude, center_x, center_y, sigma_x, sigma_y]
            }
            PotentialField::Paraboloid { center_x, center_y, curvature } => {
                vec![center_x, center_y, curvature]
            }
        };

        if params.iter().any(|p| !p.is_finite()) {
            return Err(CoactError::ConfigurationError {
                message: format!("{} potential has non-finite parameters", self.description()),
            });
        }
        Ok(())
    }

    /// Get potential description
    pub fn description(&self) -> &'static str {
        match self {
            PotentialField::Constant { .. } => "Constant",
            PotentialField::Linear { .. } => "Linear",
            PotentialField::Gaussian { .. } => "Gaussian",
            PotentialField::Paraboloid { .. } => "Paraboloid",
        }
    }

    /// Common named potentials
    pub fn presets() -> Vec<(&'static str, PotentialField)> {
        vec![
            ("Zero", PotentialField::Constant { value: 0.0 }),
            ("Path Length", PotentialField::Constant { value: 1.0 }),
            ("Co-contraction Cost", PotentialField::Linear { a: 1.0, b: 0.0, c: 0.0 }),
            ("Effort Cost", PotentialField::Linear { a: 0.0, b: 1.0, c: 0.0 }),
            ("Balanced Well", PotentialField::Gaussian {
                amplitude: -1.0, center_x: 1.0, center_y: 0.5, sigma_x: 0.25, sigma_y: 0.25,
            }),
            ("Rest Bowl", PotentialField::Paraboloid {
                center_x: 0.0, center_y: 0.0, curvature: 1.0,
            }),
        ]
    }
}

impl Potential for PotentialField {
    fn evaluate(&self, x: &[f64], y: &[f64]) -> CoactResult<Vec<f64>> {
        Ok(x.iter().zip(y).map(|(&a, &b)| self.height(a, b)).collect())
    }
}
