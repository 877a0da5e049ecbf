//! Trajectory through the co-contraction / mean-activity plane

use crate::cci::{cci, cci_with_policy, DegeneracyPolicy};
use crate::mean_activity::mean_activity;
use coact_core::{ActivitySignal, CoactResult};
use serde::{Deserialize, Serialize};

/// Frame-aligned planar path: point `i` is `(cci[i], mean_activity[i])`
/// and corresponds to frame `i` of the source signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoactivationPath {
    /// Co-contraction index per frame (x coordinate)
    #[serde(with = "crate::float_serde::vec")]
    pub cci: Vec<f64>,
    /// Mean activity per frame (y coordinate)
    pub mean_activity: Vec<f64>,
}

impl CoactivationPath {
    /// x coordinates
    pub fn x(&self) -> &[f64] {
        &self.cci
    }

    /// y coordinates
    pub fn y(&self) -> &[f64] {
        &self.mean_activity
    }

    /// Number of points (frames)
    pub fn len(&self) -> usize {
        self.cci.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cci.is_empty()
    }

    /// Points in frame order
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.cci.iter().copied().zip(self.mean_activity.iter().copied())
    }
}

/// Compose the path from CCI and mean activity of the same signal
pub fn compose_path(signal: &ActivitySignal) -> CoactivationPath {
    CoactivationPath {
        cci: cci(signal),
        mean_activity: mean_activity(signal),
    }
}

/// Compose the path under an explicit zero-sum policy
pub fn compose_path_with_policy(
    signal: &ActivitySignal,
    policy: DegeneracyPolicy,
) -> CoactResult<CoactivationPath> {
    Ok(CoactivationPath {
        cci: cci_with_policy(signal, policy)?,
        mean_activity: mean_activity(signal),
    })
}
