//! Coact-Metrics: Co-activation metrics for multi-muscle EMG
//!
//! Mean activity, Winter co-contraction index, the (CCI, mean activity)
//! trajectory and the potential path integral over that trajectory.

pub mod mean_activity;
pub mod cci;
pub mod path;
pub mod gradient;
pub mod potential;
pub mod integral;
pub mod config;
pub mod analyzer;
mod float_serde;

pub use mean_activity::mean_activity;
pub use cci::{cci, cci_with_policy, DegeneracyPolicy};
pub use path::{compose_path, compose_path_with_policy, CoactivationPath};
pub use gradient::{arc_length_elements, gradient};
pub use potential::{Pointwise, Potential, PotentialField};
pub use integral::{
    integrate_path, potential_path_integral, potential_path_integral_with_policy, PathIntegral,
};
pub use config::MetricConfig;
pub use analyzer::{CoactivationAnalyzer, MetricReport};
