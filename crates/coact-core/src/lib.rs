//! Coact-Core: Foundation types for multi-muscle co-activation analysis
//!
//! Holds the frame-major activity matrix and the error type shared by
//! the metric and simulation crates.

pub mod activity_signal;
pub mod error;

pub use activity_signal::*;
pub use error::{CoactError, CoactResult};
