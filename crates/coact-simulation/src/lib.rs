//! Coact-Simulation: synthetic multi-muscle activation envelopes
//!
//! Generates already-normalized, non-negative activity matrices for testing
//! and benchmarking the metric pipeline.

pub mod activation_patterns;
pub mod activity_simulator;

pub use activation_patterns::*;
pub use activity_simulator::*;
