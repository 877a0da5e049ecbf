//! Time-varying mean activity across muscles

use coact_core::ActivitySignal;

/// Arithmetic mean of every frame's channel values.
///
/// Output has one value per frame, in frame order.
pub fn mean_activity(signal: &ActivitySignal) -> Vec<f64> {
    let channels = signal.channels() as f64;
    signal
        .rows()
        .map(|row| row.iter().sum::<f64>() / channels)
        .collect()
}
