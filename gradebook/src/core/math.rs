//! Arithmetic helpers.

use crate::gradebook::Score;

/// Arithmetic mean of `scores`, or `None` when there is nothing to average.
pub fn average(scores: &[Score]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    let sum: f64 = scores.iter().map(|score| *score as f64).sum();
    Some(sum / scores.len() as f64)
}
