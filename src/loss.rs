//! Loss functions scoring a scalar prediction against a scalar target.
use std::fmt;

/// A pointwise loss with an analytic derivative.
///
/// Implementations hold no per-call state, so a single instance can be
/// shared across models via `Arc`.
pub trait LossFunction: fmt::Debug + Send + Sync {
    /// Loss for one prediction/target pair. Non-negative.
    fn loss(&self, predicted: f64, actual: f64) -> f64;
    /// d(loss)/d(predicted) at the same pair.
    fn derivative(&self, predicted: f64, actual: f64) -> f64;
}

/// Squared error: usable for any real-valued target.
#[derive(Debug, Clone, Default)]
pub struct MeanSquaredError;

impl LossFunction for MeanSquaredError {
    fn loss(&self, predicted: f64, actual: f64) -> f64 {
        (predicted - actual).powi(2)
    }

    fn derivative(&self, predicted: f64, actual: f64) -> f64 {
        2.0 * (predicted - actual)
    }
}

// Keeps predictions away from exact 0 and 1 so the log and the derivative
// denominator stay finite.
const EPSILON: f64 = 1e-15;

/// Binary cross-entropy over a probability prediction and a {0, 1} target.
#[derive(Debug, Clone, Default)]
pub struct BinaryCrossEntropy;

impl LossFunction for BinaryCrossEntropy {
    fn loss(&self, predicted: f64, actual: f64) -> f64 {
        let p = predicted.clamp(EPSILON, 1.0 - EPSILON);
        -(actual * p.ln() + (1.0 - actual) * (1.0 - p).ln())
    }

    fn derivative(&self, predicted: f64, actual: f64) -> f64 {
        let p = predicted.clamp(EPSILON, 1.0 - EPSILON);
        (p - actual) / (p * (1.0 - p))
    }
}
