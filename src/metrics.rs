//! Macro-averaged evaluation metrics over parallel label arrays.
use anyhow::{anyhow, Result};
use std::cmp::Ordering;

// Absolute tolerance deciding whether a floating label matches a class.
const CLASS_TOLERANCE: f64 = 0.1;

/// One-vs-rest tallies for a single probed class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Confusion {
    pub true_positives: usize,
    pub true_negatives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
}

/// Tally the one-vs-rest confusion counts for `target_class`.
///
/// Membership on either side uses the class tolerance, so near-integer
/// floating labels compare as exact.
pub fn confusion_for_class(expected: &[f64], predicted: &[f64], target_class: f64) -> Confusion {
    let mut confusion = Confusion::default();
    for (&e, &p) in expected.iter().zip(predicted) {
        let actual_positive = (e - target_class).abs() < CLASS_TOLERANCE;
        let predicted_positive = (p - target_class).abs() < CLASS_TOLERANCE;
        match (actual_positive, predicted_positive) {
            (true, true) => confusion.true_positives += 1,
            (false, false) => confusion.true_negatives += 1,
            (false, true) => confusion.false_positives += 1,
            (true, false) => confusion.false_negatives += 1,
        }
    }
    confusion
}

/// Distinct classes present in `expected`, ascending.
pub fn unique_classes(expected: &[f64]) -> Vec<f64> {
    let mut classes = expected.to_vec();
    classes.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    classes.dedup();
    classes
}

fn check_lengths(expected: &[f64], predicted: &[f64], metric: &str) -> Result<()> {
    if expected.len() != predicted.len() {
        return Err(anyhow!(
            "{}: expected array has {} labels, predicted has {}",
            metric,
            expected.len(),
            predicted.len()
        ));
    }
    Ok(())
}

/// Macro-averaged precision: mean over classes of `TP / (TP + FP)`.
///
/// A class with no positive predictions contributes 0 but still counts in
/// the average. Empty input yields 0.0.
pub fn precision(expected: &[f64], predicted: &[f64]) -> Result<f64> {
    check_lengths(expected, predicted, "Precision")?;
    let classes = unique_classes(expected);
    if classes.is_empty() {
        return Ok(0.0);
    }
    let mut total = 0.0;
    for &class in &classes {
        let cm = confusion_for_class(expected, predicted, class);
        let denominator = cm.true_positives + cm.false_positives;
        if denominator > 0 {
            total += cm.true_positives as f64 / denominator as f64;
        }
    }
    Ok(total / classes.len() as f64)
}

/// Macro-averaged recall: mean over classes of `TP / (TP + FN)`.
pub fn recall(expected: &[f64], predicted: &[f64]) -> Result<f64> {
    check_lengths(expected, predicted, "Recall")?;
    let classes = unique_classes(expected);
    if classes.is_empty() {
        return Ok(0.0);
    }
    let mut total = 0.0;
    for &class in &classes {
        let cm = confusion_for_class(expected, predicted, class);
        let denominator = cm.true_positives + cm.false_negatives;
        if denominator > 0 {
            total += cm.true_positives as f64 / denominator as f64;
        }
    }
    Ok(total / classes.len() as f64)
}

/// Macro-averaged F1: mean over classes of the harmonic mean of that
/// class's precision and recall (0 when both are 0).
pub fn f1_score(expected: &[f64], predicted: &[f64]) -> Result<f64> {
    check_lengths(expected, predicted, "F1")?;
    let classes = unique_classes(expected);
    if classes.is_empty() {
        return Ok(0.0);
    }
    let mut total = 0.0;
    for &class in &classes {
        let cm = confusion_for_class(expected, predicted, class);
        let precision_denominator = cm.true_positives + cm.false_positives;
        let recall_denominator = cm.true_positives + cm.false_negatives;
        let p = if precision_denominator > 0 {
            cm.true_positives as f64 / precision_denominator as f64
        } else {
            0.0
        };
        let r = if recall_denominator > 0 {
            cm.true_positives as f64 / recall_denominator as f64
        } else {
            0.0
        };
        if p + r > 0.0 {
            total += 2.0 * p * r / (p + r);
        }
    }
    Ok(total / classes.len() as f64)
}

/// Global accuracy: the fraction of samples whose prediction lands within
/// the class tolerance of the expected label.
pub fn accuracy(expected: &[f64], predicted: &[f64]) -> Result<f64> {
    check_lengths(expected, predicted, "Accuracy")?;
    if expected.is_empty() {
        return Ok(0.0);
    }
    let correct = expected
        .iter()
        .zip(predicted)
        .filter(|&(&e, &p)| (e - p).abs() < CLASS_TOLERANCE)
        .count();
    Ok(correct as f64 / expected.len() as f64)
}
