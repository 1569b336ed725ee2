//! Probabilistic classifier: two-class Gaussian naive Bayes.
use crate::classifier::{Classifier, Hyperparameters};
use crate::dataset::Dataset;
use anyhow::{bail, Result};

// Floor added to every variance so a constant feature never divides by zero.
const VARIANCE_FLOOR: f64 = 1e-9;

/// Per-class training summary: prior plus per-feature Gaussian moments.
#[derive(Debug, Clone)]
struct ClassSummary {
    prior: f64,
    means: Vec<f64>,
    variances: Vec<f64>,
}

/// Gaussian naive Bayes over binary labels {0, 1}.
///
/// Features are assumed independent given the class. Training keeps only
/// the per-class moments and discards the raw points.
#[derive(Debug, Clone)]
pub struct NaiveBayes {
    summaries: Option<[ClassSummary; 2]>,
    hyperparameters: Hyperparameters,
}

impl NaiveBayes {
    pub fn new() -> Self {
        Self {
            summaries: None,
            hyperparameters: Hyperparameters::new(),
        }
    }
}

impl Default for NaiveBayes {
    fn default() -> Self {
        Self::new()
    }
}

fn gauss(x: f64, mean: f64, variance: f64) -> f64 {
    let v = variance + VARIANCE_FLOOR;
    (1.0 / (2.0 * std::f64::consts::PI * v).sqrt()) * (-(x - mean).powi(2) / (2.0 * v)).exp()
}

fn summarize(group: &[&Vec<f64>], num_features: usize, total: usize) -> ClassSummary {
    // An empty group divides by one so the moments stay finite; its zero
    // prior already rules the class out at prediction time.
    let denominator = group.len().max(1) as f64;
    let mut means = vec![0.0; num_features];
    for features in group {
        for (slot, &value) in means.iter_mut().zip(features.iter()) {
            *slot += value;
        }
    }
    for slot in means.iter_mut() {
        *slot /= denominator;
    }
    let mut variances = vec![0.0; num_features];
    for features in group {
        for (slot, (&value, &mean)) in variances.iter_mut().zip(features.iter().zip(&means)) {
            *slot += (value - mean).powi(2);
        }
    }
    for slot in variances.iter_mut() {
        *slot /= denominator;
    }
    ClassSummary {
        prior: group.len() as f64 / total as f64,
        means,
        variances,
    }
}

impl Classifier for NaiveBayes {
    fn name(&self) -> &str {
        "Naive Bayes"
    }

    fn hyperparameters(&self) -> &Hyperparameters {
        &self.hyperparameters
    }

    fn hyperparameters_mut(&mut self) -> &mut Hyperparameters {
        &mut self.hyperparameters
    }

    fn train(&mut self, data: &Dataset) -> Result<()> {
        if data.is_empty() {
            bail!("Naive Bayes train: dataset is empty");
        }
        let num_features = data.num_features();
        let mut class0 = Vec::new();
        let mut class1 = Vec::new();
        for point in &data.points {
            if point.label == 0.0 {
                class0.push(&point.features);
            } else {
                class1.push(&point.features);
            }
        }
        self.summaries = Some([
            summarize(&class0, num_features, data.len()),
            summarize(&class1, num_features, data.len()),
        ]);
        Ok(())
    }

    fn predict(&mut self, features: &[f64]) -> Result<f64> {
        let summaries = match &self.summaries {
            Some(summaries) => summaries,
            None => return Ok(0.0),
        };
        let expected = summaries[0].means.len();
        if features.len() != expected {
            bail!(
                "Naive Bayes predict: expected {} features, got {}",
                expected,
                features.len()
            );
        }
        let mut scores = [summaries[0].prior.ln(), summaries[1].prior.ln()];
        for (summary, score) in summaries.iter().zip(scores.iter_mut()) {
            for ((&x, &mean), &variance) in features
                .iter()
                .zip(&summary.means)
                .zip(&summary.variances)
            {
                *score += gauss(x, mean, variance).ln();
            }
        }
        Ok(if scores[1] > scores[0] { 1.0 } else { 0.0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DataPoint;

    fn dataset(points: &[(Vec<f64>, f64)]) -> Dataset {
        Dataset::from_points(
            points
                .iter()
                .map(|(f, l)| DataPoint::new(f.clone(), *l))
                .collect(),
        )
    }

    #[test]
    fn untrained_classifier_returns_neutral_default() {
        let mut bayes = NaiveBayes::new();
        assert_eq!(bayes.predict(&[1.0]).unwrap(), 0.0);
    }

    #[test]
    fn train_rejects_empty_dataset() {
        let mut bayes = NaiveBayes::new();
        assert!(bayes.train(&Dataset::default()).is_err());
    }

    #[test]
    fn separated_clusters_classify_correctly() {
        let mut bayes = NaiveBayes::new();
        bayes
            .train(&dataset(&[
                (vec![0.0, 0.1], 0.0),
                (vec![0.2, 0.0], 0.0),
                (vec![0.1, 0.2], 0.0),
                (vec![5.0, 5.1], 1.0),
                (vec![5.2, 4.9], 1.0),
                (vec![4.9, 5.0], 1.0),
            ]))
            .unwrap();
        assert_eq!(bayes.predict(&[0.1, 0.1]).unwrap(), 0.0);
        assert_eq!(bayes.predict(&[5.0, 5.0]).unwrap(), 1.0);
    }

    #[test]
    fn priors_reflect_class_frequencies() {
        let mut bayes = NaiveBayes::new();
        bayes
            .train(&dataset(&[
                (vec![0.0], 0.0),
                (vec![0.1], 0.0),
                (vec![0.2], 0.0),
                (vec![9.0], 1.0),
            ]))
            .unwrap();
        let summaries = bayes.summaries.as_ref().unwrap();
        assert!((summaries[0].prior - 0.75).abs() < 1e-12);
        assert!((summaries[1].prior - 0.25).abs() < 1e-12);
    }

    #[test]
    fn single_class_dataset_stays_finite_and_predicts_that_class() {
        let mut bayes = NaiveBayes::new();
        bayes
            .train(&dataset(&[(vec![1.0], 1.0), (vec![1.2], 1.0)]))
            .unwrap();
        // Class 0 is empty: its moments are finite and its -inf log-prior
        // can never beat the populated class.
        let summaries = bayes.summaries.as_ref().unwrap();
        assert!(summaries[0].means[0].is_finite());
        assert!(summaries[0].variances[0].is_finite());
        assert_eq!(bayes.predict(&[1.1]).unwrap(), 1.0);
    }

    #[test]
    fn zero_variance_feature_does_not_produce_nan() {
        let mut bayes = NaiveBayes::new();
        bayes
            .train(&dataset(&[
                (vec![1.0, 0.0], 0.0),
                (vec![1.0, 0.2], 0.0),
                (vec![1.0, 5.0], 1.0),
                (vec![1.0, 5.2], 1.0),
            ]))
            .unwrap();
        // First feature is constant in both classes.
        let prediction = bayes.predict(&[1.0, 5.1]).unwrap();
        assert_eq!(prediction, 1.0);
    }

    #[test]
    fn predict_rejects_mismatched_feature_length() {
        let mut bayes = NaiveBayes::new();
        bayes
            .train(&dataset(&[(vec![0.0, 1.0], 0.0), (vec![1.0, 0.0], 1.0)]))
            .unwrap();
        assert!(bayes.predict(&[1.0]).is_err());
    }
}
