//! Instance-based classifier: brute-force K-nearest-neighbors.
use crate::classifier::{Classifier, Hyperparameters};
use crate::dataset::{DataPoint, Dataset};
use anyhow::{bail, Result};
use std::cmp::Ordering;

const DEFAULT_K: f64 = 3.0;

/// K-nearest-neighbors over Euclidean distance.
///
/// Training stores the points verbatim; every prediction scans all of them.
#[derive(Debug, Clone)]
pub struct KnnClassifier {
    training_data: Vec<DataPoint>,
    hyperparameters: Hyperparameters,
}

impl KnnClassifier {
    pub fn new() -> Self {
        let mut hyperparameters = Hyperparameters::new();
        hyperparameters.insert("K".to_string(), DEFAULT_K);
        Self {
            training_data: Vec::new(),
            hyperparameters,
        }
    }
}

impl Default for KnnClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(&x, &y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

impl Classifier for KnnClassifier {
    fn name(&self) -> &str {
        "K-Nearest Neighbors"
    }

    fn hyperparameters(&self) -> &Hyperparameters {
        &self.hyperparameters
    }

    fn hyperparameters_mut(&mut self) -> &mut Hyperparameters {
        &mut self.hyperparameters
    }

    /// Stores the training points; no other computation happens here.
    fn train(&mut self, data: &Dataset) -> Result<()> {
        self.training_data = data.points.clone();
        Ok(())
    }

    fn predict(&mut self, features: &[f64]) -> Result<f64> {
        if self.training_data.is_empty() {
            return Ok(0.0);
        }
        let expected = self.training_data[0].features.len();
        if features.len() != expected {
            bail!(
                "KNN predict: expected {} features, got {}",
                expected,
                features.len()
            );
        }
        let k = self
            .hyperparameters
            .get("K")
            .copied()
            .unwrap_or(DEFAULT_K) as usize;

        let mut distances: Vec<(f64, f64)> = self
            .training_data
            .iter()
            .map(|point| (euclidean_distance(features, &point.features), point.label))
            .collect();
        distances.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

        // Majority vote over the k closest. Groups keep first-encounter
        // order, so a size tie resolves to the group seen nearest first.
        let mut groups: Vec<(f64, usize)> = Vec::new();
        for &(_, label) in distances.iter().take(k) {
            match groups.iter_mut().find(|(l, _)| *l == label) {
                Some((_, count)) => *count += 1,
                None => groups.push((label, 1)),
            }
        }
        let mut vote = 0.0;
        let mut best_count = 0;
        for &(label, count) in &groups {
            if count > best_count {
                best_count = count;
                vote = label;
            }
        }
        Ok(vote)
    }
}
