//! Labeled dataset model: feature vectors, CSV loading, and shuffled splits.
use anyhow::{anyhow, Result};
use csv::ReaderBuilder;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fs::File;

/// A single labeled sample: an ordered feature vector and a scalar label.
///
/// Labels conventionally hold small non-negative integers (class ids) for
/// classification, or an arbitrary real value for regression-style losses.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub features: Vec<f64>,
    pub label: f64,
}

impl DataPoint {
    pub fn new(features: Vec<f64>, label: f64) -> Self {
        Self { features, label }
    }
}

/// An ordered collection of labeled points plus the feature column names.
///
/// All points in one dataset share the same feature-vector length; loaders
/// and callers are responsible for delivering consistent rows. Models treat
/// a dataset as read-only.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub points: Vec<DataPoint>,
    /// Names of the feature columns; empty when untracked.
    pub feature_names: Vec<String>,
}

impl Dataset {
    pub fn new(points: Vec<DataPoint>, feature_names: Vec<String>) -> Self {
        Self {
            points,
            feature_names,
        }
    }

    /// Dataset without tracked column names.
    pub fn from_points(points: Vec<DataPoint>) -> Self {
        Self {
            points,
            feature_names: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Feature-vector length of the first point (0 when empty).
    pub fn num_features(&self) -> usize {
        self.points.first().map_or(0, |p| p.features.len())
    }

    /// Load from CSV: the header row names the columns, the last column is
    /// the label, every other column is a feature.
    pub fn from_csv(filename: &str) -> Result<Self> {
        let file =
            File::open(filename).map_err(|e| anyhow!("Failed to open {}: {}", filename, e))?;
        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);
        let headers = rdr
            .headers()
            .map_err(|e| anyhow!("CSV header error: {}", e))?
            .clone();
        if headers.len() < 2 {
            return Err(anyhow!(
                "CSV needs at least one feature column and a label column, got {} columns",
                headers.len()
            ));
        }
        let feature_names: Vec<String> = headers
            .iter()
            .take(headers.len() - 1)
            .map(|s| s.trim().to_string())
            .collect();

        let mut points = Vec::new();
        for (row, result) in rdr.records().enumerate() {
            let record = result.map_err(|e| anyhow!("CSV parse error: {}", e))?;
            if record.len() != headers.len() {
                continue;
            }
            let mut features = Vec::with_capacity(record.len() - 1);
            for value in record.iter().take(record.len() - 1) {
                let parsed = value
                    .trim()
                    .parse()
                    .map_err(|e| anyhow!("Row {}: bad feature value {:?}: {}", row + 2, value, e))?;
                features.push(parsed);
            }
            let label_field = &record[record.len() - 1];
            let label = label_field
                .trim()
                .parse()
                .map_err(|e| anyhow!("Row {}: bad label {:?}: {}", row + 2, label_field, e))?;
            points.push(DataPoint::new(features, label));
        }
        if points.is_empty() {
            return Err(anyhow!("No data loaded from {}", filename));
        }
        Ok(Self::new(points, feature_names))
    }

    /// Randomized split into disjoint train/test subsets.
    ///
    /// `|train| = floor(train_fraction * len)` and the two halves partition
    /// the shuffled points; neither half shares storage with `self`.
    pub fn split(&self, train_fraction: f64) -> (Dataset, Dataset) {
        self.split_with_rng(train_fraction, &mut rand::thread_rng())
    }

    /// `split` with an explicit RNG for reproducible shuffling.
    pub fn split_with_rng<R: Rng>(&self, train_fraction: f64, rng: &mut R) -> (Dataset, Dataset) {
        let mut shuffled = self.points.clone();
        shuffled.shuffle(rng);
        let train_count = ((shuffled.len() as f64 * train_fraction) as usize).min(shuffled.len());
        let test = shuffled.split_off(train_count);
        (
            Dataset::new(shuffled, self.feature_names.clone()),
            Dataset::new(test, self.feature_names.clone()),
        )
    }
}

/// One-hot encode a class index into a target vector.
pub fn one_hot(label: usize, num_classes: usize) -> Vec<f64> {
    let mut v = vec![0.0; num_classes];
    if label < num_classes {
        v[label] = 1.0;
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn numbered_points(n: usize) -> Vec<DataPoint> {
        (0..n)
            .map(|i| DataPoint::new(vec![i as f64, i as f64 + 0.5], (i % 2) as f64))
            .collect()
    }

    #[test]
    fn split_partitions_and_floors_train_count() {
        let dataset = Dataset::from_points(numbered_points(10));
        for &fraction in &[0.1, 0.25, 0.5, 0.75, 0.9] {
            let mut rng = StdRng::seed_from_u64(7);
            let (train, test) = dataset.split_with_rng(fraction, &mut rng);
            let expected_train = (10.0 * fraction) as usize;
            assert_eq!(train.len(), expected_train, "fraction {}", fraction);
            assert_eq!(train.len() + test.len(), dataset.len());
        }
    }

    #[test]
    fn split_preserves_every_point_exactly_once() {
        let dataset = Dataset::from_points(numbered_points(9));
        let mut rng = StdRng::seed_from_u64(11);
        let (train, test) = dataset.split_with_rng(0.5, &mut rng);
        let mut combined: Vec<DataPoint> = train.points.clone();
        combined.extend(test.points.clone());
        combined.sort_by(|a, b| a.features[0].partial_cmp(&b.features[0]).unwrap());
        assert_eq!(combined, dataset.points);
    }

    #[test]
    fn split_with_same_seed_is_deterministic() {
        let dataset = Dataset::from_points(numbered_points(20));
        let (train_a, _) = dataset.split_with_rng(0.6, &mut StdRng::seed_from_u64(3));
        let (train_b, _) = dataset.split_with_rng(0.6, &mut StdRng::seed_from_u64(3));
        assert_eq!(train_a.points, train_b.points);
    }

    #[test]
    fn split_carries_feature_names_to_both_halves() {
        let names = vec!["a".to_string(), "b".to_string()];
        let dataset = Dataset::new(numbered_points(4), names.clone());
        let (train, test) = dataset.split_with_rng(0.5, &mut StdRng::seed_from_u64(1));
        assert_eq!(train.feature_names, names);
        assert_eq!(test.feature_names, names);
    }

    #[test]
    fn from_csv_reads_features_and_label() {
        let path = std::env::temp_dir().join("shallow_ml_dataset_test.csv");
        std::fs::write(&path, "x1,x2,label\n0.0,1.0,0\n1.5,2.5,1\n").unwrap();
        let dataset = Dataset::from_csv(path.to_str().unwrap()).unwrap();
        assert_eq!(dataset.feature_names, vec!["x1", "x2"]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.num_features(), 2);
        assert_eq!(dataset.points[0].features, vec![0.0, 1.0]);
        assert_eq!(dataset.points[0].label, 0.0);
        assert_eq!(dataset.points[1].features, vec![1.5, 2.5]);
        assert_eq!(dataset.points[1].label, 1.0);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn from_csv_rejects_empty_body() {
        let path = std::env::temp_dir().join("shallow_ml_empty_test.csv");
        std::fs::write(&path, "x1,x2,label\n").unwrap();
        assert!(Dataset::from_csv(path.to_str().unwrap()).is_err());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn one_hot_sets_single_slot() {
        assert_eq!(one_hot(1, 3), vec![0.0, 1.0, 0.0]);
        assert_eq!(one_hot(5, 3), vec![0.0, 0.0, 0.0]);
    }
}
