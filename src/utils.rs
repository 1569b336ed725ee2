//! Utility helpers for synthetic data and training summaries.
use crate::dataset::{DataPoint, Dataset};
use crate::network::SequentialModel;
use rand::Rng;

/// Generate a synthetic classification dataset: each sample draws a class
/// and scatters its features around that class's center.
pub fn generate_synthetic_data(n_samples: usize, num_features: usize, num_classes: usize) -> Dataset {
    generate_synthetic_data_with_rng(n_samples, num_features, num_classes, &mut rand::thread_rng())
}

/// `generate_synthetic_data` with an explicit RNG for reproducible draws.
pub fn generate_synthetic_data_with_rng<R: Rng>(
    n_samples: usize,
    num_features: usize,
    num_classes: usize,
    rng: &mut R,
) -> Dataset {
    let points = (0..n_samples)
        .map(|_| {
            let class = rng.gen_range(0..num_classes.max(1));
            let center = class as f64 * 2.0;
            let features = (0..num_features)
                .map(|_| center + rng.gen_range(-0.5..0.5))
                .collect();
            DataPoint::new(features, class as f64)
        })
        .collect();
    Dataset::from_points(points)
}

/// Print model summary
pub fn print_model_summary(model: &SequentialModel) {
    println!("Model Summary:\n{}", model);
}

/// Print simple table for losses
pub fn print_summary_table(values: &[f64], title: &str) {
    println!("\n{} Summary Table:", title);
    println!("+----------------+----------+");
    println!("| Epoch Range   | Avg Value|");
    println!("+----------------+----------+");
    if !values.is_empty() {
        let avg = values.iter().sum::<f64>() / values.len() as f64;
        println!("| All Epochs    | {:>8.6} |", avg);
    }
    println!("+----------------+----------+");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn synthetic_data_has_requested_shape() {
        let mut rng = StdRng::seed_from_u64(5);
        let data = generate_synthetic_data_with_rng(50, 3, 2, &mut rng);
        assert_eq!(data.len(), 50);
        assert_eq!(data.num_features(), 3);
        for point in &data.points {
            assert_eq!(point.features.len(), 3);
            assert!(point.label == 0.0 || point.label == 1.0);
        }
    }

    #[test]
    fn synthetic_features_cluster_around_class_centers() {
        let mut rng = StdRng::seed_from_u64(9);
        let data = generate_synthetic_data_with_rng(100, 2, 3, &mut rng);
        for point in &data.points {
            let center = point.label * 2.0;
            for &feature in &point.features {
                assert!((feature - center).abs() < 0.5);
            }
        }
    }
}
