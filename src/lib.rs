//! A minimal supervised-learning crate: labeled datasets, a feed-forward
//! network trained by per-sample backpropagation, instance-based and
//! probabilistic classifiers, and macro-averaged evaluation metrics.
//!
//! - Sequential model over dense/sigmoid/ReLU layers with MSE/BCE losses
//! - K-nearest-neighbors and two-class Gaussian naive Bayes behind one
//!   classifier trait
//! - Macro precision/recall/F1 and accuracy over parallel label arrays
//! - CSV loading, shuffled train/test splits, and synthetic-data helpers

pub mod bayes;
pub mod classifier;
pub mod dataset;
pub mod knn;
pub mod layers;
pub mod loss;
pub mod metrics;
pub mod network;
pub mod utils;

pub use bayes::NaiveBayes;
pub use classifier::{Classifier, Hyperparameters};
pub use dataset::{one_hot, DataPoint, Dataset};
pub use knn::KnnClassifier;
pub use layers::{DenseLayer, Layer, ReluLayer, SigmoidLayer};
pub use loss::{BinaryCrossEntropy, LossFunction, MeanSquaredError};
pub use metrics::{
    accuracy, confusion_for_class, f1_score, precision, recall, unique_classes, Confusion,
};
pub use network::SequentialModel;
pub use utils::{
    generate_synthetic_data, generate_synthetic_data_with_rng, print_model_summary,
    print_summary_table,
};
