//! The classifier contract shared by gradient-based and non-gradient models.
use crate::dataset::Dataset;
use anyhow::Result;
use std::collections::HashMap;

/// Named hyperparameter values, tunable by the caller before training.
/// Values are read once at the top of `train` and fixed for the whole run.
pub type Hyperparameters = HashMap<String, f64>;

/// A trainable model predicting a scalar label from a feature vector.
///
/// `train` is the only mutator of learned state and may be called once per
/// training session; `predict` may then be called any number of times.
/// `predict` never changes learned parameters, but takes `&mut self`
/// because layered models refresh per-layer forward caches on every call.
pub trait Classifier {
    /// Human-readable model name for display.
    fn name(&self) -> &str;

    /// Current hyperparameter values.
    fn hyperparameters(&self) -> &Hyperparameters;

    /// Mutable hyperparameter access; must not be used mid-training.
    fn hyperparameters_mut(&mut self) -> &mut Hyperparameters;

    /// Fit the model to `data`. The dataset is read-only to the model.
    fn train(&mut self, data: &Dataset) -> Result<()>;

    /// Predict the label for one feature vector.
    ///
    /// Querying an untrained model returns the neutral default `0.0`; a
    /// feature-vector length that disagrees with the trained shape is an
    /// error.
    fn predict(&mut self, features: &[f64]) -> Result<f64>;
}
