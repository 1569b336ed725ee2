//! Sequential feed-forward model trained by per-sample backpropagation.
use crate::classifier::{Classifier, Hyperparameters};
use crate::dataset::{one_hot, Dataset};
use crate::layers::Layer;
use crate::loss::{LossFunction, MeanSquaredError};
use crate::utils::print_summary_table;
use anyhow::{anyhow, Result};
use std::fmt;
use std::sync::Arc;

const DEFAULT_LEARNING_RATE: f64 = 0.01;
const DEFAULT_EPOCHS: f64 = 100.0;

/// An ordered stack of layers trained against a single loss function.
///
/// The model exclusively owns and mutates its layers; the loss function is
/// stateless and shared by reference.
#[derive(Debug)]
pub struct SequentialModel {
    /// Ordered list of layers from input to output.
    pub layers: Vec<Box<dyn Layer>>,
    pub loss_function: Arc<dyn LossFunction>,
    name: String,
    hyperparameters: Hyperparameters,
}

impl SequentialModel {
    /// New empty model trained with mean squared error.
    pub fn new() -> Self {
        Self::with_loss(Arc::new(MeanSquaredError))
    }

    /// New empty model with an explicit loss function.
    pub fn with_loss(loss_function: Arc<dyn LossFunction>) -> Self {
        let mut hyperparameters = Hyperparameters::new();
        hyperparameters.insert("LearningRate".to_string(), DEFAULT_LEARNING_RATE);
        hyperparameters.insert("Epochs".to_string(), DEFAULT_EPOCHS);
        Self {
            layers: Vec::new(),
            loss_function,
            name: "Deep Neural Network".to_string(),
            hyperparameters,
        }
    }

    /// Append a layer to the end of the pipeline.
    pub fn add(&mut self, layer: Box<dyn Layer>) {
        self.layers.push(layer);
    }

    /// Run `input` through every layer in order and return the raw output
    /// vector.
    ///
    /// Never mutates trainable parameters, but refreshes each layer's
    /// forward cache (used by a subsequent `backward` during training).
    pub fn predict_raw(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        let mut signal = input.to_vec();
        for layer in &mut self.layers {
            signal = layer.forward(&signal)?;
        }
        Ok(signal)
    }
}

impl Default for SequentialModel {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for SequentialModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn hyperparameters(&self) -> &Hyperparameters {
        &self.hyperparameters
    }

    fn hyperparameters_mut(&mut self) -> &mut Hyperparameters {
        &mut self.hyperparameters
    }

    fn train(&mut self, data: &Dataset) -> Result<()> {
        if data.is_empty() {
            return Err(anyhow!("Dataset is empty"));
        }
        let epochs = self
            .hyperparameters
            .get("Epochs")
            .copied()
            .unwrap_or(DEFAULT_EPOCHS) as usize;
        let lr = self
            .hyperparameters
            .get("LearningRate")
            .copied()
            .unwrap_or(DEFAULT_LEARNING_RATE);

        let mut losses = Vec::with_capacity(epochs);
        for epoch in 0..epochs {
            let mut total_loss = 0.0;
            // Points run in dataset order every epoch; no reshuffling.
            for point in &data.points {
                let prediction = self.predict_raw(&point.features)?;
                // A single output trains on the label directly; multiple
                // outputs train on a one-hot target at the rounded label.
                let target = if prediction.len() == 1 {
                    vec![point.label]
                } else {
                    one_hot(point.label.round() as usize, prediction.len())
                };
                let mut signal = Vec::with_capacity(prediction.len());
                for (&p, &t) in prediction.iter().zip(&target) {
                    total_loss += self.loss_function.loss(p, t);
                    signal.push(self.loss_function.derivative(p, t));
                }
                for layer in self.layers.iter_mut().rev() {
                    signal = layer.backward(&signal, lr)?;
                }
            }
            let avg_loss = total_loss / data.len() as f64;
            losses.push(avg_loss);
            println!("Epoch {}: Loss = {:.6}", epoch + 1, avg_loss);
        }
        print_summary_table(&losses, "Training Loss");
        Ok(())
    }

    fn predict(&mut self, features: &[f64]) -> Result<f64> {
        let output = self.predict_raw(features)?;
        if output.is_empty() {
            return Ok(0.0);
        }
        // A single output is a binary decision at 0.5.
        if output.len() == 1 {
            return Ok(if output[0] >= 0.5 { 1.0 } else { 0.0 });
        }
        // Multiple outputs decide by argmax; the first index wins ties.
        let mut max_index = 0;
        for (i, &value) in output.iter().enumerate() {
            if value > output[max_index] {
                max_index = i;
            }
        }
        Ok(max_index as f64)
    }
}

impl fmt::Display for SequentialModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} layers, loss {:?}",
            self.name,
            self.layers.len(),
            self.loss_function
        )
    }
}
