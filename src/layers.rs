//! Differentiable layers composed into a forward/backward pipeline.
use anyhow::{bail, Result};
use rand::Rng;
use std::fmt;

/// Matrix type
pub type Matrix = Vec<Vec<f64>>;

/// A stateful, differentiable transform.
///
/// `forward` caches whatever the layer needs for its backward pass, so the
/// contract is single-threaded and call-order dependent: `forward` must run
/// before `backward`, and `backward` consumes the caches of the most recent
/// `forward`. Calling `backward` first is an error, never silently ignored.
pub trait Layer: fmt::Debug {
    /// Transform `input`, caching state for the next `backward`.
    fn forward(&mut self, input: &[f64]) -> Result<Vec<f64>>;

    /// Propagate `output_gradient` to the previous layer, updating any
    /// trainable parameters in place with `learning_rate`.
    fn backward(&mut self, output_gradient: &[f64], learning_rate: f64) -> Result<Vec<f64>>;
}

/// Fully-connected layer: `out[i] = bias[i] + sum_j weights[i][j] * in[j]`.
///
/// Weights and biases are the only trainable parameters in a network; their
/// shapes never change after construction.
#[derive(Debug, Clone)]
pub struct DenseLayer {
    pub weights: Matrix,
    pub biases: Vec<f64>,
    input: Option<Vec<f64>>,
}

impl DenseLayer {
    /// Create a new dense layer with Xavier/Glorot-style uniform
    /// initialization (`U[-1, 1) / sqrt(input_size)`) and zero biases.
    pub fn new(input_size: usize, output_size: usize) -> Self {
        Self::with_rng(input_size, output_size, &mut rand::thread_rng())
    }

    /// `new` with an explicit RNG for reproducible weight draws.
    pub fn with_rng<R: Rng>(input_size: usize, output_size: usize, rng: &mut R) -> Self {
        let scale = (input_size as f64).sqrt();
        let weights: Matrix = (0..output_size)
            .map(|_| {
                (0..input_size)
                    .map(|_| rng.gen_range(-1.0..1.0) / scale)
                    .collect()
            })
            .collect();
        let biases = vec![0.0; output_size];
        Self {
            weights,
            biases,
            input: None,
        }
    }

    pub fn input_size(&self) -> usize {
        self.weights.first().map_or(0, |row| row.len())
    }

    pub fn output_size(&self) -> usize {
        self.weights.len()
    }
}

impl Layer for DenseLayer {
    fn forward(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        if input.len() != self.input_size() {
            bail!(
                "Dense forward: expected input of length {}, got {}",
                self.input_size(),
                input.len()
            );
        }
        let output: Vec<f64> = self
            .weights
            .iter()
            .zip(&self.biases)
            .map(|(row, &b)| row.iter().zip(input).map(|(&w, &x)| w * x).sum::<f64>() + b)
            .collect();
        self.input = Some(input.to_vec());
        Ok(output)
    }

    fn backward(&mut self, output_gradient: &[f64], learning_rate: f64) -> Result<Vec<f64>> {
        let input = match &self.input {
            Some(input) => input,
            None => bail!("Dense backward called before forward"),
        };
        if output_gradient.len() != self.output_size() {
            bail!(
                "Dense backward: expected gradient of length {}, got {}",
                self.output_size(),
                output_gradient.len()
            );
        }
        // Upstream gradient comes from the pre-update weights: the parameter
        // step below must not leak into this same backward call.
        let mut input_gradient = vec![0.0; input.len()];
        for (row, &g) in self.weights.iter().zip(output_gradient) {
            for (j, &w) in row.iter().enumerate() {
                input_gradient[j] += w * g;
            }
        }
        for (i, row) in self.weights.iter_mut().enumerate() {
            let g = output_gradient[i];
            for (j, w) in row.iter_mut().enumerate() {
                *w -= learning_rate * g * input[j];
            }
            self.biases[i] -= learning_rate * g;
        }
        Ok(input_gradient)
    }
}

/// Elementwise logistic activation: `1 / (1 + e^-x)`.
#[derive(Debug, Clone, Default)]
pub struct SigmoidLayer {
    output: Option<Vec<f64>>,
}

impl SigmoidLayer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Layer for SigmoidLayer {
    fn forward(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        let output: Vec<f64> = input.iter().map(|&x| 1.0 / (1.0 + (-x).exp())).collect();
        self.output = Some(output.clone());
        Ok(output)
    }

    fn backward(&mut self, output_gradient: &[f64], _learning_rate: f64) -> Result<Vec<f64>> {
        let output = match &self.output {
            Some(output) => output,
            None => bail!("Sigmoid backward called before forward"),
        };
        if output_gradient.len() != output.len() {
            bail!(
                "Sigmoid backward: expected gradient of length {}, got {}",
                output.len(),
                output_gradient.len()
            );
        }
        // Sigmoid derivative expressed through its own output: s * (1 - s).
        Ok(output
            .iter()
            .zip(output_gradient)
            .map(|(&s, &g)| s * (1.0 - s) * g)
            .collect())
    }
}

/// Elementwise rectifier: `max(0, x)`.
#[derive(Debug, Clone, Default)]
pub struct ReluLayer {
    output: Option<Vec<f64>>,
}

impl ReluLayer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Layer for ReluLayer {
    fn forward(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        let output: Vec<f64> = input.iter().map(|&x| x.max(0.0)).collect();
        self.output = Some(output.clone());
        Ok(output)
    }

    fn backward(&mut self, output_gradient: &[f64], _learning_rate: f64) -> Result<Vec<f64>> {
        let output = match &self.output {
            Some(output) => output,
            None => bail!("ReLU backward called before forward"),
        };
        if output_gradient.len() != output.len() {
            bail!(
                "ReLU backward: expected gradient of length {}, got {}",
                output.len(),
                output_gradient.len()
            );
        }
        // Gradient passes only where the cached output is positive.
        Ok(output
            .iter()
            .zip(output_gradient)
            .map(|(&y, &g)| if y > 0.0 { g } else { 0.0 })
            .collect())
    }
}
