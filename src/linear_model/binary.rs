use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use ndarray::Zip;

use crate::error::{check_shape, validate_step_size, ClassifierError, Result};
use crate::numeric::sigmoid;
use crate::{Labels, Matrix, Vector};

/// Loss minimized by [`binary_train`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BinaryLoss {
    /// Perceptron criterion `max(0, -z)`.
    #[default]
    Perceptron,
    /// Logistic loss `log(1 + e^-z)`.
    Logistic,
}

impl BinaryLoss {
    pub fn name(&self) -> &'static str {
        match self {
            BinaryLoss::Perceptron => "perceptron",
            BinaryLoss::Logistic => "logistic",
        }
    }

    /// d loss / d z for a single example with signed margin `z`.
    #[inline]
    fn derivative(&self, z: f64) -> f64 {
        match self {
            BinaryLoss::Perceptron => {
                if z <= 0.0 {
                    -1.0
                } else {
                    0.0
                }
            }
            // -e^-z / (1 + e^-z)
            BinaryLoss::Logistic => -sigmoid(-z),
        }
    }
}

impl fmt::Display for BinaryLoss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BinaryLoss {
    type Err = ClassifierError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "perceptron" => Ok(BinaryLoss::Perceptron),
            "logistic" => Ok(BinaryLoss::Logistic),
            other => Err(ClassifierError::InvalidConfiguration(format!(
                "unknown loss '{}', expected 'perceptron' or 'logistic'",
                other
            ))),
        }
    }
}

/// Hyperparameters for [`binary_train`].
#[derive(Clone, Debug, PartialEq)]
pub struct BinaryTrainConfig {
    pub loss: BinaryLoss,
    pub step_size: f64,
    pub max_iterations: usize,
}

impl BinaryTrainConfig {
    pub fn new() -> Self {
        Self {
            loss: BinaryLoss::Perceptron,
            step_size: 0.5,
            max_iterations: 1000,
        }
    }

    pub fn loss(mut self, loss: BinaryLoss) -> Self {
        self.loss = loss;
        self
    }

    pub fn step_size(mut self, step_size: f64) -> Self {
        self.step_size = step_size;
        self
    }

    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        validate_step_size(self.step_size)
    }
}

impl Default for BinaryTrainConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Trains a binary linear classifier by full-batch gradient descent.
///
/// Labels equal to 1 are the positive class, every other value the negative
/// class; exactly two distinct values must be present. Each iteration
/// subtracts `step_size` times the gradient averaged over all examples.
///
/// `w0`/`b0` seed the parameters, zeros otherwise. Returns the trained
/// weight vector of length D and the bias.
pub fn binary_train(
    x: &Matrix,
    y: &Labels,
    w0: Option<Vector>,
    b0: Option<f64>,
    config: &BinaryTrainConfig,
) -> Result<(Vector, f64)> {
    let (n_samples, n_features) = x.dim();
    check_shape("labels", y.shape(), &[n_samples])?;

    let distinct: HashSet<usize> = y.iter().copied().collect();
    if distinct.len() != 2 {
        return Err(ClassifierError::InvalidLabelCount {
            found: distinct.len(),
        });
    }
    config.validate()?;

    let mut w = match w0 {
        Some(w0) => {
            check_shape("initial weights", w0.shape(), &[n_features])?;
            w0
        }
        None => Vector::zeros(n_features),
    };
    let mut b = b0.unwrap_or(0.0);

    debug!(
        "training binary classifier: loss={}, n_samples={}, n_features={}, step_size={}, max_iterations={}",
        config.loss, n_samples, n_features, config.step_size, config.max_iterations
    );

    let signs: Vector = y.mapv(|label| if label == 1 { 1.0 } else { -1.0 });
    let scale = config.step_size / n_samples as f64;

    for iteration in 0..config.max_iterations {
        let margins = x.dot(&w) + b;
        let grad = Zip::from(&margins)
            .and(&signs)
            .map_collect(|&margin, &sign| config.loss.derivative(margin * sign) * sign);

        let grad_w = x.t().dot(&grad);
        let grad_b = grad.sum();

        w.scaled_add(-scale, &grad_w);
        b -= scale * grad_b;

        trace!("binary iteration {}: grad_b={:.6}", iteration, grad_b);
    }

    check_shape("trained weights", w.shape(), &[n_features])?;
    debug!("binary training finished: bias={:.6}", b);
    Ok((w, b))
}

/// Signed margins `X·w + b`.
pub fn binary_decision_function(x: &Matrix, w: &Vector, b: f64) -> Result<Vector> {
    check_shape("weights", w.shape(), &[x.ncols()])?;
    Ok(x.dot(w) + b)
}

/// Predicts 1 where the margin is strictly positive, 0 otherwise.
pub fn binary_predict(x: &Matrix, w: &Vector, b: f64) -> Result<Labels> {
    let margins = binary_decision_function(x, w, b)?;
    let preds = margins.mapv(|margin| if margin > 0.0 { 1 } else { 0 });

    check_shape("predictions", preds.shape(), &[x.nrows()])?;
    Ok(preds)
}

/// Binary linear classifier with the `fit`/`predict` estimator interface.
#[derive(Clone, Debug)]
pub struct BinaryClassifier {
    pub weights: Option<Vector>,
    pub bias: Option<f64>,
    config: BinaryTrainConfig,
}

impl BinaryClassifier {
    pub fn new() -> Self {
        Self {
            weights: None,
            bias: None,
            config: BinaryTrainConfig::new(),
        }
    }

    pub fn with_params(loss: BinaryLoss, step_size: f64, max_iterations: usize) -> Self {
        Self {
            weights: None,
            bias: None,
            config: BinaryTrainConfig {
                loss,
                step_size,
                max_iterations,
            },
        }
    }

    pub fn loss(mut self, loss: BinaryLoss) -> Self {
        self.config.loss = loss;
        self
    }

    pub fn step_size(mut self, step_size: f64) -> Self {
        self.config.step_size = step_size;
        self
    }

    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    pub fn config(&self) -> &BinaryTrainConfig {
        &self.config
    }

    pub fn fit(&mut self, x: &Matrix, y: &Labels) -> Result<()> {
        let (weights, bias) = binary_train(x, y, None, None, &self.config)?;
        self.weights = Some(weights);
        self.bias = Some(bias);
        Ok(())
    }

    pub fn decision_function(&self, x: &Matrix) -> Result<Vector> {
        let weights = self.weights.as_ref().ok_or(ClassifierError::NotFitted)?;
        let bias = self.bias.ok_or(ClassifierError::NotFitted)?;
        binary_decision_function(x, weights, bias)
    }

    pub fn predict(&self, x: &Matrix) -> Result<Labels> {
        let weights = self.weights.as_ref().ok_or(ClassifierError::NotFitted)?;
        let bias = self.bias.ok_or(ClassifierError::NotFitted)?;
        binary_predict(x, weights, bias)
    }

    /// Probability of the positive class, `sigmoid(X·w + b)`.
    pub fn predict_proba(&self, x: &Matrix) -> Result<Vector> {
        let margins = self.decision_function(x)?;
        Ok(margins.mapv(sigmoid))
    }

    pub fn score(&self, x: &Matrix, y: &Labels) -> Result<f64> {
        let predictions = self.predict(x)?;
        crate::metrics::accuracy_score(y, &predictions)
    }
}

impl Default for BinaryClassifier {
    fn default() -> Self {
        Self::new()
    }
}
