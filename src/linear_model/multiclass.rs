use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use ndarray::Axis;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{check_shape, validate_step_size, ClassifierError, Result};
use crate::numeric::{argmax, one_hot, softmax_inplace, softmax_rows};
use crate::{Labels, Matrix, Vector};

/// Seed of the example sampler used by stochastic training. Every call
/// starts a fresh generator from this seed.
pub const SGD_SEED: u64 = 42;

/// Optimization scheme used by [`multiclass_train`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GdType {
    /// Full-batch gradient descent, gradient averaged over all examples.
    Gd,
    /// One uniformly sampled example per step, gradient not averaged.
    #[default]
    Sgd,
}

impl GdType {
    pub fn name(&self) -> &'static str {
        match self {
            GdType::Gd => "gd",
            GdType::Sgd => "sgd",
        }
    }
}

impl fmt::Display for GdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GdType {
    type Err = ClassifierError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "gd" => Ok(GdType::Gd),
            "sgd" => Ok(GdType::Sgd),
            other => Err(ClassifierError::InvalidConfiguration(format!(
                "unknown gd_type '{}', expected 'gd' or 'sgd'",
                other
            ))),
        }
    }
}

/// Hyperparameters for [`multiclass_train`].
#[derive(Clone, Debug, PartialEq)]
pub struct MulticlassTrainConfig {
    pub gd_type: GdType,
    pub step_size: f64,
    pub max_iterations: usize,
}

impl MulticlassTrainConfig {
    pub fn new() -> Self {
        Self {
            gd_type: GdType::Sgd,
            step_size: 0.5,
            max_iterations: 1000,
        }
    }

    pub fn gd_type(mut self, gd_type: GdType) -> Self {
        self.gd_type = gd_type;
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

impl Default for MulticlassTrainConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Trains multinomial logistic regression.
///
/// `y` holds class indices in `0..n_classes`. `w0` (C×D) and `b0` (C) seed
/// the parameters, zeros otherwise.
///
/// With [`GdType::Gd`] each step uses the gradient averaged over all N
/// examples. With [`GdType::Sgd`] each step uses the raw gradient of one
/// example drawn from a generator seeded with [`SGD_SEED`], so repeated
/// calls on the same inputs return identical parameters.
pub fn multiclass_train(
    x: &Matrix,
    y: &Labels,
    n_classes: usize,
    w0: Option<Matrix>,
    b0: Option<Vector>,
    config: &MulticlassTrainConfig,
) -> Result<(Matrix, Vector)> {
    let (n_samples, n_features) = x.dim();
    check_shape("labels", y.shape(), &[n_samples])?;
    config.validate()?;

    if n_classes == 0 {
        return Err(ClassifierError::InvalidConfiguration(
            "n_classes must be at least 1".to_string(),
        ));
    }
    if n_samples == 0 {
        return Err(ClassifierError::EmptyDataset);
    }
    if let Some(&label) = y.iter().find(|&&label| label >= n_classes) {
        return Err(ClassifierError::InvalidLabel { label, n_classes });
    }

    let mut w = match w0 {
        Some(w0) => {
            check_shape("initial weights", w0.shape(), &[n_classes, n_features])?;
            w0
        }
        None => Matrix::zeros((n_classes, n_features)),
    };
    let mut b = match b0 {
        Some(b0) => {
            check_shape("initial biases", b0.shape(), &[n_classes])?;
            b0
        }
        None => Vector::zeros(n_classes),
    };

    debug!(
        "training multiclass classifier: gd_type={}, n_samples={}, n_features={}, n_classes={}, step_size={}, max_iterations={}",
        config.gd_type, n_samples, n_features, n_classes, config.step_size, config.max_iterations
    );

    match config.gd_type {
        GdType::Sgd => train_sgd(x, y, &mut w, &mut b, config),
        GdType::Gd => train_gd(x, y, n_classes, &mut w, &mut b, config),
    }

    check_shape("trained weights", w.shape(), &[n_classes, n_features])?;
    check_shape("trained biases", b.shape(), &[n_classes])?;
    debug!("multiclass training finished");
    Ok((w, b))
}

fn train_sgd(x: &Matrix, y: &Labels, w: &mut Matrix, b: &mut Vector, config: &MulticlassTrainConfig) {
    let mut rng = StdRng::seed_from_u64(SGD_SEED);
    let n_samples = x.nrows();

    for iteration in 0..config.max_iterations {
        let n = rng.gen_range(0..n_samples);
        let x_n = x.row(n);

        // softmax(w·x + b) - one_hot(y[n])
        let mut grad_b = w.dot(&x_n) + &*b;
        softmax_inplace(grad_b.view_mut());
        grad_b[y[n]] -= 1.0;

        let grad_w = grad_b
            .view()
            .insert_axis(Axis(1))
            .dot(&x_n.insert_axis(Axis(0)));

        w.scaled_add(-config.step_size, &grad_w);
        b.scaled_add(-config.step_size, &grad_b);

        trace!("sgd iteration {}: sample={}", iteration, n);
    }
}

fn train_gd(
    x: &Matrix,
    y: &Labels,
    n_classes: usize,
    w: &mut Matrix,
    b: &mut Vector,
    config: &MulticlassTrainConfig,
) {
    let targets = one_hot(y, n_classes);
    let scale = config.step_size / x.nrows() as f64;

    for iteration in 0..config.max_iterations {
        let scores = x.dot(&w.t()) + &*b;
        let residual = softmax_rows(&scores) - &targets;

        let grad_w = residual.t().dot(x);
        let grad_b = residual.sum_axis(Axis(0));

        w.scaled_add(-scale, &grad_w);
        b.scaled_add(-scale, &grad_b);

        trace!("gd iteration {}", iteration);
    }
}

/// Class scores `X·wᵀ + b`, one row per example.
pub fn multiclass_scores(x: &Matrix, w: &Matrix, b: &Vector) -> Result<Matrix> {
    check_shape("weights", &[w.ncols()], &[x.ncols()])?;
    check_shape("biases", b.shape(), &[w.nrows()])?;
    if w.nrows() == 0 {
        return Err(ClassifierError::InvalidConfiguration(
            "weights must have at least one class row".to_string(),
        ));
    }
    Ok(x.dot(&w.t()) + b)
}

/// Class probabilities: stable softmax of each row of scores.
pub fn multiclass_predict_proba(x: &Matrix, w: &Matrix, b: &Vector) -> Result<Matrix> {
    let scores = multiclass_scores(x, w, b)?;
    Ok(softmax_rows(&scores))
}

/// Most probable class per example, lowest class index on ties.
pub fn multiclass_predict(x: &Matrix, w: &Matrix, b: &Vector) -> Result<Labels> {
    let proba = multiclass_predict_proba(x, w, b)?;
    let preds: Labels = proba
        .rows()
        .into_iter()
        .map(|row| argmax(&row).unwrap_or(0))
        .collect();

    check_shape("predictions", preds.shape(), &[x.nrows()])?;
    Ok(preds)
}

/// Multinomial logistic regression with the `fit`/`predict` estimator interface.
#[derive(Clone, Debug)]
pub struct MulticlassClassifier {
    pub weights: Option<Matrix>,
    pub biases: Option<Vector>,
    n_classes: usize,
    config: MulticlassTrainConfig,
}

impl MulticlassClassifier {
    pub fn new(n_classes: usize) -> Self {
        Self {
            weights: None,
            biases: None,
            n_classes,
            config: MulticlassTrainConfig::new(),
        }
    }

    pub fn gd_type(mut self, gd_type: GdType) -> Self {
        self.config.gd_type = gd_type;
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

    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    pub fn config(&self) -> &MulticlassTrainConfig {
        &self.config
    }

    pub fn fit(&mut self, x: &Matrix, y: &Labels) -> Result<()> {
        let (weights, biases) = multiclass_train(x, y, self.n_classes, None, None, &self.config)?;
        self.weights = Some(weights);
        self.biases = Some(biases);
        Ok(())
    }

    pub fn predict(&self, x: &Matrix) -> Result<Labels> {
        let weights = self.weights.as_ref().ok_or(ClassifierError::NotFitted)?;
        let biases = self.biases.as_ref().ok_or(ClassifierError::NotFitted)?;
        multiclass_predict(x, weights, biases)
    }

    pub fn predict_proba(&self, x: &Matrix) -> Result<Matrix> {
        let weights = self.weights.as_ref().ok_or(ClassifierError::NotFitted)?;
        let biases = self.biases.as_ref().ok_or(ClassifierError::NotFitted)?;
        multiclass_predict_proba(x, weights, biases)
    }

    pub fn score(&self, x: &Matrix, y: &Labels) -> Result<f64> {
        let predictions = self.predict(x)?;
        crate::metrics::accuracy_score(y, &predictions)
    }
}
