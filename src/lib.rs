//! Linear classifiers trained by gradient descent.
//!
//! Two pipelines are provided:
//! - binary classification with perceptron or logistic loss
//!   ([`binary_train`] / [`binary_predict`], or the [`BinaryClassifier`] estimator)
//! - multinomial logistic regression trained by full-batch or stochastic
//!   gradient descent ([`multiclass_train`] / [`multiclass_predict`], or the
//!   [`MulticlassClassifier`] estimator)
//!
//! # Examples
//! ```rust
//! use linclass::{binary_predict, binary_train, BinaryLoss, BinaryTrainConfig};
//! use ndarray::array;
//!
//! let x = array![[1.0, 2.0], [2.0, 1.0], [-1.0, -2.0], [-2.0, -1.0]];
//! let y = array![1, 1, 0, 0];
//!
//! let config = BinaryTrainConfig::new()
//!     .loss(BinaryLoss::Perceptron)
//!     .step_size(0.5)
//!     .max_iterations(100);
//! let (w, b) = binary_train(&x, &y, None, None, &config).unwrap();
//! assert_eq!(binary_predict(&x, &w, b).unwrap(), y);
//! ```

pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod dataset;
pub mod error;
pub mod linear_model;
pub mod metrics;
pub mod numeric;

pub use dataset::Dataset;
pub use error::{ClassifierError, Result};
pub use linear_model::{
    binary_decision_function, binary_predict, binary_train, multiclass_predict,
    multiclass_predict_proba, multiclass_scores, multiclass_train, BinaryClassifier, BinaryLoss,
    BinaryTrainConfig, GdType, MulticlassClassifier, MulticlassTrainConfig,
};

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;
pub type Labels = Array1<usize>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_types_work() {
        let vec = Vector::zeros(5);
        let mat = Matrix::zeros((3, 4));
        let labels = Labels::zeros(3);
        assert_eq!(vec.len(), 5);
        assert_eq!(mat.shape(), &[3, 4]);
        assert_eq!(labels.len(), mat.nrows());
    }
}
