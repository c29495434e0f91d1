//! Linear classifiers trained by gradient descent.
//!
//! This module provides:
//! - binary classification with perceptron or logistic loss
//!   (`binary_train`, `binary_predict`, `BinaryClassifier`)
//! - multinomial logistic regression trained by full-batch or stochastic
//!   gradient descent (`multiclass_train`, `multiclass_predict`,
//!   `MulticlassClassifier`)
//!
//! # Examples
//!
//! ## Binary classification
//! ```rust
//! use linclass::{BinaryClassifier, BinaryLoss};
//! use ndarray::array;
//!
//! let x = array![[1.0, 2.0], [2.0, 1.0], [-1.0, -2.0], [-2.0, -1.0]];
//! let y = array![1, 1, 0, 0];
//!
//! let mut model = BinaryClassifier::new().loss(BinaryLoss::Logistic).max_iterations(100);
//! model.fit(&x, &y).unwrap();
//! let predictions = model.predict(&x).unwrap();
//! let probabilities = model.predict_proba(&x).unwrap();
//! ```
//!
//! ## Multiclass classification
//! ```rust
//! use linclass::{GdType, MulticlassClassifier};
//! use ndarray::array;
//!
//! let x = array![[2.0, 0.0], [0.0, 2.0], [-2.0, -2.0]];
//! let y = array![0, 1, 2];
//!
//! let mut model = MulticlassClassifier::new(3)
//!     .gd_type(GdType::Gd)
//!     .step_size(0.1)
//!     .max_iterations(500);
//! model.fit(&x, &y).unwrap();
//! let predictions = model.predict(&x).unwrap();
//! assert_eq!(predictions, y);
//! ```

mod binary;
mod multiclass;

pub use binary::{
    binary_decision_function, binary_predict, binary_train, BinaryClassifier, BinaryLoss,
    BinaryTrainConfig,
};
pub use multiclass::{
    multiclass_predict, multiclass_predict_proba, multiclass_scores, multiclass_train, GdType,
    MulticlassClassifier, MulticlassTrainConfig, SGD_SEED,
};
