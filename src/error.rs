use thiserror::Error;

/// Errors produced while training or applying a classifier.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifierError {
    /// Binary training needs exactly two distinct label values.
    #[error("binary classification requires exactly 2 distinct labels, found {found}")]
    InvalidLabelCount { found: usize },

    /// Unknown loss/algorithm name or an unusable hyperparameter.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A multiclass label outside `0..n_classes`.
    #[error("label {label} is out of range for {n_classes} classes")]
    InvalidLabel { label: usize, n_classes: usize },

    #[error("training data has no samples")]
    EmptyDataset,

    /// A shape invariant was violated (e.g. mismatched lengths).
    #[error("shape mismatch for {what}: got {got:?}, expected {expected:?}")]
    ShapeMismatch {
        what: &'static str,
        got: Vec<usize>,
        expected: Vec<usize>,
    },

    #[error("model not fitted, call fit() first")]
    NotFitted,
}

pub type Result<T> = std::result::Result<T, ClassifierError>;

/// Returns a [`ClassifierError::ShapeMismatch`] unless `got == expected`.
pub(crate) fn check_shape(what: &'static str, got: &[usize], expected: &[usize]) -> Result<()> {
    if got != expected {
        return Err(ClassifierError::ShapeMismatch {
            what,
            got: got.to_vec(),
            expected: expected.to_vec(),
        });
    }
    Ok(())
}

/// Returns [`ClassifierError::InvalidConfiguration`] unless the step size is
/// positive and finite.
pub(crate) fn validate_step_size(step_size: f64) -> Result<()> {
    if !step_size.is_finite() || step_size <= 0.0 {
        return Err(ClassifierError::InvalidConfiguration(format!(
            "step_size must be positive and finite, got {}",
            step_size
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_shape() {
        assert!(check_shape("w", &[3], &[3]).is_ok());

        let err = check_shape("w", &[2, 3], &[3, 2]).unwrap_err();
        assert_eq!(
            err,
            ClassifierError::ShapeMismatch {
                what: "w",
                got: vec![2, 3],
                expected: vec![3, 2],
            }
        );
    }

    #[test]
    fn test_validate_step_size() {
        assert!(validate_step_size(0.5).is_ok());
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                validate_step_size(bad),
                Err(ClassifierError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn test_error_messages() {
        let err = ClassifierError::InvalidLabelCount { found: 1 };
        assert_eq!(
            err.to_string(),
            "binary classification requires exactly 2 distinct labels, found 1"
        );

        let err = ClassifierError::InvalidConfiguration("unknown loss 'foo'".to_string());
        assert_eq!(err.to_string(), "invalid configuration: unknown loss 'foo'");
    }
}
