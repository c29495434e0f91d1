use ndarray::Array2;

use crate::error::{check_shape, ClassifierError, Result};
use crate::Labels;

/// Fraction of predictions equal to the true label.
pub fn accuracy_score(y_true: &Labels, y_pred: &Labels) -> Result<f64> {
    check_shape("y_pred", y_pred.shape(), y_true.shape())?;
    if y_true.is_empty() {
        return Err(ClassifierError::EmptyDataset);
    }

    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(actual, pred)| actual == pred)
        .count();
    Ok(correct as f64 / y_true.len() as f64)
}

/// `n_classes × n_classes` counts, rows are true labels and columns predictions.
pub fn confusion_matrix(y_true: &Labels, y_pred: &Labels, n_classes: usize) -> Result<Array2<usize>> {
    check_shape("y_pred", y_pred.shape(), y_true.shape())?;

    let mut matrix = Array2::zeros((n_classes, n_classes));
    for (&actual, &pred) in y_true.iter().zip(y_pred.iter()) {
        let label = actual.max(pred);
        if label >= n_classes {
            return Err(ClassifierError::InvalidLabel { label, n_classes });
        }
        matrix[(actual, pred)] += 1;
    }
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_accuracy_score() {
        let y_true = array![0, 1, 2, 1];
        let y_pred = array![0, 1, 1, 1];

        let accuracy = accuracy_score(&y_true, &y_pred).unwrap();
        assert!((accuracy - 0.75).abs() < 1e-10);
    }

    #[test]
    fn test_accuracy_score_errors() {
        assert!(accuracy_score(&array![0, 1], &array![0]).is_err());
        assert_eq!(
            accuracy_score(&Labels::zeros(0), &Labels::zeros(0)).unwrap_err(),
            ClassifierError::EmptyDataset
        );
    }

    #[test]
    fn test_confusion_matrix() {
        let y_true = array![0, 0, 1, 2, 2];
        let y_pred = array![0, 1, 1, 2, 0];

        let matrix = confusion_matrix(&y_true, &y_pred, 3).unwrap();
        assert_eq!(matrix, array![[1, 1, 0], [0, 1, 0], [1, 0, 1]]);
        assert_eq!(matrix.sum(), 5);
    }

    #[test]
    fn test_confusion_matrix_label_out_of_range() {
        let err = confusion_matrix(&array![0, 3], &array![0, 1], 2).unwrap_err();
        assert_eq!(err, ClassifierError::InvalidLabel { label: 3, n_classes: 2 });
    }
}
