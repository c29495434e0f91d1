//! Numeric primitives shared by the trainers and predictors.

use ndarray::{Array, ArrayBase, ArrayViewMut1, Axis, Data, Dimension, Ix1, Ix2};

use crate::{Matrix, Vector};

/// Logistic function `1 / (1 + e^-z)`.
///
/// Evaluated in the two-branch form so that `exp` is only ever taken of a
/// non-positive argument.
#[inline]
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/// Element-wise [`sigmoid`] over an array of any dimension.
pub fn sigmoid_array<S, D>(z: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    z.mapv(sigmoid)
}

/// Stable softmax in place: subtracts the maximum before exponentiating.
pub fn softmax_inplace(mut scores: ArrayViewMut1<'_, f64>) {
    if scores.is_empty() {
        return;
    }

    let max = scores.fold(f64::NEG_INFINITY, |m, &v| m.max(v));
    scores.mapv_inplace(|v| (v - max).exp());

    let sum = scores.sum();
    if sum > 0.0 {
        scores /= sum;
    }
}

/// Stable softmax of a single score vector.
pub fn softmax<S>(scores: &ArrayBase<S, Ix1>) -> Vector
where
    S: Data<Elem = f64>,
{
    let mut out = scores.to_owned();
    softmax_inplace(out.view_mut());
    out
}

/// Stable softmax applied independently to every row (one row per example).
pub fn softmax_rows<S>(scores: &ArrayBase<S, Ix2>) -> Matrix
where
    S: Data<Elem = f64>,
{
    let mut out = scores.to_owned();
    for row in out.axis_iter_mut(Axis(0)) {
        softmax_inplace(row);
    }
    out
}

/// Index of the largest entry, lowest index on ties. `None` for an empty input.
pub fn argmax<S>(values: &ArrayBase<S, Ix1>) -> Option<usize>
where
    S: Data<Elem = f64>,
{
    let mut iter = values.iter().enumerate();
    let (mut best, mut best_value) = match iter.next() {
        Some((i, &v)) => (i, v),
        None => return None,
    };
    for (i, &v) in iter {
        if v > best_value {
            best = i;
            best_value = v;
        }
    }
    Some(best)
}

/// One-hot encoding: row `i` has a single 1.0 in column `labels[i]`.
///
/// Callers guarantee every label is `< n_classes`.
pub(crate) fn one_hot<S>(labels: &ArrayBase<S, Ix1>, n_classes: usize) -> Matrix
where
    S: Data<Elem = usize>,
{
    let mut encoded = Matrix::zeros((labels.len(), n_classes));
    for (i, &label) in labels.iter().enumerate() {
        encoded[(i, label)] = 1.0;
    }
    encoded
}
