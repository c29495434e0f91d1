use ndarray::{concatenate, s, Array1, Axis};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{check_shape, ClassifierError, Result};
use crate::{Labels, Matrix};

/// Feature matrix paired with class labels, one row per sample.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub features: Matrix,
    pub labels: Labels,
}

impl Dataset {
    pub fn new(features: Matrix, labels: Labels) -> Result<Self> {
        check_shape("labels", labels.shape(), &[features.nrows()])?;
        Ok(Self { features, labels })
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// One more than the largest label, 0 for an empty dataset.
    pub fn n_classes(&self) -> usize {
        self.labels.iter().max().map_or(0, |&max| max + 1)
    }

    /// Rows permuted by a generator seeded with `seed`.
    pub fn shuffle(&self, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut indices: Vec<usize> = (0..self.n_samples()).collect();
        indices.shuffle(&mut rng);

        Self {
            features: self.features.select(Axis(0), &indices),
            labels: self.labels.select(Axis(0), &indices),
        }
    }

    /// Splits off the last `test_size` fraction of rows as the test set.
    pub fn train_test_split(&self, test_size: f64) -> Result<(Self, Self)> {
        if test_size <= 0.0 || test_size >= 1.0 {
            return Err(ClassifierError::InvalidConfiguration(format!(
                "test_size must be between 0 and 1, got {}",
                test_size
            )));
        }

        let n_samples = self.n_samples();
        let n_test = (n_samples as f64 * test_size).round() as usize;
        let n_train = n_samples - n_test;

        let train_features = self.features.slice(s![..n_train, ..]).to_owned();
        let train_labels = self.labels.slice(s![..n_train]).to_owned();

        let test_features = self.features.slice(s![n_train.., ..]).to_owned();
        let test_labels = self.labels.slice(s![n_train..]).to_owned();

        let train_dataset = Dataset::new(train_features, train_labels)?;
        let test_dataset = Dataset::new(test_features, test_labels)?;

        Ok((train_dataset, test_dataset))
    }
}

/// Two linearly separable classes of `n_per_class` samples each.
///
/// Class 1 samples have every coordinate in `[margin, margin + 1)`, class 0
/// samples the mirror image, so the hyperplane through the origin orthogonal
/// to the all-ones vector separates them.
pub fn make_separable_binary(
    n_per_class: usize,
    n_features: usize,
    margin: f64,
    seed: u64,
) -> Result<Dataset> {
    if !(margin.is_finite() && margin > 0.0) {
        return Err(ClassifierError::InvalidConfiguration(format!(
            "margin must be positive and finite, got {}",
            margin
        )));
    }
    if n_features == 0 {
        return Err(ClassifierError::InvalidConfiguration(
            "n_features must be at least 1".to_string(),
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let positive = Matrix::random_using(
        (n_per_class, n_features),
        Uniform::new(margin, margin + 1.0),
        &mut rng,
    );
    let negative = Matrix::random_using(
        (n_per_class, n_features),
        Uniform::new(margin, margin + 1.0),
        &mut rng,
    ) * -1.0;

    let features = concatenate(Axis(0), &[positive.view(), negative.view()])
        .map_err(|e| ClassifierError::InvalidConfiguration(e.to_string()))?;
    let labels = Array1::from_iter(
        std::iter::repeat(1)
            .take(n_per_class)
            .chain(std::iter::repeat(0).take(n_per_class)),
    );

    Dataset::new(features, labels)
}

/// `n_per_class` samples drawn uniformly within `spread` of each row of
/// `centers`; samples around row `c` get label `c`.
pub fn make_blobs(n_per_class: usize, centers: &Matrix, spread: f64, seed: u64) -> Result<Dataset> {
    if !(spread.is_finite() && spread > 0.0) {
        return Err(ClassifierError::InvalidConfiguration(format!(
            "spread must be positive and finite, got {}",
            spread
        )));
    }

    let (n_classes, n_features) = centers.dim();
    let mut rng = StdRng::seed_from_u64(seed);

    let mut features = Matrix::random_using(
        (n_classes * n_per_class, n_features),
        Uniform::new(-spread, spread),
        &mut rng,
    );
    let mut labels = Labels::zeros(n_classes * n_per_class);

    for (class, center) in centers.rows().into_iter().enumerate() {
        let rows = class * n_per_class..(class + 1) * n_per_class;
        let mut block = features.slice_mut(s![rows.clone(), ..]);
        block += &center;
        labels.slice_mut(s![rows]).fill(class);
    }

    Dataset::new(features, labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_dataset_creation() {
        let features = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let labels = array![0, 2, 1];

        let dataset = Dataset::new(features, labels).unwrap();
        assert_eq!(dataset.n_samples(), 3);
        assert_eq!(dataset.n_features(), 2);
        assert_eq!(dataset.n_classes(), 3);
    }

    #[test]
    fn test_dataset_length_mismatch() {
        let features = array![[1.0], [2.0]];
        assert!(Dataset::new(features, array![0, 1, 1]).is_err());
    }

    #[test]
    fn test_train_test_split() {
        let features = Matrix::zeros((100, 5));
        let labels = Labels::from_iter(0..100);
        let dataset = Dataset::new(features, labels).unwrap();

        let (train, test) = dataset.train_test_split(0.2).unwrap();
        assert_eq!(train.n_samples(), 80);
        assert_eq!(test.n_samples(), 20);
        assert_eq!(train.labels[79], 79);
        assert_eq!(test.labels[0], 80);

        assert!(dataset.train_test_split(1.0).is_err());
    }

    #[test]
    fn test_shuffle_is_seeded_permutation() {
        let features = Matrix::from_shape_fn((10, 1), |(i, _)| i as f64);
        let labels = Labels::from_iter(0..10);
        let dataset = Dataset::new(features, labels).unwrap();

        let a = dataset.shuffle(3);
        let b = dataset.shuffle(3);
        assert_eq!(a.labels, b.labels);

        let mut sorted = a.labels.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..10).collect::<Vec<_>>());
        for (row, &label) in a.features.rows().into_iter().zip(a.labels.iter()) {
            assert_eq!(row[0], label as f64);
        }
    }

    #[test]
    fn test_make_separable_binary() {
        let data = make_separable_binary(20, 3, 0.5, 1).unwrap();
        assert_eq!(data.n_samples(), 40);
        assert_eq!(data.n_features(), 3);

        for (row, &label) in data.features.rows().into_iter().zip(data.labels.iter()) {
            let total: f64 = row.sum();
            if label == 1 {
                assert!(total > 0.0);
            } else {
                assert!(total < 0.0);
            }
        }
    }

    #[test]
    fn test_make_blobs() {
        let centers = array![[10.0, 0.0], [-10.0, 0.0]];
        let data = make_blobs(5, &centers, 1.0, 2).unwrap();

        assert_eq!(data.n_samples(), 10);
        assert_eq!(data.n_classes(), 2);
        for (row, &label) in data.features.rows().into_iter().zip(data.labels.iter()) {
            assert!((row[0] - centers[(label, 0)]).abs() <= 1.0);
        }

        assert!(make_blobs(5, &centers, 0.0, 2).is_err());
    }

    #[test]
    fn test_generators_reject_bad_parameters() {
        for margin in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                make_separable_binary(3, 2, margin, 1),
                Err(ClassifierError::InvalidConfiguration(_))
            ));
        }
        assert!(matches!(
            make_separable_binary(3, 0, 0.5, 1),
            Err(ClassifierError::InvalidConfiguration(_))
        ));

        let centers = Matrix::zeros((2, 2));
        for spread in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                make_blobs(3, &centers, spread, 1),
                Err(ClassifierError::InvalidConfiguration(_))
            ));
        }
    }
}
