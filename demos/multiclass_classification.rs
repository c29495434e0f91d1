use linclass::dataset::make_blobs;
use linclass::metrics::confusion_matrix;
use linclass::{GdType, MulticlassClassifier};
use ndarray::array;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Multiclass Logistic Regression Example ===\n");

    let centers = array![[3.0, 3.0], [-3.0, 3.0], [0.0, -3.0]];
    let data = make_blobs(60, &centers, 1.5, 42)?.shuffle(1);
    let (train, test) = data.train_test_split(0.2)?;
    let n_classes = data.n_classes();

    println!("Classes: {}", n_classes);
    println!("Training samples: {}", train.n_samples());
    println!("Test samples: {}", test.n_samples());

    for (gd_type, step_size, max_iterations) in [("gd", 0.05, 500), ("sgd", 0.01, 3000)] {
        let mut model = MulticlassClassifier::new(n_classes)
            .gd_type(gd_type.parse::<GdType>()?)
            .step_size(step_size)
            .max_iterations(max_iterations);
        model.fit(&train.features, &train.labels)?;

        let predictions = model.predict(&test.features)?;
        let matrix = confusion_matrix(&test.labels, &predictions, n_classes)?;

        println!("\n{} (step_size={}, max_iterations={}):", gd_type, step_size, max_iterations);
        println!("  train accuracy: {:.2}%", model.score(&train.features, &train.labels)? * 100.0);
        println!("  test accuracy:  {:.2}%", model.score(&test.features, &test.labels)? * 100.0);
        println!("  confusion matrix (rows = actual):");
        for row in matrix.rows() {
            println!("    {:?}", row.to_vec());
        }
    }

    let mut model = MulticlassClassifier::new(n_classes).gd_type(GdType::Gd).step_size(0.05);
    model.fit(&train.features, &train.labels)?;

    let new_points = array![[2.5, 2.5], [-2.0, 4.0], [0.5, -2.0]];
    let probabilities = model.predict_proba(&new_points)?;
    let predictions = model.predict(&new_points)?;

    println!("\nPredictions on new data:");
    for ((point, proba), class) in new_points
        .rows()
        .into_iter()
        .zip(probabilities.rows())
        .zip(predictions.iter())
    {
        println!(
            "  {:?} -> class {} (probabilities {:?})",
            point.to_vec(),
            class,
            proba.iter().map(|p| format!("{:.3}", p)).collect::<Vec<_>>()
        );
    }

    Ok(())
}
