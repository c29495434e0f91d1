use linclass::dataset::make_separable_binary;
use linclass::metrics::{accuracy_score, confusion_matrix};
use linclass::{binary_predict, binary_train, BinaryClassifier, BinaryLoss, BinaryTrainConfig};
use ndarray::array;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Binary Linear Classification Example ===\n");

    // Four points, two on each side of the line x1 + x2 = 0
    let x = array![[1.0, 2.0], [2.0, 1.0], [-1.0, -2.0], [-2.0, -1.0]];
    let y = array![1, 1, 0, 0];

    for loss in ["perceptron", "logistic"] {
        let config = BinaryTrainConfig::new()
            .loss(loss.parse::<BinaryLoss>()?)
            .step_size(0.5)
            .max_iterations(100);
        let (w, b) = binary_train(&x, &y, None, None, &config)?;
        let predictions = binary_predict(&x, &w, b)?;

        println!("{} loss:", loss);
        println!("  w = {:?}, b = {:.4}", w.to_vec(), b);
        println!("  predictions = {:?}", predictions.to_vec());
        println!("  accuracy = {:.2}%", accuracy_score(&y, &predictions)? * 100.0);
    }

    match "hinge".parse::<BinaryLoss>() {
        Ok(_) => println!("\nunexpectedly accepted 'hinge'"),
        Err(e) => println!("\nRejected unknown loss: {}", e),
    }

    // Larger synthetic problem with a held-out split
    let data = make_separable_binary(100, 5, 0.25, 42)?.shuffle(7);
    let (train, test) = data.train_test_split(0.25)?;

    println!("\nSynthetic dataset:");
    println!("Training samples: {}", train.n_samples());
    println!("Test samples: {}", test.n_samples());

    let mut model = BinaryClassifier::with_params(BinaryLoss::Logistic, 0.5, 500);
    model.fit(&train.features, &train.labels)?;

    let test_predictions = model.predict(&test.features)?;
    let probabilities = model.predict_proba(&test.features)?;
    let matrix = confusion_matrix(&test.labels, &test_predictions, 2)?;

    println!("\nTest accuracy: {:.2}%", model.score(&test.features, &test.labels)? * 100.0);
    println!("Confusion Matrix:");
    println!("[[{}, {}]", matrix[(0, 0)], matrix[(0, 1)]);
    println!(" [{}, {}]]", matrix[(1, 0)], matrix[(1, 1)]);

    println!("\nFirst test predictions:");
    for (i, ((&actual, &predicted), &probability)) in test
        .labels
        .iter()
        .zip(test_predictions.iter())
        .zip(probabilities.iter())
        .take(5)
        .enumerate()
    {
        println!(
            "Sample {}: Actual={}, Predicted={}, P(class 1)={:.3}",
            i + 1,
            actual,
            predicted,
            probability
        );
    }

    Ok(())
}
