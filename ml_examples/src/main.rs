// ml_examples/src/main.rs
use anyhow::Result;
use shallow_ml::{
    accuracy, f1_score, generate_synthetic_data, precision, print_model_summary, recall,
    BinaryCrossEntropy, Classifier, Dataset, DenseLayer, KnnClassifier, NaiveBayes, ReluLayer,
    SequentialModel, SigmoidLayer,
};
use std::sync::Arc;

fn evaluate(model: &mut dyn Classifier, test: &Dataset) -> Result<()> {
    let mut expected = Vec::with_capacity(test.len());
    let mut predicted = Vec::with_capacity(test.len());
    for point in &test.points {
        expected.push(point.label);
        predicted.push(model.predict(&point.features)?);
    }
    println!("\n=== {} ===", model.name());
    println!("Accuracy:   {:.3}", accuracy(&expected, &predicted)?);
    println!("Precision:  {:.3}", precision(&expected, &predicted)?);
    println!("Recall:     {:.3}", recall(&expected, &predicted)?);
    println!("F1 (macro): {:.3}", f1_score(&expected, &predicted)?);
    Ok(())
}

fn main() -> Result<()> {
    let data = generate_synthetic_data(200, 2, 2);
    let (train, test) = data.split(0.8);
    println!("{} training points, {} test points", train.len(), test.len());

    let mut network = SequentialModel::with_loss(Arc::new(BinaryCrossEntropy));
    network.add(Box::new(DenseLayer::new(2, 4)));
    network.add(Box::new(ReluLayer::new()));
    network.add(Box::new(DenseLayer::new(4, 1)));
    network.add(Box::new(SigmoidLayer::new()));
    network.hyperparameters_mut().insert("LearningRate".to_string(), 0.1);
    network.hyperparameters_mut().insert("Epochs".to_string(), 50.0);
    print_model_summary(&network);
    network.train(&train)?;
    evaluate(&mut network, &test)?;

    let mut knn = KnnClassifier::new();
    knn.train(&train)?;
    evaluate(&mut knn, &test)?;

    let mut bayes = NaiveBayes::new();
    bayes.train(&train)?;
    evaluate(&mut bayes, &test)?;

    Ok(())
}
