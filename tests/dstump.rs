use rand::prelude::*;

use weakboost::{
    Classifier,
    DecisionStump,
    Sample,
    WeakLearner,
    WeightedSample,
};


#[test]
fn finds_the_best_cut() {
    let sample = Sample::from_rows(
        &[[0.0], [1.0], [2.0], [3.0]], &[0, 0, 1, 1], 2
    ).unwrap();
    let weighted = WeightedSample::new(&sample).unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    let h = DecisionStump::init().produce(&weighted, &mut rng);

    assert_eq!(h.feature_index, 0);
    assert_eq!(h.threshold, 1.5);
    assert_eq!((h.left_label, h.right_label), (0, 1));
    assert_eq!(h.weighted_error(&weighted), 1e-6);
    assert_eq!(h.accuracy(&sample), 1.0);
}


#[test]
fn inverted_labels() {
    let sample = Sample::from_rows(
        &[[0.0], [1.0], [2.0], [3.0]], &[1, 1, 0, 0], 2
    ).unwrap();
    let weighted = WeightedSample::new(&sample).unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    let h = DecisionStump::init().produce(&weighted, &mut rng);

    assert_eq!(h.threshold, 1.5);
    assert_eq!((h.left_label, h.right_label), (1, 0));
}


#[test]
fn constant_attribute_falls_back_to_majority() {
    let sample = Sample::from_rows(
        &[[2.0], [2.0], [2.0], [2.0], [2.0]], &[1, 0, 1, 1, 0], 2
    ).unwrap();
    let weighted = WeightedSample::new(&sample).unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    let h = DecisionStump::init().produce(&weighted, &mut rng);

    assert!(h.is_constant());
    assert_eq!(h.left_label, 1);
    assert!((h.threshold - 1.9).abs() < 1e-12);
    assert_eq!(h.predict(&[100.0]), 1);
    assert_eq!(h.predict(&[-100.0]), 1);
}


#[test]
fn follows_the_weights() {
    // Uniformly, the cut 0.5 misclassifies one example (x = 2).
    // Once x = 2 carries half of the weight, the cut 2.5 wins.
    let sample = Sample::from_rows(
        &[[0.0], [1.0], [2.0], [3.0]], &[0, 1, 0, 1], 2
    ).unwrap();
    let mut weighted = WeightedSample::new(&sample).unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    let h = DecisionStump::init().produce(&weighted, &mut rng);
    assert_eq!(h.threshold, 0.5);

    let correctness = h.correctness(&sample);
    let error = weighted.weighted_error(&correctness);
    weighted.adjust_weights(&correctness, error).unwrap();

    assert!((weighted.weight(2) - 0.5).abs() < 1e-9);

    let h = DecisionStump::init().produce(&weighted, &mut rng);
    assert_eq!(h.threshold, 2.5);
    assert_eq!(h.predict(&[2.0]), 0);
}


#[test]
fn multiclass_cut() {
    let sample = Sample::from_rows(
        &[[0.0], [1.0], [2.0], [3.0], [4.0], [5.0]],
        &[2, 2, 2, 0, 1, 1],
        3,
    ).unwrap();
    let weighted = WeightedSample::new(&sample).unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    let h = DecisionStump::init().produce(&weighted, &mut rng);

    assert_eq!(h.threshold, 2.5);
    assert_eq!((h.left_label, h.right_label), (2, 1));
    assert_eq!(h.n_classes(), 3);
    assert!((h.accuracy(&sample) - 5.0 / 6.0).abs() < 1e-12);
}


#[test]
fn picks_attributes_at_random() {
    let sample = Sample::from_rows(
        &[[0.0, 3.0], [1.0, 2.0], [2.0, 1.0], [3.0, 0.0]],
        &[0, 0, 1, 1],
        2,
    ).unwrap();
    let weighted = WeightedSample::new(&sample).unwrap();
    let mut rng = StdRng::seed_from_u64(42);

    let mut seen = [false; 2];
    for _ in 0..64 {
        let h = DecisionStump::init().produce(&weighted, &mut rng);
        seen[h.feature_index] = true;
        assert_eq!(h.accuracy(&sample), 1.0);
    }
    assert_eq!(seen, [true, true]);
}
