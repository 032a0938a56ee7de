use fixedbitset::FixedBitSet;
use rand::prelude::*;

use weakboost::{
    confidence_weight,
    BoostError,
    Sample,
    WeightedSample,
};


fn line(n: usize) -> Sample {
    let rows = (0..n).map(|i| [i as f64]).collect::<Vec<_>>();
    let labels = (0..n).map(|i| i % 2).collect::<Vec<_>>();
    Sample::from_rows(&rows, &labels, 2).unwrap()
}


fn bits(n: usize, correct: &[usize]) -> FixedBitSet {
    let mut bits = FixedBitSet::with_capacity(n);
    correct.iter().for_each(|&i| { bits.put(i); });
    bits
}


#[test]
fn starts_uniform() {
    let sample = line(5);
    let weighted = WeightedSample::new(&sample).unwrap();

    assert_eq!(weighted.len(), 5);
    assert!(weighted.weights().iter().all(|&w| w == 0.2));
}


#[test]
fn weights_stay_normalized() {
    let n = 37;
    let sample = line(n);
    let mut weighted = WeightedSample::new(&sample).unwrap();
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..200 {
        let mut correctness = FixedBitSet::with_capacity(n);
        (0..n).for_each(|i| correctness.set(i, rng.gen_bool(0.7)));
        let error = rng.gen_range(0.01..0.99);

        weighted.adjust_weights(&correctness, error).unwrap();

        let sum = weighted.weights().iter().sum::<f64>();
        assert!((sum - 1.0).abs() < 1e-9, "sum = {sum}");
        assert!(weighted.weights().iter().all(|&w| w > 0.0));
    }
}


#[test]
fn misclassified_examples_gain_weight() {
    let sample = line(4);
    let mut weighted = WeightedSample::new(&sample).unwrap();

    let alpha = weighted.adjust_weights(&bits(4, &[0, 1]), 0.3).unwrap();

    assert!(alpha > 0.0);
    assert!(weighted.weight(2) > weighted.weight(0));
    assert!(weighted.weight(3) > weighted.weight(1));
    assert_eq!(weighted.weight(0), weighted.weight(1));
}


#[test]
fn reweighting_factor() {
    let sample = line(4);
    let mut weighted = WeightedSample::new(&sample).unwrap();

    let alpha = weighted.adjust_weights(&bits(4, &[0, 1, 2]), 0.25).unwrap();

    assert!((alpha - confidence_weight(0.25)).abs() < 1e-12);
    // exp(2 alpha) = (1 - e) / e = 3
    let ratio = weighted.weight(3) / weighted.weight(0);
    assert!((ratio - 3.0).abs() < 1e-9, "ratio = {ratio}");
}


#[test]
fn zero_error_is_clamped() {
    let sample = line(4);
    let mut weighted = WeightedSample::new(&sample).unwrap();

    let alpha = weighted.adjust_weights(&bits(4, &[0, 1, 2, 3]), 0.0).unwrap();

    assert!((alpha - confidence_weight(1e-6)).abs() < 1e-12);
    assert!(weighted.weights().iter().all(|&w| (w - 0.25).abs() < 1e-12));
}


#[test]
fn invalid_weighted_error() {
    let sample = line(4);
    let mut weighted = WeightedSample::new(&sample).unwrap();
    let correctness = bits(4, &[0]);

    for error in [f64::NAN, -0.1, 1.5, f64::INFINITY] {
        let result = weighted.adjust_weights(&correctness, error);
        assert!(matches!(result, Err(BoostError::InvalidWeightedError(_))));
    }
    assert!(weighted.weights().iter().all(|&w| w == 0.25));
}


#[test]
fn correctness_length_mismatch() {
    let sample = line(4);
    let mut weighted = WeightedSample::new(&sample).unwrap();

    let result = weighted.adjust_weights(&bits(3, &[0]), 0.3);

    assert!(matches!(
        result,
        Err(BoostError::LengthMismatch { expected: 4, got: 3 })
    ));
}


#[test]
fn weighted_error_sums_misclassified() {
    let sample = line(4);
    let weighted = WeightedSample::new(&sample).unwrap();

    assert_eq!(weighted.weighted_error(&bits(4, &[0, 1, 2, 3])), 0.0);
    assert_eq!(weighted.weighted_error(&bits(4, &[0])), 0.75);
}


#[test]
fn empty_sample_is_rejected() {
    let result = Sample::from_rows::<[f64; 1]>(&[], &[], 2);
    assert!(matches!(result, Err(BoostError::EmptySample)));
}
