use rand::prelude::*;
use rand_distr::Normal;

use weakboost::{
    confidence_weight,
    AdaBoost,
    BoostError,
    Booster,
    Classifier,
    Dataset,
    DecisionStump,
    LearnerKind,
    Logger,
    Sample,
    SimpleClassifier,
    StumpClassifier,
    WeakLearner,
    WeightedSample,
};


fn eight_examples() -> Sample {
    let rows = (1..=8).map(|x| [x as f64]).collect::<Vec<_>>();
    Sample::from_rows(&rows, &[0, 0, 0, 0, 1, 1, 1, 1], 2).unwrap()
}


// Two well separated Gaussian clusters in two dimensions.
fn two_clusters(n_per_class: usize, seed: u64) -> Sample {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 0.5).unwrap();

    let mut rows = Vec::with_capacity(2 * n_per_class);
    let mut labels = Vec::with_capacity(2 * n_per_class);
    for (label, center) in [(0_usize, -3.0), (1, 3.0)] {
        for _ in 0..n_per_class {
            let x: f64 = center + noise.sample(&mut rng);
            let y: f64 = center + noise.sample(&mut rng);
            rows.push([x, y]);
            labels.push(label);
        }
    }
    Sample::from_rows(&rows, &labels, 2).unwrap()
}


#[test]
fn eight_examples_single_round() {
    let sample = eight_examples();
    let mut booster = AdaBoost::init(&sample)
        .unwrap()
        .max_rounds(1);

    let f = booster.run(&DecisionStump::init()).unwrap();

    assert_eq!(f.len(), 1);
    assert_eq!(f.hypotheses[0].threshold, 4.5);
    assert_eq!(booster.per_round_weighted_error(), vec![1e-6]);
    assert_eq!(
        booster.per_round_confidence_weight(),
        vec![confidence_weight(1e-6)]
    );
    assert_eq!(booster.training_accuracy(), 1.0);
    assert_eq!(f.test(&sample).unwrap(), 1.0);
    assert_eq!(booster.terminated(), Some(1));
}


#[test]
fn stops_on_convergence() {
    let sample = eight_examples();
    let mut booster = AdaBoost::init(&sample)
        .unwrap()
        .max_rounds(2)
        .stop_on_convergence(true);

    let f = booster.run(&DecisionStump::init()).unwrap();

    assert_eq!(f.len(), 2);
    assert_eq!(booster.terminated(), Some(2));
    assert_eq!(booster.history().len(), 2);
}


#[test]
fn convergence_stops_at_the_second_round() {
    let sample = eight_examples();
    let mut booster = AdaBoost::init(&sample)
        .unwrap()
        .max_rounds(10)
        .stop_on_convergence(true);

    let f = booster.run(&DecisionStump::init()).unwrap();

    // Round 1 already fits the sample, yet round 2 is still trained.
    assert_eq!(booster.history()[0].ensemble_accuracy, 1.0);
    assert_eq!(f.len(), 2);
    assert_eq!(booster.terminated(), Some(2));
}


#[test]
fn runs_every_round_without_convergence_check() {
    let sample = eight_examples();
    let mut booster = AdaBoost::init(&sample)
        .unwrap()
        .max_rounds(3);

    let f = booster.run(&DecisionStump::init()).unwrap();

    assert_eq!(f.len(), 3);
    assert_eq!(booster.terminated(), Some(3));

    let history = booster.history();
    assert_eq!(history.len(), 3);
    for (t, report) in history.iter().enumerate() {
        assert_eq!(report.round, t);
        assert_eq!(report.weighted_error, 1e-6);
        assert_eq!(report.weak_accuracy, 1.0);
        assert_eq!(report.ensemble_accuracy, 1.0);
    }
    assert_eq!(f.weights, booster.per_round_confidence_weight());
}


#[test]
fn classify_is_idempotent() {
    let sample = two_clusters(50, 11);
    let mut booster = AdaBoost::init(&sample)
        .unwrap()
        .max_rounds(5)
        .seed(5);

    let f = booster.run(&DecisionStump::init()).unwrap();

    for row in 0..sample.n_examples() {
        let example = sample.example(row);
        let first = f.predict(&example);
        let second = f.predict(&example);
        assert_eq!(first, second);
        assert_eq!(first, f.predict_row(&sample, row));
    }
    assert_eq!(f.predict_all(&sample), f.predict_all(&sample));
}


#[test]
fn more_rounds_do_not_hurt_on_separable_clusters() {
    let sample = two_clusters(100, 1234);

    let mut one = AdaBoost::init(&sample).unwrap().max_rounds(1).seed(0);
    let f1 = one.run(&DecisionStump::init()).unwrap();

    let mut ten = AdaBoost::init(&sample).unwrap().max_rounds(10).seed(0);
    let f10 = ten.run(&DecisionStump::init()).unwrap();

    let acc1 = f1.test(&sample).unwrap();
    let acc10 = f10.test(&sample).unwrap();
    assert!(acc10 >= acc1, "{acc10} < {acc1}");
    assert!(acc10 > 0.99);
    assert_eq!(acc10, ten.training_accuracy());
}


#[test]
fn gaussian_weak_learner() {
    let sample = two_clusters(100, 99);
    let mut booster: AdaBoost<'_, SimpleClassifier> = AdaBoost::init(&sample)
        .unwrap()
        .max_rounds(10)
        .seed(3);

    let f = booster.run_with(LearnerKind::Gaussian).unwrap();

    assert!(f.test(&sample).unwrap() > 0.95);
    assert_eq!(f.len(), booster.history().len());
}


#[test]
fn same_seed_same_ensemble() {
    let sample = two_clusters(30, 8);

    let mut a: AdaBoost<'_, SimpleClassifier> =
        AdaBoost::init(&sample).unwrap().max_rounds(20).seed(17);
    let mut b: AdaBoost<'_, SimpleClassifier> =
        AdaBoost::init(&sample).unwrap().max_rounds(20).seed(17);

    let fa = a.run_with(LearnerKind::Stump).unwrap();
    let fb = b.run_with(LearnerKind::Stump).unwrap();
    assert_eq!(fa, fb);
    assert_eq!(a.history(), b.history());
}


#[test]
fn confidence_weight_sign() {
    assert!(confidence_weight(0.2) > 0.0);
    assert!(confidence_weight(0.8) < 0.0);
    assert_eq!(confidence_weight(0.5), 0.0);
    assert_eq!(confidence_weight(0.5 + 1e-12), 0.0);
}


// A weak learner that always answers the wrong label.
struct Contrarian;

#[derive(Clone)]
struct Inverted;

impl Classifier for Inverted {
    fn n_classes(&self) -> usize { 2 }

    fn predict(&self, example: &[f64]) -> usize {
        if example[0] < 4.5 { 1 } else { 0 }
    }
}

impl WeakLearner for Contrarian {
    type Hypothesis = Inverted;

    fn name(&self) -> &str { "Contrarian" }

    fn produce<D, R>(&self, _: &WeightedSample<'_, D>, _: &mut R) -> Inverted
        where D: Dataset + ?Sized,
              R: Rng + ?Sized,
    {
        Inverted
    }
}


#[test]
fn worse_than_random_learner_gets_an_inverted_vote() {
    let sample = eight_examples();
    let mut booster = AdaBoost::init(&sample)
        .unwrap()
        .max_rounds(1);

    let f = booster.run(&Contrarian).unwrap();

    assert_eq!(booster.per_round_weighted_error(), vec![1.0]);
    assert!(f.weights[0] < 0.0);
    assert_eq!(booster.history()[0].weak_accuracy, 0.0);
    assert_eq!(f.test(&sample).unwrap(), 1.0);
}


#[test]
fn zero_rounds_is_rejected() {
    let sample = eight_examples();
    let mut booster = AdaBoost::init(&sample)
        .unwrap()
        .max_rounds(0);

    let result = booster.run(&DecisionStump::init());
    assert!(matches!(result, Err(BoostError::InvalidParameter { .. })));
}


#[test]
fn test_checks_the_attributes() {
    let sample = eight_examples();
    let mut booster = AdaBoost::init(&sample).unwrap().max_rounds(1);
    let f = booster.run(&DecisionStump::init()).unwrap();

    let wide = Sample::from_rows(&[[1.0, 2.0]], &[0], 2).unwrap();
    assert!(matches!(
        f.test(&wide),
        Err(BoostError::AttributeMismatch { expected: 1, got: 2 })
    ));
}


#[test]
fn ensemble_serializes() {
    let sample = eight_examples();
    let mut booster = AdaBoost::init(&sample).unwrap().max_rounds(2);
    let f = booster.run(&DecisionStump::init()).unwrap();

    let json = serde_json::to_string(&f).unwrap();
    let g: weakboost::WeightedMajority<StumpClassifier>
        = serde_json::from_str(&json).unwrap();
    assert_eq!(g.predict_all(&sample), f.predict_all(&sample));
}


#[test]
fn logger_drives_the_same_rounds() {
    let sample = eight_examples();
    let booster = AdaBoost::init(&sample).unwrap().max_rounds(3);

    let mut logger: Logger<'_, _, _> = Logger::new(booster, DecisionStump::init())
        .print_every(0);
    let f = logger.run().unwrap();
    assert_eq!(logger.booster().history().len(), 3);

    let booster = logger.into_booster();
    assert_eq!(booster.terminated(), Some(3));

    let (weights, hypotheses) = f.decompose();
    assert_eq!(weights, booster.per_round_confidence_weight());
    assert!(hypotheses.iter().all(|h| h.threshold == 4.5));
}


#[test]
fn distribution_after_the_run() {
    let sample = two_clusters(20, 21);
    let mut booster = AdaBoost::init(&sample)
        .unwrap()
        .max_rounds(4)
        .seed(2);
    booster.run(&DecisionStump::init()).unwrap();

    let weighted = booster.weighted_sample();
    assert_eq!(weighted.len(), sample.n_examples());
    let total = weighted.weights().iter().sum::<f64>();
    assert!((total - 1.0).abs() < 1e-9, "sum = {total}");
    assert!(weighted.weights().iter().all(|w| *w > 0.0));
}
