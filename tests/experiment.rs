use rand::prelude::*;
use rand_distr::Normal;

use weakboost::{
    BoostError,
    Experiment,
    LearnerKind,
    RunConfig,
    Sample,
    Scheme,
};

use std::fs;


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
fn split_in_two() {
    let sample = two_clusters(50, 1);

    let summary = Experiment::new(&sample)
        .scheme(Scheme::SplitInTwo { fraction: 0.6 })
        .rounds(10)
        .repeat(4)
        .run()
        .unwrap();

    assert_eq!(summary.accuracies.len(), 4);
    assert!(summary.min > 0.95);
    assert!(summary.min <= summary.mean && summary.mean <= summary.max);
}


#[test]
fn same_seed_same_summary() {
    let sample = two_clusters(20, 2);
    let experiment = Experiment::new(&sample)
        .learner(LearnerKind::Gaussian)
        .rounds(5)
        .repeat(3)
        .seed(10);

    let a = experiment.run().unwrap();
    let b = experiment.run().unwrap();
    assert_eq!(a, b);
}


#[test]
fn training_set() {
    let sample = two_clusters(20, 3);

    let summary = Experiment::new(&sample)
        .scheme(Scheme::TrainingSet)
        .rounds(10)
        .stop_on_convergence(true)
        .repeat(2)
        .run()
        .unwrap();

    assert_eq!(summary.accuracies, vec![1.0, 1.0]);
}


#[test]
fn testing_set() {
    let train = two_clusters(30, 4);
    let test = two_clusters(30, 5);

    let summary = Experiment::new(&train)
        .scheme(Scheme::TestingSet)
        .test_sample(&test)
        .rounds(10)
        .repeat(2)
        .run()
        .unwrap();
    assert!(summary.min > 0.95);

    let missing = Experiment::new(&train)
        .scheme(Scheme::TestingSet)
        .run();
    assert!(matches!(missing, Err(BoostError::InvalidParameter { .. })));

    let narrow = Sample::from_rows(&[[0.0], [1.0]], &[0, 1], 2).unwrap();
    let mismatch = Experiment::new(&train)
        .scheme(Scheme::TestingSet)
        .test_sample(&narrow)
        .run();
    assert!(matches!(mismatch, Err(BoostError::AttributeMismatch { .. })));
}


#[test]
fn bad_settings() {
    let sample = two_clusters(10, 6);

    let zero_repeat = Experiment::new(&sample).repeat(0).run();
    assert!(zero_repeat.is_err());

    let zero_rounds = Experiment::new(&sample).rounds(0).run();
    assert!(zero_rounds.is_err());

    let bad_fraction = Experiment::new(&sample)
        .scheme(Scheme::SplitInTwo { fraction: 1.0 })
        .run();
    assert!(bad_fraction.is_err());
}


#[test]
fn round_log_per_run() {
    let sample = two_clusters(10, 7);
    let dir = std::env::temp_dir().join("weakboost-round-log");
    fs::create_dir_all(&dir).unwrap();

    Experiment::new(&sample)
        .scheme(Scheme::TrainingSet)
        .rounds(3)
        .repeat(2)
        .log_file(dir.join("adaboost.csv"))
        .run()
        .unwrap();

    for r in 0..2 {
        let text = fs::read_to_string(dir.join(format!("adaboost_{r}.csv")))
            .unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(
            lines[0],
            "Round,WeightedError,Confidence,\
             WeakAccuracy,TrainAccuracy,TestAccuracy,Time"
        );
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("1,"));
        assert_eq!(lines[3].split(',').count(), 7);
    }
}


#[test]
fn from_config_file() {
    let config = RunConfig::from_json_file("tests/dataset/config.json")
        .unwrap();
    let (train, test) = config.read_samples().unwrap();
    assert!(test.is_none());
    assert_eq!(train.class_names(), &["neg", "pos"]);

    let summary = Experiment::new(&train)
        .with_config(&config)
        .run()
        .unwrap();

    assert_eq!(summary.accuracies.len(), 3);
    assert!(summary.accuracies.iter().all(|a| (0.0..=1.0).contains(a)));
}


#[test]
fn print_every_zero_is_silent() {
    let sample = two_clusters(10, 9);

    let summary = Experiment::new(&sample)
        .scheme(Scheme::TrainingSet)
        .rounds(3)
        .repeat(1)
        .print_every(0)
        .run()
        .unwrap();

    assert_eq!(summary.accuracies.len(), 1);
}
