//! Repeated boosting runs with accuracy statistics.
use colored::Colorize;
use rand::prelude::*;
use serde::{Serialize, Deserialize};

use crate::{
    AdaBoost,
    BoostError,
    Dataset,
    LearnerKind,
    Result,
    Sample,
    SimpleClassifier,
    common::checker,
};
use crate::constants::{
    DEFAULT_REPEAT,
    DEFAULT_ROUNDS,
    DEFAULT_SEED,
    DEFAULT_TRAIN_FRACTION,
};
use super::config::RunConfig;
use super::logger::Logger;

use std::fmt;
use std::path::{Path, PathBuf};


/// How the ensemble of each run is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Scheme {
    /// Every run splits the sample anew,
    /// trains on `fraction` of it and tests on the rest.
    SplitInTwo {
        /// Fraction of the training part, in `(0, 1)`.
        fraction: f64,
    },
    /// Train and test on the whole sample.
    TrainingSet,
    /// Train on the whole sample and test on a separate sample.
    TestingSet,
}


impl Default for Scheme {
    fn default() -> Self {
        Self::SplitInTwo { fraction: DEFAULT_TRAIN_FRACTION }
    }
}


/// Test accuracies of the runs of an [`Experiment`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Test accuracy of each run.
    pub accuracies: Vec<f64>,
    /// Lowest accuracy.
    pub min: f64,
    /// Highest accuracy.
    pub max: f64,
    /// Average accuracy.
    pub mean: f64,
}


impl Summary {
    fn from_accuracies(accuracies: Vec<f64>) -> Self {
        let min = accuracies.iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
        let max = accuracies.iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        let mean = accuracies.iter().sum::<f64>() / accuracies.len() as f64;
        Self { accuracies, min, max, mean }
    }
}


impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} runs: min {:.4}, max {:.4}, mean {:.4}",
            self.accuracies.len(),
            self.min,
            self.max,
            self.mean,
        )
    }
}


/// Runs [`AdaBoost`] several times and summarizes the test accuracies.
///
/// Run `r` (0-based) seeds its random source with `seed + r`
/// and starts from a fresh uniform distribution.
///
/// ```no_run
/// use weakboost::prelude::*;
///
/// let sample = SampleReader::default()
///     .file("iris.csv")
///     .has_header(true)
///     .read()
///     .unwrap();
/// let summary = Experiment::new(&sample)
///     .scheme(Scheme::SplitInTwo { fraction: 0.6 })
///     .learner(LearnerKind::Gaussian)
///     .rounds(20)
///     .repeat(10)
///     .run()
///     .unwrap();
/// println!("{summary}");
/// ```
pub struct Experiment<'a> {
    train: &'a Sample,
    test: Option<&'a Sample>,
    scheme: Scheme,
    rounds: usize,
    learner: LearnerKind,
    stop_on_convergence: bool,
    repeat: usize,
    seed: u64,
    verbose: bool,
    print_every: usize,
    log_file: Option<PathBuf>,
}


impl<'a> Experiment<'a> {
    /// Construct an experiment on `train`.
    pub fn new(train: &'a Sample) -> Self {
        Self {
            train,
            test: None,
            scheme: Scheme::default(),
            rounds: DEFAULT_ROUNDS,
            learner: LearnerKind::default(),
            stop_on_convergence: false,
            repeat: DEFAULT_REPEAT,
            seed: DEFAULT_SEED,
            verbose: false,
            print_every: usize::MAX,
            log_file: None,
        }
    }


    /// Applies the settings of `config`.
    /// The samples are not read; see [`RunConfig::read_samples`].
    pub fn with_config(mut self, config: &RunConfig) -> Self {
        self.scheme = config.scheme();
        self.rounds = config.rounds;
        self.learner = config.learner;
        self.stop_on_convergence = config.stop_on_convergence;
        self.repeat = config.repeat;
        self.seed = config.seed;
        self.print_every = config.print_every.unwrap_or(usize::MAX);
        self.log_file = config.log_file.clone();
        self
    }


    /// Set the evaluation scheme.
    pub fn scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }


    /// Set the testing sample for [`Scheme::TestingSet`].
    pub fn test_sample(mut self, test: &'a Sample) -> Self {
        self.test = Some(test);
        self
    }


    /// Set the maximum number of rounds of each run.
    pub fn rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }


    /// Set the weak learner.
    pub fn learner(mut self, learner: LearnerKind) -> Self {
        self.learner = learner;
        self
    }


    /// Stop each run once the ensemble fits its training part.
    pub fn stop_on_convergence(mut self, flag: bool) -> Self {
        self.stop_on_convergence = flag;
        self
    }


    /// Set the number of runs.
    pub fn repeat(mut self, repeat: usize) -> Self {
        self.repeat = repeat;
        self
    }


    /// Set the seed of the first run.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Print the test accuracy of each run.
    pub fn verbose(mut self, flag: bool) -> Self {
        self.verbose = flag;
        self
    }


    /// Print the round statistics of each run every `round` rounds.
    /// `0` and `usize::MAX` print nothing.
    pub fn print_every(mut self, round: usize) -> Self {
        self.print_every = round;
        self
    }


    /// Write the round statistics of run `r` to `<stem>_<r>.csv`
    /// next to `path`.
    pub fn log_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.log_file = Some(path.as_ref().to_path_buf());
        self
    }


    fn check(&self) -> Result<()> {
        checker::check_rounds(self.rounds)?;
        if self.repeat == 0 {
            return Err(BoostError::invalid("repeat", "must be positive"));
        }
        match self.scheme {
            Scheme::SplitInTwo { fraction } => {
                checker::check_fraction(fraction)?;
            },
            Scheme::TestingSet => {
                let test = self.test.ok_or_else(|| BoostError::invalid(
                    "test",
                    "the testing-set scheme needs a testing sample",
                ))?;
                checker::check_attributes(self.train.shape().1, test)?;
            },
            Scheme::TrainingSet => {},
        }
        Ok(())
    }


    /// Runs the experiment.
    pub fn run(&self) -> Result<Summary> {
        self.check()?;

        let mut accuracies = Vec::with_capacity(self.repeat);
        for r in 0..self.repeat {
            let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(r as u64));

            let accuracy = match self.scheme {
                Scheme::SplitInTwo { fraction } => {
                    let (train, test) = self.train
                        .split_in_two(fraction, &mut rng)?;
                    self.run_once(r, &train, &test, rng)?
                },
                Scheme::TrainingSet => {
                    self.run_once(r, self.train, self.train, rng)?
                },
                Scheme::TestingSet => {
                    let test = self.test.ok_or_else(|| BoostError::invalid(
                        "test",
                        "the testing-set scheme needs a testing sample",
                    ))?;
                    self.run_once(r, self.train, test, rng)?
                },
            };

            if self.verbose {
                println!(
                    "{} {}\t{}",
                    "[RUN]".bold().magenta(),
                    format!("{:>4}", r + 1).red(),
                    format!("{:>8.5}", accuracy).bold().yellow(),
                );
            }
            accuracies.push(accuracy);
        }

        Ok(Summary::from_accuracies(accuracies))
    }


    fn run_once(
        &self,
        r: usize,
        train: &Sample,
        test: &Sample,
        rng: StdRng,
    ) -> Result<f64>
    {
        let booster: AdaBoost<'_, SimpleClassifier> = AdaBoost::init(train)?
            .max_rounds(self.rounds)
            .stop_on_convergence(self.stop_on_convergence)
            .rng(rng);

        let mut logger = Logger::new(booster, self.learner.learner())
            .test_sample(test)
            .print_every(self.print_every);
        if let Some(path) = self.log_file.as_ref() {
            logger = logger.log_file(run_log_path(path, r));
        }

        let f = logger.run()?;
        f.test(test)
    }
}


// `out/adaboost.csv` becomes `out/adaboost_<r>.csv`.
fn run_log_path(path: &Path, r: usize) -> PathBuf {
    let stem = path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{stem}_{r}.csv"))
}
