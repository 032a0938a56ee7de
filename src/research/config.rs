//! Run configuration read from a JSON file.
use serde::{Serialize, Deserialize};

use crate::{
    BoostError,
    LearnerKind,
    Result,
    Sample,
    SampleReader,
    common::checker,
};
use crate::constants::{
    DEFAULT_REPEAT,
    DEFAULT_ROUNDS,
    DEFAULT_SEED,
    DEFAULT_TRAIN_FRACTION,
};
use super::experiment::Scheme;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};


/// The way a trained ensemble is evaluated.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default,
    Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SchemeKind {
    /// Split the sample into a training part and a testing part.
    #[default]
    SplitInTwo,
    /// Test on the training sample.
    TrainingSet,
    /// Test on a separate testing sample.
    TestingSet,
}


/// Settings of a boosting experiment.
///
/// ```json
/// {
///     "train": "iris.csv",
///     "scheme": "split-in-two",
///     "train_fraction": 0.6,
///     "rounds": 50,
///     "learner": "gaussian",
///     "repeat": 5
/// }
/// ```
/// Every field except `train` is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Training sample (CSV or ARFF).
    pub train: PathBuf,
    /// Testing sample, used by [`SchemeKind::TestingSet`].
    pub test: Option<PathBuf>,
    /// Name of the label column. The last column by default.
    pub target: Option<String>,
    /// Whether CSV files start with a header line.
    pub has_header: bool,
    /// Evaluation scheme.
    pub scheme: SchemeKind,
    /// Fraction of the training part for [`SchemeKind::SplitInTwo`].
    pub train_fraction: f64,
    /// Maximum number of boosting rounds.
    pub rounds: usize,
    /// Weak learner.
    pub learner: LearnerKind,
    /// Stop once the ensemble fits the training sample.
    pub stop_on_convergence: bool,
    /// Number of independent runs.
    pub repeat: usize,
    /// Seed of the first run. Run `r` uses `seed + r`.
    pub seed: u64,
    /// Print the round statistics every `print_every` rounds.
    pub print_every: Option<usize>,
    /// Write the round statistics of each run to CSV files
    /// named after this path.
    pub log_file: Option<PathBuf>,
}


impl Default for RunConfig {
    fn default() -> Self {
        Self {
            train: PathBuf::new(),
            test: None,
            target: None,
            has_header: true,
            scheme: SchemeKind::default(),
            train_fraction: DEFAULT_TRAIN_FRACTION,
            rounds: DEFAULT_ROUNDS,
            learner: LearnerKind::default(),
            stop_on_convergence: false,
            repeat: DEFAULT_REPEAT,
            seed: DEFAULT_SEED,
            print_every: None,
            log_file: None,
        }
    }
}


impl RunConfig {
    /// Reads a configuration from the JSON file `path`
    /// and validates it.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }


    /// Parses a configuration from a JSON string and validates it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }


    /// Checks the values of `self`.
    pub fn validate(&self) -> Result<()> {
        if self.train.as_os_str().is_empty() {
            return Err(BoostError::invalid("train", "no training file"));
        }
        checker::check_rounds(self.rounds)?;
        if self.repeat == 0 {
            return Err(BoostError::invalid("repeat", "must be positive"));
        }
        if self.print_every == Some(0) {
            return Err(BoostError::invalid("print_every", "must be positive"));
        }
        match self.scheme {
            SchemeKind::SplitInTwo => {
                checker::check_fraction(self.train_fraction)?;
            },
            SchemeKind::TestingSet if self.test.is_none() => {
                return Err(BoostError::invalid(
                    "test",
                    "the testing-set scheme needs a testing file",
                ));
            },
            _ => {},
        }
        Ok(())
    }


    /// Returns the evaluation scheme of `self`.
    pub fn scheme(&self) -> Scheme {
        match self.scheme {
            SchemeKind::SplitInTwo => Scheme::SplitInTwo {
                fraction: self.train_fraction,
            },
            SchemeKind::TrainingSet => Scheme::TrainingSet,
            SchemeKind::TestingSet => Scheme::TestingSet,
        }
    }


    /// Reads the training sample and, if any, the testing sample.
    /// Both samples share the class names of the training sample.
    pub fn read_samples(&self) -> Result<(Sample, Option<Sample>)> {
        let train = self.reader(&self.train, None).read()?;
        let test = match self.test.as_ref() {
            Some(path) => {
                let names = train.class_names().to_vec();
                Some(self.reader(path, Some(&names[..])).read()?)
            },
            None => None,
        };
        Ok((train, test))
    }


    fn reader<'p>(&self, path: &'p Path, class_names: Option<&[String]>)
        -> SampleReader<&'p Path>
    {
        let mut reader = SampleReader::default()
            .file(path)
            .has_header(self.has_header);
        if let Some(target) = self.target.as_ref() {
            reader = reader.target_feature(target);
        }
        if let Some(names) = class_names {
            reader = reader.class_names(names);
        }
        reader
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let config = RunConfig::from_json_str(r#"{ "train": "a.csv" }"#)
            .unwrap();
        assert_eq!(config.rounds, 100);
        assert_eq!(config.repeat, 5);
        assert_eq!(config.seed, 1234);
        assert_eq!(config.scheme, SchemeKind::SplitInTwo);
        assert_eq!(config.learner, LearnerKind::Stump);
        assert!(config.has_header);
    }

    #[test]
    fn kebab_case_names() {
        let json = r#"{
            "train": "a.csv",
            "test": "b.csv",
            "scheme": "testing-set",
            "learner": "gaussian"
        }"#;
        let config = RunConfig::from_json_str(json).unwrap();
        assert_eq!(config.scheme(), Scheme::TestingSet);
        assert_eq!(config.learner, LearnerKind::Gaussian);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(RunConfig::from_json_str(r#"{}"#).is_err());
        assert!(
            RunConfig::from_json_str(r#"{ "train": "a", "rounds": 0 }"#)
                .is_err()
        );
        assert!(
            RunConfig::from_json_str(
                r#"{ "train": "a", "train_fraction": 1.5 }"#
            ).is_err()
        );
        assert!(
            RunConfig::from_json_str(
                r#"{ "train": "a", "scheme": "testing-set" }"#
            ).is_err()
        );
        assert!(
            RunConfig::from_json_str(r#"{ "train": "a", "bogus": 1 }"#)
                .is_err()
        );
    }
}
