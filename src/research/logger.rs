use colored::Colorize;

use crate::{
    Booster,
    Classifier,
    Dataset,
    Result,
    RoundReport,
    Sample,
    WeakLearner,
};

use std::fs::File;
use std::io::prelude::*;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

const DEFAULT_ROUND: usize = 100;
const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;
const HEADER: &str = "Round,WeightedError,Confidence,\
                      WeakAccuracy,TrainAccuracy,TestAccuracy,Time\n";


/// Implementing this trait allows you to use [`Logger`] to
/// log algorithm's behavor.
pub trait CurrentHypothesis {
    /// The combined hypothesis at the current state.
    type Output;

    /// Returns the combined hypothesis at current state.
    fn current_hypothesis(&self) -> Self::Output;

    /// Returns the statistics of the last round, if any.
    fn last_report(&self) -> Option<&RoundReport>;
}


/// Struct `Logger` runs a boosting algorithm
/// and reports the weighted error, the confidence weight,
/// the train/test accuracy, and the running time
/// of each round.
///
/// The report goes to the standard output
/// every [`Logger::print_every`] rounds,
/// and to a CSV file for every round if [`Logger::log_file`] is set.
///
/// ```no_run
/// use weakboost::prelude::*;
/// use weakboost::research::Logger;
///
/// let train = Sample::from_rows(&[[0.0], [1.0]], &[0, 1], 2).unwrap();
/// let booster = AdaBoost::init(&train).unwrap().max_rounds(10);
/// let f = Logger::new(booster, DecisionStump::init())
///     .test_sample(&train)
///     .print_every(1)
///     .log_file("adaboost.csv")
///     .run()
///     .unwrap();
/// ```
pub struct Logger<'a, B, W, D: ?Sized = Sample> {
    booster: B,
    weak_learner: W,
    test: Option<&'a D>,
    round: usize,
    log_file: Option<PathBuf>,
}


impl<'a, B, W, D> Logger<'a, B, W, D>
    where D: ?Sized,
{
    /// Create a new instance of `Logger`.
    pub fn new(booster: B, weak_learner: W) -> Self {
        Self {
            booster,
            weak_learner,
            test: None,
            round: DEFAULT_ROUND,
            log_file: None,
        }
    }


    /// Set the test sample.
    /// The test accuracy is reported only if a test sample is set.
    pub fn test_sample(mut self, test: &'a D) -> Self {
        self.test = Some(test);
        self
    }


    /// Set the interval to print the current status.
    /// By default, the method `run` prints its status every `100` rounds.
    /// If you don't want to print the log,
    /// set `usize::MAX` (or `0`).
    #[inline(always)]
    pub fn print_every(mut self, round: usize) -> Self {
        self.round = round;
        self
    }


    /// Write the statistics of every round to `path` as CSV.
    pub fn log_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.log_file = Some(path.as_ref().to_path_buf());
        self
    }


    /// Returns the boosting algorithm.
    pub fn booster(&self) -> &B {
        &self.booster
    }


    /// Consumes `self` and returns the boosting algorithm.
    pub fn into_booster(self) -> B {
        self.booster
    }


    #[inline(always)]
    fn is_silent(&self) -> bool {
        self.round == 0 || self.round == usize::MAX
    }
}


impl<H, B, W, D, O, S> Logger<'_, B, W, D>
    where B: Booster<H, Output = O> + CurrentHypothesis<Output = S>,
          S: Classifier,
          W: WeakLearner<Hypothesis = H>,
          D: Dataset + ?Sized,
{
    #[inline(always)]
    fn print_log_header(&self) {
        println!(
            "      {:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "".bold().red(),
            "WEIGHTED".bold().blue(),
            "CONF.".bold().purple(),
            "TRAIN".bold().green(),
            "TEST".bold().yellow(),
            "ACC.".bold().cyan(),
        );
        println!(
            "      {:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\n",
            "ROUND".bold().red(),
            "ERROR".bold().blue(),
            "WEIGHT".bold().purple(),
            "ACC.".bold().green(),
            "ACC.".bold().yellow(),
            "TIME".bold().cyan(),
        );
    }


    /// print current settings.
    #[inline(always)]
    fn print_stats(&self) {
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        println!(
            "\n{header}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Booster".bold(),
            self.booster.name().bold().green(),
        );
        if let Some(info) = self.booster.info() {
            println!("{}", info_lines(info));
        }

        println!(
            "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Weak Learner".bold(),
            self.weak_learner.name().bold().green(),
        );
        if let Some(info) = self.weak_learner.info() {
            println!("{}", info_lines(info));
        }

        let test = match self.test {
            Some(test) => format!("{} examples", test.n_examples()),
            None => "Nothing".into(),
        };
        println!(
            "\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            {:=^FULL_WIDTH$}\n\
            ",
            "Test Sample".bold(),
            test.bold().green(),
            "".bold(),
        );
    }


    #[inline(always)]
    fn print_round(
        &self,
        tag: colored::ColoredString,
        report: &RoundReport,
        test: f64,
        time_acc: u128,
    )
    {
        println!(
            "{} {}\t{}\t{}\t{}\t{}\t{}",
            tag,
            format!("{:>WIDTH$}", report.round + 1).red(),
            format!("{:>WIDTH$.PREC_WIDTH$}", report.weighted_error).blue(),
            format!("{:>WIDTH$.PREC_WIDTH$}", report.confidence).purple(),
            format!("{:>WIDTH$.PREC_WIDTH$}", report.ensemble_accuracy)
                .green(),
            format!("{:>WIDTH$.PREC_WIDTH$}", test).yellow(),
            time_format(time_acc).bold().cyan(),
        );
    }


    /// Run the given boosting algorithm with logging.
    /// Note that this method is almost the same as `Booster::run`.
    /// This method measures running time per iteration.
    pub fn run(&mut self) -> Result<O> {
        let mut file = match self.log_file.as_ref() {
            Some(path) => {
                let mut file = BufWriter::new(File::create(path)?);
                file.write_all(HEADER.as_bytes())?;
                Some(file)
            },
            None => None,
        };

        // ---------------------------------------------------------------------
        // Pre-processing
        self.booster.preprocess()?;
        if !self.is_silent() {
            self.print_stats();
            self.print_log_header();
        }


        // Cumulative time
        let mut time_acc = 0;

        // Statistics of the latest round with a new hypothesis.
        let mut last: Option<(RoundReport, f64)> = None;

        // ---------------------------------------------------------------------
        // Boosting step
        for iter in 1.. {
            // Start measuring time
            let now = Instant::now();

            let flow = self.booster.boost(&self.weak_learner, iter)?;

            // Stop measuring and convert `Duration` to Milliseconds.
            let time = now.elapsed().as_millis();

            // Update the cumulative time
            time_acc += time;

            // `boost` returns `Break` without a new hypothesis
            // once the round limit is exceeded.
            let fresh = self.booster.last_report()
                .filter(|report| report.round + 1 == iter)
                .copied();

            if let Some(report) = fresh {
                let test = match self.test {
                    Some(test) => {
                        self.booster.current_hypothesis().accuracy(test)
                    },
                    None => f64::NAN,
                };

                if let Some(file) = file.as_mut() {
                    let test = if test.is_nan() {
                        String::new()
                    } else {
                        test.to_string()
                    };
                    let line = format!(
                        "{},{},{},{},{},{test},{time_acc}\n",
                        report.round + 1,
                        report.weighted_error,
                        report.confidence,
                        report.weak_accuracy,
                        report.ensemble_accuracy,
                    );
                    file.write_all(line.as_bytes())?;
                }

                if !self.is_silent() && iter % self.round == 0 {
                    self.print_round(
                        "[LOG]".bold().magenta(), &report, test, time_acc
                    );
                }
                last = Some((report, test));
            }

            if flow.is_break() {
                if let (false, Some((report, test))) = (self.is_silent(), last) {
                    self.print_round(
                        "[FIN]".bold().bright_green(), &report, test, time_acc
                    );
                    println!();
                }
                break;
            }
        }

        if let Some(mut file) = file {
            file.flush()?;
        }

        let f = self.booster.postprocess()?;
        Ok(f)
    }
}


fn info_lines(info: Vec<(&str, String)>) -> String {
    info.into_iter()
        .map(|(key, val)| {
            format!(
                "    + {:<STAT_WIDTH$}\t{:>width$}",
                key,
                val.bold().yellow(),
                width = STAT_WIDTH - 8
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}


pub(crate) fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }
    let min = sec / 60;
    let sec = sec % 60;
    if min < 60 {
        return format!(" {:0>2}m {:0>2}s", min, sec);
    }
    let hours = min / 60;
    let min = min % 60;
    format!(" {:0>2}h {:0>2}m", hours, min)
}
