//! weakboost CLI: repeated AdaBoost runs on a CSV or ARFF sample.

use clap::Parser;
use colored::Colorize;

use weakboost::{
    Experiment,
    LearnerKind,
    RunConfig,
    SchemeKind,
};

use std::path::PathBuf;
use std::process;

const FULL_WIDTH: usize = 60;


#[derive(Parser)]
#[command(name = "weakboost")]
#[command(about = "AdaBoost over decision stumps or Gaussian naive Bayes")]
#[command(version)]
struct Cli {
    /// JSON configuration file. Overrides every other option.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Training sample (CSV or ARFF)
    #[arg(required_unless_present = "config")]
    train: Option<PathBuf>,

    /// Testing sample, used by the testing-set scheme
    #[arg(long)]
    test: Option<PathBuf>,

    /// Name of the label column (the last column by default)
    #[arg(long)]
    target: Option<String>,

    /// The CSV files have no header line
    #[arg(long)]
    no_header: bool,

    /// Evaluation scheme
    #[arg(short, long, value_enum, default_value_t = SchemeKind::SplitInTwo)]
    scheme: SchemeKind,

    /// Fraction of the training part for the split-in-two scheme
    #[arg(long, default_value_t = 0.6)]
    train_fraction: f64,

    /// Maximum number of boosting rounds
    #[arg(short, long, default_value_t = 100)]
    rounds: usize,

    /// Weak learner
    #[arg(short, long, value_enum, default_value_t = LearnerKind::Stump)]
    learner: LearnerKind,

    /// Stop once the ensemble fits the training sample
    #[arg(long)]
    stop_on_convergence: bool,

    /// Number of independent runs
    #[arg(long, default_value_t = 5)]
    repeat: usize,

    /// Seed of the first run
    #[arg(long, default_value_t = 1234)]
    seed: u64,

    /// Print the round statistics every N rounds
    #[arg(long)]
    print_every: Option<usize>,

    /// Write the round statistics of each run to CSV files
    #[arg(long)]
    log_file: Option<PathBuf>,
}


impl Cli {
    fn into_config(self) -> weakboost::Result<RunConfig> {
        if let Some(path) = self.config {
            return RunConfig::from_json_file(path);
        }

        let config = RunConfig {
            train: self.train.unwrap_or_default(),
            test: self.test,
            target: self.target,
            has_header: !self.no_header,
            scheme: self.scheme,
            train_fraction: self.train_fraction,
            rounds: self.rounds,
            learner: self.learner,
            stop_on_convergence: self.stop_on_convergence,
            repeat: self.repeat,
            seed: self.seed,
            print_every: self.print_every,
            log_file: self.log_file,
        };
        config.validate()?;
        Ok(config)
    }
}


fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {e}", "Error:".bold().red());
        process::exit(1);
    }
}


fn run(cli: Cli) -> weakboost::Result<()> {
    let config = cli.into_config()?;
    let (train, test) = config.read_samples()?;

    let mut experiment = Experiment::new(&train)
        .with_config(&config)
        .verbose(true);
    if let Some(test) = test.as_ref() {
        experiment = experiment.test_sample(test);
    }

    println!(
        "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
        "", "WEAKBOOST".bold(), "",
    );
    println!(
        "+ {:<20}\t{:>20}",
        "Train".bold(),
        config.train.display().to_string().green(),
    );
    println!("+ {:<20}\t{:>20}", "Learner".bold(), config.learner.to_string().green());
    println!("+ {:<20}\t{:>20}", "Rounds".bold(), config.rounds.to_string().green());
    println!("+ {:<20}\t{:>20}\n", "Runs".bold(), config.repeat.to_string().green());

    let summary = experiment.run()?;

    println!(
        "\n{}\n+ {:<20}\t{:>20}\n+ {:<20}\t{:>20}\n+ {:<20}\t{:>20}\n{:=>FULL_WIDTH$}",
        "ACCURACY".bold(),
        "Min".bold(), format!("{:.5}", summary.min).bold().yellow(),
        "Max".bold(), format!("{:.5}", summary.max).bold().yellow(),
        "Mean".bold(), format!("{:.5}", summary.mean).bold().yellow(),
        "",
    );
    Ok(())
}
