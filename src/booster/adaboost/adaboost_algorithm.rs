//! Provides [`AdaBoost`] by Freund & Schapire, 1995,
//! in its multiclass form with hard weak-hypothesis votes.
use fixedbitset::FixedBitSet;
use rand::prelude::*;


use crate::{
    Booster,
    Classifier,
    Dataset,
    LearnerKind,
    Result,
    Sample,
    SimpleClassifier,
    WeakLearner,
    WeightedMajority,
    WeightedSample,

    common::{checker, utils},
    research::CurrentHypothesis,
};
use crate::constants::{
    CONVERGENCE_ACCURACY,
    DEFAULT_ROUNDS,
    DEFAULT_SEED,
    MIN_WEIGHTED_ERROR,
};
use super::report::RoundReport;

use std::ops::ControlFlow;


/// Defines `AdaBoost`.
/// This struct is based on the book:
/// [Boosting: Foundations and Algorithms](https://direct.mit.edu/books/oa-monograph/5342/BoostingFoundations-and-Algorithms)
/// by Robert E. Schapire and Yoav Freund.
///
/// In round `t`, `AdaBoost`
/// 1. reweights the sample by the correctness of the hypothesis of round
///    `t - 1` (skipped in the first round),
/// 2. asks the weak learner for a hypothesis `h` on the current weights,
/// 3. assigns `h` the confidence weight `0.5 * ln((1 - e) / e)`,
///    where `e` is the weighted error of `h`, floored at `1e-6`.
///
/// The rounds stop after [`AdaBoost::max_rounds`] rounds,
/// or, if [`AdaBoost::stop_on_convergence`] is set,
/// as soon as the unweighted training accuracy of the ensemble
/// exceeds `0.999999` in round 2 or later.
///
/// # Example
/// The following code shows a small example
/// for running [`AdaBoost`].
/// See also:
/// - [`DecisionStump`]
/// - [`WeightedMajority<H>`]
/// - [`Sample`]
///
/// [`DecisionStump`]: crate::weak_learner::DecisionStump
/// [`WeightedMajority<H>`]: crate::hypothesis::WeightedMajority
///
///
/// ```no_run
/// use weakboost::prelude::*;
///
/// // Read the training sample from the CSV file.
/// // We use the column named `class` as the label.
/// let path_to_csv_file = "/path/to/train.csv";
/// let sample = SampleReader::default()
///     .file(path_to_csv_file)
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// // Initialize `AdaBoost` with at most 50 rounds.
/// let mut booster = AdaBoost::init(&sample)
///     .unwrap()
///     .max_rounds(50)
///     .stop_on_convergence(true)
///     .seed(7);
///
/// // Run `AdaBoost` with decision stumps
/// // and obtain the resulting hypothesis `f`.
/// let weak_learner = DecisionStump::init();
/// let f = booster.run(&weak_learner).unwrap();
///
/// for report in booster.history() {
///     println!("{report}");
/// }
///
/// let accuracy = f.test(&sample).unwrap();
/// println!("Training accuracy is: {accuracy}");
/// ```
pub struct AdaBoost<'a, H, D: ?Sized = Sample> {
    // Training sample
    sample: &'a D,

    // Distribution on sample.
    weighted: WeightedSample<'a, D>,

    // Random source handed to the weak learner.
    rng: StdRng,


    max_rounds: usize,
    stop_on_convergence: bool,


    // Weights on hypotheses in `hypotheses`
    weights: Vec<f64>,

    // Hypohteses obtained by the weak-learner.
    hypotheses: Vec<H>,


    // Correctness and weighted error of the last hypothesis,
    // consumed by the reweighting of the next round.
    previous: Option<(FixedBitSet, f64)>,

    // `votes[i][k]` is the total confidence weight
    // of the hypotheses predicting `k` on the `i`th example.
    votes: Vec<Vec<f64>>,

    reports: Vec<RoundReport>,


    // Terminated iteration.
    terminated: usize,
}


impl<'a, H, D> AdaBoost<'a, H, D>
    where D: Dataset + ?Sized,
{
    /// Initialize the `AdaBoost`.
    /// Fails if `sample` has no examples or no attributes.
    pub fn init(sample: &'a D) -> Result<Self> {
        let weighted = WeightedSample::new(sample)?;

        Ok(Self {
            sample,
            weighted,
            rng: StdRng::seed_from_u64(DEFAULT_SEED),

            max_rounds: DEFAULT_ROUNDS,
            stop_on_convergence: false,

            weights: Vec::new(),
            hypotheses: Vec::new(),

            previous: None,
            votes: Vec::new(),
            reports: Vec::new(),

            terminated: usize::MAX,
        })
    }


    /// Set the maximum number of rounds.
    /// `AdaBoost` fails at `run` if `rounds == 0`.
    pub fn max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = rounds;
        self
    }


    /// Stop as soon as the ensemble classifies
    /// every training example correctly.
    pub fn stop_on_convergence(mut self, flag: bool) -> Self {
        self.stop_on_convergence = flag;
        self
    }


    /// Seed the random source of the weak learner.
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }


    /// Set the random source of the weak learner.
    pub fn rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }


    /// Returns the current distribution over the training examples.
    pub fn weighted_sample(&self) -> &WeightedSample<'a, D> {
        &self.weighted
    }


    /// Returns the statistics of every round so far.
    pub fn history(&self) -> &[RoundReport] {
        &self.reports[..]
    }


    /// Weighted error of the hypothesis of each round.
    pub fn per_round_weighted_error(&self) -> Vec<f64> {
        self.reports.iter()
            .map(|report| report.weighted_error)
            .collect()
    }


    /// Confidence weight of the hypothesis of each round.
    pub fn per_round_confidence_weight(&self) -> Vec<f64> {
        self.weights.clone()
    }


    /// Returns the iteration at which `AdaBoost` stopped.
    /// `None` if `AdaBoost` has not finished yet.
    pub fn terminated(&self) -> Option<usize> {
        (self.terminated != usize::MAX).then_some(self.terminated)
    }


    /// Unweighted training accuracy of the current ensemble.
    /// `0.0` before the first round.
    pub fn training_accuracy(&self) -> f64 {
        self.reports.last()
            .map(|report| report.ensemble_accuracy)
            .unwrap_or(0f64)
    }


    // Adds the vote of a new hypothesis and returns
    // the training accuracy of the ensemble.
    fn add_votes(&mut self, predictions: &[usize], weight: f64) -> f64 {
        let mut n_correct = 0_usize;
        self.votes.iter_mut()
            .zip(predictions)
            .enumerate()
            .for_each(|(i, (votes, &p))| {
                votes[p] += weight;
                let label = utils::first_argmax(votes.iter().copied());
                if label == self.sample.class_label(i) {
                    n_correct += 1;
                }
            });
        n_correct as f64 / predictions.len() as f64
    }
}


impl<'a, D> AdaBoost<'a, SimpleClassifier, D>
    where D: Dataset + ?Sized,
{
    /// Trains an ensemble of weak learners of the given `kind`.
    /// This is a shorthand of `self.run(&kind.learner())`.
    pub fn run_with(&mut self, kind: LearnerKind)
        -> Result<WeightedMajority<SimpleClassifier>>
    {
        let weak_learner = kind.learner();
        self.run(&weak_learner)
    }
}


impl<H, D> Booster<H> for AdaBoost<'_, H, D>
    where H: Classifier + Clone,
          D: Dataset + ?Sized,
{
    type Output = WeightedMajority<H>;


    fn name(&self) -> &str {
        "AdaBoost"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let (n_sample, n_feature) = self.sample.shape();
        let info = Vec::from([
            ("# of examples", format!("{n_sample}")),
            ("# of features", format!("{n_feature}")),
            ("# of classes", format!("{}", self.sample.n_classes())),
            ("Max rounds", format!("{}", self.max_rounds)),
            ("Stop on convergence", format!("{}", self.stop_on_convergence)),
        ]);
        Some(info)
    }


    fn preprocess(&mut self) -> Result<()> {
        checker::check_rounds(self.max_rounds)?;

        // Initialize parameters
        let n_sample = self.sample.n_examples();
        let n_classes = self.sample.n_classes();
        self.weighted = WeightedSample::new(self.sample)?;

        self.weights = Vec::new();
        self.hypotheses = Vec::new();
        self.previous = None;
        self.votes = vec![vec![0f64; n_classes]; n_sample];
        self.reports = Vec::new();
        self.terminated = usize::MAX;

        Ok(())
    }


    fn boost<W>(
        &mut self,
        weak_learner: &W,
        iteration: usize,
    ) -> Result<ControlFlow<usize>>
        where W: WeakLearner<Hypothesis = H>,
    {
        if self.max_rounds < iteration {
            self.terminated = self.max_rounds;
            return Ok(ControlFlow::Break(self.max_rounds));
        }


        // Reweight by the hypothesis of the previous round.
        if let Some((correctness, error)) = self.previous.take() {
            self.weighted.adjust_weights(&correctness, error)?;
        }


        // Get a new hypothesis
        let h = weak_learner.produce(&self.weighted, &mut self.rng);

        let n_sample = self.sample.n_examples();
        let predictions = (0..n_sample)
            .map(|i| h.predict_row(self.sample, i))
            .collect::<Vec<_>>();
        let mut correctness = FixedBitSet::with_capacity(n_sample);
        predictions.iter()
            .enumerate()
            .for_each(|(i, &p)| {
                if p == self.sample.class_label(i) { correctness.put(i); }
            });


        let weighted_error = self.weighted.weighted_error(&correctness)
            .max(MIN_WEIGHTED_ERROR);
        let confidence = utils::confidence_weight(
            checker::check_weighted_error(weighted_error)?
        );


        let weak_accuracy = correctness.count_ones(..) as f64
            / n_sample as f64;
        let ensemble_accuracy = self.add_votes(&predictions, confidence);

        self.weights.push(confidence);
        self.hypotheses.push(h);
        self.reports.push(RoundReport {
            round: iteration - 1,
            weighted_error,
            confidence,
            weak_accuracy,
            ensemble_accuracy,
        });
        self.previous = Some((correctness, weighted_error));


        // The first round always trains the next one.
        if self.stop_on_convergence
            && iteration > 1
            && ensemble_accuracy > CONVERGENCE_ACCURACY
        {
            self.terminated = iteration;
            return Ok(ControlFlow::Break(iteration));
        }

        Ok(ControlFlow::Continue(()))
    }


    fn postprocess(&mut self) -> Result<Self::Output> {
        Ok(self.current_hypothesis())
    }
}


impl<H, D> CurrentHypothesis for AdaBoost<'_, H, D>
    where H: Classifier + Clone,
          D: Dataset + ?Sized,
{
    type Output = WeightedMajority<H>;


    fn current_hypothesis(&self) -> Self::Output {
        let mut f = WeightedMajority::new(
            self.sample.n_classes(),
            self.sample.n_attributes(),
        );
        self.weights.iter()
            .zip(&self.hypotheses[..])
            .for_each(|(w, h)| { f.push(*w, h.clone()); });
        f
    }


    fn last_report(&self) -> Option<&RoundReport> {
        self.reports.last()
    }
}
