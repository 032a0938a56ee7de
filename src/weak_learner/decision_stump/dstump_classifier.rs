//! Provides the decision stump classifier.
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::{
    Classifier,
    Dataset,
};


/// The struct `StumpClassifier` defines the decision stump class.
/// Given an example `x`, a stump predicts
/// `left_label` if `x[feature_index] < threshold`,
/// and `right_label` otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StumpClassifier {
    /// The index of the feature used in prediction.
    pub feature_index: usize,

    /// The cut value of the stump.
    pub threshold: f64,

    /// The label predicted below the threshold.
    pub left_label: usize,

    /// The label predicted at or above the threshold.
    pub right_label: usize,

    pub(super) n_classes: usize,
}


impl StumpClassifier {
    /// Returns `true` if the stump predicts the same label everywhere.
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.left_label == self.right_label
    }


    #[inline(always)]
    fn label_of(&self, value: f64) -> usize {
        if value < self.threshold { self.left_label } else { self.right_label }
    }
}


impl Classifier for StumpClassifier {
    fn n_classes(&self) -> usize {
        self.n_classes
    }


    fn predict(&self, example: &[f64]) -> usize {
        self.label_of(example[self.feature_index])
    }


    fn predict_row<D>(&self, data: &D, row: usize) -> usize
        where D: Dataset + ?Sized,
    {
        self.label_of(data.attribute_value(row, self.feature_index))
    }
}


impl fmt::Display for StumpClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stump [feat. {}] x < {} => {}, otherwise {}",
            self.feature_index,
            self.threshold,
            self.left_label,
            self.right_label,
        )
    }
}
