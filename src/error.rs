//! Error type of this crate.
use std::path::PathBuf;

/// Result type alias used throughout `weakboost`.
pub type Result<T> = std::result::Result<T, BoostError>;

/// Errors reported before or during a boosting run.
#[derive(Debug, thiserror::Error)]
pub enum BoostError {
    /// The sample has no examples.
    #[error("The sample has no examples")]
    EmptySample,

    /// The sample has no conditional attribute.
    #[error("The sample has no conditional attribute")]
    NoAttribute,

    /// A feature column does not have one value per example.
    #[error("Feature `{name}` has {got} values, expected {expected}")]
    RaggedFeature {
        /// Feature name.
        name: String,
        /// Number of examples.
        expected: usize,
        /// Number of values of the feature.
        got: usize,
    },

    /// A feature value is `NaN` or infinite.
    #[error("Feature `{name}` has a non-finite value at row {row}")]
    NonFiniteValue {
        /// Feature name.
        name: String,
        /// Row of the value.
        row: usize,
    },

    /// A class label is not in `[0, n_classes)`.
    #[error("Label {label} at row {row} is out of range [0, {n_classes})")]
    LabelOutOfRange {
        /// Row of the label.
        row: usize,
        /// The label.
        label: usize,
        /// Number of classes.
        n_classes: usize,
    },

    /// Two sequences that must be parallel have different lengths.
    #[error("Length mismatch: expected {expected}, got {got}")]
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// A sample does not have the attribute count a model was trained on.
    #[error("Attribute mismatch: trained on {expected} attributes, got {got}")]
    AttributeMismatch {
        /// Attributes of the training sample.
        expected: usize,
        /// Attributes of the given sample.
        got: usize,
    },

    /// The weighted error is not a probability mass.
    #[error("Weighted error must be in [0, 1], got {0}")]
    InvalidWeightedError(f64),

    /// A configuration value is out of its domain.
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// What is wrong with the value.
        reason: String,
    },

    /// The file extension is not supported by `SampleReader`.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(PathBuf),

    /// A data file could not be parsed.
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number, `0` if not tied to a line.
        line: usize,
        /// Description of the problem.
        message: String,
    },

    /// Reading a file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON document could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A `polars` operation failed.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}


impl BoostError {
    pub(crate) fn invalid<S: ToString>(name: &'static str, reason: S) -> Self {
        Self::InvalidParameter { name, reason: reason.to_string() }
    }


    pub(crate) fn parse<S: ToString>(line: usize, message: S) -> Self {
        Self::Parse { line, message: message.to_string() }
    }
}
