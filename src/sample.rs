//! Struct `Sample` represents a batch sample,
//! and `WeightedSample` a distribution over it.

// Provides the read-only dataset contract.
pub(crate) mod dataset;
// Provides feature struct.
pub(crate) mod feature;
// Provides sample struct.
pub(crate) mod sample_struct;
// Provides a struct that reads a file.
pub(crate) mod sample_reader;
// Provides the weighted view used by boosting.
pub(crate) mod weighted_sample;


pub use dataset::Dataset;
pub use feature::Feature;
pub use sample_reader::SampleReader;
pub use sample_struct::Sample;
pub use weighted_sample::WeightedSample;
