use std::collections::HashMap;

use polars::prelude::*;
use rand::prelude::*;

use crate::{
    BoostError,
    Result,
    common::checker,
};
use super::dataset::Dataset;
use super::feature::Feature;


/// Struct `Sample` holds a batch sample with dense format.
/// Features are stored column by column;
/// `target[i]` is the class label of the `i`th example,
/// whose name is `class_names[target[i]]`.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) features: Vec<Feature>,
    pub(super) target: Vec<usize>,
    pub(super) class_names: Vec<String>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}


impl Sample {
    /// Construct a new `Sample` from feature columns and class labels.
    /// Every feature must have one finite value per label,
    /// and every label must index `class_names`.
    pub fn from_parts(
        features: Vec<Feature>,
        target: Vec<usize>,
        class_names: Vec<String>,
    ) -> Result<Self>
    {
        let n_sample = target.len();
        let n_feature = features.len();
        let n_classes = class_names.len();

        for feat in features.iter() {
            if feat.len() != n_sample {
                return Err(BoostError::RaggedFeature {
                    name: feat.name().to_string(),
                    expected: n_sample,
                    got: feat.len(),
                });
            }
            if let Some(row) = feat.first_non_finite() {
                return Err(BoostError::NonFiniteValue {
                    name: feat.name().to_string(),
                    row,
                });
            }
        }

        let out_of_range = target.iter()
            .copied()
            .enumerate()
            .find(|(_, y)| *y >= n_classes);
        if let Some((row, label)) = out_of_range {
            return Err(BoostError::LabelOutOfRange { row, label, n_classes });
        }

        let name_to_index = features.iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect::<HashMap<_, _>>();

        let sample = Self {
            name_to_index, features, target, class_names, n_sample, n_feature,
        };
        checker::check_sample(&sample)?;
        Ok(sample)
    }


    /// Construct a new `Sample` from row-major examples.
    /// Classes are named `"0"`, `"1"`, ..., `"{n_classes - 1}"`.
    pub fn from_rows<T>(rows: &[T], labels: &[usize], n_classes: usize)
        -> Result<Self>
        where T: AsRef<[f64]>,
    {
        checker::check_length(rows.len(), labels.len())?;

        let n_feature = rows.first()
            .map(|row| row.as_ref().len())
            .unwrap_or(0);
        let mut features = (1..=n_feature).map(|i| {
                let name = format!("Feat. [{i}]");
                Feature::new(name)
            })
            .collect::<Vec<_>>();

        for row in rows {
            let row = row.as_ref();
            checker::check_length(n_feature, row.len())?;
            for (feat, &x) in features.iter_mut().zip(row) {
                feat.append(x);
            }
        }

        let class_names = (0..n_classes).map(|c| c.to_string())
            .collect::<Vec<_>>();
        Self::from_parts(features, labels.to_vec(), class_names)
    }


    /// Convert `polars::DataFrame` and `polars::Series` into `Sample`.
    /// The target values must be non-negative integers;
    /// the number of classes is the largest label plus one.
    pub fn from_dataframe(data: &DataFrame, target: &Series)
        -> Result<Self>
    {
        let target_i64 = target.cast(&DataType::Int64)?;
        let target = target_i64.i64()?
            .into_iter()
            .enumerate()
            .map(|(row, y)| match y {
                Some(y) if y >= 0 => Ok(y as usize),
                _ => Err(BoostError::parse(
                    row + 1,
                    "target values must be non-negative integers",
                )),
            })
            .collect::<Result<Vec<_>>>()?;

        let features = data.get_columns()
            .iter()
            .map(|series| {
                let name = series.name().to_string();
                let casted = series.cast(&DataType::Float64)?;
                let vals = casted.f64()?
                    .into_iter()
                    .enumerate()
                    .map(|(row, x)| x.ok_or_else(|| {
                        BoostError::NonFiniteValue { name: name.clone(), row }
                    }))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Feature::from_vals(name, vals))
            })
            .collect::<Result<Vec<_>>>()?;

        let n_classes = target.iter().max().map_or(0, |y| y + 1);
        let class_names = (0..n_classes).map(|c| c.to_string())
            .collect::<Vec<_>>();
        Self::from_parts(features, target, class_names)
    }


    /// Returns a slice of class labels.
    pub fn target(&self) -> &[usize] {
        &self.target[..]
    }


    /// Returns a slice of type `Feature`.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Returns the class names. Label `c` is named `class_names()[c]`.
    pub fn class_names(&self) -> &[String] {
        &self.class_names[..]
    }


    /// Returns the feature named `name`, if exists.
    pub fn feature_by_name<S: AsRef<str>>(&self, name: S) -> Option<&Feature> {
        self.name_to_index.get(name.as_ref())
            .map(|&i| &self.features[i])
    }


    /// Set the feature (column) names.
    /// Returns the old names.
    pub fn replace_names<S>(&mut self, names: &[S]) -> Result<Vec<String>>
        where S: ToString,
    {
        checker::check_length(self.n_feature, names.len())?;

        let old_names = names.iter()
            .zip(&mut self.features[..])
            .map(|(name, feature)| feature.replace_name(name.to_string()))
            .collect();

        self.name_to_index = self.features.iter()
            .map(|feature| feature.name().to_string())
            .enumerate()
            .map(|(i, name)| (name, i))
            .collect();
        Ok(old_names)
    }


    /// Returns the `idx`-th instance `(x, y)`.
    pub fn at(&self, idx: usize) -> (Vec<f64>, usize) {
        let x = self.features.iter()
            .map(|feat| feat[idx])
            .collect::<Vec<f64>>();
        let y = self.target[idx];

        (x, y)
    }


    /// Returns the sub-sample consisting of the examples at `indices`,
    /// in the given order. The class names are kept.
    pub fn subset(&self, indices: &[usize]) -> Result<Self> {
        let features = self.features.iter()
            .map(|feat| feat.subset(indices))
            .collect::<Vec<_>>();
        let target = indices.iter()
            .map(|&i| self.target[i])
            .collect::<Vec<_>>();
        Self::from_parts(features, target, self.class_names.clone())
    }


    /// Randomly splits `self` into a training part and a testing part.
    /// The training part has `floor(n_sample * fraction)` examples.
    /// Both parts keep the original order of the examples.
    pub fn split_in_two<R>(&self, fraction: f64, rng: &mut R)
        -> Result<(Self, Self)>
        where R: Rng + ?Sized,
    {
        checker::check_fraction(fraction)?;
        let train_size = (self.n_sample as f64 * fraction) as usize;
        if train_size == 0 || train_size == self.n_sample {
            return Err(BoostError::invalid(
                "train_fraction",
                format!(
                    "{fraction} of {} examples leaves an empty part",
                    self.n_sample
                ),
            ));
        }

        let mut ix = (0..self.n_sample).collect::<Vec<_>>();
        ix.shuffle(rng);

        let (train_ix, test_ix) = ix.split_at_mut(train_size);
        train_ix.sort_unstable();
        test_ix.sort_unstable();

        let train = self.subset(train_ix)?;
        let test = self.subset(test_ix)?;
        Ok((train, test))
    }
}


impl Dataset for Sample {
    #[inline]
    fn n_examples(&self) -> usize {
        self.n_sample
    }


    #[inline]
    fn n_attributes(&self) -> usize {
        self.n_feature
    }


    #[inline]
    fn n_classes(&self) -> usize {
        self.class_names.len()
    }


    #[inline]
    fn attribute_value(&self, row: usize, attr: usize) -> f64 {
        self.features[attr][row]
    }


    #[inline]
    fn class_label(&self, row: usize) -> usize {
        self.target[row]
    }
}
