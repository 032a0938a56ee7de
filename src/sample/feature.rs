use std::ops::Index;
use std::mem;

use crate::constants::BUFFER_SIZE;


/// A named column of numeric attribute values.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// Feature name
    pub(crate) name: String,
    /// Feature values.
    pub(crate) vals: Vec<f64>,
}


impl Feature {
    /// Construct an empty feature named `name`.
    pub fn new<T: ToString>(name: T) -> Self {
        Self {
            name: name.to_string(),
            vals: Vec::with_capacity(BUFFER_SIZE),
        }
    }


    /// Construct a feature from its values.
    pub fn from_vals<T: ToString>(name: T, vals: Vec<f64>) -> Self {
        Self { name: name.to_string(), vals, }
    }


    /// Get the feature name.
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Returns the values as a slice.
    pub fn vals(&self) -> &[f64] {
        &self.vals[..]
    }


    pub(crate) fn append(&mut self, x: f64) {
        self.vals.push(x);
    }


    pub(crate) fn replace_name<T: ToString>(&mut self, name: T) -> String {
        mem::replace(&mut self.name, name.to_string())
    }


    /// Returns the number of items in this feature.
    pub fn len(&self) -> usize {
        self.vals.len()
    }


    /// Returns `true` if this feature has no value.
    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }


    /// Returns the feature restricted to `indices`.
    pub(crate) fn subset(&self, indices: &[usize]) -> Self {
        let vals = indices.iter()
            .map(|&i| self.vals[i])
            .collect();
        Self { name: self.name.clone(), vals, }
    }


    /// Returns the position of the first non-finite value.
    pub(crate) fn first_non_finite(&self) -> Option<usize> {
        self.vals.iter().position(|x| !x.is_finite())
    }
}


impl Index<usize> for Feature {
    type Output = f64;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.vals[idx]
    }
}
