/// Read access to a labeled table of numeric examples.
///
/// Every example has `n_attributes()` conditional attribute values
/// and one class label in `[0, n_classes())`.
/// The boosting core only reads a dataset through this trait.
pub trait Dataset {
    /// Number of examples.
    fn n_examples(&self) -> usize;

    /// Number of conditional attributes (the class is not counted).
    fn n_attributes(&self) -> usize;

    /// Number of class labels.
    fn n_classes(&self) -> usize;

    /// Value of attribute `attr` of example `row`.
    fn attribute_value(&self, row: usize, attr: usize) -> f64;

    /// Class label of example `row`.
    fn class_label(&self, row: usize) -> usize;


    /// Returns the pair `(n_examples, n_attributes)`.
    fn shape(&self) -> (usize, usize) {
        (self.n_examples(), self.n_attributes())
    }


    /// Returns the attribute values of example `row`.
    fn example(&self, row: usize) -> Vec<f64> {
        (0..self.n_attributes())
            .map(|attr| self.attribute_value(row, attr))
            .collect()
    }
}
