// datasets/traits.rs

use crate::error::RebalanceError;

/// Trait representing a dataset.
///
/// A dataset provides access to individual data samples (e.g., input features
/// and corresponding target labels) via an index.
///
/// `Item` is the type returned by accessing a single sample. It's often a tuple
/// like `(features, label)`.
pub trait Dataset {
    /// The type of a single item returned by the dataset.
    type Item;

    /// Returns the data sample at the given index.
    ///
    /// # Errors
    ///
    /// Returns `RebalanceError::IndexOutOfBounds` if the index is out of bounds.
    fn get(&self, index: usize) -> Result<Self::Item, RebalanceError>;

    /// Returns the total number of samples in the dataset.
    fn len(&self) -> usize;

    /// Returns true if the dataset contains no samples.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A dataset whose samples carry a class label.
///
/// This is the capability the balanced sampler falls back on when neither
/// explicit labels nor a label callback are supplied: it reads the label
/// component of each item directly off the dataset.
pub trait LabeledDataset: Dataset {
    /// Returns the class id of the sample at the given index.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    fn get_label(&self, index: usize) -> usize;
}
