// datasets/vec_dataset.rs

use super::traits::{Dataset, LabeledDataset};
use crate::error::RebalanceError;

/// A simple dataset that wraps a `Vec` of items.
///
/// Each item in the `Vec` corresponds to a sample in the dataset.
///
/// # Type Parameters
///
/// * `T`: The type of the items stored in the dataset. Must be `Clone + Send + 'static`.
#[derive(Debug, Clone)]
pub struct VecDataset<T: Clone + Send + 'static> {
    data: Vec<T>,
}

impl<T: Clone + Send + 'static> VecDataset<T> {
    /// Creates a new `VecDataset` from a vector of items.
    ///
    /// # Arguments
    ///
    /// * `data` - A vector of items that will constitute the dataset.
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T: Clone + Send + 'static> Dataset for VecDataset<T> {
    type Item = T;

    /// Returns the item at the given index.
    ///
    /// Clones the item before returning.
    ///
    /// # Errors
    ///
    /// Returns `RebalanceError::IndexOutOfBounds` if the index is out of bounds.
    fn get(&self, index: usize) -> Result<Self::Item, RebalanceError> {
        self.data
            .get(index)
            .cloned()
            .ok_or(RebalanceError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            })
    }

    /// Returns the total number of items in the dataset.
    fn len(&self) -> usize {
        self.data.len()
    }
}

/// A `VecDataset` of `(sample, label)` pairs exposes the label component
/// directly, so the balanced sampler can partition it without a callback.
impl<T: Clone + Send + 'static> LabeledDataset for VecDataset<(T, usize)> {
    fn get_label(&self, index: usize) -> usize {
        self.data[index].1
    }
}

#[cfg(test)]
#[path = "vec_dataset_test.rs"]
mod tests;
