// samplers/imbalanced_sampler.rs

use super::sampling_factor::SamplingFactor;
use super::traits::Sampler;
use crate::datasets::LabeledDataset;
use crate::error::RebalanceError;
use crate::labels::{self, LabelCallback, LabelSource};
use log::debug;
use rand::seq::SliceRandom;
use std::sync::Mutex;

/// Configuration for [`ImbalancedDatasetSampler`].
///
/// At most one of `labels` and `callback_get_label` may be set. When neither
/// is, [`ImbalancedDatasetSampler::new`] falls back to reading labels off the
/// dataset itself via [`LabeledDataset::get_label`].
#[derive(Debug)]
pub struct ImbalancedSamplerOptions<'a> {
    /// The number of classes in the dataset. Every class id must lie in
    /// `[0, num_classes)`.
    pub num_classes: usize,
    /// If `true`, every pass over the sampler reshuffles the indices.
    pub shuffle: bool,
    /// Required. Resolved into the common per-class size at construction.
    pub sampling_factor: Option<SamplingFactor>,
    /// Explicit labels, flat or per-class.
    pub labels: Option<LabelSource>,
    /// A callback that retrieves the labels instead.
    pub callback_get_label: Option<LabelCallback<'a>>,
}

impl<'a> ImbalancedSamplerOptions<'a> {
    /// Creates options for a dataset with `num_classes` classes, with
    /// shuffling off and no label source or sampling factor set.
    pub fn new(num_classes: usize) -> Self {
        Self {
            num_classes,
            shuffle: false,
            sampling_factor: None,
            labels: None,
            callback_get_label: None,
        }
    }
}

/// A sampler that balances per-class representation by over- and
/// undersampling.
///
/// Given a partition of dataset indices into classes, construction resolves
/// the [`SamplingFactor`] into a single target class size, then emits exactly
/// that many indices for every class: classes smaller than the target are
/// repeated (full copies plus a random remainder sample), classes larger
/// than it are cut down to a random subset. Every pass over the sampler
/// yields exactly `class_size * num_classes` indices.
///
/// ```
/// use rebalance::{
///     Dataset, ImbalancedDatasetSampler, ImbalancedSamplerOptions, Sampler, SamplingFactor,
///     VecDataset,
/// };
///
/// // Two classes of sizes 2 and 4; interpolate to the largest class.
/// let dataset = VecDataset::new(vec![
///     ("a", 0), ("b", 0),
///     ("c", 1), ("d", 1), ("e", 1), ("f", 1),
/// ]);
/// let mut options = ImbalancedSamplerOptions::new(2);
/// options.sampling_factor = Some(SamplingFactor::from_float(1.0)?);
/// let sampler = ImbalancedDatasetSampler::new(&dataset, options)?;
///
/// assert_eq!(sampler.class_size(), 4);
/// assert_eq!(sampler.num_samples(), 8);
/// assert_eq!(sampler.iter(dataset.len()).count(), 8);
/// # Ok::<(), rebalance::RebalanceError>(())
/// ```
#[derive(Debug)]
pub struct ImbalancedDatasetSampler {
    num_classes: usize,
    class_size: usize,
    shuffle: bool,
    // The working indices, fixed length for the sampler's lifetime and
    // mutated only by the shuffle step.
    indices: Mutex<Vec<usize>>,
}

impl ImbalancedDatasetSampler {
    /// Creates a sampler over `dataset`.
    ///
    /// If `options` carries neither labels nor a callback, labels are read
    /// off the dataset item by item via [`LabeledDataset::get_label`].
    ///
    /// # Errors
    ///
    /// All configuration and invariant errors surface here; see
    /// [`RebalanceError`]. Construction either produces a fully built
    /// sampler or nothing.
    pub fn new<D>(
        dataset: &D,
        options: ImbalancedSamplerOptions<'_>,
    ) -> Result<Self, RebalanceError>
    where
        D: LabeledDataset + ?Sized,
    {
        let ImbalancedSamplerOptions {
            num_classes,
            shuffle,
            sampling_factor,
            labels,
            mut callback_get_label,
        } = options;

        if labels.is_none() && callback_get_label.is_none() {
            callback_get_label = Some(LabelCallback::Single(Box::new(|index| {
                dataset.get_label(index)
            })));
        }

        Self::build(
            dataset.len(),
            num_classes,
            shuffle,
            sampling_factor,
            labels,
            callback_get_label,
        )
    }

    /// Creates a sampler from out-of-band labels, without a dataset handle.
    ///
    /// `dataset_len` stands in for the dataset's length; `options` must
    /// carry either labels or a callback, there is no fallback to read from.
    ///
    /// # Errors
    ///
    /// `RebalanceError::MissingLabelSource` when no label input is set, plus
    /// everything [`ImbalancedDatasetSampler::new`] can return.
    pub fn from_parts(
        dataset_len: usize,
        options: ImbalancedSamplerOptions<'_>,
    ) -> Result<Self, RebalanceError> {
        let ImbalancedSamplerOptions {
            num_classes,
            shuffle,
            sampling_factor,
            labels,
            callback_get_label,
        } = options;

        Self::build(
            dataset_len,
            num_classes,
            shuffle,
            sampling_factor,
            labels,
            callback_get_label,
        )
    }

    fn build(
        dataset_len: usize,
        num_classes: usize,
        shuffle: bool,
        sampling_factor: Option<SamplingFactor>,
        labels: Option<LabelSource>,
        callback_get_label: Option<LabelCallback<'_>>,
    ) -> Result<Self, RebalanceError> {
        let factor = sampling_factor.ok_or(RebalanceError::MissingSamplingFactor)?;
        if num_classes == 0 {
            return Err(RebalanceError::InvalidNumClasses);
        }

        let classes =
            labels::resolve_partition(dataset_len, num_classes, labels, callback_get_label)?;
        let class_sizes: Vec<usize> = classes.iter().map(Vec::len).collect();
        let class_size = factor.resolve_class_size(&class_sizes)?;
        debug!(
            "balancing {} classes of sizes {:?} to a common size of {}",
            num_classes, class_sizes, class_size
        );

        let indices = build_indices(&classes, class_size);
        debug_assert_eq!(indices.len(), class_size * num_classes);

        Ok(Self {
            num_classes,
            class_size,
            shuffle,
            indices: Mutex::new(indices),
        })
    }

    /// The common per-class size every class was balanced to.
    pub fn class_size(&self) -> usize {
        self.class_size
    }

    /// The total number of indices yielded per pass,
    /// `class_size * num_classes`. Constant for the sampler's lifetime.
    pub fn num_samples(&self) -> usize {
        self.class_size * self.num_classes
    }
}

/// Emits exactly `class_size` indices per class, concatenated in class-id
/// order.
///
/// A class with `n <= class_size` members contributes `class_size / n` full
/// order-preserving copies of itself plus a without-replacement random
/// sample of the remainder; a class with `n > class_size` members
/// contributes a without-replacement random sample of size `class_size`.
fn build_indices(classes: &[Vec<usize>], class_size: usize) -> Vec<usize> {
    let mut rng = rand::thread_rng();
    let mut indices = Vec::with_capacity(class_size * classes.len());

    for class in classes {
        let num_in_class = class.len();
        if num_in_class <= class_size {
            let reps = class_size / num_in_class;
            let remainder = class_size % num_in_class;
            for _ in 0..reps {
                indices.extend_from_slice(class);
            }
            indices.extend(class.choose_multiple(&mut rng, remainder).copied());
        } else {
            indices.extend(class.choose_multiple(&mut rng, class_size).copied());
        }
    }

    indices
}

impl Sampler for ImbalancedDatasetSampler {
    /// Starts a pass over the balanced indices.
    ///
    /// With shuffling enabled the working indices are permuted in place
    /// first, so every pass sees a fresh uniform order; otherwise passes
    /// repeat the construction order (class 0's emission, then class 1's,
    /// and so on). The dataset length argument is ignored, the indices were
    /// fixed at construction.
    fn iter(&self, _dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync> {
        let mut indices = self.indices.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if self.shuffle {
            indices.shuffle(&mut rand::thread_rng());
        }
        Box::new(indices.clone().into_iter())
    }

    fn len(&self, _dataset_len: usize) -> usize {
        self.num_samples()
    }
}

#[cfg(test)]
#[path = "imbalanced_sampler_test.rs"]
mod tests;
