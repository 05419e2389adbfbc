//! Class-balanced index sampling and data loading for imbalanced datasets.
//!
//! The centerpiece is [`ImbalancedDatasetSampler`]: given a labeled dataset
//! whose classes differ in size, it resolves a [`SamplingFactor`] into a
//! single target class size and emits exactly that many indices per class,
//! oversampling (with repetition) the classes below the target and
//! undersampling (random subsets) the classes above it. The result is a
//! fixed-length, optionally shuffled, restartable index sequence a training
//! loop can consume directly or through [`DataLoader`].
//!
//! ```
//! use rebalance::{
//!     Dataset, ImbalancedDatasetSampler, ImbalancedSamplerOptions, Sampler, SamplingFactor,
//!     VecDataset,
//! };
//!
//! let dataset = VecDataset::new(vec![
//!     ("a", 0), ("b", 0), ("c", 0),
//!     ("d", 1), ("e", 1), ("f", 1), ("g", 1), ("h", 1),
//! ]);
//!
//! // "undersampling" is an alias for interpolation factor 0.0: every class
//! // is cut down to the size of the smallest one.
//! let mut options = ImbalancedSamplerOptions::new(2);
//! options.sampling_factor = Some("undersampling".parse::<SamplingFactor>()?);
//! let sampler = ImbalancedDatasetSampler::new(&dataset, options)?;
//!
//! assert_eq!(sampler.class_size(), 3);
//! assert_eq!(sampler.iter(dataset.len()).count(), 6);
//! # Ok::<(), rebalance::RebalanceError>(())
//! ```

pub mod dataloader;
pub mod datasets;
pub mod error;
pub mod labels;
pub mod samplers;

// Re-export main components
pub use dataloader::DataLoader;
pub use datasets::{Dataset, LabeledDataset, VecDataset};
pub use error::RebalanceError;
pub use labels::{CallbackType, LabelCallback, LabelSource};
pub use samplers::{
    ImbalancedDatasetSampler, ImbalancedSamplerOptions, RandomSampler, Sampler, SamplingFactor,
    SequentialSampler,
};
