// labels.rs

use crate::error::RebalanceError;
use std::fmt;
use std::str::FromStr;

/// Explicit labels for a dataset, in one of the two accepted shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelSource {
    /// One class id per dataset index. Must have exactly one entry per
    /// dataset item.
    Flat(Vec<usize>),
    /// One index list per class id. The outer length must equal the number
    /// of classes; each inner list is the complete, order-preserved index
    /// set of its class, and together they must partition the dataset.
    PerClass(Vec<Vec<usize>>),
}

/// A callback that retrieves labels instead of supplying them up front.
pub enum LabelCallback<'a> {
    /// Called once per dataset index, in order, returning that index's
    /// class id.
    Single(Box<dyn Fn(usize) -> usize + 'a>),
    /// Called once with no argument, returning a full per-class partition.
    Multi(Box<dyn Fn() -> Vec<Vec<usize>> + 'a>),
}

impl fmt::Debug for LabelCallback<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelCallback::Single(_) => f.write_str("LabelCallback::Single(..)"),
            LabelCallback::Multi(_) => f.write_str("LabelCallback::Multi(..)"),
        }
    }
}

/// Invocation mode of a label callback, as named in string configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackType {
    /// One call per dataset index.
    Single,
    /// One call returning the whole partition.
    Multi,
}

impl FromStr for CallbackType {
    type Err = RebalanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(CallbackType::Single),
            "multi" => Ok(CallbackType::Multi),
            other => Err(RebalanceError::InvalidCallbackType(other.to_string())),
        }
    }
}

/// Resolves whichever label input was supplied into a per-class partition:
/// one index list per class id in `[0, num_classes)`.
///
/// Pure given its inputs; no randomness is involved.
///
/// # Errors
///
/// * `RebalanceError::AmbiguousLabelSource` if both `labels` and `callback`
///   are supplied.
/// * `RebalanceError::MissingLabelSource` if neither is.
/// * `RebalanceError::LabelCountMismatch` if a flat label list does not have
///   one entry per dataset item.
/// * `RebalanceError::LabelOutOfRange` if a flat label is not below
///   `num_classes`.
/// * `RebalanceError::PartitionArityMismatch` if a per-class partition does
///   not have exactly `num_classes` entries.
/// * `RebalanceError::PartitionTotalMismatch` if a per-class partition does
///   not cover exactly `dataset_len` indices.
pub fn resolve_partition(
    dataset_len: usize,
    num_classes: usize,
    labels: Option<LabelSource>,
    callback: Option<LabelCallback<'_>>,
) -> Result<Vec<Vec<usize>>, RebalanceError> {
    let source = match (labels, callback) {
        (Some(_), Some(_)) => return Err(RebalanceError::AmbiguousLabelSource),
        (None, None) => return Err(RebalanceError::MissingLabelSource),
        (Some(labels), None) => labels,
        (None, Some(LabelCallback::Single(get_label))) => {
            LabelSource::Flat((0..dataset_len).map(get_label).collect())
        }
        (None, Some(LabelCallback::Multi(get_partition))) => {
            LabelSource::PerClass(get_partition())
        }
    };

    match source {
        LabelSource::Flat(labels) => {
            if labels.len() != dataset_len {
                return Err(RebalanceError::LabelCountMismatch {
                    expected: dataset_len,
                    actual: labels.len(),
                });
            }
            let mut classes = vec![Vec::new(); num_classes];
            for (index, &label) in labels.iter().enumerate() {
                if label >= num_classes {
                    return Err(RebalanceError::LabelOutOfRange { label, num_classes });
                }
                classes[label].push(index);
            }
            Ok(classes)
        }
        LabelSource::PerClass(classes) => {
            if classes.len() != num_classes {
                return Err(RebalanceError::PartitionArityMismatch {
                    expected: num_classes,
                    actual: classes.len(),
                });
            }
            let total: usize = classes.iter().map(Vec::len).sum();
            if total != dataset_len {
                return Err(RebalanceError::PartitionTotalMismatch {
                    expected: dataset_len,
                    actual: total,
                });
            }
            Ok(classes)
        }
    }
}

#[cfg(test)]
#[path = "labels_test.rs"]
mod tests;
