use thiserror::Error;

/// Custom error type for the rebalance crate.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum RebalanceError {
    // --- Configuration errors ---
    #[error("sampling_factor is required but was not provided")]
    MissingSamplingFactor,

    #[error("you cannot specify a label callback if you provide the labels directly")]
    AmbiguousLabelSource,

    #[error("invalid callback type '{0}', expected 'single' or 'multi'")]
    InvalidCallbackType(String),

    #[error("num_classes must be at least 1")]
    InvalidNumClasses,

    #[error("neither labels nor a label callback were provided")]
    MissingLabelSource,

    // --- Sampling factor values documented as undefined ---
    #[error("unsupported sampling factor: {0}")]
    UnsupportedSamplingFactor(String),

    // --- Invariant violations detected during construction ---
    #[error("class {class} is empty, cannot balance against a class of size zero")]
    EmptyClass { class: usize },

    #[error("label list has {actual} entries but the dataset has {expected}")]
    LabelCountMismatch { expected: usize, actual: usize },

    #[error("label {label} is out of range for {num_classes} classes")]
    LabelOutOfRange { label: usize, num_classes: usize },

    #[error("per-class partition has {actual} classes, expected {expected}")]
    PartitionArityMismatch { expected: usize, actual: usize },

    #[error("per-class partition covers {actual} indices but the dataset has {expected}")]
    PartitionTotalMismatch { expected: usize, actual: usize },

    #[error("resolved class size {class_size} falls outside [{min_size}, {max_size}]")]
    ClassSizeOutOfRange {
        class_size: usize,
        min_size: usize,
        max_size: usize,
    },

    // --- Dataset access ---
    #[error("index {index} out of bounds for dataset of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}
