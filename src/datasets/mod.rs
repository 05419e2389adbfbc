pub mod traits;
pub mod vec_dataset;

pub use traits::{Dataset, LabeledDataset};
pub use vec_dataset::VecDataset;
