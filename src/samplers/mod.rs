pub mod traits;
pub mod sequential_sampler;
pub mod random_sampler;
pub mod sampling_factor;
pub mod imbalanced_sampler;

pub use traits::Sampler;
pub use sequential_sampler::SequentialSampler;
pub use random_sampler::RandomSampler;
pub use sampling_factor::SamplingFactor;
pub use imbalanced_sampler::{ImbalancedDatasetSampler, ImbalancedSamplerOptions};
