// samplers/sampling_factor.rs

use crate::error::RebalanceError;
use std::str::FromStr;

/// Policy deciding the common per-class size the balanced sampler targets.
///
/// The original, loosely-typed configuration surface overloads a single
/// number: floats in `[0, 1]` interpolate, floats in `(-1, 0)` undersample,
/// floats below `-1` oversample, and whole numbers set the size directly.
/// That overloading is parsed into this enum exactly once, at construction;
/// ratio variants store their factor as a positive value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SamplingFactor {
    /// Interpolates the class size linearly between the smallest and the
    /// largest class. `0.0` matches the smallest class (pure undersampling),
    /// `1.0` the largest (pure oversampling).
    Interpolate(f64),
    /// Shrinks the largest class by the given factor in `(0, 1)`.
    UndersampleMax(f64),
    /// Grows the smallest class by the given factor above `1`.
    OversampleMin(f64),
    /// Sets the class size directly. Must be at least 2; the value 1 is
    /// reserved so it cannot be confused with the float `1.0`.
    FixedSize(usize),
}

impl SamplingFactor {
    /// Parses a float factor using the documented ranges.
    ///
    /// * `[0.0, 1.0]` becomes [`SamplingFactor::Interpolate`].
    /// * `(-1.0, 0.0)` becomes [`SamplingFactor::UndersampleMax`] with the
    ///   sign flipped.
    /// * below `-1.0` becomes [`SamplingFactor::OversampleMin`] with the
    ///   sign flipped.
    ///
    /// # Errors
    ///
    /// Exactly `-1.0`, anything above `1.0`, and NaN are documented as
    /// undefined and return `RebalanceError::UnsupportedSamplingFactor`.
    pub fn from_float(factor: f64) -> Result<Self, RebalanceError> {
        if factor.is_nan() {
            Err(RebalanceError::UnsupportedSamplingFactor(
                "NaN is not a sampling factor".to_string(),
            ))
        } else if (0.0..=1.0).contains(&factor) {
            Ok(SamplingFactor::Interpolate(factor))
        } else if factor > -1.0 && factor < 0.0 {
            Ok(SamplingFactor::UndersampleMax(-factor))
        } else if factor < -1.0 {
            Ok(SamplingFactor::OversampleMin(-factor))
        } else {
            Err(RebalanceError::UnsupportedSamplingFactor(format!(
                "{factor}: -1.0 is undefined and floats above 1.0 are rejected"
            )))
        }
    }

    /// Sets the class size directly to `size`.
    ///
    /// # Errors
    ///
    /// Sizes below 2 return `RebalanceError::UnsupportedSamplingFactor`;
    /// the size 1 is reserved to avoid colliding with the float `1.0`.
    pub fn fixed(size: usize) -> Result<Self, RebalanceError> {
        if size >= 2 {
            Ok(SamplingFactor::FixedSize(size))
        } else {
            Err(RebalanceError::UnsupportedSamplingFactor(format!(
                "fixed size {size}: whole numbers below 2 are rejected"
            )))
        }
    }

    /// Resolves this factor against the observed class sizes into the single
    /// target class size.
    ///
    /// # Errors
    ///
    /// * `RebalanceError::EmptyClass` if any class has size zero.
    /// * `RebalanceError::ClassSizeOutOfRange` if a ratio or interpolation
    ///   variant lands outside `[min_size, max_size]` (`UndersampleMax` can
    ///   floor below the smallest class). `FixedSize` is exempt.
    pub fn resolve_class_size(&self, class_sizes: &[usize]) -> Result<usize, RebalanceError> {
        if let Some(class) = class_sizes.iter().position(|&size| size == 0) {
            return Err(RebalanceError::EmptyClass { class });
        }
        let (min_size, max_size) = match (class_sizes.iter().min(), class_sizes.iter().max()) {
            (Some(&min_size), Some(&max_size)) => (min_size, max_size),
            _ => return Err(RebalanceError::InvalidNumClasses),
        };

        let class_size = match *self {
            SamplingFactor::Interpolate(factor) => {
                let inter_class_distance = max_size - min_size;
                min_size + (factor * inter_class_distance as f64) as usize
            }
            SamplingFactor::UndersampleMax(factor) => (max_size as f64 * factor) as usize,
            SamplingFactor::OversampleMin(factor) => (min_size as f64 * factor) as usize,
            SamplingFactor::FixedSize(size) => return Ok(size),
        };

        if class_size < min_size || class_size > max_size {
            return Err(RebalanceError::ClassSizeOutOfRange {
                class_size,
                min_size,
                max_size,
            });
        }
        Ok(class_size)
    }
}

impl FromStr for SamplingFactor {
    type Err = RebalanceError;

    /// Parses the string configuration surface: the aliases `"oversampling"`
    /// and `"undersampling"`, whole numbers (fixed size), and floats (ratio
    /// or interpolation factors).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "oversampling" => Ok(SamplingFactor::Interpolate(1.0)),
            "undersampling" => Ok(SamplingFactor::Interpolate(0.0)),
            _ => {
                if let Ok(size) = s.parse::<i64>() {
                    // Whole numbers select the fixed-size branch; anything
                    // below 2 (including negatives) is rejected there.
                    if size >= 2 {
                        SamplingFactor::fixed(size as usize)
                    } else {
                        Err(RebalanceError::UnsupportedSamplingFactor(format!(
                            "fixed size {size}: whole numbers below 2 are rejected"
                        )))
                    }
                } else if let Ok(factor) = s.parse::<f64>() {
                    SamplingFactor::from_float(factor)
                } else {
                    Err(RebalanceError::UnsupportedSamplingFactor(format!(
                        "cannot parse '{s}' as a sampling factor"
                    )))
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "sampling_factor_test.rs"]
mod tests;
