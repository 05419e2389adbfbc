// samplers/sampling_factor_test.rs

use super::*;

#[test]
fn test_from_float_interpolation_range() {
    assert_eq!(
        SamplingFactor::from_float(0.0).unwrap(),
        SamplingFactor::Interpolate(0.0)
    );
    assert_eq!(
        SamplingFactor::from_float(1.0).unwrap(),
        SamplingFactor::Interpolate(1.0)
    );
    assert_eq!(
        SamplingFactor::from_float(0.5).unwrap(),
        SamplingFactor::Interpolate(0.5)
    );
}

#[test]
fn test_from_float_undersampling_range() {
    assert_eq!(
        SamplingFactor::from_float(-0.5).unwrap(),
        SamplingFactor::UndersampleMax(0.5)
    );
    assert_eq!(
        SamplingFactor::from_float(-0.01).unwrap(),
        SamplingFactor::UndersampleMax(0.01)
    );
}

#[test]
fn test_from_float_oversampling_range() {
    assert_eq!(
        SamplingFactor::from_float(-2.0).unwrap(),
        SamplingFactor::OversampleMin(2.0)
    );
    assert_eq!(
        SamplingFactor::from_float(-1.5).unwrap(),
        SamplingFactor::OversampleMin(1.5)
    );
}

#[test]
fn test_from_float_rejects_documented_boundaries() {
    assert!(matches!(
        SamplingFactor::from_float(-1.0),
        Err(RebalanceError::UnsupportedSamplingFactor(_))
    ));
    assert!(matches!(
        SamplingFactor::from_float(1.5),
        Err(RebalanceError::UnsupportedSamplingFactor(_))
    ));
    assert!(matches!(
        SamplingFactor::from_float(f64::NAN),
        Err(RebalanceError::UnsupportedSamplingFactor(_))
    ));
}

#[test]
fn test_fixed_rejects_sizes_below_two() {
    assert!(matches!(
        SamplingFactor::fixed(0),
        Err(RebalanceError::UnsupportedSamplingFactor(_))
    ));
    // 1 is reserved against the float 1.0
    assert!(matches!(
        SamplingFactor::fixed(1),
        Err(RebalanceError::UnsupportedSamplingFactor(_))
    ));
    assert_eq!(
        SamplingFactor::fixed(2).unwrap(),
        SamplingFactor::FixedSize(2)
    );
}

#[test]
fn test_from_str_aliases() {
    assert_eq!(
        "oversampling".parse::<SamplingFactor>().unwrap(),
        SamplingFactor::Interpolate(1.0)
    );
    assert_eq!(
        "undersampling".parse::<SamplingFactor>().unwrap(),
        SamplingFactor::Interpolate(0.0)
    );
}

#[test]
fn test_from_str_whole_numbers_select_fixed_size() {
    assert_eq!(
        "4".parse::<SamplingFactor>().unwrap(),
        SamplingFactor::FixedSize(4)
    );
    assert!(matches!(
        "1".parse::<SamplingFactor>(),
        Err(RebalanceError::UnsupportedSamplingFactor(_))
    ));
    // A negative whole number lands in the fixed-size branch, not the
    // ratio branches, and is rejected there.
    assert!(matches!(
        "-2".parse::<SamplingFactor>(),
        Err(RebalanceError::UnsupportedSamplingFactor(_))
    ));
}

#[test]
fn test_from_str_floats_select_ratio_branches() {
    assert_eq!(
        "-2.0".parse::<SamplingFactor>().unwrap(),
        SamplingFactor::OversampleMin(2.0)
    );
    assert_eq!(
        "-0.5".parse::<SamplingFactor>().unwrap(),
        SamplingFactor::UndersampleMax(0.5)
    );
    assert_eq!(
        "0.25".parse::<SamplingFactor>().unwrap(),
        SamplingFactor::Interpolate(0.25)
    );
}

#[test]
fn test_from_str_garbage_is_rejected() {
    assert!(matches!(
        "balanced".parse::<SamplingFactor>(),
        Err(RebalanceError::UnsupportedSamplingFactor(_))
    ));
}

#[test]
fn test_resolve_interpolation() {
    let sizes = vec![3, 5];
    assert_eq!(
        SamplingFactor::Interpolate(0.0)
            .resolve_class_size(&sizes)
            .unwrap(),
        3
    );
    assert_eq!(
        SamplingFactor::Interpolate(1.0)
            .resolve_class_size(&sizes)
            .unwrap(),
        5
    );
    assert_eq!(
        SamplingFactor::Interpolate(0.5)
            .resolve_class_size(&sizes)
            .unwrap(),
        4
    );
}

#[test]
fn test_resolve_interpolation_floors() {
    // 10 + 0.33 * 7 = 12.31, floored to 12
    let sizes = vec![10, 17];
    assert_eq!(
        SamplingFactor::Interpolate(0.33)
            .resolve_class_size(&sizes)
            .unwrap(),
        12
    );
}

#[test]
fn test_resolve_undersample_max() {
    // floor(10 * 0.5) = 5, within [4, 10]
    let sizes = vec![4, 10];
    assert_eq!(
        SamplingFactor::UndersampleMax(0.5)
            .resolve_class_size(&sizes)
            .unwrap(),
        5
    );
}

#[test]
fn test_resolve_undersample_max_below_min_is_rejected() {
    // floor(10 * 0.1) = 1, below the smallest class (5)
    let sizes = vec![5, 10];
    assert_eq!(
        SamplingFactor::UndersampleMax(0.1).resolve_class_size(&sizes),
        Err(RebalanceError::ClassSizeOutOfRange {
            class_size: 1,
            min_size: 5,
            max_size: 10,
        })
    );
}

#[test]
fn test_resolve_oversample_min() {
    // floor(3 * 2.0) = 6, within [3, 8]
    let sizes = vec![3, 8];
    assert_eq!(
        SamplingFactor::OversampleMin(2.0)
            .resolve_class_size(&sizes)
            .unwrap(),
        6
    );
}

#[test]
fn test_resolve_oversample_min_above_max_is_rejected() {
    let sizes = vec![3, 4];
    assert!(matches!(
        SamplingFactor::OversampleMin(3.0).resolve_class_size(&sizes),
        Err(RebalanceError::ClassSizeOutOfRange { .. })
    ));
}

#[test]
fn test_resolve_fixed_size_ignores_min_max() {
    let sizes = vec![3, 5];
    // 4 lies inside [3, 5], 100 and 2 do not; all are accepted.
    assert_eq!(
        SamplingFactor::FixedSize(4).resolve_class_size(&sizes).unwrap(),
        4
    );
    assert_eq!(
        SamplingFactor::FixedSize(100)
            .resolve_class_size(&sizes)
            .unwrap(),
        100
    );
    assert_eq!(
        SamplingFactor::FixedSize(2).resolve_class_size(&sizes).unwrap(),
        2
    );
}

#[test]
fn test_resolve_empty_class_is_rejected() {
    let sizes = vec![3, 0, 5];
    assert_eq!(
        SamplingFactor::Interpolate(0.5).resolve_class_size(&sizes),
        Err(RebalanceError::EmptyClass { class: 1 })
    );
}

#[test]
fn test_resolve_equal_classes() {
    let sizes = vec![4, 4, 4];
    assert_eq!(
        SamplingFactor::Interpolate(0.7)
            .resolve_class_size(&sizes)
            .unwrap(),
        4
    );
}
