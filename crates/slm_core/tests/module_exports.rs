//! Integration tests for module exports.
//!
//! Verify that all public modules and types are reachable via absolute paths
//! and that the crate-root re-exports point at the same items.

use std::sync::Arc;

/// Types module is accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use slm_core::types::error::{SampleError, ShapeError, ValidationError};
    use slm_core::types::series::{AlignedPair, EnergySeries};

    let series = EnergySeries::scalar(1.0);
    let pair: AlignedPair = series.align(&EnergySeries::scalar(2.0)).unwrap();
    assert_eq!(pair.left, vec![1.0]);
    assert_eq!(pair.right, vec![2.0]);

    let err: SampleError = ShapeError::NotScalar { len: 3 }.into();
    assert!(err.to_string().contains("3 values"));

    let err: SampleError = ValidationError::InvalidVolumeFraction { value: 7.0 }.into();
    assert!(err.to_string().contains("invalid volume fraction"));
}

/// Root re-exports mirror the module paths.
#[test]
fn test_root_reexports() {
    let material: slm_core::Material = slm_core::material::Material::new("water", 0.02);
    let sample: slm_core::LayeredSample = slm_core::sample::LayeredSample::builder()
        .width(5.0)
        .dx(0.5)
        .material_1(material)
        .material_2(slm_core::Material::new("air", 0.0))
        .volume_fraction_1(0.25)
        .build()
        .unwrap();

    assert_eq!(sample.material_1().name(), "water");
    assert_eq!(sample.volume_fraction_2(), 0.75);
}

/// Samples and materials can be shared across threads.
#[test]
fn test_sample_is_send_and_sync() {
    let sample = Arc::new(
        slm_core::LayeredSample::new(
            1.0,
            0.1,
            slm_core::Material::new("A", 0.1),
            slm_core::Material::new("B", 0.05),
            0.5,
        )
        .unwrap(),
    );

    let handle = {
        let sample = Arc::clone(&sample);
        std::thread::spawn(move || sample.layer_xs_variance().unwrap())
    };
    let variance = handle.join().unwrap();
    assert_eq!(variance, sample.layer_xs_variance().unwrap());
}
