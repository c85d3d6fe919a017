//! Two-material stochastic layered samples.
//!
//! A [`LayeredSample`] is a slab of thickness `width` made of microscopic
//! layers of nominal thickness `dx`. Each layer is material 1 with
//! probability `volume_fraction_1` and material 2 otherwise.

use std::sync::Arc;

use crate::material::Material;
use crate::types::{EnergySeries, SampleError, ValidationError};

/// Default volume fraction of material 1 (a pure material-1 slab).
pub const DEFAULT_VOLUME_FRACTION: f64 = 1.0;

/// A two-material stochastic layered sample.
///
/// Fields are validated once at construction and are read-only afterwards.
/// `volume_fraction_2` is derived as `1 - volume_fraction_1` at that point.
///
/// # Examples
///
/// ```rust
/// use slm_core::material::Material;
/// use slm_core::sample::LayeredSample;
///
/// let sample = LayeredSample::new(
///     1.0,
///     0.1,
///     Material::new("A", 0.1),
///     Material::new("B", 0.05),
///     0.3,
/// )
/// .unwrap();
///
/// assert_eq!(sample.volume_fraction_2(), 0.7);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct LayeredSample {
    width: f64,
    dx: f64,
    material_1: Arc<Material>,
    material_2: Arc<Material>,
    volume_fraction_1: f64,
    volume_fraction_2: f64,
}

impl LayeredSample {
    /// Creates a validated sample.
    ///
    /// # Arguments
    ///
    /// * `width` - Total sample thickness
    /// * `dx` - Nominal microscopic layer thickness
    /// * `material_1`, `material_2` - The two constituent materials
    /// * `volume_fraction_1` - Volume fraction of material 1 in [0, 1]
    ///
    /// # Errors
    ///
    /// - [`ValidationError::InvalidVolumeFraction`] if `volume_fraction_1` is
    ///   outside [0, 1] or NaN
    /// - [`ValidationError::InvalidGeometry`] if `width` or `dx` is not finite
    ///   and positive
    pub fn new(
        width: f64,
        dx: f64,
        material_1: impl Into<Arc<Material>>,
        material_2: impl Into<Arc<Material>>,
        volume_fraction_1: f64,
    ) -> Result<Self, ValidationError> {
        if !(0.0..=1.0).contains(&volume_fraction_1) {
            return Err(ValidationError::InvalidVolumeFraction {
                value: volume_fraction_1,
            });
        }
        validate_length("width", width)?;
        validate_length("dx", dx)?;

        Ok(Self {
            width,
            dx,
            material_1: material_1.into(),
            material_2: material_2.into(),
            volume_fraction_1,
            volume_fraction_2: 1.0 - volume_fraction_1,
        })
    }

    /// Creates a new sample builder.
    #[inline]
    pub fn builder() -> LayeredSampleBuilder {
        LayeredSampleBuilder::default()
    }

    /// Returns the total sample thickness.
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the nominal layer thickness.
    #[inline]
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Returns material 1.
    #[inline]
    pub fn material_1(&self) -> &Material {
        &self.material_1
    }

    /// Returns material 2.
    #[inline]
    pub fn material_2(&self) -> &Material {
        &self.material_2
    }

    /// Returns the volume fraction of material 1.
    #[inline]
    pub fn volume_fraction_1(&self) -> f64 {
        self.volume_fraction_1
    }

    /// Returns the volume fraction of material 2 (`1 - volume_fraction_1`).
    #[inline]
    pub fn volume_fraction_2(&self) -> f64 {
        self.volume_fraction_2
    }

    /// Per-energy cross-section variance `f1 * f2 * (σ1 - σ2)²`.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::Shape`] if the two cross sections cannot be aligned.
    pub fn layer_xs_variance_spectrum(&self) -> Result<EnergySeries, SampleError> {
        let weight = self.volume_fraction_1 * self.volume_fraction_2;
        let variance = self
            .material_1
            .cross_section()
            .zip_with(self.material_2.cross_section(), |s1, s2| {
                weight * (s1 - s2).powi(2)
            })?;
        Ok(variance)
    }

    /// Cross-section variance per layer, `Var(σ) = f1 * f2 * (σ1 - σ2)²`.
    ///
    /// Measures the heterogeneity of the local attenuation coefficient.
    /// Single-element cross sections (labelled or not) reduce to a scalar.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::Shape`] if the cross sections cannot be aligned
    /// or if the result holds more than one value.
    pub fn layer_xs_variance(&self) -> Result<f64, SampleError> {
        Ok(self.layer_xs_variance_spectrum()?.item()?)
    }
}

fn validate_length(name: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidGeometry { name, value })
    }
}

/// Builder for [`LayeredSample`].
///
/// `volume_fraction_1` defaults to [`DEFAULT_VOLUME_FRACTION`]; every other
/// field is required.
///
/// # Examples
///
/// ```rust
/// use slm_core::material::Material;
/// use slm_core::sample::LayeredSample;
///
/// let sample = LayeredSample::builder()
///     .width(2.0)
///     .dx(0.25)
///     .material_1(Material::new("A", 0.1))
///     .material_2(Material::new("B", 0.05))
///     .build()
///     .expect("valid sample");
///
/// assert_eq!(sample.volume_fraction_1(), 1.0);
/// assert_eq!(sample.volume_fraction_2(), 0.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LayeredSampleBuilder {
    width: Option<f64>,
    dx: Option<f64>,
    material_1: Option<Arc<Material>>,
    material_2: Option<Arc<Material>>,
    volume_fraction_1: Option<f64>,
}

impl LayeredSampleBuilder {
    /// Sets the total sample thickness.
    #[inline]
    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the nominal layer thickness.
    #[inline]
    pub fn dx(mut self, dx: f64) -> Self {
        self.dx = Some(dx);
        self
    }

    /// Sets material 1.
    #[inline]
    pub fn material_1(mut self, material: impl Into<Arc<Material>>) -> Self {
        self.material_1 = Some(material.into());
        self
    }

    /// Sets material 2.
    #[inline]
    pub fn material_2(mut self, material: impl Into<Arc<Material>>) -> Self {
        self.material_2 = Some(material.into());
        self
    }

    /// Sets the volume fraction of material 1.
    #[inline]
    pub fn volume_fraction_1(mut self, fraction: f64) -> Self {
        self.volume_fraction_1 = Some(fraction);
        self
    }

    /// Builds the sample.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for unset required fields,
    /// otherwise the errors of [`LayeredSample::new`].
    pub fn build(self) -> Result<LayeredSample, ValidationError> {
        let width = self
            .width
            .ok_or(ValidationError::MissingField { name: "width" })?;
        let dx = self.dx.ok_or(ValidationError::MissingField { name: "dx" })?;
        let material_1 = self
            .material_1
            .ok_or(ValidationError::MissingField { name: "material_1" })?;
        let material_2 = self
            .material_2
            .ok_or(ValidationError::MissingField { name: "material_2" })?;

        LayeredSample::new(
            width,
            dx,
            material_1,
            material_2,
            self.volume_fraction_1.unwrap_or(DEFAULT_VOLUME_FRACTION),
        )
    }
}
