//! Homogeneous materials.

use crate::types::EnergySeries;

/// A named material with a macroscopic cross section σ.
///
/// The cross section is an [`EnergySeries`]; a single unlabelled value is the
/// usual mono-energetic case. Positivity is not enforced here.
///
/// Materials are immutable once built and are normally shared between samples
/// through an `Arc`.
///
/// # Examples
///
/// ```rust
/// use slm_core::material::Material;
///
/// let lead = Material::new("lead", 0.1);
/// assert_eq!(lead.name(), "lead");
/// assert_eq!(lead.cross_section().item(), Ok(0.1));
///
/// let blank = Material::default();
/// assert_eq!(blank.name(), "");
/// assert!(blank.cross_section().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Material {
    name: String,
    cross_section: EnergySeries,
}

impl Material {
    /// Creates a material from a name and a cross section.
    pub fn new(name: impl Into<String>, cross_section: impl Into<EnergySeries>) -> Self {
        Self {
            name: name.into(),
            cross_section: cross_section.into(),
        }
    }

    /// Returns the material name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the macroscopic cross section.
    #[inline]
    pub fn cross_section(&self) -> &EnergySeries {
        &self.cross_section
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_defaults() {
        let material = Material::default();
        assert_eq!(material.name(), "");
        assert!(material.cross_section().is_empty());
    }

    #[test]
    fn test_material_with_labelled_cross_section() {
        let xs = EnergySeries::with_energy(vec![1.0e6], vec![0.05]).unwrap();
        let material = Material::new("B", xs.clone());
        assert_eq!(material.cross_section(), &xs);
        assert_eq!(material.cross_section().energy(), Some(&[1.0e6][..]));
    }

    #[test]
    fn test_material_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Material>();
    }
}
