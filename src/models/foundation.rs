use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, CalculationError};

/// Strength and stiffness parameters of one soil layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilLayer {
    /// Internal friction angle (degrees)
    pub friction_angle: f64,

    pub cohesion: f64,

    pub deformation_modulus: f64,

    pub density: f64,

    /// Layer thickness, used as the averaging weight
    pub depth: f64,
}

impl SoilLayer {
    pub fn new(
        friction_angle: f64,
        cohesion: f64,
        deformation_modulus: f64,
        density: f64,
        depth: f64,
    ) -> Self {
        Self {
            friction_angle,
            cohesion,
            deformation_modulus,
            density,
            depth,
        }
    }

    /// Reject non-finite parameters
    ///
    /// Range checks on the friction angle and cohesion belong to the
    /// repulsion formula, which is where they can diverge.
    pub fn validate(&self) -> Result<(), CalculationError> {
        ensure_finite("friction_angle", self.friction_angle)?;
        ensure_finite("cohesion", self.cohesion)?;
        ensure_finite("deformation_modulus", self.deformation_modulus)?;
        ensure_finite("density", self.density)?;
        ensure_finite("depth", self.depth)?;
        Ok(())
    }
}

/// Soil profile under the pile, top layer first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoundationData {
    pub soil_layers: Vec<SoilLayer>,
}

impl FoundationData {
    pub fn new(soil_layers: Vec<SoilLayer>) -> Self {
        Self { soil_layers }
    }

    pub fn layers(&self) -> &[SoilLayer] {
        &self.soil_layers
    }

    pub fn len(&self) -> usize {
        self.soil_layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.soil_layers.is_empty()
    }

    /// Total thickness of all layers
    pub fn total_depth(&self) -> f64 {
        self.soil_layers.iter().map(|l| l.depth).sum()
    }
}

impl From<Vec<SoilLayer>> for FoundationData {
    fn from(soil_layers: Vec<SoilLayer>) -> Self {
        Self::new(soil_layers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_foundation_accessors() {
        let foundation = FoundationData::new(vec![
            SoilLayer::new(30.0, 20.0, 15000.0, 1.9, 1.6),
            SoilLayer::new(20.0, 10.0, 9000.0, 1.8, 1.4),
        ]);

        assert_eq!(foundation.len(), 2);
        assert!(!foundation.is_empty());
        assert_relative_eq!(foundation.total_depth(), 3.0);
        assert_relative_eq!(foundation.layers()[1].cohesion, 10.0);

        assert!(FoundationData::default().is_empty());
    }

    #[test]
    fn test_layer_validation() {
        assert!(SoilLayer::new(30.0, 20.0, 15000.0, 1.9, 3.0).validate().is_ok());
        assert!(SoilLayer::new(30.0, 20.0, f64::NAN, 1.9, 3.0).validate().is_err());
        assert!(SoilLayer::new(30.0, 20.0, 15000.0, 1.9, f64::NEG_INFINITY).validate().is_err());
    }
}
