//! Soil repulsion and depth-weighted averaging of layer properties

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ensure_finite, CalculationError};
use crate::models::{FoundationData, SoilLayer};
use crate::types::degrees_to_radians;

/// Which path produced the representative soil values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoilAveraging {
    /// One layer: its raw values are used as they are
    SingleLayer,

    /// Several layers: values averaged with layer depth as the weight
    DepthWeighted,
}

/// Soil values the moment formulas are evaluated with
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepresentativeSoil {
    pub averaging: SoilAveraging,
    pub soil_repulsion: f64,
    pub deformation_modulus: f64,
}

/// Lateral repulsion capacity of a soil layer
///
/// `π · c · tan(45° + φ/2)³`
pub fn soil_repulsion(layer: &SoilLayer) -> Result<f64, CalculationError> {
    let friction_angle = ensure_finite("friction_angle", layer.friction_angle)?;
    let cohesion = ensure_finite("cohesion", layer.cohesion)?;

    // tan(45 + φ/2) diverges at φ = 90
    if !(0.0..90.0).contains(&friction_angle) {
        return Err(CalculationError::invalid_input(
            "friction_angle",
            friction_angle,
            "must be within [0, 90) degrees",
        ));
    }
    if cohesion < 0.0 {
        return Err(CalculationError::invalid_input(
            "cohesion",
            cohesion,
            "must not be negative",
        ));
    }

    let angle = degrees_to_radians(45.0 + friction_angle / 2.0);
    let repulsion = PI * cohesion * angle.tan().powi(3);
    ensure_finite("soil_repulsion", repulsion)
}

/// Repulsion of every layer paired with its depth
pub fn soil_repulsions(foundation: &FoundationData) -> Result<Vec<(f64, f64)>, CalculationError> {
    foundation
        .layers()
        .iter()
        .map(|layer| soil_repulsion(layer).map(|repulsion| (repulsion, layer.depth)))
        .collect()
}

/// `Σ(value · weight) / Σ(weight)` over `(value, weight)` pairs
pub fn weighted_average(values_with_weight: &[(f64, f64)]) -> Result<f64, CalculationError> {
    if values_with_weight.is_empty() {
        return Err(CalculationError::invalid_input(
            "weights",
            "[]",
            "cannot average an empty sequence",
        ));
    }

    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;
    for &(value, weight) in values_with_weight {
        ensure_finite("value", value)?;
        ensure_finite("weight", weight)?;
        weighted_sum += value * weight;
        weight_sum += weight;
    }

    if weight_sum == 0.0 {
        return Err(CalculationError::invalid_input(
            "weights",
            weight_sum,
            "sum of weights must not be zero",
        ));
    }

    ensure_finite("weighted_sum", weighted_sum)?;
    ensure_finite("weighted_average", weighted_sum / weight_sum)
}

/// Reduce the soil profile to one repulsion and one deformation modulus
///
/// A single layer is used directly and never goes through the averager.
pub fn representative_soil(foundation: &FoundationData) -> Result<RepresentativeSoil, CalculationError> {
    for layer in foundation.layers() {
        layer.validate()?;
    }
    debug!(
        "Reducing {} soil layers, total depth {:.3}",
        foundation.len(),
        foundation.total_depth()
    );

    match foundation.layers() {
        [] => Err(CalculationError::invalid_input(
            "soil_layers",
            0,
            "at least one soil layer is required",
        )),
        [layer] => Ok(RepresentativeSoil {
            averaging: SoilAveraging::SingleLayer,
            soil_repulsion: soil_repulsion(layer)?,
            deformation_modulus: layer.deformation_modulus,
        }),
        layers => {
            let repulsions = soil_repulsions(foundation)?;
            let moduli: Vec<(f64, f64)> = layers
                .iter()
                .map(|l| (l.deformation_modulus, l.depth))
                .collect();

            Ok(RepresentativeSoil {
                averaging: SoilAveraging::DepthWeighted,
                soil_repulsion: weighted_average(&repulsions)?,
                deformation_modulus: weighted_average(&moduli)?,
            })
        }
    }
}
