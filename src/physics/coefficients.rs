//! Geometric coefficients and the depth of the pile's rotation point

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::models::PileData;

/// Coefficients A, B and C of the pivot-depth equation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometricCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl GeometricCoefficients {
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }
}

/// Compute A, B and C from pile geometry and loading
///
/// # Arguments
/// * `pile` - Pile and cap geometry
/// * `alpha` - Cap width over pile diameter
/// * `betta` - Lateral friction coefficient
/// * `height` - Height of the lateral load resultant, `M / Q`
pub fn calculate_coefficients(
    pile: &PileData,
    alpha: f64,
    betta: f64,
    height: f64,
) -> GeometricCoefficients {
    let d = pile.pile_diameter;
    let l = pile.pile_length;
    let h_cap = pile.pile_cap_height;

    let a = h_cap * (l - h_cap.powi(2) / 2.0) * (alpha - 1.0)
        + (PI * d.powi(2) / 12.0) * (1.0 + 0.25 * (alpha.powi(2) - 1.0) * (2.0 * alpha - 1.0))
        + betta * (PI * d / 4.0) * (alpha.powi(2) - 1.0) * (l - h_cap);

    let b = h_cap * (alpha - 1.0) + betta * (PI * d / 4.0) * alpha.powi(2);

    // Kept as an absolute value so the pivot-depth root stays real
    let c = (l.powi(2) + 2.0 * height * (l - b) - 2.0 * l * b - 2.0 * a).abs();

    GeometricCoefficients { a, b, c }
}

/// Root of the pivot-depth equation before the cap clamp
pub fn unclamped_pivot_depth(height: f64, coefficients: &GeometricCoefficients) -> f64 {
    (height.powi(2) + 0.5 * coefficients.c).sqrt() - height
}

/// Depth Z0 of the conditional rotation point
///
/// The cap is rigid, so a pivot that falls inside it is moved up to the
/// ground surface (depth 0).
pub fn pivot_depth(height: f64, coefficients: &GeometricCoefficients, pile: &PileData) -> f64 {
    let depth = unclamped_pivot_depth(height, coefficients);
    if depth <= pile.pile_cap_height {
        0.0
    } else {
        depth
    }
}
