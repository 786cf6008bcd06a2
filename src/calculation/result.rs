use serde::{Deserialize, Serialize};

use crate::calculation::StrategyKind;
use crate::models::LimitState;
use crate::physics::{GeometricCoefficients, ReactiveMoments, SoilAveraging};

/// Every intermediate value of one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationVariables {
    /// How the soil profile was reduced to one set of values
    pub soil_averaging: SoilAveraging,

    pub soil_repulsion: f64,

    #[serde(rename = "def_module")]
    pub deformation_modulus: f64,

    pub betta: f64,

    pub alpha: f64,

    pub friction_force: f64,

    /// Height of the lateral load resultant, `M / Q`
    pub height: f64,

    pub coefficients: GeometricCoefficients,

    /// Depth of the rotation point after the cap clamp
    pub pivot_depth: f64,

    #[serde(flatten)]
    pub moments: ReactiveMoments,

    pub sum_moment: f64,

    /// Summed moment scaled by γc / γn
    pub sum_moment_with_coefficient: f64,
}

/// Outcome of a pile check: full breakdown plus the verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Formula set that produced this result
    pub strategy: StrategyKind,

    /// Limit state the check was run against
    pub applied_loads: LimitState,

    pub calculation_variables: CalculationVariables,

    /// `sum_moment_with_coefficient < M`
    pub is_passed: bool,
}

impl CalculationResult {
    /// Design moment minus the reduced reactive moment
    ///
    /// Positive exactly when the check passes.
    pub fn margin(&self) -> f64 {
        self.applied_loads.moment - self.calculation_variables.sum_moment_with_coefficient
    }

    /// Scalar intermediates by name, in pipeline order
    pub fn entries(&self) -> Vec<(&'static str, f64)> {
        let v = &self.calculation_variables;
        let mut entries = vec![
            ("soil_repulsion", v.soil_repulsion),
            ("def_module", v.deformation_modulus),
            ("betta", v.betta),
            ("alpha", v.alpha),
            ("friction_force", v.friction_force),
            ("height", v.height),
            ("coefficient_a", v.coefficients.a),
            ("coefficient_b", v.coefficients.b),
            ("coefficient_c", v.coefficients.c),
            ("pivot_depth", v.pivot_depth),
        ];
        entries.extend(v.moments.entries());
        entries.push(("sum_moment", v.sum_moment));
        entries.push(("sum_moment_with_coefficient", v.sum_moment_with_coefficient));
        entries
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Format results for display
    pub fn summary(&self) -> String {
        let mut s = String::new();
        s.push_str("Pile Moment Check:\n");
        s.push_str(&format!(
            "\nStatus: {}\n",
            if self.is_passed { "PASSED" } else { "FAILED" }
        ));
        s.push_str(&format!(
            " Applied: M = {:.3}, Q = {:.3}, N = {:.3}\n",
            self.applied_loads.moment, self.applied_loads.shear, self.applied_loads.axial
        ));
        s.push_str(&format!(
            " Reduced reactive moment: {:.3}\n",
            self.calculation_variables.sum_moment_with_coefficient
        ));
        s.push_str(&format!(" Margin: {:.3}\n", self.margin()));

        s.push_str("\nIntermediate values:\n");
        for (name, value) in self.entries() {
            s.push_str(&format!(" {}: {:.4}\n", name, value));
        }
        s
    }
}
