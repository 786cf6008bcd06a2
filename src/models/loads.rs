use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, CalculationError};

/// One combination of applied loads
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LimitState {
    /// Overturning moment M
    #[serde(alias = "M")]
    pub moment: f64,

    /// Shear force Q
    #[serde(alias = "Q")]
    pub shear: f64,

    /// Axial force N
    #[serde(alias = "N")]
    pub axial: f64,
}

impl LimitState {
    pub fn new(moment: f64, shear: f64, axial: f64) -> Self {
        Self { moment, shear, axial }
    }

    pub fn validate(&self) -> Result<(), CalculationError> {
        ensure_finite("M", self.moment)?;
        ensure_finite("Q", self.shear)?;
        ensure_finite("N", self.axial)?;
        Ok(())
    }

    /// Height of the resultant lateral load above the ground, `M / Q`
    pub fn height(&self) -> Result<f64, CalculationError> {
        self.validate()?;
        if self.shear == 0.0 {
            return Err(CalculationError::division_by_zero("M", "Q"));
        }
        Ok(self.moment / self.shear)
    }
}

/// Load combinations applied to the pile
///
/// Only the first limit state drives the moment check. The second one is
/// carried along for callers that report it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadData {
    pub first_limit_state: LimitState,
    pub second_limit_state: LimitState,
}

impl LoadData {
    pub fn new(first_limit_state: LimitState, second_limit_state: LimitState) -> Self {
        Self {
            first_limit_state,
            second_limit_state,
        }
    }

    /// Both limit states must be finite, even though only the first is used
    pub fn validate(&self) -> Result<(), CalculationError> {
        self.first_limit_state.validate()?;
        self.second_limit_state.validate()
    }
}
