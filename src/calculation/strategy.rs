use tracing::{debug, info, warn};

use crate::calculation::{CalculationConfig, CalculationResult, CalculationVariables, StrategyKind};
use crate::error::{ensure_finite, CalculationError};
use crate::models::{FoundationData, LoadData, PileData};
use crate::physics::{
    calculate_coefficients, pivot_depth, representative_soil, ReactiveMoments,
};

/// Core trait every formula set must implement
pub trait PileCalculationStrategy: Send + Sync {
    /// Name under which the strategy is selected
    fn kind(&self) -> StrategyKind;

    /// Run the moment check and return the full breakdown
    fn calculate(
        &self,
        pile_data: &PileData,
        load_data: &LoadData,
        foundation_data: &FoundationData,
    ) -> Result<CalculationResult, CalculationError>;
}

/// Verdict rule: the reduced reactive moment must stay strictly below M
pub(crate) fn is_passed(sum_moment_with_coefficient: f64, design_moment: f64) -> bool {
    sum_moment_with_coefficient < design_moment
}

/// Rigid-pile moment check with a fixed lateral friction coefficient
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MainCalculation {
    config: CalculationConfig,
}

impl MainCalculation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build with overridden design constants
    pub fn with_config(config: CalculationConfig) -> Result<Self, CalculationError> {
        config.validate()?;
        if config.strategy != StrategyKind::Main {
            return Err(CalculationError::configuration(format!(
                "configuration selects '{}', not '{}'",
                config.strategy,
                StrategyKind::Main
            )));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &CalculationConfig {
        &self.config
    }
}

impl PileCalculationStrategy for MainCalculation {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Main
    }

    fn calculate(
        &self,
        pile_data: &PileData,
        load_data: &LoadData,
        foundation_data: &FoundationData,
    ) -> Result<CalculationResult, CalculationError> {
        pile_data.validate()?;
        load_data.validate()?;
        let loads = load_data.first_limit_state;
        let height = loads.height()?;
        let soil = representative_soil(foundation_data)?;

        if !pile_data.has_proper_cap() {
            warn!(
                "Cap width {} is smaller than pile diameter {}, alpha < 1",
                pile_data.pile_cap_width, pile_data.pile_diameter
            );
        }

        let betta = self.config.betta;
        let alpha = pile_data.alpha();
        let friction_force = betta * soil.soil_repulsion;

        let coefficients = calculate_coefficients(pile_data, alpha, betta, height);
        ensure_finite("coefficient_c", coefficients.c)?;
        let pivot_depth = ensure_finite("pivot_depth", pivot_depth(height, &coefficients, pile_data))?;

        debug!(
            "Soil ({:?}): repulsion={:.4}, def_module={:.4}; alpha={:.4}, height={:.4}, \
             A={:.4}, B={:.4}, C={:.4}, Z0={:.4}",
            soil.averaging,
            soil.soil_repulsion,
            soil.deformation_modulus,
            alpha,
            height,
            coefficients.a,
            coefficients.b,
            coefficients.c,
            pivot_depth
        );

        let moments = ReactiveMoments::calculate(
            pile_data,
            soil.soil_repulsion,
            friction_force,
            alpha,
            pivot_depth,
        );
        for (name, value) in moments.entries() {
            ensure_finite(name, value)?;
        }
        let sum_moment = ensure_finite("sum_moment", moments.sum())?;
        let sum_moment_with_coefficient = ensure_finite(
            "sum_moment_with_coefficient",
            self.config.gamma_c * sum_moment / self.config.gamma_n,
        )?;
        let is_passed = is_passed(sum_moment_with_coefficient, loads.moment);

        info!(
            "Pile check {}: reduced moment {:.3} vs M = {:.3}",
            if is_passed { "passed" } else { "failed" },
            sum_moment_with_coefficient,
            loads.moment
        );

        Ok(CalculationResult {
            strategy: self.kind(),
            applied_loads: loads,
            calculation_variables: CalculationVariables {
                soil_averaging: soil.averaging,
                soil_repulsion: soil.soil_repulsion,
                deformation_modulus: soil.deformation_modulus,
                betta,
                alpha,
                friction_force,
                height,
                coefficients,
                pivot_depth,
                moments,
                sum_moment,
                sum_moment_with_coefficient,
            },
            is_passed,
        })
    }
}

/// Instantiate the strategy a configuration selects
pub fn strategy_from_config(
    config: &CalculationConfig,
) -> Result<Box<dyn PileCalculationStrategy>, CalculationError> {
    match config.strategy {
        StrategyKind::Main => Ok(Box::new(MainCalculation::with_config(*config)?)),
    }
}
