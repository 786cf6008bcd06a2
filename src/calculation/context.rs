use tracing::debug;

use crate::calculation::{
    strategy_from_config, CalculationConfig, CalculationResult, MainCalculation,
    PileCalculationStrategy, StrategyKind,
};
use crate::error::CalculationError;
use crate::input::{DataSupply, InputError};
use crate::models::{FoundationData, LoadData, PileData};

/// Holds the active strategy and runs calculations through it
///
/// Callers swap formula sets with [`set_strategy`](Self::set_strategy)
/// without changing how calculations are dispatched.
pub struct PileCalculationContext {
    strategy: Box<dyn PileCalculationStrategy>,
}

impl Default for PileCalculationContext {
    fn default() -> Self {
        Self::new(Box::new(MainCalculation::new()))
    }
}

impl std::fmt::Debug for PileCalculationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PileCalculationContext")
            .field("strategy", &self.strategy.kind())
            .finish()
    }
}

impl PileCalculationContext {
    pub fn new(strategy: Box<dyn PileCalculationStrategy>) -> Self {
        Self { strategy }
    }

    /// Context running whatever strategy the configuration selects
    pub fn from_config(config: &CalculationConfig) -> Result<Self, CalculationError> {
        Ok(Self::new(strategy_from_config(config)?))
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn PileCalculationStrategy>) {
        debug!("Switching calculation strategy to '{}'", strategy.kind());
        self.strategy = strategy;
    }

    pub fn strategy_kind(&self) -> StrategyKind {
        self.strategy.kind()
    }

    pub fn execute_calculation(
        &self,
        pile_data: &PileData,
        load_data: &LoadData,
        foundation_data: &FoundationData,
    ) -> Result<CalculationResult, CalculationError> {
        self.strategy.calculate(pile_data, load_data, foundation_data)
    }

    /// Pull the three records from a data source and run the calculation
    pub fn execute_supplied(&self, supply: &dyn DataSupply) -> Result<CalculationResult, InputError> {
        let pile_data = supply.pile_data()?;
        let load_data = supply.load_data()?;
        let foundation_data = supply.foundation_data()?;
        Ok(self.execute_calculation(&pile_data, &load_data, &foundation_data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LimitState, SoilLayer};

    /// Strategy that always passes, to check dispatch
    struct AlwaysPasses;

    impl PileCalculationStrategy for AlwaysPasses {
        fn kind(&self) -> StrategyKind {
            StrategyKind::Main
        }

        fn calculate(
            &self,
            pile_data: &PileData,
            load_data: &LoadData,
            foundation_data: &FoundationData,
        ) -> Result<CalculationResult, CalculationError> {
            let mut result = MainCalculation::new().calculate(pile_data, load_data, foundation_data)?;
            result.is_passed = true;
            Ok(result)
        }
    }

    struct Fixed;

    impl DataSupply for Fixed {
        fn pile_data(&self) -> Result<PileData, InputError> {
            Ok(PileData::new(0.5, 3.0, 1.0, 0.5, 2.0))
        }

        fn load_data(&self) -> Result<LoadData, InputError> {
            Ok(LoadData::new(
                LimitState::new(50.0, 10.0, 100.0),
                LimitState::new(40.0, 8.0, 80.0),
            ))
        }

        fn foundation_data(&self) -> Result<FoundationData, InputError> {
            Ok(FoundationData::new(vec![SoilLayer::new(30.0, 20.0, 15000.0, 1.9, 3.0)]))
        }
    }

    #[test]
    fn test_set_strategy() {
        let supply = Fixed;
        let mut context = PileCalculationContext::default();
        assert!(!context.execute_supplied(&supply).unwrap().is_passed);

        context.set_strategy(Box::new(AlwaysPasses));
        assert!(context.execute_supplied(&supply).unwrap().is_passed);
    }

    #[test]
    fn test_errors_propagate() {
        let context = PileCalculationContext::default();
        let result = context.execute_calculation(
            &PileData::new(0.5, 3.0, 1.0, 0.5, 2.0),
            &LoadData::new(LimitState::new(50.0, 0.0, 1.0), LimitState::new(0.0, 0.0, 0.0)),
            &FoundationData::new(vec![SoilLayer::new(30.0, 20.0, 15000.0, 1.9, 3.0)]),
        );
        assert!(matches!(result, Err(CalculationError::DivisionByZero { .. })));
    }

    #[test]
    fn test_from_config() {
        let context = PileCalculationContext::from_config(&CalculationConfig::default()).unwrap();
        assert_eq!(context.strategy_kind(), StrategyKind::Main);
        assert!(format!("{:?}", context).contains("Main"));
    }

    #[test]
    fn test_parallel_calculations() {
        let context = PileCalculationContext::default();
        let supply = Fixed;
        let expected = context.execute_supplied(&supply).unwrap();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| context.execute_supplied(&Fixed).unwrap()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
