pub mod types;
pub mod error;
pub mod models;
pub mod physics;
pub mod calculation;
pub mod input;

pub use error::CalculationError;
pub use models::*;
pub use calculation::{
    CalculationConfig, CalculationResult, MainCalculation, PileCalculationContext,
    PileCalculationStrategy, StrategyKind,
};
pub use input::{DataSupply, InputDocument, InputError};
