//! Moment-equilibrium check of a capped pile
//!
//! A [`PileCalculationStrategy`] turns pile, load and soil records into a
//! [`CalculationResult`]. [`MainCalculation`] is the only formula set today;
//! [`StrategyKind`] names it so configuration files can select it.

pub mod config;
pub mod strategy;
pub mod result;
pub mod context;

pub use config::*;
pub use strategy::*;
pub use result::*;
pub use context::*;
