//! Input records for a pile check
//!
//! All records are plain values: built once per calculation, never mutated,
//! and dropped when the calculation returns.

pub mod pile;
pub mod foundation;
pub mod loads;

pub use pile::PileData;
pub use foundation::{FoundationData, SoilLayer};
pub use loads::{LimitState, LoadData};
