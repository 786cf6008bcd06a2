//! Soil and structural mechanics of a capped pile
//!
//! The pile is treated as a rigid body rotating about a point at depth Z0.
//! Soil resists that rotation through lateral rebound above and below the
//! pivot, vertical backstop under the cap and the shaft, and friction at the
//! cap base.

pub mod soil;
pub mod coefficients;
pub mod moments;

pub use soil::*;
pub use coefficients::*;
pub use moments::*;
