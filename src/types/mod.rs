//! Angle handling for soil strength parameters
//!
//! Everything else in the crate is a plain `f64` in whatever units the
//! caller supplies. Friction angles are the one exception: they arrive in
//! degrees and the trigonometry needs radians.

pub use uom::si::f64::Angle;
pub use uom::si::angle::{degree, radian};

/// Build an `Angle` from a value in degrees
#[inline]
pub fn angle_from_degrees(value: f64) -> Angle {
    Angle::new::<degree>(value)
}

/// Convert degrees to radians through `uom`
#[inline]
pub fn degrees_to_radians(value: f64) -> f64 {
    angle_from_degrees(value).get::<radian>()
}
