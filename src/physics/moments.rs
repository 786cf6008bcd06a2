//! Reactive moments resisting rotation of a capped pile
//!
//! Each function returns one signed contribution (force · length). The
//! strategy sums them; nothing here branches on the pivot depth.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::models::PileData;

/// Lateral rebound along the height of the cap
pub fn side_cap_moment(pile: &PileData, soil_repulsion: f64) -> f64 {
    soil_repulsion
        * pile.pile_cap_width
        * pile.pile_cap_height
        * (pile.pile_length - pile.pile_cap_height / 2.0)
}

/// Lateral support of the shaft above the rotation point
pub fn top_side_moment(pile: &PileData, pivot_depth: f64, soil_repulsion: f64) -> f64 {
    soil_repulsion
        * pile.pile_diameter
        * (pivot_depth - pile.pile_cap_height)
        * (pile.pile_length - pile.pile_cap_height / 2.0 - pivot_depth / 2.0)
}

/// Lateral rebound of the shaft below the rotation point
pub fn bottom_side_moment(pile: &PileData, pivot_depth: f64, soil_repulsion: f64) -> f64 {
    -soil_repulsion * pile.pile_diameter * (pile.pile_length - pivot_depth).powi(2) / 2.0
}

/// Vertical backstop under the square cap
pub fn vert_cap_moment(pile: &PileData, alpha: f64, soil_repulsion: f64) -> f64 {
    (pile.pile_cap_width - PI * pile.pile_diameter.powi(2) / 4.0) * soil_repulsion * (2.0 * alpha - 1.0)
        / 6.0
}

/// Vertical backstop under the pile toe
pub fn vert_pile_moment(pile: &PileData, soil_repulsion: f64) -> f64 {
    PI * pile.pile_diameter.powi(3) / 12.0 * soil_repulsion
}

/// Friction at the contact between the cap base and the soil
pub fn contact_moment(pile: &PileData, friction_force: f64) -> f64 {
    (pile.pile_cap_width.powi(2) - PI * pile.pile_diameter.powi(2) / 4.0)
        * friction_force
        * (pile.pile_length - pile.pile_cap_height)
}

/// The six reactive moment contributions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReactiveMoments {
    pub side_cap_moment: f64,
    pub top_side_moment: f64,
    pub bottom_side_moment: f64,
    pub vert_cap_moment: f64,
    pub vert_pile_moment: f64,
    pub contact_moment: f64,
}

impl ReactiveMoments {
    /// Evaluate every contribution for one pile
    pub fn calculate(
        pile: &PileData,
        soil_repulsion: f64,
        friction_force: f64,
        alpha: f64,
        pivot_depth: f64,
    ) -> Self {
        Self {
            side_cap_moment: side_cap_moment(pile, soil_repulsion),
            top_side_moment: top_side_moment(pile, pivot_depth, soil_repulsion),
            bottom_side_moment: bottom_side_moment(pile, pivot_depth, soil_repulsion),
            vert_cap_moment: vert_cap_moment(pile, alpha, soil_repulsion),
            vert_pile_moment: vert_pile_moment(pile, soil_repulsion),
            contact_moment: contact_moment(pile, friction_force),
        }
    }

    /// Contributions by name, in summation order
    pub fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("side_cap_moment", self.side_cap_moment),
            ("top_side_moment", self.top_side_moment),
            ("bottom_side_moment", self.bottom_side_moment),
            ("vert_cap_moment", self.vert_cap_moment),
            ("vert_pile_moment", self.vert_pile_moment),
            ("contact_moment", self.contact_moment),
        ]
    }

    pub fn sum(&self) -> f64 {
        self.side_cap_moment
            + self.top_side_moment
            + self.bottom_side_moment
            + self.vert_cap_moment
            + self.vert_pile_moment
            + self.contact_moment
    }
}
