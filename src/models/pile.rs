use serde::{Deserialize, Serialize};

use crate::error::{ensure_positive, CalculationError};

/// Geometry of a single pile and its cap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PileData {
    /// Diameter of the pile shaft
    pub pile_diameter: f64,

    /// Embedded length of the pile
    pub pile_length: f64,

    /// Width of the (square) cap
    pub pile_cap_width: f64,

    /// Height of the cap
    pub pile_cap_height: f64,

    /// Weight of the cap
    pub pile_cap_weight: f64,
}

impl PileData {
    pub fn new(
        pile_diameter: f64,
        pile_length: f64,
        pile_cap_width: f64,
        pile_cap_height: f64,
        pile_cap_weight: f64,
    ) -> Self {
        Self {
            pile_diameter,
            pile_length,
            pile_cap_width,
            pile_cap_height,
            pile_cap_weight,
        }
    }

    /// Check that every dimension is a finite positive number
    ///
    /// A cap narrower than the pile is accepted here. It only produces
    /// `alpha < 1`, which the strategy logs.
    pub fn validate(&self) -> Result<(), CalculationError> {
        ensure_positive("pile_diameter", self.pile_diameter)?;
        ensure_positive("pile_length", self.pile_length)?;
        ensure_positive("pile_cap_width", self.pile_cap_width)?;
        ensure_positive("pile_cap_height", self.pile_cap_height)?;
        ensure_positive("pile_cap_weight", self.pile_cap_weight)?;
        Ok(())
    }

    /// Ratio of cap width to pile diameter
    pub fn alpha(&self) -> f64 {
        self.pile_cap_width / self.pile_diameter
    }

    /// Whether the cap is at least as wide as the pile
    pub fn has_proper_cap(&self) -> bool {
        self.pile_cap_width >= self.pile_diameter
    }

    /// Markdown block for display
    pub fn summary(&self) -> String {
        let mut s = String::new();
        s.push_str("### Pile Data\n");
        s.push_str(&format!("- **Diameter**: {} m\n", self.pile_diameter));
        s.push_str(&format!("- **Length**: {} m\n", self.pile_length));
        s.push_str(&format!("- **Cap Width**: {} m\n", self.pile_cap_width));
        s.push_str(&format!("- **Cap Height**: {} m\n", self.pile_cap_height));
        s.push_str(&format!("- **Cap Weight**: {:.2} t\n", self.pile_cap_weight));
        s
    }
}
