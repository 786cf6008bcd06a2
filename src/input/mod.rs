//! Data supply for the calculation
//!
//! A [`DataSupply`] yields the three input records of one calculation. Soil
//! layers arrive as rows that may have blank cells; the scan stops at the
//! first fully blank row or after `max_rows` rows, whichever comes first.

pub mod document;
pub mod csv_layers;

pub use document::*;
pub use csv_layers::*;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::CalculationError;
use crate::models::{FoundationData, LoadData, PileData, SoilLayer};

/// Default bound on the soil-layer scan (rows 3 to 99 of the input sheet)
pub const DEFAULT_MAX_SOIL_ROWS: usize = 97;

/// Error types for data supply
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Soil layer row {row} is missing '{field}'")]
    IncompleteSoilLayer { row: usize, field: &'static str },

    #[error(transparent)]
    Calculation(#[from] CalculationError),
}

/// Source of the records for one calculation
pub trait DataSupply {
    fn pile_data(&self) -> Result<PileData, InputError>;

    fn load_data(&self) -> Result<LoadData, InputError>;

    fn foundation_data(&self) -> Result<FoundationData, InputError>;
}

/// One soil-layer row as read from a table, blank cells as `None`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SoilLayerRow {
    pub friction_angle: Option<f64>,
    pub cohesion: Option<f64>,
    pub deformation_modulus: Option<f64>,
    pub density: Option<f64>,
    pub depth: Option<f64>,
}

impl SoilLayerRow {
    /// Terminator predicate: all five cells are blank
    pub fn is_empty(&self) -> bool {
        self.friction_angle.is_none()
            && self.cohesion.is_none()
            && self.deformation_modulus.is_none()
            && self.density.is_none()
            && self.depth.is_none()
    }

    /// Convert a fully filled row; `row` is 1-based, for error messages
    pub fn to_layer(&self, row: usize) -> Result<SoilLayer, InputError> {
        let get = |value: Option<f64>, field: &'static str| {
            value.ok_or(InputError::IncompleteSoilLayer { row, field })
        };

        Ok(SoilLayer::new(
            get(self.friction_angle, "friction_angle")?,
            get(self.cohesion, "cohesion")?,
            get(self.deformation_modulus, "deformation_modulus")?,
            get(self.density, "density")?,
            get(self.depth, "depth")?,
        ))
    }
}

impl From<SoilLayer> for SoilLayerRow {
    fn from(layer: SoilLayer) -> Self {
        Self {
            friction_angle: Some(layer.friction_angle),
            cohesion: Some(layer.cohesion),
            deformation_modulus: Some(layer.deformation_modulus),
            density: Some(layer.density),
            depth: Some(layer.depth),
        }
    }
}

/// Scan rows until the first blank one or `max_rows`, whichever is first
///
/// A partially filled row is an error rather than a terminator.
pub fn collect_soil_layers<I>(rows: I, max_rows: usize) -> Result<FoundationData, InputError>
where
    I: IntoIterator<Item = Result<SoilLayerRow, InputError>>,
{
    let mut layers = Vec::new();
    let mut terminated = false;

    for (index, row) in rows.into_iter().take(max_rows).enumerate() {
        let row = row?;
        if row.is_empty() {
            debug!("Soil layer scan stopped at blank row {}", index + 1);
            terminated = true;
            break;
        }
        layers.push(row.to_layer(index + 1)?);
    }

    if !terminated && layers.len() == max_rows {
        warn!(
            "Soil layer scan hit its bound of {} rows without a blank terminator",
            max_rows
        );
    }
    debug!("Collected {} soil layers", layers.len());

    Ok(FoundationData::new(layers))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(depth: f64) -> SoilLayerRow {
        SoilLayer::new(30.0, 20.0, 15000.0, 1.9, depth).into()
    }

    #[test]
    fn test_is_empty() {
        assert!(SoilLayerRow::default().is_empty());
        assert!(!row(1.0).is_empty());

        let partial = SoilLayerRow {
            depth: Some(2.0),
            ..SoilLayerRow::default()
        };
        assert!(!partial.is_empty());
    }

    #[test]
    fn test_scan_stops_at_blank_row() {
        let rows = vec![row(1.0), row(2.0), SoilLayerRow::default(), row(3.0)];
        let foundation = collect_soil_layers(rows.into_iter().map(Ok), DEFAULT_MAX_SOIL_ROWS).unwrap();

        assert_eq!(foundation.len(), 2);
        assert_eq!(foundation.layers()[1].depth, 2.0);
    }

    #[test]
    fn test_scan_bound() {
        let rows = (1..=10).map(|i| Ok(row(i as f64)));
        let foundation = collect_soil_layers(rows, 4).unwrap();
        assert_eq!(foundation.len(), 4);
    }

    #[test]
    fn test_leading_blank_row_gives_empty_foundation() {
        let rows = vec![SoilLayerRow::default(), row(1.0)];
        let foundation = collect_soil_layers(rows.into_iter().map(Ok), DEFAULT_MAX_SOIL_ROWS).unwrap();
        assert!(foundation.is_empty());
    }

    #[test]
    fn test_partial_row_is_rejected() {
        let partial = SoilLayerRow {
            friction_angle: Some(30.0),
            cohesion: Some(20.0),
            ..SoilLayerRow::default()
        };
        let rows = vec![row(1.0), partial];

        match collect_soil_layers(rows.into_iter().map(Ok), DEFAULT_MAX_SOIL_ROWS) {
            Err(InputError::IncompleteSoilLayer { row, field }) => {
                assert_eq!(row, 2);
                assert_eq!(field, "deformation_modulus");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }
}
