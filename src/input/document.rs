use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::input::{
    collect_soil_layers, read_soil_layers_csv_file, DataSupply, InputError, SoilLayerRow,
    DEFAULT_MAX_SOIL_ROWS,
};
use crate::models::{FoundationData, LoadData, PileData};

fn default_max_soil_rows() -> usize {
    DEFAULT_MAX_SOIL_ROWS
}

/// All inputs of one calculation in a single TOML or JSON document
///
/// ```toml
/// [pile]
/// pile_diameter = 0.5
/// pile_length = 3.0
/// pile_cap_width = 1.0
/// pile_cap_height = 0.5
/// pile_cap_weight = 2.0
///
/// [loads.first_limit_state]
/// M = 50.0
/// Q = 10.0
/// N = 100.0
///
/// [loads.second_limit_state]
/// M = 40.0
/// Q = 8.0
/// N = 80.0
///
/// [[soil_layers]]
/// friction_angle = 30.0
/// cohesion = 20.0
/// deformation_modulus = 15000.0
/// density = 1.9
/// depth = 3.0
/// ```
///
/// Instead of inline `[[soil_layers]]`, `soil_layers_csv` may point to a CSV
/// file; a relative path is resolved against the document's directory.
#[derive(Debug, Clone, Deserialize)]
pub struct InputDocument {
    pub pile: PileData,

    pub loads: LoadData,

    #[serde(default)]
    pub soil_layers: Vec<SoilLayerRow>,

    #[serde(default)]
    pub soil_layers_csv: Option<PathBuf>,

    #[serde(default = "default_max_soil_rows")]
    pub max_soil_rows: usize,

    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl InputDocument {
    pub fn from_toml_str(s: &str) -> Result<Self, InputError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load from a file, picking the format by extension (`.json` or TOML)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)?;

        let mut document = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&s)?,
            _ => Self::from_toml_str(&s)?,
        };
        document.base_dir = path.parent().map(Path::to_path_buf);
        Ok(document)
    }

    fn csv_path(&self, csv: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if csv.is_relative() => base.join(csv),
            _ => csv.to_path_buf(),
        }
    }
}

impl DataSupply for InputDocument {
    fn pile_data(&self) -> Result<PileData, InputError> {
        Ok(self.pile)
    }

    fn load_data(&self) -> Result<LoadData, InputError> {
        Ok(self.loads)
    }

    fn foundation_data(&self) -> Result<FoundationData, InputError> {
        match &self.soil_layers_csv {
            Some(csv) => read_soil_layers_csv_file(self.csv_path(csv), self.max_soil_rows),
            None => collect_soil_layers(self.soil_layers.iter().copied().map(Ok), self.max_soil_rows),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::PileCalculationContext;
    use crate::models::LimitState;
    use approx::assert_relative_eq;

    const DOCUMENT: &str = r#"
[pile]
pile_diameter = 0.5
pile_length = 3.0
pile_cap_width = 1.0
pile_cap_height = 0.5
pile_cap_weight = 2.0

[loads.first_limit_state]
M = 50.0
Q = 10.0
N = 100.0

[loads.second_limit_state]
M = 40.0
Q = 8.0
N = 80.0

[[soil_layers]]
friction_angle = 30.0
cohesion = 20.0
deformation_modulus = 15000.0
density = 1.9
depth = 1.6

[[soil_layers]]
friction_angle = 20.0
cohesion = 10.0
deformation_modulus = 9000.0
density = 1.8
depth = 1.4

[[soil_layers]]

[[soil_layers]]
friction_angle = 25.0
cohesion = 5.0
deformation_modulus = 4000.0
density = 1.7
depth = 2.0
"#;

    #[test]
    fn test_toml_document() {
        let document = InputDocument::from_toml_str(DOCUMENT).unwrap();

        assert_eq!(document.pile_data().unwrap(), PileData::new(0.5, 3.0, 1.0, 0.5, 2.0));
        assert_eq!(
            document.load_data().unwrap().second_limit_state,
            LimitState::new(40.0, 8.0, 80.0)
        );
        assert_eq!(document.max_soil_rows, DEFAULT_MAX_SOIL_ROWS);

        // the blank [[soil_layers]] table ends the list
        let foundation = document.foundation_data().unwrap();
        assert_eq!(foundation.len(), 2);
    }

    #[test]
    fn test_json_document() {
        let json = r#"{
            "pile": {"pile_diameter": 0.5, "pile_length": 3.0, "pile_cap_width": 1.0,
                     "pile_cap_height": 0.5, "pile_cap_weight": 2.0},
            "loads": {"first_limit_state": {"M": 50.0, "Q": 10.0, "N": 100.0},
                      "second_limit_state": {"moment": 40.0, "shear": 8.0, "axial": 80.0}},
            "soil_layers": [
                {"friction_angle": 30.0, "cohesion": 20.0, "deformation_modulus": 15000.0,
                 "density": 1.9, "depth": 3.0}
            ],
            "max_soil_rows": 10
        }"#;
        let document = InputDocument::from_json_str(json).unwrap();

        assert_eq!(document.max_soil_rows, 10);
        assert_eq!(document.foundation_data().unwrap().len(), 1);
    }

    #[test]
    fn test_missing_section() {
        assert!(matches!(
            InputDocument::from_toml_str("[pile]\npile_diameter = 0.5\n"),
            Err(InputError::TomlError(_))
        ));
    }

    #[test]
    fn test_file_with_relative_csv() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("layers.csv"),
            "friction_angle,cohesion,deformation_modulus,density,depth\n30,20,15000,1.9,3.0\n",
        )
        .unwrap();

        let head = DOCUMENT.split("[[soil_layers]]").next().unwrap();
        let toml = format!("soil_layers_csv = \"layers.csv\"\n{}", head);
        let path = dir.path().join("pile.toml");
        std::fs::write(&path, toml).unwrap();

        let document = InputDocument::from_file(&path).unwrap();
        let result = PileCalculationContext::default().execute_supplied(&document).unwrap();

        assert_relative_eq!(
            result.calculation_variables.sum_moment_with_coefficient,
            469.9594136941407,
            epsilon = 1e-9
        );
        assert!(!result.is_passed);
    }

    #[test]
    fn test_document_without_layers_fails_calculation() {
        let head = DOCUMENT.split("[[soil_layers]]").next().unwrap();
        let document = InputDocument::from_toml_str(head).unwrap();

        assert!(matches!(
            PileCalculationContext::default().execute_supplied(&document),
            Err(InputError::Calculation(crate::CalculationError::InvalidInput { .. }))
        ));
    }
}
