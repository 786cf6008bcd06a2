use std::io;
use std::path::Path;

use crate::input::{collect_soil_layers, InputError, SoilLayerRow};
use crate::models::FoundationData;

/// Read soil layers from CSV
///
/// The header row names the columns `friction_angle`, `cohesion`,
/// `deformation_modulus`, `density` and `depth`. Blank cells are absent
/// values; a row of blank cells (`,,,,`) ends the list. Lines with no
/// fields at all are skipped by the reader and do not terminate the scan.
pub fn read_soil_layers_csv<R: io::Read>(reader: R, max_rows: usize) -> Result<FoundationData, InputError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let rows = csv_reader
        .deserialize::<SoilLayerRow>()
        .map(|row| row.map_err(InputError::from));

    collect_soil_layers(rows, max_rows)
}

/// Read soil layers from a CSV file
pub fn read_soil_layers_csv_file(path: impl AsRef<Path>, max_rows: usize) -> Result<FoundationData, InputError> {
    let file = std::fs::File::open(path)?;
    read_soil_layers_csv(io::BufReader::new(file), max_rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::DEFAULT_MAX_SOIL_ROWS;
    use approx::assert_relative_eq;

    const LAYERS: &str = "\
friction_angle,cohesion,deformation_modulus,density,depth
30, 20, 15000, 1.9, 1.6
20, 10, 9000, 1.8, 1.4
,,,,
25, 5, 4000, 1.7, 2.0
";

    #[test]
    fn test_read_until_blank_row() {
        let foundation = read_soil_layers_csv(LAYERS.as_bytes(), DEFAULT_MAX_SOIL_ROWS).unwrap();

        assert_eq!(foundation.len(), 2);
        assert_relative_eq!(foundation.layers()[0].friction_angle, 30.0);
        assert_relative_eq!(foundation.layers()[1].deformation_modulus, 9000.0);
        assert_relative_eq!(foundation.total_depth(), 3.0);
    }

    #[test]
    fn test_read_bounded() {
        let foundation = read_soil_layers_csv(LAYERS.as_bytes(), 1).unwrap();
        assert_eq!(foundation.len(), 1);
    }

    #[test]
    fn test_partial_row() {
        let csv = "\
friction_angle,cohesion,deformation_modulus,density,depth
30,20,,1.9,1.6
";
        assert!(matches!(
            read_soil_layers_csv(csv.as_bytes(), DEFAULT_MAX_SOIL_ROWS),
            Err(InputError::IncompleteSoilLayer { row: 1, field: "deformation_modulus" })
        ));
    }

    #[test]
    fn test_bad_number() {
        let csv = "\
friction_angle,cohesion,deformation_modulus,density,depth
thirty,20,15000,1.9,1.6
";
        assert!(matches!(
            read_soil_layers_csv(csv.as_bytes(), DEFAULT_MAX_SOIL_ROWS),
            Err(InputError::CsvError(_))
        ));
    }

    #[test]
    fn test_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layers.csv");
        std::fs::write(&path, LAYERS).unwrap();

        let foundation = read_soil_layers_csv_file(&path, DEFAULT_MAX_SOIL_ROWS).unwrap();
        assert_eq!(foundation.len(), 2);

        assert!(matches!(
            read_soil_layers_csv_file(dir.path().join("missing.csv"), DEFAULT_MAX_SOIL_ROWS),
            Err(InputError::IoError(_))
        ));
    }
}
