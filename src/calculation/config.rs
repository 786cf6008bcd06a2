use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalculationError;

/// Lateral friction coefficient between cap base and soil
pub const DEFAULT_BETTA: f64 = 0.15;

/// Working-conditions factor γc
pub const DEFAULT_GAMMA_C: f64 = 0.9;

/// Reliability factor γn
pub const DEFAULT_GAMMA_N: f64 = 1.1;

/// Available formula sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StrategyKind {
    #[default]
    Main,
}

impl StrategyKind {
    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::Main => "main",
        }
    }
}

impl FromStr for StrategyKind {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "main" | "Main" | "MAIN" => Ok(StrategyKind::Main),
            other => Err(CalculationError::configuration(format!(
                "unknown calculation strategy '{}'",
                other
            ))),
        }
    }
}

impl TryFrom<String> for StrategyKind {
    type Error = CalculationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StrategyKind> for String {
    fn from(kind: StrategyKind) -> Self {
        kind.name().to_string()
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Design constants of a calculation
///
/// The defaults are the fixed values of the main formula set. They live
/// here so that an alternate design code can override them from a file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationConfig {
    /// Formula set to run
    pub strategy: StrategyKind,

    /// Lateral friction coefficient
    pub betta: f64,

    /// Working-conditions factor γc
    pub gamma_c: f64,

    /// Reliability factor γn
    pub gamma_n: f64,
}

impl Default for CalculationConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Main,
            betta: DEFAULT_BETTA,
            gamma_c: DEFAULT_GAMMA_C,
            gamma_n: DEFAULT_GAMMA_N,
        }
    }
}

impl CalculationConfig {
    /// Parse from a TOML document; missing keys take their defaults
    pub fn from_toml_str(s: &str) -> Result<Self, CalculationError> {
        let config: Self = toml::from_str(s)
            .map_err(|e| CalculationError::configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, CalculationError> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| {
            CalculationError::configuration(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&s)
    }

    pub fn validate(&self) -> Result<(), CalculationError> {
        if !self.betta.is_finite() || self.betta < 0.0 {
            return Err(CalculationError::configuration(format!(
                "betta must be a finite non-negative number, got {}",
                self.betta
            )));
        }
        for (name, value) in [("gamma_c", self.gamma_c), ("gamma_n", self.gamma_n)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalculationError::configuration(format!(
                    "{} must be a finite positive number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Ratio γc / γn applied to the summed moment
    pub fn safety_ratio(&self) -> f64 {
        self.gamma_c / self.gamma_n
    }
}
