//! Error types shared by the physics formulas and the calculation strategies

/// Errors raised while computing a pile check
///
/// Every formula guards its inputs and fails before returning a partial
/// result. Strategies never catch these, they go straight to the caller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalculationError {
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Division by zero: {numerator} / {denominator} where {denominator} = 0")]
    DivisionByZero {
        numerator: String,
        denominator: String,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CalculationError {
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        CalculationError::InvalidInput {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn division_by_zero(numerator: impl Into<String>, denominator: impl Into<String>) -> Self {
        CalculationError::DivisionByZero {
            numerator: numerator.into(),
            denominator: denominator.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        CalculationError::Configuration(message.into())
    }

    /// Short code for programmatic handling by a presentation layer
    pub fn error_code(&self) -> &'static str {
        match self {
            CalculationError::InvalidInput { .. } => "INVALID_INPUT",
            CalculationError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            CalculationError::Configuration(_) => "CONFIGURATION",
        }
    }
}

/// Reject NaN and infinities for a named input
pub(crate) fn ensure_finite(field: &str, value: f64) -> Result<f64, CalculationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalculationError::invalid_input(field, value, "must be a finite number"))
    }
}

/// Reject anything that is not a finite, strictly positive number
pub(crate) fn ensure_positive(field: &str, value: f64) -> Result<f64, CalculationError> {
    ensure_finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(CalculationError::invalid_input(field, value, "must be greater than zero"))
    }
}
