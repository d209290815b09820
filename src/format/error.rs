use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Precision request that cannot be honoured in the chosen notation
    #[error("Invalid precision: {0}")]
    InvalidPrecision(String),
    /// NaN, infinite input, or a negative uncertainty
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

pub(crate) fn check_finite(value: f64, what: &str) -> Result<(), FormatError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FormatError::InvalidValue(format!(
            "{} must be finite, got {}",
            what, value
        )))
    }
}
