use crate::format::compose;
use crate::format::config::FormatConfig;
use crate::format::decimal::format_decimal;
use crate::format::error::FormatError;
use crate::format::precision::Precision;
use crate::format::result::{FormatResult, Notation};
use crate::format::scientific::format_scientific;
use crate::measurement::types::Quantity;

/// Formats values and measurements under one configuration
#[derive(Debug, Clone, Default)]
pub struct MeasurementFormatter {
    config: FormatConfig,
}

impl MeasurementFormatter {
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Fixed-point notation
    pub fn decimal<Q: Quantity>(
        &self,
        quantity: Q,
        precision: Precision,
    ) -> Result<FormatResult, FormatError> {
        let m = quantity.to_measurement()?;
        format_decimal(&m, precision, &self.config)
    }

    /// Mantissa in [1, 10) times a power of ten
    pub fn scientific<Q: Quantity>(
        &self,
        quantity: Q,
        precision: Precision,
    ) -> Result<FormatResult, FormatError> {
        let m = quantity.to_measurement()?;
        format_scientific(&m, precision, &self.config)
    }

    pub fn format<Q: Quantity>(
        &self,
        quantity: Q,
        notation: Notation,
        precision: Precision,
    ) -> Result<FormatResult, FormatError> {
        match notation {
            Notation::Decimal => self.decimal(quantity, precision),
            Notation::Scientific => self.scientific(quantity, precision),
        }
    }

    /// Compose a result using the configured output settings
    pub fn render(&self, result: &FormatResult) -> String {
        compose::render(result, &self.config.output)
    }
}
