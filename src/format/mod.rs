// Decimal and scientific rendering of values with asymmetric uncertainties.
// The numeric core (decimal, scientific) is pure; compose only arranges the
// resulting strings for display.

pub mod compose;
pub mod config;
pub mod decimal;
pub mod error;
pub mod formatter;
pub mod precision;
pub mod result;
pub mod scientific;


pub use config::{FormatConfig, OutputConfig};
pub use error::FormatError;
pub use formatter::MeasurementFormatter;
pub use precision::Precision;
pub use result::{FormatResult, Notation};

use crate::measurement::types::Quantity;

/// Fixed-point formatting under the default configuration
pub fn decimal<Q: Quantity>(
    quantity: Q,
    precision: Precision,
) -> Result<FormatResult, FormatError> {
    MeasurementFormatter::default().decimal(quantity, precision)
}

/// Scientific formatting under the default configuration
pub fn scientific<Q: Quantity>(
    quantity: Q,
    precision: Precision,
) -> Result<FormatResult, FormatError> {
    MeasurementFormatter::default().scientific(quantity, precision)
}
