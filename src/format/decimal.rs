use crate::format::config::FormatConfig;
use crate::format::error::FormatError;
use crate::format::precision::{auto_decimal_precision, Precision};
use crate::format::result::{FormatResult, Notation};
use crate::measurement::types::Measurement;
use log::debug;

/// Fixed-point digits of `value`, correctly rounded from its exact binary value
pub(crate) fn render_fixed(value: f64, precision: u32) -> String {
    drop_negative_zero(format!("{:.*}", precision as usize, value))
}

// "-0.00" carries no information about the sign of anything
pub(crate) fn drop_negative_zero(s: String) -> String {
    match s.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => s,
    }
}

/// Digits after the point that keep the first significant digit of every nonzero
/// uncertainty visible. Without uncertainty the central value decides.
pub fn auto_measurement_precision(m: &Measurement) -> u32 {
    if !m.has_uncertainty() {
        return auto_decimal_precision(m.central());
    }
    m.errors()
        .iter()
        .filter(|err| **err != 0.0)
        .map(|err| auto_decimal_precision(*err))
        .max()
        .unwrap_or(0)
}

pub fn format_decimal(
    m: &Measurement,
    precision: Precision,
    config: &FormatConfig,
) -> Result<FormatResult, FormatError> {
    // The largest field decides whether fixed-point output is sensible at all
    config.check_decimal_range(m.central().abs().max(m.max_error()))?;

    let precision = precision.resolve(|| {
        let resolved = auto_measurement_precision(m);
        debug!(
            "Auto decimal precision for {:?} resolved to {}",
            m, resolved
        );
        resolved
    });
    config.check_precision(precision)?;

    let (up, down) = if m.has_uncertainty() {
        (
            Some(render_fixed(m.err_up(), precision)),
            Some(render_fixed(m.err_down(), precision)),
        )
    } else {
        (None, None)
    };

    Ok(FormatResult {
        main: render_fixed(m.central(), precision),
        up,
        down,
        exponent: 0,
        precision,
        notation: Notation::Decimal,
    })
}
