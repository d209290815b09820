use crate::format::config::FormatConfig;
use crate::format::decimal::{drop_negative_zero, render_fixed};
use crate::format::error::FormatError;
use crate::format::precision::{decade, scale, Precision};
use crate::format::result::{FormatResult, Notation};
use crate::measurement::types::Measurement;
use log::debug;

// Mantissa digits and exponent as produced by `{:.Ne}`; the carry of
// a rounded-up mantissa (9.999 -> 1.00e1) is already applied.
fn split_exponential(value: f64, precision: u32) -> (String, i32) {
    let repr = format!("{:.*e}", precision as usize, value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => (mantissa.to_string(), exponent.parse().unwrap_or(0)),
        None => (repr, 0),
    }
}

/// Mantissa digits needed so every nonzero uncertainty, expressed in units of
/// `10^exponent`, shows its first significant digit. 0 without uncertainty.
pub fn auto_scientific_precision(m: &Measurement, exponent: i32) -> u32 {
    m.errors()
        .iter()
        .filter(|err| **err != 0.0)
        .map(|err| (exponent - decade(*err)).max(0) as u32)
        .max()
        .unwrap_or(0)
}

pub fn format_scientific(
    m: &Measurement,
    precision: Precision,
    config: &FormatConfig,
) -> Result<FormatResult, FormatError> {
    // A zero central value borrows its power of ten from the uncertainty
    let anchor = if m.central() != 0.0 {
        m.central()
    } else {
        m.max_error()
    };
    let estimated = decade(anchor);

    let auto = precision.is_auto();
    let mut precision = precision.resolve(|| {
        let resolved = auto_scientific_precision(m, estimated);
        debug!(
            "Auto scientific precision for {:?} resolved to {}",
            m, resolved
        );
        resolved
    });
    config.check_precision(precision)?;

    let (mut mantissa, mut exponent) = if anchor == 0.0 {
        (render_fixed(0.0, precision), 0)
    } else {
        split_exponential(anchor, precision)
    };
    if exponent != estimated {
        debug!(
            "Mantissa of {} carried from decade {} into {}",
            anchor, estimated, exponent
        );
        // The uncertainties shrink by one decade against the carried exponent,
        // so the automatic digit count must follow it. The finer rounding may
        // undo the carry; either exponent then still shows every uncertainty.
        if auto {
            precision = auto_scientific_precision(m, exponent);
            config.check_precision(precision)?;
            (mantissa, exponent) = split_exponential(anchor, precision);
        }
    }

    let main = if m.central() != 0.0 {
        drop_negative_zero(mantissa)
    } else {
        render_fixed(0.0, precision)
    };

    let (up, down) = if m.has_uncertainty() {
        (
            Some(render_fixed(scale(m.err_up(), exponent), precision)),
            Some(render_fixed(scale(m.err_down(), exponent), precision)),
        )
    } else {
        (None, None)
    };

    Ok(FormatResult {
        main,
        up,
        down,
        exponent,
        precision,
        notation: Notation::Scientific,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(central: f64, up: f64, down: f64, precision: Precision) -> FormatResult {
        let m = Measurement::new(central, up, down).unwrap();
        format_scientific(&m, precision, &FormatConfig::default()).unwrap()
    }

    #[test]
    fn test_split_exponential() {
        assert_eq!(split_exponential(12345679.123456, 2), ("1.23".to_string(), 7));
        assert_eq!(split_exponential(-0.00456, 1), ("-4.6".to_string(), -3));
        assert_eq!(split_exponential(9.999, 2), ("1.00".to_string(), 1));
        assert_eq!(split_exponential(0.0, 2), ("0.00".to_string(), 0));
    }

    #[test]
    fn test_scalar() {
        let r = fmt(12345679.123456, 0.0, 0.0, Precision::Fixed(2));
        assert_eq!(r.main, "1.23");
        assert_eq!(r.exponent, 7);
        assert!(r.up.is_none());
        assert_eq!(r.spacestr(" "), "1.23e7");

        // the mantissa always starts with a significant digit
        let r = fmt(12345679.123456, 0.0, 0.0, Precision::Auto);
        assert_eq!(r.main, "1");
        assert_eq!(r.precision, 0);

        let r = fmt(0.0, 0.0, 0.0, Precision::Fixed(3));
        assert_eq!(r.main, "0.000");
        assert_eq!(r.exponent, 0);
    }

    #[test]
    fn test_carry_renormalises() {
        let r = fmt(9.999, 0.0, 0.0, Precision::Fixed(2));
        assert_eq!(r.main, "1.00");
        assert_eq!(r.exponent, 1);

        let r = fmt(-99.97, 0.5, 0.5, Precision::Fixed(2));
        assert_eq!(r.main, "-1.00");
        assert_eq!(r.exponent, 2);
        assert_eq!(r.up_str(), "0.01");
    }

    #[test]
    fn test_auto_precision_follows_carry() {
        // two digits round 9.996 up to 1.00e1, where 0.01 would read 0.00
        let r = fmt(9.996, 0.01, 0.01, Precision::Auto);
        assert_eq!(r.main, "9.996");
        assert_eq!(r.exponent, 0);
        assert_eq!(r.precision, 3);
        assert_eq!(r.up_str(), "0.010");

        // here the carry survives the extra digit
        let r = fmt(9.9996, 0.01, 0.01, Precision::Auto);
        assert_eq!(r.main, "1.000");
        assert_eq!(r.exponent, 1);
        assert_eq!(r.up_str(), "0.001");
        assert_eq!(r.spacestr(" "), "(1.000 ± 0.001)e1");

        // fixed precision keeps the digits it was asked for
        let r = fmt(9.996, 0.01, 0.01, Precision::Fixed(2));
        assert_eq!(r.main, "1.00");
        assert_eq!(r.up_str(), "0.00");
    }

    #[test]
    fn test_subnormal_measurement() {
        let r = fmt(3e-310, 1e-310, 1e-310, Precision::Fixed(1));
        assert_eq!(r.exponent, -310);
        assert_eq!(r.main, "3.0");
        assert_eq!(r.up_str(), "1.0");
        assert_eq!(r.spacestr(" "), "(3.0 ± 1.0)e-310");

        let r = fmt(3e-310, 1e-310, 1e-310, Precision::Auto);
        assert_eq!(r.spacestr(" "), "(3 ± 1)e-310");
    }

    #[test]
    fn test_measurement_shares_exponent() {
        let r = fmt(123.0, 23.0, 0.01, Precision::Fixed(2));
        assert_eq!(r.main, "1.23");
        assert_eq!(r.up_str(), "0.23");
        assert_eq!(r.down_str(), "0.00");
        assert_eq!(r.exponent, 2);
        assert_eq!(r.spacestr(" "), "(1.23 +0.23 -0.00)e2");
    }

    #[test]
    fn test_auto_precision() {
        let r = fmt(123.0, 23.0, 0.01, Precision::Auto);
        assert_eq!(r.precision, 4);
        assert_eq!(r.main, "1.2300");
        assert_eq!(r.up_str(), "0.2300");
        assert_eq!(r.down_str(), "0.0001");

        let r = fmt(20.1, 1.0, 0.1, Precision::Auto);
        assert_eq!(r.exponent, 1);
        assert_eq!(r.main, "2.01");
        assert_eq!(r.up_str(), "0.10");
        assert_eq!(r.down_str(), "0.01");
    }

    #[test]
    fn test_zero_central_uses_uncertainty_exponent() {
        let r = fmt(0.0, 0.003, 0.003, Precision::Fixed(1));
        assert_eq!(r.exponent, -3);
        assert_eq!(r.main, "0.0");
        assert_eq!(r.up_str(), "3.0");
        assert!(r.is_symmetric());
    }

    #[test]
    fn test_large_and_small_magnitudes() {
        let r = fmt(6.02214076e23, 0.0, 0.0, Precision::Fixed(3));
        assert_eq!(r.main, "6.022");
        assert_eq!(r.exponent, 23);

        let r = fmt(-1.602e-19, 0.0, 0.0, Precision::Fixed(1));
        assert_eq!(r.main, "-1.6");
        assert_eq!(r.exponent, -19);
    }
}
