use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of digits after the decimal point (of the mantissa, in scientific notation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// Exactly this many digits, no inference
    Fixed(u32),
    /// Smallest precision that keeps the first significant digit visible
    #[default]
    Auto,
}

impl Precision {
    /// Map the legacy signed convention: negative means auto, otherwise fixed
    pub fn from_sentinel(precision: i32) -> Self {
        if precision < 0 {
            Precision::Auto
        } else {
            Precision::Fixed(precision as u32)
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Precision::Auto)
    }

    /// Resolve to a concrete digit count, computing the automatic one on demand
    pub fn resolve<F: FnOnce() -> u32>(self, auto: F) -> u32 {
        match self {
            Precision::Fixed(n) => n,
            Precision::Auto => auto(),
        }
    }
}

impl From<i32> for Precision {
    fn from(precision: i32) -> Self {
        Precision::from_sentinel(precision)
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precision::Fixed(n) => write!(f, "{}", n),
            Precision::Auto => write!(f, "auto"),
        }
    }
}

impl FromStr for Precision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("auto") {
            return Ok(Precision::Auto);
        }
        trimmed
            .parse::<i32>()
            .map(Precision::from_sentinel)
            .map_err(|_| format!("Invalid precision '{}': expected 'auto' or an integer", s))
    }
}

/// Power of ten of the leading digit, `floor(log10(|x|))`; 0 for zero and non-finite input.
///
/// Taken from the shortest round-trip representation so exact powers of ten
/// (0.001, 1e15) land in their own decade instead of the one below.
pub fn decade(x: f64) -> i32 {
    if x == 0.0 || !x.is_finite() {
        return 0;
    }
    let repr = format!("{:e}", x.abs());
    repr.split_once('e')
        .and_then(|(_, exp)| exp.parse().ok())
        .unwrap_or(0)
}

/// Digits after the decimal point needed to reach the first significant digit of `x`
pub fn auto_decimal_precision(x: f64) -> u32 {
    if x == 0.0 {
        return 0;
    }
    (-decade(x)).max(0) as u32
}

// Largest power of ten applied in a single step; 10^308 is the last finite one.
const MAX_SCALE_STEP: i32 = 300;

/// `x / 10^exponent`, rounded once for ordinary exponents.
///
/// Past `MAX_SCALE_STEP` the power is applied in two halves so neither factor
/// overflows (subnormal uncertainties sit below 1e-308).
pub(crate) fn scale(x: f64, exponent: i32) -> f64 {
    if exponent.abs() > MAX_SCALE_STEP {
        let half = exponent / 2;
        return scale(scale(x, half), exponent - half);
    }
    if exponent >= 0 {
        x / 10f64.powi(exponent)
    } else {
        x * 10f64.powi(-exponent)
    }
}
