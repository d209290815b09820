use crate::format::error::FormatError;
use crate::measurement::types::Measurement;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::str::FromStr;
use thiserror::Error;

// Signed number for the central value, unsigned for uncertainties
const NUMBER: &str = r"[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?";
const UNSIGNED: &str = r"(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?";

lazy_static! {
    /// "5", "-1.2e3"
    static ref EXACT: Regex = Regex::new(&format!(r"^({})$", NUMBER)).unwrap();

    /// "123 ± 23", "123 +/- 23", "123 +- 23", "123 \pm 23"
    static ref SYMMETRIC: Regex = Regex::new(&format!(
        r"^({n})\s*(?:±|\+/-|\+-|\\pm)\s*({u})$",
        n = NUMBER,
        u = UNSIGNED
    ))
    .unwrap();

    /// "20.1 +1 -0.1", "20.1 +1/-0.1"
    static ref ASYMMETRIC: Regex = Regex::new(&format!(
        r"^({n})\s*\+\s*({u})\s*/?\s*-\s*({u})$",
        n = NUMBER,
        u = UNSIGNED
    ))
    .unwrap();

    /// "20.1^{+1}_{-0.1}"
    static ref LATEX: Regex = Regex::new(&format!(
        r"^({n})\s*\^\{{\+({u})\}}\s*_\{{-({u})\}}$",
        n = NUMBER,
        u = UNSIGNED
    ))
    .unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Measurement string cannot be empty")]
    Empty,
    #[error("Unrecognized measurement '{0}'")]
    Unrecognized(String),
    #[error("Invalid number '{0}'")]
    InvalidNumber(String),
    #[error(transparent)]
    Invalid(#[from] FormatError),
}

fn number(text: &str) -> Result<f64, ParseError> {
    text.parse::<f64>()
        .map_err(|_| ParseError::InvalidNumber(text.to_string()))
}

/// Parse a measurement written as an exact value, `x ± e`, `x +u -d` or `x^{+u}_{-d}`
pub fn parse_measurement(input: &str) -> Result<Measurement, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    if let Some(caps) = EXACT.captures(trimmed) {
        debug!("Parsed '{}' as an exact value", trimmed);
        return Ok(Measurement::exact(number(&caps[1])?)?);
    }

    if let Some(caps) = SYMMETRIC.captures(trimmed) {
        debug!("Parsed '{}' as a symmetric measurement", trimmed);
        return Ok(Measurement::symmetric(
            number(&caps[1])?,
            number(&caps[2])?,
        )?);
    }

    for pattern in [&*ASYMMETRIC, &*LATEX] {
        if let Some(caps) = pattern.captures(trimmed) {
            debug!("Parsed '{}' as an asymmetric measurement", trimmed);
            return Ok(Measurement::new(
                number(&caps[1])?,
                number(&caps[2])?,
                number(&caps[3])?,
            )?);
        }
    }

    Err(ParseError::Unrecognized(trimmed.to_string()))
}

impl FromStr for Measurement {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_measurement(s)
    }
}
