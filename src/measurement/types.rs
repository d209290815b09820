use crate::format::error::{check_finite, FormatError};
use serde::{Deserialize, Serialize};

/// A central value with an asymmetric uncertainty interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMeasurement")]
pub struct Measurement {
    central: f64,
    err_up: f64,
    err_down: f64,
}

// Unvalidated wire form, checked through Measurement::new on deserialization
#[derive(Deserialize)]
struct RawMeasurement {
    central: f64,
    #[serde(default)]
    err_up: f64,
    #[serde(default)]
    err_down: f64,
}

impl TryFrom<RawMeasurement> for Measurement {
    type Error = FormatError;

    fn try_from(raw: RawMeasurement) -> Result<Self, Self::Error> {
        Measurement::new(raw.central, raw.err_up, raw.err_down)
    }
}

impl Measurement {
    /// Fails with `InvalidValue` on non-finite input or a negative uncertainty
    pub fn new(central: f64, err_up: f64, err_down: f64) -> Result<Self, FormatError> {
        check_finite(central, "central value")?;
        check_finite(err_up, "upper uncertainty")?;
        check_finite(err_down, "lower uncertainty")?;
        if err_up < 0.0 {
            return Err(FormatError::InvalidValue(format!(
                "upper uncertainty must be non-negative, got {}",
                err_up
            )));
        }
        if err_down < 0.0 {
            return Err(FormatError::InvalidValue(format!(
                "lower uncertainty must be non-negative, got {}",
                err_down
            )));
        }

        // Adding +0.0 turns -0.0 into +0.0 and leaves everything else untouched
        Ok(Self {
            central: central + 0.0,
            err_up: err_up + 0.0,
            err_down: err_down + 0.0,
        })
    }

    pub fn symmetric(central: f64, err: f64) -> Result<Self, FormatError> {
        Self::new(central, err, err)
    }

    /// A value without uncertainty
    pub fn exact(central: f64) -> Result<Self, FormatError> {
        Self::new(central, 0.0, 0.0)
    }

    pub fn central(&self) -> f64 {
        self.central
    }

    pub fn err_up(&self) -> f64 {
        self.err_up
    }

    pub fn err_down(&self) -> f64 {
        self.err_down
    }

    pub fn max_error(&self) -> f64 {
        self.err_up.max(self.err_down)
    }

    pub fn errors(&self) -> [f64; 2] {
        [self.err_up, self.err_down]
    }

    /// Upper uncertainty relative to the central value, 0 when the central value is zero
    pub fn rel_up(&self) -> f64 {
        if self.central == 0.0 {
            0.0
        } else {
            self.err_up / self.central.abs()
        }
    }

    pub fn rel_down(&self) -> f64 {
        if self.central == 0.0 {
            0.0
        } else {
            self.err_down / self.central.abs()
        }
    }

    pub fn upper_bound(&self) -> f64 {
        self.central + self.err_up
    }

    pub fn lower_bound(&self) -> f64 {
        self.central - self.err_down
    }

    pub fn is_symmetric(&self) -> bool {
        self.err_up == self.err_down
    }

    pub fn has_uncertainty(&self) -> bool {
        self.err_up != 0.0 || self.err_down != 0.0
    }
}

/// Anything the formatter accepts: a bare value or a measurement
pub trait Quantity {
    fn to_measurement(&self) -> Result<Measurement, FormatError>;
}

impl Quantity for f64 {
    fn to_measurement(&self) -> Result<Measurement, FormatError> {
        Measurement::exact(*self)
    }
}

impl Quantity for Measurement {
    fn to_measurement(&self) -> Result<Measurement, FormatError> {
        Ok(*self)
    }
}

impl<Q: Quantity + ?Sized> Quantity for &Q {
    fn to_measurement(&self) -> Result<Measurement, FormatError> {
        (**self).to_measurement()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_input() {
        assert!(matches!(
            Measurement::new(f64::NAN, 1.0, 1.0),
            Err(FormatError::InvalidValue(_))
        ));
        assert!(Measurement::new(1.0, f64::INFINITY, 1.0).is_err());
        assert!(Measurement::new(1.0, 1.0, f64::NAN).is_err());

        let err = Measurement::new(1.0, -0.5, 1.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value: upper uncertainty must be non-negative, got -0.5"
        );
        assert!(Measurement::new(1.0, 0.5, -1.0).is_err());
    }

    #[test]
    fn test_negative_zero_is_normalised() {
        let m = Measurement::new(-0.0, -0.0, 0.0).unwrap();
        assert!(m.central().is_sign_positive());
        assert!(m.err_up().is_sign_positive());
        assert!(!m.has_uncertainty());
    }

    #[test]
    fn test_accessors() {
        let m = Measurement::new(20.0, 2.0, 0.5).unwrap();
        assert_eq!(m.central(), 20.0);
        assert_eq!(m.max_error(), 2.0);
        assert_eq!(m.errors(), [2.0, 0.5]);
        assert_eq!(m.rel_up(), 0.1);
        assert_eq!(m.rel_down(), 0.025);
        assert_eq!(m.upper_bound(), 22.0);
        assert_eq!(m.lower_bound(), 19.5);
        assert!(!m.is_symmetric());
        assert!(m.has_uncertainty());

        let s = Measurement::symmetric(-4.0, 1.0).unwrap();
        assert!(s.is_symmetric());
        assert_eq!(s.rel_up(), 0.25);

        let zero = Measurement::symmetric(0.0, 1.0).unwrap();
        assert_eq!(zero.rel_up(), 0.0);
        assert_eq!(zero.rel_down(), 0.0);
    }

    #[test]
    fn test_quantity_conversion() {
        let m = 3.5f64.to_measurement().unwrap();
        assert_eq!(m, Measurement::exact(3.5).unwrap());
        assert!(f64::NAN.to_measurement().is_err());

        let original = Measurement::symmetric(1.0, 0.1).unwrap();
        assert_eq!((&original).to_measurement().unwrap(), original);
    }

    #[test]
    fn test_deserialize_validates() {
        let m: Measurement =
            serde_json::from_str(r#"{"central": 1.5, "err_up": 0.2, "err_down": 0.1}"#).unwrap();
        assert_eq!(m, Measurement::new(1.5, 0.2, 0.1).unwrap());

        let exact: Measurement = serde_json::from_str(r#"{"central": 2.0}"#).unwrap();
        assert!(!exact.has_uncertainty());

        let bad = serde_json::from_str::<Measurement>(r#"{"central": 1.0, "err_up": -1.0}"#);
        assert!(bad.is_err());
    }
}
