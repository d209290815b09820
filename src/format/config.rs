use crate::format::compose::Align;
use crate::format::error::FormatError;
use crate::format::precision::decade;
use serde::{Deserialize, Serialize};

/// Largest decade (`floor(log10|x|)`) accepted in fixed-point notation
pub const DEFAULT_MAX_DECIMAL_EXPONENT: i32 = 15;
/// Smallest decade of a nonzero value accepted in fixed-point notation
pub const DEFAULT_MIN_DECIMAL_EXPONENT: i32 = -15;
/// Upper bound on digits after the decimal point, in either notation
pub const DEFAULT_MAX_PRECISION: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FormatConfig {
    #[serde(default = "default_max_decimal_exponent")]
    pub max_decimal_exponent: i32,

    #[serde(default = "default_min_decimal_exponent")]
    pub min_decimal_exponent: i32,

    #[serde(default = "default_max_precision")]
    pub max_precision: u32,

    // Presentation only, never consulted by the numeric core
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    // Placed between the fields of a formatted measurement
    #[serde(default = "default_separator")]
    pub separator: String,

    // Inserted between groups of three digits when set
    #[serde(default)]
    pub group_separator: Option<String>,

    // Minimum width of the composed string
    #[serde(default)]
    pub width: Option<usize>,

    #[serde(default)]
    pub align: Align,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            group_separator: None,
            width: None,
            align: Align::default(),
        }
    }
}

fn default_max_decimal_exponent() -> i32 {
    DEFAULT_MAX_DECIMAL_EXPONENT
}

fn default_min_decimal_exponent() -> i32 {
    DEFAULT_MIN_DECIMAL_EXPONENT
}

fn default_max_precision() -> u32 {
    DEFAULT_MAX_PRECISION
}

fn default_separator() -> String {
    " ".to_string()
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            max_decimal_exponent: DEFAULT_MAX_DECIMAL_EXPONENT,
            min_decimal_exponent: DEFAULT_MIN_DECIMAL_EXPONENT,
            max_precision: DEFAULT_MAX_PRECISION,
            output: OutputConfig::default(),
        }
    }
}

impl FormatConfig {
    pub fn load_from_file<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: FormatConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.min_decimal_exponent > 0 || self.max_decimal_exponent < 0 {
            return Err(format!(
                "Decimal exponent range [{}, {}] must contain 0",
                self.min_decimal_exponent, self.max_decimal_exponent
            ));
        }
        Ok(())
    }

    /// Reject values whose magnitude is reserved for scientific notation
    pub fn check_decimal_range(&self, value: f64) -> Result<(), FormatError> {
        if value == 0.0 {
            return Ok(());
        }
        let exponent = decade(value);
        if exponent > self.max_decimal_exponent || exponent < self.min_decimal_exponent {
            return Err(FormatError::InvalidPrecision(format!(
                "{:e} is outside the fixed-point range 1e{} <= |x| < 1e{}",
                value,
                self.min_decimal_exponent,
                self.max_decimal_exponent + 1
            )));
        }
        Ok(())
    }

    pub fn check_precision(&self, precision: u32) -> Result<(), FormatError> {
        if precision > self.max_precision {
            return Err(FormatError::InvalidPrecision(format!(
                "{} digits requested, at most {} allowed",
                precision, self.max_precision
            )));
        }
        Ok(())
    }
}
