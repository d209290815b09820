use crate::format::compose::group_digits;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    Decimal,
    Scientific,
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notation::Decimal => write!(f, "decimal"),
            Notation::Scientific => write!(f, "scientific"),
        }
    }
}

/// Digit strings of a formatted value or measurement
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FormatResult {
    /// Central value (or mantissa), sign included
    pub main: String,
    /// Upper uncertainty, never signed; `None` when there is no uncertainty
    pub up: Option<String>,
    /// Lower uncertainty, never signed; `None` when there is no uncertainty
    pub down: Option<String>,
    /// Power of ten shared by all fields, 0 in decimal notation
    pub exponent: i32,
    /// Digits after the decimal point in every field
    pub precision: u32,
    pub notation: Notation,
}

impl FormatResult {
    pub fn main_str(&self) -> &str {
        &self.main
    }

    pub fn up_str(&self) -> &str {
        self.up.as_deref().unwrap_or("")
    }

    pub fn down_str(&self) -> &str {
        self.down.as_deref().unwrap_or("")
    }

    pub fn has_uncertainty(&self) -> bool {
        self.up.is_some() || self.down.is_some()
    }

    /// Up and down render to the same digits, so a single `±` suffices
    pub fn is_symmetric(&self) -> bool {
        matches!((&self.up, &self.down), (Some(up), Some(down)) if up == down)
    }

    /// Plain-text form with `sep` between fields: `123 ± 23`, `123 +23 -0`, `(1.23 ± 0.23)e2`
    ///
    /// The `±` form follows the rendered digits, not the inputs: uncertainties of
    /// 1 and 1.2 at precision 0 both read `1` and print as `± 1`. Use `up` and
    /// `down` directly when the distinction matters.
    pub fn spacestr(&self, sep: &str) -> String {
        let mut fields = vec![self.main.clone()];
        if self.is_symmetric() {
            fields.push("±".to_string());
            fields.push(self.up_str().to_string());
        } else {
            if let Some(up) = &self.up {
                fields.push(format!("+{}", up));
            }
            if let Some(down) = &self.down {
                fields.push(format!("-{}", down));
            }
        }
        let body = fields.join(sep);

        if self.exponent == 0 {
            body
        } else if self.has_uncertainty() {
            format!("({})e{}", body, self.exponent)
        } else {
            format!("{}e{}", body, self.exponent)
        }
    }

    /// LaTeX math-mode form: `123 \pm 23`, `123^{+23}_{-0}`, `1.23 \times 10^{7}`
    pub fn latex(&self) -> String {
        let body = if self.is_symmetric() {
            format!("{} \\pm {}", self.main, self.up_str())
        } else {
            let mut body = self.main.clone();
            if let Some(up) = &self.up {
                body.push_str(&format!("^{{+{}}}", up));
            }
            if let Some(down) = &self.down {
                body.push_str(&format!("_{{-{}}}", down));
            }
            body
        };

        if self.exponent == 0 {
            body
        } else if self.is_symmetric() {
            format!("({}) \\times 10^{{{}}}", body, self.exponent)
        } else {
            format!("{} \\times 10^{{{}}}", body, self.exponent)
        }
    }

    /// Copy with every digit string split into groups of three
    pub fn grouped(&self, sep: &str) -> FormatResult {
        FormatResult {
            main: group_digits(&self.main, sep),
            up: self.up.as_deref().map(|s| group_digits(s, sep)),
            down: self.down.as_deref().map(|s| group_digits(s, sep)),
            ..self.clone()
        }
    }
}

impl fmt::Display for FormatResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.spacestr(" "))
    }
}

/// Number of characters after the decimal point, 0 when there is none
pub fn fraction_digits(s: &str) -> usize {
    s.split_once('.')
        .map(|(_, frac)| frac.chars().take_while(|c| c.is_ascii_digit()).count())
        .unwrap_or(0)
}
