// String composition layered on top of formatted results.
// Nothing here knows about precision or rounding; it only moves characters around.

use crate::format::config::OutputConfig;
use crate::format::result::FormatResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    #[default]
    Right,
    Center,
}

/// Pad `s` with spaces to at least `width` characters
pub fn pad(s: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => format!("{:<width$}", s, width = width),
        Align::Right => format!("{:>width$}", s, width = width),
        Align::Center => format!("{:^width$}", s, width = width),
    }
}

/// Split a plain digit string into groups of three, counting away from the decimal point.
/// Strings that are not a plain (optionally negative) decimal number are returned unchanged.
pub fn group_digits(s: &str, sep: &str) -> String {
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };
    if sep.is_empty()
        || rest.is_empty()
        || !rest.chars().all(|c| c.is_ascii_digit() || c == '.')
        || rest.matches('.').count() > 1
    {
        return s.to_string();
    }

    let (int_part, frac_part) = match rest.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (rest, None),
    };

    let mut out = String::from(sign);
    out.push_str(&join_groups(int_part, sep, true));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(&join_groups(frac, sep, false));
    }
    out
}

// Input is ASCII digits only, so byte offsets are char offsets
fn join_groups(digits: &str, sep: &str, from_right: bool) -> String {
    let len = digits.len();
    let first = if from_right && len % 3 != 0 {
        len % 3
    } else {
        len.min(3)
    };

    let mut out = String::with_capacity(len + sep.len() * (len / 3));
    out.push_str(&digits[..first]);
    let mut pos = first;
    while pos < len {
        let end = (pos + 3).min(len);
        out.push_str(sep);
        out.push_str(&digits[pos..end]);
        pos = end;
    }
    out
}

/// Pad a column of strings so their decimal points line up.
///
/// Strings without a point are anchored after their leading run of digits and signs.
pub fn align_decimal_points(values: &[String]) -> Vec<String> {
    let splits: Vec<(usize, usize)> = values
        .iter()
        .map(|v| {
            let total = v.chars().count();
            let left = v.chars().position(|c| c == '.').unwrap_or_else(|| {
                v.chars()
                    .take_while(|c| c.is_ascii_digit() || *c == '-' || *c == '+')
                    .count()
            });
            (left, total - left)
        })
        .collect();

    let left_max = splits.iter().map(|(l, _)| *l).max().unwrap_or(0);
    let right_max = splits.iter().map(|(_, r)| *r).max().unwrap_or(0);

    values
        .iter()
        .zip(splits)
        .map(|(v, (left, right))| {
            format!(
                "{}{}{}",
                " ".repeat(left_max - left),
                v,
                " ".repeat(right_max - right)
            )
        })
        .collect()
}

/// Apply the output settings (digit grouping, separator, width) to a result
pub fn render(result: &FormatResult, output: &OutputConfig) -> String {
    let text = match &output.group_separator {
        Some(sep) => result.grouped(sep).spacestr(&output.separator),
        None => result.spacestr(&output.separator),
    };
    match output.width {
        Some(width) => pad(&text, width, output.align),
        None => text,
    }
}
