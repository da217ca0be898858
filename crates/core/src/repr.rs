//! Text forms of float components.
//!
//! Output uses the shortest round-trip representation with an explicit
//! decimal point (`1.0`), scientific notation outside `[1e-4, 1e16)` with a
//! signed two-digit exponent (`1e-05`, `1.5e+16`), and lowercase `nan`/`inf`.
//! Input accepts the same spellings plus surrounding whitespace and `_`
//! separators between digits.

use crate::error::ConvertError;

/// Formats a component the way result lines print it.
pub fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_owned();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_owned();
    }
    // Debug already picks shortest digits and the same exponent cutoffs.
    let text = format!("{x:?}");
    match text.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => text,
    }
}

/// Parses one color component from command-line text.
///
/// Only ASCII digits are read; other Unicode decimal digits are rejected.
/// Returns `ConvertError::InvalidComponent` when the text is not a float,
/// including misplaced `_` separators.
pub fn parse_component(text: &str) -> Result<f64, ConvertError> {
    let invalid = || ConvertError::InvalidComponent(text.to_owned());
    let chars: Vec<char> = text.trim().chars().collect();
    let mut cleaned = String::with_capacity(chars.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            let between_digits = i > 0
                && chars[i - 1].is_ascii_digit()
                && chars.get(i + 1).is_some_and(char::is_ascii_digit);
            if !between_digits {
                return Err(invalid());
            }
        } else {
            cleaned.push(c);
        }
    }
    cleaned.parse::<f64>().map_err(|_| invalid())
}
