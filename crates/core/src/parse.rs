//! Validation of textual input into a [`NumericSequence`].
//!
//! The accepted text is a JSON array of numbers: `[`, comma-separated numeric
//! literals, `]`, with optional whitespace between tokens and nothing after
//! the closing bracket. Literals follow JSON number syntax (optional leading
//! `-`, no leading zeros, optional fraction and exponent).
//!
//! The JSON structure is checked by `serde_json`, which hands back each
//! element's raw text. Elements that are not number literals (strings,
//! booleans, `null`, nested arrays, objects) are rejected by position. Number
//! literals are rounded to the nearest `f64`, and literals beyond the `f64`
//! range become `Infinity` or `-Infinity`, as a JavaScript `JSON.parse` would
//! produce.

mod config;
mod error;

pub use config::Config;
pub use error::{ValidationError, ValidationReason};

use serde_json::value::RawValue;

use crate::NumericSequence;

/// Parses `raw` into a [`NumericSequence`] with no length limit.
///
/// # Errors
///
/// Returns a [`ValidationError`] if `raw` is not a well-formed array of numbers.
pub fn parse(raw: &str) -> Result<NumericSequence, ValidationError> {
    parse_with(raw, &Config::default())
}

/// Parses `raw` into a [`NumericSequence`], applying the limits in `config`.
///
/// # Errors
///
/// Returns a [`ValidationError`] if `raw` is not a well-formed array of
/// numbers, or if the array is longer than `config.max_len`.
pub fn parse_with(raw: &str, config: &Config) -> Result<NumericSequence, ValidationError> {
    let elements: Vec<&RawValue> =
        serde_json::from_str(raw).map_err(|err| ValidationError::new(err.into()))?;

    let values = elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            number_literal(element.get())
                .ok_or_else(|| ValidationError::new(ValidationReason::NotANumber { index }))
        })
        .collect::<Result<Vec<f64>, _>>()?;

    if let Err((len, max_len)) = config.check_len(values.len()) {
        return Err(ValidationError::new(ValidationReason::TooLong {
            len,
            max_len,
        }));
    }

    Ok(NumericSequence::new(values))
}

/// Converts one element's text to the nearest `f64`.
///
/// Literals beyond the `f64` range become `Infinity` or `-Infinity`. Returns
/// `None` unless `text` is a number literal. The text is already valid JSON,
/// so a leading `-` or digit means it is a number.
fn number_literal(text: &str) -> Option<f64> {
    if !text.starts_with(|c: char| c == '-' || c.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
