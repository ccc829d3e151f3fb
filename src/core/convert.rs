// deskbits - core/convert.rs
//
// Temperature conversion formulas, field parsing, and display formatting.
//
// Parsing returns an explicit result type instead of relying on a catch-all
// exception guard: empty input is distinguishable from unparseable input, so
// the caller can no-op on the former and raise a dialog on the latter.

use crate::util::error::InputError;

/// Outcome of reading a temperature text field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldInput {
    /// The field contained only whitespace. Conversions treat this as a no-op.
    Empty,

    /// A finite numeric value.
    Value(f64),
}

/// `celsius = (fahrenheit - 32) * 5 / 9`
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// `fahrenheit = celsius * 9 / 5 + 32`
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Parse the current text of a temperature field.
///
/// `field` names the source field ("Fahrenheit" or "Celsius") for error
/// diagnostics. Surrounding whitespace is ignored.
pub fn parse_field(field: &'static str, text: &str) -> Result<FieldInput, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(FieldInput::Empty);
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|source| InputError::InvalidNumericInput {
            field,
            raw: trimmed.to_string(),
            source,
        })?;

    // f64::parse accepts "inf" and "NaN"; neither survives formatting.
    if !value.is_finite() {
        return Err(InputError::NonFiniteInput { field, value });
    }

    Ok(FieldInput::Value(value))
}

/// Format a temperature with at most two fraction digits, trailing zeros
/// trimmed ("#.##" semantics): `0` not `0.00`, `33.8` not `33.80`.
///
/// Rounding is ties-to-even, matching `{:.2}` float formatting.
pub fn format_temperature(value: f64) -> String {
    let mut s = format!("{value:.2}");
    if s.contains('.') {
        let trimmed_len = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed_len);
    }
    // A tiny negative value rounds to "-0"; display it as plain zero.
    if s == "-0" {
        s.replace_range(.., "0");
    }
    s
}
