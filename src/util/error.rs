// deskbits - util/error.rs
//
// Typed errors with context-preserving chains.
// No string-based error propagation.

use std::fmt;
use std::num::ParseFloatError;

/// Errors raised while reading a temperature input field.
///
/// Both variants are terminal: they are logged, surfaced as a modal dialog,
/// and never propagated past the event handler that produced them.
#[derive(Debug)]
pub enum InputError {
    /// The field's text cannot be parsed as a real number.
    InvalidNumericInput {
        field: &'static str,
        raw: String,
        source: ParseFloatError,
    },

    /// The field parsed, but to a value (inf/NaN) that cannot be converted
    /// and formatted meaningfully.
    NonFiniteInput { field: &'static str, value: f64 },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumericInput { field, raw, source } => {
                write!(f, "{field} field: cannot parse '{raw}' as a number: {source}")
            }
            Self::NonFiniteInput { field, value } => {
                write!(f, "{field} field: non-finite value {value}")
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidNumericInput { source, .. } => Some(source),
            Self::NonFiniteInput { .. } => None,
        }
    }
}
