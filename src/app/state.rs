// deskbits - app/state.rs
//
// Window state and activation handlers.
//
// Each window owns its state exclusively; nothing is shared between the two
// applications. Handlers run synchronously on the egui event loop, so no
// locking is needed anywhere. This layer has no egui types in it, which is
// what makes the click/convert behaviour unit-testable.

use crate::core::convert::{self, FieldInput};
use crate::core::counter::Counter;
use crate::util::constants;
use crate::util::error::InputError;

/// State behind the Push Counter window.
#[derive(Debug, Default)]
pub struct CounterState {
    counter: Counter,
}

impl CounterState {
    pub fn new(start: u64) -> Self {
        Self {
            counter: Counter::new(start),
        }
    }

    /// Handle one activation of the "Push Me!" button.
    pub fn push(&mut self) {
        self.counter.increment();
        tracing::debug!(count = self.counter.value(), "Button pushed");
    }

    /// Decimal string for the count label.
    pub fn display(&self) -> String {
        self.counter.display()
    }
}

/// State behind the Temperature Conversion window.
///
/// Temperatures are transient: every conversion re-reads and re-parses the
/// source field's current text, so the text fields are the only state.
#[derive(Debug, Default)]
pub struct ConverterState {
    pub fahrenheit_text: String,
    pub celsius_text: String,

    /// Message for the modal error dialog; `Some` while the dialog is shown.
    pub input_error: Option<String>,
}

impl ConverterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle "Change F->C": read the Fahrenheit field, write the Celsius field.
    ///
    /// Empty input is a no-op; unparseable input raises the error dialog and
    /// leaves both fields unchanged. While the dialog is up, activations are
    /// ignored until it is dismissed (the dialog is modal).
    pub fn convert_f_to_c(&mut self) {
        if self.input_error.is_some() {
            return;
        }
        match convert::parse_field(constants::FAHRENHEIT_FIELD, &self.fahrenheit_text) {
            Ok(FieldInput::Empty) => {}
            Ok(FieldInput::Value(f)) => {
                let c = convert::fahrenheit_to_celsius(f);
                self.celsius_text = convert::format_temperature(c);
                tracing::debug!(fahrenheit = f, celsius = c, "Converted F->C");
            }
            Err(e) => self.reject(e),
        }
    }

    /// Handle "Change C->F": read the Celsius field, write the Fahrenheit field.
    pub fn convert_c_to_f(&mut self) {
        if self.input_error.is_some() {
            return;
        }
        match convert::parse_field(constants::CELSIUS_FIELD, &self.celsius_text) {
            Ok(FieldInput::Empty) => {}
            Ok(FieldInput::Value(c)) => {
                let f = convert::celsius_to_fahrenheit(c);
                self.fahrenheit_text = convert::format_temperature(f);
                tracing::debug!(celsius = c, fahrenheit = f, "Converted C->F");
            }
            Err(e) => self.reject(e),
        }
    }

    /// Close the error dialog.
    pub fn dismiss_error(&mut self) {
        self.input_error = None;
    }

    fn reject(&mut self, error: InputError) {
        tracing::warn!(error = %error, "Rejected conversion input");
        self.input_error = Some(constants::MSG_NO_INPUT.to_string());
    }
}
