// deskbits - util/constants.rs
//
// Single source of truth for user-visible strings, window geometry, and
// defaults. The field and button labels are behavioural contract: they must
// match the original applications character for character.

// =============================================================================
// Application metadata
// =============================================================================

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Counter window
// =============================================================================

/// Counter window title.
pub const COUNTER_TITLE: &str = "Push Counter";

/// Counter window initial inner size (width, height) in logical points.
pub const COUNTER_WINDOW_SIZE: [f32; 2] = [400.0, 150.0];

pub const COUNTER_BUTTON_LABEL: &str = "Push Me!";
pub const COUNTER_FIELD_LABEL: &str = "Pushes: ";

// =============================================================================
// Converter window
// =============================================================================

/// Converter window title.
pub const CONVERTER_TITLE: &str = "Temperature Conversion";

/// Converter window initial inner size (width, height) in logical points.
pub const CONVERTER_WINDOW_SIZE: [f32; 2] = [400.0, 200.0];

pub const FAHRENHEIT_FIELD_LABEL: &str = "Nhap do F: ";
pub const CELSIUS_FIELD_LABEL: &str = "Do C: ";
pub const F_TO_C_BUTTON_LABEL: &str = "Change F->C";
pub const C_TO_F_BUTTON_LABEL: &str = "Change C->F";

/// Field names used in error diagnostics and log output.
pub const FAHRENHEIT_FIELD: &str = "Fahrenheit";
pub const CELSIUS_FIELD: &str = "Celsius";

/// Title of the modal error dialog.
pub const MSG_DIALOG_TITLE: &str = "Message";

/// Message shown in the modal dialog when a field cannot be parsed.
pub const MSG_NO_INPUT: &str = "Ban chua nhap du lieu!";

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG nor --debug is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";
