// deskbits - tests/e2e_windows.rs
//
// End-to-end tests for both windows, driven through the public library API.
//
// These exercise the full path from field text to converted field text —
// real parsing, real formulas, real formatting, no mocks. Only the egui
// rendering layer sits above what is tested here, and that layer contains
// no behaviour of its own.

use deskbits::app::state::{ConverterState, CounterState};
use deskbits::util::constants::MSG_NO_INPUT;

// =============================================================================
// Counter window
// =============================================================================

/// Three activations of the button leave the display reading "3".
#[test]
fn e2e_three_pushes_display_three() {
    let mut state = CounterState::default();
    state.push();
    state.push();
    state.push();
    assert_eq!(state.display(), "3");
}

/// For any number of activations the display is the decimal string of n.
#[test]
fn e2e_display_equals_number_of_pushes() {
    let mut state = CounterState::default();
    for n in 1..=500u64 {
        state.push();
        assert_eq!(state.display(), n.to_string());
    }
}

// =============================================================================
// Converter window
// =============================================================================

/// "32" in the Fahrenheit field converts to "0" Celsius.
#[test]
fn e2e_f_to_c_freezing_point() {
    let mut state = ConverterState::new();
    state.fahrenheit_text = "32".to_string();
    state.convert_f_to_c();
    assert_eq!(state.celsius_text, "0");
}

/// "100" in the Celsius field converts to "212" Fahrenheit.
#[test]
fn e2e_c_to_f_boiling_point() {
    let mut state = ConverterState::new();
    state.celsius_text = "100".to_string();
    state.convert_c_to_f();
    assert_eq!(state.fahrenheit_text, "212");
}

/// Converted values carry at most two decimals, trailing zeros trimmed.
#[test]
fn e2e_converted_values_use_compact_formatting() {
    let mut state = ConverterState::new();
    state.celsius_text = "1".to_string();
    state.convert_c_to_f();
    assert_eq!(state.fahrenheit_text, "33.8");

    state.fahrenheit_text = "98".to_string();
    state.convert_f_to_c();
    assert_eq!(state.celsius_text, "36.67");
}

/// Non-numeric input raises the dialog message and changes neither field.
#[test]
fn e2e_invalid_input_shows_dialog_and_preserves_fields() {
    let mut state = ConverterState::new();
    state.fahrenheit_text = "abc".to_string();
    state.celsius_text = "20".to_string();
    state.convert_f_to_c();

    assert_eq!(state.input_error.as_deref(), Some(MSG_NO_INPUT));
    assert_eq!(state.fahrenheit_text, "abc");
    assert_eq!(state.celsius_text, "20");

    state.dismiss_error();
    assert!(state.input_error.is_none());
}

/// While the error dialog is up, conversion activations are ignored; the
/// window only responds again once the dialog is dismissed.
#[test]
fn e2e_dialog_suspends_interaction_until_dismissed() {
    let mut state = ConverterState::new();
    state.fahrenheit_text = "abc".to_string();
    state.convert_f_to_c();
    assert_eq!(state.input_error.as_deref(), Some(MSG_NO_INPUT));

    state.celsius_text = "100".to_string();
    state.convert_c_to_f();
    assert_eq!(
        state.fahrenheit_text, "abc",
        "conversion ran while the dialog was shown"
    );

    state.dismiss_error();
    state.convert_c_to_f();
    assert_eq!(state.fahrenheit_text, "212");
}

/// An empty source field is a silent no-op: no dialog, no field updates.
#[test]
fn e2e_empty_source_field_is_a_noop() {
    let mut state = ConverterState::new();
    state.celsius_text = "25".to_string();
    state.convert_f_to_c();
    assert!(state.input_error.is_none());
    assert_eq!(state.celsius_text, "25");

    state.celsius_text.clear();
    state.fahrenheit_text = "50".to_string();
    state.convert_c_to_f();
    assert!(state.input_error.is_none());
    assert_eq!(state.fahrenheit_text, "50");
}

/// Converting F -> C -> F drifts by at most 0.1 for typical magnitudes.
#[test]
fn e2e_round_trip_within_tolerance() {
    for f in [-40.0f64, -17.8, 0.0, 32.0, 98.6, 212.0, 451.0] {
        let mut state = ConverterState::new();
        state.fahrenheit_text = f.to_string();
        state.convert_f_to_c();

        state.fahrenheit_text.clear();
        state.convert_c_to_f();

        let f2: f64 = state.fahrenheit_text.parse().unwrap();
        assert!(
            (f - f2).abs() <= 0.1,
            "round trip drifted: {f} -> {} -> {f2}",
            state.celsius_text
        );
    }
}
