// deskbits - ui/panels/converter.rs
//
// Temperature Conversion window body: two labelled text fields and the two
// conversion buttons, plus the invalid-input dialog.

use crate::app::state::ConverterState;
use crate::ui::theme;
use crate::util::constants;

/// Render the converter window body.
///
/// The whole body is disabled while the error dialog is up, so the dialog
/// suspends interaction with the window until dismissed.
pub fn render(ui: &mut egui::Ui, state: &mut ConverterState) {
    ui.add_space(theme::PANEL_PADDING);

    let dialog_closed = state.input_error.is_none();
    ui.add_enabled_ui(dialog_closed, |ui| {
        egui::Grid::new("converter_fields")
            .num_columns(2)
            .spacing([theme::SECTION_SPACING, 8.0])
            .show(ui, |ui| {
                ui.label(constants::FAHRENHEIT_FIELD_LABEL);
                ui.add(
                    egui::TextEdit::singleline(&mut state.fahrenheit_text)
                        .desired_width(theme::FIELD_WIDTH),
                );
                ui.end_row();

                ui.label(constants::CELSIUS_FIELD_LABEL);
                ui.add(
                    egui::TextEdit::singleline(&mut state.celsius_text)
                        .desired_width(theme::FIELD_WIDTH),
                );
                ui.end_row();
            });

        ui.add_space(theme::SECTION_SPACING);
        ui.horizontal(|ui| {
            if ui.button(constants::F_TO_C_BUTTON_LABEL).clicked() {
                state.convert_f_to_c();
            }
            if ui.button(constants::C_TO_F_BUTTON_LABEL).clicked() {
                state.convert_c_to_f();
            }
        });
    });
}

/// Render the invalid-input dialog (if state.input_error is set).
///
/// Shown centred over the window; dismissed by OK or the close button.
pub fn render_error_dialog(ctx: &egui::Context, state: &mut ConverterState) {
    let Some(message) = state.input_error.clone() else {
        return;
    };

    let mut open = true;
    egui::Window::new(constants::MSG_DIALOG_TITLE)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(message);
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                state.dismiss_error();
            }
        });

    if !open {
        state.dismiss_error();
    }
}
