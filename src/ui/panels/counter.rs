// deskbits - ui/panels/counter.rs
//
// Push Counter window body: one button, one caption, one count label.

use crate::app::state::CounterState;
use crate::ui::theme;
use crate::util::constants;

/// Render the counter window body.
pub fn render(ui: &mut egui::Ui, state: &mut CounterState) {
    ui.add_space(theme::PANEL_PADDING);
    ui.horizontal(|ui| {
        if ui.button(constants::COUNTER_BUTTON_LABEL).clicked() {
            state.push();
        }
        ui.label(constants::COUNTER_FIELD_LABEL);
        ui.label(state.display());
    });
}
