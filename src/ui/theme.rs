// deskbits - ui/theme.rs
//
// Layout constants. No dependencies on app state or business logic.

/// Width of the temperature text fields.
pub const FIELD_WIDTH: f32 = 150.0;

/// Spacing between the label/field grid and the button row.
pub const SECTION_SPACING: f32 = 16.0;

/// Vertical padding at the top of each window body.
pub const PANEL_PADDING: f32 = 12.0;
