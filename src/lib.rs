// deskbits - lib.rs
//
// Library entry point, exposing everything below the eframe event loop for
// integration testing.
//
// The `eframe::App` implementations live in the binaries (`src/bin/`); each
// binary owns exactly one window.

pub mod app;
pub mod core;
pub mod ui;
pub mod util;
