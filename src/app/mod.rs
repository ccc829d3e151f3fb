// deskbits - app/mod.rs

pub mod state;
