// deskbits - ui/mod.rs

pub mod panels;
pub mod theme;
