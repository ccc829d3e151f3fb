// deskbits - ui/panels/mod.rs

pub mod converter;
pub mod counter;
