// deskbits - core/mod.rs
//
// Pure domain logic. No GUI dependencies anywhere in this layer.

pub mod convert;
pub mod counter;
