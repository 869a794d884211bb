//! UI-agnostic component cores.

pub mod suggest;
pub mod table;
