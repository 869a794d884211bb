//! Error types

mod suggest;
mod table;

pub use suggest::*;
pub use table::*;
