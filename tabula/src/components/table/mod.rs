//! Table component - a sortable table engine with typed column configuration.
//!
//! The Table component provides:
//! - Column descriptors with a label, an extractor and an optional sort key
//! - Header/body projection with per-cell extraction errors and per-row
//!   sort-key errors
//! - Toggle sorting (ascending, descending) with a stable tie-break
//! - A plain-text formatter for the projection
//!
//! # Example
//!
//! ```ignore
//! use tabula::prelude::*;
//!
//! struct Vehicle {
//!     name: String,
//!     price: i64,
//! }
//!
//! let columns = vec![
//!     Column::new("Vehicle", |v: &Vehicle| Ok(v.name.as_str().into())),
//!     Column::new("Price", |v: &Vehicle| Ok(v.price.into())).sort_by_display(),
//! ];
//! let mut table = Table::new(columns, vehicles)?;
//! table.toggle_sort("Price");
//! println!("{}", format_plain(&table.render()));
//! ```

mod item;
mod sort;
mod state;
mod text;
mod value;

pub use item::{Alignment, Column, Extracted};
pub use sort::{toggle_sort, SortDirection, SortState};
pub use state::{render, BodyRow, Cell, HeaderCell, RenderedTable, Table};
pub use text::{format_plain, ERROR_PLACEHOLDER, SORT_ERROR_MARK};
pub use value::Value;
