//! Column descriptors for table display.

use std::fmt;
use std::sync::Arc;

use crate::error::ExtractError;

use super::value::Value;

/// Result of running a column extractor against a row.
pub type Extracted = Result<Value, ExtractError>;

type Extractor<R> = Arc<dyn Fn(&R) -> Extracted + Send + Sync>;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Column configuration.
///
/// A column has a label, which must be unique within its table, an extractor
/// producing the cell value for a row, and an optional sort key. Columns
/// without a sort key are displayed but cannot be sorted.
///
/// # Examples
///
/// ```ignore
/// let columns = vec![
///     Column::new("Vehicle", |v: &Vehicle| Ok(v.name.as_str().into())).sort_by_display(),
///     Column::new("Price", |v: &Vehicle| Ok(v.price.into()))
///         .sortable(|v: &Vehicle| Ok(v.price.into()))
///         .align(Alignment::Right),
///     Column::new("Image", |v: &Vehicle| Ok(v.icon.as_str().into())),
/// ];
/// ```
pub struct Column<R> {
    label: String,
    extract: Extractor<R>,
    sort_key: Option<Extractor<R>>,
    align: Alignment,
}

impl<R> Column<R> {
    /// Create a new, unsortable column.
    pub fn new<F>(label: impl Into<String>, extract: F) -> Self
    where
        F: Fn(&R) -> Extracted + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            extract: Arc::new(extract),
            sort_key: None,
            align: Alignment::Left,
        }
    }

    /// Make the column sortable by the given key.
    pub fn sortable<F>(mut self, sort_key: F) -> Self
    where
        F: Fn(&R) -> Extracted + Send + Sync + 'static,
    {
        self.sort_key = Some(Arc::new(sort_key));
        self
    }

    /// Make the column sortable by its displayed value.
    pub fn sort_by_display(mut self) -> Self {
        self.sort_key = Some(Arc::clone(&self.extract));
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// The column label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The column alignment.
    pub fn alignment(&self) -> Alignment {
        self.align
    }

    /// Whether this column has a sort key.
    pub fn is_sortable(&self) -> bool {
        self.sort_key.is_some()
    }

    /// Extract the display value for a row.
    pub fn extract(&self, row: &R) -> Extracted {
        (self.extract)(row)
    }

    /// Extract the sort key for a row, or `None` if the column is not sortable.
    pub fn sort_key(&self, row: &R) -> Option<Extracted> {
        self.sort_key.as_ref().map(|key| key(row))
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            extract: Arc::clone(&self.extract),
            sort_key: self.sort_key.clone(),
            align: self.align,
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("label", &self.label)
            .field("sortable", &self.is_sortable())
            .field("align", &self.align)
            .finish()
    }
}
