//! Errors raised while building or rendering a table

/// Error returned by a column's extractor or sort-key function.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExtractError {
    /// The row has no value for the field the column reads.
    #[error("Field '{field}' missing from row")]
    MissingField { field: String },

    /// The row has a value, but the column cannot use it.
    #[error("{message}")]
    Invalid { message: String },
}

impl ExtractError {
    /// Creates a new missing field error.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Creates a new invalid value error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

/// An extraction failure pinned to the column and row that produced it.
///
/// Neither kind of failure aborts a render. Cell failures are reported per
/// cell; sort-key failures are collected on the projection and the rows they
/// hit are placed last.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Column '{column}' failed on row {row}: {source}")]
pub struct RenderError {
    /// Label of the offending column.
    pub column: String,
    /// Index of the offending row in the source data.
    pub row: usize,
    /// What the extractor reported.
    pub source: ExtractError,
}

impl RenderError {
    /// Creates a new render error.
    pub fn new(column: impl Into<String>, row: usize, source: ExtractError) -> Self {
        Self {
            column: column.into(),
            row,
            source,
        }
    }
}

/// Error raised when a table is constructed from an invalid configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// Two columns share a label. Labels key headers and cells, so they must be unique.
    #[error("Duplicate column label '{label}'")]
    DuplicateLabel { label: String },
}
