//! Table state and render projection.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::error::{RenderError, TableError};

use super::item::{Alignment, Column};
use super::sort::{toggle_sort, SortDirection, SortState};
use super::value::Value;

/// A rendered cell: the extracted value, or the failure that replaced it.
pub type Cell = Result<Value, RenderError>;

/// A header cell in the rendered projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    /// Column label.
    pub label: String,
    /// Column alignment.
    pub align: Alignment,
    /// Whether clicking this header toggles sorting.
    pub sortable: bool,
    /// Current direction if this is the active sort column.
    pub sorted: Option<SortDirection>,
    /// Number of rows whose sort key failed on this column.
    pub key_errors: usize,
}

/// A body row in the rendered projection.
#[derive(Debug, Clone)]
pub struct BodyRow<'a, R> {
    /// Position of the row in the source data.
    pub index: usize,
    /// The source row.
    pub row: &'a R,
    /// One cell per column, in column order.
    pub cells: Vec<Cell>,
}

impl<R> BodyRow<'_, R> {
    /// Check if any cell failed to extract.
    pub fn has_errors(&self) -> bool {
        self.cells.iter().any(Result::is_err)
    }
}

/// Header and body projection of a table, ready for a view layer.
#[derive(Debug, Clone)]
pub struct RenderedTable<'a, R> {
    /// Header cells, in column order.
    pub header: Vec<HeaderCell>,
    /// Body rows, in display order.
    pub rows: Vec<BodyRow<'a, R>>,
    /// Sort-key failures on the active column. Those rows are placed last.
    pub sort_errors: Vec<RenderError>,
}

impl<R> RenderedTable<'_, R> {
    /// Source indices of the body rows, in display order.
    pub fn order(&self) -> Vec<usize> {
        self.rows.iter().map(|r| r.index).collect()
    }

    /// Every cell failure in the projection.
    pub fn errors(&self) -> impl Iterator<Item = &RenderError> {
        self.rows
            .iter()
            .flat_map(|r| r.cells.iter())
            .filter_map(|c| c.as_ref().err())
    }

    /// Check if the sort column failed on any row.
    pub fn has_sort_errors(&self) -> bool {
        !self.sort_errors.is_empty()
    }
}

/// Compute the display order of `rows` under `sort`, plus any sort-key failures.
///
/// Always starts from the original order and uses a stable sort, so rows
/// with equal keys keep their relative order. Rows whose key failed go after
/// every keyed row, in original order, in both directions.
fn display_order<R>(
    rows: &[R],
    columns: &[Column<R>],
    sort: &SortState,
) -> (Vec<usize>, Vec<RenderError>) {
    let mut order: Vec<usize> = (0..rows.len()).collect();

    let Some(label) = sort.active.as_deref() else {
        return (order, Vec::new());
    };
    let Some(column) = columns.iter().find(|c| c.label() == label) else {
        return (order, Vec::new());
    };

    let mut keys: Vec<Option<Value>> = Vec::with_capacity(rows.len());
    let mut errors = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        match column.sort_key(row) {
            Some(Ok(key)) => keys.push(Some(key)),
            Some(Err(source)) => {
                log::warn!("[table] Sort key '{}' failed on row {}: {}", label, index, source);
                errors.push(RenderError::new(label, index, source));
                keys.push(None);
            }
            None => return (order, Vec::new()),
        }
    }

    order.sort_by(|&a, &b| match (&keys[a], &keys[b]) {
        (Some(ka), Some(kb)) => sort.direction.apply(ka.cmp(kb)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    (order, errors)
}

/// Render `rows` under `columns` and `sort`.
///
/// Failures never abort the pass. Cell extraction failures are reported per
/// cell; sort-key failures are collected in [`RenderedTable::sort_errors`]
/// and the affected rows are placed last.
pub fn render<'a, R>(
    rows: &'a [R],
    columns: &[Column<R>],
    sort: &SortState,
) -> RenderedTable<'a, R> {
    let (order, sort_errors) = display_order(rows, columns, sort);

    let header = columns
        .iter()
        .map(|c| {
            let sorted = if c.is_sortable() {
                sort.direction_of(c.label())
            } else {
                None
            };
            HeaderCell {
                label: c.label().to_string(),
                align: c.alignment(),
                sortable: c.is_sortable(),
                sorted,
                key_errors: if sorted.is_some() { sort_errors.len() } else { 0 },
            }
        })
        .collect();

    let rows = order
        .into_iter()
        .map(|index| {
            let row = &rows[index];
            let cells = columns
                .iter()
                .map(|c| {
                    c.extract(row)
                        .map_err(|source| RenderError::new(c.label(), index, source))
                })
                .collect();
            BodyRow { index, row, cells }
        })
        .collect();

    RenderedTable {
        header,
        rows,
        sort_errors,
    }
}

/// A sortable table: columns, rows in their original order, and sort state.
///
/// # Example
///
/// ```ignore
/// let mut table = Table::new(columns, vehicles)?;
/// table.toggle_sort("Price");
/// let view = table.render();
/// ```
#[derive(Debug, Clone)]
pub struct Table<R> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    sort: SortState,
}

impl<R> Table<R> {
    /// Create a table. Fails if two columns share a label.
    pub fn new(columns: Vec<Column<R>>, rows: Vec<R>) -> Result<Self, TableError> {
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.label()) {
                return Err(TableError::DuplicateLabel {
                    label: column.label().to_string(),
                });
            }
        }

        Ok(Self {
            columns,
            rows,
            sort: SortState::new(),
        })
    }

    /// Column definitions.
    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    /// Look up a column by label.
    pub fn column(&self, label: &str) -> Option<&Column<R>> {
        self.columns.iter().find(|c| c.label() == label)
    }

    /// Check if the column labelled `label` can be sorted.
    pub fn is_sortable(&self, label: &str) -> bool {
        self.column(label).is_some_and(Column::is_sortable)
    }

    /// Rows in their original order.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Replace the rows. This re-mounts the table, so sorting is reset.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.sort = SortState::new();
    }

    /// Current sort state.
    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Toggle sorting on a column and return the new state.
    ///
    /// See [`toggle_sort`] for the rules.
    pub fn toggle_sort(&mut self, label: &str) -> &SortState {
        self.sort = toggle_sort(&self.sort, &self.columns, label);
        &self.sort
    }

    /// Clear sort state.
    pub fn clear_sort(&mut self) {
        self.sort = SortState::new();
    }

    /// Render the table under its current sort state.
    pub fn render(&self) -> RenderedTable<'_, R> {
        render(&self.rows, &self.columns, &self.sort)
    }
}
