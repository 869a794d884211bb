//! Sort state and the toggle rules.

use std::cmp::Ordering;

use super::item::Column;

/// Sort direction for a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Apply this direction to an ascending comparison result.
    ///
    /// Descending is the exact reverse of ascending, so equal keys stay equal
    /// and a stable sort keeps their original order in both directions.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    /// Header indicator for this direction.
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// Which column a table is sorted by, if any.
///
/// The initial state has no active column, meaning rows appear in their
/// original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    /// Label of the active sort column.
    pub active: Option<String>,
    /// Direction applied to the active column.
    pub direction: SortDirection,
}

impl SortState {
    /// Unsorted state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sorted by `label` in `direction`.
    pub fn by(label: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            active: Some(label.into()),
            direction,
        }
    }

    /// Check if any column is active.
    pub fn is_sorted(&self) -> bool {
        self.active.is_some()
    }

    /// Direction for `label`, if it is the active column.
    pub fn direction_of(&self, label: &str) -> Option<SortDirection> {
        match &self.active {
            Some(active) if active == label => Some(self.direction),
            _ => None,
        }
    }
}

/// Toggle sorting on the column labelled `label`.
///
/// If the column is already sorted, flips the direction. If sorting a
/// different column, sorts ascending. Unknown or unsortable columns leave the
/// state unchanged.
pub fn toggle_sort<R>(state: &SortState, columns: &[Column<R>], label: &str) -> SortState {
    let sortable = columns
        .iter()
        .find(|c| c.label() == label)
        .is_some_and(|c| c.is_sortable());

    if !sortable {
        log::debug!("[table] Ignoring sort toggle on unsortable column '{}'", label);
        return state.clone();
    }

    let next = match state.direction_of(label) {
        Some(direction) => SortState::by(label, direction.reverse()),
        None => SortState::by(label, SortDirection::Ascending),
    };
    log::debug!("[table] Sort toggled: '{}' {:?}", label, next.direction);
    next
}
