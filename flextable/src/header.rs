//! Sort wiring for the header row.
//!
//! The table is controlled: it never stores which column is sorted. The
//! caller passes a [`SortState`] in and receives sort requests through a
//! [`SortHandler`].

use std::sync::Arc;

use crate::column::Icon;
use crate::descriptor::ColumnDescriptor;
use crate::handler::EventKind;
use crate::types::{SortDirection, SortKey};
use crate::value::Resolvable;

/// Called with the column's key when a sortable header cell is clicked.
pub type SortHandler = Arc<dyn Fn(&SortKey) + Send + Sync>;

/// The caller's current sort, read-only to the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    pub criterion: Option<SortKey>,
    pub direction: Option<SortDirection>,
}

impl SortState {
    pub fn new(criterion: impl Into<SortKey>, direction: SortDirection) -> Self {
        Self {
            criterion: Some(criterion.into()),
            direction: Some(direction),
        }
    }

    pub fn unsorted() -> Self {
        Self::default()
    }

    /// Whether the table is currently sorted by `key`.
    pub fn is_sorted_by(&self, key: &SortKey) -> bool {
        self.criterion.as_ref() == Some(key)
    }
}

/// Wire sorting into the header descriptors.
///
/// Each sortable column gets `on_sort(key)` appended after its own click
/// handlers, so both always run. The column matching the active criterion
/// gets a sort indicator in place of its icons. Columns without a sort key
/// come back untouched.
pub fn compose_header(
    columns: &[ColumnDescriptor],
    sort: &SortState,
    on_sort: &SortHandler,
) -> Vec<ColumnDescriptor> {
    columns
        .iter()
        .map(|column| {
            let Some(key) = column.sort_key.clone() else {
                return column.clone();
            };

            let mut column = column.clone();
            if sort.is_sorted_by(&key) {
                column.icons = Resolvable::Literal(vec![Icon::SortIndicator(sort.direction)]);
            }

            let on_sort = Arc::clone(on_sort);
            column.handlers.on(EventKind::Click, move |_| on_sort(&key));
            column
        })
        .collect()
}
