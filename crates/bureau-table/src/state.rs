//! Table view state: sorting, filters, selection, visibility and paging

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Page sizes offered by the page size selector
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [10, 20, 30, 40, 50];

/// Rows per page before the user picks a size
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first
    Asc,
    /// Largest first
    Desc,
}

/// Active sort column and direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    /// Column id
    pub column: String,
    /// Direction
    pub direction: SortDirection,
}

/// Page position and size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    /// Zero-based page index
    pub page_index: usize,
    /// Rows per page
    pub page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Everything the user has changed about how the table is viewed.
///
/// Row ids are indices into the fetched record set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableState {
    /// Single-column sort, if any
    pub sorting: Option<SortState>,
    /// Column filter values by column id
    pub column_filters: IndexMap<String, String>,
    /// Filter applied across all visible data columns
    pub global_filter: String,
    /// Selected row ids
    pub row_selection: BTreeSet<usize>,
    /// Hidden column ids
    pub hidden_columns: BTreeSet<String>,
    /// Paging
    pub pagination: PaginationState,
}

impl TableState {
    /// Advance the sort cycle of `column`: unset, ascending, descending, unset.
    ///
    /// Sorting a different column starts it at ascending.
    pub fn toggle_sort(&mut self, column: &str) {
        self.sorting = match self.sorting.take() {
            Some(SortState {
                column: current,
                direction: SortDirection::Asc,
            }) if current == column => Some(SortState {
                column: current,
                direction: SortDirection::Desc,
            }),
            Some(SortState {
                column: current,
                direction: SortDirection::Desc,
            }) if current == column => None,
            _ => Some(SortState {
                column: column.to_string(),
                direction: SortDirection::Asc,
            }),
        };
    }

    /// Sort direction of `column`, if it is the sorted column
    #[must_use]
    pub fn sort_direction(&self, column: &str) -> Option<SortDirection> {
        self.sorting
            .as_ref()
            .filter(|s| s.column == column)
            .map(|s| s.direction)
    }

    /// Set or clear (on empty value) a column filter
    pub fn set_column_filter(&mut self, column: &str, value: &str) {
        if value.is_empty() {
            self.column_filters.shift_remove(column);
        } else {
            self.column_filters
                .insert(column.to_string(), value.to_string());
        }
    }

    /// Active filter value for `column`
    #[must_use]
    pub fn column_filter(&self, column: &str) -> Option<&str> {
        self.column_filters
            .get(column)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Remove every column filter
    pub fn reset_column_filters(&mut self) {
        self.column_filters.clear();
    }

    /// Select or deselect one row
    pub fn toggle_row(&mut self, row_id: usize, selected: bool) {
        if selected {
            self.row_selection.insert(row_id);
        } else {
            self.row_selection.remove(&row_id);
        }
    }

    /// Whether a row is selected
    #[must_use]
    pub fn is_selected(&self, row_id: usize) -> bool {
        self.row_selection.contains(&row_id)
    }

    /// Show or hide a column
    pub fn set_column_visible(&mut self, column: &str, visible: bool) {
        if visible {
            self.hidden_columns.remove(column);
        } else {
            self.hidden_columns.insert(column.to_string());
        }
    }

    /// Whether a column is shown
    #[must_use]
    pub fn is_column_visible(&self, column: &str) -> bool {
        !self.hidden_columns.contains(column)
    }

    /// Change rows per page, keeping the first visible row on screen
    pub fn set_page_size(&mut self, page_size: usize) {
        let page_size = page_size.max(1);
        let first_row = self.pagination.page_index * self.pagination.page_size;
        self.pagination = PaginationState {
            page_index: first_row / page_size,
            page_size,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sort_cycle() {
        let mut state = TableState::default();
        assert_eq!(state.sort_direction("Value"), None);

        state.toggle_sort("Value");
        assert_eq!(state.sort_direction("Value"), Some(SortDirection::Asc));

        state.toggle_sort("Value");
        assert_eq!(state.sort_direction("Value"), Some(SortDirection::Desc));

        state.toggle_sort("Value");
        assert_eq!(state.sorting, None);
    }

    #[test]
    fn test_sorting_another_column_restarts_cycle() {
        let mut state = TableState::default();
        state.toggle_sort("Value");
        state.toggle_sort("Value");
        state.toggle_sort("Title");

        assert_eq!(state.sort_direction("Title"), Some(SortDirection::Asc));
        assert_eq!(state.sort_direction("Value"), None);
    }

    #[test]
    fn test_empty_filter_value_clears_filter() {
        let mut state = TableState::default();
        state.set_column_filter("Title", "report");
        assert_eq!(state.column_filter("Title"), Some("report"));

        state.set_column_filter("Title", "");
        assert_eq!(state.column_filter("Title"), None);
        assert!(state.column_filters.is_empty());
    }

    #[test]
    fn test_row_selection_toggle() {
        let mut state = TableState::default();
        state.toggle_row(3, true);
        state.toggle_row(1, true);
        state.toggle_row(3, false);

        assert!(state.is_selected(1));
        assert!(!state.is_selected(3));
    }

    #[test]
    fn test_column_visibility() {
        let mut state = TableState::default();
        state.set_column_visible("Date", false);
        assert!(!state.is_column_visible("Date"));
        state.set_column_visible("Date", true);
        assert!(state.is_column_visible("Date"));
    }

    #[test]
    fn test_page_size_change_keeps_first_row() {
        let mut state = TableState::default();
        state.pagination.page_index = 3; // rows 30..40
        state.set_page_size(20);

        assert_eq!(state.pagination, PaginationState {
            page_index: 1,
            page_size: 20
        });
    }
}
