//! Filtering, sorting, paging and selection over an in-memory record set

use crate::column::{ColumnDef, contains_ignore_case};
use crate::state::{SortDirection, TableState};
use bureau_core::Record;
use serde::Serialize;
use serde_json::Value;
use std::cmp::Ordering;
use tracing::trace;

/// A record together with its row id
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row<'a> {
    /// Index of the record in the fetched set
    pub id: usize,
    /// The record
    pub record: &'a Record,
}

/// Selection state of the rows on the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSelection {
    /// Every row on the page is selected
    All,
    /// Some but not all rows are selected
    Some,
    /// No row is selected, or the page is empty
    None,
}

/// Pagination metadata for rendering and API responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    /// Current page (1-based)
    pub page: usize,

    /// Rows per page
    pub per_page: usize,

    /// Rows passing the filters
    pub total: usize,

    /// Total number of pages, at least 1
    pub total_pages: usize,

    /// Whether there's a next page
    pub has_next: bool,

    /// Whether there's a previous page
    pub has_prev: bool,

    /// Next page number (if exists)
    pub next_page: Option<usize>,

    /// Previous page number (if exists)
    pub prev_page: Option<usize>,
}

/// The row pipeline of a table: filter, then sort, then cut out a page
pub trait TableModel<'a> {
    /// Rows passing every active column filter and the global filter, in
    /// fetch order
    fn apply_filter(&self) -> Vec<Row<'a>>;

    /// Order rows by the active sort; ties keep their relative order
    fn apply_sort(&self, rows: Vec<Row<'a>>) -> Vec<Row<'a>>;

    /// The current page of already sorted rows
    fn apply_pagination(&self, rows: Vec<Row<'a>>) -> Vec<Row<'a>>;

    /// Rows shown on screen
    fn visible_rows(&self) -> Vec<Row<'a>> {
        self.apply_pagination(self.apply_sort(self.apply_filter()))
    }
}

/// Table over a borrowed record set
#[derive(Debug, Clone)]
pub struct ReportTable<'a> {
    records: &'a [Record],
    columns: &'a [ColumnDef],
    state: TableState,
}

impl<'a> ReportTable<'a> {
    /// Build a table and bring the page index back in range.
    ///
    /// A page starting past the last filtered row resets to the first page.
    pub fn new(records: &'a [Record], columns: &'a [ColumnDef], state: TableState) -> Self {
        let mut table = Self {
            records,
            columns,
            state,
        };
        table.state.pagination.page_size = table.state.pagination.page_size.max(1);
        table.normalize_page_index();
        table
    }

    fn normalize_page_index(&mut self) {
        let filtered = self.apply_filter().len();
        let start = self.state.pagination.page_index * self.state.pagination.page_size;
        if self.state.pagination.page_index > 0 && start >= filtered {
            trace!(
                page_index = self.state.pagination.page_index,
                filtered, "Page out of range, resetting to first page"
            );
            self.state.pagination.page_index = 0;
        }
    }

    /// Current view state
    #[must_use]
    pub const fn state(&self) -> &TableState {
        &self.state
    }

    /// Give back the view state
    #[must_use]
    pub fn into_state(self) -> TableState {
        self.state
    }

    /// All column definitions
    #[must_use]
    pub const fn columns(&self) -> &'a [ColumnDef] {
        self.columns
    }

    /// Number of fetched records
    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.records.len()
    }

    /// Columns currently shown; fixed columns cannot be hidden
    pub fn visible_columns(&self) -> impl Iterator<Item = &'a ColumnDef> + '_ {
        self.columns
            .iter()
            .filter(|c| !c.can_hide || self.state.is_column_visible(&c.id))
    }

    /// Columns offered in the visibility menu
    pub fn hideable_columns(&self) -> impl Iterator<Item = &'a ColumnDef> {
        self.columns.iter().filter(|c| c.can_hide)
    }

    /// Column by id
    #[must_use]
    pub fn column(&self, id: &str) -> Option<&'a ColumnDef> {
        self.columns.iter().find(|c| c.id == id)
    }

    fn rows(&self) -> impl Iterator<Item = Row<'a>> {
        self.records
            .iter()
            .enumerate()
            .map(|(id, record)| Row { id, record })
    }

    fn passes_column_filters(&self, record: &Record) -> bool {
        self.state
            .column_filters
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .all(|(column_id, value)| {
                match self
                    .column(column_id)
                    .and_then(|c| c.accessor.as_deref().map(|field| (c, field)))
                {
                    Some((column, field)) => column
                        .filter_fn
                        .matches(record.text(field).as_deref(), value),
                    None => true,
                }
            })
    }

    fn passes_global_filter(&self, record: &Record) -> bool {
        let needle = self.state.global_filter.as_str();
        if needle.is_empty() {
            return true;
        }
        self.visible_columns()
            .filter_map(|c| c.accessor.as_deref())
            .filter_map(|field| record.text(field))
            .any(|text| contains_ignore_case(&text, needle))
    }

    /// Number of pages, at least 1
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.page_count_for(self.apply_filter().len())
    }

    fn page_count_for(&self, filtered: usize) -> usize {
        filtered.div_ceil(self.state.pagination.page_size).max(1)
    }

    /// Whether a previous page exists
    #[must_use]
    pub const fn can_previous_page(&self) -> bool {
        self.state.pagination.page_index > 0
    }

    /// Whether a next page exists
    #[must_use]
    pub fn can_next_page(&self) -> bool {
        self.state.pagination.page_index + 1 < self.page_count()
    }

    /// Paging metadata for the current page
    #[must_use]
    pub fn pagination_meta(&self) -> PaginationMeta {
        let total = self.apply_filter().len();
        let total_pages = self.page_count_for(total);
        let page = self.state.pagination.page_index + 1;
        let has_next = page < total_pages;
        let has_prev = page > 1;

        PaginationMeta {
            page,
            per_page: self.state.pagination.page_size,
            total,
            total_pages,
            has_next,
            has_prev,
            next_page: has_next.then_some(page + 1),
            prev_page: has_prev.then(|| page - 1),
        }
    }

    /// Tri-state selection of the current page
    #[must_use]
    pub fn page_selection(&self) -> PageSelection {
        let page = self.visible_rows();
        let selected = page
            .iter()
            .filter(|row| self.state.is_selected(row.id))
            .count();
        match selected {
            0 => PageSelection::None,
            n if n == page.len() => PageSelection::All,
            _ => PageSelection::Some,
        }
    }

    /// Select or deselect every row on the current page, leaving other
    /// pages untouched
    pub fn toggle_all_page_rows_selected(&mut self, selected: bool) {
        let ids: Vec<usize> = self.visible_rows().iter().map(|row| row.id).collect();
        for id in ids {
            self.state.toggle_row(id, selected);
        }
    }

    /// Selected rows that pass the active filters, in fetch order
    #[must_use]
    pub fn filtered_selected_rows(&self) -> Vec<Row<'a>> {
        self.apply_filter()
            .into_iter()
            .filter(|row| self.state.is_selected(row.id))
            .collect()
    }

    /// Advance the sort cycle of a sortable column; other ids are ignored
    pub fn toggle_sort(&mut self, column_id: &str) {
        if self.column(column_id).is_some_and(|c| c.can_sort) {
            self.state.toggle_sort(column_id);
        }
    }
}

/// Sort key of a cell: numbers before strings, absent values last
#[derive(Debug, PartialEq)]
enum SortKey {
    Number(f64),
    Text(String),
    Missing,
}

impl SortKey {
    fn of(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Missing,
            Some(Value::Number(n)) => n.as_f64().map_or(Self::Missing, Self::Number),
            Some(Value::String(s)) => Self::Text(s.clone()),
            Some(other) => Self::Text(other.to_string()),
        }
    }

    fn compare(&self, other: &Self, direction: SortDirection) -> Ordering {
        let directed = |ordering: Ordering| match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        };
        match (self, other) {
            (Self::Missing, Self::Missing) => Ordering::Equal,
            (Self::Missing, _) => Ordering::Greater,
            (_, Self::Missing) => Ordering::Less,
            (Self::Number(a), Self::Number(b)) => {
                directed(a.partial_cmp(b).unwrap_or(Ordering::Equal))
            }
            (Self::Text(a), Self::Text(b)) => directed(a.cmp(b)),
            (Self::Number(_), Self::Text(_)) => directed(Ordering::Less),
            (Self::Text(_), Self::Number(_)) => directed(Ordering::Greater),
        }
    }
}

impl<'a> TableModel<'a> for ReportTable<'a> {
    fn apply_filter(&self) -> Vec<Row<'a>> {
        self.rows()
            .filter(|row| {
                self.passes_column_filters(row.record) && self.passes_global_filter(row.record)
            })
            .collect()
    }

    fn apply_sort(&self, mut rows: Vec<Row<'a>>) -> Vec<Row<'a>> {
        let Some(sort) = &self.state.sorting else {
            return rows;
        };
        let Some(field) = self
            .column(&sort.column)
            .filter(|c| c.can_sort)
            .and_then(|c| c.accessor.as_deref())
        else {
            return rows;
        };

        rows.sort_by(|a, b| {
            SortKey::of(a.record.get(field))
                .compare(&SortKey::of(b.record.get(field)), sort.direction)
        });
        rows
    }

    fn apply_pagination(&self, rows: Vec<Row<'a>>) -> Vec<Row<'a>> {
        let size = self.state.pagination.page_size;
        let start = self.state.pagination.page_index * size;
        rows.into_iter().skip(start).take(size).collect()
    }
}
