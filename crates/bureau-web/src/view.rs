//! Owned view models handed to the page components
//!
//! [`TableView::build`] reads everything the markup needs out of a
//! [`ReportTable`] so components never borrow the record set.

use crate::extractors::table_query::keys;
use crate::extractors::PageToggle;
use crate::links::{QueryPairs, ViewLinks};
use bureau_core::ReportRequest;
use bureau_export::ExportFormat;
use bureau_table::{
    CellContent, CellRenderer, ChartBar, FilterInput, PageSelection, PaginationMeta,
    ReportTable, SortDirection, TableModel,
};

/// What a header cell holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderKind {
    /// Tri-state page selection checkbox
    SelectAll {
        /// Selection of the current page
        selection: PageSelection,
        /// Link that toggles the page selection
        href: String,
    },
    /// Clickable sort header
    Sortable {
        /// Active direction on this column
        direction: Option<SortDirection>,
        /// Link that advances the sort cycle
        href: String,
    },
    /// Static header text
    Plain,
}

/// One header cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    /// Column id
    pub id: String,
    /// Header text
    pub label: String,
    /// Cell kind
    pub kind: HeaderKind,
}

/// One body row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyRow {
    /// Row id
    pub id: usize,
    /// Whether the row is selected
    pub selected: bool,
    /// Link that flips the row selection
    pub toggle_href: String,
    /// Cell contents in visible column order
    pub cells: Vec<CellContent>,
}

/// A column filter control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
    /// Query key of the control
    pub name: String,
    /// Column header
    pub label: String,
    /// Current value, empty when unset
    pub value: String,
    /// Kind of control
    pub input: FilterInput,
}

/// Entry of the column visibility menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityToggle {
    /// Column header
    pub label: String,
    /// Whether the column is shown
    pub visible: bool,
    /// Link that flips visibility
    pub href: String,
}

/// Entry of the export menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportLink {
    /// Menu label
    pub label: &'static str,
    /// Download link
    pub href: String,
}

/// Footer with selection count and paging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerView {
    /// Paging metadata
    pub meta: PaginationMeta,
    /// Link to the previous page
    pub prev_href: Option<String>,
    /// Link to the next page
    pub next_href: Option<String>,
    /// Rows per page choices
    pub page_size_options: Vec<usize>,
    /// Hidden fields of the rows-per-page form
    pub page_size_fields: QueryPairs,
    /// Selected rows that pass the filters
    pub selected_count: usize,
    /// Rows that pass the filters
    pub filtered_count: usize,
}

/// Everything the report table component renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Header cells
    pub headers: Vec<HeaderCell>,
    /// Rows of the current page
    pub rows: Vec<BodyRow>,
    /// Global filter text
    pub global_filter: String,
    /// Column filter controls
    pub filters: Vec<FilterControl>,
    /// Number of active column filters
    pub active_filters: usize,
    /// Link that clears the column filters
    pub clear_filters_href: String,
    /// Column visibility menu
    pub visibility: Vec<VisibilityToggle>,
    /// Export menu
    pub exports: Vec<ExportLink>,
    /// Hidden fields of the search and filter form
    pub filter_form_fields: QueryPairs,
    /// Footer
    pub pager: PagerView,
}

impl TableView {
    /// Snapshot the current page of `table`
    pub fn build(
        table: &ReportTable<'_>,
        request: &ReportRequest,
        page_size_options: &[usize],
    ) -> Self {
        let state = table.state();
        let links = ViewLinks::new(request, state);
        let page = table.visible_rows();
        let page_selection = table.page_selection();

        let headers = table
            .visible_columns()
            .map(|column| {
                let kind = if column.renderer == CellRenderer::Checkbox {
                    let toggle = if page_selection == PageSelection::All {
                        PageToggle::None
                    } else {
                        PageToggle::All
                    };
                    HeaderKind::SelectAll {
                        selection: page_selection,
                        href: links.action(keys::TOGGLE_PAGE, toggle.as_str()),
                    }
                } else if column.can_sort {
                    HeaderKind::Sortable {
                        direction: state.sort_direction(&column.id),
                        href: links.action(keys::TOGGLE_SORT, &column.id),
                    }
                } else {
                    HeaderKind::Plain
                };
                HeaderCell {
                    id: column.id.clone(),
                    label: column.header.clone(),
                    kind,
                }
            })
            .collect();

        let rows = page
            .iter()
            .map(|row| {
                let selected = state.is_selected(row.id);
                BodyRow {
                    id: row.id,
                    selected,
                    toggle_href: links.with(|s| s.toggle_row(row.id, !selected)),
                    cells: table
                        .visible_columns()
                        .map(|column| table.cell(row, column))
                        .collect(),
                }
            })
            .collect();

        let filters = table
            .columns()
            .iter()
            .filter_map(|column| {
                column.filter_input.clone().map(|input| FilterControl {
                    name: format!("{}{}", keys::FILTER_PREFIX, column.id),
                    label: column.header.clone(),
                    value: state.column_filter(&column.id).unwrap_or_default().to_string(),
                    input,
                })
            })
            .collect();

        let visibility = table
            .hideable_columns()
            .map(|column| {
                let visible = state.is_column_visible(&column.id);
                VisibilityToggle {
                    label: column.header.clone(),
                    visible,
                    href: links.with(|s| s.set_column_visible(&column.id, !visible)),
                }
            })
            .collect();

        let exports = ExportFormat::ALL
            .iter()
            .map(|format| ExportLink {
                label: format.label(),
                href: links.export(*format),
            })
            .collect();

        let meta = table.pagination_meta();
        let pager = PagerView {
            prev_href: meta
                .has_prev
                .then(|| links.with(|s| s.pagination.page_index -= 1)),
            next_href: meta
                .has_next
                .then(|| links.with(|s| s.pagination.page_index += 1)),
            page_size_options: page_size_options.to_vec(),
            page_size_fields: links.pairs_without(&[keys::PAGE, keys::PAGE_SIZE], false),
            selected_count: table.filtered_selected_rows().len(),
            filtered_count: meta.total,
            meta,
        };

        Self {
            headers,
            rows,
            global_filter: state.global_filter.clone(),
            filters,
            active_filters: state.column_filters.values().filter(|v| !v.is_empty()).count(),
            clear_filters_href: links.with(|s| {
                s.reset_column_filters();
                s.pagination.page_index = 0;
            }),
            visibility,
            exports,
            filter_form_fields: links.pairs_without(&[keys::GLOBAL_FILTER, keys::PAGE], true),
            pager,
        }
    }

    /// Number of rendered columns, for the empty-table row
    pub fn column_count(&self) -> usize {
        self.headers.len().max(1)
    }
}

/// Body of the report page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportBody {
    /// The fetch failed with this message
    Failed(String),
    /// Chart and table
    Loaded {
        /// Number of fetched records
        fetched: usize,
        /// Per-user bars
        chart: Vec<ChartBar>,
        /// The table
        table: Box<TableView>,
    },
}

/// The report page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPage {
    /// Page heading
    pub title: String,
    /// Request shown in the filter form
    pub request: ReportRequest,
    /// Results
    pub body: ReportBody,
}
