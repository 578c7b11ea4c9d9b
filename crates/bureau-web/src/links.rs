//! Query-string links that carry the report view state

use crate::extractors::table_query::keys;
use crate::routes::{REPORT_PATH, export_path};
use bureau_core::ReportRequest;
use bureau_export::ExportFormat;
use bureau_table::{SortDirection, TableState};

/// A query string as ordered key/value pairs
pub type QueryPairs = Vec<(String, String)>;

fn pair(key: &str, value: impl Into<String>) -> (String, String) {
    (key.to_string(), value.into())
}

/// Encode pairs as `path?query`, or just `path` when there are none
pub fn href(path: &str, pairs: &[(String, String)]) -> String {
    if pairs.is_empty() {
        return path.to_string();
    }
    let query = serde_urlencoded::to_string(pairs).unwrap_or_default();
    format!("{path}?{query}")
}

/// Pairs describing a report request
pub fn request_pairs(request: &ReportRequest) -> QueryPairs {
    [
        (keys::SEARCH_CRITERIA, &request.search_criteria),
        (keys::CATEGORY, &request.category),
        (keys::DATE_FROM, &request.date_from),
        (keys::DATE_TO, &request.date_to),
    ]
    .into_iter()
    .filter_map(|(key, value)| value.as_ref().map(|v| pair(key, v.as_str())))
    .collect()
}

/// Pairs describing a table state
pub fn state_pairs(state: &TableState) -> QueryPairs {
    let mut pairs = Vec::new();

    if !state.global_filter.is_empty() {
        pairs.push(pair(keys::GLOBAL_FILTER, state.global_filter.as_str()));
    }
    if let Some(sort) = &state.sorting {
        pairs.push(pair(keys::SORT, sort.column.as_str()));
        if sort.direction == SortDirection::Desc {
            pairs.push(pair(keys::DESC, "1"));
        }
    }
    for (column, value) in &state.column_filters {
        if !value.is_empty() {
            pairs.push(pair(&format!("{}{column}", keys::FILTER_PREFIX), value.as_str()));
        }
    }
    for column in &state.hidden_columns {
        pairs.push(pair(keys::HIDE, column.as_str()));
    }
    for row in &state.row_selection {
        pairs.push(pair(keys::SELECT, row.to_string()));
    }
    if state.pagination.page_index > 0 {
        pairs.push(pair(keys::PAGE, (state.pagination.page_index + 1).to_string()));
    }
    pairs.push(pair(keys::PAGE_SIZE, state.pagination.page_size.to_string()));

    pairs
}

/// Link builder for one rendered report view
#[derive(Debug, Clone)]
pub struct ViewLinks {
    request: ReportRequest,
    state: TableState,
}

impl ViewLinks {
    /// Links for `request` viewed with `state`
    pub fn new(request: &ReportRequest, state: &TableState) -> Self {
        Self {
            request: request.clone(),
            state: state.clone(),
        }
    }

    /// Every pair of the current view
    pub fn pairs(&self) -> QueryPairs {
        self.pairs_for(&self.state)
    }

    fn pairs_for(&self, state: &TableState) -> QueryPairs {
        let mut pairs = request_pairs(&self.request);
        pairs.extend(state_pairs(state));
        pairs
    }

    /// Pairs of the current view minus the given keys and filter keys when
    /// `drop_filters` is set; used for hidden form fields
    pub fn pairs_without(&self, drop: &[&str], drop_filters: bool) -> QueryPairs {
        self.pairs()
            .into_iter()
            .filter(|(key, _)| !drop.contains(&key.as_str()))
            .filter(|(key, _)| !(drop_filters && key.starts_with(keys::FILTER_PREFIX)))
            .collect()
    }

    /// Report page showing the current view
    pub fn current(&self) -> String {
        href(REPORT_PATH, &self.pairs())
    }

    /// Report page after changing the view state
    pub fn with(&self, change: impl FnOnce(&mut TableState)) -> String {
        let mut state = self.state.clone();
        change(&mut state);
        href(REPORT_PATH, &self.pairs_for(&state))
    }

    /// Report page with a one-shot action key added to the current view
    pub fn action(&self, key: &str, value: &str) -> String {
        let mut pairs = self.pairs();
        pairs.push(pair(key, value));
        href(REPORT_PATH, &pairs)
    }

    /// Download of the current view in `format`
    pub fn export(&self, format: ExportFormat) -> String {
        href(&export_path(format), &self.pairs())
    }
}
