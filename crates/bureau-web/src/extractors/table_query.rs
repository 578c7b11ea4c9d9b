//! Report page query extractor
//!
//! The report page keeps its whole view in the query string so every
//! link and form submission round-trips through the server.

use crate::extractors::ExtractorError;
use crate::state::AppState;
use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use bureau_core::config::ReportConfig;
use bureau_core::{Record, ReportRequest};
use bureau_table::{ColumnDef, ReportTable, SortDirection, SortState, TableState};
use chrono::{Local, NaiveDate};
use indexmap::IndexMap;
use std::{collections::BTreeSet, str::FromStr, sync::Arc};
use validator::Validate;

/// Query parameter names
pub mod keys {
    /// Report search criteria
    pub const SEARCH_CRITERIA: &str = "SearchCriteria";
    /// Report category
    pub const CATEGORY: &str = "Category";
    /// Report start date
    pub const DATE_FROM: &str = "DateFrom";
    /// Report end date
    pub const DATE_TO: &str = "DateTo";
    /// Bypass the report cache
    pub const REFRESH: &str = "refresh";
    /// Global filter text
    pub const GLOBAL_FILTER: &str = "q";
    /// Sorted column id
    pub const SORT: &str = "sort";
    /// Sort descending
    pub const DESC: &str = "desc";
    /// Prefix of per-column filter keys, e.g. `filter.Title`
    pub const FILTER_PREFIX: &str = "filter.";
    /// Hidden column id, repeatable
    pub const HIDE: &str = "hide";
    /// Selected row id, repeatable
    pub const SELECT: &str = "select";
    /// Current page, 1-based
    pub const PAGE: &str = "page";
    /// Rows per page
    pub const PAGE_SIZE: &str = "page_size";
    /// Select or clear every row on the current page
    pub const TOGGLE_PAGE: &str = "toggle_page";
    /// Advance the sort cycle of a column
    pub const TOGGLE_SORT: &str = "toggle_sort";
}

/// Whether a query value switches a flag on
pub(crate) fn is_truthy(value: &str) -> bool {
    matches!(value, "1" | "true" | "on" | "yes")
}

/// Page-wide selection toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToggle {
    /// Select every row on the current page
    All,
    /// Deselect every row on the current page
    None,
}

impl PageToggle {
    /// Query value
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::None => "none",
        }
    }
}

impl FromStr for PageToggle {
    type Err = ExtractorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "none" => Ok(Self::None),
            other => Err(ExtractorError::bad_request(format!(
                "Invalid toggle_page value: {other}"
            ))),
        }
    }
}

/// Everything the report page query string carries
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct TableQuery {
    /// Report filters sent to the data source
    pub request: ReportRequest,

    /// Fetch fresh data instead of using the cache
    pub refresh: bool,

    /// Global filter text
    pub global_filter: String,

    /// Sorted column id
    pub sort: Option<String>,

    /// Sort descending instead of ascending
    pub desc: bool,

    /// Column filter values by column id
    pub column_filters: IndexMap<String, String>,

    /// Hidden column ids
    pub hidden: BTreeSet<String>,

    /// Selected row ids
    pub selected: BTreeSet<usize>,

    /// Current page (1-based)
    #[validate(range(min = 1, max = 10000))]
    pub page: usize,

    /// Rows per page
    #[validate(range(min = 1, max = 1000))]
    pub page_size: usize,

    /// Page-wide selection change to apply
    pub toggle_page: Option<PageToggle>,

    /// Column whose sort cycle advances
    pub toggle_sort: Option<String>,
}

fn parse_number(key: &str, value: &str) -> Result<usize, ExtractorError> {
    value
        .trim()
        .parse()
        .map_err(|_| ExtractorError::bad_request(format!("Invalid {key}: {value}")))
}

impl TableQuery {
    /// Parse a raw query string.
    ///
    /// When none of the report filter keys is present the request starts
    /// from the initial report form for `today`. Unknown keys are ignored.
    pub fn parse(
        query: &str,
        today: NaiveDate,
        report: &ReportConfig,
    ) -> Result<Self, ExtractorError> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)
            .map_err(|e| ExtractorError::bad_request(format!("Invalid query string: {e}")))?;

        let mut request = ReportRequest::default();
        let mut has_request = false;
        let mut parsed = Self {
            request: ReportRequest::default(),
            refresh: false,
            global_filter: String::new(),
            sort: None,
            desc: false,
            column_filters: IndexMap::new(),
            hidden: BTreeSet::new(),
            selected: BTreeSet::new(),
            page: 1,
            page_size: report.default_page_size,
            toggle_page: None,
            toggle_sort: None,
        };

        for (key, value) in pairs {
            match key.as_str() {
                keys::SEARCH_CRITERIA => {
                    request.search_criteria = Some(value);
                    has_request = true;
                }
                keys::CATEGORY => {
                    request.category = Some(value);
                    has_request = true;
                }
                keys::DATE_FROM => {
                    request.date_from = Some(value);
                    has_request = true;
                }
                keys::DATE_TO => {
                    request.date_to = Some(value);
                    has_request = true;
                }
                keys::REFRESH => parsed.refresh = is_truthy(&value),
                keys::GLOBAL_FILTER => parsed.global_filter = value,
                keys::SORT if !value.is_empty() => parsed.sort = Some(value),
                keys::DESC => parsed.desc = is_truthy(&value),
                keys::HIDE if !value.is_empty() => {
                    parsed.hidden.insert(value);
                }
                keys::SELECT => {
                    parsed.selected.insert(parse_number(keys::SELECT, &value)?);
                }
                keys::PAGE => parsed.page = parse_number(keys::PAGE, &value)?,
                keys::PAGE_SIZE => parsed.page_size = parse_number(keys::PAGE_SIZE, &value)?,
                keys::TOGGLE_PAGE => parsed.toggle_page = Some(value.parse()?),
                keys::TOGGLE_SORT if !value.is_empty() => parsed.toggle_sort = Some(value),
                other => {
                    if let Some(column) = other.strip_prefix(keys::FILTER_PREFIX) {
                        if !value.is_empty() {
                            parsed.column_filters.insert(column.to_string(), value);
                        }
                    }
                }
            }
        }

        parsed.request = if has_request {
            request
        } else {
            ReportRequest::initial(today)
        };

        parsed.validate().map_err(|e| {
            ExtractorError::bad_request(format!("Invalid table parameters: {e}"))
        })?;

        if !report.page_size_options.contains(&parsed.page_size) {
            return Err(ExtractorError::bad_request(format!(
                "Invalid page_size: {} (expected one of {:?})",
                parsed.page_size, report.page_size_options
            )));
        }

        Ok(parsed)
    }

    /// Table state described by the query, before toggles are applied
    pub fn table_state(&self) -> TableState {
        let direction = if self.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };

        let mut state = TableState {
            sorting: self.sort.clone().map(|column| SortState { column, direction }),
            column_filters: self.column_filters.clone(),
            global_filter: self.global_filter.clone(),
            row_selection: self.selected.clone(),
            hidden_columns: self.hidden.clone(),
            ..TableState::default()
        };
        state.set_page_size(self.page_size);
        state.pagination.page_index = self.page.saturating_sub(1);
        state
    }

    /// Build the table over `records` and apply the requested toggles
    pub fn build_table<'a>(&self, records: &'a [Record], columns: &'a [ColumnDef]) -> ReportTable<'a> {
        let mut table = ReportTable::new(records, columns, self.table_state());

        if let Some(column) = &self.toggle_sort {
            table.toggle_sort(column);
        }
        if let Some(toggle) = self.toggle_page {
            table.toggle_all_page_rows_selected(toggle == PageToggle::All);
        }
        table
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for TableQuery
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = ExtractorError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app = Arc::<AppState>::from_ref(state);
        let today = Local::now().date_naive();
        Self::parse(
            parts.uri.query().unwrap_or_default(),
            today,
            &app.config.report,
        )
    }
}
