//! In-memory table engine for bureau usage reports
//!
//! [`ReportTable`] runs the filter, sort and pagination pipeline over a
//! borrowed record set according to a [`TableState`], and tracks row
//! selection and column visibility. [`column`] declares the bureau usage
//! columns, [`highlight`] emphasizes title filter matches and [`chart`]
//! aggregates records for the bar chart.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, missing_docs)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

pub mod cell;
pub mod chart;
pub mod column;
pub mod engine;
pub mod highlight;
pub mod state;

pub use cell::CellContent;
pub use chart::{ChartBar, chart_bars, count_by_user, unique_user_ids};
pub use column::{
    ACTIONS_COLUMN, BadgeVariant, CellRenderer, ColumnDef, FilterFn, FilterInput, SELECT_COLUMN,
    bureau_usage_columns,
};
pub use engine::{PageSelection, PaginationMeta, ReportTable, Row, TableModel};
pub use highlight::{Segment, highlight};
pub use state::{
    DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, PaginationState, SortDirection, SortState, TableState,
};
