//! Leptos components rendered on the server

mod bar_chart;
mod data_table;
mod document;
mod filter_form;
mod icons;
mod pagination;
mod panels;
mod toolbar;

pub use bar_chart::BarChart;
pub use data_table::DataTable;
pub use document::Document;
pub use filter_form::ReportFilterForm;
pub use icons::{
    ICON_BUILDING, ICON_COLUMNS, ICON_DOTS, ICON_DOWNLOAD, ICON_FUNNEL, ICON_LOG_OUT, ICON_MOON,
    ICON_REPORT, Icon,
};
pub use pagination::Pagination;
pub use panels::{EmptyPanel, ErrorPanel};
pub use toolbar::{HiddenFields, TableToolbar};
