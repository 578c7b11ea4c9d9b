//! Which rows and columns an export covers

use bureau_core::Record;
use bureau_table::{ReportTable, TableModel};

/// Rows to export: the selected rows that pass the active filters, or every
/// filtered row when none of them is selected. Rows keep fetch order.
pub fn export_rows<'a>(table: &ReportTable<'a>) -> Vec<&'a Record> {
    let selected = table.filtered_selected_rows();
    let rows = if selected.is_empty() {
        table.apply_filter()
    } else {
        selected
    };
    rows.into_iter().map(|row| row.record).collect()
}

/// Columns to export: the field names of the first fetched record
pub fn export_columns(records: &[Record]) -> Vec<String> {
    records
        .first()
        .map(|record| record.field_names().map(ToString::to_string).collect())
        .unwrap_or_default()
}
