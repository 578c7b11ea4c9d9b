//! Cell content derived from a column's renderer

use crate::column::{BadgeVariant, CellRenderer, ColumnDef};
use crate::engine::{ReportTable, Row};
use crate::highlight::{Segment, highlight};
use bureau_core::types::fields;
use bureau_core::utils::{format_currency, format_display_date, parse_leading_float};
use serde::Serialize;

/// What a cell shows, independent of markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CellContent {
    /// Selection checkbox
    Checkbox {
        /// Whether the row is selected
        checked: bool,
    },
    /// Plain text
    Text {
        /// Text
        text: String,
    },
    /// Title split around filter matches
    Highlighted {
        /// Segments in order
        segments: Vec<Segment>,
    },
    /// Category badge
    Badge {
        /// Visual variant
        variant: BadgeVariant,
        /// Lower-cased label
        label: String,
    },
    /// Formatted date
    Date {
        /// `M/D/YYYY` or `Invalid Date`
        text: String,
    },
    /// Formatted amount
    Currency {
        /// `$1,234.50` or `$NaN`
        text: String,
    },
    /// Row action menu
    Actions {
        /// User id offered for copying
        user_id: Option<String>,
        /// Title shown by "View Details"
        title: Option<String>,
    },
}

impl ReportTable<'_> {
    /// Content of `row` in `column`
    #[must_use]
    pub fn cell(&self, row: &Row<'_>, column: &ColumnDef) -> CellContent {
        let record = row.record;
        let text = || {
            column
                .accessor
                .as_deref()
                .and_then(|field| record.text(field))
                .unwrap_or_default()
        };

        match column.renderer {
            CellRenderer::Checkbox => CellContent::Checkbox {
                checked: self.state().is_selected(row.id),
            },
            CellRenderer::Text => CellContent::Text { text: text() },
            CellRenderer::Highlight => {
                let title = text();
                match self.state().column_filter(&column.id) {
                    Some(filter) if !title.is_empty() => CellContent::Highlighted {
                        segments: highlight(&title, filter),
                    },
                    _ => CellContent::Text { text: title },
                }
            }
            CellRenderer::Badge => {
                let category = column.accessor.as_deref().and_then(|f| record.text(f));
                CellContent::Badge {
                    variant: BadgeVariant::for_category(category.as_deref()),
                    label: category.unwrap_or_default().to_lowercase(),
                }
            }
            CellRenderer::Date => CellContent::Date {
                text: format_display_date(
                    column
                        .accessor
                        .as_deref()
                        .and_then(|f| record.text(f))
                        .as_deref(),
                ),
            },
            CellRenderer::Currency => CellContent::Currency {
                text: format_currency(parse_leading_float(
                    column.accessor.as_deref().and_then(|f| record.get(f)),
                )),
            },
            CellRenderer::Actions => CellContent::Actions {
                user_id: record.user_id(),
                title: record.text(fields::TITLE),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::bureau_usage_columns;
    use crate::engine::TableModel;
    use crate::state::TableState;
    use bureau_core::Record;
    use pretty_assertions::assert_eq;

    fn records() -> Vec<Record> {
        vec![
            Record::new()
                .with(fields::USER_ID, "user123")
                .with(fields::TITLE, "Report 1")
                .with(fields::CATEGORY, "Category A")
                .with(fields::DATE, "2024-01-15")
                .with(fields::VALUE, 1234.5),
            Record::new()
                .with(fields::TITLE, "Other")
                .with(fields::DATE, "soon")
                .with(fields::VALUE, "n/a"),
        ]
    }

    fn cells(state: TableState, row_index: usize) -> Vec<CellContent> {
        let records = records();
        let columns = bureau_usage_columns(&[]);
        let table = ReportTable::new(&records, &columns, state);
        let rows = table.apply_filter();
        let row = rows.iter().find(|r| r.id == row_index).unwrap();
        table
            .visible_columns()
            .map(|column| table.cell(row, column))
            .collect()
    }

    #[test]
    fn test_formatted_cells() {
        let mut state = TableState::default();
        state.toggle_row(0, true);

        assert_eq!(
            cells(state, 0),
            vec![
                CellContent::Checkbox { checked: true },
                CellContent::Text {
                    text: "user123".to_string()
                },
                CellContent::Text {
                    text: "Report 1".to_string()
                },
                CellContent::Badge {
                    variant: BadgeVariant::Secondary,
                    label: "category a".to_string()
                },
                CellContent::Date {
                    text: "1/15/2024".to_string()
                },
                CellContent::Currency {
                    text: "$1,234.50".to_string()
                },
                CellContent::Actions {
                    user_id: Some("user123".to_string()),
                    title: Some("Report 1".to_string())
                },
            ]
        );
    }

    #[test]
    fn test_missing_and_malformed_fields() {
        let cells = cells(TableState::default(), 1);
        assert_eq!(cells[1], CellContent::Text { text: String::new() });
        assert_eq!(
            cells[3],
            CellContent::Badge {
                variant: BadgeVariant::Default,
                label: String::new()
            }
        );
        assert_eq!(
            cells[4],
            CellContent::Date {
                text: "Invalid Date".to_string()
            }
        );
        assert_eq!(
            cells[5],
            CellContent::Currency {
                text: "$NaN".to_string()
            }
        );
    }

    #[test]
    fn test_title_highlighted_under_title_filter() {
        let mut state = TableState::default();
        state.set_column_filter(fields::TITLE, "port");

        let CellContent::Highlighted { segments } = &cells(state, 0)[2] else {
            panic!("expected highlighted title");
        };
        let emphasized: Vec<&str> = segments
            .iter()
            .filter(|s| s.emphasized)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(emphasized, vec!["port"]);
    }
}
