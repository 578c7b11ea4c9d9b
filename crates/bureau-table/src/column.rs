//! Column specification for the bureau usage table

use bureau_core::types::{CATEGORIES, fields};
use serde::Serialize;

/// Id of the row selection column
pub const SELECT_COLUMN: &str = "select";

/// Id of the row actions column
pub const ACTIONS_COLUMN: &str = "actions";

/// How a column filter value is matched against a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterFn {
    /// Cell text equals the filter value exactly
    Equals,
    /// Cell text contains the filter value, ignoring case
    IncludesString,
}

impl FilterFn {
    /// Whether `cell` passes a filter of `value`
    #[must_use]
    pub fn matches(self, cell: Option<&str>, value: &str) -> bool {
        let Some(cell) = cell else {
            return false;
        };
        match self {
            Self::Equals => cell == value,
            Self::IncludesString => contains_ignore_case(cell, value),
        }
    }
}

/// Case-insensitive substring test
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Filter control offered for a column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "options", rename_all = "camelCase")]
pub enum FilterInput {
    /// Free-text input
    Text,
    /// Dropdown of fixed options plus "All"
    Select(Vec<String>),
}

/// How a cell is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CellRenderer {
    /// Row selection checkbox
    Checkbox,
    /// Plain truncated text
    Text,
    /// Text with filter matches emphasized
    Highlight,
    /// Category badge
    Badge,
    /// Locale-style date
    Date,
    /// USD amount
    Currency,
    /// Per-row action menu
    Actions,
}

/// Visual variant of a category badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    /// Filled primary badge
    Default,
    /// Muted badge
    Secondary,
    /// Outlined badge
    Outline,
}

impl BadgeVariant {
    /// Variant for a category value
    #[must_use]
    pub fn for_category(category: Option<&str>) -> Self {
        match category {
            Some(c) if c == CATEGORIES[0] => Self::Secondary,
            Some(c) if c == CATEGORIES[1] => Self::Outline,
            _ => Self::Default,
        }
    }

    /// CSS class suffix
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
        }
    }
}

/// Declares how one column is read, drawn, sorted and filtered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDef {
    /// Unique column id
    pub id: String,
    /// Record field the column reads; `None` for display-only columns
    pub accessor: Option<String>,
    /// Header text
    pub header: String,
    /// Cell renderer
    pub renderer: CellRenderer,
    /// Whether clicking the header sorts
    pub can_sort: bool,
    /// Whether the column may be hidden
    pub can_hide: bool,
    /// Filter matching rule
    pub filter_fn: FilterFn,
    /// Filter control, if the column is filterable
    pub filter_input: Option<FilterInput>,
}

impl ColumnDef {
    /// Data column reading `field`, sortable, hideable and filtered by substring
    pub fn data(field: &str, header: &str, renderer: CellRenderer) -> Self {
        Self {
            id: field.to_string(),
            accessor: Some(field.to_string()),
            header: header.to_string(),
            renderer,
            can_sort: true,
            can_hide: true,
            filter_fn: FilterFn::IncludesString,
            filter_input: None,
        }
    }

    fn display(id: &str, renderer: CellRenderer) -> Self {
        Self {
            id: id.to_string(),
            accessor: None,
            header: String::new(),
            renderer,
            can_sort: false,
            can_hide: false,
            filter_fn: FilterFn::Equals,
            filter_input: None,
        }
    }

    #[must_use]
    fn with_filter(mut self, filter_fn: FilterFn, input: FilterInput) -> Self {
        self.filter_fn = filter_fn;
        self.filter_input = Some(input);
        self
    }

    /// Whether the column takes part in column and global filtering
    #[must_use]
    pub const fn is_data(&self) -> bool {
        self.accessor.is_some()
    }

    /// Whether a column filter can be set on it
    #[must_use]
    pub const fn can_filter(&self) -> bool {
        self.filter_input.is_some()
    }
}

/// Column set of the bureau usage table.
///
/// `unique_user_ids` become the options of the User ID filter.
#[must_use]
pub fn bureau_usage_columns(unique_user_ids: &[String]) -> Vec<ColumnDef> {
    vec![
        ColumnDef::display(SELECT_COLUMN, CellRenderer::Checkbox),
        ColumnDef::data(fields::USER_ID, "User ID", CellRenderer::Text).with_filter(
            FilterFn::Equals,
            FilterInput::Select(unique_user_ids.to_vec()),
        ),
        ColumnDef::data(fields::TITLE, "Title", CellRenderer::Highlight)
            .with_filter(FilterFn::IncludesString, FilterInput::Text),
        ColumnDef::data(fields::CATEGORY, "Category", CellRenderer::Badge).with_filter(
            FilterFn::Equals,
            FilterInput::Select(CATEGORIES.iter().map(ToString::to_string).collect()),
        ),
        ColumnDef::data(fields::DATE, "Date", CellRenderer::Date),
        ColumnDef::data(fields::VALUE, "Value", CellRenderer::Currency),
        ColumnDef::display(ACTIONS_COLUMN, CellRenderer::Actions),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_column_order_and_ids() {
        let columns = bureau_usage_columns(&[]);
        let ids: Vec<&str> = columns.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["select", "UserId", "Title", "Category", "Date", "Value", "actions"]
        );
    }

    #[test]
    fn test_select_and_actions_are_fixed() {
        for column in bureau_usage_columns(&[]) {
            let fixed = column.id == SELECT_COLUMN || column.id == ACTIONS_COLUMN;
            assert_eq!(column.can_hide, !fixed, "{}", column.id);
            assert_eq!(column.can_sort, !fixed, "{}", column.id);
            assert_eq!(column.is_data(), !fixed, "{}", column.id);
        }
    }

    #[test]
    fn test_user_id_filter_uses_given_options() {
        let ids = vec!["user123".to_string(), "user456".to_string()];
        let columns = bureau_usage_columns(&ids);
        let user = columns.iter().find(|c| c.id == "UserId").unwrap();

        assert_eq!(user.filter_fn, FilterFn::Equals);
        assert_eq!(user.filter_input, Some(FilterInput::Select(ids)));
    }

    #[test]
    fn test_filter_kinds() {
        let columns = bureau_usage_columns(&[]);
        let by_id = |id: &str| columns.iter().find(|c| c.id == id).unwrap();

        assert_eq!(by_id("Title").filter_fn, FilterFn::IncludesString);
        assert_eq!(by_id("Title").filter_input, Some(FilterInput::Text));
        assert_eq!(by_id("Category").filter_fn, FilterFn::Equals);
        assert!(!by_id("Date").can_filter());
        assert!(!by_id("Value").can_filter());
    }

    #[rstest]
    #[case(FilterFn::Equals, Some("Category A"), "Category A", true)]
    #[case(FilterFn::Equals, Some("Category AB"), "Category A", false)]
    #[case(FilterFn::Equals, Some("category a"), "Category A", false)]
    #[case(FilterFn::IncludesString, Some("Report 1"), "port", true)]
    #[case(FilterFn::IncludesString, Some("Report 1"), "REPORT", true)]
    #[case(FilterFn::IncludesString, Some("Report 1"), "2", false)]
    #[case(FilterFn::IncludesString, None, "a", false)]
    fn test_filter_fn_matches(
        #[case] filter_fn: FilterFn,
        #[case] cell: Option<&str>,
        #[case] value: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(filter_fn.matches(cell, value), expected);
    }

    #[rstest]
    #[case(Some("Category A"), BadgeVariant::Secondary)]
    #[case(Some("Category B"), BadgeVariant::Outline)]
    #[case(Some("Category C"), BadgeVariant::Default)]
    #[case(None, BadgeVariant::Default)]
    fn test_badge_variant(#[case] category: Option<&str>, #[case] expected: BadgeVariant) {
        assert_eq!(BadgeVariant::for_category(category), expected);
    }
}
