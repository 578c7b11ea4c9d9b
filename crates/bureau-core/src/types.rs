//! Core data types for bureau usage reports

use chrono::{Duration, NaiveDate};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field names observed in bureau usage records
pub mod fields {
    /// User identifier
    pub const USER_ID: &str = "UserId";
    /// Report title
    pub const TITLE: &str = "Title";
    /// Report category
    pub const CATEGORY: &str = "Category";
    /// Report date (`YYYY-MM-DD`)
    pub const DATE: &str = "Date";
    /// Numeric value
    pub const VALUE: &str = "Value";
}

/// Known report categories, in display order
pub const CATEGORIES: [&str; 2] = ["Category A", "Category B"];

/// Category selector value meaning "no category restriction"
pub const ALL_CATEGORIES: &str = "ALL CATEGORY";

/// Search criteria pre-filled in the report form
pub const DEFAULT_SEARCH_CRITERIA: &str = "Search Input Report";

/// Length of the default date window, in days (three years)
pub const DEFAULT_WINDOW_DAYS: i64 = 365 * 3;

/// One row of the bureau usage report.
///
/// The shape is open: any field may be absent and unknown fields are kept.
/// Field order is preserved as received, since exports derive their column
/// order from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    /// Create an empty record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Insert or replace a field, returning the previous value
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    /// Raw value of a field
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Field names in insertion order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields present
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// String form of a field as shown in a table cell.
    ///
    /// Strings are returned as-is, numbers and booleans in their JSON
    /// spelling. Absent and null fields yield `None`.
    #[must_use]
    pub fn text(&self, field: &str) -> Option<String> {
        match self.fields.get(field)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Borrowed string field; `None` when absent or not a string
    #[must_use]
    pub fn str_field(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// User identifier
    #[must_use]
    pub fn user_id(&self) -> Option<String> {
        self.text(fields::USER_ID)
    }

    /// Report title
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.str_field(fields::TITLE)
    }

    /// Report category
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.str_field(fields::CATEGORY)
    }

    /// Report date as received
    #[must_use]
    pub fn date(&self) -> Option<&str> {
        self.str_field(fields::DATE)
    }

    /// Numeric value; numeric strings are parsed
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self.fields.get(fields::VALUE)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Filter request for the bureau usage report.
///
/// Every field is optional and none is validated. Dates are `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReportRequest {
    /// Free-text search criteria
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_criteria: Option<String>,

    /// Category selector
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Start date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,

    /// End date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

impl ReportRequest {
    /// The request the report form starts with on `today`
    #[must_use]
    pub fn initial(today: NaiveDate) -> Self {
        let from = today - Duration::days(DEFAULT_WINDOW_DAYS);
        Self {
            search_criteria: Some(DEFAULT_SEARCH_CRITERIA.to_string()),
            category: Some(ALL_CATEGORIES.to_string()),
            date_from: Some(format_iso_date(from)),
            date_to: Some(format_iso_date(today)),
        }
    }

    /// Whether no field is set
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.search_criteria.is_none()
            && self.category.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
    }
}

/// Format a date as `YYYY-MM-DD`
#[must_use]
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, clippy::float_cmp)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> Record {
        Record::new()
            .with(fields::USER_ID, "user123")
            .with(fields::TITLE, "Report 1")
            .with(fields::CATEGORY, "Category A")
            .with(fields::DATE, "2024-01-15")
            .with(fields::VALUE, 123)
    }

    #[test]
    fn test_record_preserves_field_order() {
        let record: Record = serde_json::from_value(json!({
            "Value": 1, "Title": "t", "UserId": "u", "Extra": true
        }))
        .unwrap();

        let names: Vec<&str> = record.field_names().collect();
        assert_eq!(names, vec!["Value", "Title", "UserId", "Extra"]);
    }

    #[test]
    fn test_record_serializes_as_plain_object() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "UserId": "user123",
                "Title": "Report 1",
                "Category": "Category A",
                "Date": "2024-01-15",
                "Value": 123
            })
        );
    }

    #[test]
    fn test_known_field_accessors() {
        let record = sample();
        assert_eq!(record.user_id().as_deref(), Some("user123"));
        assert_eq!(record.title(), Some("Report 1"));
        assert_eq!(record.category(), Some("Category A"));
        assert_eq!(record.date(), Some("2024-01-15"));
        assert_eq!(record.value(), Some(123.0));
    }

    #[test]
    fn test_accessors_tolerate_missing_and_odd_fields() {
        let record = Record::new()
            .with(fields::USER_ID, 42)
            .with(fields::TITLE, Value::Null)
            .with(fields::VALUE, "12.5");

        assert_eq!(record.user_id().as_deref(), Some("42"));
        assert_eq!(record.title(), None);
        assert_eq!(record.text(fields::TITLE), None);
        assert_eq!(record.category(), None);
        assert_eq!(record.value(), Some(12.5));
    }

    #[test]
    fn test_text_spells_scalars() {
        let record = Record::new().with("flag", true).with("n", 4.5);
        assert_eq!(record.text("flag").as_deref(), Some("true"));
        assert_eq!(record.text("n").as_deref(), Some("4.5"));
        assert_eq!(record.text("missing"), None);
    }

    #[test]
    fn test_request_wire_names() {
        let request = ReportRequest {
            search_criteria: Some("abc".to_string()),
            category: None,
            date_from: Some("2024-01-01".to_string()),
            date_to: None,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"SearchCriteria": "abc", "DateFrom": "2024-01-01"})
        );
    }

    #[test]
    fn test_initial_request_spans_three_years() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let request = ReportRequest::initial(today);

        assert_eq!(request.search_criteria.as_deref(), Some(DEFAULT_SEARCH_CRITERIA));
        assert_eq!(request.category.as_deref(), Some(ALL_CATEGORIES));
        assert_eq!(request.date_to.as_deref(), Some("2026-10-16"));
        assert_eq!(request.date_from.as_deref(), Some("2023-10-17"));
        assert!(!request.is_empty());
        assert!(ReportRequest::default().is_empty());
    }
}
