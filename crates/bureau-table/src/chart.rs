//! Per-user report counts for the bar chart

use bureau_core::Record;
use indexmap::IndexMap;
use serde::Serialize;

/// Bucket for records without a user id
pub const UNKNOWN_USER: &str = "Unknown";

/// One bar of the chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartBar {
    /// User id, or [`UNKNOWN_USER`]
    pub name: String,
    /// Number of records
    pub value: usize,
}

fn user_key(record: &Record) -> Option<String> {
    record.user_id().filter(|id| !id.is_empty())
}

/// Count records per user id in first-seen order.
///
/// Works on the full record set; table filters do not apply.
#[must_use]
pub fn count_by_user(records: &[Record]) -> IndexMap<String, usize> {
    let mut counts = IndexMap::new();
    for record in records {
        let key = user_key(record).unwrap_or_else(|| UNKNOWN_USER.to_string());
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

/// [`count_by_user`] as chart bars
#[must_use]
pub fn chart_bars(records: &[Record]) -> Vec<ChartBar> {
    count_by_user(records)
        .into_iter()
        .map(|(name, value)| ChartBar { name, value })
        .collect()
}

/// Distinct non-empty user ids in first-seen order
#[must_use]
pub fn unique_user_ids(records: &[Record]) -> Vec<String> {
    let mut seen = indexmap::IndexSet::new();
    for id in records.iter().filter_map(user_key) {
        seen.insert(id);
    }
    seen.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bureau_core::types::fields;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    fn user(id: &str) -> Record {
        Record::new().with(fields::USER_ID, id)
    }

    #[test]
    fn test_counts_in_first_seen_order() {
        let records = vec![user("b"), user("a"), user("b"), user("c"), user("a"), user("b")];
        let counts: Vec<(String, usize)> = count_by_user(&records).into_iter().collect();

        assert_eq!(
            counts,
            vec![
                ("b".to_string(), 3),
                ("a".to_string(), 2),
                ("c".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_missing_ids_bucket_as_unknown() {
        let records = vec![
            user("a"),
            Record::new(),
            user(""),
            Record::new().with(fields::USER_ID, Value::Null),
        ];

        assert_eq!(
            chart_bars(&records),
            vec![
                ChartBar {
                    name: "a".to_string(),
                    value: 1
                },
                ChartBar {
                    name: UNKNOWN_USER.to_string(),
                    value: 3
                },
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(count_by_user(&[]).is_empty());
        assert!(unique_user_ids(&[]).is_empty());
    }

    #[test]
    fn test_unique_user_ids_skip_empty() {
        let records = vec![user("user456"), Record::new(), user("user123"), user("user456"), user("")];
        assert_eq!(
            unique_user_ids(&records),
            vec!["user456".to_string(), "user123".to_string()]
        );
    }

    #[test]
    fn test_counts_sum_to_record_count() {
        let records = vec![user("a"), Record::new(), user("a"), user("z")];
        let total: usize = count_by_user(&records).values().sum();
        assert_eq!(total, records.len());
    }
}
