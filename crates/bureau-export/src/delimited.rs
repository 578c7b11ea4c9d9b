//! Comma-separated export

use bureau_core::Record;
use serde_json::Value;

/// Render records as comma-separated text.
///
/// The header is the column names joined by commas. Each record becomes one
/// line of JSON-encoded values; absent and null fields encode as `""`.
/// Lines are joined by `\n` without a trailing newline.
pub fn to_csv<'a, I>(records: I, columns: &[String]) -> String
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut lines = vec![columns.join(",")];
    lines.extend(records.into_iter().map(|record| {
        columns
            .iter()
            .map(|column| encode_value(record.get(column)))
            .collect::<Vec<_>>()
            .join(",")
    }));
    lines.join("\n")
}

fn encode_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "\"\"".to_string(),
        Some(value) => value.to_string(),
    }
}
