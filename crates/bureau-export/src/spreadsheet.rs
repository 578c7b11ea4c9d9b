//! XLSX export

use crate::error::{ExportError, ExportResult};
use bureau_core::Record;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use serde_json::Value;

/// Name of the single worksheet
pub const SHEET_NAME: &str = "Sheet1";

/// Render records as an XLSX workbook with one sheet.
///
/// Row 1 holds the column names. Numbers and booleans keep their type,
/// missing and null fields leave the cell empty, anything else is text.
pub fn to_spreadsheet<'a, I>(records: I, columns: &[String]) -> ExportResult<Vec<u8>>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header = Format::new().set_bold();
    for (col, name) in columns.iter().enumerate() {
        worksheet.write_string_with_format(0, column_index(col)?, name, &header)?;
    }

    for (row, record) in records.into_iter().enumerate() {
        let row = u32::try_from(row + 1).map_err(|_| ExportError::TooManyRows(row))?;
        for (col, name) in columns.iter().enumerate() {
            write_cell(worksheet, row, column_index(col)?, record.get(name))?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

fn column_index(col: usize) -> ExportResult<u16> {
    u16::try_from(col).map_err(|_| ExportError::TooManyColumns(col + 1))
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: Option<&Value>,
) -> ExportResult<()> {
    match value {
        None | Some(Value::Null) => {}
        Some(Value::Number(n)) => match n.as_f64() {
            Some(number) => {
                worksheet.write_number(row, col, number)?;
            }
            None => {
                worksheet.write_string(row, col, n.to_string())?;
            }
        },
        Some(Value::Bool(b)) => {
            worksheet.write_boolean(row, col, *b)?;
        }
        Some(Value::String(s)) => {
            worksheet.write_string(row, col, s)?;
        }
        Some(other) => {
            worksheet.write_string(row, col, other.to_string())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bureau_core::types::fields;

    fn columns() -> Vec<String> {
        vec!["UserId".to_string(), "Value".to_string(), "Extra".to_string()]
    }

    #[test]
    fn test_spreadsheet_is_zip_container() {
        let records = vec![
            Record::new()
                .with(fields::USER_ID, "user123")
                .with(fields::VALUE, 123)
                .with("Extra", true),
            Record::new().with(fields::USER_ID, "user456"),
        ];

        let bytes = to_spreadsheet(&records, &columns()).unwrap();
        assert!(bytes.starts_with(b"PK"));
        assert!(bytes.len() > 100);
    }

    #[test]
    fn test_zero_rows_still_produce_workbook() {
        let none: Vec<Record> = Vec::new();
        let bytes = to_spreadsheet(&none, &columns()).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_nested_values_written_as_text() {
        let records = vec![Record::new().with("Extra", serde_json::json!({"a": [1, 2]}))];
        assert!(to_spreadsheet(&records, &columns()).is_ok());
    }

    #[test]
    fn test_column_index_limit() {
        assert_eq!(column_index(5).unwrap(), 5);
        assert!(matches!(
            column_index(usize::from(u16::MAX) + 1),
            Err(ExportError::TooManyColumns(_))
        ));
    }
}
