//! CSV export of a filtered and sorted record set

use std::io::Write;

use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use fd_core::Record;
use tracing::debug;

use crate::DataError;

/// Byte-order mark written ahead of the header so spreadsheet tools pick UTF-8
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Encoded export ready to hand to a file sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub bytes: Vec<u8>,
    /// Data rows, header excluded
    pub rows: usize,
}

/// `{base}_{YYYY-MM-DD}.csv`
pub fn export_filename(base: &str, date: NaiveDate) -> String {
    format!("{}_{}.csv", base, date.format("%Y-%m-%d"))
}

/// Encode `records` with the first record's field order as the header.
///
/// Fails with [`DataError::EmptyExport`] when there is nothing to write.
pub fn to_csv(records: &[&Record], base: &str, date: NaiveDate) -> Result<CsvExport, DataError> {
    let mut bytes = Vec::with_capacity(UTF8_BOM.len() + records.len() * 64);
    bytes.write_all(UTF8_BOM)?;
    let rows = write_csv(records, &mut bytes)?;
    Ok(CsvExport {
        filename: export_filename(base, date),
        bytes,
        rows,
    })
}

/// Write header and rows to `out`; returns the number of data rows
pub fn write_csv<W: Write>(records: &[&Record], out: W) -> Result<usize, DataError> {
    let first = records.first().ok_or(DataError::EmptyExport)?;
    let header: Vec<&str> = first.field_names().collect();

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);

    writer.write_record(&header)?;
    for record in records {
        writer.write_record(header.iter().map(|field| record.display(field)))?;
    }
    writer.flush()?;

    debug!(rows = records.len(), columns = header.len(), "csv written");
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fd_core::record;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 19).unwrap()
    }

    fn body(export: &CsvExport) -> &str {
        std::str::from_utf8(&export.bytes[UTF8_BOM.len()..]).unwrap()
    }

    #[test]
    fn test_quotes_delimiter() {
        let r = record! { "id" => 1, "name" => "A,B" };
        let export = to_csv(&[&r], "menu", date()).unwrap();
        assert!(export.bytes.starts_with(UTF8_BOM));
        assert_eq!(body(&export), "id,name\n1,\"A,B\"\n");
        assert_eq!(export.filename, "menu_2026-01-19.csv");
        assert_eq!(export.rows, 1);
    }

    #[test]
    fn test_quotes_embedded_quotes_and_newlines() {
        let r = record! { "id" => 3, "comment" => "said \"hi\"\nthen left" };
        let export = to_csv(&[&r], "reviews", date()).unwrap();
        assert_eq!(body(&export), "id,comment\n3,\"said \"\"hi\"\"\nthen left\"\n");
    }

    #[test]
    fn test_header_follows_first_record() {
        let a = record! { "id" => 1, "name" => "Lettuce", "stock" => 85 };
        let b = record! { "stock" => 450, "id" => 2 };
        let export = to_csv(&[&a, &b], "inventory", date()).unwrap();
        assert_eq!(body(&export), "id,name,stock\n1,Lettuce,85\n2,,450\n");
    }

    #[test]
    fn test_empty_is_rejected() {
        let err = to_csv(&[], "orders", date()).unwrap_err();
        assert!(matches!(err, DataError::EmptyExport));
    }

    #[test]
    fn test_non_ascii_survives() {
        let r = record! { "id" => 1, "name" => "ビッグマック" };
        let export = to_csv(&[&r], "menu", date()).unwrap();
        assert!(body(&export).contains("ビッグマック"));
    }
}
