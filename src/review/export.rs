use csv::{QuoteStyle, WriterBuilder};

use crate::error::{AppError, AppResult};

/// Column projection for CSV export. Every record of a type must produce the
/// same number of fields as the header row.
pub trait CsvRecord {
    fn headers() -> &'static [&'static str];
    fn row(&self) -> Vec<String>;
}

/// Serializes the (already filtered) application list to an RFC-4180 CSV
/// document: header row plus one row per record, every field quoted.
pub fn export_csv<T: CsvRecord>(records: &[T]) -> AppResult<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer
        .write_record(T::headers())
        .map_err(|e| AppError::Export(e.to_string()))?;
    for record in records {
        writer
            .write_record(record.row())
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(e.to_string()))
}

/// Download filename derived from the program title: non-alphanumerics
/// stripped, lowercased. Falls back to "applications" for titles with no
/// usable characters.
pub fn export_filename(title: &str) -> String {
    let stem: String = title
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect();
    if stem.is_empty() {
        "applications.csv".to_string()
    } else {
        format!("{}.csv", stem)
    }
}
