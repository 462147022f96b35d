//! Bulk CSV import into an in-memory table.
//!
//! The first row of the file is the header row; every following row becomes a
//! header-to-cell mapping. No schema is enforced: the table's shape is
//! whatever the file declares. Fully empty rows are dropped.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::Result;

/// Number of records shown in the admin preview.
pub const PREVIEW_ROWS: usize = 5;

/// Ordered sequence of imported records.
///
/// Column order follows the file's header row. Each record keeps a key only
/// for cells it actually had, so short rows omit trailing columns; the
/// rendered column set is the union of all records' keys, not just the
/// first record's.
#[derive(Debug, Clone, Default)]
pub struct ImportTable {
    columns: Vec<String>,
    rows: Vec<HashMap<String, String>>,
}

impl ImportTable {
    /// Column headers, in header-row order, restricted to keys that occur in
    /// at least one record.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All imported records.
    pub fn rows(&self) -> &[HashMap<String, String>] {
        &self.rows
    }

    /// Number of imported records.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell value for a record and column; absent cells read as empty.
    pub fn cell(&self, row: usize, column: &str) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Records shown in the preview, capped at [`PREVIEW_ROWS`].
    pub fn preview(&self) -> &[HashMap<String, String>] {
        &self.rows[..self.rows.len().min(PREVIEW_ROWS)]
    }

    /// How many records the preview leaves out.
    pub fn remaining_after_preview(&self) -> usize {
        self.rows.len().saturating_sub(PREVIEW_ROWS)
    }
}

/// Parse delimited text from a reader into an [`ImportTable`].
pub fn parse_reader<R: Read>(reader: R, delimiter: u8) -> Result<ImportTable> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;

        // A row where every cell is blank parses to zero columns.
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        let mut row = HashMap::new();
        for (header, field) in headers.iter().zip(record.iter()) {
            row.insert(header.clone(), field.to_string());
        }
        rows.push(row);
    }

    let columns = headers
        .into_iter()
        .filter(|h| rows.iter().any(|r| r.contains_key(h)))
        .collect();

    Ok(ImportTable { columns, rows })
}

/// Parse a CSV file into an [`ImportTable`].
pub fn parse_file(path: &Path, delimiter: u8) -> Result<ImportTable> {
    let file = std::fs::File::open(path)?;
    parse_reader(file, delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> ImportTable {
        parse_reader(text.as_bytes(), b',').unwrap()
    }

    #[test]
    fn test_blank_rows_are_dropped() {
        let table = parse("name,platform\nAlice,Instagram\nBob,YouTube\n,\n");
        assert_eq!(table.len(), 2);
        assert_eq!(table.columns(), ["name", "platform"]);
    }

    #[test]
    fn test_cells_keyed_by_header() {
        let table = parse("name,platform\nAlice,Instagram\n");
        assert_eq!(table.cell(0, "name"), "Alice");
        assert_eq!(table.cell(0, "platform"), "Instagram");
    }

    #[test]
    fn test_sparse_first_row_still_yields_union_columns() {
        // The first record only has one cell; the column set must still
        // include every header that any record populates.
        let table = parse("name,platform\nAlice\nBob,YouTube\n");
        assert_eq!(table.columns(), ["name", "platform"]);
        assert_eq!(table.cell(0, "platform"), "");
        assert_eq!(table.cell(1, "platform"), "YouTube");
    }

    #[test]
    fn test_short_rows_omit_trailing_keys() {
        let table = parse("name,platform\nAlice\n");
        assert!(!table.rows()[0].contains_key("platform"));
        assert_eq!(table.columns(), ["name"]);
    }

    #[test]
    fn test_empty_but_present_cell_keeps_its_key() {
        let table = parse("name,platform\nAlice,\nBob,YouTube\n");
        assert_eq!(table.cell(0, "platform"), "");
        assert_eq!(table.columns(), ["name", "platform"]);
    }

    #[test]
    fn test_preview_caps_at_five_records() {
        let mut text = String::from("name\n");
        for i in 0..8 {
            text.push_str(&format!("person{}\n", i));
        }
        let table = parse(&text);
        assert_eq!(table.preview().len(), 5);
        assert_eq!(table.remaining_after_preview(), 3);
    }

    #[test]
    fn test_preview_of_small_table_shows_everything() {
        let table = parse("name\nAlice\nBob\n");
        assert_eq!(table.preview().len(), 2);
        assert_eq!(table.remaining_after_preview(), 0);
    }

    #[test]
    fn test_custom_delimiter() {
        let table = parse_reader("name;platform\nAlice;Instagram\n".as_bytes(), b';').unwrap();
        assert_eq!(table.cell(0, "platform"), "Instagram");
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let bytes: &[u8] = b"name\nAli\xFF\xFEce\n";
        let result = parse_reader(bytes, b',');
        assert!(result.is_err());
    }
}
