//! Export of the in-memory import table to CSV and Excel.

use std::io::Write;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, XlsxError};

use crate::Result;
use crate::import::ImportTable;

/// Default file name offered when exporting to CSV.
pub const CSV_EXPORT_NAME: &str = "influencers_export.csv";

/// Default file name offered when exporting to Excel.
pub const XLSX_EXPORT_NAME: &str = "influencers_export.xlsx";

/// Write the entire table (not just the preview) as delimited text.
///
/// Columns are the table's union column set; cells a record never had are
/// written as empty strings.
pub fn write_table_csv<W: Write>(table: &ImportTable, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(table.columns())?;

    for row_index in 0..table.len() {
        let record: Vec<&str> = table
            .columns()
            .iter()
            .map(|column| table.cell(row_index, column))
            .collect();
        csv_writer.write_record(record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Export the table to a CSV file.
pub fn export_table_to_csv(table: &ImportTable, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_table_csv(table, file)
}

/// Export the table to an Excel file.
pub fn export_table_to_excel(table: &ImportTable, path: &Path) -> std::result::Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name("Influencers")?;

    // Header format
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x4472C4))
        .set_font_color(Color::White)
        .set_border(FormatBorder::Thin);

    for (col, header) in table.columns().iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, header, &header_format)?;
        worksheet.set_column_width(col as u16, 20)?;
    }

    // Data rows
    for row_index in 0..table.len() {
        let row = (row_index + 1) as u32;
        for (col, column) in table.columns().iter().enumerate() {
            worksheet.write_string(row, col as u16, table.cell(row_index, column))?;
        }
    }

    // Autofilter
    if !table.is_empty() {
        let last_row = table.len() as u32;
        let last_col = table.columns().len().saturating_sub(1) as u16;
        worksheet.autofilter(0, 0, last_row, last_col)?;
    }

    // Freeze top row
    worksheet.set_freeze_panes(1, 0)?;

    workbook.save(path)?;
    Ok(())
}

/// Open file dialog restricted to CSV files.
pub fn show_open_dialog() -> Option<PathBuf> {
    rfd::FileDialog::new().add_filter("CSV Files", &["csv"]).pick_file()
}

/// Save file dialog with the given default name.
pub fn show_save_dialog(default_name: &str, extension: &str, filter_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_file_name(default_name)
        .add_filter(filter_name, &[extension])
        .save_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::parse_reader;

    fn parse(text: &str) -> ImportTable {
        parse_reader(text.as_bytes(), b',').unwrap()
    }

    fn export_to_string(table: &ImportTable) -> String {
        let mut buffer = Vec::new();
        write_table_csv(table, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_export_covers_whole_table_not_preview() {
        let mut text = String::from("name\n");
        for i in 0..9 {
            text.push_str(&format!("person{}\n", i));
        }
        let table = parse(&text);

        let exported = export_to_string(&table);
        let reimported = parse(&exported);
        assert_eq!(reimported.len(), 9);
    }

    #[test]
    fn test_round_trip_preserves_headers_and_values() {
        let table = parse("name,platform\nAlice,Instagram\nBob,YouTube\n");

        let exported = export_to_string(&table);
        let reimported = parse(&exported);

        assert_eq!(reimported.columns(), table.columns());
        assert_eq!(reimported.len(), table.len());
        for row in 0..table.len() {
            for column in table.columns() {
                assert_eq!(reimported.cell(row, column), table.cell(row, column));
            }
        }
    }

    #[test]
    fn test_round_trip_quotes_decode_back_equal() {
        let table = parse("name,bio\n\"Cart, Alice\",\"says \"\"hi\"\"\"\n");
        assert_eq!(table.cell(0, "name"), "Cart, Alice");

        let exported = export_to_string(&table);
        let reimported = parse(&exported);
        assert_eq!(reimported.cell(0, "name"), "Cart, Alice");
        assert_eq!(reimported.cell(0, "bio"), "says \"hi\"");
    }

    #[test]
    fn test_missing_cells_export_as_empty_strings() {
        let table = parse("name,platform\nAlice\nBob,YouTube\n");

        let exported = export_to_string(&table);
        assert!(exported.starts_with("name,platform\n"));

        let reimported = parse(&exported);
        assert_eq!(reimported.cell(0, "platform"), "");
        assert_eq!(reimported.cell(1, "platform"), "YouTube");
    }
}
