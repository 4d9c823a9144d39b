//! CSV loading implementation.

use std::path::Path;

use log::{debug, warn};

use crate::error::QueryResult;
use crate::types::{DataSet, Header, Row};

/// Options controlling how the input file is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Load a CSV file into an in-memory [`DataSet`].
///
/// Rules:
///
/// - The first record is the header.
/// - Every field is kept verbatim as a string (no trimming, no typing).
/// - Rows may be shorter or longer than the header; missing fields read as `""` downstream.
/// - A file with no records yields an empty dataset.
pub fn load_csv_from_path(path: impl AsRef<Path>, options: &CsvOptions) -> QueryResult<DataSet> {
    let path = path.as_ref();
    let mut rdr = reader_builder(options).from_path(path)?;
    let ds = load_csv_from_reader(&mut rdr)?;
    debug!(
        "loaded {} rows x {} columns from {}",
        ds.row_count(),
        ds.header.len(),
        path.display()
    );
    Ok(ds)
}

/// Load CSV data from an existing CSV reader.
///
/// The reader should be configured with headers enabled and `flexible(true)` if ragged rows
/// are to be tolerated; see [`reader_builder`].
pub fn load_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> QueryResult<DataSet> {
    let header = Header::new(rdr.headers()?.iter());

    let mut rows: Vec<Row> = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        let record = result?;
        if record.len() != header.len() {
            // 1-based line number for users; +1 again because the header is line 1.
            warn!(
                "row {} has {} fields, header has {}",
                row_idx0 + 2,
                record.len(),
                header.len()
            );
        }
        rows.push(record.iter().map(str::to_owned).collect());
    }

    Ok(DataSet::new(header, rows))
}

/// A [`csv::ReaderBuilder`] configured from `options`.
pub fn reader_builder(options: &CsvOptions) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(true)
        .flexible(true)
        .delimiter(options.delimiter);
    builder
}

#[cfg(test)]
mod tests {
    use super::{load_csv_from_reader, reader_builder, CsvOptions};

    #[test]
    fn keeps_fields_verbatim() {
        let input = "name,price\n iphone 15 pro ,999\n";
        let mut rdr = reader_builder(&CsvOptions::default()).from_reader(input.as_bytes());
        let ds = load_csv_from_reader(&mut rdr).unwrap();
        assert_eq!(ds.header.names, vec!["name", "price"]);
        assert_eq!(ds.rows, vec![vec![" iphone 15 pro ".to_string(), "999".to_string()]]);
    }

    #[test]
    fn tolerates_ragged_rows() {
        let input = "a,b,c\n1,2\n1,2,3,4\n";
        let mut rdr = reader_builder(&CsvOptions::default()).from_reader(input.as_bytes());
        let ds = load_csv_from_reader(&mut rdr).unwrap();
        assert_eq!(ds.row_count(), 2);
        assert_eq!(ds.rows[0].len(), 2);
        assert_eq!(ds.rows[1].len(), 4);
    }

    #[test]
    fn header_only_input_has_no_rows() {
        let mut rdr = reader_builder(&CsvOptions::default()).from_reader("name,price\n".as_bytes());
        let ds = load_csv_from_reader(&mut rdr).unwrap();
        assert_eq!(ds.header.len(), 2);
        assert_eq!(ds.row_count(), 0);
    }

    #[test]
    fn empty_input_yields_empty_dataset() {
        let mut rdr = reader_builder(&CsvOptions::default()).from_reader("".as_bytes());
        let ds = load_csv_from_reader(&mut rdr).unwrap();
        assert!(ds.header.is_empty());
        assert_eq!(ds.row_count(), 0);
    }

    #[test]
    fn honours_custom_delimiter() {
        let opts = CsvOptions { delimiter: b';' };
        let mut rdr = reader_builder(&opts).from_reader("a;b\n1;2\n".as_bytes());
        let ds = load_csv_from_reader(&mut rdr).unwrap();
        assert_eq!(ds.header.names, vec!["a", "b"]);
        assert_eq!(ds.rows[0], vec!["1", "2"]);
    }

    #[test]
    fn quoted_fields_keep_embedded_delimiters() {
        let input = "name,price\n\"galaxy, s23\",899\n";
        let mut rdr = reader_builder(&CsvOptions::default()).from_reader(input.as_bytes());
        let ds = load_csv_from_reader(&mut rdr).unwrap();
        assert_eq!(ds.rows[0][0], "galaxy, s23");
    }
}
