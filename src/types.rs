//! Core data model types.
//!
//! A [`DataSet`] is a [`Header`] plus rows of string fields. Nothing is typed at rest: numeric
//! meaning is decided where a value is used, through [`parse_number`].

/// A single data row. Fields are stored exactly as read.
pub type Row = Vec<String>;

/// Ordered column names of a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    /// Column names in file order.
    pub names: Vec<String>,
}

impl Header {
    /// Create a header from column names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the header has no columns.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the index of a column by exact (case-sensitive) name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Iterate column names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// In-memory tabular dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataSet {
    /// Column names.
    pub header: Header,
    /// Row-major field storage, in file order.
    pub rows: Vec<Row>,
}

impl DataSet {
    /// Create a dataset from a header and rows.
    pub fn new(header: Header, rows: Vec<Row>) -> Self {
        Self { header, rows }
    }

    /// Number of rows in the dataset.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Create a new dataset containing only rows that match `predicate`.
    ///
    /// Row order is preserved and the header is carried over unchanged.
    pub fn filter_rows<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&[String]) -> bool,
    {
        let rows = self
            .rows
            .iter()
            .filter(|row| predicate(row.as_slice()))
            .cloned()
            .collect();
        Self {
            header: self.header.clone(),
            rows,
        }
    }

    /// Iterate the values of column `idx` across all rows.
    ///
    /// Rows shorter than the header yield `""` for the missing field.
    pub fn column_values(&self, idx: usize) -> impl Iterator<Item = &str> {
        self.rows.iter().map(move |row| field(row, idx))
    }
}

/// Field `idx` of `row`, or `""` when the row is too short.
pub fn field(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

/// Parse a field as a 64-bit float, ignoring surrounding whitespace.
///
/// Single underscores between two digits are digit separators (`1_000`); any other underscore
/// makes the field non-numeric.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if !trimmed.contains('_') {
        return trimmed.parse::<f64>().ok();
    }

    let bytes = trimmed.as_bytes();
    let mut digits = String::with_capacity(trimmed.len());
    for (i, c) in trimmed.char_indices() {
        if c != '_' {
            digits.push(c);
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        let between_digits =
            before.is_some_and(|b| b.is_ascii_digit()) && after.is_some_and(|b| b.is_ascii_digit());
        if !between_digits {
            return None;
        }
    }
    digits.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::{field, parse_number, DataSet, Header};

    fn sample_dataset() -> DataSet {
        DataSet::new(
            Header::new(["id", "name"]),
            vec![
                vec!["1".to_string(), "a".to_string()],
                vec!["2".to_string()],
                vec!["3".to_string(), "c".to_string()],
            ],
        )
    }

    #[test]
    fn header_index_of_is_exact() {
        let header = Header::new(["id", "Name", "unit price"]);
        assert_eq!(header.index_of("id"), Some(0));
        assert_eq!(header.index_of("unit price"), Some(2));
        assert_eq!(header.index_of("name"), None);
        assert_eq!(header.index_of("id "), None);
    }

    #[test]
    fn short_rows_read_missing_fields_as_empty() {
        let ds = sample_dataset();
        let names: Vec<&str> = ds.column_values(1).collect();
        assert_eq!(names, vec!["a", "", "c"]);
        assert_eq!(field(&ds.rows[1], 5), "");
    }

    #[test]
    fn filter_rows_keeps_order_and_header() {
        let ds = sample_dataset();
        let out = ds.filter_rows(|row| field(row, 0) != "2");
        assert_eq!(out.header, ds.header);
        assert_eq!(out.row_count(), 2);
        assert_eq!(out.rows[0][0], "1");
        assert_eq!(out.rows[1][0], "3");
        assert_eq!(ds.row_count(), 3);
    }

    #[test]
    fn parse_number_accepts_padded_and_decimal_values() {
        assert_eq!(parse_number("149"), Some(149.0));
        assert_eq!(parse_number(" 4.5 "), Some(4.5));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("apple"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn parse_number_accepts_digit_separators_between_digits() {
        assert_eq!(parse_number("1_000"), Some(1000.0));
        assert_eq!(parse_number(" 1_000_000.2_5 "), Some(1_000_000.25));
        assert_eq!(parse_number("1__0"), None);
        assert_eq!(parse_number("_100"), None);
        assert_eq!(parse_number("100_"), None);
        assert_eq!(parse_number("1_.5"), None);
        assert_eq!(parse_number("product_1"), None);
    }
}
