//! Dataset representation for validation.
//!
//! A [`Dataset`] is the in-memory form of one uploaded CSV file: the normalized
//! header names in file order and one [`Row`] per data line.

use std::collections::HashMap;

/// Cell texts read as missing, in addition to the empty cell.
///
/// Matches the default missing-value markers of common dataframe readers, so
/// an export that writes `NA` or `null` for a blank field is treated as blank.
pub const MISSING_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A single cell of a dataset.
///
/// Cells are never coerced implicitly. Validators decide how to interpret the
/// text of a cell at the point where they need it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    /// Empty cell, or a cell the record did not carry at all
    Missing,
    /// Raw cell text, exactly as it appeared in the file
    Text(String),
}

impl CellValue {
    /// Builds a cell from raw text.
    ///
    /// The empty string and the exact [`MISSING_MARKERS`] map to `Missing`.
    pub fn from_raw(raw: &str) -> Self {
        if is_missing_marker(raw) {
            CellValue::Missing
        } else {
            CellValue::Text(raw.to_string())
        }
    }

    /// Returns true if this cell is missing.
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Returns the raw text of this cell, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            CellValue::Missing => None,
        }
    }

    /// Returns the trimmed text of this cell, treating blank text as missing.
    pub fn non_blank(&self) -> Option<&str> {
        self.as_text().map(str::trim).filter(|s| !s.is_empty())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::from_raw(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        if is_missing_marker(&s) {
            CellValue::Missing
        } else {
            CellValue::Text(s)
        }
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Missing, Into::into)
    }
}

fn is_missing_marker(raw: &str) -> bool {
    raw.is_empty() || MISSING_MARKERS.contains(&raw)
}

static MISSING: CellValue = CellValue::Missing;

/// One data row, keyed by normalized column name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: HashMap<String, CellValue>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell for `column`, or `Missing` when the row has no such cell.
    pub fn get(&self, column: &str) -> &CellValue {
        self.cells.get(column).unwrap_or(&MISSING)
    }

    /// Sets the cell for `column`.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.insert(column.into(), value.into());
    }

    /// Number of cells stored in the row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the row stores no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// In-memory tabular representation of a parsed CSV file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Dataset {
    /// Creates a dataset from already normalized column names and rows.
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// Creates a dataset with a header and no data rows.
    pub fn with_columns(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Column names in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns true if the header contains `column`.
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Data rows in file order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Mutable access to the data rows.
    pub fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    /// Appends a data row.
    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Number of data rows (header excluded).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the dataset has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
