//! Builder pattern for creating datasets.
//!
//! Mostly useful in tests and when a caller already holds tabular data that
//! did not come from a CSV file.

use crate::{CellValue, Dataset, Row};

/// Builder for creating a [`Dataset`] row by row.
///
/// Column names are normalized the same way the loader normalizes a CSV
/// header (trimmed, lowercased). Values are assigned to columns by position;
/// a row shorter than the header leaves the remaining cells missing and extra
/// values are dropped.
///
/// # Example
///
/// ```rust
/// use csvgate_core::DatasetBuilder;
///
/// let dataset = DatasetBuilder::new([" ID ", "Email", "AGE"])
///     .row(["1", "ada@example.com", "36"])
///     .build();
///
/// assert_eq!(dataset.columns(), ["id", "email", "age"]);
/// ```
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl DatasetBuilder {
    /// Creates a builder with the given header.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            columns: columns
                .into_iter()
                .map(|c| normalize_column(c.as_ref()))
                .collect(),
            rows: Vec::new(),
        }
    }

    /// Adds a row of raw cell values, matched to the header by position.
    pub fn row<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        let row = self
            .columns
            .iter()
            .cloned()
            .zip(values.into_iter().map(Into::<CellValue>::into))
            .collect();
        self.rows.push(row);
        self
    }

    /// Adds `count` copies of the same row.
    pub fn repeat_row<V>(mut self, values: &[V], count: usize) -> Self
    where
        V: Clone + Into<CellValue>,
    {
        for _ in 0..count {
            self = self.row(values.iter().cloned());
        }
        self
    }

    /// Builds the dataset.
    pub fn build(self) -> Dataset {
        Dataset::new(self.columns, self.rows)
    }
}

/// Normalizes a header name: surrounding whitespace trimmed, lowercased.
pub fn normalize_column(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_column() {
        assert_eq!(normalize_column("  Email "), "email");
        assert_eq!(normalize_column("AGE"), "age");
        assert_eq!(normalize_column("id"), "id");
    }

    #[test]
    fn test_short_row_leaves_cells_missing() {
        let dataset = DatasetBuilder::new(["id", "email", "age"])
            .row(["1"])
            .build();

        let row = &dataset.rows()[0];
        assert_eq!(row.get("id").as_text(), Some("1"));
        assert!(row.get("email").is_missing());
        assert!(row.get("age").is_missing());
    }

    #[test]
    fn test_repeat_row() {
        let dataset = DatasetBuilder::new(["id"]).repeat_row(&["x"], 4).build();
        assert_eq!(dataset.len(), 4);
    }
}
