//! Loader for uploaded CSV files.
//!
//! Some upstream exporters wrap every line of a CSV file in a pair of double
//! quotes, which turns each record into a single quoted field. The loader
//! repairs that before parsing: every line is trimmed and one enclosing pair
//! of quotes is removed, then the text is parsed as ordinary comma-separated
//! values with the first line as header.
//!
//! Header names are normalized (trimmed, lowercased) so that schema checks are
//! case-insensitive. Empty cells and the usual missing-value markers (`NA`,
//! `null`, `NaN`, ...) are loaded as [`CellValue::Missing`].
//!
//! # Example
//!
//! ```rust
//! use csvgate_loader::parse_csv;
//!
//! let csv = "\"ID,Email,Age\"\n\"1,ada@example.com,36\"\n";
//!
//! let dataset = parse_csv(csv).expect("Failed to parse CSV");
//! assert_eq!(dataset.columns(), ["id", "email", "age"]);
//! assert_eq!(dataset.rows()[0].get("age").as_text(), Some("36"));
//! ```

use csv::{ReaderBuilder, StringRecord};
use csvgate_core::{CellValue, Dataset, Row, normalize_column};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading a CSV file.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// File I/O error
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Content is not valid UTF-8
    #[error("File is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// No header line found
    #[error("No columns to parse from file")]
    Empty,

    /// Malformed CSV after quote repair
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A record carries more fields than the header declares
    #[error("Error tokenizing data. Expected {expected} fields in line {line}, saw {found}")]
    RecordLength {
        /// 1-based line number of the record
        line: u64,
        /// Number of header columns
        expected: usize,
        /// Number of fields in the record
        found: usize,
    },

    /// File does not carry a `.csv` extension
    #[error("Invalid file type: {0}. Please upload a CSV file.")]
    InvalidExtension(String),
}

/// Result type alias for loader operations.
pub type Result<T> = std::result::Result<T, LoaderError>;

/// Returns true if `name` ends with `.csv`.
///
/// The match is case-sensitive: `USERS.CSV` is rejected.
pub fn has_csv_extension(name: &str) -> bool {
    name.ends_with(".csv")
}

/// Removes stray whole-line quoting from CSV text.
///
/// Each line is trimmed, and if it both starts and ends with `"` one pair of
/// enclosing quotes is removed. Lines are rejoined with `\n`. A leading
/// byte-order mark is dropped.
///
/// ```rust
/// use csvgate_loader::repair_quotes;
///
/// assert_eq!(repair_quotes("  \"a,b\"  \r\nc,d"), "a,b\nc,d");
/// assert_eq!(repair_quotes("\"x\",\"y\""), "x\",\"y");
/// ```
pub fn repair_quotes(content: &str) -> String {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    content
        .lines()
        .map(|line| {
            let line = line.trim();
            if line.len() >= 2 && line.starts_with('"') && line.ends_with('"') {
                &line[1..line.len() - 1]
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parses CSV text into a [`Dataset`], repairing whole-line quoting first.
///
/// Blank lines are skipped. Records shorter than the header leave the
/// remaining cells missing; records longer than the header are rejected.
///
/// # Errors
///
/// Returns `LoaderError::Empty` if there is no header line, and
/// `LoaderError::Csv` or `LoaderError::RecordLength` for malformed records.
pub fn parse_csv(content: &str) -> Result<Dataset> {
    let repaired = repair_quotes(content);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(repaired.as_bytes());

    let mut records = reader.records();

    let header = match records.next() {
        Some(record) => record?,
        None => return Err(LoaderError::Empty),
    };
    let columns = normalize_header(&header);
    debug!("Parsed header: {:?}", columns);

    let mut dataset = Dataset::with_columns(columns);
    for record in records {
        let record = record?;
        let row = build_row(dataset.columns(), &record)?;
        dataset.push_row(row);
    }

    debug!(
        "Loaded {} data rows with {} columns",
        dataset.len(),
        dataset.columns().len()
    );
    Ok(dataset)
}

/// Parses raw uploaded bytes into a [`Dataset`].
///
/// # Errors
///
/// Returns `LoaderError::Encoding` if the bytes are not UTF-8, otherwise the
/// errors of [`parse_csv`].
pub fn parse_bytes(bytes: &[u8]) -> Result<Dataset> {
    let content = std::str::from_utf8(bytes)?;
    parse_csv(content)
}

/// Reads and parses a CSV file from disk.
///
/// # Example
///
/// ```no_run
/// use csvgate_loader::load_file;
/// use std::path::Path;
///
/// let dataset = load_file(Path::new("uploads/users.csv")).unwrap();
/// println!("Loaded {} rows", dataset.len());
/// ```
pub fn load_file(path: &Path) -> Result<Dataset> {
    debug!("Reading CSV file: {}", path.display());
    let bytes = std::fs::read(path)?;
    parse_bytes(&bytes)
}

/// Like [`load_file`], but first rejects paths without a `.csv` extension.
pub fn load_csv_file(path: &Path) -> Result<Dataset> {
    let name = path.to_string_lossy();
    if !has_csv_extension(&name) {
        return Err(LoaderError::InvalidExtension(name.into_owned()));
    }
    load_file(path)
}

/// Normalizes header names and disambiguates duplicates.
///
/// Blank names become `unnamed: <position>`. A repeated name gets a `.N`
/// suffix counting its earlier occurrences.
fn normalize_header(header: &StringRecord) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut columns = Vec::with_capacity(header.len());

    for (idx, raw) in header.iter().enumerate() {
        let mut name = normalize_column(raw);
        if name.is_empty() {
            name = format!("unnamed: {idx}");
        }

        let count = seen.entry(name.clone()).or_insert(0);
        let unique = if *count == 0 {
            name
        } else {
            format!("{name}.{count}")
        };
        *count += 1;
        columns.push(unique);
    }

    columns
}

fn build_row(columns: &[String], record: &StringRecord) -> Result<Row> {
    if record.len() > columns.len() {
        return Err(LoaderError::RecordLength {
            line: record.position().map_or(0, |p| p.line()),
            expected: columns.len(),
            found: record.len(),
        });
    }

    let mut row = Row::new();
    for (idx, column) in columns.iter().enumerate() {
        let value = record.get(idx).map_or(CellValue::Missing, CellValue::from_raw);
        row.insert(column.clone(), value);
    }
    Ok(row)
}
