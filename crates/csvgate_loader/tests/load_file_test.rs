//! Loading CSV files from disk, including the whole-line quoting produced by
//! some exporters.

use csvgate_core::CellValue;
use csvgate_loader::{LoaderError, load_csv_file, load_file};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_quoted_export() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "export.csv",
        b"\"ID,Email,Age\"\r\n\"1,ada@example.com,36\"\r\n\"2,,17.5\"\r\n",
    );

    let dataset = load_file(&path).unwrap();

    assert_eq!(dataset.columns(), ["id", "email", "age"]);
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.rows()[1].get("email"), &CellValue::Missing);
    assert_eq!(dataset.rows()[1].get("age").as_text(), Some("17.5"));
}

#[test]
fn test_load_with_bom() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "bom.csv", "\u{feff}id,email,age\n1,a@b.c,30\n".as_bytes());

    let dataset = load_file(&path).unwrap();
    assert!(dataset.has_column("id"));
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = load_file(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, LoaderError::Io(_)));
}

#[test]
fn test_load_csv_file_checks_extension() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "users.tsv", b"id,email,age\n");

    let err = load_csv_file(&path).unwrap_err();
    assert!(matches!(err, LoaderError::InvalidExtension(_)));
    assert!(err.to_string().contains("Please upload a CSV file"));
}
