//! Validation result types.
//!
//! These types are the wire format of the upload endpoint: a
//! [`ValidationResult`] serializes to
//! `{"status": "pass"|"fail", "errors": [...]}` and each
//! [`ValidationError`] to
//! `{"row_index", "id", "column", "error_message"}` in that key order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall verdict of a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// No errors were found
    Pass,
    /// At least one error was found
    Fail,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Pass => f.write_str("pass"),
            Status::Fail => f.write_str("fail"),
        }
    }
}

/// A single validation finding.
///
/// Structural errors (schema or volume) concern the file as a whole and carry
/// no row, id or column. Row-level errors carry the 1-based data-row index,
/// the raw `id` cell of that row and the offending column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// 1-based position among data rows, `None` for structural errors
    pub row_index: Option<usize>,

    /// Raw `id` cell of the row, `None` for structural errors or a missing id
    pub id: Option<String>,

    /// Offending column, `None` for structural errors
    pub column: Option<String>,

    /// Human-readable description
    pub error_message: String,
}

impl ValidationError {
    /// Creates a structural error not tied to any row.
    pub fn structural(message: impl Into<String>) -> Self {
        Self {
            row_index: None,
            id: None,
            column: None,
            error_message: message.into(),
        }
    }

    /// Creates a row-level error.
    pub fn row(
        row_index: usize,
        id: Option<String>,
        column: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            row_index: Some(row_index),
            id,
            column: Some(column.into()),
            error_message: message.into(),
        }
    }

    /// Returns true if this error concerns the file rather than a row.
    pub fn is_structural(&self) -> bool {
        self.row_index.is_none()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.row_index, &self.column) {
            (Some(row), Some(column)) => {
                write!(f, "row {row}")?;
                if let Some(id) = &self.id {
                    write!(f, " (id {id})")?;
                }
                write!(f, ", column '{column}': {}", self.error_message)
            }
            _ => f.write_str(&self.error_message),
        }
    }
}

/// Outcome of validating one dataset.
///
/// `status` is always derived from `errors`: a result passes exactly when it
/// holds no errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Pass/fail verdict
    pub status: Status,

    /// Findings in the order they were produced
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Creates a passing result.
    pub fn pass() -> Self {
        Self {
            status: Status::Pass,
            errors: Vec::new(),
        }
    }

    /// Creates a result from accumulated errors.
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        let status = if errors.is_empty() {
            Status::Pass
        } else {
            Status::Fail
        };
        Self { status, errors }
    }

    /// Creates a failing result holding a single structural error.
    pub fn structural_failure(message: impl Into<String>) -> Self {
        Self::from_errors(vec![ValidationError::structural(message)])
    }

    /// Returns true if validation passed.
    pub fn passed(&self) -> bool {
        self.status == Status::Pass
    }

    /// Serializes the result as the JSON document returned to uploaders.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "status": self.status,
            "errors": self.errors,
        })
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::pass()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_status_follows_errors() {
        assert!(ValidationResult::from_errors(Vec::new()).passed());
        assert_eq!(
            ValidationResult::structural_failure("boom").status,
            Status::Fail
        );
    }

    #[test]
    fn test_pass_serialization() {
        let value = serde_json::to_value(ValidationResult::pass()).unwrap();
        assert_eq!(value, json!({"status": "pass", "errors": []}));
    }

    #[test]
    fn test_structural_serialization() {
        let result = ValidationResult::structural_failure("Missing required columns: age");
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "status": "fail",
                "errors": [{
                    "row_index": null,
                    "id": null,
                    "column": null,
                    "error_message": "Missing required columns: age"
                }]
            })
        );
        assert_eq!(result.to_json(), serde_json::to_value(&result).unwrap());
    }

    #[test]
    fn test_row_error_key_order() {
        let err = ValidationError::row(3, Some("42".into()), "age", "Invalid age format.");
        let text = serde_json::to_string(&err).unwrap();
        assert_eq!(
            text,
            r#"{"row_index":3,"id":"42","column":"age","error_message":"Invalid age format."}"#
        );
    }

    #[test]
    fn test_display() {
        let err = ValidationError::row(2, Some("9".into()), "email", "Email is missing or empty.");
        assert_eq!(
            err.to_string(),
            "row 2 (id 9), column 'email': Email is missing or empty."
        );
        assert!(!err.is_structural());

        let err = ValidationError::structural("Volume check failed");
        assert_eq!(err.to_string(), "Volume check failed");
    }
}
