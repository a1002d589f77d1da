//! Row-level validation logic.
//!
//! Every data row is checked independently:
//! - `email` must be present and not blank
//! - `age` must be a number that, truncated to an integer, lies in 18..=100
//!
//! Findings are accumulated; a bad row never stops the scan.

use csvgate_core::{CellValue, Dataset, Row, ValidationError};
use std::ops::RangeInclusive;
use tracing::debug;

/// Inclusive range of accepted ages.
pub const AGE_RANGE: RangeInclusive<i64> = 18..=100;

/// Message for a missing or blank email.
pub const EMAIL_MISSING_MESSAGE: &str = "Email is missing or empty.";

/// Message for an age that is missing or not a number.
pub const AGE_FORMAT_MESSAGE: &str = "Invalid age format.";

/// Message for an age outside [`AGE_RANGE`].
pub const AGE_RANGE_MESSAGE: &str = "Age out of allowed range (18–100).";

/// Outcome of interpreting an `age` cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeCheck {
    /// Parsed and within range
    Valid(i64),
    /// Missing or not a finite number
    InvalidFormat,
    /// Parsed but outside the accepted range
    OutOfRange(i64),
}

/// Validates the fields of each data row.
pub struct RowValidator;

impl RowValidator {
    /// Creates a new row validator.
    pub fn new() -> Self {
        Self
    }

    /// Validates every row of a structurally valid dataset, in file order.
    ///
    /// Returns a list of validation errors. An empty list indicates success.
    pub fn validate(&self, dataset: &Dataset) -> Vec<ValidationError> {
        let errors: Vec<ValidationError> = dataset
            .rows()
            .iter()
            .enumerate()
            .flat_map(|(idx, row)| self.validate_row(row, idx + 1))
            .collect();

        debug!(
            "Row validation found {} errors in {} rows",
            errors.len(),
            dataset.len()
        );
        errors
    }

    /// Validates a single row. `row_index` is 1-based.
    pub fn validate_row(&self, row: &Row, row_index: usize) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let id = row.get("id").as_text().map(str::to_string);

        if row.get("email").non_blank().is_none() {
            errors.push(ValidationError::row(
                row_index,
                id.clone(),
                "email",
                EMAIL_MISSING_MESSAGE,
            ));
        }

        let message = match check_age(row.get("age")) {
            AgeCheck::Valid(_) => None,
            AgeCheck::InvalidFormat => Some(AGE_FORMAT_MESSAGE),
            AgeCheck::OutOfRange(_) => Some(AGE_RANGE_MESSAGE),
        };
        if let Some(message) = message {
            errors.push(ValidationError::row(row_index, id, "age", message));
        }

        errors
    }
}

impl Default for RowValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Interprets an `age` cell.
///
/// The text is trimmed and parsed as a decimal number, then truncated toward
/// zero: `"17.9"` becomes 17, `"100.9"` becomes 100. Non-finite values such as
/// `inf` or `nan` are rejected as invalid.
pub fn check_age(cell: &CellValue) -> AgeCheck {
    let Some(text) = cell.non_blank() else {
        return AgeCheck::InvalidFormat;
    };

    let age = match text.parse::<i64>() {
        Ok(age) => age,
        Err(_) => match text.parse::<f64>() {
            Ok(value) if value.is_finite() => value.trunc() as i64,
            _ => return AgeCheck::InvalidFormat,
        },
    };

    if AGE_RANGE.contains(&age) {
        AgeCheck::Valid(age)
    } else {
        AgeCheck::OutOfRange(age)
    }
}
