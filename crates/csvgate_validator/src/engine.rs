//! Main validation engine.
//!
//! This module provides the `CsvValidator` that runs the structural checks
//! and, when they pass, the row checks, then assembles the final result.

use crate::{RowValidator, SchemaValidator};
use csvgate_core::{Dataset, DatasetValidator, ValidationResult};
use std::time::Instant;
use tracing::debug;

/// Validation engine for uploaded CSV datasets.
///
/// Validation happens in two stages. Structural checks (required columns,
/// minimum volume) short-circuit with a single error; otherwise every row is
/// checked and all findings are collected.
///
/// # Example
///
/// ```rust
/// use csvgate_core::{DatasetBuilder, DatasetValidator, Status};
/// use csvgate_validator::CsvValidator;
///
/// let dataset = DatasetBuilder::new(["id", "email", "age"])
///     .repeat_row(&["1", "ada@example.com", "36"], 11)
///     .build();
///
/// let result = CsvValidator::new().validate(&dataset);
/// assert_eq!(result.status, Status::Pass);
/// ```
pub struct CsvValidator {
    schema_validator: SchemaValidator,
    row_validator: RowValidator,
}

impl CsvValidator {
    /// Creates a new validator.
    pub fn new() -> Self {
        Self {
            schema_validator: SchemaValidator::new(),
            row_validator: RowValidator::new(),
        }
    }

    /// Validates a dataset.
    ///
    /// # Arguments
    ///
    /// * `dataset` - The loaded upload
    ///
    /// # Returns
    ///
    /// A `ValidationResult` whose status is `fail` exactly when it holds errors.
    pub fn run(&self, dataset: &Dataset) -> ValidationResult {
        let start = Instant::now();

        // 1. Structural checks (fail fast)
        if let Some(result) = self.schema_validator.validate(dataset) {
            debug!(
                "Structural check failed after {} µs",
                start.elapsed().as_micros()
            );
            return result;
        }

        // 2. Row checks
        let errors = self.row_validator.validate(dataset);

        // 3. Verdict
        let result = ValidationResult::from_errors(errors);
        debug!(
            "Validated {} rows in {} µs: {}",
            dataset.len(),
            start.elapsed().as_micros(),
            result.status
        );
        result
    }
}

impl Default for CsvValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetValidator for CsvValidator {
    fn validate(&self, dataset: &Dataset) -> ValidationResult {
        self.run(dataset)
    }
}

/// Validates a dataset with the standard rule set.
pub fn validate(dataset: &Dataset) -> ValidationResult {
    CsvValidator::new().run(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AGE_FORMAT_MESSAGE, AGE_RANGE_MESSAGE, EMAIL_MISSING_MESSAGE};
    use csvgate_core::{DatasetBuilder, Status, ValidationError};
    use pretty_assertions::assert_eq;

    fn valid_builder(rows: usize) -> DatasetBuilder {
        let mut builder = DatasetBuilder::new(["id", "email", "age"]);
        for i in 0..rows {
            let id = (i + 1).to_string();
            let email = format!("user{}@example.com", i + 1);
            let age = (18 + i * 7 % 83).to_string();
            builder = builder.row([id, email, age]);
        }
        builder
    }

    #[test]
    fn test_valid_data() {
        let result = validate(&valid_builder(11).build());
        assert_eq!(result, ValidationResult::pass());
    }

    #[test]
    fn test_structural_failure_skips_rows() {
        let dataset = DatasetBuilder::new(["id", "email", "age"])
            .repeat_row(&["1", "", "abc"], 10)
            .build();

        let result = validate(&dataset);
        assert_eq!(result.status, Status::Fail);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].is_structural());
    }

    #[test]
    fn test_row_errors_collected() {
        let dataset = valid_builder(11)
            .row(["12", "x@y.z", "abc"])
            .row(["13", "x@y.z", "150"])
            .row(["14", "  ", "30"])
            .build();

        let result = validate(&dataset);
        assert_eq!(result.status, Status::Fail);
        assert_eq!(
            result.errors,
            vec![
                ValidationError::row(12, Some("12".into()), "age", AGE_FORMAT_MESSAGE),
                ValidationError::row(13, Some("13".into()), "age", AGE_RANGE_MESSAGE),
                ValidationError::row(14, Some("14".into()), "email", EMAIL_MISSING_MESSAGE),
            ]
        );
    }

    #[test]
    fn test_trait_dispatch() {
        let validator: Box<dyn DatasetValidator> = Box::new(CsvValidator::new());
        let result = validator.validate(&valid_builder(11).build());
        assert!(result.passed());
    }

    #[test]
    fn test_idempotent() {
        let dataset = valid_builder(11).row(["x", "", "7"]).build();
        let validator = CsvValidator::new();
        assert_eq!(validator.run(&dataset), validator.run(&dataset));
    }
}
