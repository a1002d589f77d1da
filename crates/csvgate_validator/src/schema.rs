//! Structural validation logic.
//!
//! Checks that concern the file as a whole: required column presence and
//! minimum data volume. Either failure short-circuits validation with a
//! single structural error.

use csvgate_core::{Dataset, ValidationResult};
use tracing::warn;

/// Columns every upload must carry, after header normalization.
pub const REQUIRED_COLUMNS: [&str; 3] = ["id", "email", "age"];

/// A file must contain strictly more data rows than this.
pub const MIN_ROWS_EXCLUSIVE: usize = 10;

/// Message reported when the volume check fails.
pub const VOLUME_CHECK_MESSAGE: &str =
    "Volume check failed: file must contain more than 10 data rows.";

/// Validates the structure of a dataset.
pub struct SchemaValidator;

impl SchemaValidator {
    /// Creates a new schema validator.
    pub fn new() -> Self {
        Self
    }

    /// Runs the structural checks in order.
    ///
    /// Returns `Some(result)` holding exactly one structural error when the
    /// dataset must be rejected, `None` when row validation may proceed. The
    /// column check runs first; the volume check only runs on a complete
    /// header.
    pub fn validate(&self, dataset: &Dataset) -> Option<ValidationResult> {
        let missing = self.missing_columns(dataset);
        if !missing.is_empty() {
            warn!("Missing required columns: {:?}", missing);
            return Some(ValidationResult::structural_failure(format!(
                "Missing required columns: {}",
                missing.join(", ")
            )));
        }

        if dataset.len() <= MIN_ROWS_EXCLUSIVE {
            warn!(
                "Volume check failed: {} data rows, need more than {}",
                dataset.len(),
                MIN_ROWS_EXCLUSIVE
            );
            return Some(ValidationResult::structural_failure(VOLUME_CHECK_MESSAGE));
        }

        None
    }

    /// Returns the required columns absent from the header, sorted.
    pub fn missing_columns(&self, dataset: &Dataset) -> Vec<&'static str> {
        let mut missing: Vec<&'static str> = REQUIRED_COLUMNS
            .into_iter()
            .filter(|column| !dataset.has_column(column))
            .collect();
        missing.sort_unstable();
        missing
    }
}

impl Default for SchemaValidator {
    fn default() -> Self {
        Self::new()
    }
}
