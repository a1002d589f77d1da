//! Validation trait for datasets.
//!
//! The loader and the transport layers (HTTP server, CLI) only know this
//! trait; the concrete rule set lives in `csvgate_validator`.

use crate::{Dataset, ValidationResult};

/// Core trait for validating an uploaded dataset.
///
/// Implementations must be pure: validating the same dataset twice yields the
/// same result, and no state is carried between calls.
///
/// # Example
///
/// ```rust
/// use csvgate_core::{Dataset, DatasetValidator, ValidationResult};
///
/// struct AcceptAll;
///
/// impl DatasetValidator for AcceptAll {
///     fn validate(&self, _dataset: &Dataset) -> ValidationResult {
///         ValidationResult::pass()
///     }
/// }
///
/// assert!(AcceptAll.validate(&Dataset::default()).passed());
/// ```
pub trait DatasetValidator: Send + Sync {
    /// Validates a dataset and returns the verdict with all findings.
    fn validate(&self, dataset: &Dataset) -> ValidationResult;
}
