//! # csvgate Core
//!
//! Core data structures shared by the csvgate loader, validator and server.
//!
//! An uploaded CSV file is turned into a [`Dataset`] by the loader, checked by a
//! [`DatasetValidator`], and the outcome is reported as a [`ValidationResult`]
//! that serializes directly into the JSON body returned to the uploader.
//!
//! ## Key Concepts
//!
//! - **Dataset**: normalized header plus rows of [`CellValue`]s
//! - **ValidationError**: one structural or row-level finding
//! - **ValidationResult**: pass/fail verdict with its ordered list of findings
//!
//! ## Example
//!
//! ```rust
//! use csvgate_core::{CellValue, DatasetBuilder};
//!
//! let dataset = DatasetBuilder::new(["id", "email", "age"])
//!     .row(["1", "ada@example.com", "36"])
//!     .row(["2", "", "41"])
//!     .build();
//!
//! assert_eq!(dataset.len(), 2);
//! assert!(dataset.has_column("email"));
//! assert_eq!(dataset.rows()[1].get("email"), &CellValue::Missing);
//! ```

pub mod builder;
pub mod dataset;
pub mod report;
pub mod validator;

pub use builder::*;
pub use dataset::*;
pub use report::*;
pub use validator::*;
