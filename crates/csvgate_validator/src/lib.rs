//! # csvgate Validator
//!
//! Validation engine for uploaded CSV files. This crate checks a loaded
//! [`Dataset`](csvgate_core::Dataset) against the fixed upload rules:
//!
//! - Schema validation (columns `id`, `email`, `age` must be present)
//! - Volume validation (more than 10 data rows)
//! - Row validation (non-blank email, age within 18–100)
//!
//! ## Example
//!
//! ```rust
//! use csvgate_validator::validate;
//!
//! let dataset = csvgate_core::DatasetBuilder::new(["id", "email"])
//!     .row(["1", "ada@example.com"])
//!     .build();
//!
//! let result = validate(&dataset);
//!
//! if result.passed() {
//!     println!("Validation passed!");
//! } else {
//!     for error in &result.errors {
//!         println!("Error: {}", error);
//!     }
//! }
//! ```

mod engine;
mod rows;
mod schema;

pub use engine::*;
pub use rows::*;
pub use schema::*;
