//! Gradebook Core Library
//!
//! Domain logic for the gradebook tools: the class model, gradebook files,
//! grade loading, averages, and class validation.

pub mod average;
pub mod class;
pub mod error;
pub mod gradebook;
pub mod loader;
pub mod logging;
pub mod validate;

pub use average::AverageResult;
pub use class::{Class, Student, Term};
pub use error::{GradebookError, Result};
pub use gradebook::{Grade, Gradebook};
pub use validate::{ValidationErrors, ValidationIssue};
