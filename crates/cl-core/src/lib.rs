//! # cl-core
//!
//! Core types shared across the common-lib workspace: the error hierarchy
//! (including the structured shape-validation and driver errors), the
//! `ensure!` macro and the process-wide `Settings`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Global library settings (evaluation date, holiday defaults).
pub mod settings;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Cardinality, DriverError, Error, Result, ShapeValidationError, ShapeViolation};
pub use settings::{ScopedEvaluationDate, Settings};
