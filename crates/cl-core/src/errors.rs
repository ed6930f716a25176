//! Error types for common-lib.
//!
//! Every crate in the workspace reports failures through the single
//! `thiserror`-derived [`Error`] enum defined here.  The structured
//! [`ShapeValidationError`] and [`DriverError`] values are also usable on their
//! own, which is how the result reshaper returns them.  The `ensure!` macro
//! gives an early-return shorthand for preconditions.

use std::fmt;

use thiserror::Error;

/// The top-level error type used throughout common-lib.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error (out of range, malformed input).
    #[error("date error: {0}")]
    Date(String),

    /// A result set did not satisfy the cardinality of the requested shape.
    #[error(transparent)]
    Shape(#[from] ShapeValidationError),

    /// The database driver reported a failure.
    #[error(transparent)]
    Driver(#[from] DriverError),
}

/// Shorthand `Result` type used throughout common-lib.
pub type Result<T, E = Error> = std::result::Result<T, E>;

// ── Cardinality ───────────────────────────────────────────────────────────────

/// An inclusive count range `[min, max]`; `max == None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cardinality {
    /// Smallest accepted count.
    pub min: usize,
    /// Largest accepted count, or `None` for no upper bound.
    pub max: Option<usize>,
}

impl Cardinality {
    /// Exactly `n`.
    pub const fn exactly(n: usize) -> Self {
        Self {
            min: n,
            max: Some(n),
        }
    }

    /// Between `min` and `max`, both inclusive.
    pub const fn between(min: usize, max: usize) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    /// `min` or more.
    pub const fn at_least(min: usize) -> Self {
        Self { min, max: None }
    }

    /// Return `true` if `n` falls inside the range.
    pub fn contains(&self, n: usize) -> bool {
        n >= self.min && self.max.map_or(true, |max| n <= max)
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) if max == self.min => write!(f, "{max}"),
            Some(max) => write!(f, "{} to {max}", self.min),
            None => write!(f, "at least {}", self.min),
        }
    }
}

// ── Shape validation ──────────────────────────────────────────────────────────

/// Which cardinality check rejected a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeViolation {
    /// The row count was outside the accepted range.
    Rows,
    /// The column count was outside the accepted range.
    Columns,
}

impl ShapeViolation {
    /// `"rows"` or `"columns"`.
    pub fn noun(&self) -> &'static str {
        match self {
            ShapeViolation::Rows => "rows",
            ShapeViolation::Columns => "columns",
        }
    }
}

/// A result set could not be reshaped because its row or column count did
/// not match what the requested shape accepts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("expected {} {}, got {}", self.expected(), self.violation.noun(), self.actual())]
pub struct ShapeValidationError {
    /// The check that failed.  Rows are checked before columns.
    pub violation: ShapeViolation,
    /// Accepted row counts.
    pub expected_rows: Cardinality,
    /// Accepted column counts.
    pub expected_cols: Cardinality,
    /// Rows present in the result set.
    pub actual_rows: usize,
    /// Columns present in the result set.
    pub actual_cols: usize,
}

impl ShapeValidationError {
    /// The accepted range for the count that failed.
    pub fn expected(&self) -> Cardinality {
        match self.violation {
            ShapeViolation::Rows => self.expected_rows,
            ShapeViolation::Columns => self.expected_cols,
        }
    }

    /// The observed value of the count that failed.
    pub fn actual(&self) -> usize {
        match self.violation {
            ShapeViolation::Rows => self.actual_rows,
            ShapeViolation::Columns => self.actual_cols,
        }
    }
}

// ── Driver ────────────────────────────────────────────────────────────────────

/// A failure reported by the database driver (lost connection, SQL error).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("driver error {code}: {message}")]
pub struct DriverError {
    /// Driver-specific error number.
    pub code: u32,
    /// Driver-supplied message.
    pub message: String,
}

impl DriverError {
    /// Build a driver error.
    pub fn new(code: u32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

// ── Macros ────────────────────────────────────────────────────────────────────

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use cl_core::{ensure, errors::Error};
/// fn positive(x: i64) -> cl_core::errors::Result<i64> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinality_display() {
        assert_eq!(Cardinality::exactly(1).to_string(), "1");
        assert_eq!(Cardinality::between(2, 99).to_string(), "2 to 99");
        assert_eq!(Cardinality::at_least(1).to_string(), "at least 1");
    }

    #[test]
    fn cardinality_contains() {
        let c = Cardinality::between(2, 99);
        assert!(!c.contains(1));
        assert!(c.contains(2));
        assert!(c.contains(99));
        assert!(!c.contains(100));
        assert!(Cardinality::at_least(1).contains(usize::MAX));
        assert!(!Cardinality::at_least(1).contains(0));
    }

    #[test]
    fn shape_error_messages() {
        let rows = ShapeValidationError {
            violation: ShapeViolation::Rows,
            expected_rows: Cardinality::exactly(1),
            expected_cols: Cardinality::exactly(1),
            actual_rows: 2,
            actual_cols: 1,
        };
        assert_eq!(rows.to_string(), "expected 1 rows, got 2");

        let cols = ShapeValidationError {
            violation: ShapeViolation::Columns,
            actual_rows: 1,
            actual_cols: 3,
            ..rows
        };
        assert_eq!(cols.to_string(), "expected 1 columns, got 3");
        assert_eq!(cols.expected(), Cardinality::exactly(1));
        assert_eq!(cols.actual(), 3);

        let e: Error = cols.into();
        assert_eq!(e.to_string(), "expected 1 columns, got 3");
        let source: &dyn std::error::Error = &e;
        assert_eq!(source.to_string(), "expected 1 columns, got 3");
    }

    #[test]
    fn ensure_returns_precondition() {
        fn non_empty(s: &str) -> Result<usize> {
            crate::ensure!(!s.is_empty(), "empty input");
            Ok(s.len())
        }
        assert_eq!(non_empty("ab"), Ok(2));
        assert_eq!(
            non_empty("").unwrap_err().to_string(),
            "precondition not satisfied: empty input"
        );
    }

    #[test]
    fn wrapped_errors_keep_their_message() {
        let e: Error = DriverError::new(2006, "MySQL server has gone away").into();
        assert_eq!(e.to_string(), "driver error 2006: MySQL server has gone away");
        assert!(matches!(e, Error::Driver(DriverError { code: 2006, .. })));
    }
}
