//! # cl-query
//!
//! Validation and reshaping of tabular query results.
//!
//! A [`RawResultSet`] (column names, rows, driver counters) is turned into one
//! of the [`ReturnShape`]s by [`reshape`].  Each shape accepts a fixed range of
//! row and column counts; results outside it are rejected with a
//! [`ShapeValidationError`] before anything is reshaped.
//!
//! ```
//! use cl_query::{reshape, RawResultSet, Reshaped, ReturnShape, Value};
//!
//! let raw = RawResultSet::new(
//!     ["code", "name"],
//!     vec![
//!         vec!["RO".into(), "Romania".into()],
//!         vec!["MD".into(), "Moldova".into()],
//!     ],
//! )
//! .unwrap();
//! let Reshaped::Map(names) = reshape(&raw, &ReturnShape::KeyValueMap).unwrap() else {
//!     unreachable!()
//! };
//! assert_eq!(names["RO"], Value::from("Romania"));
//!
//! let err = reshape(&raw, &ReturnShape::Scalar).unwrap_err();
//! assert_eq!(err.to_string(), "expected 1 rows, got 2");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Driver boundary and scripted in-memory connection.
pub mod connection;

/// One row keyed by column name.
pub mod record;

/// The reshaping dispatcher.
pub mod reshape;

/// Raw result sets.
pub mod result_set;

/// Requested output shapes.
pub mod shape;

/// Cell values.
pub mod value;

pub use cl_core::errors::{Cardinality, DriverError, ShapeValidationError, ShapeViolation};
pub use connection::{fetch, Connection, MemoryConnection};
pub use record::Record;
pub use reshape::{reshape, Reshaped};
pub use result_set::RawResultSet;
pub use shape::{ReturnShape, MAX_COLUMNS};
pub use value::Value;
