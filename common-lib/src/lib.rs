//! # common-lib
//!
//! Romanian public-holiday calendar and typed reshaping of SQL results.
//!
//! This crate is a **façade** that re-exports the public items of the
//! workspace crates.  Application code should depend on this crate rather
//! than the individual `cl-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use common_lib::query::{reshape, RawResultSet, ReturnShape, Value};
//! use common_lib::time::{working_days_in_month, Date};
//!
//! let july = Date::from_ymd(2015, 7, 1).unwrap();
//! assert_eq!(working_days_in_month(july, false), 23);
//!
//! let raw = RawResultSet::new(["total"], vec![vec![Value::from(23)]]).unwrap();
//! let total = reshape(&raw, &ReturnShape::Scalar).unwrap();
//! assert_eq!(total.as_scalar(), Some(&Value::Int(23)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and settings.
pub use cl_core as core;

/// Dates, calendars, and the Romanian holiday table.
pub use cl_time as time;

/// Result sets, shapes, and the reshaper.
pub use cl_query as query;

pub use cl_core::{Error, Result};
