//! The database driver boundary.
//!
//! A [`Connection`] runs SQL and returns a [`RawResultSet`] or the driver's
//! own error.  [`fetch`] chains execution and [`reshape`], keeping driver
//! failures and shape failures apart in [`Error`].

use std::collections::HashMap;

use cl_core::errors::{DriverError, Error, Result};
use tracing::warn;

use crate::reshape::{reshape, Reshaped};
use crate::result_set::RawResultSet;
use crate::shape::ReturnShape;

/// Anything that can execute SQL text.
pub trait Connection {
    /// Execute `sql` and return its materialized result.
    fn execute(&mut self, sql: &str) -> std::result::Result<RawResultSet, DriverError>;
}

impl<C: Connection + ?Sized> Connection for &mut C {
    fn execute(&mut self, sql: &str) -> std::result::Result<RawResultSet, DriverError> {
        (**self).execute(sql)
    }
}

/// Execute `sql` on `conn` and reshape the result.
///
/// # Errors
/// [`Error::Driver`] if the driver fails, [`Error::Shape`] if the result does
/// not fit `shape`.
pub fn fetch<C: Connection + ?Sized>(
    conn: &mut C,
    sql: &str,
    shape: &ReturnShape,
) -> Result<Reshaped> {
    let raw = conn.execute(sql).map_err(|err| {
        warn!(code = err.code, message = %err.message, "query failed");
        Error::Driver(err)
    })?;
    Ok(reshape(&raw, shape)?)
}

/// Driver error code for a query with no scripted response (MySQL's
/// "table doesn't exist").
pub const UNSCRIPTED_QUERY: u32 = 1146;

/// A [`Connection`] that answers from a script of canned responses.
///
/// ```
/// use cl_query::{fetch, MemoryConnection, RawResultSet, ReturnShape, Value};
///
/// let mut conn = MemoryConnection::new().respond(
///     "SELECT COUNT(*) FROM users",
///     RawResultSet::new(["COUNT(*)"], vec![vec![Value::from(3)]]).unwrap(),
/// );
/// let n = fetch(&mut conn, "SELECT COUNT(*) FROM users", &ReturnShape::Scalar).unwrap();
/// assert_eq!(n.as_scalar(), Some(&Value::Int(3)));
/// ```
#[derive(Debug, Default)]
pub struct MemoryConnection {
    responses: HashMap<String, std::result::Result<RawResultSet, DriverError>>,
    executed: Vec<String>,
}

impl MemoryConnection {
    /// A connection with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `sql` with `result`.
    pub fn respond(mut self, sql: impl Into<String>, result: RawResultSet) -> Self {
        self.responses.insert(sql.into(), Ok(result));
        self
    }

    /// Answer `sql` with a driver error.
    pub fn fail(mut self, sql: impl Into<String>, error: DriverError) -> Self {
        self.responses.insert(sql.into(), Err(error));
        self
    }

    /// Every statement executed so far, in order.
    pub fn executed(&self) -> &[String] {
        &self.executed
    }
}

impl Connection for MemoryConnection {
    fn execute(&mut self, sql: &str) -> std::result::Result<RawResultSet, DriverError> {
        self.executed.push(sql.to_owned());
        match self.responses.get(sql) {
            Some(response) => response.clone(),
            None => Err(DriverError::new(
                UNSCRIPTED_QUERY,
                format!("no scripted response for {sql:?}"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn driver_error_passes_through() {
        let mut conn = MemoryConnection::new().fail("SELECT 1", DriverError::new(2006, "gone away"));
        let err = fetch(&mut conn, "SELECT 1", &ReturnShape::Scalar).unwrap_err();
        assert_eq!(err, Error::Driver(DriverError::new(2006, "gone away")));
    }

    #[test]
    fn unscripted_query_is_a_driver_error() {
        let mut conn = MemoryConnection::new();
        let err = fetch(&mut conn, "SELECT 2", &ReturnShape::Scalar).unwrap_err();
        assert!(matches!(err, Error::Driver(DriverError { code: UNSCRIPTED_QUERY, .. })));
        assert_eq!(conn.executed(), ["SELECT 2"]);
    }

    #[test]
    fn shape_error_is_distinct() {
        let raw = RawResultSet::new(["a"], vec![vec![Value::from(1)], vec![Value::from(2)]]).unwrap();
        let mut conn = MemoryConnection::new().respond("SELECT a FROM t", raw);
        let err = fetch(&mut conn, "SELECT a FROM t", &ReturnShape::Scalar).unwrap_err();
        let Error::Shape(shape_err) = err else {
            panic!("expected a shape error");
        };
        assert_eq!(shape_err.actual_rows, 2);
    }

    #[test]
    fn works_through_trait_objects() {
        let mut conn = MemoryConnection::new().respond(
            "INSERT INTO t VALUES (1)",
            RawResultSet::empty().with_last_insert_id(9).with_affected_rows(1),
        );
        let dyn_conn: &mut dyn Connection = &mut conn;
        let id = fetch(dyn_conn, "INSERT INTO t VALUES (1)", &ReturnShape::InsertedId).unwrap();
        assert_eq!(id.as_count(), Some(9));
    }
}
