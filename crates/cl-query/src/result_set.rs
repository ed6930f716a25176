//! Raw tabular results as handed over by the database driver.

use cl_core::ensure;
use cl_core::errors::Result;

use crate::record::Record;
use crate::value::Value;

/// The unprocessed rows and column metadata of one query.
///
/// Rows and columns keep the order the driver returned them in.  Every row
/// has exactly one value per column; the constructors reject anything else.
/// The driver-reported insert id and affected-row count travel with the rows
/// so that write statements can be reshaped too.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawResultSet {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
    last_insert_id: u64,
    affected_rows: u64,
}

impl RawResultSet {
    /// Build a result set from column names and row-major values.
    ///
    /// # Errors
    /// Returns a precondition error if any row's length differs from the
    /// number of columns.
    pub fn new<C>(columns: impl IntoIterator<Item = C>, rows: Vec<Vec<Value>>) -> Result<Self>
    where
        C: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        for (i, row) in rows.iter().enumerate() {
            ensure!(
                row.len() == columns.len(),
                "row {i} has {} values but the result has {} columns",
                row.len(),
                columns.len()
            );
        }
        Ok(Self {
            columns,
            rows,
            last_insert_id: 0,
            affected_rows: 0,
        })
    }

    /// A result set with no rows and no columns, as returned by write
    /// statements.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rebuild a result set from records.
    ///
    /// # Errors
    /// Returns a precondition error unless every record has the same columns
    /// in the same order.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Result<Self> {
        let mut records = records.into_iter().peekable();
        let columns: Vec<String> = match records.peek() {
            Some(first) => first.columns().map(str::to_owned).collect(),
            None => return Ok(Self::empty()),
        };
        let mut rows = Vec::new();
        for (i, record) in records.enumerate() {
            ensure!(
                record.columns().eq(columns.iter().map(String::as_str)),
                "record {i} does not have the columns of record 0"
            );
            rows.push(record.into_values().collect());
        }
        Self::new(columns, rows)
    }

    /// Attach the driver-reported id of the last inserted row.
    pub fn with_last_insert_id(mut self, id: u64) -> Self {
        self.last_insert_id = id;
        self
    }

    /// Attach the driver-reported number of affected rows.
    pub fn with_affected_rows(mut self, count: u64) -> Self {
        self.affected_rows = count;
        self
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns reported by the driver.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Column names in driver order.
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Row-major values.
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Id generated by the last `INSERT`, or 0.
    pub fn last_insert_id(&self) -> u64 {
        self.last_insert_id
    }

    /// Rows changed by the last write statement.
    pub fn affected_rows(&self) -> u64 {
        self.affected_rows
    }

    /// Row `index` as a record.
    pub fn record(&self, index: usize) -> Option<Record> {
        self.rows.get(index).map(|row| self.to_record(row))
    }

    /// Every row as a record, in arrival order.
    pub fn records(&self) -> impl Iterator<Item = Record> + '_ {
        self.rows.iter().map(|row| self.to_record(row))
    }

    fn to_record(&self, row: &[Value]) -> Record {
        self.columns.iter().cloned().zip(row.iter().cloned()).collect()
    }
}
