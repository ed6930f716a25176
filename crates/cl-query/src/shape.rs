//! Requested output shapes and their cardinality rules.

use std::fmt;

use cl_core::errors::{Cardinality, ShapeValidationError, ShapeViolation};
use serde::{Deserialize, Serialize};

use crate::result_set::RawResultSet;

/// Widest result accepted by the multi-column shapes.
pub const MAX_COLUMNS: usize = 99;

/// The structure a caller wants a result set turned into.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReturnShape {
    /// One row, one column: the single value.
    Scalar,
    /// Two columns: map of column 0 to column 1; a repeated key keeps the
    /// last value.
    KeyValueMap,
    /// Two columns: map of column 0 to every column 1 value seen for it.
    KeyValueListMap,
    /// Two columns: map of `"col0@col1"` to column 1.
    CompositeKeyMap,
    /// Two or more columns: map of column 0 to the remaining columns by name.
    FirstColAsKeyRest,
    /// One column: its values in row order.
    ScalarList,
    /// One row: column name to value.
    SingleRowMap,
    /// Every row as a record, in row order.
    RowList,
    /// Like `RowList`, nested under the given key.
    RowListPrefixed(String),
    /// The driver-reported id of the last inserted row.
    InsertedId,
    /// The driver-reported number of affected rows.
    AffectedRowCount,
}

impl ReturnShape {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            ReturnShape::Scalar => "scalar",
            ReturnShape::KeyValueMap => "key_value_map",
            ReturnShape::KeyValueListMap => "key_value_list_map",
            ReturnShape::CompositeKeyMap => "composite_key_map",
            ReturnShape::FirstColAsKeyRest => "first_col_as_key_rest",
            ReturnShape::ScalarList => "scalar_list",
            ReturnShape::SingleRowMap => "single_row_map",
            ReturnShape::RowList => "row_list",
            ReturnShape::RowListPrefixed(_) => "row_list_prefixed",
            ReturnShape::InsertedId => "inserted_id",
            ReturnShape::AffectedRowCount => "affected_row_count",
        }
    }

    /// Accepted row counts, or `None` for shapes that ignore row data.
    pub fn row_range(&self) -> Option<Cardinality> {
        match self {
            ReturnShape::Scalar | ReturnShape::SingleRowMap => Some(Cardinality::exactly(1)),
            ReturnShape::InsertedId | ReturnShape::AffectedRowCount => None,
            _ => Some(Cardinality::at_least(1)),
        }
    }

    /// Accepted column counts, or `None` for shapes that ignore row data.
    pub fn column_range(&self) -> Option<Cardinality> {
        match self {
            ReturnShape::Scalar | ReturnShape::ScalarList => Some(Cardinality::exactly(1)),
            ReturnShape::KeyValueMap
            | ReturnShape::KeyValueListMap
            | ReturnShape::CompositeKeyMap => Some(Cardinality::exactly(2)),
            ReturnShape::FirstColAsKeyRest => Some(Cardinality::between(2, MAX_COLUMNS)),
            ReturnShape::SingleRowMap | ReturnShape::RowList | ReturnShape::RowListPrefixed(_) => {
                Some(Cardinality::between(1, MAX_COLUMNS))
            }
            ReturnShape::InsertedId | ReturnShape::AffectedRowCount => None,
        }
    }

    /// Check the row count, then the column count, of `raw`.
    pub fn validate(&self, raw: &RawResultSet) -> Result<(), ShapeValidationError> {
        let (Some(expected_rows), Some(expected_cols)) = (self.row_range(), self.column_range())
        else {
            return Ok(());
        };
        let actual_rows = raw.row_count();
        let actual_cols = raw.column_count();
        let violation = if !expected_rows.contains(actual_rows) {
            ShapeViolation::Rows
        } else if !expected_cols.contains(actual_cols) {
            ShapeViolation::Columns
        } else {
            return Ok(());
        };
        Err(ShapeValidationError {
            violation,
            expected_rows,
            expected_cols,
            actual_rows,
            actual_cols,
        })
    }
}

impl fmt::Display for ReturnShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    fn table(rows: usize, cols: usize) -> RawResultSet {
        let columns: Vec<String> = (0..cols).map(|c| format!("c{c}")).collect();
        let data = (0..rows)
            .map(|r| (0..cols).map(|c| Value::from((r * cols + c) as i64)).collect())
            .collect();
        RawResultSet::new(columns, data).unwrap()
    }

    #[test]
    fn ranges_match_table() {
        use ReturnShape::*;
        let cases = [
            (Scalar, Cardinality::exactly(1), Cardinality::exactly(1)),
            (KeyValueMap, Cardinality::at_least(1), Cardinality::exactly(2)),
            (KeyValueListMap, Cardinality::at_least(1), Cardinality::exactly(2)),
            (CompositeKeyMap, Cardinality::at_least(1), Cardinality::exactly(2)),
            (FirstColAsKeyRest, Cardinality::at_least(1), Cardinality::between(2, 99)),
            (ScalarList, Cardinality::at_least(1), Cardinality::exactly(1)),
            (SingleRowMap, Cardinality::exactly(1), Cardinality::between(1, 99)),
            (RowList, Cardinality::at_least(1), Cardinality::between(1, 99)),
            (RowListPrefixed("p".into()), Cardinality::at_least(1), Cardinality::between(1, 99)),
        ];
        for (shape, rows, cols) in cases {
            assert_eq!(shape.row_range(), Some(rows), "{shape}");
            assert_eq!(shape.column_range(), Some(cols), "{shape}");
        }
        assert_eq!(InsertedId.row_range(), None);
        assert_eq!(AffectedRowCount.column_range(), None);
    }

    #[test]
    fn rows_checked_before_columns() {
        let err = ReturnShape::Scalar.validate(&table(2, 3)).unwrap_err();
        assert_eq!(err.violation, ShapeViolation::Rows);
        assert_eq!(err.actual_rows, 2);
        assert_eq!(err.actual_cols, 3);
        assert_eq!(err.to_string(), "expected 1 rows, got 2");

        let err = ReturnShape::Scalar.validate(&table(1, 3)).unwrap_err();
        assert_eq!(err.violation, ShapeViolation::Columns);
        assert_eq!(err.to_string(), "expected 1 columns, got 3");
    }

    #[test]
    fn column_upper_bound() {
        assert!(ReturnShape::RowList.validate(&table(1, 99)).is_ok());
        let err = ReturnShape::RowList.validate(&table(1, 100)).unwrap_err();
        assert_eq!(err.to_string(), "expected 1 to 99 columns, got 100");
    }

    #[test]
    fn empty_result_fails_row_shapes() {
        let err = ReturnShape::RowList.validate(&table(0, 2)).unwrap_err();
        assert_eq!(err.to_string(), "expected at least 1 rows, got 0");
    }

    #[test]
    fn driver_shapes_skip_validation() {
        assert!(ReturnShape::InsertedId.validate(&RawResultSet::empty()).is_ok());
        assert!(ReturnShape::AffectedRowCount.validate(&table(5, 5)).is_ok());
    }
}
