//! Reprojection of a raw result set into the requested shape.

use std::collections::BTreeMap;

use cl_core::errors::ShapeValidationError;
use serde::Serialize;
use tracing::{debug, trace};

use crate::record::Record;
use crate::result_set::RawResultSet;
use crate::shape::ReturnShape;
use crate::value::Value;

/// The output of [`reshape`].  Which variant comes back is fixed by the
/// requested [`ReturnShape`].
///
/// Serializes untagged, so a `Map` becomes a JSON object, `Records` an array
/// of objects, and so on.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reshaped {
    /// [`ReturnShape::Scalar`].
    Scalar(Value),
    /// [`ReturnShape::KeyValueMap`] and [`ReturnShape::CompositeKeyMap`].
    Map(BTreeMap<String, Value>),
    /// [`ReturnShape::KeyValueListMap`].
    ListMap(BTreeMap<String, Vec<Value>>),
    /// [`ReturnShape::FirstColAsKeyRest`].
    RecordMap(BTreeMap<String, Record>),
    /// [`ReturnShape::ScalarList`].
    List(Vec<Value>),
    /// [`ReturnShape::SingleRowMap`].
    Record(Record),
    /// [`ReturnShape::RowList`].
    Records(Vec<Record>),
    /// [`ReturnShape::RowListPrefixed`].
    PrefixedRecords(BTreeMap<String, Vec<Record>>),
    /// [`ReturnShape::InsertedId`] and [`ReturnShape::AffectedRowCount`].
    Count(u64),
}

impl Reshaped {
    /// The single value of a `Scalar`.
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            Reshaped::Scalar(v) => Some(v),
            _ => None,
        }
    }

    /// The map of a `Map`.
    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Reshaped::Map(m) => Some(m),
            _ => None,
        }
    }

    /// The count of a `Count`.
    pub fn as_count(&self) -> Option<u64> {
        match self {
            Reshaped::Count(n) => Some(*n),
            _ => None,
        }
    }

    /// The rows of `Records`, `Record`, or `PrefixedRecords` (flattened in
    /// key order), ready for [`RawResultSet::from_records`].
    pub fn into_records(self) -> Option<Vec<Record>> {
        match self {
            Reshaped::Records(rows) => Some(rows),
            Reshaped::Record(row) => Some(vec![row]),
            Reshaped::PrefixedRecords(groups) => Some(groups.into_values().flatten().collect()),
            _ => None,
        }
    }
}

/// Validate `raw` against `shape` and reproject it.
///
/// The row count is checked first, then the column count; if either falls
/// outside the shape's range nothing is reshaped and the error describes the
/// counts observed.  `InsertedId` and `AffectedRowCount` skip validation and
/// read only the driver counters.
pub fn reshape(raw: &RawResultSet, shape: &ReturnShape) -> Result<Reshaped, ShapeValidationError> {
    if let Err(err) = shape.validate(raw) {
        debug!(
            shape = shape.name(),
            rows = raw.row_count(),
            columns = raw.column_count(),
            %err,
            "result set rejected"
        );
        return Err(err);
    }

    let rows = raw.rows();
    let reshaped = match shape {
        ReturnShape::Scalar => Reshaped::Scalar(rows[0][0].clone()),
        ReturnShape::KeyValueMap => Reshaped::Map(
            rows.iter()
                .map(|row| (row[0].as_key(), row[1].clone()))
                .collect(),
        ),
        ReturnShape::KeyValueListMap => {
            let mut map: BTreeMap<String, Vec<Value>> = BTreeMap::new();
            for row in rows {
                map.entry(row[0].as_key()).or_default().push(row[1].clone());
            }
            Reshaped::ListMap(map)
        }
        ReturnShape::CompositeKeyMap => Reshaped::Map(
            rows.iter()
                .map(|row| {
                    let key = format!("{}@{}", row[0].as_key(), row[1].as_key());
                    (key, row[1].clone())
                })
                .collect(),
        ),
        ReturnShape::FirstColAsKeyRest => {
            let rest = &raw.column_names()[1..];
            Reshaped::RecordMap(
                rows.iter()
                    .map(|row| {
                        let record: Record = rest.iter().cloned().zip(row[1..].iter().cloned()).collect();
                        (row[0].as_key(), record)
                    })
                    .collect(),
            )
        }
        ReturnShape::ScalarList => Reshaped::List(rows.iter().map(|row| row[0].clone()).collect()),
        ReturnShape::SingleRowMap => Reshaped::Record(raw.records().next().unwrap_or_default()),
        ReturnShape::RowList => Reshaped::Records(raw.records().collect()),
        ReturnShape::RowListPrefixed(prefix) => {
            let records: Vec<Record> = raw.records().collect();
            Reshaped::PrefixedRecords(BTreeMap::from([(prefix.clone(), records)]))
        }
        ReturnShape::InsertedId => Reshaped::Count(raw.last_insert_id()),
        ReturnShape::AffectedRowCount => Reshaped::Count(raw.affected_rows()),
    };
    trace!(shape = shape.name(), rows = raw.row_count(), "reshaped result set");
    Ok(reshaped)
}
