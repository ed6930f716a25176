//! End-to-end: read stored dates through the reshaper and check them against
//! the holiday calendar.

use common_lib::query::{fetch, MemoryConnection, RawResultSet, Reshaped, ReturnShape, Value};
use common_lib::time::{holidays_for_year, working_days_in_month, Calendar, Date, Romania};
use common_lib::Error;

const SQL: &str = "SELECT day FROM timesheet WHERE month = '2016-05'";

fn timesheet() -> MemoryConnection {
    let days = ["2016-05-02", "2016-05-03", "2016-05-04 09:00:00", "2016-05-07"];
    let rows = days.iter().map(|d| vec![Value::from(*d)]).collect();
    MemoryConnection::new().respond(SQL, RawResultSet::new(["day"], rows).unwrap())
}

#[test]
fn flags_days_logged_on_holidays_and_weekends() {
    let mut conn = timesheet();
    let Reshaped::List(values) = fetch(&mut conn, SQL, &ReturnShape::ScalarList).unwrap() else {
        panic!("expected a list");
    };
    let days: Vec<Date> = values
        .iter()
        .map(|v| Date::parse(v.as_str().unwrap()).unwrap())
        .collect();

    let cal = Romania::new(false);
    let off: Vec<Date> = days.iter().copied().filter(|&d| cal.is_holiday(d)).collect();
    // Easter Monday and a Saturday
    assert_eq!(off, vec![Date::from_ymd(2016, 5, 2).unwrap(), Date::from_ymd(2016, 5, 7).unwrap()]);

    let holidays = holidays_for_year(days[0], false);
    assert!(holidays.contains(&days[0]));
    assert_eq!(working_days_in_month(days[0], false), 21);
}

#[test]
fn wrong_shape_surfaces_as_shape_error() {
    let mut conn = timesheet();
    let err = fetch(&mut conn, SQL, &ReturnShape::SingleRowMap).unwrap_err();
    assert!(matches!(err, Error::Shape(_)));
    assert_eq!(err.to_string(), "expected 1 rows, got 4");
}
