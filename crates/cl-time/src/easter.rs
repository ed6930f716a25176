//! Easter dates.
//!
//! Western (Gregorian) Easter is computed for any supported year.  Orthodox
//! Easter, and the Pentecost that follows it, come from a literal table that
//! covers 2001–2020 only; outside that range there is no data and the lookups
//! return `None`.

use cl_core::errors::Result;

use crate::date::Date;

/// Orthodox Easter Sunday and, where it is a public holiday, Pentecost
/// Sunday, as `(year, (month, day), Option<(month, day)>)`.
///
/// Pentecost became a public holiday in 2009.
const ORTHODOX_TABLE: [(u16, (u8, u8), Option<(u8, u8)>); 20] = [
    (2001, (4, 15), None),
    (2002, (5, 5), None),
    (2003, (4, 27), None),
    (2004, (4, 11), None),
    (2005, (5, 1), None),
    (2006, (4, 23), None),
    (2007, (4, 8), None),
    (2008, (4, 27), None),
    (2009, (4, 19), Some((6, 7))),
    (2010, (4, 4), Some((5, 23))),
    (2011, (4, 24), Some((6, 12))),
    (2012, (4, 15), Some((6, 3))),
    (2013, (5, 5), Some((6, 23))),
    (2014, (4, 20), Some((6, 8))),
    (2015, (4, 12), Some((5, 31))),
    (2016, (5, 1), Some((6, 19))),
    (2017, (4, 16), Some((6, 4))),
    (2018, (4, 8), Some((5, 27))),
    (2019, (4, 28), Some((6, 16))),
    (2020, (4, 19), Some((6, 7))),
];

/// First and last year covered by the Orthodox table.
pub const ORTHODOX_TABLE_YEARS: (u16, u16) = (2001, 2020);

fn table_row(year: u16) -> Option<&'static (u16, (u8, u8), Option<(u8, u8)>)> {
    ORTHODOX_TABLE.iter().find(|(y, _, _)| *y == year)
}

fn md(year: u16, (month, day): (u8, u8)) -> Date {
    Date::from_ymd(year, month, day).expect("Easter table entries are valid dates")
}

/// Orthodox Easter Sunday for `year`, if the table covers it.
pub fn orthodox_easter_sunday(year: u16) -> Option<Date> {
    table_row(year).map(|&(y, easter, _)| md(y, easter))
}

/// Orthodox Pentecost Sunday for `year`, if the table lists it as a holiday.
pub fn orthodox_pentecost_sunday(year: u16) -> Option<Date> {
    table_row(year).and_then(|&(y, _, pentecost)| pentecost.map(|p| md(y, p)))
}

/// Western (Gregorian) Easter Sunday for `year`.
///
/// Uses Oudin's algorithm.
///
/// # Errors
/// Returns a date error if `year` is outside the `Date` range.
pub fn western_easter_sunday(year: u16) -> Result<Date> {
    let y = year as i32;
    let g = y % 19;
    let c = y / 100;
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (y + y / 4 + i + 2 - c + c / 4) % 7;
    let p = i - j;
    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;
    Date::from_ymd(year, month as u8, day as u8)
}
