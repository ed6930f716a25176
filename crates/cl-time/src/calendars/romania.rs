//! Romania public-holiday calendar.
//!
//! Saturdays, Sundays and the following legal holidays are non-working days:
//! * New Year (Jan 1–2)
//! * Unification Day (Jan 24, since 2015)
//! * Orthodox Easter Sunday and Monday
//! * Labour Day (May 1)
//! * Orthodox Pentecost Sunday and Monday (since 2009)
//! * Assumption of Mary (Aug 15, since 2009)
//! * St. Andrew's Day (Nov 30, since 2012)
//! * National Day (Dec 1)
//! * Christmas (Dec 25–26)
//!
//! Catholic Easter Sunday and Monday can be added on request.
//!
//! Orthodox dates come from a literal table covering 2001–2020.  Years
//! outside that range get only the fixed holidays (plus Catholic Easter when
//! requested); this is a known data gap, not a computed result.

use std::collections::BTreeSet;

use cl_core::errors::Result;
use cl_core::settings::Settings;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::calendar::Calendar;
use crate::date::Date;
use crate::easter::{orthodox_easter_sunday, orthodox_pentecost_sunday, western_easter_sunday};
use crate::holiday::{HolidayCategory, HolidayEntry};

/// A holiday on the same month and day every year from `since` onward.
struct FixedHoliday {
    month: u8,
    day: u8,
    since: Option<u16>,
    name: &'static str,
}

impl FixedHoliday {
    fn observed_in(&self, year: u16) -> bool {
        self.since.map_or(true, |since| year >= since)
    }
}

const FIXED_HOLIDAYS: [FixedHoliday; 9] = [
    FixedHoliday { month: 1, day: 1, since: None, name: "New Year's Day" },
    FixedHoliday { month: 1, day: 2, since: None, name: "Day after New Year's Day" },
    FixedHoliday { month: 1, day: 24, since: Some(2015), name: "Unification Day" },
    FixedHoliday { month: 5, day: 1, since: None, name: "Labour Day" },
    FixedHoliday { month: 8, day: 15, since: Some(2009), name: "Assumption of Mary" },
    FixedHoliday { month: 11, day: 30, since: Some(2012), name: "St. Andrew's Day" },
    FixedHoliday { month: 12, day: 1, since: None, name: "National Day" },
    FixedHoliday { month: 12, day: 25, since: None, name: "Christmas Day" },
    FixedHoliday { month: 12, day: 26, since: None, name: "Second Day of Christmas" },
];

/// Catholic Easter for 2005 is pinned rather than computed.
const CATHOLIC_EASTER_2005: [(u8, u8); 2] = [(3, 27), (3, 28)];

/// Catholic Easter Sunday and Monday of `year`.
fn catholic_easter(year: u16) -> Result<(Date, Date)> {
    if year == 2005 {
        let [(sm, sd), (mm, md)] = CATHOLIC_EASTER_2005;
        return Ok((Date::from_ymd(year, sm, sd)?, Date::from_ymd(year, mm, md)?));
    }
    let sunday = western_easter_sunday(year)?;
    Ok((sunday, sunday.add_days(1)?))
}

/// Orthodox Easter and Pentecost, Sunday and Monday each, where the table
/// has them.
fn orthodox_days(year: u16) -> impl Iterator<Item = (Date, &'static str)> {
    let easter = orthodox_easter_sunday(year)
        .into_iter()
        .flat_map(|sunday| [(sunday, "Easter Sunday"), (sunday + 1, "Easter Monday")]);
    let pentecost = orthodox_pentecost_sunday(year)
        .into_iter()
        .flat_map(|sunday| [(sunday, "Pentecost Sunday"), (sunday + 1, "Pentecost Monday")]);
    easter.chain(pentecost)
}

/// Every holiday of `year`, tagged with its category and sorted by date.
///
/// A date can appear more than once when two holidays coincide (Orthodox
/// Easter 2005 fell on Labour Day).
///
/// # Errors
/// Returns a date error if `year` is outside the `Date` range.
pub fn holiday_entries(year: u16, include_catholic_easter: bool) -> Result<Vec<HolidayEntry>> {
    let mut entries = Vec::with_capacity(FIXED_HOLIDAYS.len() + 6);
    for h in FIXED_HOLIDAYS.iter().filter(|h| h.observed_in(year)) {
        let date = Date::from_ymd(year, h.month, h.day)?;
        entries.push(HolidayEntry::new(date, HolidayCategory::Fixed, h.name));
    }

    if include_catholic_easter {
        let (sunday, monday) = catholic_easter(year)?;
        entries.push(HolidayEntry::new(sunday, HolidayCategory::CatholicEasterVariable, "Catholic Easter Sunday"));
        entries.push(HolidayEntry::new(monday, HolidayCategory::CatholicEasterVariable, "Catholic Easter Monday"));
    }

    entries.extend(
        orthodox_days(year)
            .map(|(date, name)| HolidayEntry::new(date, HolidayCategory::OrthodoxEasterVariable, name)),
    );

    entries.sort_by_key(|e| (e.date, e.category));
    Ok(entries)
}

/// The non-working dates of the year containing `date`, sorted and
/// deduplicated.
pub fn holidays_for_year(date: Date, include_catholic_easter: bool) -> BTreeSet<Date> {
    let year = date.year();
    if orthodox_easter_sunday(year).is_none() {
        debug!(year, "no Orthodox Easter data, using fixed holidays only");
    }
    let holidays: BTreeSet<Date> = holiday_entries(year, include_catholic_easter)
        .expect("the year of a valid Date is in range")
        .into_iter()
        .map(|e| e.date)
        .collect();
    trace!(year, include_catholic_easter, count = holidays.len(), "computed holidays");
    holidays
}

/// Whether `date` is a public holiday, checked against the rules directly
/// rather than through the year's list.
fn is_public_holiday(date: Date, include_catholic_easter: bool) -> bool {
    let year = date.year();
    let (month, day) = (date.month(), date.day_of_month());
    if FIXED_HOLIDAYS
        .iter()
        .any(|h| h.month == month && h.day == day && h.observed_in(year))
    {
        return true;
    }
    if orthodox_days(year).any(|(d, _)| d == date) {
        return true;
    }
    include_catholic_easter
        && catholic_easter(year).map_or(false, |(sunday, monday)| date == sunday || date == monday)
}

/// Number of working days in the month containing `date`.
///
/// A day counts iff it is not a Saturday, not a Sunday, and not in
/// [`holidays_for_year`].
pub fn working_days_in_month(date: Date, include_catholic_easter: bool) -> u32 {
    let holidays = holidays_for_year(date, include_catholic_easter);
    date.days_of_month()
        .filter(|d| !d.weekday().is_weekend() && !holidays.contains(d))
        .count() as u32
}

/// Working days in the current month, using [`Date::today`] and the
/// Catholic Easter default from [`Settings`].
pub fn working_days_in_current_month() -> Result<u32> {
    let today = Date::today()?;
    Ok(working_days_in_month(today, Settings::instance().include_catholic_easter()))
}

// ── Calendar ──────────────────────────────────────────────────────────────────

/// Romania calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Romania {
    include_catholic_easter: bool,
}

impl Romania {
    /// A Romania calendar, optionally treating Catholic Easter as a holiday.
    pub fn new(include_catholic_easter: bool) -> Self {
        Self {
            include_catholic_easter,
        }
    }

    /// Whether Catholic Easter Sunday and Monday are holidays.
    pub fn includes_catholic_easter(&self) -> bool {
        self.include_catholic_easter
    }

    /// The holidays of the year containing `date`.
    pub fn holidays(&self, date: Date) -> BTreeSet<Date> {
        holidays_for_year(date, self.include_catholic_easter)
    }
}

impl Calendar for Romania {
    fn name(&self) -> &str {
        "Romania"
    }

    fn is_working_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !is_public_holiday(date, self.include_catholic_easter)
    }

    fn working_days_in_month(&self, date: Date) -> u32 {
        working_days_in_month(date, self.include_catholic_easter)
    }
}

/// Serializable calendar settings.
///
/// ```
/// use cl_time::calendars::romania::CalendarOptions;
///
/// let options: CalendarOptions = serde_json::from_str(r#"{"include_catholic_easter": true}"#).unwrap();
/// assert!(options.calendar().includes_catholic_easter());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarOptions {
    /// Treat Catholic Easter Sunday and Monday as holidays.
    pub include_catholic_easter: bool,
}

impl CalendarOptions {
    /// Build the calendar these options describe.
    pub fn calendar(&self) -> Romania {
        Romania::new(self.include_catholic_easter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn policy_start_years() {
        let before = holidays_for_year(date(2008, 1, 1), false);
        assert!(!before.contains(&date(2008, 8, 15)));
        assert!(holidays_for_year(date(2009, 1, 1), false).contains(&date(2009, 8, 15)));

        assert!(!holidays_for_year(date(2011, 1, 1), false).contains(&date(2011, 11, 30)));
        assert!(holidays_for_year(date(2012, 1, 1), false).contains(&date(2012, 11, 30)));

        assert!(!holidays_for_year(date(2014, 1, 1), false).contains(&date(2014, 1, 24)));
        assert!(holidays_for_year(date(2015, 1, 1), false).contains(&date(2015, 1, 24)));
    }

    #[test]
    fn orthodox_easter_and_pentecost() {
        let h = holidays_for_year(date(2016, 6, 1), false);
        assert!(h.contains(&date(2016, 5, 1)));
        assert!(h.contains(&date(2016, 5, 2)));
        assert!(h.contains(&date(2016, 6, 19)));
        assert!(h.contains(&date(2016, 6, 20)));
    }

    #[test]
    fn coinciding_holidays_are_deduplicated() {
        // Orthodox Easter 2005 was May 1, Labour Day
        let entries = holiday_entries(2005, false).unwrap();
        let on_may_first = entries.iter().filter(|e| e.date == date(2005, 5, 1)).count();
        assert_eq!(on_may_first, 2);
        let set = holidays_for_year(date(2005, 5, 1), false);
        assert_eq!(set.len(), entries.len() - 1);
    }

    #[test]
    fn catholic_easter_only_on_request() {
        let without = holidays_for_year(date(2010, 1, 1), false);
        let with = holidays_for_year(date(2010, 1, 1), true);
        // 2010: both Easters fell on April 4
        assert_eq!(with, without);

        let without = holidays_for_year(date(2008, 1, 1), false);
        let with = holidays_for_year(date(2008, 1, 1), true);
        assert!(!without.contains(&date(2008, 3, 23)));
        assert!(with.contains(&date(2008, 3, 23)));
        assert!(with.contains(&date(2008, 3, 24)));
        assert_eq!(with.len(), without.len() + 2);
    }

    #[test]
    fn catholic_easter_2005_override() {
        let h = holidays_for_year(date(2005, 7, 1), true);
        assert!(h.contains(&date(2005, 3, 27)));
        assert!(h.contains(&date(2005, 3, 28)));
    }

    #[test]
    fn entries_are_sorted_and_tagged() {
        let entries = holiday_entries(2012, true).unwrap();
        assert!(entries.windows(2).all(|w| w[0].date <= w[1].date));
        assert!(entries
            .iter()
            .any(|e| e.category == HolidayCategory::CatholicEasterVariable));
        assert_eq!(entries[0].name, "New Year's Day");
    }

    #[test]
    fn entries_outside_date_range_are_errors() {
        assert!(holiday_entries(1899, false).is_err());
        assert!(holiday_entries(2200, true).is_err());
        assert_eq!(holiday_entries(2199, true).unwrap().len(), 11);
    }

    #[test]
    fn membership_check_agrees_with_year_list() {
        for year in (1995..=2025).chain([1900, 2199]) {
            for catholic in [false, true] {
                let holidays = holidays_for_year(date(year, 1, 1), catholic);
                let mut d = date(year, 1, 1);
                while d.year() == year {
                    assert_eq!(is_public_holiday(d, catholic), holidays.contains(&d), "{d} {catholic}");
                    if d == Date::MAX {
                        break;
                    }
                    d += 1;
                }
            }
        }
    }

    #[test]
    fn calendar_matches_free_functions() {
        let cal = Romania::new(false);
        assert_eq!(cal.name(), "Romania");
        assert!(!cal.is_working_day(date(2001, 12, 25)));
        assert!(cal.is_working_day(date(2001, 12, 27)));
        assert_eq!(
            cal.working_days_in_month(date(2001, 12, 5)),
            working_days_in_month(date(2001, 12, 5), false)
        );
        // Trait default agrees with the override
        let counted = date(2001, 12, 1)
            .days_of_month()
            .filter(|&d| cal.is_working_day(d))
            .count() as u32;
        assert_eq!(counted, 19);
    }
}
