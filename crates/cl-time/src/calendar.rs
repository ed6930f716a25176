//! `Calendar` trait and the trivial calendars.
//!
//! A calendar knows which dates are working days and can adjust dates
//! according to a [`BusinessDayConvention`].

use cl_core::errors::Result;

use crate::business_day_convention::BusinessDayConvention;
use crate::date::Date;

/// A working-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Romania"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a working day in this calendar.
    fn is_working_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a non-working day (weekend or holiday).
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_working_day(date)
    }

    /// Return `true` if `date` is a weekend according to this calendar.
    ///
    /// Most calendars consider Saturday and Sunday as weekends.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Adjust `date` according to the given convention.
    ///
    /// Fails only if the search runs off the supported date range.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Result<Date> {
        match convention {
            BusinessDayConvention::Unadjusted => Ok(date),
            BusinessDayConvention::Following => {
                let mut d = date;
                while self.is_holiday(d) {
                    d = d.add_days(1)?;
                }
                Ok(d)
            }
            BusinessDayConvention::Preceding => {
                let mut d = date;
                while self.is_holiday(d) {
                    d = d.add_days(-1)?;
                }
                Ok(d)
            }
            BusinessDayConvention::ModifiedFollowing => {
                let adjusted = self.adjust(date, BusinessDayConvention::Following)?;
                if adjusted.month() != date.month() {
                    self.adjust(date, BusinessDayConvention::Preceding)
                } else {
                    Ok(adjusted)
                }
            }
            BusinessDayConvention::ModifiedPreceding => {
                let adjusted = self.adjust(date, BusinessDayConvention::Preceding)?;
                if adjusted.month() != date.month() {
                    self.adjust(date, BusinessDayConvention::Following)
                } else {
                    Ok(adjusted)
                }
            }
        }
    }

    /// Advance `date` by `n` working days (backwards if `n < 0`).
    fn advance_working_days(&self, date: Date, n: i32) -> Result<Date> {
        let step: i32 = if n >= 0 { 1 } else { -1 };
        let mut remaining = n.abs();
        let mut d = date;
        while remaining > 0 {
            d = d.add_days(step)?;
            if self.is_working_day(d) {
                remaining -= 1;
            }
        }
        Ok(d)
    }

    /// Count the working days between `d1` (exclusive) and `d2` (inclusive).
    /// Returns a negative number if `d2 < d1`.
    fn working_days_between(&self, d1: Date, d2: Date) -> i32 {
        if d1 == d2 {
            return 0;
        }
        let sign = if d2 > d1 { 1 } else { -1 };
        let (start, end) = if d2 > d1 { (d1, d2) } else { (d2, d1) };
        let count = (start.serial() + 1..=end.serial())
            .filter_map(|s| Date::from_serial(s).ok())
            .filter(|&d| self.is_working_day(d))
            .count() as i32;
        sign * count
    }

    /// Count the working days in the month containing `date`.
    fn working_days_in_month(&self, date: Date) -> u32 {
        date.days_of_month()
            .filter(|&d| self.is_working_day(d))
            .count() as u32
    }

    /// Non-working days in `[from, to]`, optionally including plain weekends.
    fn holiday_list(&self, from: Date, to: Date, include_weekends: bool) -> Vec<Date> {
        (from.serial()..=to.serial())
            .filter_map(|s| Date::from_serial(s).ok())
            .filter(|&d| self.is_holiday(d) && (include_weekends || !self.is_weekend(d)))
            .collect()
    }
}

/// A null calendar — treats every day as a working day.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCalendar;

impl Calendar for NullCalendar {
    fn name(&self) -> &str {
        "Null"
    }

    fn is_working_day(&self, _date: Date) -> bool {
        true
    }

    fn is_weekend(&self, _date: Date) -> bool {
        false
    }
}

/// A calendar that treats only Saturdays and Sundays as non-working days.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_working_day(&self, date: Date) -> bool {
        !self.is_weekend(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn null_calendar_always_working() {
        let cal = NullCalendar;
        assert!(cal.is_working_day(date(2023, 12, 25)));
        assert_eq!(cal.working_days_in_month(date(2001, 2, 10)), 28);
    }

    #[test]
    fn weekends_only_saturday() {
        let cal = WeekendsOnly;
        // 2023-09-02 is a Saturday
        assert!(!cal.is_working_day(date(2023, 9, 2)));
        assert!(cal.is_working_day(date(2023, 9, 4)));
    }

    #[test]
    fn adjust_following_and_preceding() {
        let cal = WeekendsOnly;
        let sat = date(2023, 9, 2);
        assert_eq!(
            cal.adjust(sat, BusinessDayConvention::Following).unwrap(),
            date(2023, 9, 4)
        );
        assert_eq!(
            cal.adjust(sat, BusinessDayConvention::Preceding).unwrap(),
            date(2023, 9, 1)
        );
        assert_eq!(cal.adjust(sat, BusinessDayConvention::Unadjusted).unwrap(), sat);
    }

    #[test]
    fn adjust_modified_following_stays_in_month() {
        let cal = WeekendsOnly;
        // 2023-09-30 is a Saturday; Following would land in October
        let adjusted = cal
            .adjust(date(2023, 9, 30), BusinessDayConvention::ModifiedFollowing)
            .unwrap();
        assert_eq!(adjusted, date(2023, 9, 29));
    }

    #[test]
    fn advancing_off_the_range_is_an_error() {
        let cal = WeekendsOnly;
        assert!(cal.advance_working_days(Date::MAX, 5).is_err());
        assert!(cal.advance_working_days(Date::MIN, -5).is_err());
    }

    #[test]
    fn working_days_between() {
        let cal = WeekendsOnly;
        let d1 = date(2023, 9, 4); // Monday
        let d2 = date(2023, 9, 8); // Friday
        assert_eq!(cal.working_days_between(d1, d2), 4);
        assert_eq!(cal.working_days_between(d2, d1), -4);
        assert_eq!(cal.advance_working_days(d1, 4).unwrap(), d2);
        assert_eq!(cal.advance_working_days(d2, -4).unwrap(), d1);
    }

    #[test]
    fn holiday_list_weekends() {
        let cal = WeekendsOnly;
        let from = date(2023, 9, 1);
        let to = date(2023, 9, 10);
        assert!(cal.holiday_list(from, to, false).is_empty());
        assert_eq!(
            cal.holiday_list(from, to, true),
            vec![date(2023, 9, 2), date(2023, 9, 3), date(2023, 9, 9), date(2023, 9, 10)]
        );
    }
}
