//! # cl-time
//!
//! Date, weekday, and calendar types, Easter computations, and the Romanian
//! public-holiday calendar with its working-days-in-month count.
//!
//! ```
//! use cl_time::{holidays_for_year, working_days_in_month, Date};
//!
//! let december = Date::from_ymd(2001, 12, 1).unwrap();
//! assert_eq!(working_days_in_month(december, false), 19);
//! assert!(holidays_for_year(december, false).contains(&Date::from_ymd(2001, 12, 25).unwrap()));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Date adjustment conventions.
pub mod business_day_convention;

/// Calendar trait and the trivial calendars.
pub mod calendar;

/// Concrete calendar implementations.
pub mod calendars;

/// `Date` type.
pub mod date;

/// Western and Orthodox Easter dates.
pub mod easter;

/// Tagged holiday entries.
pub mod holiday;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar::{Calendar, NullCalendar, WeekendsOnly};
pub use calendars::romania::{
    holiday_entries, holidays_for_year, working_days_in_current_month, working_days_in_month,
    CalendarOptions, Romania,
};
pub use date::Date;
pub use easter::{orthodox_easter_sunday, orthodox_pentecost_sunday, western_easter_sunday};
pub use holiday::{HolidayCategory, HolidayEntry};
pub use weekday::Weekday;
