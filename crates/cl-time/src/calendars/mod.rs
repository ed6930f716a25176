//! Concrete country calendars.

/// Romanian public holidays and working-day counts.
pub mod romania;
