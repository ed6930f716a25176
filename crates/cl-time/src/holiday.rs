//! Tagged holiday entries.

use serde::{Deserialize, Serialize};

use crate::date::Date;

/// Why a date is a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HolidayCategory {
    /// Same month and day every year (once introduced).
    Fixed,
    /// Tied to Orthodox Easter (Easter itself, Pentecost).
    OrthodoxEasterVariable,
    /// Tied to Catholic (Western) Easter.
    CatholicEasterVariable,
}

/// One holiday on one date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HolidayEntry {
    /// The calendar date.
    pub date: Date,
    /// Fixed or Easter-linked.
    pub category: HolidayCategory,
    /// English name of the holiday.
    pub name: &'static str,
}

impl HolidayEntry {
    pub(crate) fn new(date: Date, category: HolidayCategory, name: &'static str) -> Self {
        Self {
            date,
            category,
            name,
        }
    }
}
