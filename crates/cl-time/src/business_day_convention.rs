//! Rules for moving a date off a non-working day.

use serde::{Deserialize, Serialize};

/// How to adjust a date that falls on a weekend or holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BusinessDayConvention {
    /// Keep the date as it is.
    #[default]
    Unadjusted,
    /// Move to the first working day after the date.
    Following,
    /// Like `Following`, but fall back to `Preceding` if that would leave the
    /// month (a deadline on the last day of May stays in May).
    ModifiedFollowing,
    /// Move to the last working day before the date.
    Preceding,
    /// Like `Preceding`, but fall back to `Following` if that would leave the
    /// month.
    ModifiedPreceding,
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BusinessDayConvention::Unadjusted => "Unadjusted",
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
        };
        write!(f, "{s}")
    }
}
