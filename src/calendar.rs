//! Month arithmetic shared by the monthly and yearly cadences.

use chrono::{Datelike as _, NaiveDate};

const MONTHS_IN_YEAR: i64 = 12;

/// Stays inside `year`, so the last representable December still has a length.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    (28..=31).rev().find(|&day| first.with_day(day).is_some())
}

pub fn is_last_day_of_month(date: NaiveDate) -> bool {
    days_in_month(date.year(), date.month()) == Some(date.day())
}

/// Moves `anchor` forward by `months` calendar months.
///
/// An anchor on the last day of its month lands on the last day of the
/// target month; any other anchor keeps its day, clamped to the length of
/// the target month. Returns `None` when the result is not representable.
pub fn shift_months(anchor: NaiveDate, months: u64) -> Option<NaiveDate> {
    let months = i64::try_from(months).ok()?;
    let total = i64::from(anchor.year())
        .checked_mul(MONTHS_IN_YEAR)?
        .checked_add(i64::from(anchor.month0()))?
        .checked_add(months)?;

    let year = i32::try_from(total.div_euclid(MONTHS_IN_YEAR)).ok()?;
    let month = total.rem_euclid(MONTHS_IN_YEAR) as u32 + 1;
    let last_day = days_in_month(year, month)?;

    let day = if is_last_day_of_month(anchor) {
        last_day
    } else {
        anchor.day().min(last_day)
    };

    NaiveDate::from_ymd_opt(year, month, day)
}
