use crate::{calendar, Error, Result};
use chrono::NaiveDate;

const MONTHS_IN_YEAR: u64 = 12;

/// Date of the `index`th occurrence of a rule repeating every `interval` years.
///
/// The month never changes; the day follows the same month-end rules as
/// the monthly cadence, which is what moves Feb 29 to Feb 28 in common years.
pub fn nth(start: NaiveDate, interval: u32, index: u32) -> Result<NaiveDate> {
    let steps = u64::from(interval) * u64::from(index);

    steps
        .checked_mul(MONTHS_IN_YEAR)
        .and_then(|months| calendar::shift_months(start, months))
        .ok_or(Error::OutOfRange { start, steps })
}
