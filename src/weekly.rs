use crate::{Error, Result};
use chrono::{Days, NaiveDate};

const DAYS_IN_WEEK: u64 = 7;

/// Date of the `index`th occurrence of a rule repeating every `interval` weeks.
pub fn nth(start: NaiveDate, interval: u32, index: u32) -> Result<NaiveDate> {
    let steps = u64::from(interval) * u64::from(index);

    steps
        .checked_mul(DAYS_IN_WEEK)
        .and_then(|days| start.checked_add_days(Days::new(days)))
        .ok_or(Error::OutOfRange { start, steps })
}
