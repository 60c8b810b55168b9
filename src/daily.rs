use crate::{Error, Result};
use chrono::{Days, NaiveDate};

/// Date of the `index`th occurrence of a rule repeating every `interval` days.
pub fn nth(start: NaiveDate, interval: u32, index: u32) -> Result<NaiveDate> {
    let steps = u64::from(interval) * u64::from(index);

    start
        .checked_add_days(Days::new(steps))
        .ok_or(Error::OutOfRange { start, steps })
}
