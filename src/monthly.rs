use crate::{calendar, Error, Result};
use chrono::NaiveDate;

/// Date of the `index`th occurrence of a rule repeating every `interval` months.
///
/// Month-end starts stay on the month end, other days clamp to the target
/// month's length.
pub fn nth(start: NaiveDate, interval: u32, index: u32) -> Result<NaiveDate> {
    let steps = u64::from(interval) * u64::from(index);

    calendar::shift_months(start, steps).ok_or(Error::OutOfRange { start, steps })
}
