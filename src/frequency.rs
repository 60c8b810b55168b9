use crate::{daily, monthly, weekly, yearly, Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    pub const ALL: [Frequency; 4] = [
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::Monthly,
        Frequency::Yearly,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
        }
    }

    /// Singular unit, as in "every 2 weeks".
    pub(crate) fn unit(self) -> &'static str {
        match self {
            Frequency::Daily => "day",
            Frequency::Weekly => "week",
            Frequency::Monthly => "month",
            Frequency::Yearly => "year",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Frequency::ALL
            .into_iter()
            .find(|frequency| frequency.as_str() == s)
            .ok_or_else(|| Error::InvalidFrequency(s.to_owned()))
    }
}

/// Computes the date of the `index`th occurrence after `start`.
///
/// Every occurrence is derived from `start` directly rather than from the
/// previous occurrence, so any index can be asked for on its own and the
/// same arguments always give the same date. Index 0 is `start` itself.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] when the occurrence cannot be represented
/// as a calendar date.
pub fn compute_next_date(
    start: NaiveDate,
    frequency: Frequency,
    interval: u32,
    index: u32,
) -> Result<NaiveDate> {
    let date = match frequency {
        Frequency::Daily => daily::nth(start, interval, index),
        Frequency::Weekly => weekly::nth(start, interval, index),
        Frequency::Monthly => monthly::nth(start, interval, index),
        Frequency::Yearly => yearly::nth(start, interval, index),
    }?;

    tracing::trace!(%start, %frequency, interval, index, %date, "computed occurrence");
    Ok(date)
}
