use crate::validate::{RawRule, Violation};
use crate::{compute_next_date, Error, Frequency, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// When a rule stops producing occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "end_type", rename_all = "lowercase")]
pub enum End {
    #[default]
    Never,
    /// Stop after this many occurrences.
    Count { end_count: u32 },
    /// Stop after the last occurrence on or before this date.
    #[serde(rename = "date")]
    Until { end_date: NaiveDate },
}

impl End {
    pub fn count(count: u32) -> Self {
        End::Count { end_count: count }
    }

    pub fn until(date: NaiveDate) -> Self {
        End::Until { end_date: date }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            End::Never => "never",
            End::Count { .. } => "count",
            End::Until { .. } => "date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurrenceRule {
    start: NaiveDate,
    frequency: Frequency,
    interval: u32,
    end: End,
}

#[derive(Debug, Clone)]
pub struct Options {
    pub frequency: Frequency,
    pub start: Option<NaiveDate>,
    pub interval: Option<u32>,
    pub end: End,
}

impl Options {
    pub fn new(frequency: Frequency) -> Self {
        Options {
            frequency,
            start: None,
            interval: None,
            end: End::Never,
        }
    }
}

impl RecurrenceRule {
    /// Builds a rule, defaulting to an interval of 1 starting today.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRule`] with every broken invariant when the interval
    /// or the end count is zero.
    pub fn new(options: Options) -> Result<Self> {
        let interval = options.interval.unwrap_or(1);

        let mut violations = vec![];
        if interval == 0 {
            violations.push(Violation::IntervalTooSmall);
        }
        if let End::Count { end_count: 0 } = options.end {
            violations.push(Violation::CountTooSmall);
        }
        if !violations.is_empty() {
            return Err(Error::InvalidRule(violations));
        }

        Ok(RecurrenceRule {
            start: options
                .start
                .unwrap_or_else(|| chrono::Local::now().date_naive()),
            frequency: options.frequency,
            interval,
            end: options.end,
        })
    }

    /// Builds a rule from its persisted form, anchored at `start`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRule`] carrying everything [`crate::validate_rule`]
    /// reports for `raw`.
    pub fn from_raw(start: NaiveDate, raw: &RawRule) -> Result<Self> {
        let parts = raw.parse().map_err(Error::InvalidRule)?;

        Ok(RecurrenceRule {
            start,
            frequency: parts.frequency,
            interval: parts.interval,
            end: parts.end,
        })
    }

    pub fn to_raw(&self) -> RawRule {
        let (end_count, end_date) = match self.end {
            End::Never => (None, None),
            End::Count { end_count } => (Some(i64::from(end_count)), None),
            End::Until { end_date } => (None, Some(end_date.to_string())),
        };

        RawRule {
            recurrence_type: Some(self.frequency.to_string()),
            interval: Some(i64::from(self.interval)),
            end_type: Some(self.end.kind().to_owned()),
            end_count,
            end_date,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    pub fn end(&self) -> End {
        self.end
    }

    /// Date of the `index`th occurrence, ignoring the end policy.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] when the date cannot be represented.
    pub fn nth_date(&self, index: u32) -> Result<NaiveDate> {
        compute_next_date(self.start, self.frequency, self.interval, index)
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.frequency.unit();
        match self.interval {
            1 => write!(f, "every {}", unit)?,
            n => write!(f, "every {} {}s", n, unit)?,
        }

        match self.end {
            End::Never => Ok(()),
            End::Count { end_count: 1 } => write!(f, ", once"),
            End::Count { end_count } => write!(f, ", {} times", end_count),
            End::Until { end_date } => write!(f, ", until {}", end_date),
        }
    }
}
