//! Calendar-date recurrence: the dates a daily, weekly, monthly or yearly
//! rule lands on, when it stops, and whether its parameters make sense.
//!
//! ```
//! use chrono::NaiveDate;
//! use recurrence::{generate_sequence, rule::Options, End, Frequency, RecurrenceRule};
//!
//! let rule = RecurrenceRule::new(Options {
//!     start: NaiveDate::from_ymd_opt(2024, 1, 31),
//!     end: End::count(3),
//!     ..Options::new(Frequency::Monthly)
//! })?;
//!
//! let dates: Vec<_> = generate_sequence(&rule, 10)?
//!     .into_iter()
//!     .map(|occurrence| occurrence.date.to_string())
//!     .collect();
//!
//! assert_eq!(dates, ["2024-02-29", "2024-03-31", "2024-04-30"]);
//! # Ok::<(), recurrence::Error>(())
//! ```

mod calendar;
mod daily;
mod error;
mod frequency;
mod limits;
mod monthly;
mod occurrence;
mod occurrences;
mod policy;
pub mod rule;
pub mod validate;
mod weekly;
mod yearly;

#[cfg(test)]
mod test_helpers;

pub use error::{Error, Result};
pub use frequency::{compute_next_date, Frequency};
pub use limits::Limits;
pub use occurrence::Occurrence;
pub use occurrences::{generate_sequence, Occurrences};
pub use policy::should_continue;
pub use rule::{End, RecurrenceRule};
pub use validate::{validate_rule, RawRule, Violation};
