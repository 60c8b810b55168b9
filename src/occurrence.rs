use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single generated date of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Occurrence {
    pub date: NaiveDate,
    /// 1-based position in the generated sequence.
    pub sequence_number: u32,
}
