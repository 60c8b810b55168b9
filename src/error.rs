use crate::validate::Violation;
use chrono::NaiveDate;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid recurrence type: '{0}'")]
    InvalidFrequency(String),

    #[error("invalid recurrence rule: {}", join(.0))]
    InvalidRule(Vec<Violation>),

    /// The occurrence falls outside the dates chrono can represent.
    #[error("occurrence {steps} steps after {start} is out of range")]
    OutOfRange { start: NaiveDate, steps: u64 },

    #[error("max results must be at least 1")]
    ZeroLimit,
}

pub type Result<T> = std::result::Result<T, Error>;

fn join(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
