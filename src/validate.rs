//! Checking caller-supplied rule parameters before they are stored.

use crate::{End, Frequency};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A recurrence rule as it is persisted or received from a form, before
/// any of its fields have been checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// One reason a rule was rejected. The `Display` form is meant for end users.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("recurrence type is required")]
    MissingFrequency,
    #[error("unknown recurrence type '{0}'")]
    UnknownFrequency(String),
    #[error("interval must be at least 1")]
    IntervalTooSmall,
    #[error("interval {0} is too large")]
    IntervalTooLarge(i64),
    #[error("end type is required")]
    MissingEnd,
    #[error("unknown end type '{0}'")]
    UnknownEnd(String),
    #[error("end count must be at least 1")]
    CountTooSmall,
    #[error("end count {0} is too large")]
    CountTooLarge(i64),
    #[error("end date is required")]
    MissingEndDate,
    #[error("end date '{0}' is not a YYYY-MM-DD date")]
    MalformedEndDate(String),
}

pub(crate) struct RuleParts {
    pub frequency: Frequency,
    pub interval: u32,
    pub end: End,
}

/// Checks every field of `rule` and returns all the problems found.
///
/// An empty list means the rule can be stored and turned into a
/// [`crate::RecurrenceRule`].
pub fn validate_rule(rule: &RawRule) -> Vec<Violation> {
    match rule.parse() {
        Ok(_) => vec![],
        Err(violations) => violations,
    }
}

impl RawRule {
    pub(crate) fn parse(&self) -> Result<RuleParts, Vec<Violation>> {
        let mut violations = vec![];

        let frequency = match present(&self.recurrence_type) {
            None => {
                violations.push(Violation::MissingFrequency);
                None
            }
            Some(s) => match s.parse::<Frequency>() {
                Ok(frequency) => Some(frequency),
                Err(_) => {
                    violations.push(Violation::UnknownFrequency(s.to_owned()));
                    None
                }
            },
        };

        let interval = match self.interval {
            Some(n) if n >= 1 => match u32::try_from(n) {
                Ok(n) => Some(n),
                Err(_) => {
                    violations.push(Violation::IntervalTooLarge(n));
                    None
                }
            },
            _ => {
                violations.push(Violation::IntervalTooSmall);
                None
            }
        };

        let end = match present(&self.end_type) {
            None => {
                violations.push(Violation::MissingEnd);
                None
            }
            Some("never") => Some(End::Never),
            Some("count") => self.parse_end_count(&mut violations).map(End::count),
            Some("date") => self.parse_end_date(&mut violations).map(End::until),
            Some(other) => {
                violations.push(Violation::UnknownEnd(other.to_owned()));
                None
            }
        };

        match (frequency, interval, end) {
            (Some(frequency), Some(interval), Some(end)) if violations.is_empty() => {
                Ok(RuleParts {
                    frequency,
                    interval,
                    end,
                })
            }
            _ => Err(violations),
        }
    }

    fn parse_end_count(&self, violations: &mut Vec<Violation>) -> Option<u32> {
        match self.end_count {
            Some(n) if n >= 1 => match u32::try_from(n) {
                Ok(n) => Some(n),
                Err(_) => {
                    violations.push(Violation::CountTooLarge(n));
                    None
                }
            },
            _ => {
                violations.push(Violation::CountTooSmall);
                None
            }
        }
    }

    fn parse_end_date(&self, violations: &mut Vec<Violation>) -> Option<NaiveDate> {
        let Some(s) = present(&self.end_date) else {
            violations.push(Violation::MissingEndDate);
            return None;
        };

        match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                violations.push(Violation::MalformedEndDate(s.to_owned()));
                None
            }
        }
    }
}

/// Blank strings count as missing. Anything else is kept as given, padding included.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    fn raw(recurrence_type: &str, interval: i64, end_type: &str) -> RawRule {
        RawRule {
            recurrence_type: Some(recurrence_type.to_owned()),
            interval: Some(interval),
            end_type: Some(end_type.to_owned()),
            ..RawRule::default()
        }
    }

    #[test]
    fn valid_rule() {
        assert!(validate_rule(&raw("weekly", 1, "never")).is_empty());
    }

    #[test]
    fn invalid_type() {
        assert_eq!(
            validate_rule(&raw("invalid", 1, "never")),
            vec![Violation::UnknownFrequency("invalid".to_owned())]
        );
    }

    #[test]
    fn zero_interval() {
        assert_eq!(
            validate_rule(&raw("weekly", 0, "never")),
            vec![Violation::IntervalTooSmall]
        );
    }

    #[test]
    fn zero_count() {
        let rule = RawRule {
            end_count: Some(0),
            ..raw("weekly", 1, "count")
        };
        assert_eq!(validate_rule(&rule), vec![Violation::CountTooSmall]);
    }

    #[test]
    fn missing_count() {
        assert_eq!(
            validate_rule(&raw("weekly", 1, "count")),
            vec![Violation::CountTooSmall]
        );
    }

    #[test]
    fn missing_end_date() {
        let rule = RawRule {
            end_date: Some(String::new()),
            ..raw("monthly", 1, "date")
        };
        assert_eq!(validate_rule(&rule), vec![Violation::MissingEndDate]);
    }

    #[test]
    fn malformed_end_date() {
        let rule = RawRule {
            end_date: Some("2024-02-30".to_owned()),
            ..raw("monthly", 1, "date")
        };
        assert_eq!(
            validate_rule(&rule),
            vec![Violation::MalformedEndDate("2024-02-30".to_owned())]
        );
    }

    #[test]
    fn too_large() {
        let rule = RawRule {
            end_count: Some(i64::from(u32::MAX) + 1),
            ..raw("daily", i64::MAX, "count")
        };
        assert_eq!(
            validate_rule(&rule),
            vec![
                Violation::IntervalTooLarge(i64::MAX),
                Violation::CountTooLarge(i64::from(u32::MAX) + 1),
            ]
        );
    }

    #[test]
    fn reports_everything_at_once() {
        assert_eq!(
            validate_rule(&RawRule::default()),
            vec![
                Violation::MissingFrequency,
                Violation::IntervalTooSmall,
                Violation::MissingEnd,
            ]
        );

        let rule = RawRule {
            recurrence_type: Some("hourly".to_owned()),
            interval: Some(-3),
            end_type: Some("sometime".to_owned()),
            ..RawRule::default()
        };
        assert_eq!(
            validate_rule(&rule),
            vec![
                Violation::UnknownFrequency("hourly".to_owned()),
                Violation::IntervalTooSmall,
                Violation::UnknownEnd("sometime".to_owned()),
            ]
        );
    }

    #[test]
    fn blank_strings_are_missing() {
        let rule = raw("  ", 1, "");
        assert_eq!(
            validate_rule(&rule),
            vec![Violation::MissingFrequency, Violation::MissingEnd]
        );
    }

    #[test]
    fn padded_strings_are_not_trimmed() {
        let rule = RawRule {
            end_date: Some(" 2024-01-05 ".to_owned()),
            ..raw(" weekly ", 1, "date")
        };
        assert_eq!(
            validate_rule(&rule),
            vec![
                Violation::UnknownFrequency(" weekly ".to_owned()),
                Violation::MalformedEndDate(" 2024-01-05 ".to_owned()),
            ]
        );

        assert_eq!(
            validate_rule(&raw("weekly", 1, "never\t")),
            vec![Violation::UnknownEnd("never\t".to_owned())]
        );
    }

    #[test]
    fn messages() {
        assert_eq!(
            Violation::UnknownFrequency("hourly".to_owned()).to_string(),
            "unknown recurrence type 'hourly'"
        );
        assert_eq!(Violation::CountTooSmall.to_string(), "end count must be at least 1");
    }

    #[test]
    fn parses_until_rule() {
        let rule: RawRule = serde_json::from_str(
            r#"{
                "recurrence_type": "daily",
                "interval": 2,
                "end_type": "date",
                "end_date": "2024-01-05"
            }"#,
        )
        .unwrap();

        let parts = rule.parse().unwrap();
        assert_eq!(parts.frequency, Frequency::Daily);
        assert_eq!(parts.interval, 2);
        assert_eq!(parts.end, End::until(ymd(2024, 1, 5)));
    }

    #[test]
    fn ignores_unused_end_fields() {
        let rule = RawRule {
            end_count: Some(0),
            end_date: Some("garbage".to_owned()),
            ..raw("yearly", 1, "never")
        };
        assert!(validate_rule(&rule).is_empty());
    }
}
