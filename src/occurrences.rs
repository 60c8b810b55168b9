use crate::{End, Error, Limits, Occurrence, RecurrenceRule, Result};
use std::iter::FusedIterator;

/// Lazily computed occurrences of a rule, in date order.
///
/// Stops at whichever comes first: `limit` occurrences, the rule's end
/// count, or the first date after the rule's end date. Each date is computed
/// from the rule's start, so skipping ahead with [`Iterator::nth`] does not
/// compute the skipped dates.
#[derive(Debug, Clone)]
pub struct Occurrences {
    rule: RecurrenceRule,
    limit: u64,
    /// Sequence number of the last occurrence handed out.
    cursor: u64,
    done: bool,
}

impl Occurrences {
    fn stop(&mut self, reason: &'static str) -> Option<Occurrence> {
        tracing::debug!(rule = %self.rule, yielded = self.cursor, reason, "occurrences exhausted");
        self.done = true;
        None
    }

    fn remaining(&self) -> u64 {
        if self.done {
            return 0;
        }

        let last = match self.rule.end() {
            End::Count { end_count } => self.limit.min(u64::from(end_count)),
            _ => self.limit,
        };
        last.saturating_sub(self.cursor)
    }
}

impl Iterator for Occurrences {
    type Item = Occurrence;

    fn next(&mut self) -> Option<Occurrence> {
        self.nth(0)
    }

    fn nth(&mut self, n: usize) -> Option<Occurrence> {
        if self.done {
            return None;
        }

        let sequence_number = self.cursor.saturating_add(n as u64).saturating_add(1);

        if sequence_number > self.limit {
            return self.stop("limit");
        }

        if let End::Count { end_count } = self.rule.end() {
            if sequence_number > u64::from(end_count) {
                return self.stop("count");
            }
        }

        let Ok(sequence_number) = u32::try_from(sequence_number) else {
            return self.stop("sequence number overflow");
        };

        let date = match self.rule.nth_date(sequence_number) {
            Ok(date) => date,
            Err(error) => {
                tracing::warn!(rule = %self.rule, %error, "occurrences cut short by calendar range");
                return self.stop("out of range");
            }
        };

        if let End::Until { end_date } = self.rule.end() {
            if date > end_date {
                return self.stop("until");
            }
        }

        self.cursor = u64::from(sequence_number);
        Some(Occurrence {
            date,
            sequence_number,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // the end date and the calendar range can both cut the sequence short
        (0, usize::try_from(self.remaining()).ok())
    }
}

impl FusedIterator for Occurrences {}

impl RecurrenceRule {
    /// Occurrences after the start date, at most `limit` of them.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroLimit`] when `limit` is 0.
    pub fn occurrences(&self, limit: usize) -> Result<Occurrences> {
        if limit == 0 {
            return Err(Error::ZeroLimit);
        }

        Ok(Occurrences {
            rule: *self,
            limit: limit as u64,
            cursor: 0,
            done: false,
        })
    }

    /// Every occurrence to turn into a task instance, capped by `limits.unbounded`.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroLimit`] when the configured cap is 0.
    pub fn materialize(&self, limits: &Limits) -> Result<Vec<Occurrence>> {
        generate_sequence(self, limits.unbounded)
    }

    /// The next few occurrences, capped by `limits.preview`.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroLimit`] when the configured cap is 0.
    pub fn preview(&self, limits: &Limits) -> Result<Vec<Occurrence>> {
        generate_sequence(self, limits.preview)
    }
}

/// Collects the occurrences of `rule`, at most `max_results` of them.
///
/// # Errors
///
/// [`Error::ZeroLimit`] when `max_results` is 0.
pub fn generate_sequence(rule: &RecurrenceRule, max_results: usize) -> Result<Vec<Occurrence>> {
    Ok(rule.occurrences(max_results)?.collect())
}
