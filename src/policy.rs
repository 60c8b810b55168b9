use crate::End;
use chrono::NaiveDate;

/// Whether a caller materializing one occurrence at a time should create
/// the next one.
///
/// `current_count` is how many occurrences already exist and `next_date` is
/// the date the next one would land on. An `Until` end without a next date
/// cannot be decided and yields `false`.
pub fn should_continue(current_count: u32, end: &End, next_date: Option<NaiveDate>) -> bool {
    match *end {
        End::Never => true,
        End::Count { end_count } => current_count < end_count,
        End::Until { end_date } => next_date.is_some_and(|next| next <= end_date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn never() {
        assert!(should_continue(0, &End::Never, None));
        assert!(should_continue(u32::MAX, &End::Never, Some(ymd(9999, 1, 1))));
    }

    #[test]
    fn count() {
        let end = End::count(3);
        assert!(should_continue(0, &end, None));
        assert!(should_continue(2, &end, None));
        assert!(!should_continue(3, &end, None));
        assert!(!should_continue(4, &end, None));
    }

    #[test]
    fn zero_count_never_continues() {
        assert!(!should_continue(0, &End::count(0), None));
    }

    #[test]
    fn until_includes_end_date() {
        let end = End::until(ymd(2024, 1, 5));
        assert!(should_continue(10, &end, Some(ymd(2024, 1, 4))));
        assert!(should_continue(10, &end, Some(ymd(2024, 1, 5))));
        assert!(!should_continue(0, &end, Some(ymd(2024, 1, 6))));
    }

    #[test]
    fn until_without_next_date() {
        assert!(!should_continue(0, &End::until(ymd(2024, 1, 5)), None));
    }
}
