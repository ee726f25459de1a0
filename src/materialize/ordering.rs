//! Interval comparison and ordering logic.

use std::cmp::Ordering;

use chrono::TimeZone;

use super::MaterializedInterval;

/// Compares intervals by start instant only.
pub fn compare_by_start<Tz: TimeZone>(
    a: &MaterializedInterval<Tz>,
    b: &MaterializedInterval<Tz>,
) -> Ordering {
    a.start().cmp(b.start())
}

/// Sorts ascending by start; equal starts keep declaration order.
pub fn sort_by_start<Tz: TimeZone>(intervals: &mut [MaterializedInterval<Tz>]) {
    // `sort_by` is stable.
    intervals.sort_by(compare_by_start);
}

pub fn is_sorted_by_start<Tz: TimeZone>(intervals: &[MaterializedInterval<Tz>]) -> bool {
    intervals
        .windows(2)
        .all(|pair| compare_by_start(&pair[0], &pair[1]) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn at(day: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, day, h, 0, 0).unwrap()
    }

    fn iv(day: u32, h: u32, label: &str) -> MaterializedInterval<Utc> {
        MaterializedInterval::new(at(day, h), at(day, h + 1), label)
    }

    #[test]
    fn compare_orders_by_start() {
        assert_eq!(compare_by_start(&iv(12, 8, "a"), &iv(12, 9, "b")), Ordering::Less);
        assert_eq!(compare_by_start(&iv(13, 8, "a"), &iv(12, 9, "b")), Ordering::Greater);
        assert_eq!(compare_by_start(&iv(12, 8, "a"), &iv(12, 8, "b")), Ordering::Equal);
    }

    #[test]
    fn sort_is_stable_for_equal_starts() {
        let mut intervals = vec![
            iv(13, 6, "tue"),
            iv(12, 8, "first"),
            iv(12, 6, "mon"),
            iv(12, 8, "second"),
            iv(12, 8, "third"),
        ];
        sort_by_start(&mut intervals);

        let labels: Vec<_> = intervals.iter().map(|i| i.label()).collect();
        assert_eq!(labels, vec!["mon", "first", "second", "third", "tue"]);
        assert!(is_sorted_by_start(&intervals));
    }

    #[test]
    fn detects_unsorted_sequences() {
        assert!(is_sorted_by_start::<Utc>(&[]));
        assert!(!is_sorted_by_start(&[iv(12, 9, "b"), iv(12, 8, "a")]));
    }
}
