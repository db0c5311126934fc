use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::state::{AppState, NewsRecord, SortOrder};

/// Epoch seconds assigned to records whose timestamp cannot be parsed.
/// Unparsable dates sort as older than everything else.
pub const VERY_OLD: i64 = i64::MIN;

/// What: Parse a record's publication timestamp into epoch seconds.
///
/// Inputs:
/// - `record`: The record whose `published_at` string is examined
///
/// Output:
/// - Epoch seconds on success; [`VERY_OLD`] when the string matches none of
///   the formats the service is known to emit.
///
/// The service mixes RFC 3339, RFC 2822 (raw RSS pubDate), and two naive
/// local forms, so each is tried in turn.
#[must_use]
pub fn published_ts(record: &NewsRecord) -> i64 {
    let raw = record.published_at.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.timestamp();
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return dt.timestamp();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return dt.and_utc().timestamp();
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d
            .and_hms_opt(0, 0, 0)
            .map_or(VERY_OLD, |dt| dt.and_utc().timestamp());
    }
    VERY_OLD
}

/// What: Order two records by publication date in the given direction.
///
/// Inputs:
/// - `order`: Desired direction
/// - `a`, `b`: Records to compare
///
/// Output:
/// - `Ordering` suitable for a stable sort; equal timestamps compare equal
///   so arrival order decides ties.
#[must_use]
pub fn compare_by_date(order: SortOrder, a: &NewsRecord, b: &NewsRecord) -> Ordering {
    let (ta, tb) = (published_ts(a), published_ts(b));
    match order {
        SortOrder::DateDesc => tb.cmp(&ta),
        SortOrder::DateAsc => ta.cmp(&tb),
    }
}

/// What: Flip the ordering direction of the results pane.
pub fn toggle_sort_order(app: &mut AppState) {
    app.sort_order = app.sort_order.flipped();
}

#[cfg(test)]
mod tests {
    use super::{VERY_OLD, compare_by_date, published_ts, toggle_sort_order};
    use crate::state::{AppState, NewsRecord, SortOrder};
    use std::cmp::Ordering;

    fn record(published_at: &str) -> NewsRecord {
        NewsRecord {
            title: "t".into(),
            link: "https://news.example/t".into(),
            source: "Wire".into(),
            published_at: published_at.into(),
            sentiment: None,
        }
    }

    #[test]
    /// What: Every known timestamp format parses to the same instant
    ///
    /// - Input: RFC 3339, RFC 2822, naive datetime, and bare date strings
    /// - Output: Matching epoch seconds; bare date reads as midnight UTC
    fn sort_published_ts_accepts_known_formats() {
        assert_eq!(
            published_ts(&record("2026-08-20T10:30:00+00:00")),
            published_ts(&record("Thu, 20 Aug 2026 10:30:00 +0000"))
        );
        assert_eq!(
            published_ts(&record("2026-08-20 10:30:00")),
            published_ts(&record("2026-08-20T10:30:00+00:00"))
        );
        let midnight = published_ts(&record("2026-08-20"));
        let later = published_ts(&record("2026-08-20 00:00:01"));
        assert_eq!(later - midnight, 1);
    }

    #[test]
    /// What: Unparsable timestamps take the very-old sentinel
    ///
    /// - Input: Garbage and empty strings
    /// - Output: Both map to the sentinel and sort before real dates
    fn sort_published_ts_sentinel_for_garbage() {
        assert_eq!(published_ts(&record("not a date")), VERY_OLD);
        assert_eq!(published_ts(&record("")), VERY_OLD);
        let good = record("2026-08-20");
        let bad = record("???");
        assert_eq!(
            compare_by_date(SortOrder::DateAsc, &bad, &good),
            Ordering::Less
        );
        assert_eq!(
            compare_by_date(SortOrder::DateDesc, &bad, &good),
            Ordering::Greater
        );
    }

    #[test]
    /// What: Direction flips the comparison; ties compare equal
    ///
    /// - Input: Two records a day apart and two with equal timestamps
    /// - Output: Desc favors the newer, asc the older, ties are Equal
    fn sort_compare_directions_and_ties() {
        let older = record("2026-08-19 08:00:00");
        let newer = record("2026-08-20 08:00:00");
        assert_eq!(
            compare_by_date(SortOrder::DateDesc, &newer, &older),
            Ordering::Less
        );
        assert_eq!(
            compare_by_date(SortOrder::DateAsc, &newer, &older),
            Ordering::Greater
        );
        assert_eq!(
            compare_by_date(SortOrder::DateDesc, &older, &older),
            Ordering::Equal
        );
        let mut app = AppState::default();
        assert_eq!(app.sort_order, SortOrder::DateDesc);
        toggle_sort_order(&mut app);
        assert_eq!(app.sort_order, SortOrder::DateAsc);
    }
}
