//! Selection of the "current" position in an hourly time axis
//!
//! Both rules start from the first timestamp strictly after `now`. The hourly
//! panel starts its window there; the pollen panel wants the most recently
//! elapsed hour instead and steps back one, except when no future timestamp
//! exists at all.

use chrono::{DateTime, FixedOffset, Utc};

/// Number of entries shown in the hourly panel
pub const HOURLY_WINDOW: usize = 24;

/// Index of the first timestamp strictly after `now`
///
/// Linear scan; `times` is assumed to be ascending.
#[must_use]
pub fn first_upcoming(times: &[DateTime<FixedOffset>], now: DateTime<Utc>) -> Option<usize> {
    times.iter().position(|t| *t > now)
}

/// Start of the hourly window
///
/// The first upcoming hour, or the last entry when every hour has elapsed.
/// Empty series yield 0.
#[must_use]
pub fn hourly_window_start(times: &[DateTime<FixedOffset>], now: DateTime<Utc>) -> usize {
    first_upcoming(times, now).unwrap_or_else(|| times.len().saturating_sub(1))
}

/// Index of the most recently elapsed reading
///
/// Steps back from the first upcoming hour. When every hour has elapsed the
/// last entry is used as-is, without stepping back. Floors at 0.
#[must_use]
pub fn latest_elapsed_index(times: &[DateTime<FixedOffset>], now: DateTime<Utc>) -> usize {
    match first_upcoming(times, now) {
        Some(idx) => idx.saturating_sub(1),
        None => times.len().saturating_sub(1),
    }
}

/// Index range of the hourly window, clipped to the series length
#[must_use]
pub fn hourly_window(
    times: &[DateTime<FixedOffset>],
    now: DateTime<Utc>,
) -> std::ops::Range<usize> {
    let start = hourly_window_start(times, now).min(times.len());
    let end = start.saturating_add(HOURLY_WINDOW).min(times.len());
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 12, 30, 0)
            .single()
            .expect("valid timestamp")
    }

    fn hours_from_now(offsets: &[i64]) -> Vec<DateTime<FixedOffset>> {
        let offset = FixedOffset::east_opt(0).expect("valid offset");
        offsets
            .iter()
            .map(|h| (now() + Duration::hours(*h)).with_timezone(&offset))
            .collect()
    }

    #[test]
    fn mixed_series_selects_first_future_and_previous() {
        let times = hours_from_now(&[-2, -1, 1, 2]);
        assert_eq!(hourly_window_start(&times, now()), 2);
        assert_eq!(latest_elapsed_index(&times, now()), 1);
    }

    #[test]
    fn all_past_clamps_without_step_back() {
        let times = hours_from_now(&[-4, -3, -2, -1]);
        assert_eq!(hourly_window_start(&times, now()), 3);
        assert_eq!(latest_elapsed_index(&times, now()), 3);
    }

    #[test]
    fn all_future_floors_at_zero() {
        let times = hours_from_now(&[1, 2, 3]);
        assert_eq!(hourly_window_start(&times, now()), 0);
        assert_eq!(latest_elapsed_index(&times, now()), 0);
    }

    #[test]
    fn timestamp_equal_to_now_is_not_upcoming() {
        let times = hours_from_now(&[-1, 0, 1]);
        assert_eq!(first_upcoming(&times, now()), Some(2));
    }

    #[test]
    fn empty_series() {
        assert_eq!(first_upcoming(&[], now()), None);
        assert_eq!(hourly_window_start(&[], now()), 0);
        assert_eq!(latest_elapsed_index(&[], now()), 0);
        assert!(hourly_window(&[], now()).is_empty());
    }

    #[test]
    fn offsets_do_not_change_the_instant() {
        let tokyo = FixedOffset::east_opt(9 * 3600).expect("valid offset");
        let times: Vec<_> = hours_from_now(&[-1, 1])
            .into_iter()
            .map(|t| t.with_timezone(&tokyo))
            .collect();
        assert_eq!(first_upcoming(&times, now()), Some(1));
    }

    #[test]
    fn window_is_capped_at_24() {
        let offsets: Vec<i64> = (-5..60).collect();
        let times = hours_from_now(&offsets);
        let window = hourly_window(&times, now());
        assert_eq!(window.start, 6);
        assert_eq!(window.len(), HOURLY_WINDOW);
    }

    #[test]
    fn window_is_shorter_near_the_end() {
        let times = hours_from_now(&[-2, -1, 1, 2, 3]);
        assert_eq!(hourly_window(&times, now()), 2..5);

        let past = hours_from_now(&[-2, -1]);
        assert_eq!(hourly_window(&past, now()), 1..2);
    }
}
