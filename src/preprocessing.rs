use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::PressureSample;

/// Boundaries of the evaluation window: [midnight − days, midnight), where
/// midnight is the start of the calendar day `now` falls on. `now` is an
/// explicit argument so the boundary logic stays deterministic under test;
/// only `main` passes the real clock.
pub fn window_bounds(days: u32, now: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    let end = now.date().and_time(NaiveTime::MIN);
    let start = end - Duration::days(i64::from(days));
    (start, end)
}

/// Keep samples with start <= timestamp < end and sort them ascending by
/// timestamp. The sort is stable, so readings sharing a timestamp keep
/// their file order.
pub fn select_window(
    mut samples: Vec<PressureSample>,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Vec<PressureSample> {
    samples.retain(|s| s.timestamp >= start && s.timestamp < end);
    samples.sort_by_key(|s| s.timestamp);
    samples
}
