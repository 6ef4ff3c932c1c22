use chrono::{Duration, NaiveDateTime, Timelike};

use crate::PressureSample;

/// Cadence of the regularized grid, in seconds.
pub const GRID_STEP_SECS: i64 = 60;

/// Ticks in the trailing moving average. 60 ticks at the 1-minute cadence
/// is exactly the one hour the chart legend promises; change either
/// constant and the other must follow.
pub const TRAILING_AVG_TICKS: usize = 60;

/// One tick of the regularized series. `pressure` is None when no reading
/// fell in the tick and no earlier value existed to carry forward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    pub minute: NaiveDateTime,
    pub pressure: Option<f64>,
}

fn floor_to_minute(ts: NaiveDateTime) -> NaiveDateTime {
    // Log timestamps are second-resolution, so dropping the seconds is
    // enough.
    ts - Duration::seconds(i64::from(ts.second()))
}

/// Average the windowed samples onto a fixed 1-minute grid.
///
/// The grid runs from the minute of the first sample through the minute of
/// the last, inclusive; readings sharing a minute are averaged. Ticks with
/// no reading get None here and are resolved by [`forward_fill`]. Input
/// must be sorted ascending. Empty input gives an empty grid.
pub fn resample_minutely(samples: &[PressureSample]) -> Vec<GridPoint> {
    let (first, last) = match (samples.first(), samples.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Vec::new(),
    };

    let grid_start = floor_to_minute(first.timestamp);
    let grid_end = floor_to_minute(last.timestamp);
    let ticks = ((grid_end - grid_start).num_seconds() / GRID_STEP_SECS) as usize + 1;

    let mut grid = Vec::with_capacity(ticks);
    let mut cursor = 0;
    for i in 0..ticks {
        let minute = grid_start + Duration::seconds(GRID_STEP_SECS * i as i64);
        let tick_end = minute + Duration::seconds(GRID_STEP_SECS);

        // Sorted input: every sample before this tick's end belongs to it.
        let mut sum: u64 = 0;
        let mut count: u32 = 0;
        while cursor < samples.len() && samples[cursor].timestamp < tick_end {
            sum += u64::from(samples[cursor].pressure);
            count += 1;
            cursor += 1;
        }

        let pressure = (count > 0).then(|| sum as f64 / f64::from(count));
        grid.push(GridPoint { minute, pressure });
    }

    grid
}

/// Carry the last known value into empty ticks. Ticks before the first
/// real observation stay empty rather than being back-filled.
pub fn forward_fill(grid: &mut [GridPoint]) {
    let mut last_seen = None;
    for point in grid.iter_mut() {
        match point.pressure {
            Some(value) => last_seen = Some(value),
            None => point.pressure = last_seen,
        }
    }
}

/// Trailing moving average over up to [`TRAILING_AVG_TICKS`] ticks.
///
/// A single tick is enough to produce a value, so the series ramps in at
/// the start instead of opening with a gap. Empty ticks contribute nothing
/// and map to None.
pub fn trailing_average(grid: &[GridPoint]) -> Vec<GridPoint> {
    grid.iter()
        .enumerate()
        .map(|(i, point)| {
            let from = (i + 1).saturating_sub(TRAILING_AVG_TICKS);
            let mut sum = 0.0;
            let mut count = 0usize;
            for p in &grid[from..=i] {
                if let Some(value) = p.pressure {
                    sum += value;
                    count += 1;
                }
            }
            GridPoint {
                minute: point.minute,
                pressure: (count > 0).then(|| sum / count as f64),
            }
        })
        .collect()
}

/// Keep only ticks with start <= minute < end.
pub fn restrict_range(
    grid: Vec<GridPoint>,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Vec<GridPoint> {
    grid.into_iter()
        .filter(|p| p.minute >= start && p.minute < end)
        .collect()
}
