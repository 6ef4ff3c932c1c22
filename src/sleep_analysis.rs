use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::PressureSample;

/// Pressure above this reading means somebody is lying on the sensor.
/// Calibrated against the ESP32 ADC output for this bed; strictly greater
/// than, so a reading of exactly 2250 counts as out of bed.
pub const OCCUPANCY_THRESHOLD: u32 = 2250;

pub fn is_occupied(pressure: u32) -> bool {
    pressure > OCCUPANCY_THRESHOLD
}

/// A windowed sample with its occupancy contribution.
#[derive(Debug, Clone, Copy)]
pub struct OccupancySample {
    pub sample: PressureSample,
    /// Whole seconds since the previous sample in sorted order; 0 for the
    /// first sample of the window.
    pub duration_secs: i64,
    pub occupied: bool,
}

impl OccupancySample {
    /// Seconds this sample contributes to sleep time.
    pub fn occupied_secs(&self) -> i64 {
        if self.occupied {
            self.duration_secs
        } else {
            0
        }
    }
}

/// Derive per-sample durations and occupancy for a windowed sequence.
///
/// Callers pass the output of [`crate::preprocessing::select_window`];
/// durations are non-negative exactly because that input is sorted.
/// Duplicate timestamps legitimately yield a 0 duration.
pub fn integrate_occupancy(windowed: &[PressureSample]) -> Vec<OccupancySample> {
    windowed
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let duration_secs = if i == 0 {
                0
            } else {
                (s.timestamp - windowed[i - 1].timestamp).num_seconds()
            };
            OccupancySample {
                sample: *s,
                duration_secs,
                occupied: is_occupied(s.pressure),
            }
        })
        .collect()
}

/// Sleep total for one calendar day of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySleep {
    pub date: NaiveDate,
    pub sleep_secs: i64,
}

impl DailySleep {
    pub fn hours(&self) -> f64 {
        self.sleep_secs as f64 / 3600.0
    }
}

/// Whole-window totals plus the per-day breakdown.
#[derive(Debug, Clone)]
pub struct SleepSummary {
    /// One entry per calendar date with at least one sample, ascending.
    pub daily: Vec<DailySleep>,
    pub total_secs: i64,
    /// Length of the evaluation window in days.
    pub days: u32,
}

impl SleepSummary {
    pub fn total_hours(&self) -> f64 {
        self.total_secs as f64 / 3600.0
    }

    /// Share of the whole window spent asleep.
    pub fn ratio(&self) -> f64 {
        self.total_hours() / (f64::from(self.days) * 24.0)
    }
}

/// Group occupied seconds by calendar date and total them for the window.
///
/// Seconds stay integral all the way through, so the daily figures sum to
/// `total_secs` exactly.
pub fn summarize_sleep(occupancy: &[OccupancySample], days: u32) -> SleepSummary {
    let mut per_day: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for occ in occupancy {
        *per_day.entry(occ.sample.timestamp.date()).or_insert(0) += occ.occupied_secs();
    }

    let total_secs = occupancy.iter().map(OccupancySample::occupied_secs).sum();

    SleepSummary {
        daily: per_day
            .into_iter()
            .map(|(date, sleep_secs)| DailySleep { date, sleep_secs })
            .collect(),
        total_secs,
        days,
    }
}
