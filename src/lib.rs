pub mod config;
pub mod data_loading;
pub mod output;
pub mod plotting;
pub mod preprocessing;
pub mod resampling;
pub mod sleep_analysis;

use chrono::NaiveDateTime;

/// One validated reading from the bed sensor log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressureSample {
    pub timestamp: NaiveDateTime,
    pub pressure: u32,
}

/// Loaded sensor log: validated samples in file order, plus the number of
/// records whose pressure field failed validation and was discarded.
#[derive(Debug, Clone, Default)]
pub struct PressureLog {
    pub samples: Vec<PressureSample>,
    pub dropped: usize,
}

impl PressureLog {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
