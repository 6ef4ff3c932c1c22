use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use log::debug;
use std::fs::File;
use std::path::Path;

use crate::{PressureLog, PressureSample};

/// Timestamp layout the collector uses when appending to the log.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Whole-string digit check: the pressure field must be a non-negative
/// integer literal. Rejects empty, signed, decimal and junk-suffixed
/// fields.
pub fn is_valid_pressure(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit())
}

/// Read the sensor log: header-less CSV rows of (timestamp, pressure).
///
/// Timestamps are trusted to be well-formed; one that does not match
/// [`TIMESTAMP_FORMAT`] aborts the load. Pressure fields are not trusted:
/// the collector appends whatever the sensor posted, so anything that is
/// not a pure digit string is dropped and only counted.
pub fn read_pressure_log(path: &Path) -> Result<PressureLog> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open pressure log: {}", path.display()))?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true) // a record with a missing pressure field is still a record
        .from_reader(file);

    let mut log = PressureLog::default();

    for (row, result) in rdr.records().enumerate() {
        let record = result?;

        let ts_field = record.get(0).unwrap_or("");
        let timestamp = NaiveDateTime::parse_from_str(ts_field, TIMESTAMP_FORMAT)
            .with_context(|| format!("Malformed timestamp {:?} on record {}", ts_field, row + 1))?;

        let pressure = match record.get(1).filter(|field| is_valid_pressure(field)) {
            // The digit check leaves u32 overflow as the only way this
            // parse can fail; treat it as one more invalid reading.
            Some(field) => match field.parse::<u32>() {
                Ok(value) => value,
                Err(_) => {
                    log.dropped += 1;
                    continue;
                }
            },
            None => {
                log.dropped += 1;
                continue;
            }
        };

        log.samples.push(PressureSample { timestamp, pressure });
    }

    debug!(
        "Loaded {} valid samples from {} ({} dropped)",
        log.len(),
        path.display(),
        log.dropped
    );

    Ok(log)
}
