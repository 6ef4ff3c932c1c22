use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::path::Path;

use crate::sleep_analysis::SleepSummary;

/// One row of the optional per-day CSV export.
#[derive(Debug, Serialize)]
struct DailyRow {
    date: NaiveDate,
    sleep_hours: f64,
}

/// The report as printed: per-day lines, then window totals and the
/// occupancy ratio. Kept as strings so the formatting is testable.
pub fn report_lines(summary: &SleepSummary) -> Vec<String> {
    let mut lines = vec!["Sleep hours each day:".to_string()];
    for day in &summary.daily {
        lines.push(format!(
            "Date: {}, Sleep Hours: {:.2} hours",
            day.date,
            day.hours()
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Total sleep hours in the last {} days starting from yesterday: {:.2} hours",
        summary.days,
        summary.total_hours()
    ));
    lines.push(format!(
        "Ratio of sleep hours to total hours in the period considered: {:.2}",
        summary.ratio()
    ));

    lines
}

pub fn print_report(summary: &SleepSummary) {
    for line in report_lines(summary) {
        println!("{}", line);
    }
}

/// Write the per-day table as CSV with a `date,sleep_hours` header.
pub fn write_daily_csv(path: &Path, summary: &SleepSummary) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }

    println!("Writing daily sleep table to {}", path.display());
    let mut writer = csv::Writer::from_path(path)?;
    for day in &summary.daily {
        writer.serialize(DailyRow {
            date: day.date,
            // Round to 2 decimal places like the printed report
            sleep_hours: (day.hours() * 100.0).round() / 100.0,
        })?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sleep_analysis::DailySleep;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn summary() -> SleepSummary {
        SleepSummary {
            daily: vec![
                DailySleep {
                    date: date("2024-05-01"),
                    sleep_secs: 27_000,
                },
                DailySleep {
                    date: date("2024-05-02"),
                    sleep_secs: 600,
                },
            ],
            total_secs: 27_600,
            days: 2,
        }
    }

    #[test]
    fn test_report_formatting() {
        let lines = report_lines(&summary());
        assert_eq!(
            lines,
            vec![
                "Sleep hours each day:".to_string(),
                "Date: 2024-05-01, Sleep Hours: 7.50 hours".to_string(),
                "Date: 2024-05-02, Sleep Hours: 0.17 hours".to_string(),
                String::new(),
                "Total sleep hours in the last 2 days starting from yesterday: 7.67 hours"
                    .to_string(),
                "Ratio of sleep hours to total hours in the period considered: 0.16".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_report() {
        let lines = report_lines(&SleepSummary {
            daily: Vec::new(),
            total_secs: 0,
            days: 3,
        });
        assert_eq!(lines[0], "Sleep hours each day:");
        assert_eq!(
            lines[2],
            "Total sleep hours in the last 3 days starting from yesterday: 0.00 hours"
        );
        assert_eq!(
            lines[3],
            "Ratio of sleep hours to total hours in the period considered: 0.00"
        );
    }

    #[test]
    fn test_daily_csv_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("daily.csv");

        write_daily_csv(&path, &summary()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "date,sleep_hours\n2024-05-01,7.5\n2024-05-02,0.17\n"
        );
    }
}
