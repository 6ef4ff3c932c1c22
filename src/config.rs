use clap::Parser;
use std::path::PathBuf;

/// Evaluate hours of sleep from a bed pressure sensor log
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Number of trailing days (ending at the most recent midnight) to evaluate
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub days: u32,

    /// Path to the pressure log CSV appended by the collector
    #[arg(long, default_value = "ESP32_data.csv")]
    pub input: PathBuf,

    /// Where to write the rendered pressure chart
    #[arg(long, default_value = "pressure_data_plot.png")]
    pub plot_output: PathBuf,

    /// Also write the per-day sleep table as CSV to this path
    #[arg(long)]
    pub csv_output: Option<PathBuf>,

    /// Skip opening the rendered chart in the system image viewer
    #[arg(long)]
    pub no_open: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_is_the_only_required_argument() {
        let args = Args::try_parse_from(["sleep-tally", "14"]).unwrap();
        assert_eq!(args.days, 14);
        assert_eq!(args.input, PathBuf::from("ESP32_data.csv"));
        assert_eq!(args.plot_output, PathBuf::from("pressure_data_plot.png"));
        assert_eq!(args.csv_output, None);
        assert!(!args.no_open);
    }

    #[test]
    fn test_zero_days_is_rejected() {
        assert!(Args::try_parse_from(["sleep-tally", "0"]).is_err());
        assert!(Args::try_parse_from(["sleep-tally", "-3"]).is_err());
    }

    #[test]
    fn test_optional_flags() {
        let args = Args::try_parse_from([
            "sleep-tally",
            "7",
            "--input",
            "/var/log/bed.csv",
            "--csv-output",
            "daily.csv",
            "--no-open",
        ])
        .unwrap();
        assert_eq!(args.input, PathBuf::from("/var/log/bed.csv"));
        assert_eq!(args.csv_output, Some(PathBuf::from("daily.csv")));
        assert!(args.no_open);
    }
}
