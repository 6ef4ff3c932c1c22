use anyhow::Result;
use chrono::{Duration, Local};
use clap::Parser;
use log::debug;

use sleep_tally::config::Args;
use sleep_tally::{data_loading, output, plotting, preprocessing, resampling, sleep_analysis};

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let now = Local::now().naive_local();

    let log = data_loading::read_pressure_log(&args.input)?;

    let (start, end) = preprocessing::window_bounds(args.days, now);
    debug!("Evaluation window: {} to {}", start, end);
    let windowed = preprocessing::select_window(log.samples, start, end);

    let occupancy = sleep_analysis::integrate_occupancy(&windowed);
    let summary = sleep_analysis::summarize_sleep(&occupancy, args.days);

    output::print_report(&summary);
    if let Some(csv_path) = &args.csv_output {
        output::write_daily_csv(csv_path, &summary)?;
    }

    // The chart always shows the trailing week, independent of the report
    // window. The moving average is computed over the full grid first so
    // the week's opening ticks can look back past the display boundary.
    let mut grid = resampling::resample_minutely(&windowed);
    resampling::forward_fill(&mut grid);
    let averaged = resampling::trailing_average(&grid);

    let week_start = end - Duration::days(plotting::DISPLAY_DAYS);
    let raw_week = resampling::restrict_range(grid, week_start, end);
    let averaged_week = resampling::restrict_range(averaged, week_start, end);

    plotting::render_pressure_chart(
        &args.plot_output,
        &raw_week,
        &averaged_week,
        (week_start, end),
    )?;
    println!("Plot saved as {}", args.plot_output.display());

    if !args.no_open {
        // Best effort: headless environments have no viewer.
        if let Err(err) = open::that(&args.plot_output) {
            debug!("Could not open {}: {}", args.plot_output.display(), err);
        }
    }

    Ok(())
}
