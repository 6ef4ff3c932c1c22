use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use plotters::coord::types::RangedDateTime;
use plotters::prelude::*;
use plotters::style::FontTransform;
use std::path::Path;

use crate::resampling::GridPoint;

/// The chart always covers this many trailing days, whatever window the
/// report used.
pub const DISPLAY_DAYS: i64 = 7;

const CHART_SIZE: (u32, u32) = (1200, 600);

/// Render the last-week pressure chart: the trailing-average line with the
/// raw resampled readings scattered on top. An empty series still produces
/// a chart, just with nothing plotted.
pub fn render_pressure_chart(
    path: &Path,
    raw: &[GridPoint],
    averaged: &[GridPoint],
    x_range: (NaiveDateTime, NaiveDateTime),
) -> Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    // Headroom above the tallest reading; keeps the axis drawable when the
    // series is empty.
    let y_max = series_points(raw)
        .chain(series_points(averaged))
        .map(|(_, value)| value)
        .fold(0.0_f64, f64::max);
    let y_top = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Pressure Data with Moving Average (1 Hour)",
            ("sans-serif", 24),
        )
        .margin(10)
        .x_label_area_size(70)
        .y_label_area_size(60)
        .build_cartesian_2d(RangedDateTime::from(x_range.0..x_range.1), 0.0..y_top)?;

    chart
        .configure_mesh()
        .x_desc("Timestamp")
        .y_desc("Pressure")
        .x_labels(10)
        .x_label_formatter(&|ts: &NaiveDateTime| ts.format("%m-%d %H:%M").to_string())
        .x_label_style(
            ("sans-serif", 12)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .draw()?;

    chart
        .draw_series(LineSeries::new(series_points(averaged), &BLUE))?
        .label("Moving Average (1H)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .draw_series(
            series_points(raw).map(|(ts, value)| Circle::new((ts, value), 2, RED.filled())),
        )?
        .label("Original Data")
        .legend(|(x, y)| Circle::new((x + 10, y), 2, RED.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()
        .with_context(|| format!("Failed to write chart to {}", path.display()))?;

    Ok(())
}

/// Drawable (timestamp, value) pairs; empty ticks are skipped.
fn series_points(grid: &[GridPoint]) -> impl Iterator<Item = (NaiveDateTime, f64)> + '_ {
    grid.iter()
        .filter_map(|p| p.pressure.map(|value| (p.minute, value)))
}
