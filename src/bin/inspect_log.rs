use anyhow::Result;
use sleep_tally::data_loading;
use std::path::Path;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        println!("Usage: {} <pressure_log.csv>", args[0]);
        std::process::exit(1);
    }

    let log = data_loading::read_pressure_log(Path::new(&args[1]))?;

    println!("Valid samples: {}", log.len());
    println!("Dropped records: {}", log.dropped);

    if log.is_empty() {
        return Ok(());
    }

    // The log is append-ordered, not guaranteed sorted, so scan for the span.
    let first = log.samples.iter().map(|s| s.timestamp).min().unwrap();
    let last = log.samples.iter().map(|s| s.timestamp).max().unwrap();
    let low = log.samples.iter().map(|s| s.pressure).min().unwrap();
    let high = log.samples.iter().map(|s| s.pressure).max().unwrap();

    println!("Time span: {} to {}", first, last);
    println!("Pressure range: {} to {}", low, high);

    Ok(())
}
