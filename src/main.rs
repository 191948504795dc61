use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use kmlwrite::{
    parse_date, print_kml, reader::read_records, write_kml, Element, KmlDocument, Point,
};

/// Build a KML document from a CSV file of points.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input CSV file path
    #[arg(short, long)]
    file: String,

    /// Output KML file path (prints to stdout when omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Document title
    #[arg(short, long, default_value = "Imported points")]
    title: String,

    /// Document description
    #[arg(short, long, default_value = "")]
    description: String,

    /// CSV field holding the latitude
    #[arg(long, default_value = "latitude")]
    lat_field: String,

    /// CSV field holding the longitude
    #[arg(long, default_value = "longitude")]
    lon_field: String,

    /// CSV field holding the point name
    #[arg(long)]
    name_field: Option<String>,

    /// CSV field holding a date/time for the point's TimeStamp
    #[arg(long)]
    date_field: Option<String>,

    /// Read ambiguous dates month-first instead of day-first
    #[arg(long)]
    month_first: bool,
}

fn main() {
    // Initialize the default subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false) // Don't show target
        .without_time() // Don't show timestamps
        .init(); // Initialize the subscriber

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> kmlwrite::Result<()> {
    let args = Args::parse();

    info!("Reading records from {}", args.file);
    let records = read_records(&args.file)?;

    let mut doc = KmlDocument::new(&*args.title, &*args.description);
    let mut skipped = 0usize;

    for (row, record) in records.iter().enumerate() {
        let coordinates = record
            .get(&args.lat_field)
            .and_then(|lat| lat.trim().parse::<f64>().ok())
            .zip(
                record
                    .get(&args.lon_field)
                    .and_then(|lon| lon.trim().parse::<f64>().ok()),
            );
        let Some((latitude, longitude)) = coordinates else {
            warn!("Row {}: unusable coordinates, skipping", row + 1);
            skipped += 1;
            continue;
        };

        let mut point = Point::new(latitude, longitude);

        if let Some(field) = &args.name_field {
            if let Some(name) = record.get(field).filter(|name| !name.is_empty()) {
                point = point.name(name.clone());
            }
        }

        if let Some(field) = &args.date_field {
            if let Some(raw) = record.get(field) {
                match parse_date(raw, !args.month_first) {
                    Some(when) => point = point.timestamp(when),
                    None => warn!("Row {}: unparseable date '{}', omitting", row + 1, raw),
                }
            }
        }

        doc.merge(point.render());
    }

    if skipped > 0 {
        warn!("Skipped {} of {} records", skipped, records.len());
    }

    match args.output {
        Some(path) => write_kml(&doc, &path)?,
        None => print_kml(&doc),
    }

    Ok(())
}
