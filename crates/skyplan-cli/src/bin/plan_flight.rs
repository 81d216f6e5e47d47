use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use skyplan_core::{compute_route, PlannerConfig};
use skyplan_data::{AircraftCatalog, AirportDirectory, DirectoryConfig};
use skyplan_export::ExportFormat;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Departure airport ICAO code
    #[arg(long)]
    from: String,

    /// Arrival airport ICAO code
    #[arg(long)]
    to: String,

    /// Aircraft ICAO type designator
    #[arg(long, default_value = "B738")]
    aircraft: String,

    /// Cruise altitude in feet
    #[arg(long, default_value_t = 35000.0)]
    altitude: f64,

    /// Cruise speed in knots; defaults to the aircraft's cruise speed
    #[arg(long)]
    speed: Option<f64>,

    /// Export format: pmdg, msfs, xplane, briefing, or json
    #[arg(long, default_value = "briefing")]
    format: String,

    /// Output file; `-` writes to stdout
    #[arg(long, default_value = "-")]
    output: PathBuf,

    /// Resolve airports against the live dataset instead of the
    /// built-in table
    #[arg(long)]
    online: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let Some(format) = ExportFormat::parse(&args.format) else {
        bail!("unknown export format: {}", args.format);
    };
    if !args.altitude.is_finite() || args.altitude <= 0.0 {
        bail!("cruise altitude must be a positive number");
    }

    let directory = if args.online {
        AirportDirectory::new(DirectoryConfig::default())
    } else {
        AirportDirectory::builtin()
    };
    let catalog = AircraftCatalog::new();

    let departure = directory.lookup(&args.from).await?;
    let arrival = directory.lookup(&args.to).await?;
    let aircraft = catalog.find(&args.aircraft)?;
    let altitude = args.altitude.min(aircraft.max_altitude_ft);

    let route = compute_route(
        &departure,
        &arrival,
        &aircraft,
        altitude,
        args.speed,
        &PlannerConfig::default(),
    );

    eprintln!(
        "{} -> {}: {:.0} NM, {} waypoints",
        route.departure.icao,
        route.arrival.icao,
        route.distance_nm,
        route.waypoints.len()
    );

    let body = skyplan_export::render(format, &route, None);
    let mut writer = skyplan_export::writer_for_path(&args.output)
        .with_context(|| format!("cannot open {}", args.output.display()))?;
    writer.write_all(body.as_bytes())?;
    writer.flush()?;

    Ok(())
}
