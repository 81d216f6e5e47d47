use anyhow::Result;
use clap::Parser;
use skyplan_data::{AirportDirectory, DirectoryConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Search text: ICAO/IATA code, airport name, or city
    query: String,

    /// Maximum number of results
    #[arg(long, default_value_t = 20)]
    limit: usize,

    /// Search the live dataset instead of the built-in table
    #[arg(long)]
    online: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let directory = if args.online {
        AirportDirectory::new(DirectoryConfig::default())
    } else {
        AirportDirectory::builtin()
    };

    let results = directory.search(&args.query, args.limit).await;
    if results.is_empty() {
        eprintln!("No airports match '{}'", args.query);
        return Ok(());
    }

    for apt in results {
        println!(
            "{:<4} {:<4} {:>9.4} {:>10.4}  {}{}",
            apt.icao,
            apt.iata.as_deref().unwrap_or("-"),
            apt.lat,
            apt.lon,
            apt.name,
            apt.city
                .as_deref()
                .map(|city| format!(" ({city})"))
                .unwrap_or_default()
        );
    }

    Ok(())
}
