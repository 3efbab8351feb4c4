use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{ArgAction, Parser};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use flight_scout::airports::AirportDataset;
use flight_scout::domain::AirportCode;
use flight_scout::fares::{DEFAULT_BASE_URL, FareClient, FareConfig, MockFareSource};
use flight_scout::planner::{FareSource, PairingMode, Planner, SearchConfig};
use flight_scout::report::{render_json, render_text};

/// Find the cheapest round trips between the airports around two cities.
#[derive(Parser, Debug)]
#[command(name = "flight-scout", version, about)]
struct Args {
    /// Home airport code
    #[arg(long, default_value = "MUC")]
    from: AirportCode,

    /// Destination airport code
    #[arg(long, default_value = "HAM")]
    to: AirportCode,

    /// Centre of the departure date window (YYYY-MM-DD)
    #[arg(long, default_value = "2025-04-01")]
    date: NaiveDate,

    /// Days either side of the date to search
    #[arg(long, default_value_t = 2)]
    plus_minus_days: u32,

    /// Days between outbound and return flight
    #[arg(long, default_value_t = 4)]
    trip_length: u32,

    /// Airports closer than this many kilometres count as nearby
    #[arg(long, default_value_t = 300.0)]
    near_km: f64,

    /// Keep outbound departure airports in the home country
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    departure_start_same_country: bool,

    /// Keep outbound arrival airports in the destination country
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    departure_end_same_country: bool,

    /// Keep return departure airports in the destination country
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    return_start_same_country: bool,

    /// Keep return arrival airports in the home country
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    return_end_same_country: bool,

    /// Pair outbound and return quotes by list position ("index") or by route ("route")
    #[arg(long, default_value = "index")]
    pairing: PairingMode,

    /// Maximum fare lookups in flight (1 = sequential)
    #[arg(long, default_value_t = 1)]
    concurrency: usize,

    /// Maximum round trips to print (0 = all)
    #[arg(long, default_value_t = 0)]
    max_results: usize,

    /// Currency label used in the report
    #[arg(long, default_value = "TL")]
    currency: String,

    /// Airport dataset CSV (code, country, latitude, longitude); the default
    /// is the sample shipped with the crate, relative to the crate directory
    #[arg(long, default_value = "data/airports.csv")]
    airports: PathBuf,

    /// Fare site base URL
    #[arg(long, env = "FLIGHT_SCOUT_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Serve prices from this JSON file instead of the fare site
    #[arg(long)]
    mock_prices: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn search_config(&self) -> SearchConfig {
        SearchConfig {
            origin: self.from,
            destination: self.to,
            pivot_date: self.date,
            plus_minus_days: self.plus_minus_days,
            trip_length_days: self.trip_length,
            near_km: self.near_km,
            departure_start_same_country: self.departure_start_same_country,
            departure_end_same_country: self.departure_end_same_country,
            return_start_same_country: self.return_start_same_country,
            return_end_same_country: self.return_end_same_country,
            pairing: self.pairing,
            concurrency: self.concurrency,
            max_results: self.max_results,
        }
    }

    fn fare_config(&self) -> FareConfig {
        FareConfig::new(&self.base_url)
            .with_max_concurrent(self.concurrency.max(1))
            .with_timeout(self.timeout)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("flight_scout=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Search failed");
            eprintln!("An error occurred: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = AirportDataset::from_path(&args.airports)?;
    info!(airports = dataset.len(), "Loaded airport dataset");

    match &args.mock_prices {
        Some(path) => {
            let source = MockFareSource::from_path(path)?;
            info!(prices = source.len(), path = %path.display(), "Using mock fares");
            search(args, &dataset, &source).await
        }
        None => {
            let source = FareClient::new(args.fare_config())?;
            info!(base_url = %args.base_url, "Using fare site");
            search(args, &dataset, &source).await
        }
    }
}

async fn search<S: FareSource>(
    args: &Args,
    dataset: &AirportDataset,
    source: &S,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.search_config();
    let report = Planner::new(dataset, source, &config).plan().await?;

    if args.json {
        println!("{}", render_json(&report, &args.currency)?);
    } else {
        print!("{}", render_text(&report.round_trips, &args.currency));
    }

    Ok(())
}
