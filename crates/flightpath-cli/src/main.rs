mod commands;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use commands::route::RouteCommandArgs;
use commands::DataOptions;
use flightpath_cli::output::{print_footer, print_logo, OutputFormat};

#[derive(Parser, Debug)]
#[command(author, version, about = "Fuel-constrained flight route planner")]
struct Cli {
    /// Flight-leg CSV with ORIGIN, DEST and DISTANCE IN MILES columns.
    #[arg(
        long,
        global = true,
        env = "FLIGHTPATH_FLIGHTS",
        default_value = "Distance_airports.csv"
    )]
    flights: PathBuf,

    /// Airport reference file in the OpenFlights airports.dat layout.
    #[arg(long, global = true)]
    airports: Option<PathBuf>,

    /// Directory where the airport reference file is cached.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Aircraft catalog CSV replacing the built-in models.
    #[arg(long, global = true, env = "FLIGHTPATH_AIRCRAFT_DATA")]
    aircraft_data: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Suppress the logo banner and timing footer.
    #[arg(long, global = true)]
    no_logo: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the minimum-fuel route between two airports.
    Route {
        /// Departure airport code.
        #[arg(long = "from")]
        from: String,
        /// Destination airport code.
        #[arg(long = "to")]
        to: String,
        /// Aircraft model, e.g. A320.
        #[arg(long)]
        aircraft: String,
    },
    /// List aircraft models with their range.
    Aircraft,
    /// List selectable airports.
    Airports {
        /// Only list airports reachable by this aircraft model.
        #[arg(long)]
        aircraft: Option<String>,
    },
    /// Ensure the airport reference file is downloaded and report its location.
    Download {
        /// Fetch the file again even when a copy exists.
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    fn data_options(&self) -> DataOptions {
        DataOptions {
            flights: self.flights.clone(),
            airports: self.airports.clone(),
            data_dir: self.data_dir.clone(),
            aircraft_data: self.aircraft_data.clone(),
        }
    }

    fn decorated(&self) -> bool {
        self.format.is_text() && !self.no_logo
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let started = Instant::now();

    if cli.decorated() {
        print_logo();
    }

    let options = cli.data_options();
    match &cli.command {
        Command::Route { from, to, aircraft } => {
            let args = RouteCommandArgs {
                from: from.clone(),
                to: to.clone(),
                aircraft: aircraft.clone(),
            };
            commands::route::handle_route_command(&options, &args, cli.format)?
        }
        Command::Aircraft => commands::aircraft::handle_list_aircraft(&options, cli.format)?,
        Command::Airports { aircraft } => {
            commands::airports::handle_list_airports(&options, aircraft.as_deref(), cli.format)?
        }
        Command::Download { force } => {
            commands::download::handle_download(&options, *force, cli.format)?
        }
    }

    if cli.decorated() {
        print_footer(started.elapsed());
    }
    Ok(())
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
