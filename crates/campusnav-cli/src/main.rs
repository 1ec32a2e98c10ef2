use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use campusnav_cli::commands::compare::handle_compare_command;
use campusnav_cli::commands::locations::handle_locations_command;
use campusnav_cli::commands::route::{handle_route_command, RouteCommandArgs};
use campusnav_cli::commands::SessionOptions;
use campusnav_cli::output::{report_failure, OutputFormat};
use campusnav_lib::{
    GeodesicFormula, NavConfig, RouteAlgorithm, WalkingProfile, WeightPrecision,
    DEFAULT_STEP_LENGTH_M, DEFAULT_THRESHOLD_METERS, DEFAULT_WALKING_SPEED_MPS,
};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Shortest walking routes between campus locations"
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct GlobalOptions {
    /// JSON location table. Defaults to $CAMPUSNAV_LOCATIONS, then the built-in campus.
    #[arg(long, global = true, value_name = "PATH")]
    locations: Option<PathBuf>,

    /// Pairs at least this far apart (meters) are not directly connected.
    #[arg(long, global = true, allow_negative_numbers = true, default_value_t = DEFAULT_THRESHOLD_METERS)]
    threshold: f64,

    /// Walking speed in meters per second.
    #[arg(long, global = true, allow_negative_numbers = true, default_value_t = DEFAULT_WALKING_SPEED_MPS)]
    walking_speed: f64,

    /// Step length in meters.
    #[arg(long, global = true, allow_negative_numbers = true, default_value_t = DEFAULT_STEP_LENGTH_M)]
    step_length: f64,

    /// Keep fractional edge weights instead of truncating each edge to whole meters.
    #[arg(long, global = true)]
    exact_weights: bool,

    /// Use Vincenty's published midpoint terms instead of the campus distance table's formula.
    #[arg(long, global = true)]
    standard_geodesic: bool,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl GlobalOptions {
    fn session(&self) -> SessionOptions {
        SessionOptions {
            locations: self.locations.clone(),
            config: NavConfig {
                threshold_meters: self.threshold,
                walking: WalkingProfile {
                    speed_mps: self.walking_speed,
                    step_length_m: self.step_length,
                },
                precision: if self.exact_weights {
                    WeightPrecision::Exact
                } else {
                    WeightPrecision::WholeMeters
                },
                formula: if self.standard_geodesic {
                    GeodesicFormula::Standard
                } else {
                    GeodesicFormula::Campus
                },
            },
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the shortest walking route between two locations.
    Route {
        /// 1 (dijkstra), 2 (a-star) or 3 (floyd-warshall).
        algorithm: String,
        /// Starting location name or alias.
        from: String,
        /// Destination location name or alias.
        to: String,
    },
    /// Run every algorithm on the same query and compare the results.
    Compare {
        /// Starting location name or alias.
        from: String,
        /// Destination location name or alias.
        to: String,
    },
    /// List the available locations.
    Locations,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let format = cli.global.format;

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&format!("{err:#}"), format);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let session = cli.global.session();
    let format = cli.global.format;

    match cli.command {
        Command::Route {
            algorithm,
            from,
            to,
        } => {
            let algorithm: RouteAlgorithm = algorithm.parse()?;
            handle_route_command(
                &session,
                &RouteCommandArgs {
                    algorithm,
                    from,
                    to,
                },
                format,
            )
        }
        Command::Compare { from, to } => handle_compare_command(&session, &from, &to, format),
        Command::Locations => handle_locations_command(&session, format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
