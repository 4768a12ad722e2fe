//! # Campus Nav Command Line
//!
//! Loads campus data and answers route, distance, and neighbor queries.

use campus_nav::{CampusCatalog, GraphConfig, NavError, NavResult, Navigator};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
#[cfg(feature = "dev-tools")]
use tracing::{error, info, Level};

#[cfg(not(feature = "dev-tools"))]
use log::{error, info};

/// Command line arguments for campus navigation.
#[derive(Parser, Debug)]
#[command(name = "campus-nav")]
#[command(about = "Turn-by-turn campus directions over a proximity graph")]
#[command(version)]
struct Args {
    /// Campus data file
    #[arg(short, long, default_value = campus_nav::config::DEFAULT_DATA_PATH)]
    data: PathBuf,

    /// Maximum distance at which two locations are connected
    #[arg(short, long, default_value_t = campus_nav::config::DEFAULT_CONNECTIVITY_THRESHOLD)]
    threshold: f64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Shortest walking route between two locations
    Route { from: String, to: String },
    /// Straight-line distance between two locations
    Distance { from: String, to: String },
    /// Locations directly connected to one location
    Neighbors { name: String },
    /// All known locations
    List {
        /// Only show locations in this category
        #[arg(short, long)]
        category: Option<String>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    info!("Starting campus-nav v{}", campus_nav::VERSION);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", apology(&e));
            ExitCode::FAILURE
        }
    }
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    #[cfg(feature = "dev-tools")]
    {
        let level = match log_level.to_lowercase().as_str() {
            "error" => Level::ERROR,
            "warn" => Level::WARN,
            "info" => Level::INFO,
            "debug" => Level::DEBUG,
            "trace" => Level::TRACE,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .init();
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::new()
            .parse_filters(log_level)
            .format_target(false)
            .init();
    }
}

fn run(args: &Args) -> NavResult<()> {
    let catalog = CampusCatalog::from_path(&args.data)?;
    let navigator = Navigator::from_catalog(&catalog, GraphConfig::new(args.threshold));

    match &args.command {
        Command::Route { from, to } => {
            let start = resolve(&navigator, from)?;
            let end = resolve(&navigator, to)?;
            match navigator.get_directions_with_pathfinding(start, end)? {
                Some(directions) => {
                    println!("Directions from {} to {}:", start, end);
                    println!("{}", directions.numbered());
                    println!("Total distance: {:.2} units", directions.distance);
                }
                None => {
                    return Err(NavError::NoPath {
                        start: start.to_string(),
                        end: end.to_string(),
                    })
                }
            }
        }
        Command::Distance { from, to } => {
            let (start, end, distance) = straight_line(&navigator, from, to)?;
            println!("{} to {}: {:.2} units", start, end, distance);
        }
        Command::Neighbors { name } => {
            let name = resolve(&navigator, name)?;
            let graph = navigator.build_graph()?;
            for (neighbor, distance) in graph.neighbors(name) {
                println!("{}\t{:.2}", neighbor, distance);
            }
        }
        Command::List { category } => {
            let locations = match category {
                Some(category) => catalog.locations_by_category(category),
                None => catalog.iter().collect(),
            };
            for location in locations {
                println!(
                    "{}\t{}\t{}",
                    location.name, location.category, location.coordinates
                );
            }
        }
    }

    Ok(())
}

fn resolve<'a>(navigator: &'a Navigator, query: &str) -> NavResult<&'a str> {
    navigator
        .resolve_name(query)
        .ok_or_else(|| NavError::UnknownLocation(query.to_string()))
}

/// Resolved endpoints and straight-line distance between two queries.
fn straight_line<'a>(
    navigator: &'a Navigator,
    from: &str,
    to: &str,
) -> NavResult<(&'a str, &'a str, f64)> {
    let start = resolve(navigator, from)?;
    let end = resolve(navigator, to)?;
    let distance = navigator
        .calculate_distance(start, end)
        .ok_or_else(|| NavError::UnknownLocation(format!("{} or {}", from, to)))?;
    Ok((start, end, distance))
}

/// User-facing text for a failed query.
fn apology(error: &NavError) -> String {
    match error {
        NavError::UnknownLocation(name) => {
            format!("Sorry, I don't know a location called '{}'.", name)
        }
        NavError::NoPath { start, end } => format!(
            "Sorry, I couldn't find a route from {} to {}. Try asking for directions between major locations.",
            start, end
        ),
        other => format!("Error: {}", other),
    }
}
