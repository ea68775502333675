use clap::{Parser, Subcommand};
use std::process::ExitCode;

use groundstation::{Config, GroundStationPosition, HorizonMask};

#[derive(Parser)]
#[command(name = "groundstation")]
#[command(about = "Ground station descriptor tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a station config file
    Validate { config: String },
    /// Print the station described by a config file
    Show {
        config: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check a look angle against the station horizon mask
    Check {
        config: String,
        #[arg(long, allow_negative_numbers = true)]
        azimuth: f64,
        #[arg(long, allow_negative_numbers = true)]
        elevation: f64,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { config } => validate(&config),
        Commands::Show { config, json } => show(&config, json),
        Commands::Check {
            config,
            azimuth,
            elevation,
        } => check(&config, azimuth, elevation),
    }
}

fn load(path: &str) -> Option<GroundStationPosition> {
    let config = match Config::from_file(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return None;
        }
    };

    match config.station.to_position() {
        Ok(station) => Some(station),
        Err(e) => {
            eprintln!("Invalid station: {}", e);
            None
        }
    }
}

fn validate(path: &str) -> ExitCode {
    let Some(station) = load(path) else {
        return ExitCode::FAILURE;
    };

    println!(
        "Station is valid: '{}' at {}, {} ({} m AMSL)",
        station.name(),
        station.latitude(),
        station.longitude(),
        station.height_amsl()
    );
    ExitCode::SUCCESS
}

fn show(path: &str, json: bool) -> ExitCode {
    let Some(station) = load(path) else {
        return ExitCode::FAILURE;
    };

    if json {
        return match serde_json::to_string_pretty(&station) {
            Ok(s) => {
                println!("{}", s);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error serializing station: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    println!("name:        {}", station.name());
    println!("latitude:    {}", station.latitude());
    println!("longitude:   {}", station.longitude());
    println!("height_amsl: {}", station.height_amsl());
    println!("horizon:");
    for (i, elevation) in station.horizon_elevations().iter().enumerate() {
        let from = i as f64 * HorizonMask::SECTOR_WIDTH_DEG;
        println!(
            "  {:>3}-{:<3} {}",
            from,
            from + HorizonMask::SECTOR_WIDTH_DEG,
            elevation
        );
    }
    ExitCode::SUCCESS
}

fn check(path: &str, azimuth: f64, elevation: f64) -> ExitCode {
    let Some(station) = load(path) else {
        return ExitCode::FAILURE;
    };

    let mask = station.horizon_elevation_at(azimuth);
    if station.is_above_horizon(azimuth, elevation) {
        println!("visible: el {} >= mask {} at az {}", elevation, mask, azimuth);
    } else {
        println!("blocked: el {} < mask {} at az {}", elevation, mask, azimuth);
    }
    ExitCode::SUCCESS
}
