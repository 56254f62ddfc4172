use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use season_standings::config::{Config, OutputFormat};
use season_standings::season::StandingsEntry;
use season_standings::{output, Season};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Driver standings (default if no subcommand)
    Drivers,
    /// Team standings
    Teams,
    /// Show the driver at a standings position
    Driver {
        /// 1-based standings position
        position: usize,
    },
    /// Show the team at a standings position
    Team {
        /// 1-based standings position
        position: usize,
    },
}

#[derive(Parser, Debug)]
#[command(name = "season-standings")]
#[command(about = "Racing season standings from a roster and race results", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/season-standings/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Roster file: year, then team / driver / driver lines
    roster: PathBuf,

    /// Race results file: one race per line, driver ids in finishing order
    #[arg(short, long, global = true)]
    results: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse the roster and apply every race from the results file, in order.
fn load_season(cli: &Cli, config: &Config) -> Result<Season> {
    let roster_text = std::fs::read_to_string(&cli.roster)
        .with_context(|| format!("Failed to read roster file at {}", cli.roster.display()))?;
    let mut season = Season::with_config(&roster_text, &config.season)
        .with_context(|| format!("Invalid roster in {}", cli.roster.display()))?;

    if let Some(ref results_path) = cli.results {
        let results_text = std::fs::read_to_string(results_path).with_context(|| {
            format!("Failed to read results file at {}", results_path.display())
        })?;
        let races = season_standings::roster::parse_race_results(&results_text)
            .with_context(|| format!("Invalid results in {}", results_path.display()))?;
        for (i, race) in races.iter().enumerate() {
            season
                .add_race_result(race)
                .with_context(|| format!("Race {} in {}", i + 1, results_path.display()))?;
        }
    }

    Ok(season)
}

fn print_standings(entries: &[StandingsEntry], format: OutputFormat, use_colors: bool) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", output::format_standings_table(entries, use_colors)),
        OutputFormat::Tsv => println!("{}", output::format_standings_tsv(entries)),
        OutputFormat::Json => println!(
            "{}",
            output::format_standings_json(entries).context("Failed to serialize standings")?
        ),
    }
    Ok(())
}

fn print_entry(entry: StandingsEntry, format: OutputFormat, use_colors: bool) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", output::format_entry_detail(&entry, use_colors)),
        _ => print_standings(&[entry], format, use_colors)?,
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let command = cli.command.as_ref().unwrap_or(&Commands::Drivers);

    // Load config
    let config = match season_standings::config::load_config(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = season_standings::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let season = match load_season(&cli, &config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    tracing::info!(
        year = season.year(),
        teams = season.number_of_teams(),
        drivers = season.number_of_drivers(),
        races = season.races_run(),
        "season loaded"
    );

    let format = cli.format.unwrap_or(config.output.format);
    let use_colors = config
        .output
        .color
        .unwrap_or_else(output::should_use_colors);

    let result = match command {
        Commands::Drivers => print_standings(&season.driver_standings_entries(), format, use_colors),
        Commands::Teams => print_standings(&season.team_standings_entries(), format, use_colors),
        Commands::Driver { position } => season
            .driver_entry_at(*position)
            .map_err(anyhow::Error::from)
            .and_then(|entry| print_entry(entry, format, use_colors)),
        Commands::Team { position } => season
            .team_entry_at(*position)
            .map_err(anyhow::Error::from)
            .and_then(|entry| print_entry(entry, format, use_colors)),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(EXIT_INPUT);
    }

    std::process::exit(EXIT_SUCCESS);
}
