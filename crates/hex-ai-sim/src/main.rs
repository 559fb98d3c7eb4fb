//! hex-ai-sim - headless AI-versus-AI skirmishes.
//!
//! - `hex-ai-sim run` - play a skirmish and print the final standings
//! - `hex-ai-sim config` - print the effective AI configuration as YAML

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use hex_ai::{AiConfig, Scenario};
use hex_ai_sim::{EconomyRules, Skirmish, SkirmishSummary};

#[derive(Parser)]
#[command(name = "hex-ai-sim")]
#[command(about = "Headless hex strategy AI skirmishes", version)]
struct Cli {
    /// AI configuration file (YAML); missing fields keep their defaults
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a skirmish
    Run {
        /// Board radius
        #[arg(
            short,
            long,
            default_value_t = 6,
            value_parser = clap::value_parser!(i32).range(3..=i64::from(Scenario::MAX_RADIUS))
        )]
        radius: i32,

        /// Number of turns to play
        #[arg(short, long, default_value_t = 50)]
        turns: u32,

        /// Number of AI players (1-6)
        #[arg(short, long, default_value_t = 2)]
        players: u8,

        /// Forward agent trace events to the log
        #[arg(long)]
        trace: bool,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });
    if cli.json_logs {
        fmt().json().with_env_filter(filter).init();
    } else {
        fmt().with_env_filter(filter).with_target(false).init();
    }

    let config = match &cli.config {
        Some(path) => AiConfig::load(path)
            .with_context(|| format!("loading AI config from {}", path.display()))?,
        None => AiConfig::default(),
    };

    match cli.command.unwrap_or(Commands::Run {
        radius: 6,
        turns: 50,
        players: 2,
        trace: false,
        json: false,
    }) {
        Commands::Run {
            radius,
            turns,
            players,
            trace,
            json,
        } => run_skirmish(&config, radius, turns, players, trace, json),
        Commands::Config => {
            print!("{}", config.to_yaml_string()?);
            Ok(())
        }
    }
}

fn run_skirmish(
    config: &AiConfig,
    radius: i32,
    turns: u32,
    players: u8,
    trace: bool,
    json: bool,
) -> Result<()> {
    let scenario = Scenario {
        radius,
        players,
        ..Scenario::default()
    };
    tracing::info!(radius = scenario.effective_radius(), turns, players, "Starting skirmish");

    let mut skirmish = Skirmish::new(&scenario, config, EconomyRules::default(), trace);
    let summary = skirmish.run(turns);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(summary: &SkirmishSummary) {
    println!("Skirmish after {} turns", summary.turns);
    println!("========================");
    for p in &summary.players {
        println!();
        println!("Player {} ({} / {})", p.player, p.macro_state, p.order);
        println!(
            "  units: {} settlers, {} soldiers, {} settlements, {} cities",
            p.settlers, p.soldiers, p.settlements, p.cities
        );
        println!("  territory: {} cells", p.territory);
        println!("  stock: food {} / wood {} / gold {}", p.food, p.wood, p.gold);
    }
}
