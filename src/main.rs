use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use streakboard::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "streakboard")]
#[command(about = "Streaks and leaderboards for multi-day habit challenges")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.streakboard/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the challenge's current day and status
    Day {
        /// Snapshot file (JSON)
        snapshot: PathBuf,

        /// Evaluate at this instant instead of now (RFC 3339 or "YYYY-MM-DD HH:MM:SS")
        #[arg(long)]
        now: Option<String>,
    },

    /// Print the ranked leaderboard
    Board {
        /// Snapshot file (JSON)
        snapshot: PathBuf,

        /// Evaluate at this instant instead of now
        #[arg(long)]
        now: Option<String>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Mark or unmark today's completion for a participant
    Toggle {
        /// Snapshot file (JSON), rewritten in place
        snapshot: PathBuf,

        /// Participant id
        participant: String,

        /// Evaluate at this instant instead of now
        #[arg(long)]
        now: Option<String>,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.unwrap_or_else(Config::global_config_path);

    match cli.command {
        Commands::Day { snapshot, now } => {
            let config = Config::load_or_default(&config_path)?;
            cli::day::day_command(&config, &snapshot, now.as_deref())?;
        }
        Commands::Board {
            snapshot,
            now,
            json,
        } => {
            let config = Config::load_or_default(&config_path)?;
            cli::board::board_command(&config, &snapshot, now.as_deref(), json)?;
        }
        Commands::Toggle {
            snapshot,
            participant,
            now,
        } => {
            let config = Config::load_or_default(&config_path)?;
            cli::toggle::toggle_command(&config, &snapshot, &participant, now.as_deref())?;
        }
        Commands::Init { force } => {
            cli::init::init_command(&config_path, force)?;
        }
    }

    Ok(())
}
