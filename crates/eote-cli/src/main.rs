//! CLI frontend for analyzing and rolling narrative dice pools.

mod commands;
mod render;

use std::process;

use clap::{Parser, Subcommand};
use eote_dice::DiceConfig;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "eote",
    about = "Analyze and roll narrative dice pools",
    version,
    propagate_version = true
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Decimal places for means and probabilities (at most 6)
    #[arg(long, global = true, default_value = "2")]
    precision: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show exact means and probabilities for a dice pool
    Analyze {
        /// Dice pool as color codes, e.g. "yygbrppk"
        /// (b=boost, g=ability, y=proficiency, k=setback, p=difficulty, r=challenge)
        pool: String,

        /// Minimum triumphs
        #[arg(long, allow_hyphen_values = true)]
        triumph: Option<i32>,

        /// Minimum net successes
        #[arg(long, allow_hyphen_values = true)]
        success: Option<i32>,

        /// Minimum net advantage
        #[arg(long, allow_hyphen_values = true)]
        advantage: Option<i32>,

        /// Minimum despairs
        #[arg(long, allow_hyphen_values = true)]
        despair: Option<i32>,

        /// Print machine-readable JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Roll a dice pool once and show the net result
    Roll {
        /// Dice pool as color codes, e.g. "yygbrppk"
        pool: String,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Cancel a string of symbols, e.g. "ssffa"
    /// (T=triumph, s=success, a=advantage, D=despair, f=failure, r=threat)
    Cancel {
        /// Symbols to cancel
        symbols: String,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let precision = cli.precision.min(render::MAX_PRECISION);

    let result = match cli.command {
        Commands::Analyze {
            pool,
            triumph,
            success,
            advantage,
            despair,
            json,
        } => {
            let thresholds = eote_dice::Thresholds {
                triumph,
                success,
                advantage,
                despair,
            };
            commands::analyze::run(&pool, &thresholds, json, precision)
        }
        Commands::Roll { pool, seed } => {
            let mut config = DiceConfig::default();
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            tracing::debug!(?config, "rolling");
            commands::roll::run(&pool, &config)
        }
        Commands::Cancel { symbols } => commands::cancel::run(&symbols),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
