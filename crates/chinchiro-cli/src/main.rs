//! CLI frontend for the chinchiro dice game.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "chinchiro",
    about = "Chinchiro: throw three dice into the bowl and read the hand",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log roll sequencing to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shake the cup once and show the hand
    Roll {
        /// RNG seed for a reproducible throw
        #[arg(short, long)]
        seed: Option<u64>,

        /// Skip the shaking animation
        #[arg(short, long)]
        instant: bool,

        /// Print the round as JSON
        #[arg(long)]
        json: bool,
    },

    /// Classify three given dice, e.g. `judge 2 2 5` or `judge 4-5-6`
    Judge {
        /// The three dice
        #[arg(required = true, num_args = 1..=3)]
        dice: Vec<String>,

        /// Print the hand as JSON
        #[arg(long)]
        json: bool,
    },

    /// Throw repeatedly from an interactive prompt
    Play {
        /// RNG seed for reproducible throws
        #[arg(short, long)]
        seed: Option<u64>,

        /// Skip the shaking animation
        #[arg(short, long)]
        instant: bool,
    },

    /// Show the table of hands
    Rules,

    /// Show how often each hand comes up
    Odds,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Roll {
            seed,
            instant,
            json,
        } => commands::roll::run(seed, instant, json),
        Commands::Judge { dice, json } => commands::judge::run(&dice, json),
        Commands::Play { seed, instant } => commands::play::run(seed, instant),
        Commands::Rules => commands::rules::run(),
        Commands::Odds => commands::odds::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
