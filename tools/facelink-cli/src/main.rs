//! FaceLink CLI: replay tracking captures through action bindings.
//!
//! Usage:
//!   facelink replay <FRAMES> --bindings <FILE>   Print the events a capture triggers
//!   facelink builtins                            List built-in conditions
//!   facelink classify <FRAMES>                   Classify emotions per face frame
//!   facelink info <FRAMES>                       Show capture statistics

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use facelink_common::config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "facelink",
    about = "Map face expressions and hand gestures to action events",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a capture through a set of bindings
    Replay {
        /// Path to a JSONL capture file
        path: PathBuf,

        /// Path to a JSON array of bindings
        #[arg(short, long)]
        bindings: PathBuf,

        /// Print events as JSON lines
        #[arg(long)]
        json: bool,
    },

    /// List the built-in condition names
    Builtins,

    /// Classify the dominant emotion of every face frame
    Classify {
        /// Path to a JSONL capture file
        path: PathBuf,

        /// Minimum template score before a face counts as non-neutral
        #[arg(long, default_value = "0.15")]
        neutral_threshold: f32,
    },

    /// Show capture information
    Info {
        /// Path to a JSONL capture file
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load();
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    facelink_common::logging::init_logging(&config.logging);

    match cli.command {
        Commands::Replay {
            path,
            bindings,
            json,
        } => commands::replay::run(path, bindings, json, &config.engine).await,
        Commands::Builtins => commands::builtins::run(),
        Commands::Classify {
            path,
            neutral_threshold,
        } => commands::classify::run(path, neutral_threshold),
        Commands::Info { path } => commands::info::run(path),
    }
}
