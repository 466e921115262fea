//! Flamestore CLI
//!
//! Aggregates symbolized profiles into call trees and encodes them as
//! flamebearer documents for flame graph rendering.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use flamestore::commands::{
    display_version, execute_decode, execute_ingest, parse_ratio, print_tree, validate_args,
    DecodeArgs, IngestArgs, TreeArgs,
};
use flamestore::utils::config::{DEFAULT_MAX_NODES, DEFAULT_SAMPLE_RATE, DEFAULT_SPY_NAME};

/// Flamestore - call-tree aggregation for continuous profiling
#[derive(Parser, Debug)]
#[command(name = "flamestore")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Aggregate profiles into a flamebearer document
    Ingest {
        /// Symbolized profile JSON (repeat to merge several)
        #[arg(short, long = "profile", required = true)]
        profiles: Vec<PathBuf>,

        /// Value column to aggregate (defaults to the first one)
        #[arg(short, long, default_value = "")]
        sample_type: String,

        /// Scale factor for every value, e.g. 1/2
        #[arg(long)]
        scale: Option<String>,

        /// Maximum number of nodes in the flamebearer (0 = unlimited)
        #[arg(long, default_value_t = DEFAULT_MAX_NODES)]
        max_nodes: usize,

        /// Profiler name reported in the metadata
        #[arg(long, default_value = DEFAULT_SPY_NAME)]
        spy_name: String,

        /// Sample rate reported in the metadata
        #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,

        /// Output path for the flamebearer JSON
        #[arg(short, long, default_value = "flamebearer.json")]
        output: PathBuf,

        /// Output path for the nested tree JSON (optional)
        #[arg(long)]
        tree: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Number of hot paths in the summary
        #[arg(long, default_value = "20")]
        top_paths: usize,
    },

    /// Decode a flamebearer document into absolute offsets
    Decode {
        /// Path to flamebearer JSON
        #[arg(short, long)]
        file: PathBuf,

        /// Output path (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the call tree of a profile in its debug form
    Tree {
        /// Path to symbolized profile JSON
        #[arg(short, long)]
        profile: PathBuf,

        /// Value column to aggregate (defaults to the first one)
        #[arg(short, long, default_value = "")]
        sample_type: String,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Ingest {
            profiles,
            sample_type,
            scale,
            max_nodes,
            spy_name,
            sample_rate,
            output,
            tree,
            summary,
            top_paths,
        } => {
            let scale = scale.as_deref().map(parse_ratio).transpose()?;

            let args = IngestArgs {
                profiles,
                sample_type,
                scale,
                max_nodes,
                spy_name,
                sample_rate,
                output_json: output,
                output_tree: tree,
                print_summary: summary,
                top_paths,
            };

            // Validate args first
            validate_args(&args)?;

            execute_ingest(args)?;
        }

        Commands::Decode { file, output } => {
            execute_decode(DecodeArgs {
                input: file,
                output,
            })?;
        }

        Commands::Tree {
            profile,
            sample_type,
            output,
        } => {
            print_tree(TreeArgs {
                profile,
                sample_type,
                output,
            })?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
