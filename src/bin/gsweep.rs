//! CLI entry point for the `gsweep` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use graph_sweep::cli::commands;
use graph_sweep::engine::Variant;
use graph_sweep::graph::Shape;
use graph_sweep::{SweepConfig, SweepError};

#[derive(Parser)]
#[command(
    name = "gsweep",
    about = "graph-sweep CLI: compare sequential and parallel DFS/BFS"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a graph and write it as a .sweep file
    Generate {
        /// Output path
        out: PathBuf,
        /// Number of nodes
        #[arg(long, default_value = "1000")]
        nodes: usize,
        /// Shape: random, complete, path, star, cycle
        #[arg(long, default_value = "random")]
        shape: String,
        /// Edge probability for random graphs
        #[arg(long, default_value = "0.5")]
        probability: f64,
        /// Seed for random graphs (defaults to the configured seed)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Convert a text edge list to a .sweep file
    Convert {
        /// Edge list path
        input: PathBuf,
        /// Output .sweep path
        out: PathBuf,
    },
    /// Write a graph as a text edge list to stdout
    Export {
        /// Graph file (.sweep or edge list)
        file: PathBuf,
    },
    /// Display information about a .sweep file
    Info {
        /// Path to the .sweep file
        file: PathBuf,
    },
    /// Run one traversal
    Traverse {
        /// Graph file (.sweep or edge list)
        file: PathBuf,
        /// Start node
        #[arg(allow_negative_numbers = true)]
        start: i64,
        /// Algorithm: seq-dfs, racy-dfs, seq-bfs, level-bfs
        #[arg(long, default_value = "level-bfs")]
        algo: String,
        /// Worker threads (0 = hardware parallelism)
        #[arg(long)]
        workers: Option<usize>,
    },
    /// Time all four traversals
    Bench {
        /// Graph file (.sweep or edge list)
        file: PathBuf,
        /// Start node
        #[arg(default_value = "0", allow_negative_numbers = true)]
        start: i64,
        /// Worker threads (0 = hardware parallelism)
        #[arg(long)]
        workers: Option<usize>,
        /// Rounds per variant
        #[arg(long, default_value = "3")]
        rounds: usize,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = match &cli.config {
        Some(path) => match SweepConfig::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(5);
            }
        },
        None => SweepConfig::default(),
    };

    let result = match cli.command {
        Commands::Generate {
            out,
            nodes,
            shape,
            probability,
            seed,
        } => {
            let shape = match Shape::from_name(&shape) {
                Some(s) => s,
                None => {
                    eprintln!("Invalid shape: {}", shape);
                    process::exit(3);
                }
            };
            commands::cmd_generate(
                &out,
                shape,
                nodes,
                probability,
                seed.unwrap_or(config.seed),
                json,
            )
        }
        Commands::Convert { input, out } => commands::cmd_convert(&input, &out, &config, json),
        Commands::Export { file } => commands::cmd_export(&file, &config),
        Commands::Info { file } => commands::cmd_info(&file, &config, json),
        Commands::Traverse {
            file,
            start,
            algo,
            workers,
        } => {
            let variant = match Variant::from_name(&algo) {
                Some(v) => v,
                None => {
                    eprintln!("Invalid algorithm: {}", algo);
                    process::exit(3);
                }
            };
            let config = with_workers(config, workers);
            commands::cmd_traverse(&file, start, variant, &config, json)
        }
        Commands::Bench {
            file,
            start,
            workers,
            rounds,
        } => {
            let config = with_workers(config, workers);
            commands::cmd_bench(&file, start, &config, rounds, json)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            SweepError::Io(_) => 1,
            SweepError::InvalidMagic
            | SweepError::UnsupportedVersion(_)
            | SweepError::Truncated
            | SweepError::Corrupt(_)
            | SweepError::Compression(_)
            | SweepError::Parse { .. } => 2,
            SweepError::InvalidNode(_)
            | SweepError::OutOfRange { .. }
            | SweepError::TooLarge { .. }
            | SweepError::Allocation(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}

fn with_workers(config: SweepConfig, workers: Option<usize>) -> SweepConfig {
    match workers {
        Some(w) => config.with_workers(w),
        None => config,
    }
}
