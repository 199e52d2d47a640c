//! autos CLI - emits random cellular-automaton definitions as fixture documents.
//!
//! Writes the document to stdout (or a file); logs go to stderr.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

mod commands;
mod config;

use config::{Config, OutputFormat};

/// autos - Generate random cellular-automaton fixture documents.
///
/// Run `autos` or `autos batch` to print a batch document to stdout.
#[derive(Parser, Debug)]
#[command(
    name = "autos",
    author,
    version,
    about = "Generate random cellular-automaton fixture documents",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a full `autos` document (default command).
    ///
    /// Automata are named by their batch index: "0", "1", ...
    Batch {
        /// Number of automata to generate.
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for reproducible output.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output file path (defaults to stdout).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format.
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print standalone `<auto>` elements with random three-letter names.
    Sample {
        /// Number of automata to generate.
        #[arg(short = 'n', long, default_value_t = 5)]
        count: usize,

        /// Seed for reproducible output.
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Manage CLI configuration.
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show the effective configuration.
    Show,

    /// Write the effective configuration to the config file.
    Init,

    /// Show path to config file.
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    // stdout carries the document, so logs go to stderr
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load()?;

    let command = cli.command.unwrap_or(Commands::Batch {
        count: None,
        seed: None,
        output: None,
        format: None,
    });

    match command {
        Commands::Batch {
            count,
            seed,
            output,
            format,
        } => {
            let options = commands::batch::BatchOptions {
                count: count.unwrap_or(config.count),
                seed: seed.or(config.seed),
                format: format.unwrap_or(config.format),
                output,
            };
            commands::batch::execute(&config, &options)?;
        }

        Commands::Sample { count, seed } => {
            commands::sample::execute(&config, count, seed.or(config.seed))?;
        }

        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => {
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            ConfigCommands::Init => {
                config.save()?;
                if let Some(path) = Config::config_file_path() {
                    eprintln!("✅ Wrote config to {}", path.display());
                }
            }
            ConfigCommands::Path => match Config::config_file_path() {
                Some(path) => println!("{}", path.display()),
                None => eprintln!("No config directory available on this platform"),
            },
        },
    }

    Ok(())
}
