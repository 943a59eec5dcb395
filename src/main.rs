use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use habla::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "habla")]
#[command(about = "Voice-activated desktop assistant - open apps and play music by voice")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.habla/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Listen for voice commands (default)
    Listen {
        /// Stop after a single listen cycle
        #[arg(long)]
        once: bool,
    },

    /// Run a typed command through the same pipeline, without the microphone
    Run {
        /// Command text, e.g. "abrir calculadora"
        text: String,
    },

    /// Show recently handled commands
    History {
        /// Number of entries to show
        #[arg(short, long, default_value_t = 20)]
        limit: usize,

        /// Delete all stored commands
        #[arg(long)]
        clear: bool,
    },

    /// Show the application table for this platform
    Apps,

    /// Write a commented ~/.habla/config.toml
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

    match cli.command {
        Some(Commands::Init { force }) => {
            cli::init::init_command(cli.config, force)?;
        }
        Some(Commands::History { limit, clear }) => {
            cli::history::history_command(cli.config.as_deref(), limit, clear)?;
        }
        Some(Commands::Apps) => {
            let config = Config::load_from(cli.config.as_deref())?;
            cli::apps::apps_command(&config);
        }
        Some(Commands::Run { text }) => {
            let config = Config::load_from(cli.config.as_deref())?;
            cli::run::run_command(&config, cli.config.as_deref(), &text)?;
        }
        Some(Commands::Listen { once }) => {
            let config = Config::load_from(cli.config.as_deref())?;
            cli::listen::listen_command(&config, cli.config.as_deref(), once)?;
        }
        None => {
            let config = Config::load_from(cli.config.as_deref())?;
            cli::listen::listen_command(&config, cli.config.as_deref(), false)?;
        }
    }

    Ok(())
}
