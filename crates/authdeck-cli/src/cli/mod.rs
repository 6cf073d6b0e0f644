//! CLI entry and dispatch.

use anyhow::{Context, Result};
use authdeck_core::{config, logging};
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(name = "authdeck")]
#[command(version = "0.1")]
#[command(about = "Mock-auth demo app in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // default to the interactive TUI
    let Some(command) = cli.command else {
        let config = config::Config::load().context("load config")?;
        // The guard flushes buffered log lines when the process exits.
        let _guard = logging::init().context("init logging")?;
        tracing::info!("starting interactive session");
        return authdeck_tui::run(config).context("interactive session failed");
    };

    match command {
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
