//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Roster using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Roster - Employee Contact Directory
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(version, about, long_about = None)]
#[command(author = "Roster Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "roster.toml", env = "ROSTER_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "ROSTER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List employees one page at a time
    List(commands::list::ListArgs),

    /// Show one employee by name
    Get(commands::get::GetArgs),

    /// Import employees from a CSV/JSON file or inline text
    Import(commands::import::ImportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

impl Commands {
    /// Execute the command, returning the process exit code
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        match self {
            Commands::List(args) => args.execute(config_path).await,
            Commands::Get(args) => args.execute(config_path).await,
            Commands::Import(args) => args.execute(config_path).await,
            Commands::ValidateConfig(args) => args.execute(config_path).await,
            Commands::Init(args) => args.execute().await,
        }
    }
}
