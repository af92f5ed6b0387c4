//! CLI module for galera-healthcheck
//!
//! # Commands
//!
//! - `serve` - Start the HTTP health endpoint
//! - `check` - Run one check and exit (0 healthy, 1 unhealthy)
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Serve on port 9200, keep donors in rotation
//! MYSQL_USER=monitor MYSQL_PASSWORD=secret galera-healthcheck serve -P 9200 -d true
//!
//! # One-shot probe
//! galera-healthcheck check -u monitor --json
//! ```

pub mod check;
pub mod completions;
pub mod config;
pub mod output;
pub mod serve;

pub use completions::handle_completions;
pub use config::handle_config_init;

use clap::builder::BoolishValueParser;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// galera-healthcheck - report whether a Galera node should receive traffic
#[derive(Parser, Debug)]
#[command(
    name = "galera-healthcheck",
    version,
    about = "A lightweight web server to report the health of a node in a Galera cluster"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the healthcheck server
    Serve(ServeArgs),
    /// Check the node once and exit
    Check(CheckArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Settings shared by every command that talks to the database.
#[derive(Args, Debug, Default)]
pub struct NodeArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "galera-healthcheck.toml")]
    pub config: PathBuf,

    /// MySQL user to connect as
    #[arg(short, long, env = "MYSQL_USER")]
    pub user: Option<String>,

    /// MySQL password to connect with
    #[arg(short, long, env = "MYSQL_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// MySQL server host
    #[arg(long)]
    pub mysql_host: Option<String>,

    /// MySQL server port
    #[arg(long)]
    pub mysql_port: Option<u16>,

    /// MySQL unix socket (overrides host and port)
    #[arg(long)]
    pub socket: Option<PathBuf>,

    /// Report the node available while it is a donor
    #[arg(
        short = 'd',
        long = "avail-when-donor",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub avail_when_donor: Option<bool>,

    /// Report the node available while it is read-only
    #[arg(
        short = 'r',
        long = "avail-when-read-only",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub avail_when_read_only: Option<bool>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    #[command(flatten)]
    pub node: NodeArgs,

    /// Port of the healthcheck server
    #[arg(short = 'P', long)]
    pub port: Option<u16>,

    /// Address to bind the healthcheck server to
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Location for the pid file
    #[arg(short = 'i', long)]
    pub pidfile: Option<PathBuf>,

    /// Do not write a pid file
    #[arg(long, conflicts_with = "pidfile")]
    pub no_pidfile: bool,
}

#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub node: NodeArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "galera-healthcheck.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
