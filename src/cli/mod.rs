//! Command-line interface definitions.
//!
//! Defines the CLI structure for the sprintrisk application using
//! `clap`. The CLI supports subcommands for simulating sprints,
//! exporting the risk table, inspecting the catalog, running
//! diagnostic checks, and managing configuration.

pub mod catalog;
pub mod check;
pub mod config;
pub mod export;
pub mod output;
pub mod simulate;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::MAX_RISKS_PER_SPRINT;

/// Sprint risk simulation and prioritization CLI
#[derive(Parser, Debug)]
#[command(name = "sprintrisk")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the sprintrisk CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Simulate a sprint and display the generated risks
    Simulate(SimulateArgs),

    /// Simulate a sprint and export the risk table to a CSV file
    Export(ExportArgs),

    /// Show the risk types and mitigation tables
    Catalog,

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `sprintrisk check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Run the engine self-test suite and report pass/fail counts.
    Engine(CheckEngineArgs),
    /// Validate the configuration file syntax and semantics.
    Config(ConfigPathArg),
}

/// Subcommands for `sprintrisk config`.
///
/// Provides configuration management utilities including generation,
/// display, and validation of configuration files.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigPathArg),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `simulate` subcommand.
#[derive(Parser, Debug)]
pub struct SimulateArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Number of risks to generate (overrides config)
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u8).range(1..=MAX_RISKS_PER_SPRINT as i64))]
    pub count: Option<u8>,

    /// Seed the random source for a reproducible sprint
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the `export` subcommand.
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Number of risks to generate (overrides config)
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u8).range(1..=MAX_RISKS_PER_SPRINT as i64))]
    pub count: Option<u8>,

    /// Seed the random source for a reproducible sprint
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file (defaults to a timestamped name in the export directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `check engine` subcommand.
#[derive(Parser, Debug)]
pub struct CheckEngineArgs {
    /// Seed for the deterministic probes
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}
