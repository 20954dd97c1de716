//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level command line interface.
#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "Triage - dependency-aware task prioritization", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Selected subcommand.
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Load configuration from this file instead of .triage/config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a task batch and print the priority ranking
    Analyze {
        /// Path to a JSON or YAML file containing an array of tasks
        file: PathBuf,

        /// Weighting strategy; unknown names fall back to smart_balance
        #[arg(short, long)]
        strategy: Option<String>,

        /// Also print top-N suggestions after ranking; N defaults to the
        /// configured suggestion limit
        #[arg(short, long)]
        top: Option<Option<usize>>,
    },

    /// List the available weighting strategies
    Strategies,
}
