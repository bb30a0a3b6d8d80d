//! CLI Module
//!
//! Command-line interface for the dilution calculator.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Dilution calculator - founder shares across funding rounds
#[derive(Parser, Debug)]
#[command(name = "dilution")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (overrides DILUTION_CONFIG)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate dilution for a scenario file
    #[command(name = "calculate")]
    Calculate {
        /// Path to the scenario JSON
        scenario: PathBuf,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a template scenario file
    #[command(name = "init")]
    Init {
        /// Path for the new scenario
        path: PathBuf,

        /// Number of founders
        #[arg(short, long)]
        founders: Option<usize>,

        /// Number of default funding rounds
        #[arg(short, long, default_value_t = 1)]
        rounds: usize,
    },

    /// Show the equal split for a number of founders
    #[command(name = "split")]
    Split {
        /// Number of founders
        count: usize,
    },
}
