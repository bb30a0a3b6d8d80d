//! Dilution CLI
//!
//! Command-line interface for the founder dilution calculator.

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;

use dilution::cli::{commands, Cli, Commands};
use dilution::config::Settings;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    info!("Dilution calculator v{}", env!("CARGO_PKG_VERSION"));

    let settings = Settings::resolve(cli.config.as_deref()).context("failed to load settings")?;

    match cli.command {
        Some(cmd) => handle_command(cmd, &settings),
        None => {
            println!("Dilution calculator v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

fn handle_command(cmd: Commands, settings: &Settings) -> anyhow::Result<()> {
    let result = match cmd {
        Commands::Calculate { scenario, json } => commands::calculate(&scenario, json, settings),
        Commands::Init {
            path,
            founders,
            rounds,
        } => commands::init(&path, founders, rounds, settings),
        Commands::Split { count } => commands::split(count, settings),
    };

    if let Err(err) = &result {
        if let Some(hint) = err.recovery_suggestion() {
            eprintln!("hint: {}", hint);
        }
    }
    Ok(result?)
}
