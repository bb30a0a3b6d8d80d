//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::fmt::Write;
use std::path::Path;

use log::info;

use crate::config::Settings;
use crate::engine::{advise, Advisory, Calculation};
use crate::error::Result;
use crate::input::Scenario;
use crate::model::{Founder, FounderSet};
use crate::report::{format_share, BreakdownTable, Report};

/// Calculate dilution for a scenario file and print the breakdown.
pub fn calculate(path: &Path, as_json: bool, settings: &Settings) -> Result<()> {
    info!("Calculating dilution for: {}", path.display());

    let scenario = Scenario::from_path(path)?;
    let founders = scenario.founders.as_slice();
    let calculation = scenario.calculate();
    let advisories = advise(founders, scenario.rounds.as_slice());
    info!(
        "{} rounds skipped, {} advisories",
        calculation.diagnostics.len(),
        advisories.len()
    );

    if as_json {
        let report = Report::new(founders, &calculation, advisories);
        println!("{}", report.to_json_pretty()?);
        return Ok(());
    }

    print!(
        "{}",
        render_text(founders, &calculation, &advisories, settings.display_precision)
    );
    Ok(())
}

/// Plain-text output of `calculate`: table, skipped rounds, advisories.
fn render_text(
    founders: &[Founder],
    calculation: &Calculation,
    advisories: &[Advisory],
    precision: usize,
) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "Shareholding Breakdown");
    let _ = writeln!(out);
    let _ = write!(
        out,
        "{}",
        BreakdownTable::with_precision(founders, calculation, precision)
    );

    if !calculation.diagnostics.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "--- Skipped Rounds ---");
        for diagnostic in &calculation.diagnostics {
            let _ = writeln!(out, "{}", diagnostic);
        }
    }

    if !advisories.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "--- Advisories ---");
        for advisory in advisories {
            let _ = writeln!(out, "{}", advisory);
        }
    }

    out
}

/// Write a template scenario.
pub fn init(path: &Path, founders: Option<usize>, rounds: usize, settings: &Settings) -> Result<()> {
    let count = founders.unwrap_or(settings.default_founder_count);
    info!(
        "Creating scenario at {} ({} founders, {} rounds)",
        path.display(),
        count,
        rounds
    );

    let scenario = Scenario::template(count, rounds, settings)?;
    scenario.to_path(path)?;

    println!("Scenario created: {}", path.display());
    Ok(())
}

/// Print the equal split for `count` founders.
pub fn split(count: usize, settings: &Settings) -> Result<()> {
    let founders = FounderSet::equal_split(count)?;

    for founder in founders.iter() {
        println!(
            "Founder {}: {}",
            founder.id,
            format_share(founder.share, settings.display_precision)
        );
    }
    println!(
        "Total: {}",
        format_share(founders.total_share(), settings.display_precision)
    );

    Ok(())
}
