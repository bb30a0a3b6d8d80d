//! Shareholding breakdown
//!
//! Renders a calculation as a table with an `Initial` column followed by one
//! column per processed round, plus the serializable JSON report.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::DEFAULT_DISPLAY_PRECISION;
use crate::engine::{Advisory, Calculation, DiagnosticKind};
use crate::model::{Founder, ShareSnapshot};

/// Format a share percentage, e.g. `48.00%`.
pub fn format_share(share: f64, precision: usize) -> String {
    format!("{:.*}%", precision, share)
}

/// Founder-by-round share table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl BreakdownTable {
    /// Build the table using the default two-decimal precision.
    pub fn new(founders: &[Founder], calculation: &Calculation) -> Self {
        Self::with_precision(founders, calculation, DEFAULT_DISPLAY_PRECISION)
    }

    pub fn with_precision(founders: &[Founder], calculation: &Calculation, precision: usize) -> Self {
        let mut header = vec!["Founder".to_string(), "Initial".to_string()];
        header.extend(calculation.results.iter().map(|s| s.round.clone()));

        let rows = founders
            .iter()
            .map(|founder| {
                let mut row = vec![
                    format!("Founder {}", founder.id),
                    format_share(founder.share, precision),
                ];
                row.extend(calculation.results.iter().map(|snapshot| {
                    snapshot
                        .share_of(founder.id)
                        .map(|share| format_share(share, precision))
                        .unwrap_or_default()
                }));
                row
            })
            .collect();

        Self { header, rows }
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.header.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

impl fmt::Display for BreakdownTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        let write_row = |f: &mut fmt::Formatter<'_>, cells: &[String]| -> fmt::Result {
            let line: Vec<String> = cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = width))
                .collect();
            writeln!(f, "{}", line.join("  ").trim_end())
        };

        write_row(f, &self.header)?;
        let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        writeln!(f, "{:-<1$}", "", total)?;
        for row in &self.rows {
            write_row(f, row)?;
        }
        Ok(())
    }
}

/// Diagnostic entry as it appears in the JSON report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticEntry {
    pub kind: DiagnosticKind,
    pub round: String,
    pub amount: f64,
    pub post_valuation: f64,
    pub message: String,
}

/// Full machine-readable result of one calculation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub initial: Vec<Founder>,
    pub results: Vec<ShareSnapshot>,
    pub diagnostics: Vec<DiagnosticEntry>,
    pub advisories: Vec<Advisory>,
}

impl Report {
    pub fn new(founders: &[Founder], calculation: &Calculation, advisories: Vec<Advisory>) -> Self {
        let diagnostics = calculation
            .diagnostics
            .iter()
            .map(|d| DiagnosticEntry {
                kind: d.kind,
                round: d.round.clone(),
                amount: d.amount,
                post_valuation: d.post_valuation,
                message: d.message(),
            })
            .collect();

        Self {
            generated_at: Utc::now(),
            initial: founders.to_vec(),
            results: calculation.results.clone(),
            diagnostics,
            advisories,
        }
    }

    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute;
    use crate::model::FundingRound;
    use pretty_assertions::assert_eq;

    fn sample() -> (Vec<Founder>, Calculation) {
        let founders = vec![Founder::new(1, 60.0), Founder::new(2, 40.0)];
        let rounds = vec![
            FundingRound::new(1, "Seed", 500_000.0, 2_500_000.0),
            FundingRound::new(2, "Broken", 500_000.0, 0.0),
        ];
        let calc = compute(&founders, &rounds);
        (founders, calc)
    }

    #[test]
    fn test_format_share() {
        assert_eq!(format_share(48.0, 2), "48.00%");
        assert_eq!(format_share(33.333, 1), "33.3%");
    }

    #[test]
    fn test_table_columns_follow_processed_rounds() {
        let (founders, calc) = sample();
        let table = BreakdownTable::new(&founders, &calc);

        assert_eq!(table.header(), &["Founder", "Initial", "Seed"]);
        assert_eq!(
            table.rows(),
            &[
                vec!["Founder 1".to_string(), "60.00%".to_string(), "48.00%".to_string()],
                vec!["Founder 2".to_string(), "40.00%".to_string(), "32.00%".to_string()],
            ]
        );
    }

    #[test]
    fn test_table_missing_founder_cell_empty() {
        let founders = vec![Founder::new(1, 100.0)];
        let calc = compute(&founders, &[FundingRound::new(1, "Seed", 1.0, 10.0)]);
        let extra = vec![Founder::new(1, 100.0), Founder::new(9, 5.0)];

        let table = BreakdownTable::new(&extra, &calc);
        assert_eq!(table.rows()[1][2], "");
    }

    #[test]
    fn test_table_display() {
        let (founders, calc) = sample();
        let rendered = BreakdownTable::new(&founders, &calc).to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Founder    Initial  Seed");
        assert_eq!(lines[1], "-".repeat(26));
        assert_eq!(lines[2], "Founder 1  60.00%   48.00%");
        assert_eq!(lines[3], "Founder 2  40.00%   32.00%");
    }

    #[test]
    fn test_report_json() {
        let (founders, calc) = sample();
        let report = Report::new(&founders, &calc, Vec::new());
        let json: serde_json::Value =
            serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();

        assert_eq!(json["results"][0]["round"], "Seed");
        assert_eq!(json["diagnostics"][0]["kind"], "InvalidPostValuation");
        assert_eq!(json["diagnostics"][0]["postValuation"], 0.0);
        assert!(json["generatedAt"].is_string());
    }
}
