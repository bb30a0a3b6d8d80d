//! Dilution Engine
//!
//! Applies funding rounds to founder shares in list order. Each processed
//! round multiplies every founder's share by `1 - amount / post_valuation`
//! and records a snapshot. Rounds that fail validation are reported as
//! diagnostics and leave the running shares untouched.
//!
//! The engine is a pure function: no state survives between calls and the
//! caller's founders are never mutated.

mod advisory;
mod diagnostic;

pub use advisory::{advise, Advisory, SHARE_TOTAL_TOLERANCE};
pub use diagnostic::{Diagnostic, DiagnosticKind};

use log::{debug, warn};
use serde::Serialize;

use crate::model::{Founder, FounderShare, FundingRound, ShareSnapshot};

/// Output of a single calculation pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    /// One snapshot per processed round, in round order
    pub results: Vec<ShareSnapshot>,
    /// One entry per skipped round, in round order
    pub diagnostics: Vec<Diagnostic>,
}

impl Calculation {
    /// Shares after the last processed round, if any round was processed.
    pub fn final_shares(&self) -> Option<&ShareSnapshot> {
        self.results.last()
    }

    /// True when no round was skipped.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// First snapshot produced by a round with this name.
    pub fn snapshot(&self, round: &str) -> Option<&ShareSnapshot> {
        self.results.iter().find(|s| s.round == round)
    }
}

/// Run the dilution calculation over `rounds`, starting from `founders`.
pub fn compute(founders: &[Founder], rounds: &[FundingRound]) -> Calculation {
    let mut shares: Vec<FounderShare> = founders
        .iter()
        .map(|f| FounderShare {
            id: f.id,
            share: f.share,
        })
        .collect();
    let mut results = Vec::with_capacity(rounds.len());
    let mut diagnostics = Vec::new();

    for round in rounds {
        // NaN valuations fall through to the finiteness check
        if round.post_valuation <= 0.0 {
            warn!(
                "Skipping round '{}': post-valuation {} is not positive",
                round.name, round.post_valuation
            );
            diagnostics.push(Diagnostic::for_round(
                DiagnosticKind::InvalidPostValuation,
                round,
            ));
            continue;
        }

        let dilution = round.dilution();
        if !dilution.is_finite() {
            warn!(
                "Skipping round '{}': dilution is not finite (amount {}, post-valuation {})",
                round.name, round.amount, round.post_valuation
            );
            diagnostics.push(Diagnostic::for_round(
                DiagnosticKind::DilutionComputationFailed,
                round,
            ));
            continue;
        }

        let retained = 1.0 - dilution;
        for founder in &mut shares {
            founder.share *= retained;
        }

        debug!("Applied round '{}' with dilution {:.6}", round.name, dilution);
        results.push(ShareSnapshot {
            round: round.name.clone(),
            data: shares.clone(),
        });
    }

    Calculation {
        results,
        diagnostics,
    }
}
