//! Round-scoped diagnostics
//!
//! A diagnostic records why a round was left out of the results. It never
//! stops the calculation; the caller decides how to surface it.

use std::fmt;

use serde::Serialize;

use crate::model::FundingRound;

/// Why a round was skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticKind {
    /// Post-money valuation was zero or negative
    InvalidPostValuation,
    /// The dilution ratio was NaN or infinite
    DilutionComputationFailed,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::InvalidPostValuation => "InvalidPostValuation",
            DiagnosticKind::DilutionComputationFailed => "DilutionComputationFailed",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A skipped round together with the values that caused the skip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Name of the skipped round
    pub round: String,
    pub amount: f64,
    pub post_valuation: f64,
}

impl Diagnostic {
    pub(crate) fn for_round(kind: DiagnosticKind, round: &FundingRound) -> Self {
        Self {
            kind,
            round: round.name.clone(),
            amount: round.amount,
            post_valuation: round.post_valuation,
        }
    }

    /// Notification text for this diagnostic.
    pub fn message(&self) -> String {
        match self.kind {
            DiagnosticKind::InvalidPostValuation => format!(
                "Post-valuation for round {} is zero or negative, which is invalid for dilution calculations.",
                self.round
            ),
            DiagnosticKind::DilutionComputationFailed => format!(
                "Dilution calculation failed for round {}. Amount: {}, Post-Valuation: {}",
                self.round, self.amount, self.post_valuation
            ),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
