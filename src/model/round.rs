//! Funding rounds
//!
//! List order is processing order. Ids are assigned from the list length at
//! creation time and are never renumbered, so they can repeat after a delete.

use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::{DilutionError, Result};

/// A single priced funding round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingRound {
    pub id: u32,
    pub name: String,
    /// Capital raised in the round
    pub amount: f64,
    /// Post-money valuation; rounds with a non-positive value are skipped
    pub post_valuation: f64,
}

impl FundingRound {
    pub fn new(id: u32, name: impl Into<String>, amount: f64, post_valuation: f64) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
            post_valuation,
        }
    }

    /// Fraction of the company sold in this round.
    ///
    /// Not guarded: a zero valuation yields an infinite or NaN ratio.
    pub fn dilution(&self) -> f64 {
        self.amount / self.post_valuation
    }
}

/// A single-field edit to a round.
#[derive(Debug, Clone, PartialEq)]
pub enum RoundField {
    Name(String),
    Amount(f64),
    PostValuation(f64),
}

/// Ordered list of funding rounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundList {
    rounds: Vec<FundingRound>,
}

impl RoundList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { rounds: Vec::new() }
    }

    /// Build a list from explicit rounds, keeping their order.
    pub fn from_rounds(rounds: Vec<FundingRound>) -> Self {
        Self { rounds }
    }

    /// Append a round using the built-in defaults.
    pub fn append(&mut self) -> &FundingRound {
        self.append_with(&Settings::default())
    }

    /// Append a round using the amount and valuation from `settings`.
    pub fn append_with(&mut self, settings: &Settings) -> &FundingRound {
        let number = self.rounds.len() as u32 + 1;
        self.rounds.push(FundingRound::new(
            number,
            format!("Round {}", number),
            settings.default_round_amount,
            settings.default_post_valuation,
        ));
        &self.rounds[self.rounds.len() - 1]
    }

    /// Remove every round carrying `id`.
    ///
    /// # Returns
    /// The number of rounds removed
    pub fn delete(&mut self, id: u32) -> usize {
        let before = self.rounds.len();
        self.rounds.retain(|r| r.id != id);
        before - self.rounds.len()
    }

    /// Apply a field edit to the round at `index`.
    pub fn update(&mut self, index: usize, field: RoundField) -> Result<()> {
        let len = self.rounds.len();
        let round = self
            .rounds
            .get_mut(index)
            .ok_or(DilutionError::RoundIndexOutOfRange { index, len })?;

        match field {
            RoundField::Name(name) => round.name = name,
            RoundField::Amount(amount) => round.amount = amount,
            RoundField::PostValuation(value) => round.post_valuation = value,
        }
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&FundingRound> {
        self.rounds.get(index)
    }

    pub fn as_slice(&self) -> &[FundingRound] {
        &self.rounds
    }

    pub fn iter(&self) -> impl Iterator<Item = &FundingRound> {
        self.rounds.iter()
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}

impl Default for RoundList {
    /// A list holding one default round, ready to calculate.
    fn default() -> Self {
        let mut list = Self::new();
        list.append();
        list
    }
}

impl From<Vec<FundingRound>> for RoundList {
    fn from(rounds: Vec<FundingRound>) -> Self {
        Self::from_rounds(rounds)
    }
}
