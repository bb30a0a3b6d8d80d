//! Founders and their starting shares.

use serde::{Deserialize, Serialize};

use crate::error::{DilutionError, Result};

/// A founder and their share of the company, in percent.
///
/// Shares are not range-checked; values outside (0, 100] are carried as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Founder {
    pub id: u32,
    pub share: f64,
}

impl Founder {
    pub fn new(id: u32, share: f64) -> Self {
        Self { id, share }
    }
}

/// Equal share for each of `count` founders, rounded to two decimals.
///
/// `count` must be non-zero.
pub fn equal_share(count: usize) -> f64 {
    ((100.0 / count as f64) * 100.0).round() / 100.0
}

/// Ordered set of founders.
///
/// The whole set is replaced when the founder count changes; individual
/// founders are only ever edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FounderSet {
    founders: Vec<Founder>,
}

impl FounderSet {
    /// Build a set from explicit founders, keeping their order.
    pub fn new(founders: Vec<Founder>) -> Self {
        Self { founders }
    }

    /// Create `count` founders with ids `1..=count` splitting 100% equally.
    pub fn equal_split(count: usize) -> Result<Self> {
        let last_id = match u32::try_from(count) {
            Ok(id) if id > 0 => id,
            _ => return Err(DilutionError::InvalidFounderCount { count }),
        };

        let share = equal_share(count);
        let founders = (1..=last_id).map(|id| Founder::new(id, share)).collect();
        Ok(Self { founders })
    }

    /// Replace the whole set after a founder count change.
    pub fn resize(&mut self, count: usize) -> Result<()> {
        *self = Self::equal_split(count)?;
        Ok(())
    }

    /// Set a single founder's share.
    pub fn set_share(&mut self, id: u32, share: f64) -> Result<()> {
        let founder = self
            .founders
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or(DilutionError::FounderNotFound { id })?;
        founder.share = share;
        Ok(())
    }

    pub fn get(&self, id: u32) -> Option<&Founder> {
        self.founders.iter().find(|f| f.id == id)
    }

    /// Sum of all founder shares.
    pub fn total_share(&self) -> f64 {
        self.founders.iter().map(|f| f.share).sum()
    }

    pub fn as_slice(&self) -> &[Founder] {
        &self.founders
    }

    pub fn iter(&self) -> impl Iterator<Item = &Founder> {
        self.founders.iter()
    }

    pub fn len(&self) -> usize {
        self.founders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.founders.is_empty()
    }
}

impl Default for FounderSet {
    fn default() -> Self {
        let share = equal_share(crate::config::DEFAULT_FOUNDER_COUNT);
        Self {
            founders: (1..=crate::config::DEFAULT_FOUNDER_COUNT as u32)
                .map(|id| Founder::new(id, share))
                .collect(),
        }
    }
}

impl From<Vec<Founder>> for FounderSet {
    fn from(founders: Vec<Founder>) -> Self {
        Self::new(founders)
    }
}
