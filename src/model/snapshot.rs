//! Per-round share snapshots produced by the engine.

use serde::{Deserialize, Serialize};

/// One founder's share at a point in the round sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FounderShare {
    pub id: u32,
    pub share: f64,
}

/// Founder shares immediately after a round's dilution is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareSnapshot {
    /// Name of the round that produced this snapshot
    pub round: String,
    pub data: Vec<FounderShare>,
}

impl ShareSnapshot {
    /// Share held by founder `id` after this round.
    pub fn share_of(&self, id: u32) -> Option<f64> {
        self.data.iter().find(|f| f.id == id).map(|f| f.share)
    }
}
