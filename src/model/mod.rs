//! Cap table model
//!
//! Plain owned data handed to the engine: founders with their starting
//! shares, the ordered list of funding rounds, and the snapshots the engine
//! derives from them.

mod founder;
mod round;
mod snapshot;

pub use founder::{equal_share, Founder, FounderSet};
pub use round::{FundingRound, RoundField, RoundList};
pub use snapshot::{FounderShare, ShareSnapshot};
