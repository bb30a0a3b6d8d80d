//! Advisories for accepted-but-suspicious input
//!
//! The engine deliberately carries founder shares that do not sum to 100,
//! negative raises and ratios of one or more straight through the math.
//! `advise` points them out without changing what `compute` returns.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::model::{Founder, FundingRound};

/// How far the founder total may drift from 100% before it is flagged.
///
/// Equal splits are rounded to two decimals, so e.g. seven founders at
/// 14.29% total 100.03%.
pub const SHARE_TOTAL_TOLERANCE: f64 = 0.5;

/// A non-gating note about the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Advisory {
    ShareTotalMismatch { total: f64 },
    ShareOutOfRange { founder_id: u32, share: f64 },
    NegativeAmount { round: String, amount: f64 },
    DilutionAtLeastOne { round: String, dilution: f64 },
    DuplicateRoundId { id: u32 },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::ShareTotalMismatch { total } => {
                write!(f, "Founder shares sum to {:.2}%, not 100%", total)
            }
            Advisory::ShareOutOfRange { founder_id, share } => {
                write!(f, "Founder {} share {}% is outside (0, 100]", founder_id, share)
            }
            Advisory::NegativeAmount { round, amount } => {
                write!(f, "Round {} raises a negative amount ({})", round, amount)
            }
            Advisory::DilutionAtLeastOne { round, dilution } => write!(
                f,
                "Round {} dilutes by {:.2}%, which wipes out or inverts founder shares",
                round,
                dilution * 100.0
            ),
            Advisory::DuplicateRoundId { id } => {
                write!(f, "Round id {} is used more than once", id)
            }
        }
    }
}

/// Collect advisories for a founder set and round list.
pub fn advise(founders: &[Founder], rounds: &[FundingRound]) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    if !founders.is_empty() {
        let total: f64 = founders.iter().map(|f| f.share).sum();
        if (total - 100.0).abs() > SHARE_TOTAL_TOLERANCE {
            advisories.push(Advisory::ShareTotalMismatch { total });
        }
    }

    for founder in founders {
        if !(founder.share > 0.0 && founder.share <= 100.0) {
            advisories.push(Advisory::ShareOutOfRange {
                founder_id: founder.id,
                share: founder.share,
            });
        }
    }

    for round in rounds {
        if round.amount < 0.0 {
            advisories.push(Advisory::NegativeAmount {
                round: round.name.clone(),
                amount: round.amount,
            });
        }

        if round.post_valuation > 0.0 {
            let dilution = round.dilution();
            if dilution.is_finite() && dilution >= 1.0 {
                advisories.push(Advisory::DilutionAtLeastOne {
                    round: round.name.clone(),
                    dilution,
                });
            }
        }
    }

    let mut id_counts: BTreeMap<u32, usize> = BTreeMap::new();
    for round in rounds {
        *id_counts.entry(round.id).or_default() += 1;
    }
    advisories.extend(
        id_counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(id, _)| Advisory::DuplicateRoundId { id }),
    );

    advisories
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clean_input() {
        let founders = vec![Founder::new(1, 60.0), Founder::new(2, 40.0)];
        let rounds = vec![FundingRound::new(1, "Seed", 500_000.0, 2_500_000.0)];
        assert!(advise(&founders, &rounds).is_empty());
    }

    #[test]
    fn test_rounded_split_within_tolerance() {
        let thirds: Vec<Founder> = (1..=3).map(|id| Founder::new(id, 33.33)).collect();
        assert!(advise(&thirds, &[]).is_empty());

        let sevenths: Vec<Founder> = (1..=7).map(|id| Founder::new(id, 14.29)).collect();
        assert!(advise(&sevenths, &[]).is_empty());
    }

    #[test]
    fn test_share_total_mismatch() {
        let founders = vec![Founder::new(1, 70.0), Founder::new(2, 40.0)];
        assert_eq!(
            advise(&founders, &[]),
            vec![Advisory::ShareTotalMismatch { total: 110.0 }]
        );
    }

    #[test]
    fn test_share_out_of_range() {
        let founders = vec![Founder::new(1, 120.0), Founder::new(2, -20.0)];
        let advisories = advise(&founders, &[]);
        assert_eq!(
            advisories,
            vec![
                Advisory::ShareOutOfRange {
                    founder_id: 1,
                    share: 120.0
                },
                Advisory::ShareOutOfRange {
                    founder_id: 2,
                    share: -20.0
                },
            ]
        );
    }

    #[test]
    fn test_round_advisories() {
        let founders = vec![Founder::new(1, 100.0)];
        let rounds = vec![
            FundingRound::new(1, "Buyback", -10.0, 100.0),
            FundingRound::new(1, "Wipeout", 100.0, 100.0),
            FundingRound::new(3, "Invalid", 100.0, 0.0),
        ];

        let advisories = advise(&founders, &rounds);
        assert_eq!(
            advisories,
            vec![
                Advisory::NegativeAmount {
                    round: "Buyback".to_string(),
                    amount: -10.0
                },
                Advisory::DilutionAtLeastOne {
                    round: "Wipeout".to_string(),
                    dilution: 1.0
                },
                Advisory::DuplicateRoundId { id: 1 },
            ]
        );
    }

    #[test]
    fn test_serialized_keys_are_camel_case() {
        let json = serde_json::to_value(Advisory::ShareOutOfRange {
            founder_id: 1,
            share: 120.0,
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "shareOutOfRange", "founderId": 1, "share": 120.0})
        );
    }

    #[test]
    fn test_display() {
        let advisory = Advisory::DilutionAtLeastOne {
            round: "Seed".to_string(),
            dilution: 1.5,
        };
        assert_eq!(
            advisory.to_string(),
            "Round Seed dilutes by 150.00%, which wipes out or inverts founder shares"
        );
    }
}
