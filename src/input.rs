//! Input boundary
//!
//! Raw text from forms or files is coerced here, before anything reaches the
//! engine. An empty field is a legitimate in-progress edit (`Pending`), but it
//! has to be filled in before a founder or round can be built from it.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::engine::{self, Calculation};
use crate::error::{DilutionError, Result};
use crate::model::{Founder, FounderSet, FundingRound, RoundList};

/// A numeric field as typed so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    /// Field is empty, the user is still editing
    Pending,
    Number(f64),
}

impl FieldValue {
    /// The number, or `MissingValue` if the field is still empty.
    pub fn require(self, field: &str) -> Result<f64> {
        match self {
            FieldValue::Number(value) => Ok(value),
            FieldValue::Pending => Err(DilutionError::MissingValue {
                field: field.to_string(),
            }),
        }
    }
}

/// Parse a raw numeric field. Surrounding whitespace is ignored.
pub fn parse_field(field: &str, raw: &str) -> Result<FieldValue> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(FieldValue::Pending);
    }

    trimmed
        .parse::<f64>()
        .map(FieldValue::Number)
        .map_err(|_| DilutionError::InvalidNumber {
            field: field.to_string(),
            value: raw.to_string(),
        })
}

/// Founder form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFounder {
    pub id: u32,
    pub share: String,
}

impl TryFrom<&RawFounder> for Founder {
    type Error = DilutionError;

    fn try_from(raw: &RawFounder) -> Result<Self> {
        let field = format!("founder {} share", raw.id);
        let share = parse_field(&field, &raw.share)?.require(&field)?;
        Ok(Founder::new(raw.id, share))
    }
}

/// Round form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRound {
    pub id: u32,
    pub name: String,
    pub amount: String,
    pub post_valuation: String,
}

impl TryFrom<&RawRound> for FundingRound {
    type Error = DilutionError;

    fn try_from(raw: &RawRound) -> Result<Self> {
        let amount_field = format!("round {} amount", raw.name);
        let valuation_field = format!("round {} post-valuation", raw.name);

        let amount = parse_field(&amount_field, &raw.amount)?.require(&amount_field)?;
        let post_valuation =
            parse_field(&valuation_field, &raw.post_valuation)?.require(&valuation_field)?;

        Ok(FundingRound::new(raw.id, raw.name.clone(), amount, post_valuation))
    }
}

/// Parse a founder count field. Empty means the user is still typing.
pub fn parse_founder_count(raw: &str) -> Result<Option<usize>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let count = trimmed
        .parse::<usize>()
        .map_err(|_| DilutionError::InvalidNumber {
            field: "number of founders".to_string(),
            value: raw.to_string(),
        })?;
    if count == 0 {
        return Err(DilutionError::InvalidFounderCount { count });
    }
    Ok(Some(count))
}

/// A complete set of calculator inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub founders: FounderSet,
    #[serde(default = "RoundList::new")]
    pub rounds: RoundList,
}

impl Scenario {
    pub fn new(founders: FounderSet, rounds: RoundList) -> Self {
        Self { founders, rounds }
    }

    /// Template scenario: equal split across `founders`, `rounds` default rounds.
    pub fn template(founders: usize, rounds: usize, settings: &Settings) -> Result<Self> {
        let founders = FounderSet::equal_split(founders)?;
        let mut list = RoundList::new();
        for _ in 0..rounds {
            list.append_with(settings);
        }
        Ok(Self::new(founders, list))
    }

    /// Build a scenario from raw form state.
    pub fn from_raw(founders: &[RawFounder], rounds: &[RawRound]) -> Result<Self> {
        let founders = founders
            .iter()
            .map(Founder::try_from)
            .collect::<Result<Vec<_>>>()?;
        let rounds = rounds
            .iter()
            .map(FundingRound::try_from)
            .collect::<Result<Vec<_>>>()?;

        let scenario = Self::new(FounderSet::new(founders), RoundList::from_rounds(rounds));
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let scenario: Scenario = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Load a scenario from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DilutionError::ScenarioNotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = fs::read_to_string(path)?;
        let scenario = Self::from_json_str(&contents)?;
        info!(
            "Loaded scenario {} ({} founders, {} rounds)",
            path.display(),
            scenario.founders.len(),
            scenario.rounds.len()
        );
        Ok(scenario)
    }

    /// Write the scenario as pretty JSON. Never overwrites an existing file.
    pub fn to_path(&self, path: &Path) -> Result<()> {
        if path.exists() {
            return Err(DilutionError::ScenarioExists {
                path: path.to_path_buf(),
            });
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        debug!("Wrote scenario to {}", path.display());
        Ok(())
    }

    /// Run the engine over this scenario.
    pub fn calculate(&self) -> Calculation {
        engine::compute(self.founders.as_slice(), self.rounds.as_slice())
    }

    fn validate(&self) -> Result<()> {
        if self.founders.is_empty() {
            return Err(DilutionError::InvalidFounderCount { count: 0 });
        }

        // Snapshots are looked up by founder id
        let mut seen = BTreeSet::new();
        if let Some(founder) = self.founders.iter().find(|f| !seen.insert(f.id)) {
            return Err(DilutionError::DuplicateFounderId { id: founder.id });
        }
        Ok(())
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new(FounderSet::default(), RoundList::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("", FieldValue::Pending ; "empty")]
    #[test_case("   ", FieldValue::Pending ; "whitespace")]
    #[test_case("2500000", FieldValue::Number(2_500_000.0) ; "integer")]
    #[test_case(" 12.5 ", FieldValue::Number(12.5) ; "padded decimal")]
    #[test_case("-3", FieldValue::Number(-3.0) ; "negative")]
    #[test_case("1e6", FieldValue::Number(1_000_000.0) ; "exponent")]
    fn test_parse_field(raw: &str, expected: FieldValue) {
        assert_eq!(parse_field("amount", raw).unwrap(), expected);
    }

    #[test]
    fn test_parse_field_rejects_text() {
        let err = parse_field("amount", "lots").unwrap_err();
        assert_eq!(err.to_string(), "Invalid number for amount: 'lots'");
    }

    #[test]
    fn test_pending_required() {
        let err = FieldValue::Pending.require("share").unwrap_err();
        assert_eq!(err.error_code(), "MISSING_VALUE");
    }

    #[test]
    fn test_raw_round_conversion() {
        let raw = RawRound {
            id: 1,
            name: "Seed".to_string(),
            amount: "500000".to_string(),
            post_valuation: "2500000".to_string(),
        };
        let round = FundingRound::try_from(&raw).unwrap();
        assert_relative_eq!(round.dilution(), 0.2);
    }

    #[test]
    fn test_raw_round_pending_field() {
        let raw = RawRound {
            id: 1,
            name: "Seed".to_string(),
            amount: "500000".to_string(),
            post_valuation: "".to_string(),
        };
        let err = FundingRound::try_from(&raw).unwrap_err();
        assert_eq!(err.to_string(), "Missing value for round Seed post-valuation");
    }

    #[test_case("", None ; "pending")]
    #[test_case("3", Some(3) ; "three")]
    fn test_parse_founder_count(raw: &str, expected: Option<usize>) {
        assert_eq!(parse_founder_count(raw).unwrap(), expected);
    }

    #[test]
    fn test_parse_founder_count_zero() {
        assert!(parse_founder_count("0").is_err());
        assert!(parse_founder_count("two").is_err());
    }

    #[test]
    fn test_from_raw() {
        let founders = vec![
            RawFounder {
                id: 1,
                share: "60".to_string(),
            },
            RawFounder {
                id: 2,
                share: "40".to_string(),
            },
        ];
        let rounds = vec![RawRound {
            id: 1,
            name: "Seed".to_string(),
            amount: "500000".to_string(),
            post_valuation: "2500000".to_string(),
        }];

        let scenario = Scenario::from_raw(&founders, &rounds).unwrap();
        let calc = scenario.calculate();
        assert_relative_eq!(calc.results[0].share_of(1).unwrap(), 48.0, epsilon = 1e-9);
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "founders": [{"id": 1, "share": 100}],
            "rounds": [{"id": 1, "name": "Seed", "amount": 200, "postValuation": 1000}]
        }"#;
        let scenario = Scenario::from_json_str(json).unwrap();
        assert_eq!(scenario.rounds.get(0).unwrap().name, "Seed");
    }

    #[test]
    fn test_from_json_str_rounds_optional() {
        let json = r#"{"founders": [{"id": 1, "share": 100}]}"#;
        let scenario = Scenario::from_json_str(json).unwrap();
        assert!(scenario.rounds.is_empty());
    }

    #[test]
    fn test_from_json_str_requires_founders() {
        let err = Scenario::from_json_str(r#"{"founders": [], "rounds": []}"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_FOUNDER_COUNT");
    }

    #[test]
    fn test_from_json_str_rejects_duplicate_founder_ids() {
        let json = r#"{
            "founders": [{"id": 1, "share": 60}, {"id": 1, "share": 40}],
            "rounds": [{"id": 1, "name": "Seed", "amount": 200, "postValuation": 1000}]
        }"#;
        let err = Scenario::from_json_str(json).unwrap_err();
        assert_eq!(err.error_code(), "DUPLICATE_FOUNDER_ID");
        assert_eq!(err.to_string(), "Founder id 1 is used more than once");
    }

    #[test]
    fn test_from_raw_rejects_duplicate_founder_ids() {
        let founders = vec![
            RawFounder {
                id: 2,
                share: "50".to_string(),
            },
            RawFounder {
                id: 2,
                share: "50".to_string(),
            },
        ];
        let err = Scenario::from_raw(&founders, &[]).unwrap_err();
        assert_eq!(err.error_code(), "DUPLICATE_FOUNDER_ID");
    }

    #[test]
    fn test_template() {
        let scenario = Scenario::template(3, 2, &Settings::default()).unwrap();
        assert_eq!(scenario.founders.len(), 3);
        let names: Vec<&str> = scenario.rounds.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Round 1", "Round 2"]);
    }

    #[test]
    fn test_path_round_trip_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.json");

        let scenario = Scenario::default();
        scenario.to_path(&path).unwrap();
        assert_eq!(Scenario::from_path(&path).unwrap(), scenario);

        let err = scenario.to_path(&path).unwrap_err();
        assert_eq!(err.error_code(), "SCENARIO_EXISTS");
    }

    #[test]
    fn test_from_path_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = Scenario::from_path(&dir.path().join("missing.json")).unwrap_err();
        assert_eq!(err.error_code(), "SCENARIO_NOT_FOUND");
    }
}
