//! Calculator settings
//!
//! Defaults used when founders or rounds are created without explicit values,
//! and by the breakdown renderer.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{DilutionError, Result};

/// Environment variable naming a settings file.
pub const CONFIG_ENV_VAR: &str = "DILUTION_CONFIG";

/// Founder count used for a fresh founder set.
pub const DEFAULT_FOUNDER_COUNT: usize = 2;
/// Amount raised by a newly appended round.
pub const DEFAULT_ROUND_AMOUNT: f64 = 500_000.0;
/// Post-money valuation of a newly appended round.
pub const DEFAULT_POST_VALUATION: f64 = 2_500_000.0;
/// Decimal places shown for share percentages.
pub const DEFAULT_DISPLAY_PRECISION: usize = 2;

/// User-adjustable defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub default_founder_count: usize,
    pub default_round_amount: f64,
    pub default_post_valuation: f64,
    pub display_precision: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_founder_count: DEFAULT_FOUNDER_COUNT,
            default_round_amount: DEFAULT_ROUND_AMOUNT,
            default_post_valuation: DEFAULT_POST_VALUATION,
            display_precision: DEFAULT_DISPLAY_PRECISION,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DilutionError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&contents)?;
        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from `DILUTION_CONFIG` if set, otherwise use defaults.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(&PathBuf::from(path)),
            None => Ok(Self::default()),
        }
    }

    /// Resolve settings for the CLI: explicit path wins over the environment.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => Self::from_env(),
        }
    }
}
