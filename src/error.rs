//! Error handling for the dilution calculator
//!
//! The engine never fails: invalid rounds become diagnostics. These errors
//! belong to the input boundary, the scenario files and the configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for dilution operations
pub type Result<T> = std::result::Result<T, DilutionError>;

/// Main error type for dilution operations
#[derive(Error, Debug)]
pub enum DilutionError {
    // Input Errors
    #[error("Invalid number for {field}: '{value}'")]
    InvalidNumber { field: String, value: String },

    #[error("Missing value for {field}")]
    MissingValue { field: String },

    #[error("Invalid founder count: {count} (at least one founder is required)")]
    InvalidFounderCount { count: usize },

    #[error("Founder not found: {id}")]
    FounderNotFound { id: u32 },

    #[error("Founder id {id} is used more than once")]
    DuplicateFounderId { id: u32 },

    #[error("Round index {index} out of range ({len} rounds)")]
    RoundIndexOutOfRange { index: usize, len: usize },

    // Scenario Errors
    #[error("Scenario file not found: {path}")]
    ScenarioNotFound { path: PathBuf },

    #[error("Scenario file already exists: {path}")]
    ScenarioExists { path: PathBuf },

    // Config Errors
    #[error("Config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DilutionError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            DilutionError::InvalidNumber { .. } => "INVALID_NUMBER",
            DilutionError::MissingValue { .. } => "MISSING_VALUE",
            DilutionError::InvalidFounderCount { .. } => "INVALID_FOUNDER_COUNT",
            DilutionError::FounderNotFound { .. } => "FOUNDER_NOT_FOUND",
            DilutionError::DuplicateFounderId { .. } => "DUPLICATE_FOUNDER_ID",
            DilutionError::RoundIndexOutOfRange { .. } => "ROUND_INDEX_OUT_OF_RANGE",
            DilutionError::ScenarioNotFound { .. } => "SCENARIO_NOT_FOUND",
            DilutionError::ScenarioExists { .. } => "SCENARIO_EXISTS",
            DilutionError::ConfigNotFound { .. } => "CONFIG_NOT_FOUND",
            DilutionError::Io(_) => "IO_ERROR",
            DilutionError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Returns a user-friendly recovery suggestion.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            DilutionError::InvalidNumber { .. } => Some("Enter a plain decimal number, e.g. 2500000."),
            DilutionError::MissingValue { .. } => Some("Fill in every founder share and round field."),
            DilutionError::InvalidFounderCount { .. } => Some("Use at least one founder."),
            DilutionError::DuplicateFounderId { .. } => Some("Give every founder a distinct id."),
            DilutionError::ScenarioNotFound { .. } => {
                Some("Create a template with 'dilution-cli init <path>'.")
            }
            DilutionError::ScenarioExists { .. } => {
                Some("Choose another path or remove the existing file first.")
            }
            DilutionError::ConfigNotFound { .. } => {
                Some("Check the --config path or unset DILUTION_CONFIG.")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DilutionError::InvalidNumber {
            field: "amount".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(err.error_code(), "INVALID_NUMBER");
        assert_eq!(err.to_string(), "Invalid number for amount: 'abc'");
    }

    #[test]
    fn test_recovery_suggestions() {
        let err = DilutionError::ScenarioNotFound {
            path: PathBuf::from("missing.json"),
        };
        assert!(err.recovery_suggestion().is_some());

        let err = DilutionError::FounderNotFound { id: 9 };
        assert!(err.recovery_suggestion().is_none());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: DilutionError = io.into();
        assert_eq!(err.error_code(), "IO_ERROR");
    }
}
