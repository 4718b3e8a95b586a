//! Result validation
//!
//! A second pass over a finished `ParseResult` deciding whether it is sane
//! to persist. Parsing and validation are deliberately separate tiers:
//! parse answers "did we extract anything", validate answers "should the
//! caller store it".

use serde::{Deserialize, Serialize};

use crate::models::ParseResult;

/// Bounds applied by the validator
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Amounts above this are flagged as likely mis-parses
    pub max_amount: f64,
    /// Descriptions shorter than this are rejected
    pub min_description_chars: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_amount: 1_000_000.0,
            min_description_chars: 2,
        }
    }
}

/// Verdict from the validator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Validation {
    pub is_valid: bool,
    pub message: String,
}

impl Validation {
    fn valid() -> Self {
        Self {
            is_valid: true,
            message: "Valid".to_string(),
        }
    }

    fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }
}

/// Validate a parse result with the standard bounds
pub fn validate(result: &ParseResult) -> Validation {
    validate_with_config(result, &ValidationConfig::default())
}

/// Validate a parse result against explicit bounds
///
/// Rules run in a fixed order and the first failing rule supplies the
/// message, so an unsuccessful parse reports its own error before any
/// bounds are considered.
pub fn validate_with_config(result: &ParseResult, config: &ValidationConfig) -> Validation {
    if !result.success {
        let message = result
            .error
            .clone()
            .unwrap_or_else(|| "Unknown error".to_string());
        return Validation::invalid(message);
    }

    if result.amount <= 0.0 {
        return Validation::invalid("Amount must be greater than zero");
    }

    if result.amount > config.max_amount {
        return Validation::invalid("Amount seems too large. Please verify.");
    }

    if result.description.chars().count() < config.min_description_chars {
        return Validation::invalid("Description too short");
    }

    Validation::valid()
}
