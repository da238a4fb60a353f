//! Error types for projection configuration, roster validation and input loading

use thiserror::Error;

use crate::roster::SubPopulation;

/// Errors raised before a projection run starts.
///
/// Every variant is detected up front, so a run either rejects its inputs
/// entirely or completes all of its months.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    #[error("horizon must be at least one year, got {0}")]
    InvalidHorizon(u32),

    #[error("annual discount rate must be finite and non-negative, got {0}")]
    InvalidDiscountRate(f64),

    #[error("tenure thresholds must be strictly ascending, got {0:?}")]
    NonAscendingThresholds([u32; 3]),

    #[error("unknown promotion policy '{0}' (expected 'vacancy' or 'tenure')")]
    UnknownPolicy(String),

    #[error("tenure-based policy requires three thresholds")]
    MissingThresholds,

    #[error("vacancy-constrained policy does not take tenure thresholds")]
    UnexpectedThresholds,

    #[error("invalid calendar month {0}")]
    InvalidMonth(u32),

    #[error("monthly income for rank {rank} must be finite and non-negative, got {amount}")]
    InvalidIncome { rank: u8, amount: f64 },

    #[error("no headcount ceilings configured for sub-population '{0}'")]
    MissingCeilings(SubPopulation),

    #[error("retirement tenure must be at least one year")]
    InvalidRetirementTenure,

    #[error("individual {id}: rank {rank} is outside 1..=4")]
    InvalidRank { id: u64, rank: u8 },

    #[error("individual {id}: unknown sub-population '{value}'")]
    UnknownSubPopulation { id: u64, value: String },

    #[error("individual {0}: missing eligibility date")]
    MissingEligibilityDate(u64),

    #[error("duplicate individual id {0}")]
    DuplicateId(u64),

    #[error("individual {0}: derived date is out of range")]
    DateOutOfRange(u64),
}

/// Errors raised while reading rosters and assumption files or writing reports.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("row {row}: invalid {field} '{value}'")]
    InvalidField {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error(transparent)]
    Invalid(#[from] ProjectionError),
}
