//! Career Projection - month-stepped career and income projections for
//! civil-service experts
//!
//! This library provides:
//! - Roster loading and validation
//! - Retirement and promotion rules (vacancy-constrained and tenure-based)
//! - Present-value discounting of projected income
//! - Per-individual, per-cohort and scenario-level aggregation

pub mod assumptions;
pub mod calendar;
pub mod error;
pub mod projection;
pub mod report;
pub mod roster;
pub mod scenario;
pub mod valuation;

// Re-export commonly used types
pub use assumptions::Assumptions;
pub use error::{LoadError, ProjectionError};
pub use projection::{
    run_projection, ProjectionConfig, ProjectionEngine, ProjectionResult, PromotionPolicy, TenureThresholds,
};
pub use roster::{IndividualInput, Rank, SubPopulation};
pub use scenario::ScenarioRunner;
