//! Projection engine for month-stepped career simulations

mod engine;
mod promotion;
mod records;
mod retirement;
mod state;

pub use engine::{run_projection, ProjectionConfig, ProjectionEngine};
pub use promotion::{PromotionPolicy, TenureThresholds};
pub use records::{IncomeRecord, MonthlyDetail, ProjectionResult, RetirementEvent};
pub use retirement::RetirementRule;
pub use state::{Individual, Roster};
