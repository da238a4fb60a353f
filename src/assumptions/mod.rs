//! Business constants for career projections: income table, headcount
//! ceilings, promotion calendar and tenure rules

mod ceilings;
mod income;
pub mod loader;
mod schedule;

pub use ceilings::HeadcountCeilings;
pub use income::IncomeTable;
pub use schedule::CareerSchedule;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LoadError, ProjectionError};

/// Container for all projection assumptions
///
/// Injected at call time so none of these constants live in the engine's
/// logic paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    pub income: IncomeTable,
    pub ceilings: HeadcountCeilings,
    pub schedule: CareerSchedule,

    /// Calendar years between baseline and retirement
    pub retirement_years: u32,

    /// Baseline offset applied to entrants above rank 1 (years before eligibility)
    pub baseline_offset_years: u32,

    /// Eligibility delay for original rank 1 entrants under the vacancy policy
    pub rank_one_eligibility_delay_years: u32,
}

impl Assumptions {
    /// Create assumptions with the production values
    pub fn default_career() -> Self {
        Self {
            income: IncomeTable::default_career(),
            ceilings: HeadcountCeilings::default_career(),
            schedule: CareerSchedule::default_career(),
            retirement_years: 30,
            baseline_offset_years: 4,
            rank_one_eligibility_delay_years: 3,
        }
    }

    /// Load assumptions from a JSON file; omitted keys keep production values
    pub fn from_json_path(path: &Path) -> Result<Self, LoadError> {
        loader::load_assumptions(path)
    }

    pub fn validate(&self) -> Result<(), ProjectionError> {
        if self.retirement_years == 0 {
            return Err(ProjectionError::InvalidRetirementTenure);
        }
        self.income.validate()?;
        self.ceilings.validate()?;
        self.schedule.validate()
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_career()
    }
}
