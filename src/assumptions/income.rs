//! Monthly income by rank

use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;
use crate::roster::Rank;

/// Fixed rank → monthly income table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IncomeTable {
    /// Monthly income by rank (index 0 = rank 1)
    monthly: [f64; 4],
}

impl IncomeTable {
    pub fn new(monthly: [f64; 4]) -> Self {
        Self { monthly }
    }

    /// Production salary table
    pub fn default_career() -> Self {
        Self::new([27_737.24, 31_699.35, 35_661.47, 39_623.58])
    }

    /// Monthly income paid at a given rank
    pub fn monthly_income(&self, rank: Rank) -> f64 {
        self.monthly[rank.index()]
    }

    pub fn validate(&self) -> Result<(), ProjectionError> {
        for rank in Rank::ALL {
            let amount = self.monthly_income(rank);
            if !amount.is_finite() || amount < 0.0 {
                return Err(ProjectionError::InvalidIncome {
                    rank: rank.level(),
                    amount,
                });
            }
        }
        Ok(())
    }
}

impl Default for IncomeTable {
    fn default() -> Self {
        Self::default_career()
    }
}
