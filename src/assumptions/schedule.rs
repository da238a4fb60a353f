//! Calendar constants driving the monthly simulation

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;

/// Calendar anchors and windows for promotions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerSchedule {
    /// Simulation anchor; the first simulated month is this date's month
    pub anchor_date: NaiveDate,

    /// Calendar months (1-12) in which vacancy-constrained promotions run
    pub promotion_months: [u32; 2],

    /// Tenure-based promotions never happen before this date
    pub tenure_activation_date: NaiveDate,
}

impl CareerSchedule {
    /// Production calendar: anchor July 2025, promotions in May and November,
    /// tenure policy active from August 2026
    pub fn default_career() -> Self {
        Self {
            anchor_date: date(2025, 7, 1),
            promotion_months: [5, 11],
            tenure_activation_date: date(2026, 8, 1),
        }
    }

    pub fn is_promotion_month(&self, date: NaiveDate) -> bool {
        self.promotion_months.contains(&date.month())
    }

    pub fn tenure_policy_active(&self, date: NaiveDate) -> bool {
        date >= self.tenure_activation_date
    }

    pub fn validate(&self) -> Result<(), ProjectionError> {
        self.promotion_months
            .iter()
            .find(|month| !(1..=12).contains(*month))
            .map_or(Ok(()), |month| Err(ProjectionError::InvalidMonth(*month)))
    }
}

impl Default for CareerSchedule {
    fn default() -> Self {
        Self::default_career()
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
