//! Promotion policies applied once per simulated month

mod tenure;
mod vacancy;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use super::state::Roster;
use crate::assumptions::Assumptions;
use crate::error::ProjectionError;
use crate::roster::Rank;

/// Service-year thresholds `[t0, t1, t2]` for the tenure-based policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenureThresholds([u32; 3]);

impl TenureThresholds {
    /// Thresholds must be strictly ascending
    pub fn new(years: [u32; 3]) -> Result<Self, ProjectionError> {
        if years[0] < years[1] && years[1] < years[2] {
            Ok(Self(years))
        } else {
            Err(ProjectionError::NonAscendingThresholds(years))
        }
    }

    pub fn years(&self) -> [u32; 3] {
        self.0
    }

    /// Rank implied by `service_years` of tenure.
    ///
    /// Early-flagged individuals are never held at rank 1.
    pub fn target_rank(&self, service_years: f64, early_promotion: bool) -> Rank {
        let [t0, t1, t2] = self.0.map(f64::from);
        let level = if service_years < t0 {
            if early_promotion { 2 } else { 1 }
        } else if service_years < t1 {
            2
        } else if service_years < t2 {
            3
        } else {
            4
        };
        Rank::new(level).unwrap_or(Rank::TOP)
    }
}

impl Default for TenureThresholds {
    fn default() -> Self {
        Self([5, 10, 15])
    }
}

/// Rule set that decides who moves up each month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionPolicy {
    /// Rank-by-rank promotion bounded by headcount ceilings, twice a year
    VacancyConstrained,
    /// Promotion from elapsed service time, no ceilings
    TenureBased(TenureThresholds),
}

impl PromotionPolicy {
    /// Build a policy from its name and optional thresholds.
    ///
    /// Thresholds are required for the tenure policy and rejected otherwise.
    pub fn from_parts(name: &str, thresholds: Option<[u32; 3]>) -> Result<Self, ProjectionError> {
        let kind: PromotionPolicy = name.parse()?;
        match (kind, thresholds) {
            (PromotionPolicy::VacancyConstrained, None) => Ok(PromotionPolicy::VacancyConstrained),
            (PromotionPolicy::VacancyConstrained, Some(_)) => Err(ProjectionError::UnexpectedThresholds),
            (PromotionPolicy::TenureBased(_), Some(years)) => {
                Ok(PromotionPolicy::TenureBased(TenureThresholds::new(years)?))
            }
            (PromotionPolicy::TenureBased(_), None) => Err(ProjectionError::MissingThresholds),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PromotionPolicy::VacancyConstrained => "vacancy",
            PromotionPolicy::TenureBased(_) => "tenure",
        }
    }

    /// Years added to original rank-1 eligibility dates when the roster is initialized
    pub fn rank_one_eligibility_delay(&self, assumptions: &Assumptions) -> u32 {
        match self {
            PromotionPolicy::VacancyConstrained => assumptions.rank_one_eligibility_delay_years,
            PromotionPolicy::TenureBased(_) => 0,
        }
    }

    /// Apply this month's promotions in place; returns the number promoted
    pub fn apply_monthly_promotions(
        &self,
        roster: &mut Roster,
        date: NaiveDate,
        assumptions: &Assumptions,
    ) -> usize {
        match self {
            PromotionPolicy::VacancyConstrained => vacancy::promote(roster, date, assumptions),
            PromotionPolicy::TenureBased(thresholds) => tenure::promote(roster, date, thresholds, assumptions),
        }
    }
}

impl Default for PromotionPolicy {
    fn default() -> Self {
        PromotionPolicy::VacancyConstrained
    }
}

impl fmt::Display for PromotionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromotionPolicy::VacancyConstrained => f.write_str("vacancy"),
            PromotionPolicy::TenureBased(t) => {
                let [t0, t1, t2] = t.years();
                write!(f, "tenure[{},{},{}]", t0, t1, t2)
            }
        }
    }
}

/// Parses the policy kind; a tenure policy parsed by name carries default thresholds
impl FromStr for PromotionPolicy {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "vacancy" | "vacancy-constrained" => Ok(PromotionPolicy::VacancyConstrained),
            "tenure" | "tenure-based" => Ok(PromotionPolicy::TenureBased(TenureThresholds::default())),
            _ => Err(ProjectionError::UnknownPolicy(s.to_string())),
        }
    }
}
