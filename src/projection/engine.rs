//! Monthly simulation driver for career projections

use chrono::NaiveDate;

use super::promotion::PromotionPolicy;
use super::records::{IncomeRecord, ProjectionResult, RetirementEvent};
use super::retirement::RetirementRule;
use super::state::Roster;
use crate::assumptions::Assumptions;
use crate::calendar;
use crate::error::ProjectionError;
use crate::roster::{IndividualInput, Rank, SubPopulation};
use crate::valuation::DiscountCurve;

/// Configuration for a projection run
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionConfig {
    /// Number of years to simulate (12 months each)
    pub horizon_years: u32,

    /// Promotion rule set
    pub policy: PromotionPolicy,

    /// Annual rate used to discount income to the first simulated month
    pub annual_discount_rate: f64,
}

impl ProjectionConfig {
    pub fn new(horizon_years: u32, policy: PromotionPolicy, annual_discount_rate: f64) -> Self {
        Self {
            horizon_years,
            policy,
            annual_discount_rate,
        }
    }

    pub fn validate(&self) -> Result<(), ProjectionError> {
        if self.horizon_years == 0 {
            return Err(ProjectionError::InvalidHorizon(self.horizon_years));
        }
        if !self.annual_discount_rate.is_finite() || self.annual_discount_rate < 0.0 {
            return Err(ProjectionError::InvalidDiscountRate(self.annual_discount_rate));
        }
        Ok(())
    }

    pub fn months(&self) -> u32 {
        self.horizon_years.saturating_mul(12)
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizon_years: 35,
            policy: PromotionPolicy::VacancyConstrained,
            annual_discount_rate: 0.06,
        }
    }
}

/// Main projection engine
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    assumptions: Assumptions,
    config: ProjectionConfig,
    curve: DiscountCurve,
}

impl ProjectionEngine {
    /// Create an engine, rejecting invalid configuration before any month runs
    pub fn new(assumptions: Assumptions, config: ProjectionConfig) -> Result<Self, ProjectionError> {
        config.validate()?;
        assumptions.validate()?;
        let curve = DiscountCurve::single_rate(config.annual_discount_rate)?;
        Ok(Self {
            assumptions,
            config,
            curve,
        })
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Run the full horizon for a roster
    pub fn project(&self, inputs: &[IndividualInput]) -> Result<ProjectionResult, ProjectionError> {
        let policy = &self.config.policy;
        let mut roster = Roster::initialize(inputs, &self.assumptions, policy)?;

        log::info!(
            "Projecting {} individual(s) over {} year(s) under {} policy at {:.2}%",
            roster.len(),
            self.config.horizon_years,
            policy,
            self.config.annual_discount_rate * 100.0
        );
        if matches!(policy, PromotionPolicy::VacancyConstrained) {
            self.warn_over_ceiling(&roster);
        }

        let dates = calendar::month_ends(self.assumptions.schedule.anchor_date, self.config.months());
        let start_date = dates
            .first()
            .copied()
            .unwrap_or_else(|| calendar::month_end(self.assumptions.schedule.anchor_date));

        let (records, retirements) = self.simulate(&mut roster, &dates);
        let record_count = records.len();
        let detail = self.curve.discount_stream(records);
        let result = ProjectionResult::new(
            policy.to_string(),
            self.config.annual_discount_rate,
            start_date,
            detail,
            retirements,
        );

        log::info!(
            "Projection complete: {} monthly record(s), {} retirement(s), total PV {:.2}",
            record_count,
            result.retirements.len(),
            result.total_present_value()
        );
        Ok(result)
    }

    /// Step the roster through every month: retire, promote, then emit income
    fn simulate(&self, roster: &mut Roster, dates: &[NaiveDate]) -> (Vec<IncomeRecord>, Vec<RetirementEvent>) {
        let rule = RetirementRule::new(self.assumptions.retirement_years);
        let mut records = Vec::with_capacity(roster.len() * dates.len());
        let mut retirements = Vec::new();

        for &date in dates {
            retirements.extend(rule.apply(roster, date));
            self.config
                .policy
                .apply_monthly_promotions(roster, date, &self.assumptions);

            records.extend(roster.active().map(|individual| {
                let income = self.assumptions.income.monthly_income(individual.rank);
                IncomeRecord::from_individual(individual, date, income)
            }));
        }

        (records, retirements)
    }

    fn warn_over_ceiling(&self, roster: &Roster) {
        for sub_population in SubPopulation::ALL {
            let occupancy = roster.occupancy(sub_population);
            for rank in Rank::ALL {
                let ceiling = self.assumptions.ceilings.ceiling(sub_population, rank).unwrap_or(0);
                if occupancy[rank.index()] > ceiling {
                    log::warn!(
                        "{} rank {}: initial headcount {} exceeds ceiling {}",
                        sub_population,
                        rank,
                        occupancy[rank.index()],
                        ceiling
                    );
                }
            }
        }
    }
}

/// Run a single projection with explicit parameters
pub fn run_projection(
    roster: &[IndividualInput],
    horizon_years: u32,
    policy: PromotionPolicy,
    annual_discount_rate: f64,
    assumptions: &Assumptions,
) -> Result<ProjectionResult, ProjectionError> {
    let config = ProjectionConfig::new(horizon_years, policy, annual_discount_rate);
    ProjectionEngine::new(assumptions.clone(), config)?.project(roster)
}
