//! Rows emitted by the simulation and the assembled projection result

use chrono::NaiveDate;
use serde::Serialize;

use super::state::Individual;
use crate::calendar;
use crate::roster::{Rank, SubPopulation};
use crate::valuation::{cohort_series, summarize, CohortMonth, IndividualSummary};

/// One month of income for one active individual (nominal, undiscounted)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncomeRecord {
    pub id: u64,
    pub name: String,
    pub sub_population: SubPopulation,
    pub original_rank: Rank,
    pub rank: Rank,
    pub date: NaiveDate,
    pub income: f64,
    pub last_promotion: Option<NaiveDate>,
    pub retirement_date: Option<NaiveDate>,
}

impl IncomeRecord {
    pub(crate) fn from_individual(individual: &Individual, date: NaiveDate, income: f64) -> Self {
        Self {
            id: individual.id,
            name: individual.name.clone(),
            sub_population: individual.sub_population,
            original_rank: individual.original_rank,
            rank: individual.rank,
            date,
            income,
            last_promotion: individual.last_promotion,
            retirement_date: individual.retirement_date,
        }
    }
}

/// A retirement observed by the driver
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetirementEvent {
    pub id: u64,
    pub sub_population: SubPopulation,
    /// Rank held when retiring
    pub rank: Rank,
    pub retirement_date: NaiveDate,
}

impl RetirementEvent {
    pub(crate) fn from_individual(individual: &Individual, retirement_date: NaiveDate) -> Self {
        Self {
            id: individual.id,
            sub_population: individual.sub_population,
            rank: individual.rank,
            retirement_date,
        }
    }
}

/// Discounted detail row, one per individual per month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyDetail {
    pub id: u64,
    pub name: String,
    pub sub_population: SubPopulation,
    pub original_rank: Rank,
    pub rank: Rank,
    pub date: NaiveDate,
    pub income: f64,
    pub last_promotion: Option<NaiveDate>,
    pub retirement_date: Option<NaiveDate>,

    /// Whole months since the earliest date in the stream
    pub months_elapsed: u32,
    pub discount_factor: f64,
    pub present_value: f64,
    pub cumulative_present_value: f64,
    pub cumulative_nominal: f64,
}

/// Complete output of one projection run
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionResult {
    /// Display name of the promotion policy
    pub policy: String,

    pub annual_discount_rate: f64,

    /// First simulated month-end
    pub start_date: NaiveDate,

    /// Ordered by (id, date)
    pub detail: Vec<MonthlyDetail>,

    /// Ordered by id
    pub summary: Vec<IndividualSummary>,

    /// Ordered by (date, sub-population)
    pub cohorts: Vec<CohortMonth>,

    /// In simulation order
    pub retirements: Vec<RetirementEvent>,
}

impl ProjectionResult {
    pub fn new(
        policy: String,
        annual_discount_rate: f64,
        start_date: NaiveDate,
        detail: Vec<MonthlyDetail>,
        retirements: Vec<RetirementEvent>,
    ) -> Self {
        let summary = summarize(&detail, &retirements);
        let cohorts = cohort_series(&detail);
        Self {
            policy,
            annual_discount_rate,
            start_date,
            detail,
            summary,
            cohorts,
            retirements,
        }
    }

    /// Keep only the first `years` of output and rebuild the aggregates
    pub fn truncated(&self, years: u32) -> Self {
        let window = years.saturating_mul(12);
        let detail: Vec<MonthlyDetail> = self
            .detail
            .iter()
            .filter(|row| row.months_elapsed < window)
            .cloned()
            .collect();
        let retirements: Vec<RetirementEvent> = self
            .retirements
            .iter()
            .filter(|event| calendar::months_between(self.start_date, event.retirement_date) < window as i32)
            .cloned()
            .collect();
        Self::new(
            self.policy.clone(),
            self.annual_discount_rate,
            self.start_date,
            detail,
            retirements,
        )
    }

    /// Summary row for one individual
    pub fn summary_for(&self, id: u64) -> Option<&IndividualSummary> {
        self.summary.iter().find(|row| row.id == id)
    }

    /// Detail rows for one individual, in date order
    pub fn detail_for(&self, id: u64) -> impl Iterator<Item = &MonthlyDetail> {
        self.detail.iter().filter(move |row| row.id == id)
    }

    pub fn total_present_value(&self) -> f64 {
        self.summary.iter().map(|row| row.total_present_value).sum()
    }

    pub fn total_nominal(&self) -> f64 {
        self.summary.iter().map(|row| row.total_nominal).sum()
    }
}
