//! Scenario comparison: per-individual differences, scenario statistics and
//! retirement analysis

use std::collections::{BTreeMap, HashMap};

use chrono::Datelike;
use serde::Serialize;

use super::aggregate::IndividualSummary;
use crate::projection::{ProjectionResult, RetirementEvent};
use crate::roster::{Rank, SubPopulation};

/// Percentage change from `base` to `value`; 0 when `base` is 0
pub fn percent_change(base: f64, value: f64) -> f64 {
    if base == 0.0 {
        0.0
    } else {
        (value - base) / base * 100.0
    }
}

/// Present value of one individual under status quo and an alternative scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndividualComparison {
    pub id: u64,
    pub name: String,
    pub sub_population: SubPopulation,
    pub status_quo_present_value: f64,
    pub scenario_present_value: f64,
    pub difference: f64,
    pub percent_change: f64,
}

/// Compare every individual present in both results, ordered by id
pub fn compare_individuals(status_quo: &ProjectionResult, scenario: &ProjectionResult) -> Vec<IndividualComparison> {
    let alternative: HashMap<u64, &IndividualSummary> =
        scenario.summary.iter().map(|row| (row.id, row)).collect();

    status_quo
        .summary
        .iter()
        .filter_map(|base| {
            alternative.get(&base.id).map(|other| IndividualComparison {
                id: base.id,
                name: base.name.clone(),
                sub_population: base.sub_population,
                status_quo_present_value: base.total_present_value,
                scenario_present_value: other.total_present_value,
                difference: other.total_present_value - base.total_present_value,
                percent_change: percent_change(base.total_present_value, other.total_present_value),
            })
        })
        .collect()
}

/// Distribution of per-individual totals for one named scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioStatistics {
    pub scenario: String,
    pub individuals: usize,
    pub mean_present_value: f64,
    pub median_present_value: f64,
    pub total_present_value: f64,
    /// Sample standard deviation; 0 with fewer than two individuals
    pub std_present_value: f64,
    pub mean_nominal: f64,
    pub median_nominal: f64,
    pub total_nominal: f64,
    pub mean_promotions: f64,
    pub mean_discount_pct: f64,
}

impl ScenarioStatistics {
    pub fn from_result(scenario: impl Into<String>, result: &ProjectionResult) -> Self {
        Self::from_summary(scenario, &result.summary)
    }

    pub fn from_summary(scenario: impl Into<String>, summary: &[IndividualSummary]) -> Self {
        let present_values: Vec<f64> = summary.iter().map(|row| row.total_present_value).collect();
        let nominals: Vec<f64> = summary.iter().map(|row| row.total_nominal).collect();
        let promotions: Vec<f64> = summary.iter().map(|row| row.promotion_count as f64).collect();
        let discount_pcts: Vec<f64> = summary.iter().map(|row| row.discount_gap_pct).collect();

        Self {
            scenario: scenario.into(),
            individuals: summary.len(),
            mean_present_value: mean(&present_values),
            median_present_value: median(&present_values),
            total_present_value: present_values.iter().sum(),
            std_present_value: sample_std(&present_values),
            mean_nominal: mean(&nominals),
            median_nominal: median(&nominals),
            total_nominal: nominals.iter().sum(),
            mean_promotions: mean(&promotions),
            mean_discount_pct: mean(&discount_pcts),
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let avg = mean(values);
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Retirement count for one (year, sub-population, rank) group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RetirementGroup {
    pub year: i32,
    pub sub_population: SubPopulation,
    pub rank: Rank,
    pub count: usize,
}

/// Retirements grouped by year, sub-population and rank, plus yearly totals
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetirementAnalysis {
    /// Ordered by (year, sub-population, rank)
    pub groups: Vec<RetirementGroup>,
    pub totals_by_year: BTreeMap<i32, usize>,
}

impl RetirementAnalysis {
    pub fn from_events(events: &[RetirementEvent]) -> Self {
        let mut counts: BTreeMap<(i32, SubPopulation, Rank), usize> = BTreeMap::new();
        let mut totals_by_year = BTreeMap::new();
        for event in events {
            let year = event.retirement_date.year();
            *counts.entry((year, event.sub_population, event.rank)).or_default() += 1;
            *totals_by_year.entry(year).or_default() += 1;
        }

        let groups = counts
            .into_iter()
            .map(|((year, sub_population, rank), count)| RetirementGroup {
                year,
                sub_population,
                rank,
                count,
            })
            .collect();

        Self { groups, totals_by_year }
    }

    pub fn total(&self) -> usize {
        self.totals_by_year.values().sum()
    }
}
