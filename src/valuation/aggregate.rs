//! Per-individual and per-cohort aggregation of discounted detail rows

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;
use serde::Serialize;

use crate::projection::{MonthlyDetail, RetirementEvent};
use crate::roster::{Rank, SubPopulation};

/// One row per individual across the projection horizon
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndividualSummary {
    pub id: u64,
    pub name: String,
    pub original_rank: Rank,
    pub final_rank: Rank,
    pub sub_population: SubPopulation,

    /// Final cumulative present value
    pub total_present_value: f64,

    /// Final cumulative nominal income
    pub total_nominal: f64,

    /// Distinct promotion dates observed in the stream
    pub promotion_count: usize,

    pub retirement_date: Option<NaiveDate>,

    /// Nominal minus present value
    pub discount_gap: f64,

    /// Gap as a percentage of nominal (0 when nominal is 0)
    pub discount_gap_pct: f64,
}

struct SummaryBuilder<'a> {
    last: &'a MonthlyDetail,
    promotions: BTreeSet<NaiveDate>,
}

/// Build one summary row per individual present in `detail`, ordered by id.
///
/// Retirement dates come from the driver's events when the stream itself
/// carries none.
pub fn summarize(detail: &[MonthlyDetail], retirements: &[RetirementEvent]) -> Vec<IndividualSummary> {
    let mut builders: BTreeMap<u64, SummaryBuilder> = BTreeMap::new();
    for row in detail {
        let builder = builders.entry(row.id).or_insert_with(|| SummaryBuilder {
            last: row,
            promotions: BTreeSet::new(),
        });
        if row.date >= builder.last.date {
            builder.last = row;
        }
        if let Some(promoted) = row.last_promotion {
            builder.promotions.insert(promoted);
        }
    }

    let retired_on: HashMap<u64, NaiveDate> = retirements
        .iter()
        .map(|event| (event.id, event.retirement_date))
        .collect();

    builders
        .into_iter()
        .map(|(id, builder)| {
            let last = builder.last;
            let total_present_value = last.cumulative_present_value;
            let total_nominal = last.cumulative_nominal;
            let discount_gap = total_nominal - total_present_value;
            let discount_gap_pct = if total_nominal == 0.0 {
                0.0
            } else {
                discount_gap / total_nominal * 100.0
            };

            IndividualSummary {
                id,
                name: last.name.clone(),
                original_rank: last.original_rank,
                final_rank: last.rank,
                sub_population: last.sub_population,
                total_present_value,
                total_nominal,
                promotion_count: builder.promotions.len(),
                retirement_date: last.retirement_date.or_else(|| retired_on.get(&id).copied()),
                discount_gap,
                discount_gap_pct,
            }
        })
        .collect()
}

/// Monthly totals for one sub-population
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortMonth {
    pub date: NaiveDate,
    pub sub_population: SubPopulation,
    pub headcount: u32,
    pub income: f64,
    pub present_value: f64,
    pub cumulative_nominal: f64,
    pub cumulative_present_value: f64,
}

/// Cohort (sub-population) series ordered by (date, sub-population)
pub fn cohort_series(detail: &[MonthlyDetail]) -> Vec<CohortMonth> {
    let mut monthly: BTreeMap<(NaiveDate, SubPopulation), (u32, f64, f64)> = BTreeMap::new();
    for row in detail {
        let totals = monthly.entry((row.date, row.sub_population)).or_insert((0, 0.0, 0.0));
        totals.0 += 1;
        totals.1 += row.income;
        totals.2 += row.present_value;
    }

    let mut running: BTreeMap<SubPopulation, (f64, f64)> = BTreeMap::new();
    monthly
        .into_iter()
        .map(|((date, sub_population), (headcount, income, present_value))| {
            let cumulative = running.entry(sub_population).or_insert((0.0, 0.0));
            cumulative.0 += income;
            cumulative.1 += present_value;
            CohortMonth {
                date,
                sub_population,
                headcount,
                income,
                present_value,
                cumulative_nominal: cumulative.0,
                cumulative_present_value: cumulative.1,
            }
        })
        .collect()
}
