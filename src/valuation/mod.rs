//! Discounting, aggregation and scenario comparison of projected income

mod aggregate;
mod compare;
mod discount;

pub use aggregate::{cohort_series, summarize, CohortMonth, IndividualSummary};
pub use compare::{
    compare_individuals, percent_change, IndividualComparison, RetirementAnalysis, RetirementGroup,
    ScenarioStatistics,
};
pub use discount::DiscountCurve;
