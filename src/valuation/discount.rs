//! Present-value discounting of monthly income streams

use std::collections::HashMap;

use crate::calendar;
use crate::error::ProjectionError;
use crate::projection::{IncomeRecord, MonthlyDetail};

/// Single-rate discount curve with monthly compounding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscountCurve {
    /// Annual rate, compounded monthly at `annual_rate / 12`
    pub annual_rate: f64,
}

impl DiscountCurve {
    /// Create a curve; the rate must be finite and non-negative
    pub fn single_rate(annual_rate: f64) -> Result<Self, ProjectionError> {
        if !annual_rate.is_finite() || annual_rate < 0.0 {
            return Err(ProjectionError::InvalidDiscountRate(annual_rate));
        }
        Ok(Self { annual_rate })
    }

    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate / 12.0
    }

    /// Discount factor to `months` months; exactly 1.0 at month 0
    pub fn discount_factor(&self, months: u32) -> f64 {
        1.0 / self.accumulation(months)
    }

    /// `amount / (1 + r/12)^months`
    pub fn present_value(&self, amount: f64, months: u32) -> f64 {
        amount / self.accumulation(months)
    }

    fn accumulation(&self, months: u32) -> f64 {
        (1.0 + self.monthly_rate()).powi(months as i32)
    }

    /// Discount a nominal stream and attach running totals.
    ///
    /// Months elapsed are counted from the earliest date in the whole stream.
    /// Output is ordered by (id, date) with cumulative sums per individual.
    pub fn discount_stream(&self, mut records: Vec<IncomeRecord>) -> Vec<MonthlyDetail> {
        let Some(origin) = records.iter().map(|record| record.date).min() else {
            return Vec::new();
        };
        records.sort_by(|a, b| (a.id, a.date).cmp(&(b.id, b.date)));

        let mut running: HashMap<u64, (f64, f64)> = HashMap::new();
        records
            .into_iter()
            .map(|record| {
                let months_elapsed = calendar::months_between(origin, record.date).max(0) as u32;
                let discount_factor = self.discount_factor(months_elapsed);
                let present_value = self.present_value(record.income, months_elapsed);

                let totals = running.entry(record.id).or_insert((0.0, 0.0));
                totals.0 += present_value;
                totals.1 += record.income;

                MonthlyDetail {
                    id: record.id,
                    name: record.name,
                    sub_population: record.sub_population,
                    original_rank: record.original_rank,
                    rank: record.rank,
                    date: record.date,
                    income: record.income,
                    last_promotion: record.last_promotion,
                    retirement_date: record.retirement_date,
                    months_elapsed,
                    discount_factor,
                    present_value,
                    cumulative_present_value: totals.0,
                    cumulative_nominal: totals.1,
                }
            })
            .collect()
    }
}

impl Default for DiscountCurve {
    fn default() -> Self {
        Self { annual_rate: 0.06 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{Rank, SubPopulation};
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(id: u64, date: NaiveDate, income: f64) -> IncomeRecord {
        IncomeRecord {
            id,
            name: format!("Expert {}", id),
            sub_population: SubPopulation::Criminal,
            original_rank: Rank::ENTRY,
            rank: Rank::ENTRY,
            date,
            income,
            last_promotion: None,
            retirement_date: None,
        }
    }

    #[test]
    fn test_discount_factor() {
        let curve = DiscountCurve::single_rate(0.06).unwrap();
        assert_eq!(curve.discount_factor(0), 1.0);
        assert_relative_eq!(curve.discount_factor(1), 1.0 / 1.005, epsilon = 1e-12);
        assert_relative_eq!(curve.discount_factor(12), 1.005_f64.powi(-12), epsilon = 1e-12);
        assert_relative_eq!(curve.present_value(1000.0, 24), 1000.0 / 1.005_f64.powi(24), epsilon = 1e-9);
    }

    #[test]
    fn test_zero_rate_is_nominal() {
        let curve = DiscountCurve::single_rate(0.0).unwrap();
        assert_eq!(curve.present_value(27_737.24, 240), 27_737.24);
    }

    #[test]
    fn test_invalid_rate_rejected() {
        assert_eq!(
            DiscountCurve::single_rate(-0.02),
            Err(ProjectionError::InvalidDiscountRate(-0.02))
        );
        assert!(DiscountCurve::single_rate(f64::INFINITY).is_err());
    }

    #[test]
    fn test_stream_sorted_with_running_totals() {
        let curve = DiscountCurve::single_rate(0.12).unwrap();
        let records = vec![
            record(2, ymd(2025, 8, 31), 200.0),
            record(1, ymd(2025, 8, 31), 100.0),
            record(2, ymd(2025, 7, 31), 200.0),
            record(1, ymd(2025, 7, 31), 100.0),
        ];

        let detail = curve.discount_stream(records);

        let keys: Vec<(u64, u32)> = detail.iter().map(|row| (row.id, row.months_elapsed)).collect();
        assert_eq!(keys, vec![(1, 0), (1, 1), (2, 0), (2, 1)]);
        assert_eq!(detail[0].present_value, 100.0);
        assert_relative_eq!(detail[1].present_value, 100.0 / 1.01, epsilon = 1e-12);
        assert_relative_eq!(detail[1].cumulative_present_value, 100.0 + 100.0 / 1.01, epsilon = 1e-12);
        assert_eq!(detail[1].cumulative_nominal, 200.0);
        assert_eq!(detail[2].cumulative_nominal, 200.0);
    }

    #[test]
    fn test_months_from_global_origin() {
        // An individual who first appears later is discounted from the stream origin
        let curve = DiscountCurve::single_rate(0.06).unwrap();
        let detail = curve.discount_stream(vec![
            record(1, ymd(2025, 7, 31), 100.0),
            record(2, ymd(2026, 7, 31), 100.0),
        ]);
        assert_eq!(detail[1].months_elapsed, 12);
        assert!(detail[1].present_value < 100.0);
    }

    #[test]
    fn test_empty_stream() {
        assert!(DiscountCurve::default().discount_stream(Vec::new()).is_empty());
    }
}
