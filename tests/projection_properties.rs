//! Property tests for the projection engine over generated rosters

use std::collections::HashMap;

use career_projection::projection::MonthlyDetail;
use career_projection::{
    run_projection, Assumptions, IndividualInput, ProjectionResult, PromotionPolicy, Rank, SubPopulation,
    TenureThresholds,
};
use chrono::NaiveDate;
use proptest::collection::vec;
use proptest::prelude::{any, prop_assert, prop_assert_eq, proptest};

type Row = (u8, i32, u32, bool, usize);

fn roster(rows: &[Row]) -> Vec<IndividualInput> {
    rows.iter()
        .enumerate()
        .map(|(index, &(rank, year, month, early, track))| {
            let eligibility = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
            let input = IndividualInput::new(
                index as u64 + 1,
                format!("Expert {}", index + 1),
                SubPopulation::ALL[track],
                rank,
                eligibility,
            );
            if early {
                input.with_early_promotion()
            } else {
                input
            }
        })
        .collect()
}

fn policy(tenure: bool) -> PromotionPolicy {
    if tenure {
        PromotionPolicy::TenureBased(TenureThresholds::new([5, 10, 15]).unwrap())
    } else {
        PromotionPolicy::VacancyConstrained
    }
}

fn rows_by_id(result: &ProjectionResult) -> HashMap<u64, Vec<&MonthlyDetail>> {
    let mut by_id: HashMap<u64, Vec<&MonthlyDetail>> = HashMap::new();
    for row in &result.detail {
        by_id.entry(row.id).or_default().push(row);
    }
    by_id
}

/// Production assumptions with every ceiling raised to at least the initial headcount
fn assumptions_within_ceilings(inputs: &[IndividualInput], ceilings: [u32; 4]) -> Assumptions {
    let mut assumptions = Assumptions::default_career();
    for sub_population in SubPopulation::ALL {
        for rank in Rank::ALL {
            let initial = inputs
                .iter()
                .filter(|input| input.sub_population == sub_population.as_str() && input.original_rank == rank.level())
                .count() as u32;
            assumptions
                .ceilings
                .set_ceiling(sub_population, rank, ceilings[rank.index()].max(initial));
        }
    }
    assumptions
}

fn row_strategy() -> impl proptest::strategy::Strategy<Value = Row> {
    (1u8..=4, 1995i32..2026, 1u32..=12, any::<bool>(), 0usize..4)
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(32))]

    #[test]
    fn prop_rank_never_decreases(
        rows in vec(row_strategy(), 1..12),
        tenure in any::<bool>(),
        years in 1u32..20
    ) {
        let result = run_projection(&roster(&rows), years, policy(tenure), 0.06, &Assumptions::default_career()).unwrap();

        for (_, history) in rows_by_id(&result) {
            for pair in history.windows(2) {
                prop_assert!(pair[0].rank <= pair[1].rank);
                prop_assert!(pair[0].date < pair[1].date);
            }
            prop_assert!(history[0].rank >= history[0].original_rank);
        }
    }

    #[test]
    fn prop_retirement_is_terminal(
        rows in vec(row_strategy(), 1..12),
        tenure in any::<bool>(),
        years in 1u32..25
    ) {
        let result = run_projection(&roster(&rows), years, policy(tenure), 0.06, &Assumptions::default_career()).unwrap();

        let mut retired_on = HashMap::new();
        for event in &result.retirements {
            prop_assert!(retired_on.insert(event.id, event.retirement_date).is_none());
        }
        for row in &result.detail {
            if let Some(&retired) = retired_on.get(&row.id) {
                prop_assert!(row.date < retired);
            }
        }
    }

    #[test]
    fn prop_vacancy_respects_ceilings(
        rows in vec(row_strategy(), 1..16),
        ceilings in (0u32..4, 0u32..4, 0u32..4, 0u32..4),
        years in 1u32..15
    ) {
        let inputs = roster(&rows);
        let ceilings = [ceilings.0, ceilings.1, ceilings.2, ceilings.3];
        let assumptions = assumptions_within_ceilings(&inputs, ceilings);
        let result = run_projection(&inputs, years, PromotionPolicy::VacancyConstrained, 0.06, &assumptions).unwrap();

        let mut headcount: HashMap<(NaiveDate, SubPopulation, Rank), u32> = HashMap::new();
        for row in &result.detail {
            *headcount.entry((row.date, row.sub_population, row.rank)).or_default() += 1;
        }
        for ((_, sub_population, rank), count) in headcount {
            let ceiling = assumptions.ceilings.ceiling(sub_population, rank).unwrap();
            prop_assert!(count <= ceiling, "{} rank {}: {} > {}", sub_population, rank, count, ceiling);
        }
    }

    #[test]
    fn prop_vacancy_single_step_per_month(
        rows in vec(row_strategy(), 1..12),
        years in 1u32..20
    ) {
        let result = run_projection(&roster(&rows), years, PromotionPolicy::VacancyConstrained, 0.06, &Assumptions::default_career()).unwrap();

        for (_, history) in rows_by_id(&result) {
            for pair in history.windows(2) {
                prop_assert!(pair[1].rank.level() - pair[0].rank.level() <= 1);
            }
        }
    }

    #[test]
    fn prop_present_value_bounded_by_nominal(
        rows in vec(row_strategy(), 1..8),
        tenure in any::<bool>(),
        rate_bp in 1u32..2000
    ) {
        let rate = rate_bp as f64 / 10_000.0;
        let result = run_projection(&roster(&rows), 10, policy(tenure), rate, &Assumptions::default_career()).unwrap();

        for row in &result.detail {
            if row.months_elapsed == 0 {
                prop_assert_eq!(row.discount_factor, 1.0);
                prop_assert_eq!(row.present_value, row.income);
            } else {
                prop_assert!(row.present_value < row.income);
            }
            prop_assert!(row.cumulative_present_value <= row.cumulative_nominal);
        }
        for summary in &result.summary {
            prop_assert!(summary.discount_gap >= 0.0);
        }
    }

    #[test]
    fn prop_identical_inputs_identical_outputs(
        rows in vec(row_strategy(), 1..10),
        tenure in any::<bool>(),
        years in 1u32..15
    ) {
        let inputs = roster(&rows);
        let assumptions = Assumptions::default_career();
        let first = run_projection(&inputs, years, policy(tenure), 0.06, &assumptions).unwrap();
        let second = run_projection(&inputs, years, policy(tenure), 0.06, &assumptions).unwrap();

        prop_assert_eq!(&first.detail, &second.detail);
        prop_assert_eq!(&first.summary, &second.summary);
    }
}
