//! Tenure-based promotion
//!
//! Individuals are re-ranked from fractional service years on their baseline
//! anniversary month. Members of the early-promotion subgroup are re-ranked
//! every month once the policy is active. A re-rank may skip ranks.

use chrono::NaiveDate;

use super::TenureThresholds;
use crate::assumptions::Assumptions;
use crate::calendar;
use crate::projection::state::Roster;

pub(super) fn promote(
    roster: &mut Roster,
    date: NaiveDate,
    thresholds: &TenureThresholds,
    assumptions: &Assumptions,
) -> usize {
    let schedule = &assumptions.schedule;
    if !schedule.tenure_policy_active(date) {
        return 0;
    }

    let mut promoted = 0;

    for individual in roster.iter_mut().filter(|individual| individual.is_active()) {
        let Some(baseline) = individual.baseline_date else {
            continue;
        };
        if !individual.early_promotion && !calendar::is_anniversary(date, baseline) {
            continue;
        }

        let service = calendar::service_years(baseline, date);
        let target = thresholds.target_rank(service, individual.early_promotion);
        if target > individual.rank {
            log::debug!(
                "{}: individual {} {}→{} after {:.2} service years",
                date,
                individual.id,
                individual.rank,
                target,
                service
            );
            individual.promote_to(target, date);
            promoted += 1;
        }
    }

    promoted
}
