//! Vacancy-constrained promotion
//!
//! On each promotion month every sub-population is processed transition by
//! transition from the bottom up (1→2, 2→3, 3→4). Occupancy is recounted
//! before each transition, so a slot opened by a promotion out of rank r+1
//! during this pass is only offered to rank r at the next promotion month.
//! Slots opened by retirements earlier in the month are available at once.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::assumptions::Assumptions;
use crate::projection::state::Roster;
use crate::roster::{Rank, SubPopulation};

pub(super) fn promote(roster: &mut Roster, date: NaiveDate, assumptions: &Assumptions) -> usize {
    if !assumptions.schedule.is_promotion_month(date) {
        return 0;
    }

    let mut promoted_this_month = HashSet::new();
    for sub_population in SubPopulation::ALL {
        for (from, to) in Rank::transitions() {
            promote_transition(roster, date, assumptions, sub_population, from, to, &mut promoted_this_month);
        }
    }
    promoted_this_month.len()
}

fn promote_transition(
    roster: &mut Roster,
    date: NaiveDate,
    assumptions: &Assumptions,
    sub_population: SubPopulation,
    from: Rank,
    to: Rank,
    promoted_this_month: &mut HashSet<u64>,
) {
    let ceiling = assumptions.ceilings.ceiling(sub_population, to).unwrap_or(0);
    let occupied = roster.occupancy(sub_population)[to.index()];
    let slots = ceiling.saturating_sub(occupied) as usize;
    if slots == 0 {
        return;
    }

    // (eligibility, id, position) so ties resolve to the lower id
    let mut candidates: Vec<(NaiveDate, u64, usize)> = roster
        .iter()
        .enumerate()
        .filter(|(_, individual)| {
            individual.is_active()
                && individual.sub_population == sub_population
                && individual.rank == from
                && individual.eligibility_date <= date
                && !promoted_this_month.contains(&individual.id)
        })
        .map(|(position, individual)| (individual.eligibility_date, individual.id, position))
        .collect();
    candidates.sort_unstable();

    let selected = candidates.len().min(slots);
    for &(_, id, position) in candidates.iter().take(selected) {
        if let Some(individual) = roster.get_mut_at(position) {
            individual.promote_to(to, date);
            promoted_this_month.insert(id);
        }
    }

    if selected > 0 {
        log::debug!(
            "{} {}: promoted {} of {} candidate(s) {}→{} ({} slot(s))",
            date,
            sub_population,
            selected,
            candidates.len(),
            from,
            to,
            slots
        );
    }
}
