//! Tenure-based retirement rule

use chrono::NaiveDate;

use super::records::RetirementEvent;
use super::state::{Individual, Roster};
use crate::calendar;

/// Retires anyone whose calendar-year tenure since baseline reaches the threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetirementRule {
    pub tenure_years: u32,
}

impl RetirementRule {
    pub fn new(tenure_years: u32) -> Self {
        Self { tenure_years }
    }

    /// Whether `individual` must retire as of `as_of`.
    ///
    /// Only calendar years are compared; month and day are ignored.
    pub fn is_due(&self, individual: &Individual, as_of: NaiveDate) -> bool {
        if individual.retired {
            return false;
        }
        match individual.baseline_date {
            Some(baseline) => calendar::calendar_years_between(baseline, as_of) >= self.tenure_years as i32,
            None => false,
        }
    }

    /// Retire every due individual and report who left
    pub fn apply(&self, roster: &mut Roster, as_of: NaiveDate) -> Vec<RetirementEvent> {
        let mut events = Vec::new();
        for individual in roster.iter_mut() {
            if self.is_due(individual, as_of) {
                individual.retire(as_of);
                events.push(RetirementEvent::from_individual(individual, as_of));
            }
        }
        if !events.is_empty() {
            log::debug!("{}: {} retirement(s)", as_of, events.len());
        }
        events
    }
}

impl Default for RetirementRule {
    fn default() -> Self {
        Self::new(30)
    }
}
