//! Mutable per-individual career state owned by a single projection run

use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::promotion::PromotionPolicy;
use crate::assumptions::Assumptions;
use crate::calendar;
use crate::error::ProjectionError;
use crate::roster::{IndividualInput, Rank, SubPopulation};

/// Career state of one individual at a point in the simulation
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    pub id: u64,
    pub name: String,
    pub sub_population: SubPopulation,

    /// Rank at data-load time (immutable)
    pub original_rank: Rank,

    /// Current rank, never decreases
    pub rank: Rank,

    /// Date from which the individual is a promotion candidate
    pub eligibility_date: NaiveDate,

    /// Reference date for tenure-driven events; None means never retired
    pub baseline_date: Option<NaiveDate>,

    /// Member of the early-promotion subgroup
    pub early_promotion: bool,

    pub retired: bool,
    pub retirement_date: Option<NaiveDate>,

    /// Date of the most recent promotion (reporting only)
    pub last_promotion: Option<NaiveDate>,
}

impl Individual {
    /// Build initial state from a validated roster row
    fn from_input(
        input: &IndividualInput,
        assumptions: &Assumptions,
        eligibility_delay_years: u32,
    ) -> Result<Self, ProjectionError> {
        let original_rank = Rank::new(input.original_rank).ok_or(ProjectionError::InvalidRank {
            id: input.id,
            rank: input.original_rank,
        })?;

        let sub_population: SubPopulation =
            input
                .sub_population
                .parse()
                .map_err(|value| ProjectionError::UnknownSubPopulation { id: input.id, value })?;

        let raw_eligibility = input
            .eligibility_date
            .ok_or(ProjectionError::MissingEligibilityDate(input.id))?;

        // Entrants above rank 1 started their careers before reaching eligibility
        let baseline_date = match input.baseline_date {
            Some(explicit) => explicit,
            None if original_rank == Rank::ENTRY => raw_eligibility,
            None => calendar::add_years(raw_eligibility, -(assumptions.baseline_offset_years as i32))
                .ok_or(ProjectionError::DateOutOfRange(input.id))?,
        };

        let eligibility_date = if original_rank == Rank::ENTRY {
            calendar::add_years(raw_eligibility, eligibility_delay_years as i32)
                .ok_or(ProjectionError::DateOutOfRange(input.id))?
        } else {
            raw_eligibility
        };

        Ok(Self {
            id: input.id,
            name: input.name.clone(),
            sub_population,
            original_rank,
            rank: original_rank,
            eligibility_date,
            baseline_date: Some(baseline_date),
            early_promotion: input.early_promotion,
            retired: false,
            retirement_date: None,
            last_promotion: None,
        })
    }

    pub fn is_active(&self) -> bool {
        !self.retired
    }

    /// Raise rank to `rank` and stamp the promotion date
    pub(crate) fn promote_to(&mut self, rank: Rank, date: NaiveDate) {
        debug_assert!(rank > self.rank && !self.retired);
        self.rank = rank;
        self.last_promotion = Some(date);
    }

    pub(crate) fn retire(&mut self, date: NaiveDate) {
        self.retired = true;
        self.retirement_date = Some(date);
    }
}

/// The full roster for one run, mutated in place by the simulation driver
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    individuals: Vec<Individual>,
}

impl Roster {
    /// Initialize roster state for a run of `policy`.
    ///
    /// Rejects the whole roster on the first malformed row.
    pub fn initialize(
        inputs: &[IndividualInput],
        assumptions: &Assumptions,
        policy: &PromotionPolicy,
    ) -> Result<Self, ProjectionError> {
        let delay = policy.rank_one_eligibility_delay(assumptions);
        let mut seen = BTreeSet::new();
        let mut individuals = Vec::with_capacity(inputs.len());

        for input in inputs {
            if !seen.insert(input.id) {
                return Err(ProjectionError::DuplicateId(input.id));
            }
            individuals.push(Individual::from_input(input, assumptions, delay)?);
        }

        Ok(Self { individuals })
    }

    /// Wrap already-built state (custom baselines, partially retired rosters)
    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Individual> {
        self.individuals.iter_mut()
    }

    /// Mutable access by roster position, not by id
    pub(crate) fn get_mut_at(&mut self, position: usize) -> Option<&mut Individual> {
        self.individuals.get_mut(position)
    }

    pub fn get(&self, id: u64) -> Option<&Individual> {
        self.individuals.iter().find(|individual| individual.id == id)
    }

    pub fn active(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter().filter(|individual| individual.is_active())
    }

    /// Active headcount per rank within a sub-population (index 0 = rank 1)
    pub fn occupancy(&self, sub_population: SubPopulation) -> [u32; 4] {
        self.active()
            .filter(|individual| individual.sub_population == sub_population)
            .fold([0; 4], |mut counts, individual| {
                counts[individual.rank.index()] += 1;
                counts
            })
    }
}
