//! Headcount ceilings per sub-population and rank

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;
use crate::roster::{Rank, SubPopulation};

/// Maximum active headcount per rank, independently for each sub-population
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeadcountCeilings {
    /// Ceiling by rank (index 0 = rank 1)
    by_sub_population: BTreeMap<SubPopulation, [u32; 4]>,
}

impl HeadcountCeilings {
    pub fn new(by_sub_population: BTreeMap<SubPopulation, [u32; 4]>) -> Self {
        Self { by_sub_population }
    }

    /// Production vacancy table
    pub fn default_career() -> Self {
        let by_sub_population = BTreeMap::from([
            (SubPopulation::Criminal, [100, 80, 115, 50]),
            (SubPopulation::Biochemical, [13, 11, 15, 6]),
            (SubPopulation::MedicalExaminer, [55, 45, 60, 25]),
            (SubPopulation::Odontologist, [3, 2, 3, 2]),
        ]);
        Self { by_sub_population }
    }

    /// Ceiling for a rank within a sub-population
    pub fn ceiling(&self, sub_population: SubPopulation, rank: Rank) -> Option<u32> {
        self.by_sub_population
            .get(&sub_population)
            .map(|ceilings| ceilings[rank.index()])
    }

    /// Override a single ceiling
    pub fn set_ceiling(&mut self, sub_population: SubPopulation, rank: Rank, ceiling: u32) {
        self.by_sub_population.entry(sub_population).or_insert([0; 4])[rank.index()] = ceiling;
    }

    /// Every sub-population must carry a ceiling row
    pub fn validate(&self) -> Result<(), ProjectionError> {
        match SubPopulation::ALL
            .into_iter()
            .find(|sp| !self.by_sub_population.contains_key(sp))
        {
            Some(missing) => Err(ProjectionError::MissingCeilings(missing)),
            None => Ok(()),
        }
    }
}

impl Default for HeadcountCeilings {
    fn default() -> Self {
        Self::default_career()
    }
}
