//! Roster data structures matching the cleaned roster format

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Career rank, one of four ordered levels (1 = entry, 4 = top)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Rank(u8);

impl Rank {
    pub const ENTRY: Rank = Rank(1);
    pub const TOP: Rank = Rank(4);
    pub const ALL: [Rank; 4] = [Rank(1), Rank(2), Rank(3), Rank(4)];

    /// Create a rank from its level, rejecting anything outside 1..=4
    pub fn new(level: u8) -> Option<Self> {
        (1..=4).contains(&level).then_some(Rank(level))
    }

    pub fn level(self) -> u8 {
        self.0
    }

    /// Zero-based index into per-rank tables
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// The rank immediately above, or None at the top
    pub fn next(self) -> Option<Rank> {
        Rank::new(self.0 + 1)
    }

    /// Rank transitions (from, to) in ascending order: 1→2, 2→3, 3→4
    pub fn transitions() -> impl Iterator<Item = (Rank, Rank)> {
        Rank::ALL
            .into_iter()
            .filter_map(|from| from.next().map(|to| (from, to)))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Expert specialization track; each has its own headcount ceilings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubPopulation {
    Criminal,
    Biochemical,
    MedicalExaminer,
    Odontologist,
}

impl SubPopulation {
    pub const ALL: [SubPopulation; 4] = [
        SubPopulation::Criminal,
        SubPopulation::Biochemical,
        SubPopulation::MedicalExaminer,
        SubPopulation::Odontologist,
    ];

    /// Get the string representation used in roster files
    pub fn as_str(&self) -> &'static str {
        match self {
            SubPopulation::Criminal => "criminal",
            SubPopulation::Biochemical => "biochemical",
            SubPopulation::MedicalExaminer => "medical_examiner",
            SubPopulation::Odontologist => "odontologist",
        }
    }
}

impl fmt::Display for SubPopulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubPopulation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        SubPopulation::ALL
            .into_iter()
            .find(|sp| sp.as_str() == normalized)
            .ok_or_else(|| s.to_string())
    }
}

/// A single roster row as handed over by the ingestion layer
///
/// Fields are kept close to the raw input so the engine can reject malformed
/// rows itself instead of trusting upstream cleaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualInput {
    /// Registration number, unique within the roster
    pub id: u64,

    /// Display name
    pub name: String,

    /// Sub-population label (see [`SubPopulation::as_str`])
    pub sub_population: String,

    /// Rank at data-load time
    pub original_rank: u8,

    /// Date from which the individual may be promoted
    pub eligibility_date: Option<NaiveDate>,

    /// Member of the early-promotion subgroup (tenure-based policy)
    #[serde(default)]
    pub early_promotion: bool,

    /// Explicit career baseline; derived from eligibility when absent
    #[serde(default)]
    pub baseline_date: Option<NaiveDate>,
}

impl IndividualInput {
    /// Create a roster row with the required fields
    pub fn new(
        id: u64,
        name: impl Into<String>,
        sub_population: SubPopulation,
        original_rank: u8,
        eligibility_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            sub_population: sub_population.as_str().to_string(),
            original_rank,
            eligibility_date: Some(eligibility_date),
            early_promotion: false,
            baseline_date: None,
        }
    }

    /// Flag the individual for early promotion
    pub fn with_early_promotion(mut self) -> Self {
        self.early_promotion = true;
        self
    }

    /// Set an explicit baseline date
    pub fn with_baseline(mut self, baseline: NaiveDate) -> Self {
        self.baseline_date = Some(baseline);
        self
    }
}
