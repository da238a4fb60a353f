//! JSON-based assumption loader
//!
//! Any key left out of the file keeps its production value, so a file holding
//! only `{"retirement_years": 35}` is a valid override.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::Assumptions;
use crate::error::LoadError;

/// Load and validate assumptions from a JSON file
pub fn load_assumptions(path: &Path) -> Result<Assumptions, LoadError> {
    let file = File::open(path)?;
    load_assumptions_from_reader(BufReader::new(file))
}

/// Load and validate assumptions from any reader
pub fn load_assumptions_from_reader<R: Read>(reader: R) -> Result<Assumptions, LoadError> {
    let assumptions: Assumptions = serde_json::from_reader(reader)?;
    assumptions.validate()?;
    Ok(assumptions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjectionError;
    use crate::roster::{Rank, SubPopulation};

    #[test]
    fn test_partial_override_keeps_defaults() {
        let json = r#"{
            "retirement_years": 35,
            "ceilings": {
                "criminal": [10, 8, 6, 4],
                "biochemical": [1, 1, 1, 1],
                "medical_examiner": [2, 2, 2, 2],
                "odontologist": [3, 3, 3, 3]
            },
            "schedule": {
                "anchor_date": "2030-01-01",
                "promotion_months": [3, 9],
                "tenure_activation_date": "2030-06-01"
            }
        }"#;

        let assumptions = load_assumptions_from_reader(json.as_bytes()).expect("valid override");
        assert_eq!(assumptions.retirement_years, 35);
        assert_eq!(assumptions.baseline_offset_years, 4);
        assert_eq!(
            assumptions.ceilings.ceiling(SubPopulation::Criminal, Rank::TOP),
            Some(4)
        );
        assert_eq!(assumptions.schedule.promotion_months, [3, 9]);
        assert_eq!(assumptions.income.monthly_income(Rank::ENTRY), 27_737.24);
    }

    #[test]
    fn test_bundled_file_matches_production_values() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/assumptions.json");
        let assumptions = load_assumptions(&path).expect("bundled assumptions load");
        assert_eq!(assumptions, Assumptions::default_career());
    }

    #[test]
    fn test_invalid_override_rejected() {
        let json = r#"{ "income": [1000.0, 2000.0, -1.0, 4000.0] }"#;
        match load_assumptions_from_reader(json.as_bytes()) {
            Err(LoadError::Invalid(ProjectionError::InvalidIncome { rank, .. })) => {
                assert_eq!(rank, 3)
            }
            other => panic!("expected invalid income, got {:?}", other),
        }
    }
}
