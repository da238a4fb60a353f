//! Load cleaned rosters from CSV
//!
//! Expected columns: `id,name,sub_population,original_rank,eligibility_date,
//! early_promotion,baseline_date`. Dates are `YYYY-MM-DD`; the last two
//! columns may be left empty.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::Reader;

use super::IndividualInput;
use crate::error::LoadError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw CSV row matching the cleaned roster columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    id: u64,
    name: String,
    sub_population: String,
    original_rank: u8,
    #[serde(default)]
    eligibility_date: String,
    #[serde(default)]
    early_promotion: String,
    #[serde(default)]
    baseline_date: String,
}

impl CsvRow {
    fn into_input(self, row: usize) -> Result<IndividualInput, LoadError> {
        let eligibility_date = parse_optional_date(&self.eligibility_date, row, "eligibility_date")?;
        let baseline_date = parse_optional_date(&self.baseline_date, row, "baseline_date")?;

        let early_promotion = match self.early_promotion.trim().to_ascii_lowercase().as_str() {
            "" | "0" | "false" | "no" => false,
            "1" | "true" | "yes" => true,
            _ => {
                return Err(LoadError::InvalidField {
                    row,
                    field: "early_promotion",
                    value: self.early_promotion,
                })
            }
        };

        Ok(IndividualInput {
            id: self.id,
            name: self.name,
            sub_population: self.sub_population,
            original_rank: self.original_rank,
            eligibility_date,
            early_promotion,
            baseline_date,
        })
    }
}

fn parse_optional_date(
    value: &str,
    row: usize,
    field: &'static str,
) -> Result<Option<NaiveDate>, LoadError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(Some)
        .map_err(|_| LoadError::InvalidField {
            row,
            field,
            value: value.to_string(),
        })
}

/// Load a roster from a CSV file
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Vec<IndividualInput>, LoadError> {
    let file = std::fs::File::open(path)?;
    load_roster_from_reader(file)
}

/// Load a roster from any reader (e.g., string buffer, network stream)
pub fn load_roster_from_reader<R: Read>(reader: R) -> Result<Vec<IndividualInput>, LoadError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut roster = Vec::new();

    for (index, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        // 1-based data row, header excluded
        roster.push(row.into_input(index + 1)?);
    }

    log::debug!("loaded {} roster rows", roster.len());
    Ok(roster)
}
