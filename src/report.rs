//! CSV output for detail, summary, cohort and comparison tables

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::LoadError;

/// Serialize `rows` as CSV with a header row
pub fn write_csv<W: Write, T: Serialize>(writer: W, rows: &[T]) -> Result<(), LoadError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write `rows` to a CSV file, replacing any existing file
pub fn write_csv_path<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), LoadError> {
    let file = File::create(path)?;
    write_csv(file, rows)?;
    log::info!("Wrote {} row(s) to {}", rows.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{run_projection, PromotionPolicy};
    use crate::roster::{IndividualInput, SubPopulation};
    use crate::valuation::compare_individuals;
    use crate::Assumptions;
    use chrono::NaiveDate;

    fn result() -> crate::ProjectionResult {
        let eligibility = NaiveDate::from_ymd_opt(2020, 5, 1).unwrap();
        let roster = vec![IndividualInput::new(9, "Expert Nine", SubPopulation::MedicalExaminer, 2, eligibility)];
        run_projection(&roster, 1, PromotionPolicy::VacancyConstrained, 0.06, &Assumptions::default_career())
            .unwrap()
    }

    fn to_string<T: Serialize>(rows: &[T]) -> String {
        let mut buffer = Vec::new();
        write_csv(&mut buffer, rows).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_detail_csv() {
        let csv = to_string(&result().detail);
        let mut lines = csv.lines();

        assert_eq!(
            lines.next(),
            Some(
                "id,name,sub_population,original_rank,rank,date,income,last_promotion,retirement_date,\
                 months_elapsed,discount_factor,present_value,cumulative_present_value,cumulative_nominal"
            )
        );
        let first = lines.next().unwrap();
        assert!(first.starts_with("9,Expert Nine,medical_examiner,2,2,2025-07-31,31699.35,,,0,1.0,"));
        assert_eq!(csv.lines().count(), 13);
    }

    #[test]
    fn test_summary_and_comparison_csv() {
        let result = result();
        let summary = to_string(&result.summary);
        assert!(summary.starts_with("id,name,original_rank,final_rank,sub_population,total_present_value,"));

        let comparison = to_string(&compare_individuals(&result, &result));
        let row = comparison.lines().nth(1).unwrap();
        assert!(row.ends_with(",0.0,0.0"));
    }

    #[test]
    fn test_empty_rows_write_nothing() {
        let rows: Vec<crate::valuation::IndividualSummary> = Vec::new();
        assert_eq!(to_string(&rows), "");
    }
}
