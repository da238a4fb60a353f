//! Scenario runner for batch and side-by-side projections
//!
//! Holds assumptions and the roster once, then runs any number of
//! configurations against them. Runs share nothing mutable, so batches fan out
//! across threads with rayon.

use std::path::Path;

use rayon::prelude::*;

use crate::assumptions::Assumptions;
use crate::error::{LoadError, ProjectionError};
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};
use crate::roster::{load_roster, IndividualInput};
use crate::valuation::{compare_individuals, IndividualComparison, ScenarioStatistics};

/// Status quo against an alternative scenario
#[derive(Debug, Clone)]
pub struct ScenarioComparison {
    pub status_quo: ProjectionResult,
    pub scenario: ProjectionResult,
    pub individuals: Vec<IndividualComparison>,
    pub statistics: [ScenarioStatistics; 2],
}

/// Pre-loaded scenario runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_paths(roster_path, None)?;
/// let results = runner.run_scenarios(&[status_quo, tenure])?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    assumptions: Assumptions,
    roster: Vec<IndividualInput>,
}

impl ScenarioRunner {
    /// Create a runner with production assumptions
    pub fn new(roster: Vec<IndividualInput>) -> Self {
        Self::with_assumptions(Assumptions::default_career(), roster)
    }

    pub fn with_assumptions(assumptions: Assumptions, roster: Vec<IndividualInput>) -> Self {
        Self { assumptions, roster }
    }

    /// Load the roster CSV and, when given, an assumptions override file
    pub fn from_paths(roster_path: &Path, assumptions_path: Option<&Path>) -> Result<Self, LoadError> {
        let assumptions = match assumptions_path {
            Some(path) => Assumptions::from_json_path(path)?,
            None => Assumptions::default_career(),
        };
        let roster = load_roster(roster_path)?;
        Ok(Self::with_assumptions(assumptions, roster))
    }

    /// Run a single projection
    pub fn run(&self, config: ProjectionConfig) -> Result<ProjectionResult, ProjectionError> {
        ProjectionEngine::new(self.assumptions.clone(), config)?.project(&self.roster)
    }

    /// Run every configuration in parallel; results keep the input order
    pub fn run_scenarios(&self, configs: &[ProjectionConfig]) -> Result<Vec<ProjectionResult>, ProjectionError> {
        configs.par_iter().map(|config| self.run(config.clone())).collect()
    }

    /// Run status quo and scenario concurrently and compare them
    pub fn compare(
        &self,
        status_quo: ProjectionConfig,
        scenario: ProjectionConfig,
    ) -> Result<ScenarioComparison, ProjectionError> {
        let (base, alternative) = rayon::join(|| self.run(status_quo), || self.run(scenario));
        let (status_quo, scenario) = (base?, alternative?);

        let individuals = compare_individuals(&status_quo, &scenario);
        let statistics = [
            ScenarioStatistics::from_result(&status_quo.policy, &status_quo),
            ScenarioStatistics::from_result(&scenario.policy, &scenario),
        ];

        Ok(ScenarioComparison {
            status_quo,
            scenario,
            individuals,
            statistics,
        })
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Mutable access for sensitivity runs (e.g. ceiling overrides)
    pub fn assumptions_mut(&mut self) -> &mut Assumptions {
        &mut self.assumptions
    }

    pub fn roster(&self) -> &[IndividualInput] {
        &self.roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{PromotionPolicy, TenureThresholds};
    use crate::roster::SubPopulation;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn roster() -> Vec<IndividualInput> {
        vec![
            IndividualInput::new(1, "A", SubPopulation::Criminal, 1, ymd(2021, 5, 1)),
            IndividualInput::new(2, "B", SubPopulation::Criminal, 2, ymd(2018, 11, 1)),
            IndividualInput::new(3, "C", SubPopulation::Odontologist, 3, ymd(2012, 5, 1)),
        ]
    }

    fn tenure_config() -> ProjectionConfig {
        ProjectionConfig::new(
            20,
            PromotionPolicy::TenureBased(TenureThresholds::new([5, 10, 15]).unwrap()),
            0.06,
        )
    }

    #[test]
    fn test_run_scenarios_keeps_order() {
        let runner = ScenarioRunner::new(roster());
        let configs: Vec<_> = [0.03, 0.06, 0.09]
            .iter()
            .map(|&rate| ProjectionConfig::new(10, PromotionPolicy::VacancyConstrained, rate))
            .collect();

        let results = runner.run_scenarios(&configs).unwrap();
        assert_eq!(results.len(), 3);

        // Higher discount rate gives a lower present value for the same stream
        assert!(results[0].total_present_value() > results[1].total_present_value());
        assert!(results[1].total_present_value() > results[2].total_present_value());
        assert_eq!(results[0].total_nominal(), results[2].total_nominal());
    }

    #[test]
    fn test_invalid_config_fails_batch() {
        let runner = ScenarioRunner::new(roster());
        let configs = [ProjectionConfig::default(), ProjectionConfig::new(0, PromotionPolicy::VacancyConstrained, 0.06)];
        assert_eq!(runner.run_scenarios(&configs), Err(ProjectionError::InvalidHorizon(0)));
    }

    #[test]
    fn test_compare_status_quo_and_tenure() {
        let runner = ScenarioRunner::new(roster());
        let status_quo = ProjectionConfig::new(20, PromotionPolicy::VacancyConstrained, 0.06);

        let comparison = runner.compare(status_quo, tenure_config()).unwrap();

        assert_eq!(comparison.individuals.len(), 3);
        assert_eq!(comparison.statistics[0].scenario, "vacancy");
        assert_eq!(comparison.statistics[1].scenario, "tenure[5,10,15]");
        assert_eq!(comparison.statistics[1].individuals, 3);
    }
}
