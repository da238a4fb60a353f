//! Compare the vacancy-constrained status quo with a tenure-based scenario
//!
//! Both runs execute in parallel over the same roster and assumptions.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use career_projection::report::write_csv_path;
use career_projection::valuation::{compare_individuals, percent_change, ScenarioStatistics};
use career_projection::{ProjectionConfig, PromotionPolicy, ScenarioRunner, TenureThresholds};

#[derive(Debug, Parser)]
#[command(name = "compare_scenarios", version)]
#[command(about = "Compare status-quo promotions with a tenure-based promotion scenario")]
struct Args {
    /// Cleaned roster CSV
    #[arg(long)]
    roster: PathBuf,

    /// Optional JSON file overriding the production assumptions
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Tenure thresholds in years for the scenario
    #[arg(long, value_delimiter = ',', num_args = 1.., default_value = "5,10,15")]
    thresholds: Vec<u32>,

    /// Years to simulate
    #[arg(long, default_value_t = 35)]
    years: u32,

    /// Years of output used in the comparison
    #[arg(long)]
    display_years: Option<u32>,

    /// Annual discount rate
    #[arg(long, default_value_t = 0.06)]
    rate: f64,

    /// Output path for the per-individual comparison
    #[arg(long, default_value = "scenario_comparison.csv")]
    output: PathBuf,
}

fn print_statistics(stats: &ScenarioStatistics) {
    println!("{}", stats.scenario);
    println!("  Individuals:          {:>18}", stats.individuals);
    println!("  Total present value:  {:>18.2}", stats.total_present_value);
    println!("  Mean present value:   {:>18.2}", stats.mean_present_value);
    println!("  Median present value: {:>18.2}", stats.median_present_value);
    println!("  Std present value:    {:>18.2}", stats.std_present_value);
    println!("  Total nominal:        {:>18.2}", stats.total_nominal);
    println!("  Mean promotions:      {:>18.2}", stats.mean_promotions);
    println!("  Mean discount:        {:>17.2}%", stats.mean_discount_pct);
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let runner = ScenarioRunner::from_paths(&args.roster, args.assumptions.as_deref())
        .context("loading scenario inputs")?;

    let years = <[u32; 3]>::try_from(args.thresholds.as_slice())
        .map_err(|_| anyhow::anyhow!("expected three thresholds, got {:?}", args.thresholds))?;
    let tenure = PromotionPolicy::TenureBased(TenureThresholds::new(years)?);

    let status_quo = ProjectionConfig::new(args.years, PromotionPolicy::VacancyConstrained, args.rate);
    let scenario = ProjectionConfig::new(args.years, tenure, args.rate);
    let mut comparison = runner.compare(status_quo, scenario)?;

    if let Some(display_years) = args.display_years.filter(|&y| y < args.years) {
        let status_quo = comparison.status_quo.truncated(display_years);
        let scenario = comparison.scenario.truncated(display_years);
        comparison.individuals = compare_individuals(&status_quo, &scenario);
        comparison.statistics = [
            ScenarioStatistics::from_result(&status_quo.policy, &status_quo),
            ScenarioStatistics::from_result(&scenario.policy, &scenario),
        ];
    }

    println!("Scenario comparison over {} individual(s)\n", runner.roster().len());
    for stats in &comparison.statistics {
        print_statistics(stats);
        println!();
    }

    let [base, alternative] = &comparison.statistics;
    println!(
        "Total PV change: {:.2} ({:.2}%)",
        alternative.total_present_value - base.total_present_value,
        percent_change(base.total_present_value, alternative.total_present_value)
    );

    write_csv_path(&args.output, &comparison.individuals)
        .with_context(|| format!("writing {}", args.output.display()))?;
    println!("Comparison written to {}", args.output.display());

    Ok(())
}
