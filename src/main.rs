//! Career Projection CLI
//!
//! Runs one projection over a cleaned roster and writes detail and summary CSVs

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use career_projection::report::write_csv_path;
use career_projection::valuation::{RetirementAnalysis, ScenarioStatistics};
use career_projection::{Assumptions, ProjectionConfig, ProjectionEngine, PromotionPolicy};
use career_projection::roster::load_roster;

#[derive(Debug, Parser)]
#[command(name = "career_projection", version)]
#[command(about = "Project careers, income and present value for a roster of experts")]
struct Args {
    /// Cleaned roster CSV
    #[arg(long)]
    roster: PathBuf,

    /// Optional JSON file overriding the production assumptions
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Promotion policy
    #[arg(long, default_value = "vacancy")]
    #[arg(value_parser = ["vacancy", "tenure"])]
    policy: String,

    /// Tenure thresholds in years (tenure policy only), e.g. 5,10,15
    #[arg(long, value_delimiter = ',')]
    thresholds: Option<Vec<u32>>,

    /// Years to simulate
    #[arg(long, default_value_t = 35)]
    years: u32,

    /// Years of output to keep in reports (defaults to the full horizon)
    #[arg(long)]
    display_years: Option<u32>,

    /// Annual discount rate
    #[arg(long, default_value_t = 0.06)]
    rate: f64,

    /// Output path for the monthly detail table
    #[arg(long, default_value = "projection_detail.csv")]
    detail_output: PathBuf,

    /// Output path for the per-individual summary
    #[arg(long, default_value = "projection_summary.csv")]
    summary_output: PathBuf,
}

fn thresholds(args: &Args) -> Result<Option<[u32; 3]>> {
    match (&args.thresholds, args.policy.as_str()) {
        (None, "tenure") => Ok(Some([5, 10, 15])),
        (None, _) => Ok(None),
        (Some(values), _) => match <[u32; 3]>::try_from(values.as_slice()) {
            Ok(years) => Ok(Some(years)),
            Err(_) => bail!("expected three comma-separated thresholds, got {:?}", values),
        },
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Career Projection v{}", env!("CARGO_PKG_VERSION"));
    println!("========================\n");

    let assumptions = match &args.assumptions {
        Some(path) => Assumptions::from_json_path(path)
            .with_context(|| format!("loading assumptions from {}", path.display()))?,
        None => Assumptions::default_career(),
    };
    let roster = load_roster(&args.roster)
        .with_context(|| format!("loading roster from {}", args.roster.display()))?;
    println!("Roster: {} individual(s)", roster.len());

    let policy = PromotionPolicy::from_parts(&args.policy, thresholds(&args)?)?;
    let config = ProjectionConfig::new(args.years, policy, args.rate);
    let engine = ProjectionEngine::new(assumptions, config)?;
    let full = engine.project(&roster)?;

    let result = match args.display_years {
        Some(years) if years < args.years => full.truncated(years),
        _ => full,
    };

    let stats = ScenarioStatistics::from_result(&result.policy, &result);
    println!("Policy: {}", result.policy);
    println!("Discount rate: {:.2}%", result.annual_discount_rate * 100.0);
    println!("Monthly records: {}", result.detail.len());
    println!();
    println!("  Total nominal:       {:>18.2}", stats.total_nominal);
    println!("  Total present value: {:>18.2}", stats.total_present_value);
    println!("  Mean present value:  {:>18.2}", stats.mean_present_value);
    println!("  Median present value:{:>18.2}", stats.median_present_value);
    println!("  Mean promotions:     {:>18.2}", stats.mean_promotions);
    println!("  Mean discount:       {:>17.2}%", stats.mean_discount_pct);
    println!();

    let retirements = RetirementAnalysis::from_events(&result.retirements);
    if !retirements.totals_by_year.is_empty() {
        println!("{:>6} {:>12}", "Year", "Retirements");
        println!("{}", "-".repeat(19));
        for (year, count) in &retirements.totals_by_year {
            println!("{:>6} {:>12}", year, count);
        }
        println!();
    }

    println!("{:>8} {:<28} {:>5} {:>5} {:>16} {:>16} {:>6}", "ID", "Name", "Orig", "Final", "Nominal", "PV", "Promo");
    println!("{}", "-".repeat(92));
    for row in result.summary.iter().take(20) {
        println!(
            "{:>8} {:<28} {:>5} {:>5} {:>16.2} {:>16.2} {:>6}",
            row.id, row.name, row.original_rank, row.final_rank, row.total_nominal, row.total_present_value, row.promotion_count
        );
    }
    if result.summary.len() > 20 {
        println!("... {} more", result.summary.len() - 20);
    }

    write_csv_path(&args.detail_output, &result.detail)
        .with_context(|| format!("writing {}", args.detail_output.display()))?;
    write_csv_path(&args.summary_output, &result.summary)
        .with_context(|| format!("writing {}", args.summary_output.display()))?;
    println!("\nDetail written to {}", args.detail_output.display());
    println!("Summary written to {}", args.summary_output.display());

    Ok(())
}
