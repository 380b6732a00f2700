//! Investment Advisor CLI
//!
//! Lists strategies, projects savings plans and checks allocation drift

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use investment_advisor::{
    rebalancing::{check_drift, load_holdings},
    Advisor, ProjectionConfig, RecommendationRequest, SavingsPlan, ScenarioRunner,
    StrategyFactory,
};
use investment_advisor::projection::DEFAULT_MAX_YEARS;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "investment_advisor", version, about = "Risk-profile investment projections")]
struct Cli {
    /// Longest projection horizon accepted, in years
    #[arg(long, global = true, env = "ADVISOR_MAX_YEARS", default_value_t = DEFAULT_MAX_YEARS)]
    max_years: u32,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the available strategies
    List,
    /// Recommend a strategy and project a savings plan
    Recommend {
        /// Risk label, e.g. low, balanced, aggressive
        #[arg(short, long, default_value = "Medium")]
        risk_profile: String,
        #[command(flatten)]
        plan: PlanArgs,
        /// Print year-end balances
        #[arg(long)]
        schedule: bool,
    },
    /// Project the same plan under every strategy
    Compare {
        #[command(flatten)]
        plan: PlanArgs,
    },
    /// Check holdings against a strategy's target allocation
    Rebalance {
        #[arg(short, long, default_value = "Medium")]
        risk_profile: String,
        /// CSV with header asset_class,market_value
        #[arg(long)]
        holdings: PathBuf,
    },
}

#[derive(Args)]
struct PlanArgs {
    #[arg(long, default_value_t = 0.0)]
    initial_savings: f64,
    #[arg(long, default_value_t = 0.0)]
    monthly_contribution: f64,
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    years: i64,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = ProjectionConfig {
        max_years: cli.max_years,
        ..Default::default()
    };

    match cli.command {
        Command::List => {
            let strategies = StrategyFactory::list_available();
            if cli.json {
                return print_json(&strategies);
            }
            println!("{:<14} {:<8} {:>8}  {}", "Strategy", "Risk", "Return", "Description");
            println!("{}", "-".repeat(78));
            for s in &strategies {
                println!("{:<14} {:<8} {:>8}  {}", s.name, s.risk_profile, s.expected_return, s.description);
            }
        }

        Command::Recommend { risk_profile, plan, schedule } => {
            let advisor = Advisor::new(config);
            let request = RecommendationRequest {
                risk_profile,
                initial_savings: plan.initial_savings,
                monthly_contribution: plan.monthly_contribution,
                years: plan.years,
                include_schedule: schedule,
            };
            let rec = advisor.recommend(&request).context("recommendation failed")?;
            if cli.json {
                return print_json(&rec);
            }

            let profile = rec.resolved;
            println!("Strategy: {} ({})", profile, profile.risk_level());
            println!("  Expected Return: {:.1}%", profile.expected_annual_return_pct());
            println!("  Rebalance When Drift Exceeds: {:.1}%", profile.rebalancing_threshold_pct());
            println!("\nAsset Allocation:");
            for t in profile.asset_allocation() {
                println!("  {:<24} {:>6.1}%", t.asset_class, t.target_pct);
            }
            println!("\nRecommendations:");
            for line in profile.recommendations() {
                println!("  - {}", line);
            }

            let p = &rec.projection;
            if !p.yearly.is_empty() {
                println!("\n{:>5} {:>16} {:>16} {:>16}", "Year", "Value", "Contributed", "Returns");
                println!("{}", "-".repeat(56));
                for row in &p.yearly {
                    println!("{:>5} {:>16.2} {:>16.2} {:>16.2}",
                        row.year, row.total_value, row.total_contributions, row.investment_returns);
                }
            }

            println!("\nProjection ({} years):", request.years);
            println!("  Initial Savings: ${:.2}", p.initial_savings);
            println!("  Total Contributions: ${:.2}", p.total_contributions);
            println!("  Investment Returns: ${:.2}", p.investment_returns);
            println!("  Total Value: ${:.2}", p.total_value);
        }

        Command::Compare { plan } => {
            let runner = ScenarioRunner::with_config(config);
            let plan = SavingsPlan::new(plan.initial_savings, plan.monthly_contribution, plan.years)?;
            let results = runner.compare(&plan).context("comparison failed")?;
            if cli.json {
                return print_json(&results);
            }
            println!("{:<14} {:>8} {:>16} {:>16} {:>16}",
                "Strategy", "Return", "Total Value", "Contributed", "Returns");
            println!("{}", "-".repeat(74));
            for r in &results {
                println!("{:<14} {:>7.1}% {:>16.2} {:>16.2} {:>16.2}",
                    r.profile.name(),
                    r.projection.expected_return,
                    r.projection.total_value,
                    r.projection.total_contributions,
                    r.projection.investment_returns,
                );
            }
        }

        Command::Rebalance { risk_profile, holdings: path } => {
            let profile = StrategyFactory::resolve(&risk_profile);
            let holdings = load_holdings(&path)
                .with_context(|| format!("failed to load holdings from {}", path.display()))?;
            let report = check_drift(profile, &holdings)?;
            if cli.json {
                return print_json(&report);
            }
            println!("Strategy: {} (threshold {:.1}%)", profile, report.threshold_pct);
            println!("Portfolio Value: ${:.2}\n", report.total_value);
            println!("{:<24} {:>8} {:>8} {:>8}", "Asset Class", "Target", "Current", "Drift");
            println!("{}", "-".repeat(52));
            for a in &report.assets {
                println!("{:<24} {:>7.1}% {:>7.1}% {:>+7.1}%{}",
                    a.asset_class, a.target_pct, a.current_pct, a.drift_pct,
                    if a.exceeds_threshold { " *" } else { "" });
            }
            if report.needs_rebalancing {
                println!("\nRebalancing recommended (max drift {:.1}%)", report.max_drift_pct());
            } else {
                println!("\nWithin tolerance");
            }
        }
    }

    Ok(())
}
