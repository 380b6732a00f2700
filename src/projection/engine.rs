//! Monthly compounding projection engine

use crate::error::{AdvisorError, Result};
use crate::strategy::RiskProfile;
use super::plan::SavingsPlan;
use super::schedule::{ProjectionResult, YearRow};

/// Default cap on the projection horizon
pub const DEFAULT_MAX_YEARS: u32 = 100;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Longest horizon accepted, in years
    pub max_years: u32,

    /// Whether to record a year-end row for every projected year
    pub detailed_output: bool,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            max_years: DEFAULT_MAX_YEARS,
            detailed_output: false,
        }
    }
}

/// Projection engine. Holds configuration only, so one instance can be
/// shared across threads and reused for any number of runs.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Simulate the plan under the profile's expected return.
    ///
    /// Each month the balance grows by the monthly rate and then receives the
    /// contribution. The recurrence is evaluated step by step rather than via
    /// the annuity formula so cent rounding matches over long horizons.
    pub fn project(&self, profile: RiskProfile, plan: &SavingsPlan) -> Result<ProjectionResult> {
        if plan.years > self.config.max_years {
            return Err(AdvisorError::invalid(
                "years",
                format!("{} exceeds the maximum horizon of {} years", plan.years, self.config.max_years),
            ));
        }

        let months = plan.months().ok_or_else(|| {
            AdvisorError::invalid("years", format!("{} years is too many months to simulate", plan.years))
        })?;

        let monthly_rate = profile.monthly_rate();
        let growth = 1.0 + monthly_rate;

        let mut value = plan.initial_savings;
        let mut contributed = 0.0;
        let mut yearly = Vec::new();

        for month in 1..=months {
            value = value * growth + plan.monthly_contribution;
            contributed += plan.monthly_contribution;

            if !value.is_finite() || !contributed.is_finite() {
                return Err(AdvisorError::Overflow { month });
            }

            if self.config.detailed_output && month % 12 == 0 {
                yearly.push(YearRow::new(month / 12, value, contributed, plan.initial_savings));
            }
        }

        let mut result = ProjectionResult::from_totals(
            value,
            contributed,
            plan.initial_savings,
            profile.expected_annual_return_pct(),
        );
        result.yearly = yearly;
        Ok(result)
    }
}

/// Project with the default configuration
pub fn project(
    profile: RiskProfile,
    initial_savings: f64,
    monthly_contribution: f64,
    years: i64,
) -> Result<ProjectionResult> {
    let plan = SavingsPlan::new(initial_savings, monthly_contribution, years)?;
    ProjectionEngine::default().project(profile, &plan)
}
