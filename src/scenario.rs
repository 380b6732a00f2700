//! Scenario runner for batch projections
//!
//! Runs one savings plan under several risk profiles, or one profile over
//! several horizons. Runs share nothing mutable, so they are evaluated in
//! parallel and returned in input order.

use crate::error::Result;
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult, SavingsPlan};
use crate::strategy::RiskProfile;
use rayon::prelude::*;
use serde::Serialize;

/// One profile's projection within a comparison
#[derive(Debug, Clone, Serialize)]
pub struct ProfileProjection {
    pub profile: RiskProfile,
    pub projection: ProjectionResult,
}

/// Pre-configured scenario runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let plan = SavingsPlan::new(10_000.0, 250.0, 20)?;
/// for entry in runner.compare(&plan)? {
///     println!("{}: {:.2}", entry.profile, entry.projection.total_value);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create runner with the default projection config
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    /// Run a single projection
    pub fn run(&self, profile: RiskProfile, plan: &SavingsPlan) -> Result<ProjectionResult> {
        self.engine.project(profile, plan)
    }

    /// Project the same plan under every catalog profile, in catalog order
    pub fn compare(&self, plan: &SavingsPlan) -> Result<Vec<ProfileProjection>> {
        RiskProfile::ALL
            .par_iter()
            .map(|&profile| {
                self.engine
                    .project(profile, plan)
                    .map(|projection| ProfileProjection { profile, projection })
            })
            .collect()
    }

    /// Project one profile for each horizon, keeping the plan's amounts
    pub fn horizon_sweep(
        &self,
        profile: RiskProfile,
        plan: &SavingsPlan,
        years: &[u32],
    ) -> Result<Vec<ProjectionResult>> {
        years
            .par_iter()
            .map(|&y| self.engine.project(profile, &plan.with_years(y)))
            .collect()
    }

    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }
}
