//! Caller-supplied savings plan for a projection

use crate::error::{ensure_amount, AdvisorError, Result};
use serde::{Deserialize, Serialize};

/// Longest horizon whose month count fits in a `u32`
pub const MAX_PLAN_YEARS: u32 = u32::MAX / 12;

/// Validated projection input: starting balance, fixed monthly deposit, horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsPlan {
    pub initial_savings: f64,
    pub monthly_contribution: f64,
    pub years: u32,
}

impl SavingsPlan {
    /// Build a plan, rejecting negative or non-finite amounts and negative years.
    ///
    /// `years` is signed so a negative horizon is reported instead of being
    /// read as an empty simulation.
    pub fn new(initial_savings: f64, monthly_contribution: f64, years: i64) -> Result<Self> {
        let initial_savings = ensure_amount("initial_savings", initial_savings)?;
        let monthly_contribution = ensure_amount("monthly_contribution", monthly_contribution)?;

        if years < 0 {
            return Err(AdvisorError::invalid("years", format!("{} must not be negative", years)));
        }
        let years = u32::try_from(years)
            .ok()
            .filter(|&y| y <= MAX_PLAN_YEARS)
            .ok_or_else(|| AdvisorError::invalid("years", format!("{} is too large", years)))?;

        Ok(Self {
            initial_savings,
            monthly_contribution,
            years,
        })
    }

    /// Number of monthly steps, `None` if it does not fit in a `u32`
    pub fn months(&self) -> Option<u32> {
        self.years.checked_mul(12)
    }

    /// Same amounts over a different horizon
    pub fn with_years(&self, years: u32) -> Self {
        Self { years, ..*self }
    }
}
