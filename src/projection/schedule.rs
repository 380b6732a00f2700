//! Projection output structures

use serde::{Deserialize, Serialize};

/// Round a monetary amount to cents, half-cent ties to even. Only applied to
/// output records.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Balances at the end of one completed projection year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearRow {
    pub year: u32,
    pub total_value: f64,
    pub total_contributions: f64,
    pub investment_returns: f64,
}

impl YearRow {
    pub fn new(year: u32, value: f64, contributed: f64, initial_savings: f64) -> Self {
        Self {
            year,
            total_value: round_cents(value),
            total_contributions: round_cents(contributed),
            investment_returns: round_cents(value - initial_savings - contributed),
        }
    }
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Final portfolio value, rounded to cents
    pub total_value: f64,

    /// Sum of monthly contributions, rounded to cents
    pub total_contributions: f64,

    /// Growth beyond what was paid in, rounded to cents
    pub investment_returns: f64,

    /// Echoed as supplied
    pub initial_savings: f64,

    /// Annual return percentage the projection compounded at
    pub expected_return: f64,

    /// Year-end balances, only filled for detailed projections
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub yearly: Vec<YearRow>,
}

impl ProjectionResult {
    /// Build the headline record from full-precision simulation totals
    pub fn from_totals(value: f64, contributed: f64, initial_savings: f64, expected_return: f64) -> Self {
        Self {
            total_value: round_cents(value),
            total_contributions: round_cents(contributed),
            investment_returns: round_cents(value - initial_savings - contributed),
            initial_savings,
            expected_return,
            yearly: Vec::new(),
        }
    }
}
