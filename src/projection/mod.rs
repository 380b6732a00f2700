//! Compounding projections of a savings plan under a risk profile

mod plan;
mod engine;
mod schedule;

pub use plan::{SavingsPlan, MAX_PLAN_YEARS};
pub use engine::{project, ProjectionEngine, ProjectionConfig, DEFAULT_MAX_YEARS};
pub use schedule::{round_cents, ProjectionResult, YearRow};
