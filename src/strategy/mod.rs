//! Risk profile catalog and label resolution

mod profile;
mod factory;

pub use profile::{RiskProfile, AllocationTarget, AllocationMap};
pub use factory::{StrategyFactory, StrategySummary, DEFAULT_PROFILE};
