//! Investment Advisor - risk-profile strategies and savings projections
//!
//! This library provides:
//! - A fixed catalog of risk profiles (allocation, expected return, rebalancing terms)
//! - Free-text risk label resolution with a Moderate fallback
//! - Monthly compounding projections of a savings plan
//! - Side-by-side comparisons across profiles and horizons
//! - Allocation drift checks against a profile's targets

pub mod error;
pub mod strategy;
pub mod projection;
pub mod scenario;
pub mod rebalancing;
pub mod advisor;

// Re-export commonly used types
pub use error::{AdvisorError, Result};
pub use strategy::{RiskProfile, StrategyFactory, StrategySummary};
pub use projection::{ProjectionEngine, ProjectionConfig, ProjectionResult, SavingsPlan};
pub use scenario::ScenarioRunner;
pub use advisor::{Advisor, Recommendation, RecommendationRequest, list_strategies, recommend};
