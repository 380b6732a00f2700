//! Resolve free-text risk labels to catalog profiles

use super::RiskProfile;
use serde::Serialize;

/// Profile used whenever a label is not recognized (including empty input)
pub const DEFAULT_PROFILE: RiskProfile = RiskProfile::Moderate;

/// Display entry for a strategy picker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategySummary {
    pub name: &'static str,
    pub risk_profile: &'static str,
    pub description: &'static str,
    /// Formatted annual return, e.g. "9.0%"
    pub expected_return: String,
}

pub struct StrategyFactory;

impl StrategyFactory {
    fn lookup(label: &str) -> Option<RiskProfile> {
        match label.trim().to_lowercase().as_str() {
            "low" | "conservative" => Some(RiskProfile::Conservative),
            "medium" | "moderate" | "balanced" => Some(RiskProfile::Moderate),
            "high" | "aggressive" => Some(RiskProfile::Aggressive),
            _ => None,
        }
    }

    /// Map a label to a profile, case and surrounding whitespace ignored.
    ///
    /// Anything unrecognized silently becomes [`DEFAULT_PROFILE`]. This masks
    /// typos but existing callers depend on it; use [`Self::recognizes`] to
    /// detect the fallback.
    pub fn resolve(label: &str) -> RiskProfile {
        Self::lookup(label).unwrap_or(DEFAULT_PROFILE)
    }

    /// Whether `resolve` matched a known synonym rather than defaulting
    pub fn recognizes(label: &str) -> bool {
        Self::lookup(label).is_some()
    }

    pub fn list_available() -> Vec<StrategySummary> {
        RiskProfile::ALL
            .iter()
            .map(|profile| StrategySummary {
                name: profile.name(),
                risk_profile: profile.tier_label(),
                description: profile.description(),
                expected_return: format!("{:.1}%", profile.expected_annual_return_pct()),
            })
            .collect()
    }
}
