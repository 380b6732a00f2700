//! Risk profile catalog: target allocations, return and rebalancing terms

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Target share of one asset class within a profile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllocationTarget {
    pub asset_class: &'static str,
    /// Percentage of the portfolio (0-100)
    pub target_pct: f64,
}

const fn target(asset_class: &'static str, target_pct: f64) -> AllocationTarget {
    AllocationTarget { asset_class, target_pct }
}

const CONSERVATIVE_ALLOCATION: [AllocationTarget; 4] = [
    target("bonds", 60.0),
    target("stocks", 25.0),
    target("cash", 10.0),
    target("gold", 5.0),
];

const MODERATE_ALLOCATION: [AllocationTarget; 4] = [
    target("stocks", 50.0),
    target("bonds", 35.0),
    target("real_estate", 10.0),
    target("gold", 5.0),
];

const AGGRESSIVE_ALLOCATION: [AllocationTarget; 4] = [
    target("stocks", 75.0),
    target("alternative_investments", 15.0),
    target("bonds", 7.0),
    target("cash", 3.0),
];

const CONSERVATIVE_RECOMMENDATIONS: [&str; 5] = [
    "Focus on high-quality government and corporate bonds",
    "Invest in large-cap, dividend-paying stocks",
    "Maintain emergency fund in liquid assets",
    "Consider fixed deposits and debt mutual funds",
    "Avoid high-volatility investments",
];

const MODERATE_RECOMMENDATIONS: [&str; 5] = [
    "Diversify across equity and debt instruments",
    "Mix of large-cap and mid-cap stocks",
    "Include index funds for broad market exposure",
    "Consider REITs for real estate exposure",
    "Review portfolio quarterly",
];

const AGGRESSIVE_RECOMMENDATIONS: [&str; 6] = [
    "Focus on growth stocks and emerging markets",
    "Include small-cap and mid-cap stocks for higher returns",
    "Consider sector-specific funds (tech, healthcare)",
    "Explore alternative investments (crypto, commodities)",
    "Long-term horizon required (10+ years)",
    "Be prepared for market volatility",
];

/// Investor risk tolerance tier.
///
/// Every accessor is a pure lookup into static data. Adding a tier means
/// adding a variant here and filling in each `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskProfile {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskProfile {
    /// All tiers in catalog order
    pub const ALL: [RiskProfile; 3] = [
        RiskProfile::Conservative,
        RiskProfile::Moderate,
        RiskProfile::Aggressive,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RiskProfile::Conservative => "Conservative",
            RiskProfile::Moderate => "Moderate",
            RiskProfile::Aggressive => "Aggressive",
        }
    }

    /// Short label shown in strategy pickers (Low / Medium / High)
    pub fn tier_label(&self) -> &'static str {
        match self {
            RiskProfile::Conservative => "Low",
            RiskProfile::Moderate => "Medium",
            RiskProfile::Aggressive => "High",
        }
    }

    pub fn asset_allocation(&self) -> &'static [AllocationTarget] {
        match self {
            RiskProfile::Conservative => &CONSERVATIVE_ALLOCATION,
            RiskProfile::Moderate => &MODERATE_ALLOCATION,
            RiskProfile::Aggressive => &AGGRESSIVE_ALLOCATION,
        }
    }

    /// Target percentage for an asset class, 0 when the profile does not hold it
    pub fn target_pct(&self, asset_class: &str) -> f64 {
        self.asset_allocation()
            .iter()
            .find(|t| t.asset_class == asset_class)
            .map(|t| t.target_pct)
            .unwrap_or(0.0)
    }

    /// Expected annual return in percent (e.g. 9.0 for 9%)
    pub fn expected_annual_return_pct(&self) -> f64 {
        match self {
            RiskProfile::Conservative => 6.5,
            RiskProfile::Moderate => 9.0,
            RiskProfile::Aggressive => 12.0,
        }
    }

    /// Monthly compounding rate derived from the annual return
    pub fn monthly_rate(&self) -> f64 {
        self.expected_annual_return_pct() / 100.0 / 12.0
    }

    pub fn risk_level(&self) -> &'static str {
        match self {
            RiskProfile::Conservative => "Low Risk - Capital Preservation Focus",
            RiskProfile::Moderate => "Moderate Risk - Balanced Growth",
            RiskProfile::Aggressive => "High Risk - Maximum Growth Potential",
        }
    }

    /// Allowed drift from target, in percentage points, before rebalancing
    pub fn rebalancing_threshold_pct(&self) -> f64 {
        match self {
            RiskProfile::Conservative => 5.0,
            RiskProfile::Moderate => 7.0,
            RiskProfile::Aggressive => 10.0,
        }
    }

    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            RiskProfile::Conservative => &CONSERVATIVE_RECOMMENDATIONS,
            RiskProfile::Moderate => &MODERATE_RECOMMENDATIONS,
            RiskProfile::Aggressive => &AGGRESSIVE_RECOMMENDATIONS,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RiskProfile::Conservative => "Low risk, steady returns, capital preservation",
            RiskProfile::Moderate => "Balanced risk-return, diversified portfolio",
            RiskProfile::Aggressive => "High risk, maximum growth potential",
        }
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Serializes an allocation as a JSON object, keeping catalog order
#[derive(Debug, Clone, Copy)]
pub struct AllocationMap(pub &'static [AllocationTarget]);

impl Serialize for AllocationMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for t in self.0 {
            map.serialize_entry(t.asset_class, &t.target_pct)?;
        }
        map.end()
    }
}
