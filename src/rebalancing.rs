//! Drift check of current holdings against a profile's target allocation
//!
//! Holdings can be supplied directly or loaded from a CSV with the header
//! `asset_class,market_value`.

use crate::error::{ensure_amount, AdvisorError, Result};
use crate::projection::round_cents;
use crate::strategy::RiskProfile;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Current market value held in one asset class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub asset_class: String,
    pub market_value: f64,
}

impl Holding {
    pub fn new(asset_class: impl Into<String>, market_value: f64) -> Self {
        Self {
            asset_class: asset_class.into(),
            market_value,
        }
    }
}

/// Current vs. target share for one asset class
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetDrift {
    pub asset_class: String,
    pub target_pct: f64,
    pub current_pct: f64,
    /// `current_pct - target_pct`, in percentage points
    pub drift_pct: f64,
    pub exceeds_threshold: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RebalancingReport {
    pub profile: RiskProfile,
    pub threshold_pct: f64,
    pub total_value: f64,
    pub needs_rebalancing: bool,
    /// Target classes first in catalog order, then classes the profile does not hold
    pub assets: Vec<AssetDrift>,
}

impl RebalancingReport {
    /// Largest absolute drift across all classes
    pub fn max_drift_pct(&self) -> f64 {
        self.assets
            .iter()
            .map(|a| a.drift_pct.abs())
            .fold(0.0, f64::max)
    }
}

fn normalize_class(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Merge duplicate classes and validate amounts, preserving first-seen order
fn consolidate(holdings: &[Holding]) -> Result<Vec<(String, f64)>> {
    let mut merged: Vec<(String, f64)> = Vec::new();

    for holding in holdings {
        let class = normalize_class(&holding.asset_class);
        if class.is_empty() {
            return Err(AdvisorError::invalid("asset_class", "asset class cannot be empty"));
        }
        let value = ensure_amount("market_value", holding.market_value)?;

        match merged.iter_mut().find(|(c, _)| *c == class) {
            Some((_, total)) => *total += value,
            None => merged.push((class, value)),
        }
    }

    Ok(merged)
}

/// Compare holdings to the profile's targets.
///
/// Rebalancing is needed when any class drifts from its target by more
/// than the profile's threshold.
pub fn check_drift(profile: RiskProfile, holdings: &[Holding]) -> Result<RebalancingReport> {
    let merged = consolidate(holdings)?;
    let total: f64 = merged.iter().map(|(_, v)| v).sum();

    if !total.is_finite() {
        return Err(AdvisorError::invalid("market_value", "portfolio total is not finite"));
    }
    if total <= 0.0 {
        return Err(AdvisorError::invalid("holdings", "portfolio has no market value"));
    }

    let threshold = profile.rebalancing_threshold_pct();
    let current_pct = |class: &str| {
        merged
            .iter()
            .find(|(c, _)| c == class)
            .map(|(_, v)| v / total * 100.0)
            .unwrap_or(0.0)
    };
    let drift_row = |class: &str, target_pct: f64| {
        let current = current_pct(class);
        let drift = current - target_pct;
        AssetDrift {
            asset_class: class.to_string(),
            target_pct,
            current_pct: round_cents(current),
            drift_pct: round_cents(drift),
            exceeds_threshold: drift.abs() > threshold,
        }
    };

    let mut assets: Vec<AssetDrift> = profile
        .asset_allocation()
        .iter()
        .map(|t| drift_row(t.asset_class, t.target_pct))
        .collect();

    assets.extend(
        merged
            .iter()
            .filter(|(class, _)| !profile.asset_allocation().iter().any(|t| t.asset_class == class.as_str()))
            .map(|(class, _)| drift_row(class.as_str(), 0.0)),
    );

    let needs_rebalancing = assets.iter().any(|a| a.exceeds_threshold);

    Ok(RebalancingReport {
        profile,
        threshold_pct: threshold,
        total_value: round_cents(total),
        needs_rebalancing,
        assets,
    })
}

/// Read holdings from CSV (`asset_class,market_value`)
pub fn load_holdings_from_reader<R: Read>(reader: R) -> Result<Vec<Holding>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut holdings = Vec::new();
    for row in reader.deserialize() {
        let holding: Holding = row?;
        holdings.push(holding);
    }
    Ok(holdings)
}

/// Read holdings from a CSV file
pub fn load_holdings(path: &Path) -> Result<Vec<Holding>> {
    let file = File::open(path)?;
    load_holdings_from_reader(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn on_target(profile: RiskProfile) -> Vec<Holding> {
        profile
            .asset_allocation()
            .iter()
            .map(|t| Holding::new(t.asset_class, t.target_pct * 1000.0))
            .collect()
    }

    #[test]
    fn test_on_target_portfolio() {
        for profile in RiskProfile::ALL {
            let report = check_drift(profile, &on_target(profile)).unwrap();
            assert!(!report.needs_rebalancing);
            assert_eq!(report.total_value, 100_000.0);
            assert_abs_diff_eq!(report.max_drift_pct(), 0.0, epsilon = 1e-9);
            assert_eq!(report.assets.len(), profile.asset_allocation().len());
        }
    }

    #[test]
    fn test_drift_within_threshold() {
        // Moderate: stocks 56 vs 50 is a 6 point drift, threshold is 7
        let holdings = vec![
            Holding::new("stocks", 56.0),
            Holding::new("bonds", 29.0),
            Holding::new("real_estate", 10.0),
            Holding::new("gold", 5.0),
        ];
        let report = check_drift(RiskProfile::Moderate, &holdings).unwrap();
        assert!(!report.needs_rebalancing);
        assert_eq!(report.assets[0].drift_pct, 6.0);
        assert_eq!(report.assets[1].drift_pct, -6.0);
    }

    #[test]
    fn test_drift_beyond_threshold() {
        // Conservative threshold is 5 points; bonds at 50 vs 60 drift by 10
        let holdings = vec![
            Holding::new("bonds", 50.0),
            Holding::new("stocks", 35.0),
            Holding::new("cash", 10.0),
            Holding::new("gold", 5.0),
        ];
        let report = check_drift(RiskProfile::Conservative, &holdings).unwrap();
        assert!(report.needs_rebalancing);
        assert!(report.assets[0].exceeds_threshold);
        assert!(report.assets[1].exceeds_threshold);
        assert!(!report.assets[2].exceeds_threshold);
        assert_eq!(report.max_drift_pct(), 10.0);
    }

    #[test]
    fn test_untargeted_and_missing_classes() {
        let holdings = vec![Holding::new("stocks", 80.0), Holding::new("Crypto ", 20.0)];
        let report = check_drift(RiskProfile::Aggressive, &holdings).unwrap();

        let crypto = report.assets.last().unwrap();
        assert_eq!(crypto.asset_class, "crypto");
        assert_eq!(crypto.target_pct, 0.0);
        assert_eq!(crypto.current_pct, 20.0);
        assert!(crypto.exceeds_threshold);

        let alternatives = &report.assets[1];
        assert_eq!(alternatives.asset_class, "alternative_investments");
        assert_eq!(alternatives.current_pct, 0.0);
        assert_eq!(alternatives.drift_pct, -15.0);
    }

    #[test]
    fn test_duplicate_classes_are_summed() {
        let holdings = vec![
            Holding::new("Stocks", 30.0),
            Holding::new("stocks", 20.0),
            Holding::new("bonds", 35.0),
            Holding::new("real_estate", 10.0),
            Holding::new("gold", 5.0),
        ];
        let report = check_drift(RiskProfile::Moderate, &holdings).unwrap();
        assert_eq!(report.assets.len(), 4);
        assert_eq!(report.assets[0].current_pct, 50.0);
        assert!(!report.needs_rebalancing);
    }

    #[test]
    fn test_invalid_holdings() {
        let err = check_drift(RiskProfile::Moderate, &[]).unwrap_err();
        assert!(matches!(err, AdvisorError::InvalidInput { field: "holdings", .. }));

        let err = check_drift(RiskProfile::Moderate, &[Holding::new("stocks", 0.0)]).unwrap_err();
        assert!(matches!(err, AdvisorError::InvalidInput { field: "holdings", .. }));

        let err = check_drift(RiskProfile::Moderate, &[Holding::new("stocks", -5.0)]).unwrap_err();
        assert!(matches!(err, AdvisorError::InvalidInput { field: "market_value", .. }));

        let err = check_drift(RiskProfile::Moderate, &[Holding::new("  ", 5.0)]).unwrap_err();
        assert!(matches!(err, AdvisorError::InvalidInput { field: "asset_class", .. }));
    }

    #[test]
    fn test_load_holdings_from_reader() {
        let data = "asset_class,market_value\nstocks, 7500\n bonds ,2500.50\n";
        let holdings = load_holdings_from_reader(data.as_bytes()).unwrap();
        assert_eq!(holdings.len(), 2);
        assert_eq!(holdings[0], Holding::new("stocks", 7500.0));
        assert_eq!(holdings[1], Holding::new("bonds", 2500.5));
    }

    #[test]
    fn test_load_holdings_bad_amount() {
        let data = "asset_class,market_value\nstocks,lots\n";
        let err = load_holdings_from_reader(data.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), "csv");
    }

    #[test]
    fn test_load_holdings_file() {
        let path = std::env::temp_dir().join(format!("advisor_holdings_{}.csv", std::process::id()));
        std::fs::write(&path, "asset_class,market_value\nstocks,100\n").unwrap();
        let holdings = load_holdings(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(holdings, vec![Holding::new("stocks", 100.0)]);

        let err = load_holdings(Path::new("/nonexistent/holdings.csv")).unwrap_err();
        assert_eq!(err.kind(), "io");
    }
}
