//! Request/response boundary for strategy listings and recommendations
//!
//! Payload shapes match what the web front end consumes. Transport (JSON over
//! HTTP, CLI output) is left to the binaries.

use crate::error::Result;
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult, SavingsPlan};
use crate::strategy::{AllocationMap, RiskProfile, StrategyFactory, StrategySummary};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Input for a recommendation.
///
/// Missing fields take the same defaults as the web form: Medium risk, no
/// savings, no contributions, ten years. Amounts may arrive as numbers or
/// numeric strings.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default = "default_risk_profile")]
    pub risk_profile: String,

    #[serde(default, deserialize_with = "amount")]
    pub initial_savings: f64,

    #[serde(default, deserialize_with = "amount")]
    pub monthly_contribution: f64,

    /// Signed so negative horizons can be rejected with a proper error
    #[serde(default = "default_years", deserialize_with = "whole_years")]
    pub years: i64,

    /// Include a year-by-year schedule in the projection
    #[serde(default)]
    pub include_schedule: bool,
}

fn default_risk_profile() -> String { "Medium".to_string() }
fn default_years() -> i64 { 10 }

impl Default for RecommendationRequest {
    fn default() -> Self {
        Self {
            risk_profile: default_risk_profile(),
            initial_savings: 0.0,
            monthly_contribution: 0.0,
            years: default_years(),
            include_schedule: false,
        }
    }
}

fn numeric_value<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<f64, D::Error> {
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| de::Error::custom(format!("{} is not representable", n))),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("'{}' is not a number", s))),
        other => Err(de::Error::custom(format!("expected a number, found {}", other))),
    }
}

fn amount<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<f64, D::Error> {
    numeric_value(deserializer)
}

fn whole_years<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<i64, D::Error> {
    let years = numeric_value(deserializer)?;
    if !years.is_finite() || years.abs() > i64::MAX as f64 {
        return Err(de::Error::custom(format!("{} is not a valid number of years", years)));
    }
    Ok(years.trunc() as i64)
}

/// Strategy section of a recommendation
#[derive(Debug, Clone, Serialize)]
pub struct StrategyDetails {
    /// The label as the caller supplied it
    pub risk_profile: String,
    pub risk_level: &'static str,
    pub expected_return: f64,
    pub asset_allocation: AllocationMap,
    pub rebalancing_threshold: f64,
    pub recommendations: &'static [&'static str],
}

impl StrategyDetails {
    pub fn new(label: &str, profile: RiskProfile) -> Self {
        Self {
            risk_profile: label.to_string(),
            risk_level: profile.risk_level(),
            expected_return: profile.expected_annual_return_pct(),
            asset_allocation: AllocationMap(profile.asset_allocation()),
            rebalancing_threshold: profile.rebalancing_threshold_pct(),
            recommendations: profile.recommendations(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub strategy: StrategyDetails,
    pub projection: ProjectionResult,
    /// Profile the label resolved to
    #[serde(skip)]
    pub resolved: RiskProfile,
}

/// Stateless front for the catalog and projection engine
#[derive(Debug, Clone, Default)]
pub struct Advisor {
    config: ProjectionConfig,
}

impl Advisor {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn list_strategies(&self) -> Vec<StrategySummary> {
        StrategyFactory::list_available()
    }

    /// Resolve the label, validate the plan, then project.
    ///
    /// Input is fully validated before any simulation runs.
    pub fn recommend(&self, request: &RecommendationRequest) -> Result<Recommendation> {
        if !StrategyFactory::recognizes(&request.risk_profile) {
            log::warn!(
                "unrecognized risk profile '{}', using {}",
                request.risk_profile,
                StrategyFactory::resolve(&request.risk_profile)
            );
        }
        let profile = StrategyFactory::resolve(&request.risk_profile);
        let plan = SavingsPlan::new(
            request.initial_savings,
            request.monthly_contribution,
            request.years,
        )?;

        log::debug!(
            "recommend {}: initial={} monthly={} years={}",
            profile,
            plan.initial_savings,
            plan.monthly_contribution,
            plan.years
        );

        let engine = ProjectionEngine::new(ProjectionConfig {
            detailed_output: self.config.detailed_output || request.include_schedule,
            ..self.config.clone()
        });
        let projection = engine.project(profile, &plan)?;

        Ok(Recommendation {
            strategy: StrategyDetails::new(&request.risk_profile, profile),
            projection,
            resolved: profile,
        })
    }
}

/// Strategy picker entries
pub fn list_strategies() -> Vec<StrategySummary> {
    Advisor::default().list_strategies()
}

/// Recommendation with the default projection config
pub fn recommend(
    risk_profile: &str,
    initial_savings: f64,
    monthly_contribution: f64,
    years: i64,
) -> Result<Recommendation> {
    Advisor::default().recommend(&RecommendationRequest {
        risk_profile: risk_profile.to_string(),
        initial_savings,
        monthly_contribution,
        years,
        include_schedule: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdvisorError;
    use serde_json::json;

    #[test]
    fn test_list_strategies() {
        let json = serde_json::to_value(list_strategies()).unwrap();
        assert_eq!(
            json[0],
            json!({
                "name": "Conservative",
                "risk_profile": "Low",
                "description": "Low risk, steady returns, capital preservation",
                "expected_return": "6.5%"
            })
        );
        assert_eq!(json.as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_recommend_payload_shape() {
        let rec = recommend("balanced", 0.0, 100.0, 1).unwrap();
        assert_eq!(rec.resolved, RiskProfile::Moderate);

        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["strategy"]["risk_profile"], "balanced");
        assert_eq!(json["strategy"]["risk_level"], "Moderate Risk - Balanced Growth");
        assert_eq!(json["strategy"]["expected_return"], 9.0);
        assert_eq!(json["strategy"]["rebalancing_threshold"], 7.0);
        assert_eq!(json["strategy"]["asset_allocation"]["real_estate"], 10.0);
        assert_eq!(json["strategy"]["recommendations"].as_array().unwrap().len(), 5);

        assert_eq!(
            json["projection"],
            json!({
                "total_value": 1250.76,
                "total_contributions": 1200.0,
                "investment_returns": 50.76,
                "initial_savings": 0.0,
                "expected_return": 9.0
            })
        );
        assert!(json.get("resolved").is_none());
    }

    #[test]
    fn test_unknown_label_still_recommends() {
        let rec = recommend("yolo", 1000.0, 0.0, 0).unwrap();
        assert_eq!(rec.resolved, RiskProfile::Moderate);
        assert_eq!(rec.strategy.risk_profile, "yolo");
        assert_eq!(rec.projection.total_value, 1000.0);
    }

    #[test]
    fn test_invalid_input_is_structured_error() {
        let err = recommend("high", -5.0, 0.0, 1).unwrap_err();
        assert!(matches!(err, AdvisorError::InvalidInput { field: "initial_savings", .. }));

        let err = recommend("high", 0.0, 0.0, -1).unwrap_err();
        assert_eq!(err.kind(), "invalid_input");
    }

    #[test]
    fn test_request_defaults() {
        let request: RecommendationRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.risk_profile, "Medium");
        assert_eq!(request.initial_savings, 0.0);
        assert_eq!(request.monthly_contribution, 0.0);
        assert_eq!(request.years, 10);
        assert!(!request.include_schedule);
    }

    #[test]
    fn test_request_accepts_numeric_strings() {
        let request: RecommendationRequest = serde_json::from_value(json!({
            "risk_profile": "High",
            "initial_savings": "1000.50",
            "monthly_contribution": 25,
            "years": "7.9"
        }))
        .unwrap();
        assert_eq!(request.initial_savings, 1000.5);
        assert_eq!(request.monthly_contribution, 25.0);
        assert_eq!(request.years, 7);
    }

    #[test]
    fn test_request_rejects_non_numeric() {
        let result: std::result::Result<RecommendationRequest, _> =
            serde_json::from_value(json!({ "initial_savings": "plenty" }));
        assert!(result.is_err());

        let result: std::result::Result<RecommendationRequest, _> =
            serde_json::from_value(json!({ "years": [1, 2] }));
        assert!(result.is_err());
    }

    #[test]
    fn test_schedule_on_request() {
        let advisor = Advisor::default();
        let request = RecommendationRequest {
            risk_profile: "moderate".to_string(),
            initial_savings: 1000.0,
            monthly_contribution: 100.0,
            years: 3,
            include_schedule: true,
        };
        let rec = advisor.recommend(&request).unwrap();
        assert_eq!(rec.projection.yearly.len(), 3);

        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["projection"]["yearly"][0]["total_value"], 2344.57);
    }

    #[test]
    fn test_horizon_cap_from_config() {
        let advisor = Advisor::new(ProjectionConfig {
            max_years: 20,
            ..Default::default()
        });
        let request = RecommendationRequest {
            years: 21,
            ..Default::default()
        };
        assert!(advisor.recommend(&request).is_err());
    }
}
