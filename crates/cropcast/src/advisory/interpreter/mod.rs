mod config;
mod rules;

pub use config::InterpreterConfig;

use super::domain::{FeatureVector, YieldEstimate};
use serde::{Deserialize, Serialize};

/// Stateless interpreter that applies the threshold configuration to a
/// prediction and its input features. Pure: identical inputs always produce
/// identical output.
pub struct OutcomeInterpreter {
    config: InterpreterConfig,
}

impl OutcomeInterpreter {
    pub fn new(config: InterpreterConfig) -> Self {
        Self { config }
    }

    pub fn interpret(
        &self,
        features: &FeatureVector,
        estimate: &YieldEstimate,
    ) -> OutcomeAssessment {
        OutcomeAssessment {
            factors: rules::classify_factors(features, &self.config),
            anomalies: rules::detect_anomalies(features, estimate, &self.config),
            recommendations: rules::generate_recommendations(features, estimate, &self.config),
        }
    }
}

/// Qualitative banding for one input dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Factor {
    Low,
    Medium,
    High,
}

impl Factor {
    pub fn label(&self) -> &'static str {
        match self {
            Factor::Low => "Low",
            Factor::Medium => "Medium",
            Factor::High => "High",
        }
    }
}

/// Factor labels derived from the feature vector, one per banded dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorBreakdown {
    pub rainfall: Factor,
    pub temperature: Factor,
    pub pesticides: Factor,
}

/// Weight of a detected anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Critical,
}

/// One triggered anomaly rule. Detection order is preserved in the output
/// list; no rule short-circuits another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anomaly {
    pub severity: Severity,
    pub message: String,
    pub reasons: Vec<String>,
}

/// Actionable guidance emitted by a recommendation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: String,
    pub title: String,
    pub description: String,
}

/// Full interpretation of one prediction. Lists are always present, possibly
/// empty, in fixed rule-evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeAssessment {
    pub factors: FactorBreakdown,
    pub anomalies: Vec<Anomaly>,
    pub recommendations: Vec<Recommendation>,
}
