use super::super::domain::{FeatureVector, YieldEstimate};
use super::config::InterpreterConfig;
use super::{Anomaly, Factor, FactorBreakdown, Recommendation, Severity};

/// Band one dimension. Boundaries are inclusive on the upper side of each
/// band, so a value sitting exactly on a cutoff belongs to the lower band.
fn band(value: f64, medium_above: f64, high_above: f64) -> Factor {
    if value > high_above {
        Factor::High
    } else if value > medium_above {
        Factor::Medium
    } else {
        Factor::Low
    }
}

pub(crate) fn classify_factors(
    features: &FeatureVector,
    config: &InterpreterConfig,
) -> FactorBreakdown {
    FactorBreakdown {
        rainfall: band(
            features.rainfall_mm,
            config.rainfall_medium_mm,
            config.rainfall_high_mm,
        ),
        temperature: band(features.avg_temp_c, config.temp_medium_c, config.temp_high_c),
        pesticides: band(
            features.pesticides_tonnes,
            config.pesticides_medium,
            config.pesticides_high,
        ),
    }
}

/// Anomaly rules fire independently in fixed order; the output preserves
/// that order and is empty when nothing triggers.
pub(crate) fn detect_anomalies(
    features: &FeatureVector,
    estimate: &YieldEstimate,
    config: &InterpreterConfig,
) -> Vec<Anomaly> {
    let mut anomalies = Vec::new();

    if estimate.value < config.critical_yield_floor {
        anomalies.push(Anomaly {
            severity: Severity::Critical,
            message: "critically low yield predicted".to_string(),
            reasons: vec![
                "Extreme weather conditions".to_string(),
                "Insufficient inputs".to_string(),
            ],
        });
    }

    if features.rainfall_mm < config.drought_rainfall_mm {
        anomalies.push(Anomaly {
            severity: Severity::Warning,
            message: "drought conditions detected".to_string(),
            reasons: vec!["Very low rainfall".to_string()],
        });
    }

    if features.avg_temp_c > config.extreme_heat_c {
        anomalies.push(Anomaly {
            severity: Severity::Critical,
            message: "extreme heat conditions".to_string(),
            reasons: vec!["Temperature exceeds crop tolerance".to_string()],
        });
    }

    anomalies
}

pub(crate) fn generate_recommendations(
    features: &FeatureVector,
    estimate: &YieldEstimate,
    config: &InterpreterConfig,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if features.rainfall_mm < config.irrigation_rainfall_mm {
        recommendations.push(Recommendation {
            category: "irrigation".to_string(),
            title: "Irrigation Required".to_string(),
            description: "Install drip irrigation system".to_string(),
        });
    }

    if estimate.value < config.fertilizer_yield_floor {
        recommendations.push(Recommendation {
            category: "fertilizer".to_string(),
            title: "Soil Enhancement".to_string(),
            description: "Apply NPK fertilizer and organic compost".to_string(),
        });
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(rainfall: f64, temp: f64, pesticides: f64) -> FeatureVector {
        FeatureVector {
            year: 2024,
            rainfall_mm: rainfall,
            pesticides_tonnes: pesticides,
            avg_temp_c: temp,
            country: "Kenya".to_string(),
            item: "Maize".to_string(),
        }
    }

    fn estimate(value: f64) -> YieldEstimate {
        YieldEstimate {
            value,
            confidence: 85,
        }
    }

    #[test]
    fn rainfall_banding_is_inclusive_on_the_upper_bound() {
        let config = InterpreterConfig::default();
        assert_eq!(
            classify_factors(&features(1000.0, 20.0, 1.5), &config).rainfall,
            Factor::Medium
        );
        assert_eq!(
            classify_factors(&features(1000.01, 20.0, 1.5), &config).rainfall,
            Factor::High
        );
        assert_eq!(
            classify_factors(&features(500.0, 20.0, 1.5), &config).rainfall,
            Factor::Low
        );
    }

    #[test]
    fn temperature_and_pesticide_banding_cover_all_bands() {
        let config = InterpreterConfig::default();
        let breakdown = classify_factors(&features(700.0, 15.0, 2.0), &config);
        assert_eq!(breakdown.rainfall, Factor::Medium);
        assert_eq!(breakdown.temperature, Factor::Low);
        assert_eq!(breakdown.pesticides, Factor::Medium);

        let breakdown = classify_factors(&features(700.0, 25.1, 2.1), &config);
        assert_eq!(breakdown.temperature, Factor::High);
        assert_eq!(breakdown.pesticides, Factor::High);
    }

    #[test]
    fn low_yield_anomaly_depends_only_on_the_estimate() {
        let config = InterpreterConfig::default();
        let benign = features(800.0, 20.0, 1.5);

        let anomalies = detect_anomalies(&benign, &estimate(999.9), &config);
        assert_eq!(anomalies.len(), 1);
        assert_eq!(anomalies[0].severity, Severity::Critical);
        assert_eq!(anomalies[0].message, "critically low yield predicted");

        let anomalies = detect_anomalies(&benign, &estimate(1000.0), &config);
        assert!(anomalies.is_empty());
    }

    #[test]
    fn all_three_anomalies_fire_in_declaration_order() {
        let config = InterpreterConfig::default();
        let anomalies = detect_anomalies(&features(150.0, 45.0, 1.0), &estimate(500.0), &config);

        assert_eq!(anomalies.len(), 3);
        assert_eq!(anomalies[0].message, "critically low yield predicted");
        assert_eq!(anomalies[1].message, "drought conditions detected");
        assert_eq!(anomalies[1].severity, Severity::Warning);
        assert_eq!(anomalies[2].message, "extreme heat conditions");
        assert_eq!(anomalies[2].severity, Severity::Critical);
    }

    #[test]
    fn recommendation_rules_are_independent_and_ordered() {
        let config = InterpreterConfig::default();
        let recommendations =
            generate_recommendations(&features(300.0, 20.0, 1.0), &estimate(2000.0), &config);

        assert_eq!(recommendations.len(), 2);
        assert_eq!(recommendations[0].category, "irrigation");
        assert_eq!(recommendations[0].title, "Irrigation Required");
        assert_eq!(recommendations[1].category, "fertilizer");
        assert_eq!(recommendations[1].description, "Apply NPK fertilizer and organic compost");

        let only_fertilizer =
            generate_recommendations(&features(800.0, 20.0, 1.0), &estimate(2000.0), &config);
        assert_eq!(only_fertilizer.len(), 1);
        assert_eq!(only_fertilizer[0].category, "fertilizer");
    }
}
