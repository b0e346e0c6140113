//! Behavioral specifications for the outcome interpreter: banding totality,
//! anomaly ordering, recommendation independence, and determinism.

use cropcast::advisory::{
    Factor, FeatureVector, InterpreterConfig, OutcomeInterpreter, Severity, YieldEstimate,
};

fn features(rainfall: f64, temp: f64, pesticides: f64) -> FeatureVector {
    FeatureVector {
        year: 2023,
        rainfall_mm: rainfall,
        pesticides_tonnes: pesticides,
        avg_temp_c: temp,
        country: "India".to_string(),
        item: "Rice".to_string(),
    }
}

fn estimate(value: f64) -> YieldEstimate {
    YieldEstimate {
        value,
        confidence: 85,
    }
}

fn interpreter() -> OutcomeInterpreter {
    OutcomeInterpreter::new(InterpreterConfig::default())
}

#[test]
fn every_rainfall_value_lands_in_exactly_one_band() {
    let interpreter = interpreter();
    let cases = [
        (0.0, Factor::Low),
        (500.0, Factor::Low),
        (500.01, Factor::Medium),
        (1000.0, Factor::Medium),
        (1000.01, Factor::High),
        (2500.0, Factor::High),
    ];

    for (rainfall, expected) in cases {
        let assessment = interpreter.interpret(&features(rainfall, 20.0, 1.5), &estimate(5000.0));
        assert_eq!(
            assessment.factors.rainfall, expected,
            "rainfall {rainfall} banded wrong"
        );
    }
}

#[test]
fn low_yield_anomaly_is_independent_of_other_features() {
    let interpreter = interpreter();

    for (rainfall, temp) in [(800.0, 20.0), (1200.0, 10.0), (600.0, 30.0)] {
        let below = interpreter.interpret(&features(rainfall, temp, 1.0), &estimate(999.0));
        assert!(below
            .anomalies
            .iter()
            .any(|anomaly| anomaly.message == "critically low yield predicted"));

        let at_floor = interpreter.interpret(&features(rainfall, temp, 1.0), &estimate(1000.0));
        assert!(!at_floor
            .anomalies
            .iter()
            .any(|anomaly| anomaly.message == "critically low yield predicted"));
    }
}

#[test]
fn anomalies_preserve_fixed_evaluation_order() {
    let interpreter = interpreter();
    let assessment = interpreter.interpret(&features(150.0, 45.0, 1.0), &estimate(500.0));

    let messages: Vec<&str> = assessment
        .anomalies
        .iter()
        .map(|anomaly| anomaly.message.as_str())
        .collect();
    assert_eq!(
        messages,
        vec![
            "critically low yield predicted",
            "drought conditions detected",
            "extreme heat conditions",
        ]
    );
    assert_eq!(assessment.anomalies[0].severity, Severity::Critical);
    assert_eq!(assessment.anomalies[1].severity, Severity::Warning);
    assert_eq!(
        assessment.anomalies[0].reasons,
        vec!["Extreme weather conditions", "Insufficient inputs"]
    );
}

#[test]
fn both_recommendations_fire_together_in_rule_order() {
    let interpreter = interpreter();
    let assessment = interpreter.interpret(&features(300.0, 20.0, 1.0), &estimate(2000.0));

    assert_eq!(assessment.recommendations.len(), 2);
    assert_eq!(assessment.recommendations[0].category, "irrigation");
    assert_eq!(assessment.recommendations[1].category, "fertilizer");
}

#[test]
fn benign_inputs_produce_empty_lists_not_absent_ones() {
    let interpreter = interpreter();
    let assessment = interpreter.interpret(&features(800.0, 22.0, 1.5), &estimate(5000.0));

    assert!(assessment.anomalies.is_empty());
    assert!(assessment.recommendations.is_empty());

    let json = serde_json::to_value(&assessment).expect("assessment serializes");
    assert!(json["anomalies"].is_array());
    assert!(json["recommendations"].is_array());
}

#[test]
fn interpretation_is_idempotent_down_to_the_serialized_bytes() {
    let interpreter = interpreter();
    let input = features(150.0, 45.0, 2.5);
    let prediction = estimate(500.0);

    let first = interpreter.interpret(&input, &prediction);
    let second = interpreter.interpret(&input, &prediction);

    assert_eq!(first, second);
    let first_bytes = serde_json::to_vec(&first).expect("serializes");
    let second_bytes = serde_json::to_vec(&second).expect("serializes");
    assert_eq!(first_bytes, second_bytes);
}
