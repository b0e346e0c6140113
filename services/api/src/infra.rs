use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use cropcast::advisory::domain::FeatureVector;
use cropcast::prediction::{FeaturePreprocessor, PredictionError, PredictionService, YieldModel};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Demo-grade encoder standing in for the trained preprocessor artifact:
/// numeric columns pass through, categorical codes fold to a stable numeric
/// code so the whole pipeline stays deterministic.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct TabularPreprocessor;

fn categorical_code(value: &str) -> f64 {
    let folded = value
        .to_ascii_lowercase()
        .bytes()
        .fold(0u32, |acc, byte| acc.wrapping_mul(31).wrapping_add(byte as u32));
    (folded % 1000) as f64
}

impl FeaturePreprocessor for TabularPreprocessor {
    fn transform(&self, features: &FeatureVector) -> Result<Vec<f64>, PredictionError> {
        Ok(vec![
            features.year as f64,
            features.rainfall_mm,
            features.pesticides_tonnes,
            features.avg_temp_c,
            categorical_code(&features.country),
            categorical_code(&features.item),
        ])
    }
}

/// Demo-grade regressor standing in for the trained model artifact: a smooth
/// deterministic response surface over water, heat, and input intensity.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct GradientStubModel;

impl YieldModel for GradientStubModel {
    fn predict(&self, encoded: &[f64]) -> Result<f64, PredictionError> {
        if encoded.len() != 6 {
            return Err(PredictionError::Failed(format!(
                "expected 6 encoded columns, got {}",
                encoded.len()
            )));
        }

        let rainfall = encoded[1];
        let pesticides = encoded[2];
        let temp = encoded[3];

        let water = (rainfall.clamp(0.0, 1200.0) / 1200.0) * 3500.0;
        let inputs = (pesticides.clamp(0.0, 3.0) / 3.0) * 900.0;
        let heat_penalty = (temp - 28.0).max(0.0) * 120.0;
        let cold_penalty = (10.0 - temp).max(0.0) * 90.0;

        Ok((800.0 + water + inputs - heat_penalty - cold_penalty).max(50.0))
    }
}

pub(crate) fn prediction_service() -> PredictionService<TabularPreprocessor, GradientStubModel> {
    PredictionService::loaded(Arc::new(TabularPreprocessor), Arc::new(GradientStubModel))
}

#[cfg(test)]
pub(crate) fn unloaded_prediction_service(
) -> PredictionService<TabularPreprocessor, GradientStubModel> {
    PredictionService::new(None, None)
}
