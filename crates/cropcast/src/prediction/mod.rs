//! Seam to the trained yield model and its feature preprocessor.
//!
//! Both artifacts are injected behind traits so the interpreter and the
//! service can be exercised with stubs; nothing here assumes a particular
//! model family. Either component may be absent at startup, in which case
//! every prediction fails with [`PredictionError::ModelUnavailable`].

use std::sync::Arc;

use crate::advisory::domain::{FeatureVector, YieldEstimate};

/// Confidence attached to successful predictions. The production model
/// reports a flat figure rather than a per-sample interval.
pub const DEFAULT_CONFIDENCE: u8 = 85;

/// Encodes a feature vector into the model's numeric input space.
pub trait FeaturePreprocessor: Send + Sync {
    fn transform(&self, features: &FeatureVector) -> Result<Vec<f64>, PredictionError>;
}

/// Trained regressor over preprocessed feature rows.
pub trait YieldModel: Send + Sync {
    fn predict(&self, encoded: &[f64]) -> Result<f64, PredictionError>;
}

/// Failure of the prediction path.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("model or preprocessor not loaded")]
    ModelUnavailable,
    #[error("prediction failed: {0}")]
    Failed(String),
}

/// Composes the preprocessor and model into one fallible predict call.
pub struct PredictionService<P, M> {
    preprocessor: Option<Arc<P>>,
    model: Option<Arc<M>>,
}

impl<P, M> PredictionService<P, M>
where
    P: FeaturePreprocessor,
    M: YieldModel,
{
    pub fn new(preprocessor: Option<Arc<P>>, model: Option<Arc<M>>) -> Self {
        Self {
            preprocessor,
            model,
        }
    }

    pub fn loaded(preprocessor: Arc<P>, model: Arc<M>) -> Self {
        Self::new(Some(preprocessor), Some(model))
    }

    pub fn is_loaded(&self) -> bool {
        self.preprocessor.is_some() && self.model.is_some()
    }

    pub fn predict(&self, features: &FeatureVector) -> Result<YieldEstimate, PredictionError> {
        let (preprocessor, model) = match (&self.preprocessor, &self.model) {
            (Some(preprocessor), Some(model)) => (preprocessor, model),
            _ => return Err(PredictionError::ModelUnavailable),
        };

        let encoded = preprocessor.transform(features)?;
        let value = model.predict(&encoded)?;

        Ok(YieldEstimate {
            value,
            confidence: DEFAULT_CONFIDENCE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct IdentityPreprocessor;

    impl FeaturePreprocessor for IdentityPreprocessor {
        fn transform(&self, features: &FeatureVector) -> Result<Vec<f64>, PredictionError> {
            Ok(vec![
                features.year as f64,
                features.rainfall_mm,
                features.pesticides_tonnes,
                features.avg_temp_c,
            ])
        }
    }

    struct ConstantModel(f64);

    impl YieldModel for ConstantModel {
        fn predict(&self, _encoded: &[f64]) -> Result<f64, PredictionError> {
            Ok(self.0)
        }
    }

    fn sample_features() -> FeatureVector {
        FeatureVector {
            year: 2024,
            rainfall_mm: 800.0,
            pesticides_tonnes: 1.5,
            avg_temp_c: 21.0,
            country: "Kenya".to_string(),
            item: "Maize".to_string(),
        }
    }

    #[test]
    fn predict_wraps_the_model_output_with_fixed_confidence() {
        let service =
            PredictionService::loaded(Arc::new(IdentityPreprocessor), Arc::new(ConstantModel(4200.0)));

        let estimate = service.predict(&sample_features()).expect("model loaded");
        assert_eq!(estimate.value, 4200.0);
        assert_eq!(estimate.confidence, DEFAULT_CONFIDENCE);
    }

    #[test]
    fn missing_model_is_a_typed_unavailable_error() {
        let service: PredictionService<IdentityPreprocessor, ConstantModel> =
            PredictionService::new(Some(Arc::new(IdentityPreprocessor)), None);

        let err = service
            .predict(&sample_features())
            .expect_err("no model loaded");
        assert!(matches!(err, PredictionError::ModelUnavailable));
        assert!(!service.is_loaded());
    }
}
