use crate::infra::{AppState, GradientStubModel, TabularPreprocessor};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use axum::Json;
use cropcast::advisory::domain::{ConversationTurn, FeatureVector};
use cropcast::advisory::{
    Anomaly, ChatService, FactorBreakdown, OutcomeInterpreter, Recommendation,
};
use cropcast::error::AppError;
use cropcast::prediction::PredictionService;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// Everything the advisory endpoints need per request.
pub(crate) struct AdvisoryState {
    pub(crate) predictions: PredictionService<TabularPreprocessor, GradientStubModel>,
    pub(crate) interpreter: OutcomeInterpreter,
    pub(crate) chat: Arc<ChatService>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PredictRequest {
    /// Positional features: [year, rainfall, pesticides, avgTemp, country, item].
    pub(crate) features: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PredictResponse {
    pub(crate) prediction: f64,
    pub(crate) confidence: u8,
    pub(crate) factors: FactorBreakdown,
    pub(crate) anomalies: Vec<Anomaly>,
    pub(crate) recommendations: Vec<Recommendation>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatRequest {
    pub(crate) message: String,
    #[serde(default)]
    pub(crate) history: Vec<ConversationTurn>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatResponse {
    pub(crate) response: String,
}

pub(crate) fn advisory_router(state: Arc<AdvisoryState>) -> axum::Router {
    axum::Router::new()
        .route("/api/v1/predict", axum::routing::post(predict_endpoint))
        .route("/api/v1/chat", axum::routing::post(chat_endpoint))
        .with_state(state)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn predict_endpoint(
    State(state): State<Arc<AdvisoryState>>,
    Json(payload): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, AppError> {
    let features = FeatureVector::from_values(&payload.features)?;
    let estimate = state.predictions.predict(&features)?;
    let assessment = state.interpreter.interpret(&features, &estimate);

    Ok(Json(PredictResponse {
        prediction: estimate.value,
        confidence: estimate.confidence,
        factors: assessment.factors,
        anomalies: assessment.anomalies,
        recommendations: assessment.recommendations,
    }))
}

pub(crate) async fn chat_endpoint(
    State(state): State<Arc<AdvisoryState>>,
    Json(payload): Json<ChatRequest>,
) -> Response {
    let ChatRequest { message, history } = payload;
    if message.trim().is_empty() {
        let body = json!({ "error": "message must not be empty" });
        return (StatusCode::BAD_REQUEST, Json(body)).into_response();
    }

    // The completion call is blocking with a bounded timeout; keep it off
    // the async worker threads.
    let chat = state.chat.clone();
    let reply = tokio::task::spawn_blocking(move || chat.reply(&message, &history)).await;

    match reply {
        Ok(text) => (StatusCode::OK, Json(ChatResponse { response: text })).into_response(),
        Err(err) => {
            let body = json!({ "error": format!("chat task failed: {err}") });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}
