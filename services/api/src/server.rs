use crate::cli::ServeArgs;
use crate::infra::{self, AppState};
use crate::routes::{advisory_router, AdvisoryState};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use cropcast::advisory::{ChatService, InterpreterConfig, OutcomeInterpreter};
use cropcast::config::AppConfig;
use cropcast::error::AppError;
use cropcast::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let completion_enabled = config.completion.is_enabled();
    let advisory_state = Arc::new(AdvisoryState {
        predictions: infra::prediction_service(),
        interpreter: OutcomeInterpreter::new(InterpreterConfig::default()),
        chat: Arc::new(ChatService::from_config(&config.completion)),
    });

    let app = advisory_router(advisory_state)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        completion_enabled,
        "crop advisory service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
