use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_prediction_routes;
use attrition_ai::attrition::PredictionService;
use attrition_ai::config::AppConfig;
use attrition_ai::error::AppError;
use attrition_ai::model::LinearModel;
use attrition_ai::telemetry;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
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
    if let Some(model_path) = args.model_path.take() {
        config.model.artifact_path = model_path;
    }

    telemetry::init(&config.telemetry)?;

    // A model that cannot load would fail every prediction, so refuse to
    // start without one.
    let model = LinearModel::from_path(&config.model.artifact_path)?;
    let service = Arc::new(PredictionService::new(Arc::new(model)));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_prediction_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        model = %config.model.artifact_path.display(),
        "attrition prediction service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
