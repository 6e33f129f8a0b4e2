use crate::infra::AppState;
use attrition_ai::attrition::{prediction_router, PredictionService};
use attrition_ai::model::Classifier;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Assembles the full route table: the prediction endpoint, the original
/// liveness string at `/`, and the operational endpoints. The browser front
/// end is served from another origin, so CORS stays wide open.
pub(crate) fn with_prediction_routes<C>(service: Arc<PredictionService<C>>) -> axum::Router
where
    C: Classifier + 'static,
{
    prediction_router(service)
        .route("/", axum::routing::get(index))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .layer(CorsLayer::permissive())
}

pub(crate) async fn index() -> &'static str {
    "Employee Attrition Prediction API is running"
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
