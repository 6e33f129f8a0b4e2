use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Serialize;
use serde_json::json;
use tracing::warn;

use super::record::AttritionRecord;
use super::service::{PredictionError, PredictionService};
use crate::model::Classifier;

#[derive(Debug, Serialize)]
struct PredictionResponse {
    prediction: i32,
}

/// Router builder exposing the prediction endpoint.
pub fn prediction_router<C>(service: Arc<PredictionService<C>>) -> Router
where
    C: Classifier + 'static,
{
    Router::new()
        .route("/predict", post(predict_handler::<C>))
        .with_state(service)
}

pub(crate) async fn predict_handler<C>(
    State(service): State<Arc<PredictionService<C>>>,
    axum::Json(record): axum::Json<AttritionRecord>,
) -> Response
where
    C: Classifier + 'static,
{
    match service.predict(&record) {
        Ok(prediction) => {
            (StatusCode::OK, axum::Json(PredictionResponse { prediction })).into_response()
        }
        Err(err @ PredictionError::Record(_)) => {
            warn!(%err, "rejected prediction request");
            let payload = json!({ "error": err.to_string() });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(PredictionError::Model(_)) => {
            let payload = json!({ "error": "Internal server error" });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
