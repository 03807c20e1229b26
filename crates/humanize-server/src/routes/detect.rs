use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use humanize_core::{DetectRequest, DetectResponse};
use humanize_service::ServiceError;
use serde_json::{json, Value};

use super::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/detect", post(detect))
}

async fn detect(
    State(state): State<AppState>,
    Json(req): Json<DetectRequest>,
) -> Result<Json<DetectResponse>, (StatusCode, Json<Value>)> {
    if req.text.trim().is_empty() {
        return Err(to_error(ServiceError::InvalidInput(
            "Text input is required".into(),
        )));
    }

    let detection = state
        .detector
        .score(&req.text, req.is_rewritten)
        .await
        .map_err(to_error)?;

    Ok(Json(DetectResponse {
        ai_probability: Some(detection.ai_probability),
        is_mock_data: detection.mocked.then_some(true),
    }))
}

fn to_error(e: ServiceError) -> (StatusCode, Json<Value>) {
    match e {
        ServiceError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))),
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to analyze text", "message": other.to_string() })),
        ),
    }
}
