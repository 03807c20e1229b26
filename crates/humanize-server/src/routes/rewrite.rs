use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use humanize_core::{RewriteRequest, RewriteResponse};
use humanize_service::ServiceError;
use serde_json::{json, Value};

use super::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/rewrite", post(rewrite))
}

async fn rewrite(
    State(state): State<AppState>,
    Json(req): Json<RewriteRequest>,
) -> Result<Json<RewriteResponse>, (StatusCode, Json<Value>)> {
    if req.text.trim().is_empty() {
        return Err(to_error(ServiceError::InvalidInput(
            "Text input is required".into(),
        )));
    }

    let instruction = humanize_prompts::build_instruction(req.preserve_style, req.strength());
    let rewritten = state
        .rewriter
        .rewrite(&instruction, &req.text)
        .await
        .map_err(to_error)?;

    Ok(Json(RewriteResponse { rewritten }))
}

fn to_error(e: ServiceError) -> (StatusCode, Json<Value>) {
    match e {
        ServiceError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))),
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to rewrite text", "message": other.to_string() })),
        ),
    }
}
