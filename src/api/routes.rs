use axum::{
    routing::post,
    Router,
    extract::{rejection::JsonRejection, Json, State},
};
use tower_http::cors::{CorsLayer, Any};
use tracing::{debug, info};

use crate::analysis::{extract_json, normalize, truncate_input, SYSTEM_PROMPT};
use crate::api::models::{AnalyzeRequest, AnalysisResult};
use crate::error::{AppError, Result};
use crate::llm::call_anthropic;
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

/// Single linear pipeline: config gate, input gate, truncate, call the model,
/// pull a JSON object out of its reply, normalize, respond.
async fn analyze_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>> {
    let Json(req) = payload.map_err(|rejection| match rejection {
        // A parseable body with no usable input field (scalar, string, bool)
        // is the same "input is required" condition as a missing field.
        JsonRejection::JsonDataError(_) => AppError::InvalidInput,
        other => AppError::Internal(other.body_text()),
    })?;

    let api_key = state
        .config
        .anthropic_api_key
        .as_deref()
        .ok_or(AppError::NotConfigured)?;

    let input = truncate_input(req.text()?);
    info!("Processing analysis request ({} bytes)", input.len());

    let start = std::time::Instant::now();
    let reply = call_anthropic(
        api_key,
        state.config.anthropic_base_url.as_deref(),
        SYSTEM_PROMPT,
        input,
    )
    .await?;
    debug!("Model reply received in {:?}", start.elapsed());

    let raw = extract_json(&reply).ok_or(AppError::ParseFailure)?;
    let value = serde_json::from_str(raw)
        .map_err(|e| AppError::Internal(format!("Invalid JSON in model reply: {}", e)))?;

    Ok(Json(normalize(value)))
}
