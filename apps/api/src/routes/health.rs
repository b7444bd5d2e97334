use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Service version plus which backends this instance is running with.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let storage = if state.config.redis_url.is_some() {
        "redis"
    } else {
        "memory"
    };
    let assist = if state.config.anthropic_api_key.is_some() {
        "llm"
    } else {
        "offline"
    };
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-api",
        "storage": storage,
        "assist": assist
    }))
}
