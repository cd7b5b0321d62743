//! HTTP API for classifying transcripts over the network.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tracing::{debug, warn};

use crate::classifier::MoodEngine;
use crate::sounds::SoundBoard;

/// Application state shared across handlers.
#[derive(Clone, Default)]
pub struct AppState {
    pub engine: MoodEngine,
    /// Clip library for `/api/react`; absent when no sounds root is configured.
    pub sounds: Option<Arc<SoundBoard>>,
}

/// Build the Axum router.
pub fn routes(engine: MoodEngine, sounds: Option<SoundBoard>) -> Router {
    let state = AppState {
        engine,
        sounds: sounds.map(Arc::new),
    };
    Router::new()
        .route("/health", get(health))
        .route("/api/classify", post(classify_text))
        .route("/api/react", post(react))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "mood-signal"
    }))
}

#[derive(Debug, Deserialize)]
struct ClassifyRequest {
    text: String,
}

#[derive(Debug, Default, Deserialize)]
struct ClassifyParams {
    #[serde(default)]
    explain: bool,
}

async fn classify_text(
    State(state): State<AppState>,
    Query(params): Query<ClassifyParams>,
    Json(req): Json<ClassifyRequest>,
) -> Response {
    debug!(chars = req.text.chars().count(), explain = params.explain, "Classify request");
    if params.explain {
        Json(state.engine.explain(&req.text)).into_response()
    } else {
        Json(state.engine.classify(&req.text)).into_response()
    }
}

/// Classify, then pick what the voice bot should play.
async fn react(State(state): State<AppState>, Json(req): Json<ClassifyRequest>) -> Response {
    let Some(board) = state.sounds.as_deref() else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({"error": "Sound clips not configured"})),
        )
            .into_response();
    };

    let result = state.engine.classify(&req.text);
    match board.react(&result, &mut rand::thread_rng()) {
        Ok(reaction) => Json(serde_json::json!({
            "result": result,
            "reaction": reaction,
        }))
        .into_response(),
        Err(e) => {
            warn!(error = %e, "Failed to pick a sound clip");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}
