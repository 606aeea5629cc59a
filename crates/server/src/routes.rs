//! HTTP routes
//!
//! The caller boundary for the turn pipeline. Malformed payloads are
//! rejected here with a structured 400 before any core logic runs; every
//! well-formed turn produces a 200 with a valid response body.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::warn;

use support_agent_core::{Persona, TurnRequest};
use support_agent_dialog::TurnHandler;
use support_agent_persona::PersonaStore;

/// Shared application state
pub struct AppState {
    pub handler: TurnHandler,
    pub store: Arc<dyn PersonaStore>,
}

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/turn", post(handle_turn))
        .route("/v1/personas", put(save_persona))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "service": "support-agent" }))
}

async fn handle_turn(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<TurnRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            warn!(error = %rejection, "rejecting malformed turn payload");
            return invalid_request();
        }
    };

    let explicit_persona = headers
        .get("x-persona-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let response = state
        .handler
        .handle_turn(&request, explicit_persona.as_deref())
        .await;
    Json(response).into_response()
}

async fn save_persona(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Persona>, JsonRejection>,
) -> Response {
    let Json(persona) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            warn!(error = %rejection, "rejecting malformed persona payload");
            return invalid_request();
        }
    };

    let persona_id = persona.persona_id.clone();
    match state.store.save(persona).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "persona_id": persona_id, "saved": true })),
        )
            .into_response(),
        Err(e) => {
            warn!(persona_id, error = %e, "failed to save persona");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

fn invalid_request() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "invalid request body" })),
    )
        .into_response()
}
