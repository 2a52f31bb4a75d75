//! HTTP endpoint handlers

use std::{num::NonZeroU32, sync::Arc};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, info, warn};

use crate::{
    state::AppState,
    view::{preset_buttons, TimerView},
};
use super::responses::{ApiResponse, HealthResponse, PresetsResponse, StatusResponse};

type ApiResult = Result<Json<ApiResponse>, (StatusCode, Json<ApiResponse>)>;

fn dispatcher_failure(state: &AppState, action: &str, e: String) -> (StatusCode, Json<ApiResponse>) {
    error!("Failed to {}: {}", action, e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::error(format!("Failed to {}: {}", action, e), Some(state.view()))),
    )
}

/// Handle GET /timer - Return the current render model
pub async fn timer_handler(State(state): State<Arc<AppState>>) -> Json<TimerView> {
    Json(state.view())
}

/// Handle POST /timer/toggle - Start or pause the countdown
pub async fn toggle_handler(State(state): State<Arc<AppState>>) -> ApiResult {
    match state.start_or_pause().await {
        Ok(view) => {
            let message = if view.snapshot.is_running() {
                "Countdown started"
            } else {
                "Countdown paused"
            };
            info!("Toggle endpoint called - {}", message.to_lowercase());
            Ok(Json(ApiResponse::ok(message.to_string(), view)))
        }
        Err(e) => Err(dispatcher_failure(&state, "toggle countdown", e)),
    }
}

/// Handle POST /timer/reset - Stop and restore the full span
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> ApiResult {
    match state.reset().await {
        Ok(view) => {
            info!("Reset endpoint called");
            Ok(Json(ApiResponse::ok("Countdown reset".to_string(), view)))
        }
        Err(e) => Err(dispatcher_failure(&state, "reset countdown", e)),
    }
}

/// Handle POST /timer/duration/:minutes - Replace the span
pub async fn duration_handler(
    State(state): State<Arc<AppState>>,
    Path(minutes): Path<u32>,
) -> ApiResult {
    let Some(minutes) = NonZeroU32::new(minutes) else {
        warn!("Rejected zero-minute duration");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(
                "Duration must be at least 1 minute".to_string(),
                Some(state.view()),
            )),
        ));
    };

    match state.set_duration(minutes).await {
        Ok(view) => {
            info!("Duration endpoint called - {} min", minutes);
            Ok(Json(ApiResponse::ok(format!("Duration set to {} min", minutes), view)))
        }
        Err(e) => Err(dispatcher_failure(&state, "set duration", e)),
    }
}

/// Handle GET /presets - Preset spans with the current one selected
pub async fn presets_handler(State(state): State<Arc<AppState>>) -> Json<PresetsResponse> {
    Json(PresetsResponse {
        presets: preset_buttons(state.timer.snapshot().total_secs),
    })
}

/// Handle GET /status - Return timer view and server information
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let (last_action, last_action_time) = state.get_last_action();

    Json(StatusResponse {
        timer: state.view(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
