//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/timer", get(timer_handler))
        .route("/timer/toggle", post(toggle_handler))
        .route("/timer/reset", post(reset_handler))
        .route("/timer/duration/:minutes", post(duration_handler))
        .route("/presets", get(presets_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::{
        config::TimerOptions,
        tasks::{manual_ticks, spawn_countdown, ManualTickTrigger, TimerHandle},
        view::ViewSettings,
    };

    fn test_app() -> (Router, TimerHandle, ManualTickTrigger) {
        let (ticks, trigger) = manual_ticks();
        let (timer, _task) = spawn_countdown(&TimerOptions::default(), ticks);
        let state = Arc::new(AppState::new(
            timer.clone(),
            ViewSettings::default(),
            20554,
            "127.0.0.1".to_string(),
        ));
        (create_router(state), timer, trigger)
    }

    async fn call(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    #[tokio::test]
    async fn test_get_timer_renders_ready_view() {
        let (app, _timer, _trigger) = test_app();
        let (status, body) = call(&app, Method::GET, "/timer").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["display"], "25:00");
        assert_eq!(body["primary_label"], "Start");
        assert_eq!(body["snapshot"]["phase"], "ready");
        assert_eq!(body["palette"]["theme"], "light");
        assert_eq!(body["palette"]["accent"], "blue");
    }

    #[tokio::test]
    async fn test_toggle_then_tick() {
        let (app, timer, trigger) = test_app();

        let (status, body) = call(&app, Method::POST, "/timer/toggle").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["timer"]["snapshot"]["run_state"], "running");

        trigger.tick();
        let mut rx = timer.subscribe();
        rx.wait_for(|s| s.remaining_secs == 1499).await.unwrap();

        let (_, body) = call(&app, Method::GET, "/timer").await;
        assert_eq!(body["display"], "24:59");
        assert_eq!(body["primary_label"], "Pause");

        let (_, body) = call(&app, Method::POST, "/timer/reset").await;
        assert_eq!(body["timer"]["display"], "25:00");
        assert_eq!(body["timer"]["snapshot"]["run_state"], "idle");
    }

    #[tokio::test]
    async fn test_set_duration() {
        let (app, _timer, _trigger) = test_app();
        call(&app, Method::POST, "/timer/toggle").await;

        let (status, body) = call(&app, Method::POST, "/timer/duration/10").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["timer"]["display"], "10:00");
        assert_eq!(body["timer"]["snapshot"]["run_state"], "idle");
        assert_eq!(body["timer"]["snapshot"]["total_secs"], 600);

        let (_, body) = call(&app, Method::GET, "/presets").await;
        let selected: Vec<&Value> = body["presets"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|p| p["selected"] == true)
            .collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0]["minutes"], 10);
    }

    #[tokio::test]
    async fn test_zero_duration_is_rejected() {
        let (app, timer, _trigger) = test_app();

        let (status, body) = call(&app, Method::POST, "/timer/duration/0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");
        assert_eq!(timer.snapshot().total_secs, 1500);

        let (status, _) = call(&app, Method::POST, "/timer/duration/-5").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_status_after_teardown() {
        let (app, timer, _trigger) = test_app();
        call(&app, Method::POST, "/timer/toggle").await;

        let (status, body) = call(&app, Method::GET, "/status").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["last_action"], "start");
        assert_eq!(body["port"], 20554);

        // Commands queued behind the teardown are never answered
        timer.teardown().await.unwrap();

        let (status, body) = call(&app, Method::POST, "/timer/reset").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], "error");
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _timer, _trigger) = test_app();
        let (status, body) = call(&app, Method::GET, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }
}
