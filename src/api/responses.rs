//! API response structures

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::view::{PresetButton, TimerView};

/// API response structure for command endpoints
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub timer: Option<TimerView>,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: &str, message: String, timer: Option<TimerView>) -> Self {
        Self {
            status: status.to_string(),
            message,
            timestamp: Utc::now(),
            timer,
        }
    }

    /// Create a success response carrying the post-command view
    pub fn ok(message: String, timer: TimerView) -> Self {
        Self::new("ok", message, Some(timer))
    }

    /// Create an error response
    pub fn error(message: String, timer: Option<TimerView>) -> Self {
        Self::new("error", message, timer)
    }
}

/// Status response with server information
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub timer: TimerView,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PresetsResponse {
    pub presets: Vec<PresetButton>,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
