//! Main application state management

use std::{
    num::NonZeroU32,
    sync::Mutex,
    time::Instant,
};
use chrono::{DateTime, Utc};
use tracing::warn;

use crate::{
    tasks::TimerHandle,
    view::{TimerView, ViewSettings},
};

/// Shared state handed to every HTTP handler
#[derive(Debug)]
pub struct AppState {
    /// Handle to the countdown task
    pub timer: TimerHandle,
    /// Presentation settings fixed at startup
    pub view_settings: ViewSettings,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last command and when it was applied
    last_action: Mutex<Option<(String, DateTime<Utc>)>>,
}

impl AppState {
    pub fn new(timer: TimerHandle, view_settings: ViewSettings, port: u16, host: String) -> Self {
        Self {
            timer,
            view_settings,
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
        }
    }

    /// Current render model
    pub fn view(&self) -> TimerView {
        TimerView::render(self.timer.snapshot(), &self.view_settings)
    }

    pub async fn start_or_pause(&self) -> Result<TimerView, String> {
        let snapshot = self.timer.start_or_pause().await?;
        let action = if snapshot.is_running() { "start" } else { "pause" };
        self.record_action(action);
        Ok(TimerView::render(snapshot, &self.view_settings))
    }

    pub async fn reset(&self) -> Result<TimerView, String> {
        let snapshot = self.timer.reset().await?;
        self.record_action("reset");
        Ok(TimerView::render(snapshot, &self.view_settings))
    }

    pub async fn set_duration(&self, minutes: NonZeroU32) -> Result<TimerView, String> {
        let snapshot = self.timer.set_duration(minutes).await?;
        self.record_action(&format!("duration {}m", minutes));
        Ok(TimerView::render(snapshot, &self.view_settings))
    }

    fn record_action(&self, action: &str) {
        match self.last_action.lock() {
            Ok(mut last_action) => *last_action = Some((action.to_string(), Utc::now())),
            Err(e) => warn!("Failed to record last action: {}", e),
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        match self.last_action.lock().ok().and_then(|a| a.clone()) {
            Some((action, time)) => (Some(action), Some(time)),
            None => (None, None),
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        format_uptime(self.start_time.elapsed().as_secs())
    }
}

fn format_uptime(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::TimerOptions, tasks::{manual_ticks, spawn_countdown}};

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(42), "42s");
        assert_eq!(format_uptime(125), "2m 5s");
        assert_eq!(format_uptime(3723), "1h 2m 3s");
    }

    #[tokio::test]
    async fn test_commands_record_last_action() {
        let (ticks, _trigger) = manual_ticks();
        let (timer, _task) = spawn_countdown(&TimerOptions::default(), ticks);
        let state = AppState::new(timer, ViewSettings::default(), 0, "127.0.0.1".to_string());

        assert_eq!(state.get_last_action(), (None, None));

        let view = state.start_or_pause().await.unwrap();
        assert_eq!(view.primary_label, "Pause");
        assert_eq!(state.get_last_action().0.as_deref(), Some("start"));

        state.start_or_pause().await.unwrap();
        assert_eq!(state.get_last_action().0.as_deref(), Some("pause"));

        let view = state.set_duration(NonZeroU32::new(15).unwrap()).await.unwrap();
        assert_eq!(view.display, "15:00");
        let (action, time) = state.get_last_action();
        assert_eq!(action.as_deref(), Some("duration 15m"));
        assert!(time.is_some());
    }
}
