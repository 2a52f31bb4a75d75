//! Read-only view of the countdown for rendering

use serde::{Deserialize, Serialize};

use super::{Phase, RunState};

/// Derived countdown values, published after every transition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub total_secs: u64,
    pub remaining_secs: u64,
    pub minutes_part: u64,
    pub seconds_part: u64,
    /// Elapsed share of the span, in [0, 1]
    pub progress_fraction: f64,
    pub run_state: RunState,
    pub phase: Phase,
}

impl Snapshot {
    pub fn new(total_secs: u64, remaining_secs: u64, run_state: RunState, phase: Phase) -> Self {
        let progress_fraction = if total_secs > 0 {
            total_secs.saturating_sub(remaining_secs) as f64 / total_secs as f64
        } else {
            0.0
        };

        Self {
            total_secs,
            remaining_secs,
            minutes_part: remaining_secs / 60,
            seconds_part: remaining_secs % 60,
            progress_fraction,
            run_state,
            phase,
        }
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Stroke offset for a ring of the given circumference.
    /// The full circumference hides the arc; zero draws the whole ring.
    pub fn arc_offset(&self, circumference: f64) -> f64 {
        circumference * (1.0 - self.progress_fraction)
    }

    /// Remaining time as zero-padded `MM:SS`
    pub fn clock(&self) -> String {
        format!("{:02}:{:02}", self.minutes_part, self.seconds_part)
    }
}
