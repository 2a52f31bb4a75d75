//! Countdown engine: the run/pause/finish state machine

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use super::Snapshot;

/// Default countdown span (25 minutes)
pub const DEFAULT_DURATION_SECS: u64 = 25 * 60;

/// Whether ticks are currently being consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    Idle,
    Running,
}

/// Named phase derived from run state and remaining time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Idle with the full span remaining
    Ready,
    /// Idle part way through a countdown
    Paused,
    /// Idle at zero; the next start re-arms the full span
    Finished,
    /// Running
    Counting,
}

/// Result of feeding one tick to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// One second was consumed and the countdown keeps running
    Counted,
    /// The countdown reached zero; the completion signal must fire
    Completed,
    /// The engine was idle, nothing changed
    Ignored,
}

/// Countdown state machine.
///
/// Holds the total span, the remaining seconds and the run flag. It knows
/// nothing about clocks: a tick source calls [`CountdownEngine::on_tick`]
/// once per second while [`CountdownEngine::is_running`] is true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownEngine {
    total_secs: u64,
    remaining_secs: u64,
    run_state: RunState,
}

impl CountdownEngine {
    /// Create an engine in the Ready phase.
    ///
    /// A zero span is raised to one second so that `total > 0` always holds.
    pub fn new(duration_secs: u64) -> Self {
        let total_secs = duration_secs.max(1);
        Self {
            total_secs,
            remaining_secs: total_secs,
            run_state: RunState::Idle,
        }
    }

    pub fn total_secs(&self) -> u64 {
        self.total_secs
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn phase(&self) -> Phase {
        match self.run_state {
            RunState::Running => Phase::Counting,
            RunState::Idle if self.remaining_secs == 0 => Phase::Finished,
            RunState::Idle if self.remaining_secs == self.total_secs => Phase::Ready,
            RunState::Idle => Phase::Paused,
        }
    }

    /// Toggle between running and idle.
    ///
    /// Starting from Finished restores the full span first, so a finished
    /// countdown restarts instead of sitting paused at zero.
    pub fn start_or_pause(&mut self) -> RunState {
        self.run_state = match self.run_state {
            RunState::Running => RunState::Idle,
            RunState::Idle => {
                if self.remaining_secs == 0 {
                    self.remaining_secs = self.total_secs;
                }
                RunState::Running
            }
        };
        self.run_state
    }

    pub fn reset(&mut self) {
        self.run_state = RunState::Idle;
        self.remaining_secs = self.total_secs;
    }

    /// Replace the span. Any countdown in flight is abandoned.
    pub fn set_duration(&mut self, minutes: NonZeroU32) {
        self.total_secs = u64::from(minutes.get()) * 60;
        self.reset();
    }

    /// Consume one second of the countdown.
    pub fn on_tick(&mut self) -> TickOutcome {
        if self.run_state != RunState::Running {
            return TickOutcome::Ignored;
        }

        if self.remaining_secs <= 1 {
            self.remaining_secs = 0;
            self.run_state = RunState::Idle;
            TickOutcome::Completed
        } else {
            self.remaining_secs -= 1;
            TickOutcome::Counted
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.total_secs, self.remaining_secs, self.run_state, self.phase())
    }
}

impl Default for CountdownEngine {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECS)
    }
}
