//! Completion signal delivery

use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::{info, warn};

use super::{play_chime, ring_bell, ChimeCommand};
use crate::config::{CompletionCallback, TimerOptions};

/// Side effects run once each time a countdown reaches zero.
///
/// Every effect is spawned off the dispatcher; errors and callback panics
/// are logged and dropped.
#[derive(Clone, Default)]
pub struct CompletionHook {
    callback: Option<CompletionCallback>,
    chime: Option<ChimeCommand>,
    bell: bool,
}

impl CompletionHook {
    pub fn new(callback: Option<CompletionCallback>, chime: Option<ChimeCommand>, bell: bool) -> Self {
        Self { callback, chime, bell }
    }

    pub fn from_options(options: &TimerOptions) -> Self {
        Self::new(options.on_complete.clone(), options.chime.clone(), options.bell)
    }

    /// Must be called from within a tokio runtime
    pub fn fire(&self) {
        info!("Countdown complete");

        if let Some(callback) = self.callback.clone() {
            tokio::task::spawn_blocking(move || {
                if catch_unwind(AssertUnwindSafe(|| callback())).is_err() {
                    warn!("Completion callback panicked");
                }
            });
        }

        if let Some(chime) = self.chime.clone() {
            tokio::spawn(async move {
                if let Err(e) = play_chime(&chime).await {
                    warn!("Completion chime failed: {}", e);
                }
            });
        }

        if self.bell {
            if let Err(e) = ring_bell() {
                warn!("{}", e);
            }
        }
    }
}
