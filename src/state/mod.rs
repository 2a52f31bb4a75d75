//! State management module
//!
//! This module contains the countdown engine, its snapshot and the shared
//! application state handed to the HTTP layer.

pub mod engine;
pub mod snapshot;
pub mod app_state;

// Re-export main types
pub use engine::{CountdownEngine, Phase, RunState, TickOutcome, DEFAULT_DURATION_SECS};
pub use snapshot::Snapshot;
pub use app_state::AppState;
