//! Quiet Timer - A countdown timer with a progress ring view
//!
//! The countdown engine is a plain state machine. A dispatcher task feeds
//! it commands and one-second ticks, a view adapter turns its snapshots
//! into a render model, and an HTTP layer exposes both.

pub mod config;
pub mod state;
pub mod api;
pub mod services;
pub mod tasks;
pub mod utils;
pub mod view;

// Re-export commonly used types
pub use config::{Config, TimerOptions};
pub use state::{AppState, CountdownEngine, Phase, RunState, Snapshot};
pub use api::create_router;
pub use tasks::{spawn_countdown, IntervalTicks, TimerHandle};
pub use utils::signals::shutdown_signal;
