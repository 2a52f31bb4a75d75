//! Background tasks module
//!
//! This module contains the countdown dispatcher task and the tick sources
//! that drive it.

pub mod countdown;
pub mod ticks;

// Re-export main types
pub use countdown::{spawn_countdown, Command, TimerHandle};
pub use ticks::{manual_ticks, IntervalTicks, ManualTickTrigger, ManualTicks, TickSource, TICK_PERIOD};
