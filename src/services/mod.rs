//! Completion side effects module
//!
//! This module contains the completion hook and the best-effort sound
//! helpers it drives.

pub mod chime;
pub mod completion;

// Re-export main types
pub use chime::{play_chime, ring_bell, ChimeCommand};
pub use completion::CompletionHook;
