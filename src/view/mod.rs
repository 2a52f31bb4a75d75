//! Presentation adapter
//!
//! Turns engine snapshots into a render model: clock text, ring geometry,
//! button labels, presets and palette.

pub mod palette;
pub mod render;

pub use palette::{Accent, AccentColors, Theme, ThemeColors};
pub use render::{
    preset_buttons, Palette, PresetButton, Ring, TimerView, ViewSettings, PRESET_MINUTES, RING_RADIUS,
};
