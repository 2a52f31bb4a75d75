//! Display palettes selected by theme and accent tags

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Base palette of the timer page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Highlight color used by the ring, the primary button and presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Blue,
    Purple,
    Pink,
    Orange,
    Green,
    Teal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeColors {
    pub background: &'static str,
    pub text: &'static str,
    pub track: &'static str,
    pub muted: &'static str,
    pub surface: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccentColors {
    pub primary: &'static str,
    /// End stop of the ring gradient
    pub gradient_end: &'static str,
    /// Button glow, as an `rgba()` string
    pub glow: &'static str,
}

impl Theme {
    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Light => ThemeColors {
                background: "#f5f5f7",
                text: "#1d1d1f",
                track: "#e5e5e7",
                muted: "#86868b",
                surface: "#ffffff",
            },
            Theme::Dark => ThemeColors {
                background: "#000000",
                text: "#f5f5f7",
                track: "#2c2c2e",
                muted: "#98989d",
                surface: "#1c1c1e",
            },
        }
    }
}

impl Accent {
    pub const ALL: [Accent; 6] = [
        Accent::Blue,
        Accent::Purple,
        Accent::Pink,
        Accent::Orange,
        Accent::Green,
        Accent::Teal,
    ];

    pub fn colors(self) -> AccentColors {
        match self {
            Accent::Blue => AccentColors {
                primary: "#007AFF",
                gradient_end: "#5856D6",
                glow: "rgba(0, 122, 255, 0.35)",
            },
            Accent::Purple => AccentColors {
                primary: "#AF52DE",
                gradient_end: "#5856D6",
                glow: "rgba(175, 82, 222, 0.35)",
            },
            Accent::Pink => AccentColors {
                primary: "#FF2D55",
                gradient_end: "#AF52DE",
                glow: "rgba(255, 45, 85, 0.35)",
            },
            Accent::Orange => AccentColors {
                primary: "#FF9500",
                gradient_end: "#FF3B30",
                glow: "rgba(255, 149, 0, 0.35)",
            },
            Accent::Green => AccentColors {
                primary: "#34C759",
                gradient_end: "#30B0C7",
                glow: "rgba(52, 199, 89, 0.35)",
            },
            Accent::Teal => AccentColors {
                primary: "#30B0C7",
                gradient_end: "#007AFF",
                glow: "rgba(48, 176, 199, 0.35)",
            },
        }
    }
}
