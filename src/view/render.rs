//! Render model consumed by a page or terminal front end

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::{Accent, AccentColors, Theme, ThemeColors};
use crate::state::{Phase, Snapshot};

/// Radius of the progress ring, in view units
pub const RING_RADIUS: f64 = 160.0;

/// Preset spans offered next to the controls, in minutes
pub const PRESET_MINUTES: [u32; 7] = [5, 10, 15, 25, 30, 45, 60];

const RUNNING_TRANSITION: &str = "stroke-dashoffset 1s linear";
const IDLE_TRANSITION: &str = "stroke-dashoffset 0.3s ease-out";

/// Presentation settings fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSettings {
    pub theme: Theme,
    pub accent: Accent,
    pub show_accent_picker: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            accent: Accent::default(),
            show_accent_picker: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ring {
    pub radius: f64,
    pub circumference: f64,
    pub dash_offset: f64,
    pub transition: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetButton {
    pub minutes: u32,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    pub theme: Theme,
    pub accent: Accent,
    pub colors: ThemeColors,
    pub accent_colors: AccentColors,
    /// Choices for the accent picker, empty when the picker is hidden
    pub accent_choices: Vec<Accent>,
}

/// Everything a front end needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimerView {
    pub display: String,
    pub snapshot: Snapshot,
    pub ring: Ring,
    pub primary_label: &'static str,
    pub show_reset: bool,
    pub show_presets: bool,
    pub presets: Vec<PresetButton>,
    pub ready_hint: Option<&'static str>,
    pub palette: Palette,
}

impl TimerView {
    pub fn render(snapshot: Snapshot, settings: &ViewSettings) -> Self {
        let circumference = 2.0 * PI * RING_RADIUS;
        let running = snapshot.is_running();

        let primary_label = match snapshot.phase {
            Phase::Counting => "Pause",
            Phase::Finished => "Restart",
            Phase::Ready | Phase::Paused => "Start",
        };

        let ready_hint = (snapshot.phase == Phase::Ready && snapshot.remaining_secs > 0)
            .then_some("Ready to start");

        Self {
            display: snapshot.clock(),
            ring: Ring {
                radius: RING_RADIUS,
                circumference,
                dash_offset: snapshot.arc_offset(circumference),
                transition: if running { RUNNING_TRANSITION } else { IDLE_TRANSITION },
            },
            primary_label,
            show_reset: running || snapshot.remaining_secs != snapshot.total_secs,
            show_presets: !running,
            presets: preset_buttons(snapshot.total_secs),
            ready_hint,
            palette: Palette {
                theme: settings.theme,
                accent: settings.accent,
                colors: settings.theme.colors(),
                accent_colors: settings.accent.colors(),
                accent_choices: if settings.show_accent_picker {
                    Accent::ALL.to_vec()
                } else {
                    Vec::new()
                },
            },
            snapshot,
        }
    }
}

/// Preset buttons, marking the one whose span equals `total_secs`
pub fn preset_buttons(total_secs: u64) -> Vec<PresetButton> {
    PRESET_MINUTES
        .iter()
        .map(|&minutes| PresetButton {
            minutes,
            label: format!("{} min", minutes),
            selected: u64::from(minutes) * 60 == total_secs,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CountdownEngine;
    use std::num::NonZeroU32;

    fn render(engine: &CountdownEngine) -> TimerView {
        TimerView::render(engine.snapshot(), &ViewSettings::default())
    }

    #[test]
    fn test_ready_view() {
        let view = render(&CountdownEngine::default());
        assert_eq!(view.display, "25:00");
        assert_eq!(view.primary_label, "Start");
        assert!(!view.show_reset);
        assert!(view.show_presets);
        assert_eq!(view.ready_hint, Some("Ready to start"));
        assert_eq!(view.ring.dash_offset, view.ring.circumference);
        assert_eq!(view.ring.transition, IDLE_TRANSITION);

        let selected: Vec<u32> = view.presets.iter().filter(|p| p.selected).map(|p| p.minutes).collect();
        assert_eq!(selected, vec![25]);
    }

    #[test]
    fn test_running_view_hides_presets() {
        let mut engine = CountdownEngine::default();
        engine.start_or_pause();
        let view = render(&engine);
        assert_eq!(view.primary_label, "Pause");
        assert!(view.show_reset);
        assert!(!view.show_presets);
        assert_eq!(view.ready_hint, None);
        assert_eq!(view.ring.transition, RUNNING_TRANSITION);
    }

    #[test]
    fn test_paused_view_offers_reset() {
        let mut engine = CountdownEngine::default();
        engine.start_or_pause();
        engine.on_tick();
        engine.start_or_pause();

        let view = render(&engine);
        assert_eq!(view.display, "24:59");
        assert_eq!(view.primary_label, "Start");
        assert!(view.show_reset);
        assert!(view.show_presets);
        assert_eq!(view.ready_hint, None);
    }

    #[test]
    fn test_finished_view() {
        let mut engine = CountdownEngine::new(1);
        engine.start_or_pause();
        engine.on_tick();

        let view = render(&engine);
        assert_eq!(view.display, "00:00");
        assert_eq!(view.primary_label, "Restart");
        assert!(view.show_reset);
        assert_eq!(view.ring.dash_offset, 0.0);
    }

    #[test]
    fn test_custom_duration_selects_no_preset() {
        let mut engine = CountdownEngine::default();
        engine.set_duration(NonZeroU32::new(7).unwrap());
        let view = render(&engine);
        assert!(view.presets.iter().all(|p| !p.selected));
        assert_eq!(view.presets[0].label, "5 min");
    }

    #[test]
    fn test_hidden_accent_picker() {
        let settings = ViewSettings {
            theme: Theme::Dark,
            accent: Accent::Green,
            show_accent_picker: false,
        };
        let view = TimerView::render(CountdownEngine::default().snapshot(), &settings);
        assert!(view.palette.accent_choices.is_empty());
        assert_eq!(view.palette.colors, Theme::Dark.colors());
        assert_eq!(view.palette.accent_colors.primary, "#34C759");
    }
}
