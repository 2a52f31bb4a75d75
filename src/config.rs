//! Configuration and CLI argument handling

use std::{fmt, sync::Arc};

use clap::Parser;

use crate::{
    services::ChimeCommand,
    state::DEFAULT_DURATION_SECS,
    view::{Accent, Theme, ViewSettings},
};

/// Callback invoked with no arguments when a countdown reaches zero
pub type CompletionCallback = Arc<dyn Fn() + Send + Sync>;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "quiet-timer")]
#[command(about = "A countdown timer service with a progress ring view and HTTP controls")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Initial countdown span in seconds
    #[arg(short, long, default_value_t = DEFAULT_DURATION_SECS,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub duration: u64,

    /// Display palette
    #[arg(long, value_enum, default_value_t = Theme::Light)]
    pub theme: Theme,

    /// Highlight color
    #[arg(long, value_enum, default_value_t = Accent::Blue)]
    pub accent: Accent,

    /// Do not offer the accent picker in the rendered view
    #[arg(long)]
    pub hide_accent_picker: bool,

    /// Program to run when a countdown completes (e.g. a sound player)
    #[arg(long)]
    pub chime: Option<String>,

    /// Argument passed to the chime program, repeatable
    #[arg(long = "chime-arg", requires = "chime")]
    pub chime_args: Vec<String>,

    /// Ring the terminal bell when a countdown completes
    #[arg(long)]
    pub bell: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn view_settings(&self) -> ViewSettings {
        ViewSettings {
            theme: self.theme,
            accent: self.accent,
            show_accent_picker: !self.hide_accent_picker,
        }
    }

    pub fn chime_command(&self) -> Option<ChimeCommand> {
        self.chime.as_ref().map(|program| ChimeCommand {
            program: program.clone(),
            args: self.chime_args.clone(),
        })
    }

    /// Build the timer construction options from the CLI values
    pub fn timer_options(&self) -> TimerOptions {
        TimerOptions {
            duration_secs: self.duration,
            view: self.view_settings(),
            on_complete: None,
            chime: self.chime_command(),
            bell: self.bell,
        }
    }
}

/// Options fixed when a countdown is constructed
#[derive(Clone)]
pub struct TimerOptions {
    /// Span in seconds; zero is raised to one second
    pub duration_secs: u64,
    pub view: ViewSettings,
    pub on_complete: Option<CompletionCallback>,
    pub chime: Option<ChimeCommand>,
    pub bell: bool,
}

impl TimerOptions {
    pub fn with_duration(mut self, duration_secs: u64) -> Self {
        self.duration_secs = duration_secs;
        self
    }

    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_complete = Some(Arc::new(callback));
        self
    }
}

impl Default for TimerOptions {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_DURATION_SECS,
            view: ViewSettings::default(),
            on_complete: None,
            chime: None,
            bell: false,
        }
    }
}

impl fmt::Debug for TimerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerOptions")
            .field("duration_secs", &self.duration_secs)
            .field("view", &self.view)
            .field("on_complete", &self.on_complete.is_some())
            .field("chime", &self.chime)
            .field("bell", &self.bell)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let config = Config::try_parse_from(["quiet-timer"]).unwrap();
        assert_eq!(config.duration, 1500);
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.accent, Accent::Blue);
        assert_eq!(config.log_level(), "info");

        let options = config.timer_options();
        assert_eq!(options.duration_secs, 1500);
        assert!(options.view.show_accent_picker);
        assert!(options.chime.is_none());
    }

    #[test]
    fn test_cli_rejects_zero_duration() {
        assert!(Config::try_parse_from(["quiet-timer", "--duration", "0"]).is_err());
    }

    #[test]
    fn test_cli_chime_and_palette() {
        let config = Config::try_parse_from([
            "quiet-timer",
            "--theme", "dark",
            "--accent", "orange",
            "--hide-accent-picker",
            "--chime", "paplay",
            "--chime-arg", "done.oga",
            "-v",
        ])
        .unwrap();

        assert_eq!(config.log_level(), "debug");
        let options = config.timer_options();
        assert_eq!(options.view.theme, Theme::Dark);
        assert_eq!(options.view.accent, Accent::Orange);
        assert!(!options.view.show_accent_picker);
        assert_eq!(
            options.chime,
            Some(ChimeCommand {
                program: "paplay".to_string(),
                args: vec!["done.oga".to_string()],
            })
        );
    }

    #[test]
    fn test_chime_arg_requires_chime() {
        assert!(Config::try_parse_from(["quiet-timer", "--chime-arg", "x"]).is_err());
    }
}
