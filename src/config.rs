//! Runtime configuration values and their validation.

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

/// Color theme selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ThemeName {
    Mono,
    #[default]
    Default,
    Bright,
}

/// How much detail the layout shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Density {
    #[default]
    Normal,
    Minimal,
    Stack,
}

/// Main axis of the layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// A positional layout word: either a density or an orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutWord {
    Normal,
    Minimal,
    Stack,
    Horizontal,
    Vertical,
}

/// Configuration errors, reported before the terminal is taken over.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Interval is not a positive, finite number of seconds.
    InvalidInterval(f64),
    /// Two densities or two orientations were given.
    ConflictingLayout(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidInterval(secs) => {
                write!(f, "invalid interval {}: must be a positive number of seconds", secs)
            }
            ConfigError::ConflictingLayout(msg) => write!(f, "conflicting layout: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Resolves positional layout words into a density and orientation.
///
/// Words may come in any order; missing ones fall back to the defaults.
pub fn resolve_layout(words: &[LayoutWord]) -> Result<(Density, Orientation), ConfigError> {
    let mut density = None;
    let mut orientation = None;
    for word in words {
        match word {
            LayoutWord::Normal | LayoutWord::Minimal | LayoutWord::Stack => {
                let value = match word {
                    LayoutWord::Minimal => Density::Minimal,
                    LayoutWord::Stack => Density::Stack,
                    _ => Density::Normal,
                };
                if let Some(previous) = density.replace(value) {
                    return Err(ConfigError::ConflictingLayout(format!(
                        "{:?} and {:?}",
                        previous, value
                    )));
                }
            }
            LayoutWord::Horizontal | LayoutWord::Vertical => {
                let value = if *word == LayoutWord::Vertical {
                    Orientation::Vertical
                } else {
                    Orientation::Horizontal
                };
                if let Some(previous) = orientation.replace(value) {
                    return Err(ConfigError::ConflictingLayout(format!(
                        "{:?} and {:?}",
                        previous, value
                    )));
                }
            }
        }
    }
    Ok((density.unwrap_or_default(), orientation.unwrap_or_default()))
}

/// Validated runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Refresh period, also the CPU sampling window.
    pub interval: Duration,
    pub theme: ThemeName,
    pub density: Density,
    pub orientation: Orientation,
    /// Open a new tmux pane when running inside tmux.
    pub use_tmux: bool,
    pub proc_path: PathBuf,
    pub log_file: Option<PathBuf>,
    pub verbose: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            theme: ThemeName::Default,
            density: Density::Normal,
            orientation: Orientation::Horizontal,
            use_tmux: true,
            proc_path: PathBuf::from("/proc"),
            log_file: None,
            verbose: 0,
        }
    }
}

impl Config {
    /// Converts an interval in seconds, rejecting non-positive and
    /// non-finite values.
    pub fn validate_interval(secs: f64) -> Result<Duration, ConfigError> {
        if !secs.is_finite() || secs <= 0.0 {
            return Err(ConfigError::InvalidInterval(secs));
        }
        Duration::try_from_secs_f64(secs).map_err(|_| ConfigError::InvalidInterval(secs))
    }

    /// Picks the theme: `no_color` wins over an explicit `color`.
    pub fn select_theme(color: Option<ThemeName>, no_color: bool) -> ThemeName {
        if no_color {
            ThemeName::Mono
        } else {
            color.unwrap_or_default()
        }
    }

    /// Checks values that can be set without going through the parsers.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval.is_zero() {
            return Err(ConfigError::InvalidInterval(0.0));
        }
        Ok(())
    }
}
