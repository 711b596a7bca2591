//! Top-level error type.

use crate::collector::SourceError;
use crate::config::ConfigError;
use crate::pane::PaneError;
use crate::tui::DrawError;

/// Any failure that ends the monitor.
#[derive(Debug)]
pub enum MonitorError {
    /// A required metric could not be read.
    Source(SourceError),
    /// A view wrote outside the screen.
    Draw(DrawError),
    /// Terminal I/O failed.
    Io(std::io::Error),
    Config(ConfigError),
    Pane(PaneError),
    /// The render thread panicked.
    RenderPanicked,
}

impl std::fmt::Display for MonitorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MonitorError::Source(e) => write!(f, "sampling failed: {}", e),
            MonitorError::Draw(e) => write!(f, "drawing failed: {}", e),
            MonitorError::Io(e) => write!(f, "terminal I/O error: {}", e),
            MonitorError::Config(e) => write!(f, "{}", e),
            MonitorError::Pane(e) => write!(f, "{}", e),
            MonitorError::RenderPanicked => write!(f, "render thread panicked"),
        }
    }
}

impl std::error::Error for MonitorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MonitorError::Source(e) => Some(e),
            MonitorError::Draw(e) => Some(e),
            MonitorError::Io(e) => Some(e),
            MonitorError::Config(e) => Some(e),
            MonitorError::Pane(e) => Some(e),
            MonitorError::RenderPanicked => None,
        }
    }
}

impl From<SourceError> for MonitorError {
    fn from(e: SourceError) -> Self {
        MonitorError::Source(e)
    }
}

impl From<DrawError> for MonitorError {
    fn from(e: DrawError) -> Self {
        MonitorError::Draw(e)
    }
}

impl From<std::io::Error> for MonitorError {
    fn from(e: std::io::Error) -> Self {
        MonitorError::Io(e)
    }
}

impl From<ConfigError> for MonitorError {
    fn from(e: ConfigError) -> Self {
        MonitorError::Config(e)
    }
}

impl From<PaneError> for MonitorError {
    fn from(e: PaneError) -> Self {
        MonitorError::Pane(e)
    }
}
