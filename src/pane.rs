//! Terminal multiplexer integration.
//!
//! When started inside tmux, ttop opens a new pane sized to the layout,
//! runs itself there with `--no-tmux`, and the launching process exits.

use std::process::Command;

use tracing::{debug, info};

use crate::config::Orientation;

/// Oldest tmux release with the subcommands used here.
pub const MIN_TMUX_VERSION: (u32, u32) = (1, 8);

/// Errors from driving the multiplexer.
#[derive(Debug)]
pub enum PaneError {
    /// The tmux binary could not be started.
    Spawn(std::io::Error),
    /// A tmux subcommand exited unsuccessfully.
    Failed { command: String, stderr: String },
    /// `tmux -V` printed nothing that looks like a version.
    UnknownVersion(String),
    /// tmux is older than [`MIN_TMUX_VERSION`].
    UnsupportedVersion(u32, u32),
}

impl std::fmt::Display for PaneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaneError::Spawn(e) => write!(f, "failed to run tmux: {}", e),
            PaneError::Failed { command, stderr } => {
                write!(f, "tmux {} failed: {}", command, stderr.trim())
            }
            PaneError::UnknownVersion(output) => {
                write!(f, "cannot parse tmux version from {:?}", output.trim())
            }
            PaneError::UnsupportedVersion(major, minor) => write!(
                f,
                "your tmux version is {}.{}; only tmux {}.{} or higher is supported, use --no-tmux",
                major, minor, MIN_TMUX_VERSION.0, MIN_TMUX_VERSION.1
            ),
        }
    }
}

impl std::error::Error for PaneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaneError::Spawn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PaneError {
    fn from(e: std::io::Error) -> Self {
        PaneError::Spawn(e)
    }
}

/// Pane operations needed to host the monitor next to the current pane.
pub trait PaneController {
    /// Opens a new pane running `command`.
    fn split_pane(&mut self, orientation: Orientation, command: &str) -> Result<(), PaneError>;

    /// Moves focus back to the previously active pane.
    fn focus_previous_pane(&mut self) -> Result<(), PaneError>;

    fn resize_pane(&mut self, width: Option<u16>, height: Option<u16>) -> Result<(), PaneError>;

    fn swap_with_previous_pane(&mut self) -> Result<(), PaneError>;
}

/// Whether this process runs inside a tmux session.
pub fn in_tmux() -> bool {
    std::env::var_os("TMUX").is_some_and(|value| !value.is_empty())
}

/// Extracts `(major, minor)` from `tmux -V` output such as `tmux 3.3a`.
pub fn parse_version(output: &str) -> Option<(u32, u32)> {
    let start = output.find(|c: char| c.is_ascii_digit())?;
    let version = output[start..]
        .split(|c: char| !(c.is_ascii_digit() || c == '.'))
        .next()?;
    let mut parts = version.split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
    Some((major, minor))
}

/// Checks `tmux -V` output against [`MIN_TMUX_VERSION`].
pub fn check_version(output: &str) -> Result<(u32, u32), PaneError> {
    let version =
        parse_version(output).ok_or_else(|| PaneError::UnknownVersion(output.to_string()))?;
    if version < MIN_TMUX_VERSION {
        return Err(PaneError::UnsupportedVersion(version.0, version.1));
    }
    Ok(version)
}

/// Quotes `arg` for a POSIX shell when it contains anything unusual.
pub fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:,+@%".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

/// Shell command line that reruns `args` without tmux handling.
pub fn relaunch_command<I, S>(args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut words: Vec<String> = args
        .into_iter()
        .map(|arg| shell_quote(arg.as_ref()))
        .collect();
    words.push("--no-tmux".to_string());
    words.join(" ")
}

/// `split-window` arguments: `-v` stacks panes for horizontal layouts,
/// `-h` places them side by side for vertical ones.
pub fn split_args(orientation: Orientation, command: &str) -> Vec<String> {
    let flag = match orientation {
        Orientation::Horizontal => "-v",
        Orientation::Vertical => "-h",
    };
    vec!["split-window".into(), flag.into(), command.into()]
}

pub fn resize_args(width: Option<u16>, height: Option<u16>) -> Vec<String> {
    let mut args = vec!["resize-pane".to_string()];
    if let Some(width) = width {
        args.extend(["-x".to_string(), width.to_string()]);
    }
    if let Some(height) = height {
        args.extend(["-y".to_string(), height.to_string()]);
    }
    args
}

/// Opens the monitor pane: split, refocus, resize, swap.
pub fn launch_in_pane(
    panes: &mut dyn PaneController,
    orientation: Orientation,
    command: &str,
    width: Option<u16>,
    height: Option<u16>,
) -> Result<(), PaneError> {
    info!(?orientation, ?width, ?height, "opening monitor pane");
    panes.split_pane(orientation, command)?;
    panes.focus_previous_pane()?;
    panes.resize_pane(width, height)?;
    panes.swap_with_previous_pane()
}

/// [`PaneController`] backed by the `tmux` command.
#[derive(Debug, Default)]
pub struct Tmux;

impl Tmux {
    pub fn new() -> Self {
        Self
    }

    fn call(&self, args: &[String]) -> Result<String, PaneError> {
        debug!(?args, "tmux");
        let output = Command::new("tmux").args(args).output()?;
        if !output.status.success() {
            return Err(PaneError::Failed {
                command: args.join(" "),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Runs `tmux -V` and checks the minimum version.
    pub fn version(&self) -> Result<(u32, u32), PaneError> {
        let output = self.call(&["-V".to_string()])?;
        check_version(&output)
    }
}

impl PaneController for Tmux {
    fn split_pane(&mut self, orientation: Orientation, command: &str) -> Result<(), PaneError> {
        self.call(&split_args(orientation, command)).map(drop)
    }

    fn focus_previous_pane(&mut self) -> Result<(), PaneError> {
        self.call(&["last-pane".to_string()]).map(drop)
    }

    fn resize_pane(&mut self, width: Option<u16>, height: Option<u16>) -> Result<(), PaneError> {
        if width.is_none() && height.is_none() {
            return Ok(());
        }
        self.call(&resize_args(width, height)).map(drop)
    }

    fn swap_with_previous_pane(&mut self) -> Result<(), PaneError> {
        self.call(&["swap-pane".to_string(), "-D".to_string()])
            .map(drop)
    }
}
