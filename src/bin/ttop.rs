//! ttop - live terminal system monitor.
//!
//! Usage:
//!   ttop                      # normal horizontal layout, 1 second interval
//!   ttop -i 0.5 stack         # history charts refreshed twice a second
//!   ttop minimal vertical     # narrow column next to the current pane
//!   ttop -T                   # draw here even inside tmux

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;
#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use ttop::MonitorError;
#[cfg(target_os = "linux")]
use ttop::collector::RealFs;
#[cfg(not(target_os = "linux"))]
use ttop::collector::mock::MockFs;
use ttop::collector::{MetricSource, ProcfsSource};
use ttop::config::{self, Config, LayoutWord, ThemeName};
use ttop::model::SystemStatus;
use ttop::pane::{self, Tmux};
use ttop::tui::{App, Theme, Updater, build_layout};

/// Live terminal system monitor designed for tmux.
#[derive(Parser)]
#[command(name = "ttop", version, about = "Live terminal system monitor")]
struct Args {
    /// Color theme.
    #[arg(short = 'c', long = "color", value_name = "THEME")]
    color: Option<ThemeName>,

    /// Use the mono theme (overrides --color).
    #[arg(short = 'C', long = "no-color")]
    no_color: bool,

    /// Refresh interval in seconds; also the CPU sampling window.
    #[arg(short = 'i', long = "interval", value_name = "SECONDS", default_value_t = 1.0)]
    interval: f64,

    /// Draw in the current pane even inside tmux.
    #[arg(short = 'T', long = "no-tmux")]
    no_tmux: bool,

    /// Layout density (normal, minimal, stack) and orientation
    /// (horizontal, vertical), in any order.
    #[arg(value_name = "LAYOUT", num_args = 0..=2)]
    layout: Vec<LayoutWord>,

    /// Path to /proc filesystem.
    #[arg(long, default_value = "/proc")]
    proc_path: PathBuf,

    /// Write logs to this file (the terminal is owned by the UI).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn into_config(self) -> Result<Config, config::ConfigError> {
        let interval = Config::validate_interval(self.interval)?;
        let (density, orientation) = config::resolve_layout(&self.layout)?;
        let config = Config {
            interval,
            theme: Config::select_theme(self.color, self.no_color),
            density,
            orientation,
            use_tmux: !self.no_tmux,
            proc_path: self.proc_path,
            log_file: self.log_file,
            verbose: self.verbose,
        };
        config.validate()?;
        Ok(config)
    }
}

fn init_logging(path: &Path, verbose: u8) -> std::io::Result<()> {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let file = File::create(path)?;

    let filter = EnvFilter::from_default_env().add_directive(
        format!("ttop={}", level)
            .parse()
            .unwrap_or_else(|_| LevelFilter::from_level(level).into()),
    );

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn metric_source(config: &Config) -> Box<dyn MetricSource> {
    let proc_path = config.proc_path.to_string_lossy().into_owned();
    #[cfg(target_os = "linux")]
    let fs = RealFs::new();
    #[cfg(not(target_os = "linux"))]
    let fs = {
        tracing::warn!("no /proc on this platform, showing a simulated system");
        MockFs::typical_system()
    };
    Box::new(ProcfsSource::new(fs, proc_path))
}

/// Reruns this command in a new tmux pane sized to the layout.
fn launch_in_tmux(config: &Config, core_count: usize) -> Result<(), MonitorError> {
    let tmux = Tmux::new();
    let version = tmux.version()?;
    info!(?version, "tmux detected");

    let layout = build_layout(
        config.density,
        config.orientation,
        core_count,
        Theme::from_name(config.theme),
    );
    let command = pane::relaunch_command(std::env::args());
    let mut panes = tmux;
    pane::launch_in_pane(
        &mut panes,
        config.orientation,
        &command,
        layout.required_width(),
        layout.required_height(),
    )?;
    Ok(())
}

fn run(config: Config) -> Result<(), MonitorError> {
    let source = metric_source(&config);
    let core_count = source.core_count()?;

    if config.use_tmux && pane::in_tmux() {
        return launch_in_tmux(&config, core_count);
    }

    let status = SystemStatus::new(source, config.interval)?;
    let layout = build_layout(
        config.density,
        config.orientation,
        core_count,
        Theme::from_name(config.theme),
    );
    info!(
        density = ?config.density,
        orientation = ?config.orientation,
        interval_ms = config.interval.as_millis() as u64,
        "starting monitor"
    );
    App::new(Updater::new(status, layout)).run()?;
    info!("monitor stopped");
    Ok(())
}

fn main() {
    let args = Args::parse();

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(ref path) = config.log_file
        && let Err(e) = init_logging(path, config.verbose)
    {
        eprintln!("Error opening log file '{}': {}", path.display(), e);
        std::process::exit(1);
    }

    if let Err(e) = run(config) {
        error!(error = %e, "ttop failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clap::CommandFactory;
    use ttop::config::{ConfigError, Density, Orientation};

    use super::*;

    fn config(args: &[&str]) -> Result<Config, ConfigError> {
        Args::try_parse_from(std::iter::once("ttop").chain(args.iter().copied()))
            .unwrap()
            .into_config()
    }

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.interval, Duration::from_secs(1));
        assert_eq!(config.theme, ThemeName::Default);
        assert_eq!(config.density, Density::Normal);
        assert_eq!(config.orientation, Orientation::Horizontal);
        assert!(config.use_tmux);
        assert_eq!(config.proc_path, PathBuf::from("/proc"));
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_layout_words_in_any_order() {
        let a = config(&["stack", "vertical"]).unwrap();
        let b = config(&["vertical", "stack"]).unwrap();
        assert_eq!((a.density, a.orientation), (Density::Stack, Orientation::Vertical));
        assert_eq!((b.density, b.orientation), (a.density, a.orientation));

        let only_orientation = config(&["vertical"]).unwrap();
        assert_eq!(only_orientation.density, Density::Normal);
    }

    #[test]
    fn test_conflicting_layout_words() {
        assert!(matches!(
            config(&["normal", "minimal"]),
            Err(ConfigError::ConflictingLayout(_))
        ));
    }

    #[test]
    fn test_unknown_layout_word_rejected() {
        assert!(Args::try_parse_from(["ttop", "diagonal"]).is_err());
    }

    #[test]
    fn test_no_color_overrides_color() {
        assert_eq!(config(&["-c", "bright"]).unwrap().theme, ThemeName::Bright);
        assert_eq!(config(&["-c", "bright", "-C"]).unwrap().theme, ThemeName::Mono);
        assert_eq!(config(&["--no-color"]).unwrap().theme, ThemeName::Mono);
    }

    #[test]
    fn test_interval_validation() {
        assert_eq!(
            config(&["-i", "0.5"]).unwrap().interval,
            Duration::from_millis(500)
        );
        assert!(matches!(
            config(&["-i", "0"]),
            Err(ConfigError::InvalidInterval(_))
        ));
        assert!(matches!(
            config(&["--interval", "inf"]),
            Err(ConfigError::InvalidInterval(_))
        ));
    }

    #[test]
    fn test_flags() {
        let config = config(&["-T", "-vv", "--log-file", "/tmp/ttop.log"]).unwrap();
        assert!(!config.use_tmux);
        assert_eq!(config.verbose, 2);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/ttop.log")));
    }
}
