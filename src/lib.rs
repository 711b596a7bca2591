//! ttop - live terminal system monitor.
//!
//! Samples CPU, memory, swap, load average, uptime and process count on a
//! fixed interval and draws them as text gauges. Inside tmux the monitor
//! opens in its own pane sized to the chosen layout.
//!
//! - [`collector`] reads raw counters behind the `MetricSource` trait
//! - [`model`] normalizes them into readings held by `SystemStatus`
//! - [`tui`] draws readings through views and layouts
//! - [`pane`] drives tmux
//! - [`config`] holds validated runtime settings

pub mod collector;
pub mod config;
pub mod error;
pub mod model;
pub mod pane;
pub mod tui;

pub use error::MonitorError;
