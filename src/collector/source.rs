//! The `MetricSource` seam between OS counters and `SystemStatus`.

use std::time::Duration;

use crate::collector::procfs::parser::ParseError;

/// Errors reported by a metric source.
#[derive(Debug)]
pub enum SourceError {
    /// The platform does not provide this metric.
    Unsupported(&'static str),
    /// I/O error reading a counter file.
    Io(std::io::Error),
    /// Counter file had an unexpected format.
    Parse(String),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Unsupported(what) => write!(f, "{} is not supported on this platform", what),
            SourceError::Io(e) => write!(f, "I/O error: {}", e),
            SourceError::Parse(msg) => write!(f, "parse error: {}", msg),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SourceError {
    fn from(e: std::io::Error) -> Self {
        SourceError::Io(e)
    }
}

impl From<ParseError> for SourceError {
    fn from(e: ParseError) -> Self {
        SourceError::Parse(e.message)
    }
}

/// CPU time split in 0-100 scale for one core or the whole machine.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CpuTimesPercent {
    pub user: f64,
    pub system: f64,
    pub idle: f64,
}

/// Result of one CPU sampling window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CpuTimes {
    /// Machine-wide split, measured directly rather than averaged from cores.
    pub total: CpuTimesPercent,
    /// One entry per logical core, in enumeration order.
    pub per_core: Vec<CpuTimesPercent>,
}

/// Total and used bytes of RAM or swap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryTotals {
    pub total: u64,
    pub used: u64,
}

/// Source of raw OS metrics.
///
/// All calls are synchronous. `cpu_times_percent` blocks for the whole
/// sampling window and dominates the cost of a sampling pass.
pub trait MetricSource: Send {
    /// Number of logical cores. Queried once at startup.
    fn core_count(&self) -> Result<usize, SourceError>;

    /// CPU time percentages accumulated over `window`.
    fn cpu_times_percent(&mut self, window: Duration) -> Result<CpuTimes, SourceError>;

    /// Physical memory totals in bytes.
    fn virtual_memory(&self) -> Result<MemoryTotals, SourceError>;

    /// Swap totals in bytes.
    fn swap_memory(&self) -> Result<MemoryTotals, SourceError>;

    /// 1, 5 and 15 minute load averages.
    fn load_average(&self) -> Result<(f64, f64, f64), SourceError>;

    /// Boot time as unix seconds.
    fn boot_time(&self) -> Result<i64, SourceError>;

    /// Number of live processes.
    fn process_count(&self) -> Result<u64, SourceError>;
}
