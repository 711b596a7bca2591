//! Raw OS metric acquisition.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │            SystemStatus::sample          │
//! └────────────────────┬─────────────────────┘
//!                      │
//!               ┌──────▼───────┐
//!               │ MetricSource │ (trait)
//!               └──────┬───────┘
//!                      │
//!               ┌──────▼───────┐
//!               │ ProcfsSource │  /proc/stat, /proc/meminfo,
//!               └──────┬───────┘  /proc/loadavg, /proc/[pid]
//!                      │
//!               ┌──────▼───────┐
//!               │  FileSystem  │ (trait)
//!               └──────┬───────┘
//!              ┌───────┴───────┐
//!       ┌──────▼──────┐ ┌──────▼──────┐
//!       │   RealFs    │ │   MockFs    │
//!       │  (Linux)    │ │  (Testing)  │
//!       └─────────────┘ └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use std::time::Duration;
//! use ttop::collector::{MetricSource, MockFs, ProcfsSource};
//!
//! let mut source = ProcfsSource::new(MockFs::typical_system(), "/proc");
//! assert_eq!(source.core_count().unwrap(), 4);
//! let cpu = source.cpu_times_percent(Duration::ZERO).unwrap();
//! assert_eq!(cpu.per_core.len(), 4);
//! ```

#[cfg(test)]
pub(crate) mod fixture;
pub mod mock;
pub mod procfs;
mod source;
pub mod traits;

pub use mock::MockFs;
pub use procfs::ProcfsSource;
pub use source::{CpuTimes, CpuTimesPercent, MemoryTotals, MetricSource, SourceError};
pub use traits::{FileSystem, RealFs};
