//! Metric source that reads system-wide counters from `/proc/`.

use std::path::Path;
use std::thread;
use std::time::Duration;

use tracing::trace;

use crate::collector::procfs::parser::{
    CpuStat, GlobalStat, parse_global_stat, parse_loadavg, parse_meminfo,
};
use crate::collector::source::{CpuTimes, CpuTimesPercent, MemoryTotals, MetricSource, SourceError};
use crate::collector::traits::FileSystem;

const KB: u64 = 1024;

/// Reads system-wide metrics from `/proc/`.
pub struct ProcfsSource<F: FileSystem> {
    fs: F,
    proc_path: String,
}

impl<F: FileSystem> ProcfsSource<F> {
    /// Creates a new source.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    pub fn new(fs: F, proc_path: impl Into<String>) -> Self {
        Self {
            fs,
            proc_path: proc_path.into(),
        }
    }

    fn read(&self, name: &str) -> Result<String, SourceError> {
        let path = format!("{}/{}", self.proc_path, name);
        Ok(self.fs.read_to_string(Path::new(&path))?)
    }

    fn read_stat(&self) -> Result<GlobalStat, SourceError> {
        Ok(parse_global_stat(&self.read("stat")?)?)
    }
}

/// Percentages of each bucket between two `/proc/stat` readings.
///
/// A zero (or negative, after a counter reset) elapsed total yields zeros.
pub fn cpu_percent_between(prev: &CpuStat, curr: &CpuStat) -> CpuTimesPercent {
    let total = curr.total().saturating_sub(prev.total());
    if total == 0 {
        return CpuTimesPercent::default();
    }
    let pct = |c: u64, p: u64| c.saturating_sub(p) as f64 * 100.0 / total as f64;
    CpuTimesPercent {
        user: pct(curr.user, prev.user),
        system: pct(curr.system, prev.system),
        idle: pct(curr.idle, prev.idle),
    }
}

impl<F: FileSystem> MetricSource for ProcfsSource<F> {
    fn core_count(&self) -> Result<usize, SourceError> {
        Ok(self.read_stat()?.cores().count())
    }

    fn cpu_times_percent(&mut self, window: Duration) -> Result<CpuTimes, SourceError> {
        let before = self.read_stat()?;
        thread::sleep(window);
        let after = self.read_stat()?;

        let total = match (before.aggregate(), after.aggregate()) {
            (Some(prev), Some(curr)) => cpu_percent_between(prev, curr),
            _ => return Err(SourceError::Parse("aggregate cpu line missing".to_string())),
        };
        let per_core = before
            .cores()
            .zip(after.cores())
            .map(|(prev, curr)| cpu_percent_between(prev, curr))
            .collect();

        trace!(?total, "cpu window sampled");
        Ok(CpuTimes { total, per_core })
    }

    fn virtual_memory(&self) -> Result<MemoryTotals, SourceError> {
        let info = parse_meminfo(&self.read("meminfo")?)?;
        Ok(MemoryTotals {
            total: info.mem_total * KB,
            used: info.mem_used() * KB,
        })
    }

    fn swap_memory(&self) -> Result<MemoryTotals, SourceError> {
        let info = parse_meminfo(&self.read("meminfo")?)?;
        Ok(MemoryTotals {
            total: info.swap_total * KB,
            used: info.swap_used() * KB,
        })
    }

    fn load_average(&self) -> Result<(f64, f64, f64), SourceError> {
        let path = format!("{}/loadavg", self.proc_path);
        if !self.fs.exists(Path::new(&path)) {
            return Err(SourceError::Unsupported("load average"));
        }
        let load = parse_loadavg(&self.read("loadavg")?)?;
        Ok((load.load1, load.load5, load.load15))
    }

    fn boot_time(&self) -> Result<i64, SourceError> {
        let stat = self.read_stat()?;
        if stat.btime == 0 {
            return Err(SourceError::Parse("btime missing from stat".to_string()));
        }
        Ok(stat.btime as i64)
    }

    fn process_count(&self) -> Result<u64, SourceError> {
        let entries = self.fs.read_dir(Path::new(&self.proc_path))?;
        let count = entries
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .filter(|name| name.parse::<u32>().is_ok())
            .count();
        Ok(count as u64)
    }
}
