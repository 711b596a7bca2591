//! Deterministic metric source for unit tests.

use std::time::Duration;

use super::source::{CpuTimes, CpuTimesPercent, MemoryTotals, MetricSource, SourceError};

/// Returns the same configured values on every call.
#[derive(Debug, Clone)]
pub struct FixedSource {
    pub cores: usize,
    pub total: CpuTimesPercent,
    pub per_core: CpuTimesPercent,
    pub memory: MemoryTotals,
    pub swap: MemoryTotals,
    pub load: Option<(f64, f64, f64)>,
    pub boot_time: i64,
    pub processes: u64,
    pub fail_memory: bool,
}

impl FixedSource {
    /// 4 cores at 25% user / 5% system, 8 GiB RAM half used, 2 GiB swap.
    pub fn four_cores() -> Self {
        let times = CpuTimesPercent {
            user: 25.0,
            system: 5.0,
            idle: 70.0,
        };
        Self {
            cores: 4,
            total: times,
            per_core: times,
            memory: MemoryTotals {
                total: 8_589_934_592,
                used: 4_294_967_296,
            },
            swap: MemoryTotals {
                total: 2_147_483_648,
                used: 0,
            },
            load: Some((0.5, 0.25, 0.1)),
            boot_time: 1_700_000_000,
            processes: 321,
            fail_memory: false,
        }
    }
}

impl MetricSource for FixedSource {
    fn core_count(&self) -> Result<usize, SourceError> {
        Ok(self.cores)
    }

    fn cpu_times_percent(&mut self, _window: Duration) -> Result<CpuTimes, SourceError> {
        Ok(CpuTimes {
            total: self.total,
            per_core: vec![self.per_core; self.cores],
        })
    }

    fn virtual_memory(&self) -> Result<MemoryTotals, SourceError> {
        if self.fail_memory {
            return Err(SourceError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "meminfo",
            )));
        }
        Ok(self.memory)
    }

    fn swap_memory(&self) -> Result<MemoryTotals, SourceError> {
        Ok(self.swap)
    }

    fn load_average(&self) -> Result<(f64, f64, f64), SourceError> {
        self.load.ok_or(SourceError::Unsupported("load average"))
    }

    fn boot_time(&self) -> Result<i64, SourceError> {
        Ok(self.boot_time)
    }

    fn process_count(&self) -> Result<u64, SourceError> {
        Ok(self.processes)
    }
}
