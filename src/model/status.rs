//! Aggregate holder of the current readings.

use std::time::Duration;

use chrono::Utc;
use tracing::{debug, warn};

use crate::collector::{MetricSource, SourceError};

use super::reading::{CpuReading, LoadAverage, MemoryReading, ProcessCount, Uptime};

/// Current readings for the whole machine.
///
/// Constructed once; [`sample`](Self::sample) mutates every reading in place.
/// Views borrow it for the duration of one draw.
pub struct SystemStatus {
    source: Box<dyn MetricSource>,
    interval: Duration,
    boot_time: i64,
    cpu: CpuReading,
    cores: Vec<CpuReading>,
    memory: MemoryReading,
    swap: MemoryReading,
    load_average: LoadAverage,
    uptime: Uptime,
    process_count: ProcessCount,
}

impl SystemStatus {
    /// Creates the status, fixing the core count and boot time.
    ///
    /// `interval` is the CPU sampling window used by every `sample` call.
    pub fn new(source: Box<dyn MetricSource>, interval: Duration) -> Result<Self, SourceError> {
        let core_count = source.core_count()?;
        let boot_time = source.boot_time()?;
        debug!(core_count, boot_time, "system status initialized");

        Ok(Self {
            source,
            interval,
            boot_time,
            cpu: CpuReading::default(),
            cores: vec![CpuReading::default(); core_count],
            memory: MemoryReading::default(),
            swap: MemoryReading::default(),
            load_average: LoadAverage::default(),
            uptime: Uptime::default(),
            process_count: ProcessCount::default(),
        })
    }

    /// Polls the source once. Blocks for the sampling interval.
    ///
    /// A missing load average is replaced with zeros; every other source
    /// failure is returned to the caller.
    pub fn sample(&mut self) -> Result<(), SourceError> {
        let times = self.source.cpu_times_percent(self.interval)?;
        self.cpu
            .update(times.total.user, times.total.system, times.total.idle);
        for (reading, core) in self.cores.iter_mut().zip(&times.per_core) {
            reading.update(core.user, core.system, core.idle);
        }

        let memory = self.source.virtual_memory()?;
        self.memory.update(memory.total, memory.used);
        let swap = self.source.swap_memory()?;
        self.swap.update(swap.total, swap.used);

        match self.source.load_average() {
            Ok(load) => self.load_average.update(load),
            Err(e) => {
                warn!(error = %e, "load average unavailable, showing zeros");
                self.load_average.clear();
            }
        }

        let now = Utc::now().timestamp();
        self.uptime
            .update(now.saturating_sub(self.boot_time).max(0) as u64);
        self.process_count = ProcessCount(self.source.process_count()?);

        Ok(())
    }

    pub fn cpu(&self) -> &CpuReading {
        &self.cpu
    }

    /// Per-core readings in enumeration order.
    pub fn cores(&self) -> &[CpuReading] {
        &self.cores
    }

    pub fn memory(&self) -> &MemoryReading {
        &self.memory
    }

    pub fn swap(&self) -> &MemoryReading {
        &self.swap
    }

    pub fn load_average(&self) -> &LoadAverage {
        &self.load_average
    }

    pub fn uptime(&self) -> &Uptime {
        &self.uptime
    }

    pub fn process_count(&self) -> ProcessCount {
        self.process_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::fixture::FixedSource;
    use crate::collector::{CpuTimesPercent, MockFs, ProcfsSource};

    fn sampled(source: FixedSource) -> SystemStatus {
        let mut status = SystemStatus::new(Box::new(source), Duration::ZERO).unwrap();
        status.sample().unwrap();
        status
    }

    #[test]
    fn test_new_sizes_cores_once() {
        let status = SystemStatus::new(Box::new(FixedSource::four_cores()), Duration::ZERO).unwrap();
        assert_eq!(status.cores().len(), 4);
        assert_eq!(status.cpu().used().value(), 0.0);
        assert_eq!(status.memory().percent().value(), 0.0);
    }

    #[test]
    fn test_sample_updates_all_readings() {
        let status = sampled(FixedSource::four_cores());

        assert_eq!(status.cpu().used().to_string(), "30%");
        assert!(status.cores().iter().all(|c| c.used().to_string() == "30%"));
        assert_eq!(status.memory().to_string(), "4096M/8192M 50%");
        assert_eq!(status.swap().percent().to_string(), "0%");
        assert_eq!(status.load_average().to_string(), "0.50 0.25 0.10");
        assert_eq!(status.process_count().0, 321);
        assert!(status.uptime().as_secs() > 0);
    }

    #[test]
    fn test_aggregate_is_read_directly() {
        let mut source = FixedSource::four_cores();
        source.total = CpuTimesPercent {
            user: 80.0,
            system: 10.0,
            idle: 10.0,
        };
        let status = sampled(source);
        assert_eq!(status.cpu().used().to_string(), "90%");
        assert_eq!(status.cores()[0].used().to_string(), "30%");
    }

    #[test]
    fn test_missing_load_average_is_zeroed() {
        let mut source = FixedSource::four_cores();
        source.load = None;
        let status = sampled(source);
        assert_eq!(*status.load_average(), LoadAverage::default());
    }

    #[test]
    fn test_memory_failure_is_fatal() {
        let mut source = FixedSource::four_cores();
        source.fail_memory = true;
        let mut status = SystemStatus::new(Box::new(source), Duration::ZERO).unwrap();
        assert!(matches!(status.sample(), Err(SourceError::Io(_))));
    }

    #[test]
    fn test_zero_swap_total() {
        let mut source = FixedSource::four_cores();
        source.swap.total = 0;
        let status = sampled(source);
        assert_eq!(status.swap().percent().to_string(), "0%");
    }

    #[test]
    fn test_sample_from_procfs() {
        let source = ProcfsSource::new(MockFs::without_swap_and_loadavg(), "/proc");
        let mut status = SystemStatus::new(Box::new(source), Duration::ZERO).unwrap();
        status.sample().unwrap();
        assert_eq!(status.cores().len(), 4);
        assert_eq!(status.memory().percent().to_string(), "25%");
        assert_eq!(status.swap().total().bytes(), 0);
        assert_eq!(*status.load_average(), LoadAverage::default());
        assert_eq!(status.process_count().0, 3);
    }
}
