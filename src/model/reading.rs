//! Readings derived from one sampling pass.

use std::fmt;

use super::metric::{ByteCount, Percent};

/// CPU time split for one core or the whole machine.
///
/// Updated in place every sampling pass; copied by value into a
/// `ResourceHistory`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CpuReading {
    user: Percent,
    system: Percent,
    used: Percent,
    idle: Percent,
}

impl CpuReading {
    /// Creates a reading from 0-100 scale values.
    pub fn new(user: f64, system: f64, idle: f64) -> Self {
        let mut reading = Self::default();
        reading.update(user, system, idle);
        reading
    }

    /// Replaces the reading. `used` is stored as `user + system`.
    pub fn update(&mut self, user: f64, system: f64, idle: f64) {
        self.user = Percent::new(user);
        self.system = Percent::new(system);
        self.used = Percent::new(user + system);
        self.idle = Percent::new(idle);
    }

    pub fn user(&self) -> Percent {
        self.user
    }

    pub fn system(&self) -> Percent {
        self.system
    }

    pub fn used(&self) -> Percent {
        self.used
    }

    pub fn idle(&self) -> Percent {
        self.idle
    }
}

impl fmt::Display for CpuReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.used.fmt(f)
    }
}

/// Total and used bytes of RAM or swap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoryReading {
    total: ByteCount,
    used: ByteCount,
    percent: Percent,
}

impl Default for MemoryReading {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

impl MemoryReading {
    pub fn new(total: u64, used: u64) -> Self {
        let mut reading = Self {
            total: ByteCount::default(),
            used: ByteCount::default(),
            percent: Percent::default(),
        };
        reading.update(total, used);
        reading
    }

    /// Replaces the reading. A zero total is treated as 1 byte for the
    /// percentage so that machines without swap read as 0%.
    pub fn update(&mut self, total: u64, used: u64) {
        self.total = ByteCount::new(total);
        self.used = ByteCount::new(used);
        let divisor = total.max(1) as f64;
        self.percent = Percent::new(used as f64 / divisor * 100.0);
    }

    pub fn total(&self) -> ByteCount {
        self.total
    }

    pub fn used(&self) -> ByteCount {
        self.used
    }

    pub fn percent(&self) -> Percent {
        self.percent
    }
}

impl fmt::Display for MemoryReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} {}", self.used, self.total, self.percent)
    }
}

/// 1, 5 and 15 minute load averages.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoadAverage {
    pub avg1: f64,
    pub avg5: f64,
    pub avg15: f64,
}

impl LoadAverage {
    pub fn update(&mut self, (avg1, avg5, avg15): (f64, f64, f64)) {
        self.avg1 = avg1;
        self.avg5 = avg5;
        self.avg15 = avg15;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Each average formatted with two decimals.
    pub fn parts(&self) -> [String; 3] {
        [
            format!("{:.2}", self.avg1),
            format!("{:.2}", self.avg5),
            format!("{:.2}", self.avg15),
        ]
    }
}

impl fmt::Display for LoadAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {:.2} {:.2}", self.avg1, self.avg5, self.avg15)
    }
}

/// Time since boot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Uptime {
    seconds: u64,
}

impl Uptime {
    pub fn from_secs(seconds: u64) -> Self {
        Self { seconds }
    }

    pub fn update(&mut self, seconds: u64) {
        self.seconds = seconds;
    }

    pub fn as_secs(&self) -> u64 {
        self.seconds
    }

    pub fn days(&self) -> u64 {
        self.seconds / 86_400
    }

    pub fn hours(&self) -> u64 {
        self.seconds % 86_400 / 3_600
    }

    pub fn minutes(&self) -> u64 {
        self.seconds % 3_600 / 60
    }

    pub fn secs(&self) -> u64 {
        self.seconds % 60
    }
}

impl fmt::Display for Uptime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days = self.days();
        if days > 0 {
            write!(f, "{} day{} ", days, if days == 1 { "" } else { "s" })?;
        }
        write!(f, "{}:{}:{}", self.hours(), self.minutes(), self.secs())
    }
}

/// Number of live processes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessCount(pub u64);

impl fmt::Display for ProcessCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
