//! Parsers for `/proc` filesystem files.
//!
//! These are pure functions that parse the content of `/proc` files into
//! structured data, so they can be tested with plain string inputs.

/// Error type for parsing failures.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parse error: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Parsed data from `/proc/meminfo`, in kB.
#[derive(Debug, Clone, Default)]
pub struct MemInfo {
    pub mem_total: u64,
    pub mem_free: u64,
    /// Absent on kernels older than 3.14.
    pub mem_available: Option<u64>,
    pub buffers: u64,
    pub cached: u64,
    pub swap_total: u64,
    pub swap_free: u64,
}

impl MemInfo {
    /// Used physical memory in kB.
    pub fn mem_used(&self) -> u64 {
        let available = self
            .mem_available
            .unwrap_or(self.mem_free + self.buffers + self.cached);
        self.mem_total.saturating_sub(available)
    }

    /// Used swap in kB.
    pub fn swap_used(&self) -> u64 {
        self.swap_total.saturating_sub(self.swap_free)
    }
}

/// Parses `/proc/meminfo` content.
pub fn parse_meminfo(content: &str) -> Result<MemInfo, ParseError> {
    let mut info = MemInfo::default();
    let mut seen_total = false;

    let parse_kb = |line: &str| -> u64 {
        line.split_whitespace()
            .nth(1)
            .and_then(|s| s.parse().ok())
            .unwrap_or(0)
    };

    for line in content.lines() {
        if line.starts_with("MemTotal:") {
            info.mem_total = parse_kb(line);
            seen_total = true;
        } else if line.starts_with("MemFree:") {
            info.mem_free = parse_kb(line);
        } else if line.starts_with("MemAvailable:") {
            info.mem_available = Some(parse_kb(line));
        } else if line.starts_with("Buffers:") {
            info.buffers = parse_kb(line);
        } else if line.starts_with("Cached:") {
            info.cached = parse_kb(line);
        } else if line.starts_with("SwapTotal:") {
            info.swap_total = parse_kb(line);
        } else if line.starts_with("SwapFree:") {
            info.swap_free = parse_kb(line);
        }
    }

    if !seen_total {
        return Err(ParseError::new("MemTotal missing from meminfo"));
    }

    Ok(info)
}

/// Single CPU line from `/proc/stat`, in clock ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuStat {
    pub cpu_id: Option<u32>, // None for aggregate "cpu" line
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
    pub iowait: u64,
    pub irq: u64,
    pub softirq: u64,
    pub steal: u64,
    pub guest: u64,
    pub guest_nice: u64,
}

impl CpuStat {
    /// Sum of all time buckets. Guest time is already accounted in user/nice.
    pub fn total(&self) -> u64 {
        self.user
            + self.nice
            + self.system
            + self.idle
            + self.iowait
            + self.irq
            + self.softirq
            + self.steal
    }
}

/// Global stats from `/proc/stat`.
#[derive(Debug, Clone, Default)]
pub struct GlobalStat {
    /// Aggregate line first (when present), then per-core lines.
    pub cpus: Vec<CpuStat>,
    pub btime: u64,
}

impl GlobalStat {
    /// The aggregate `cpu` line.
    pub fn aggregate(&self) -> Option<&CpuStat> {
        self.cpus.iter().find(|c| c.cpu_id.is_none())
    }

    /// The `cpuN` lines in file order.
    pub fn cores(&self) -> impl Iterator<Item = &CpuStat> {
        self.cpus.iter().filter(|c| c.cpu_id.is_some())
    }
}

/// Parses `/proc/stat` content.
pub fn parse_global_stat(content: &str) -> Result<GlobalStat, ParseError> {
    let mut stat = GlobalStat::default();

    for line in content.lines() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        if parts[0].starts_with("cpu") {
            let cpu_id = if parts[0] == "cpu" {
                None
            } else {
                match parts[0].strip_prefix("cpu").and_then(|s| s.parse().ok()) {
                    Some(id) => Some(id),
                    None => return Err(ParseError::new(format!("invalid cpu label {}", parts[0]))),
                }
            };

            let get_val =
                |idx: usize| -> u64 { parts.get(idx).and_then(|s| s.parse().ok()).unwrap_or(0) };

            stat.cpus.push(CpuStat {
                cpu_id,
                user: get_val(1),
                nice: get_val(2),
                system: get_val(3),
                idle: get_val(4),
                iowait: get_val(5),
                irq: get_val(6),
                softirq: get_val(7),
                steal: get_val(8),
                guest: get_val(9),
                guest_nice: get_val(10),
            });
        } else if parts[0] == "btime" {
            stat.btime = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(0);
        }
    }

    if stat.aggregate().is_none() {
        return Err(ParseError::new("aggregate cpu line missing from stat"));
    }

    Ok(stat)
}

/// Parsed data from `/proc/loadavg`.
#[derive(Debug, Clone, Default)]
pub struct LoadAvg {
    pub load1: f64,
    pub load5: f64,
    pub load15: f64,
}

/// Parses `/proc/loadavg` content.
pub fn parse_loadavg(content: &str) -> Result<LoadAvg, ParseError> {
    let parts: Vec<&str> = content.split_whitespace().collect();
    if parts.len() < 3 {
        return Err(ParseError::new("invalid loadavg format"));
    }

    let load1 = parts[0]
        .parse()
        .map_err(|_| ParseError::new("invalid load1"))?;
    let load5 = parts[1]
        .parse()
        .map_err(|_| ParseError::new("invalid load5"))?;
    let load15 = parts[2]
        .parse()
        .map_err(|_| ParseError::new("invalid load15"))?;

    Ok(LoadAvg {
        load1,
        load5,
        load15,
    })
}
