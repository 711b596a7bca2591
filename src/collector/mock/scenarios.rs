//! Pre-built mock filesystem scenarios for testing.
//!
//! These scenarios provide realistic `/proc` states for exercising
//! `ProcfsSource` and everything above it.

use super::filesystem::MockFs;

const TYPICAL_STAT: &str = "\
cpu  10000 500 3000 80000 1000 200 100 0 0 0
cpu0 2500 125 750 20000 250 50 25 0 0 0
cpu1 2500 125 750 20000 250 50 25 0 0 0
cpu2 2500 125 750 20000 250 50 25 0 0 0
cpu3 2500 125 750 20000 250 50 25 0 0 0
intr 1000000 50 0 0 0 0 0 0 0 1 0 0 0 100 0 0 1000
ctxt 500000
btime 1700000000
processes 10000
procs_running 2
procs_blocked 0
";

impl MockFs {
    /// Creates a typical 4-core system with 8 GiB RAM, half of it used,
    /// 2 GiB swap and three processes.
    pub fn typical_system() -> Self {
        let mut fs = Self::new();

        fs.add_file("/proc/uptime", "12345.67 98765.43\n");
        fs.add_file("/proc/loadavg", "0.15 0.10 0.05 1/150 1234\n");
        fs.add_file(
            "/proc/meminfo",
            "\
MemTotal:        8388608 kB
MemFree:         1048576 kB
MemAvailable:    4194304 kB
Buffers:          262144 kB
Cached:          2097152 kB
SwapCached:            0 kB
SwapTotal:       2097152 kB
SwapFree:        1572864 kB
",
        );
        fs.add_file("/proc/stat", TYPICAL_STAT);

        fs.add_process(1, "systemd");
        fs.add_process(412, "sshd");
        fs.add_process(1234, "bash");
        fs.add_dir("/proc/sys");
        fs.add_dir("/proc/net");

        fs
    }

    /// A minimal container-like system: no swap configured and no
    /// `/proc/loadavg`.
    pub fn without_swap_and_loadavg() -> Self {
        let mut fs = Self::typical_system();
        fs.remove_file("/proc/loadavg");
        fs.add_file(
            "/proc/meminfo",
            "\
MemTotal:        1048576 kB
MemFree:          524288 kB
MemAvailable:     786432 kB
SwapTotal:             0 kB
SwapFree:              0 kB
",
        );
        fs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::traits::FileSystem;
    use std::path::Path;

    #[test]
    fn test_typical_system_has_required_files() {
        let fs = MockFs::typical_system();
        assert!(fs.exists(Path::new("/proc/stat")));
        assert!(fs.exists(Path::new("/proc/meminfo")));
        assert!(fs.exists(Path::new("/proc/loadavg")));
        assert!(fs.exists(Path::new("/proc/1/comm")));
    }

    #[test]
    fn test_without_swap_and_loadavg() {
        let fs = MockFs::without_swap_and_loadavg();
        assert!(!fs.exists(Path::new("/proc/loadavg")));
        let meminfo = fs.read_to_string(Path::new("/proc/meminfo")).unwrap();
        assert!(meminfo.contains("SwapTotal:             0 kB"));
    }
}
