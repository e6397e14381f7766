//! Metric sampling from the host system.

use std::thread;

use serde::{Deserialize, Serialize};
use sysinfo::{CpuRefreshKind, Disks, MemoryRefreshKind, RefreshKind, System};

use crate::error::{MonitorError, Result};
use crate::platform;

use super::metrics::{Metric, MetricSample};

const MB: u64 = 1024 * 1024;
const GB: u64 = 1024 * 1024 * 1024;

/// Static facts about the host, computed once per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostInfo {
    pub os_name: String,
    pub hostname: String,
    /// `None` renders as "unavailable"; a host without a routable address is
    /// not an error.
    pub ip_address: Option<String>,
    pub cpu_cores: usize,
    pub total_ram_gb: f64,
}

/// Contract the platform sampling layer must satisfy.
///
/// Returns the three metric samples in fixed order (CPU, Memory, Disk).
/// A metric that cannot be read is fatal for the run.
pub trait MetricSampler {
    fn sample(&mut self) -> Result<Vec<MetricSample>>;
    fn host_info(&mut self) -> HostInfo;
}

/// Sampler backed by sysinfo.
pub struct SysinfoSampler {
    system: System,
    disks: Disks,
}

impl SysinfoSampler {
    pub fn new() -> Self {
        let refresh_kind = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::everything())
            .with_memory(MemoryRefreshKind::everything());

        Self {
            system: System::new_with_specifics(refresh_kind),
            disks: Disks::new_with_refreshed_list(),
        }
    }

    fn sample_cpu(&mut self) -> MetricSample {
        // sysinfo needs two refreshes separated by its minimum interval to
        // compute a usage percentage. This sleep is the run's only suspension
        // point; the whole run blocks on it.
        self.system.refresh_cpu_usage();
        thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
        self.system.refresh_cpu_usage();

        MetricSample::new(Metric::Cpu, self.system.global_cpu_usage())
    }

    fn sample_memory(&mut self) -> Result<MetricSample> {
        self.system.refresh_memory();

        let total = self.system.total_memory();
        let used = self.system.used_memory();
        if total == 0 {
            return Err(MonitorError::sampling("total memory reported as zero"));
        }

        let percent = (used as f32 / total as f32) * 100.0;
        let detail = format!("used ({} MB of {} MB)", used / MB, total / MB);
        Ok(MetricSample::with_detail(Metric::Memory, percent, detail))
    }

    fn sample_disk(&mut self) -> Result<MetricSample> {
        self.disks.refresh(true);

        // Prefer the root filesystem; fall back to the largest disk when no
        // mount matches (e.g. Windows).
        let root = std::path::Path::new(if cfg!(windows) { "C:\\" } else { "/" });
        let disk = self
            .disks
            .iter()
            .find(|d| d.mount_point() == root)
            .or_else(|| self.disks.iter().max_by_key(|d| d.total_space()))
            .ok_or_else(|| MonitorError::sampling("no disks reported by the system"))?;

        let total = disk.total_space();
        let available = disk.available_space();
        let used = total.saturating_sub(available);
        if total == 0 {
            return Err(MonitorError::sampling("disk total space reported as zero"));
        }

        let percent = (used as f32 / total as f32) * 100.0;
        let detail = format!("used ({} GB of {} GB)", used / GB, total / GB);
        Ok(MetricSample::with_detail(Metric::Disk, percent, detail))
    }
}

impl MetricSampler for SysinfoSampler {
    fn sample(&mut self) -> Result<Vec<MetricSample>> {
        let cpu = self.sample_cpu();
        let memory = self.sample_memory()?;
        let disk = self.sample_disk()?;
        Ok(vec![cpu, memory, disk])
    }

    fn host_info(&mut self) -> HostInfo {
        HostInfo {
            os_name: platform::os_name(),
            hostname: System::host_name().unwrap_or_else(|| "unknown".to_string()),
            ip_address: platform::local_ip(),
            cpu_cores: self.system.cpus().len(),
            total_ram_gb: self.system.total_memory() as f64 / GB as f64,
        }
    }
}

impl Default for SysinfoSampler {
    fn default() -> Self {
        Self::new()
    }
}
