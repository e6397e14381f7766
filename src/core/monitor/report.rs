//! Report assembly: one immutable value per run.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::core::config::Thresholds;

use super::metrics::{evaluate, format_pct, Metric, MetricSample, MetricVerdict};
use super::sampler::HostInfo;
use super::services::ServiceStatus;

/// The aggregate of one run. Assembled once, then only read: the same value
/// feeds the run log, the console rendering and the alert router.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringReport {
    pub timestamp: DateTime<Local>,
    /// Always in fixed order: CPU, Memory, Disk.
    pub verdicts: Vec<MetricVerdict>,
    /// In configuration order, one entry per configured service.
    pub services: Vec<ServiceStatus>,
    pub host: HostInfo,
    /// One human-readable line per exceeded verdict, same order as verdicts.
    pub alerts: Vec<String>,
}

impl MonitoringReport {
    /// Evaluate every sample against its threshold and aggregate the results.
    ///
    /// Purely descriptive: whether anything gets notified is decided later by
    /// the alert router. Samples are evaluated in the fixed metric order
    /// regardless of their order in `samples`.
    pub fn assemble(
        samples: Vec<MetricSample>,
        thresholds: &Thresholds,
        services: Vec<ServiceStatus>,
        host: HostInfo,
        timestamp: DateTime<Local>,
    ) -> Self {
        let mut verdicts = Vec::with_capacity(Metric::ALL.len());
        for metric in Metric::ALL {
            if let Some(sample) = samples.iter().find(|s| s.metric == metric) {
                verdicts.push(evaluate(sample.clone(), thresholds.threshold(metric)));
            }
        }

        let alerts = verdicts
            .iter()
            .filter(|v| v.exceeded)
            .map(|v| {
                format!(
                    "High {} usage: {}%",
                    v.sample.metric,
                    format_pct(v.sample.value)
                )
            })
            .collect();

        Self {
            timestamp,
            verdicts,
            services,
            host,
            alerts,
        }
    }
}
