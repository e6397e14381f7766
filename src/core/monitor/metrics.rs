//! Metric samples, thresholds and the threshold evaluator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The three resource metrics checked on every run, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    Cpu,
    Memory,
    Disk,
}

impl Metric {
    /// Fixed evaluation order: CPU, Memory, Disk.
    pub const ALL: [Metric; 3] = [Metric::Cpu, Metric::Memory, Metric::Disk];
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Cpu => write!(f, "CPU"),
            Metric::Memory => write!(f, "Memory"),
            Metric::Disk => write!(f, "Disk"),
        }
    }
}

/// One sampled metric value, a percentage in [0, 100].
///
/// `detail` carries the supporting absolute figures for the log line,
/// e.g. `used (230 GB of 476 GB)` for the disk metric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricSample {
    pub metric: Metric,
    pub value: f32,
    pub detail: Option<String>,
}

impl MetricSample {
    pub fn new(metric: Metric, value: f32) -> Self {
        Self {
            metric,
            value,
            detail: None,
        }
    }

    pub fn with_detail(metric: Metric, value: f32, detail: String) -> Self {
        Self {
            metric,
            value,
            detail: Some(detail),
        }
    }
}

/// Configured limit for one metric, a percentage in [0, 100].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Threshold {
    pub metric: Metric,
    pub limit: f32,
}

/// The classification of one sample against its threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricVerdict {
    pub sample: MetricSample,
    pub threshold: Threshold,
    pub exceeded: bool,
}

/// Classify a sample against its configured threshold.
///
/// Strictly greater-than: a value equal to the limit is not flagged.
/// A sample/threshold metric mismatch is a programming error.
pub fn evaluate(sample: MetricSample, threshold: Threshold) -> MetricVerdict {
    assert_eq!(
        sample.metric, threshold.metric,
        "threshold metric does not match sample metric"
    );

    let exceeded = sample.value > threshold.limit;
    MetricVerdict {
        sample,
        threshold,
        exceeded,
    }
}

/// Format a percentage the way the log and alert lines expect:
/// whole numbers without a decimal part, fractional values with one.
pub fn format_pct(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}
