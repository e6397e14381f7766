//! The monitoring pipeline: sample, evaluate, assemble, log, alert.

pub mod alert;
pub mod email;
pub mod logger;
pub mod metrics;
pub mod report;
pub mod sampler;
pub mod services;

pub use alert::{AlertDecision, AlertSink, DeliveryMode, DeliveryOutcome};
pub use metrics::{Metric, MetricSample, MetricVerdict, Threshold};
pub use report::MonitoringReport;
pub use sampler::{HostInfo, MetricSampler, SysinfoSampler};
pub use services::{ServiceProbe, ServiceState, ServiceStatus};
