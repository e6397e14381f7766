//! Alert decision and dispatch.
//!
//! Decides whether a run's report warrants a notification, renders the body
//! for the selected channel and hands it to the sink. Sink failures stop
//! here: they are reported as a delivery failure, never propagated.

use colored::*;

use crate::core::monitor::metrics::format_pct;
use crate::core::monitor::report::MonitoringReport;
use crate::error::Result;

/// How the run delivers alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    Console,
    Email,
}

impl DeliveryMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "console" => Some(DeliveryMode::Console),
            "email" => Some(DeliveryMode::Email),
            _ => None,
        }
    }
}

/// Derived purely from the report and the run mode.
#[derive(Debug, Clone)]
pub struct AlertDecision {
    pub should_notify: bool,
    pub subject: String,
    pub body: String,
}

/// Result of one dispatch attempt. There is no retry: each run attempts
/// delivery at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// Nothing to notify, or the channel is administratively disabled.
    Skipped,
    Sent,
    /// The sink failed; the run's log block is already written and unaffected.
    Failed(String),
}

/// A delivery channel for a rendered alert decision.
pub trait AlertSink {
    fn name(&self) -> &'static str;
    fn deliver(&self, decision: &AlertDecision) -> Result<()>;
}

/// Decide whether to notify and render the payload for the channel.
///
/// Console mode always surfaces alerts locally; email mode additionally
/// requires the email channel to be enabled in configuration.
pub fn decide(report: &MonitoringReport, mode: DeliveryMode, email_enabled: bool) -> AlertDecision {
    let channel_active = match mode {
        DeliveryMode::Console => true,
        DeliveryMode::Email => email_enabled,
    };

    let should_notify = !report.alerts.is_empty() && channel_active;

    let subject = format!(
        "[ALERT] {}: {} threshold(s) exceeded at {}",
        report.host.os_name,
        report.alerts.len(),
        report.timestamp.format("%Y-%m-%d %H:%M:%S")
    );

    let body = match mode {
        DeliveryMode::Console => render_plain(report),
        DeliveryMode::Email => render_status(report),
    };

    AlertDecision {
        should_notify,
        subject,
        body,
    }
}

/// Attempt delivery through the sink, containing any failure.
pub fn dispatch(decision: &AlertDecision, sink: &dyn AlertSink) -> DeliveryOutcome {
    if !decision.should_notify {
        return DeliveryOutcome::Skipped;
    }

    match sink.deliver(decision) {
        Ok(()) => DeliveryOutcome::Sent,
        Err(err) => {
            log::warn!("{} sink failed: {}", sink.name(), err);
            DeliveryOutcome::Failed(err.to_string())
        }
    }
}

/// Plain view: one line per alert.
pub fn render_plain(report: &MonitoringReport) -> String {
    report
        .alerts
        .iter()
        .map(|a| format!("- {}", a))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Structured view for richer sinks: a full status report with every metric
/// and every configured service, not just the rows in alert.
pub fn render_status(report: &MonitoringReport) -> String {
    let mut out = String::new();

    out.push_str("== Health Metrics ==\n");
    for verdict in &report.verdicts {
        let marker = if verdict.exceeded { "ALERT" } else { "ok" };
        out.push_str(&format!(
            "{:<8} {:>6}%   limit {:>6}%   {}\n",
            verdict.sample.metric.to_string(),
            format_pct(verdict.sample.value),
            format_pct(verdict.threshold.limit),
            marker
        ));
    }

    out.push_str("\n== Services ==\n");
    if report.services.is_empty() {
        out.push_str("(none configured)\n");
    }
    for service in &report.services {
        out.push_str(&format!("{:<20} {}\n", service.name, service.state));
    }

    out.push_str("\n== Host ==\n");
    out.push_str(&format!("OS: {}\n", report.host.os_name));
    out.push_str(&format!("Hostname: {}\n", report.host.hostname));
    out.push_str(&format!(
        "IP Address: {}\n",
        report.host.ip_address.as_deref().unwrap_or("unavailable")
    ));
    out.push_str(&format!("CPU Cores: {}\n", report.host.cpu_cores));
    out.push_str(&format!("Total RAM: {:.1} GB\n", report.host.total_ram_gb));

    out
}

/// Prints the rendered alert to stdout.
pub struct ConsoleSink;

impl AlertSink for ConsoleSink {
    fn name(&self) -> &'static str {
        "console"
    }

    fn deliver(&self, decision: &AlertDecision) -> Result<()> {
        println!();
        println!("{}", decision.subject.red().bold());
        println!("{}", decision.body);
        Ok(())
    }
}
