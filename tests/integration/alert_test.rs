use chrono::Local;
use hostmon::core::config::Thresholds;
use hostmon::core::monitor::alert::{
    decide, dispatch, AlertDecision, AlertSink, DeliveryMode, DeliveryOutcome,
};
use hostmon::core::monitor::logger::RunLogger;
use hostmon::core::monitor::metrics::{Metric, MetricSample};
use hostmon::core::monitor::report::MonitoringReport;
use hostmon::core::monitor::sampler::HostInfo;
use hostmon::error::MonitorError;
use hostmon::Result;
use tempfile::TempDir;

fn alerting_report() -> MonitoringReport {
    let thresholds = Thresholds {
        cpu: 90.0,
        memory: 80.0,
        disk: 85.0,
    };
    let samples = vec![
        MetricSample::new(Metric::Cpu, 95.0),
        MetricSample::new(Metric::Memory, 40.0),
        MetricSample::new(Metric::Disk, 50.0),
    ];
    let host = HostInfo {
        os_name: "Linux".to_string(),
        hostname: "inttest".to_string(),
        ip_address: None,
        cpu_cores: 4,
        total_ram_gb: 8.0,
    };

    MonitoringReport::assemble(samples, &thresholds, Vec::new(), host, Local::now())
}

struct UnreachableSmtp;

impl AlertSink for UnreachableSmtp {
    fn name(&self) -> &'static str {
        "email"
    }

    fn deliver(&self, _decision: &AlertDecision) -> Result<()> {
        Err(MonitorError::delivery("connection timed out"))
    }
}

#[test]
fn test_scenario_c_disabled_email_channel_skips_dispatch() {
    let report = alerting_report();

    // The alert is still computed and the log block still carries it.
    assert_eq!(report.alerts.len(), 1);
    let block = RunLogger::render_block(&report);
    assert!(block.contains("High CPU usage: 95%"));

    let decision = decide(&report, DeliveryMode::Email, false);
    assert!(!decision.should_notify);
    assert_eq!(
        dispatch(&decision, &UnreachableSmtp),
        DeliveryOutcome::Skipped
    );
}

#[test]
fn test_scenario_d_failed_dispatch_leaves_log_intact() {
    let dir = TempDir::new().unwrap();
    let report = alerting_report();

    let logger = RunLogger::new(dir.path());
    let log_path = logger.append(&report).unwrap();
    let before = std::fs::read_to_string(&log_path).unwrap();

    let decision = decide(&report, DeliveryMode::Email, true);
    assert!(decision.should_notify);

    let outcome = dispatch(&decision, &UnreachableSmtp);
    match outcome {
        DeliveryOutcome::Failed(reason) => assert!(reason.contains("timed out")),
        other => panic!("expected Failed, got {:?}", other),
    }

    // Delivery failure is distinct from "no alerts" and never touches the log.
    let after = std::fs::read_to_string(&log_path).unwrap();
    assert_eq!(before, after);
    assert!(after.contains("[!] High CPU usage: 95%"));
}

#[test]
fn test_email_body_is_full_status_report() {
    let report = alerting_report();
    let decision = decide(&report, DeliveryMode::Email, true);

    // All three metrics render, not just the one in alert.
    assert!(decision.body.contains("CPU"));
    assert!(decision.body.contains("Memory"));
    assert!(decision.body.contains("Disk"));
    assert!(decision.body.contains("== Host =="));
}
