use chrono::Local;
use hostmon::core::config::Thresholds;
use hostmon::core::monitor::logger::RunLogger;
use hostmon::core::monitor::metrics::{Metric, MetricSample};
use hostmon::core::monitor::report::MonitoringReport;
use hostmon::core::monitor::sampler::HostInfo;
use hostmon::core::monitor::services::{ServiceState, ServiceStatus};

fn host() -> HostInfo {
    HostInfo {
        os_name: "Linux".to_string(),
        hostname: "inttest".to_string(),
        ip_address: Some("192.168.1.10".to_string()),
        cpu_cores: 8,
        total_ram_gb: 32.0,
    }
}

#[test]
fn test_scenario_a_high_cpu_produces_single_alert() {
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

    let report =
        MonitoringReport::assemble(samples, &thresholds, Vec::new(), host(), Local::now());

    assert_eq!(report.alerts, vec!["High CPU usage: 95%".to_string()]);
}

#[test]
fn test_scenario_b_quiet_run_logs_without_alerts_section() {
    let thresholds = Thresholds::default();
    let samples = vec![
        MetricSample::new(Metric::Cpu, 12.0),
        MetricSample::new(Metric::Memory, 35.0),
        MetricSample::new(Metric::Disk, 48.0),
    ];
    let services = vec![
        ServiceStatus {
            name: "ssh".to_string(),
            state: ServiceState::Running,
        },
        ServiceStatus {
            name: "cron".to_string(),
            state: ServiceState::Running,
        },
    ];

    let report = MonitoringReport::assemble(samples, &thresholds, services, host(), Local::now());

    assert!(report.alerts.is_empty());

    let block = RunLogger::render_block(&report);
    assert!(block.contains("---- SYSTEM MONITOR START ----"));
    assert!(block.contains("Service: ssh - Status: running"));
    assert!(block.contains("Service: cron - Status: running"));
    assert!(!block.contains("ALERTS:"));
}

#[test]
fn test_multiple_exceeded_metrics_keep_fixed_order() {
    let thresholds = Thresholds {
        cpu: 50.0,
        memory: 50.0,
        disk: 50.0,
    };
    let samples = vec![
        MetricSample::new(Metric::Disk, 90.0),
        MetricSample::new(Metric::Memory, 85.0),
        MetricSample::new(Metric::Cpu, 80.0),
    ];

    let report =
        MonitoringReport::assemble(samples, &thresholds, Vec::new(), host(), Local::now());

    assert_eq!(
        report.alerts,
        vec![
            "High CPU usage: 80%".to_string(),
            "High Memory usage: 85%".to_string(),
            "High Disk usage: 90%".to_string(),
        ]
    );
}
