use std::fs;

use hostmon::core::config::MonitorConfig;
use hostmon::error::MonitorError;
use tempfile::TempDir;

#[test]
fn test_load_explicit_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
            log_dir = "monitor-logs"

            [thresholds]
            cpu = 60.0
            memory = 70.0
            disk = 80.0

            [email]
            enabled = true
            sender = "monitor@example.com"
            receiver = "ops@example.com"
            smtp_host = "smtp.example.com"
            smtp_port = 2525
            username = "monitor"
            password = "secret"
            timeout_secs = 3
        "#,
    )
    .unwrap();

    let config = MonitorConfig::load(Some(&path)).unwrap();
    assert_eq!(config.log_dir, "monitor-logs");
    assert_eq!(config.thresholds.cpu, 60.0);
    assert!(config.email.enabled);
    assert_eq!(config.email.smtp_port, 2525);
    // Unspecified sections keep their defaults.
    assert!(!config.services.linux.is_empty());
}

#[test]
fn test_missing_explicit_config_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.toml");

    match MonitorConfig::load(Some(&path)) {
        Err(MonitorError::Config(msg)) => assert!(msg.contains("nope.toml")),
        other => panic!("expected config error, got {:?}", other),
    }
}

#[test]
fn test_malformed_config_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "thresholds = \"not a table\"").unwrap();

    match MonitorConfig::load(Some(&path)) {
        Err(MonitorError::Config(_)) => {}
        other => panic!("expected config error, got {:?}", other),
    }
}
