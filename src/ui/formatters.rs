//! Console rendering of a run's report.

use std::path::Path;

use colored::*;

use crate::core::monitor::alert::DeliveryOutcome;
use crate::core::monitor::metrics::format_pct;
use crate::core::monitor::report::MonitoringReport;
use crate::core::monitor::services::ServiceState;

pub fn print_report(report: &MonitoringReport) {
    println!("\n{}", "SYSTEM MONITOR".bold().bright_cyan());
    println!("{}", "=".repeat(60));
    println!(
        "  {} {}",
        "Run:".white(),
        report
            .timestamp
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .cyan()
    );

    print_section_header("Health Metrics");
    for verdict in &report.verdicts {
        let marker = if verdict.exceeded {
            "[ALERT]".red().bold()
        } else {
            "[OK]".green()
        };
        println!(
            "  {} {} Usage: {}% (limit {}%)",
            marker,
            verdict.sample.metric,
            format_pct(verdict.sample.value).yellow().bold(),
            format_pct(verdict.threshold.limit)
        );
    }

    if !report.services.is_empty() {
        print_section_header("Services");
        for service in &report.services {
            let state = match service.state {
                ServiceState::Running => service.state.to_string().green(),
                ServiceState::Stopped => service.state.to_string().red(),
                ServiceState::NotFound => service.state.to_string().yellow(),
                ServiceState::Unsupported => service.state.to_string().dimmed(),
            };
            println!("  {} - {}", service.name.cyan(), state);
        }
    }

    print_section_header("Host");
    println!("  OS: {}", report.host.os_name);
    println!("  Hostname: {}", report.host.hostname);
    println!(
        "  IP Address: {}",
        report.host.ip_address.as_deref().unwrap_or("unavailable")
    );
    println!("  CPU Cores: {}", report.host.cpu_cores);
    println!("  Total RAM: {:.1} GB", report.host.total_ram_gb);
    println!();
}

/// The one-line outcome every run prints, alert or not.
pub fn print_run_summary(report: &MonitoringReport, outcome: &DeliveryOutcome, log_path: &Path) {
    if report.alerts.is_empty() {
        println!(
            "{} All metrics within thresholds",
            "[INFO]".green().bold()
        );
    } else {
        println!(
            "{} {} risk item(s) found",
            "[ALERT]".red().bold(),
            report.alerts.len()
        );
    }

    match outcome {
        DeliveryOutcome::Sent => {
            println!("{} Alert dispatched", "[INFO]".green().bold());
        }
        DeliveryOutcome::Failed(reason) => {
            println!(
                "{} Alert delivery failed: {}",
                "[INFO]".yellow().bold(),
                reason
            );
        }
        DeliveryOutcome::Skipped => {}
    }

    println!(
        "{} Report logged to {}",
        "[INFO]".green().bold(),
        log_path.display().to_string().dimmed()
    );
}

fn print_section_header(title: &str) {
    println!("\n{}", title.bold().green());
    println!("{}", "-".repeat(title.len()));
}
