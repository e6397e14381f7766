//! The monitor run: one sample-evaluate-report-notify pass.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::ArgMatches;

use crate::core::config::MonitorConfig;
use crate::core::monitor::alert::{self, AlertSink, ConsoleSink, DeliveryMode};
use crate::core::monitor::email::EmailSink;
use crate::core::monitor::logger::RunLogger;
use crate::core::monitor::report::MonitoringReport;
use crate::core::monitor::sampler::{MetricSampler, SysinfoSampler};
use crate::core::monitor::services::resolve_services;
use crate::platform;
use crate::ui::formatters;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let mode = matches
        .get_one::<String>("mode")
        .and_then(|m| DeliveryMode::parse(m))
        .unwrap_or(DeliveryMode::Console);
    let config_path = matches.get_one::<String>("config").map(PathBuf::from);

    // Configuration failures abort before any sampling; nothing is logged.
    let config = MonitorConfig::load(config_path.as_deref())?;

    let mut sampler = SysinfoSampler::new();
    let samples = sampler.sample()?;
    let host = sampler.host_info();

    let probe = platform::service_probe();
    let services = resolve_services(probe.as_ref(), config.services.for_current_platform());

    let report = MonitoringReport::assemble(
        samples,
        &config.thresholds,
        services,
        host,
        Local::now(),
    );

    // Log before alerting: a failed sink must not take the log block with it.
    let logger = RunLogger::new(&config.log_dir);
    let log_path = logger.append(&report)?;

    formatters::print_report(&report);

    let decision = alert::decide(&report, mode, config.email.enabled);
    let sink: Box<dyn AlertSink> = match mode {
        DeliveryMode::Console => Box::new(ConsoleSink),
        DeliveryMode::Email => Box::new(EmailSink::new(config.email.clone())),
    };
    let outcome = alert::dispatch(&decision, sink.as_ref());

    formatters::print_run_summary(&report, &outcome, &log_path);

    Ok(())
}
