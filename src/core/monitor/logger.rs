//! Append-only run log.
//!
//! One textual block per run, written with a single `write_all` on an
//! append-mode handle so concurrent runs never interleave inside a block.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::report::MonitoringReport;

const ALERT_MARKER: &str = "[!]";

pub struct RunLogger {
    log_dir: PathBuf,
}

impl RunLogger {
    pub fn new<P: AsRef<Path>>(log_dir: P) -> Self {
        Self {
            log_dir: log_dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the log file a report lands in: `<YYYY-MM-DD>-monitor.log`.
    pub fn log_path(&self, report: &MonitoringReport) -> PathBuf {
        self.log_dir
            .join(format!("{}-monitor.log", report.timestamp.format("%Y-%m-%d")))
    }

    /// Render the whole block for one run.
    ///
    /// Every line carries the run timestamp. The ALERTS section only appears
    /// when at least one threshold was exceeded. A trailing blank line
    /// separates consecutive blocks.
    pub fn render_block(report: &MonitoringReport) -> String {
        let ts = report.timestamp.format("[%Y-%m-%d %H:%M:%S]");
        let mut lines = Vec::new();

        lines.push(format!("{} ---- SYSTEM MONITOR START ----", ts));

        for verdict in &report.verdicts {
            let detail = verdict
                .sample
                .detail
                .as_deref()
                .map(|d| format!(" {}", d))
                .unwrap_or_default();
            lines.push(format!(
                "{} {} Usage: {}%{}",
                ts,
                verdict.sample.metric,
                super::metrics::format_pct(verdict.sample.value),
                detail
            ));
        }

        for service in &report.services {
            lines.push(format!(
                "{} Service: {} - Status: {}",
                ts, service.name, service.state
            ));
        }

        if !report.alerts.is_empty() {
            lines.push(format!("{} ALERTS:", ts));
            for alert in &report.alerts {
                lines.push(format!("{} {} {}", ts, ALERT_MARKER, alert));
            }
        }

        lines.push(format!("{} ---- SYSTEM MONITOR END ----", ts));
        lines.push(String::new());

        lines.join("\n") + "\n"
    }

    /// Append the report's block to the day's log file.
    ///
    /// Logging happens only after the full report is assembled, so a run that
    /// fails earlier leaves nothing half-written.
    pub fn append(&self, report: &MonitoringReport) -> Result<PathBuf> {
        fs::create_dir_all(&self.log_dir)?;

        let path = self.log_path(report);
        let block = Self::render_block(report);

        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(block.as_bytes())?;

        Ok(path)
    }
}
