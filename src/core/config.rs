use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::monitor::metrics::{Metric, Threshold};
use crate::error::{MonitorError, Result};

/// Immutable per-run configuration, loaded once at startup and passed
/// explicitly into every component that needs it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default)]
    pub thresholds: Thresholds,
    #[serde(default)]
    pub services: ServiceLists,
    #[serde(default)]
    pub email: EmailConfig,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Thresholds {
    pub cpu: f32,
    pub memory: f32,
    pub disk: f32,
}

/// Service names to watch, per platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceLists {
    pub windows: Vec<String>,
    pub linux: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    pub enabled: bool,
    pub sender: String,
    pub receiver: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub username: String,
    pub password: String,
    /// Upper bound on how long a failed SMTP session may block the run.
    pub timeout_secs: u64,
}

fn default_log_dir() -> String {
    "logs".to_string()
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            thresholds: Thresholds::default(),
            services: ServiceLists::default(),
            email: EmailConfig::default(),
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            cpu: 90.0,
            memory: 80.0,
            disk: 85.0,
        }
    }
}

impl Default for ServiceLists {
    fn default() -> Self {
        Self {
            windows: vec!["Spooler".to_string(), "W32Time".to_string()],
            linux: vec![
                "ssh".to_string(),
                "cron".to_string(),
                "mysql".to_string(),
            ],
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            sender: String::new(),
            receiver: String::new(),
            smtp_host: String::new(),
            smtp_port: 587,
            username: String::new(),
            password: String::new(),
            timeout_secs: 10,
        }
    }
}

impl MonitorConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist and parse; anything else is a fatal
    /// configuration error. Without an explicit path the default location is
    /// used when present, otherwise built-in defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Self::default_path()?;
                if default.exists() {
                    Self::from_file(&default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|e| {
            MonitorError::config(format!("failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&data).map_err(|e| {
            MonitorError::config(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| MonitorError::config("could not determine config directory"))?;

        Ok(config_dir.join("hostmon").join("config.toml"))
    }
}

impl Thresholds {
    pub fn threshold(&self, metric: Metric) -> Threshold {
        let limit = match metric {
            Metric::Cpu => self.cpu,
            Metric::Memory => self.memory,
            Metric::Disk => self.disk,
        };
        Threshold { metric, limit }
    }
}

impl ServiceLists {
    /// The list that applies to the running platform. Non-Windows platforms
    /// share the `linux` list; where no live query exists the probe reports
    /// every entry as unsupported.
    pub fn for_current_platform(&self) -> &[String] {
        if cfg!(windows) {
            &self.windows
        } else {
            &self.linux
        }
    }
}
