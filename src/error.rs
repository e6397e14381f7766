use std::io;
use thiserror::Error;

/// Custom error type for the hostmon application
#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Sampling failed: {0}")]
    Sampling(String),

    #[error("Alert delivery failed: {0}")]
    Delivery(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for the hostmon application
pub type Result<T> = std::result::Result<T, MonitorError>;

impl MonitorError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        MonitorError::Config(msg.into())
    }

    /// Create a sampling error
    pub fn sampling<S: Into<String>>(msg: S) -> Self {
        MonitorError::Sampling(msg.into())
    }

    /// Create a delivery error
    pub fn delivery<S: Into<String>>(msg: S) -> Self {
        MonitorError::Delivery(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        MonitorError::Other(msg.into())
    }
}
