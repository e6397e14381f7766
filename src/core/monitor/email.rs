//! SMTP delivery of alert decisions.

use std::time::Duration;

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::core::config::EmailConfig;
use crate::error::{MonitorError, Result};

use super::alert::{AlertDecision, AlertSink};

/// Sends the alert as a plain-text email through a configured SMTP relay.
///
/// The session timeout is bounded by `timeout_secs` so an unreachable relay
/// cannot block the run indefinitely.
pub struct EmailSink {
    config: EmailConfig,
}

impl EmailSink {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    fn mailbox(address: &str, role: &str) -> Result<Mailbox> {
        address.parse().map_err(|e| {
            MonitorError::delivery(format!("invalid {} address '{}': {}", role, address, e))
        })
    }
}

impl AlertSink for EmailSink {
    fn name(&self) -> &'static str {
        "email"
    }

    fn deliver(&self, decision: &AlertDecision) -> Result<()> {
        let message = Message::builder()
            .from(Self::mailbox(&self.config.sender, "sender")?)
            .to(Self::mailbox(&self.config.receiver, "receiver")?)
            .subject(decision.subject.clone())
            .body(decision.body.clone())
            .map_err(|e| MonitorError::delivery(format!("failed to build message: {}", e)))?;

        let mailer = SmtpTransport::relay(&self.config.smtp_host)
            .map_err(|e| {
                MonitorError::delivery(format!(
                    "invalid SMTP relay {}: {}",
                    self.config.smtp_host, e
                ))
            })?
            .port(self.config.smtp_port)
            .credentials(Credentials::new(
                self.config.username.clone(),
                self.config.password.clone(),
            ))
            .timeout(Some(Duration::from_secs(self.config.timeout_secs)))
            .build();

        mailer
            .send(&message)
            .map_err(|e| MonitorError::delivery(format!("SMTP send failed: {}", e)))?;

        Ok(())
    }
}
