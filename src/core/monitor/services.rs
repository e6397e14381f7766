//! Service status resolution.
//!
//! Maps each configured service name to a defined status. Lookup failures are
//! contained per service: one bad name never aborts resolution of the rest.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Status of one watched service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceState {
    Running,
    Stopped,
    NotFound,
    /// The platform has no live service manager query; the service is still
    /// reported, with this explicit state, rather than a guessed boolean.
    Unsupported,
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceState::Running => write!(f, "running"),
            ServiceState::Stopped => write!(f, "stopped"),
            ServiceState::NotFound => write!(f, "not found"),
            ServiceState::Unsupported => write!(f, "unsupported"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub name: String,
    pub state: ServiceState,
}

/// Platform query for a single service. Implementations are selected at
/// composition time in `platform::service_probe()`.
pub trait ServiceProbe {
    fn probe(&self, name: &str) -> Result<ServiceState>;
}

/// Resolve every configured service name to a status.
///
/// Output preserves input order and always has one entry per requested name.
/// A probe error for one name becomes `NotFound` for that name only.
pub fn resolve_services(probe: &dyn ServiceProbe, names: &[String]) -> Vec<ServiceStatus> {
    names
        .iter()
        .map(|name| {
            let state = probe.probe(name).unwrap_or_else(|err| {
                log::debug!("service lookup failed for '{}': {}", name, err);
                ServiceState::NotFound
            });
            ServiceStatus {
                name: name.clone(),
                state,
            }
        })
        .collect()
}
