//! Platform-specific pieces: service probes and host facts.
//!
//! The probe for the running platform is selected here, at composition time,
//! so the core resolver never branches on an OS string.

use std::net::UdpSocket;

use crate::core::monitor::services::{ServiceProbe, ServiceState};
use crate::error::Result;

/// The service probe for the running platform.
pub fn service_probe() -> Box<dyn ServiceProbe> {
    #[cfg(target_os = "linux")]
    {
        Box::new(SystemctlProbe)
    }
    #[cfg(windows)]
    {
        Box::new(ScQueryProbe)
    }
    #[cfg(not(any(target_os = "linux", windows)))]
    {
        Box::new(UnsupportedProbe)
    }
}

/// Human-readable OS name for reports and alert subjects.
pub fn os_name() -> String {
    sysinfo::System::name().unwrap_or_else(|| std::env::consts::OS.to_string())
}

/// Best-effort primary IP address. Routing a UDP socket at a public address
/// picks the outbound interface without sending any packet.
pub fn local_ip() -> Option<String> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect("8.8.8.8:80").ok()?;
    socket.local_addr().ok().map(|addr| addr.ip().to_string())
}

/// Queries systemd via `systemctl is-active`.
#[cfg(target_os = "linux")]
pub struct SystemctlProbe;

#[cfg(target_os = "linux")]
impl ServiceProbe for SystemctlProbe {
    fn probe(&self, name: &str) -> Result<ServiceState> {
        let output = std::process::Command::new("systemctl")
            .args(["is-active", name])
            .output()?;

        Ok(state_from_systemctl(&String::from_utf8_lossy(
            &output.stdout,
        )))
    }
}

/// Queries the Windows service manager via `sc query`.
#[cfg(windows)]
pub struct ScQueryProbe;

#[cfg(windows)]
impl ServiceProbe for ScQueryProbe {
    fn probe(&self, name: &str) -> Result<ServiceState> {
        let output = std::process::Command::new("sc").args(["query", name]).output()?;

        if !output.status.success() {
            // sc exits non-zero (1060) for an unknown service name.
            return Ok(ServiceState::NotFound);
        }

        Ok(state_from_sc_query(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Reports every service as unsupported on platforms without a live service
/// manager query, rather than guessing running/stopped.
#[cfg(not(any(target_os = "linux", windows)))]
pub struct UnsupportedProbe;

#[cfg(not(any(target_os = "linux", windows)))]
impl ServiceProbe for UnsupportedProbe {
    fn probe(&self, _name: &str) -> Result<ServiceState> {
        Ok(ServiceState::Unsupported)
    }
}

#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn state_from_systemctl(stdout: &str) -> ServiceState {
    match stdout.trim() {
        "active" | "activating" | "reloading" => ServiceState::Running,
        "inactive" | "deactivating" | "failed" => ServiceState::Stopped,
        _ => ServiceState::NotFound,
    }
}

#[cfg_attr(not(windows), allow(dead_code))]
fn state_from_sc_query(stdout: &str) -> ServiceState {
    if stdout.contains("RUNNING") {
        ServiceState::Running
    } else if stdout.contains("STOPPED") || stdout.contains("PAUSED") {
        ServiceState::Stopped
    } else {
        ServiceState::NotFound
    }
}
