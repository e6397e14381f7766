//! Print the resolved configuration.

use std::path::PathBuf;

use anyhow::Result;
use clap::ArgMatches;
use colored::*;

use crate::core::config::MonitorConfig;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config_path = matches.get_one::<String>("config").map(PathBuf::from);

    let source = match &config_path {
        Some(path) => path.clone(),
        None => MonitorConfig::default_path()?,
    };
    let mut config = MonitorConfig::load(config_path.as_deref())?;

    // Never echo credentials back to the terminal.
    if !config.email.password.is_empty() {
        config.email.password = "********".to_string();
    }

    println!("{} {}", "Configuration:".white().bold(), {
        if source.exists() {
            source.display().to_string().cyan()
        } else {
            format!("{} (not present, using defaults)", source.display()).dimmed()
        }
    });
    println!();

    let rendered =
        toml::to_string_pretty(&config).map_err(|e| anyhow::anyhow!("render failed: {}", e))?;
    println!("{}", rendered);

    Ok(())
}
