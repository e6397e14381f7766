use clap::{Arg, Command};
use colored::*;

use hostmon::MonitorError;

fn main() {
    hostmon::init_logging();

    let matches = Command::new("hostmon")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Samples host CPU, memory and disk usage, checks thresholds and dispatches alerts")
        .arg(
            Arg::new("mode")
                .short('m')
                .long("mode")
                .value_name("MODE")
                .help("Alert delivery mode")
                .value_parser(["console", "email"])
                .default_value("console"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("Path to the configuration file")
                .global(true),
        )
        .subcommand(Command::new("config").about("Print the resolved configuration"))
        .get_matches();

    let result = match matches.subcommand() {
        Some(("config", sub_matches)) => hostmon::commands::config::execute(sub_matches),
        _ => hostmon::commands::run::execute(&matches),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "[ERROR]".red().bold(), err);

        // Configuration failures get a distinct exit code so schedulers can
        // tell them apart from run failures.
        let code = match err.downcast_ref::<MonitorError>() {
            Some(MonitorError::Config(_)) => 2,
            _ => 1,
        };
        std::process::exit(code);
    }
}
