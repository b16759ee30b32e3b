mod config;
mod dns;
mod io;

use anyhow::Result;

use config::error::ConfigError;
use config::{ScanConfig, ScanMode};
use dns::emitter::ReportEmitter;
use dns::enumeration::enumerate_records;
use dns::resolver::SystemResolver;
use io::cli::{self, Cli};
use io::report::FileReportWriter;

fn main() -> Result<()> {
    let args = cli::get_parsed_args();
    let scan_config = validate_or_exit(&args);

    if !scan_config.plain {
        cli::print_ascii_art();
        cli::print_options(&scan_config);
    }

    match scan_config.mode {
        ScanMode::Dns => run_dns_enumeration(&scan_config),
        ScanMode::Report => {
            run_dns_enumeration(&scan_config)?;
            log_warn!("Subdomain, directory and port stages are not available in this build");
            Ok(())
        }
        mode => {
            log_warn!(format!("The {mode} scan is not available in this build"));
            Ok(())
        }
    }
}

fn validate_or_exit(args: &Cli) -> ScanConfig {
    match config::validate(&args.command) {
        Ok(scan_config) => scan_config,
        Err(ConfigError::MissingTarget) => {
            cli::print_usage(args.command.name());
            std::process::exit(1);
        }
        Err(err) => {
            println!("{err}");
            std::process::exit(1);
        }
    }
}

fn run_dns_enumeration(scan_config: &ScanConfig) -> Result<()> {
    let resolver = SystemResolver::new()?;
    let writer = FileReportWriter;
    let mut emitter = ReportEmitter::new(scan_config, &writer, std::io::stdout().lock());

    enumerate_records(&resolver, &mut emitter, &mut std::io::stderr().lock())?;

    if !scan_config.plain {
        for (format, path) in scan_config.outputs.enabled() {
            log_info!(format!(
                "{} output written to: {}",
                format.to_string().to_uppercase(),
                path
            ));
        }
    }

    Ok(())
}
