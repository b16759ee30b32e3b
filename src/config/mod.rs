pub mod error;
pub mod ignore;
pub mod ports;

use strum::IntoEnumIterator;
use strum_macros::Display;

use crate::io::cli::{Command, DirArgs, DnsArgs, OutputArgs, PortArgs, ReportArgs, SubdomainArgs};
use crate::io::report::OutputFormat;
use crate::io::validation::{self, Target};
use error::ConfigError;
use ignore::parse_ignore_list;
use ports::{COMMON_PORTS, DEFAULT_END_PORT, DEFAULT_START_PORT, PortSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ScanMode {
    Report,
    Dns,
    Subdomain,
    Port,
    Dir,
}

/// Report file destinations. Blank paths are unset, the rest are pairwise distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct OutputPaths {
    pub json: Option<String>,
    pub html: Option<String>,
    pub txt: Option<String>,
}

impl OutputPaths {
    pub fn new(json: Option<&str>, html: Option<&str>, txt: Option<&str>) -> Result<Self, ConfigError> {
        let (json, html, txt) = (non_empty(json), non_empty(html), non_empty(txt));
        validation::check_distinct_outputs(
            [&json, &html, &txt].into_iter().flatten().map(String::as_str),
        )?;

        Ok(Self { json, html, txt })
    }

    pub fn get(&self, format: OutputFormat) -> Option<&str> {
        match format {
            OutputFormat::Json => self.json.as_deref(),
            OutputFormat::Html => self.html.as_deref(),
            OutputFormat::Txt => self.txt.as_deref(),
        }
    }

    /// Configured sinks, always in json, html, txt order
    pub fn enabled(&self) -> impl Iterator<Item = (OutputFormat, &str)> {
        OutputFormat::iter().filter_map(|format| self.get(format).map(|path| (format, path)))
    }
}

/// Canonical scan configuration, produced once per invocation by one of the validators
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct ScanConfig {
    pub mode: ScanMode,
    pub target: String,
    pub host: String,
    pub outputs: OutputPaths,
    pub plain: bool,
    pub timeout: Option<u8>,
    pub ports: Option<PortSpec>,
    pub use_common_ports: bool,
    pub ignore_directories: Vec<String>,
    pub ignore_subdomains: Vec<String>,
    pub use_virus_total: bool,
    pub use_subdomain_db: bool,
    pub no_check: bool,
    pub wordlist: Option<String>,
    pub use_crawler: bool,
}

impl ScanConfig {
    /// Ports the port scanner should probe for this configuration
    pub fn effective_ports(&self) -> PortSpec {
        if self.use_common_ports {
            PortSpec::Set(COMMON_PORTS.to_vec())
        } else {
            self.ports.clone().unwrap_or_default()
        }
    }
}

pub struct ScanConfigBuilder {
    config: ScanConfig,
}

impl ScanConfigBuilder {
    pub fn new(mode: ScanMode, target: Option<&str>) -> Result<Self, ConfigError> {
        let Target { url, host } = validation::validate_target(target.unwrap_or_default())?;

        Ok(Self {
            config: ScanConfig {
                mode,
                target: url,
                host,
                outputs: OutputPaths::default(),
                plain: false,
                timeout: None,
                ports: None,
                use_common_ports: false,
                ignore_directories: Vec::new(),
                ignore_subdomains: Vec::new(),
                use_virus_total: false,
                use_subdomain_db: false,
                no_check: false,
                wordlist: None,
                use_crawler: false,
            },
        })
    }

    pub fn outputs(mut self, output: &OutputArgs) -> Result<Self, ConfigError> {
        self.config.outputs = OutputPaths::new(
            output.json.as_deref(),
            output.html.as_deref(),
            output.txt.as_deref(),
        )?;
        self.config.plain = output.plain;
        Ok(self)
    }

    pub fn ports(mut self, ports: Option<&str>, use_common_ports: bool) -> Result<Self, ConfigError> {
        let ports = non_empty(ports);
        if ports.is_some() && use_common_ports {
            return Err(ConfigError::PortsWithCommon);
        }

        self.config.ports = ports
            .map(|raw| PortSpec::parse(&raw, DEFAULT_START_PORT, DEFAULT_END_PORT))
            .transpose()?;
        self.config.use_common_ports = use_common_ports;
        Ok(self)
    }

    pub fn timeout(mut self, timeout: i64) -> Result<Self, ConfigError> {
        self.config.timeout = Some(validation::validate_timeout(timeout)?);
        Ok(self)
    }

    pub fn database(mut self, use_subdomain_db: bool, use_virus_total: bool) -> Result<Self, ConfigError> {
        if use_virus_total && !use_subdomain_db {
            return Err(ConfigError::VirusTotalWithoutDatabase);
        }

        self.config.use_subdomain_db = use_subdomain_db;
        self.config.use_virus_total = use_virus_total;
        Ok(self)
    }

    pub fn ignore_directories(mut self, ignore: Option<&str>) -> Self {
        self.config.ignore_directories = ignore.map(parse_ignore_list).unwrap_or_default();
        self
    }

    pub fn ignore_subdomains(mut self, ignore: Option<&str>) -> Self {
        self.config.ignore_subdomains = ignore.map(parse_ignore_list).unwrap_or_default();
        self
    }

    pub fn subdomain_sources(mut self, wordlist: Option<&str>, use_crawler: bool) -> Self {
        self.config.wordlist = non_empty(wordlist);
        self.config.use_crawler = use_crawler;
        self
    }

    pub fn no_check(mut self, no_check: bool) -> Self {
        self.config.no_check = no_check;
        self
    }

    pub fn build(self) -> ScanConfig {
        self.config
    }
}

pub fn validate(command: &Command) -> Result<ScanConfig, ConfigError> {
    match command {
        Command::Report(args) => validate_report(args),
        Command::Dns(args) => validate_dns(args),
        Command::Subdomain(args) => validate_subdomain(args),
        Command::Port(args) => validate_port(args),
        Command::Dir(args) => validate_dir(args),
    }
}

pub fn validate_report(args: &ReportArgs) -> Result<ScanConfig, ConfigError> {
    Ok(ScanConfigBuilder::new(ScanMode::Report, args.target.as_deref())?
        .outputs(&args.output)?
        .ports(args.ports.as_deref(), args.common)?
        .database(args.db, args.virustotal)?
        .ignore_directories(args.ignore_dir.as_deref())
        .ignore_subdomains(args.ignore_sub.as_deref())
        .timeout(args.timeout)?
        .build())
}

pub fn validate_dns(args: &DnsArgs) -> Result<ScanConfig, ConfigError> {
    Ok(ScanConfigBuilder::new(ScanMode::Dns, args.target.as_deref())?
        .outputs(&args.output)?
        .build())
}

pub fn validate_subdomain(args: &SubdomainArgs) -> Result<ScanConfig, ConfigError> {
    let builder = ScanConfigBuilder::new(ScanMode::Subdomain, args.target.as_deref())?;

    if args.no_check {
        if !args.db {
            return Err(ConfigError::NoCheckWithoutDatabase);
        }
        if non_empty(args.wordlist.as_deref()).is_some() {
            return Err(ConfigError::NoCheckWithWordlist);
        }
        if non_empty(args.ignore.as_deref()).is_some() {
            return Err(ConfigError::NoCheckWithIgnore);
        }
        if args.crawler {
            return Err(ConfigError::NoCheckWithCrawler);
        }
    }

    Ok(builder
        .outputs(&args.output)?
        .database(args.db, args.virustotal)?
        .no_check(args.no_check)
        .subdomain_sources(args.wordlist.as_deref(), args.crawler)
        .ignore_subdomains(args.ignore.as_deref())
        .build())
}

pub fn validate_port(args: &PortArgs) -> Result<ScanConfig, ConfigError> {
    Ok(ScanConfigBuilder::new(ScanMode::Port, args.target.as_deref())?
        .ports(args.ports.as_deref(), args.common)?
        .outputs(&args.output)?
        .timeout(args.timeout)?
        .build())
}

pub fn validate_dir(args: &DirArgs) -> Result<ScanConfig, ConfigError> {
    Ok(ScanConfigBuilder::new(ScanMode::Dir, args.target.as_deref())?
        .outputs(&args.output)?
        .ignore_directories(args.ignore.as_deref())
        .build())
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .filter(|value| !value.trim().is_empty())
        .map(ToString::to_string)
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use super::*;
    use crate::io::cli::Cli;

    fn validate_args(args: &[&str]) -> Result<ScanConfig, ConfigError> {
        let cli = Cli::try_parse_from(std::iter::once("scoutline").chain(args.iter().copied()))
            .expect("arguments should parse");
        validate(&cli.command)
    }

    #[test]
    fn missing_target_in_every_mode() {
        for mode in ["report", "dns", "subdomain", "port", "dir"] {
            assert_eq!(
                validate_args(&[mode]),
                Err(ConfigError::MissingTarget),
                "{mode}"
            );
            assert_eq!(
                validate_args(&[mode, "-t", ""]),
                Err(ConfigError::MissingTarget),
                "{mode}"
            );
        }
    }

    #[test]
    fn invalid_target_in_every_mode() {
        for mode in ["report", "dns", "subdomain", "port", "dir"] {
            assert!(
                matches!(
                    validate_args(&[mode, "-t", "http://exam ple.com"]),
                    Err(ConfigError::InvalidTarget(_))
                ),
                "{mode}"
            );
        }
    }

    #[test]
    fn duplicate_outputs_in_every_mode() {
        for mode in ["report", "dns", "subdomain", "port", "dir"] {
            assert_eq!(
                validate_args(&[mode, "-t", "example.com", "--json", "out", "--txt", "out"]),
                Err(ConfigError::DuplicateOutputPaths),
                "{mode}"
            );
            assert_eq!(
                validate_args(&[mode, "-t", "example.com", "--html", "out", "--txt", "out"]),
                Err(ConfigError::DuplicateOutputPaths),
                "{mode}"
            );
        }
    }

    #[test]
    fn dns_mode_canonical_config() {
        let config = validate_args(&[
            "dns",
            "-t",
            "http://test.local",
            "--json",
            "out.json",
            "--html",
            "",
        ])
        .unwrap();

        assert_eq!(config.mode, ScanMode::Dns);
        assert_eq!(config.target, "http://test.local");
        assert_eq!(config.host, "test.local");
        assert_eq!(config.outputs.json.as_deref(), Some("out.json"));
        assert_eq!(config.outputs.html, None);
        assert_eq!(config.outputs.txt, None);
        assert!(!config.plain);
        assert_eq!(config.timeout, None);
        assert_eq!(config.ports, None);
    }

    #[test]
    fn report_mode_canonical_config() {
        let config = validate_args(&[
            "report",
            "-t",
            "example.com",
            "-p",
            "80,443,8080",
            "--db",
            "--virustotal",
            "--ignore-dir",
            "admin, static",
            "--ignore-sub",
            "www",
            "--timeout",
            "10",
            "--plain",
        ])
        .unwrap();

        assert_eq!(config.mode, ScanMode::Report);
        assert_eq!(config.ports, Some(PortSpec::Set(vec![80, 443, 8080])));
        assert!(config.use_subdomain_db);
        assert!(config.use_virus_total);
        assert_eq!(config.ignore_directories, vec!["admin", "static"]);
        assert_eq!(config.ignore_subdomains, vec!["www"]);
        assert_eq!(config.timeout, Some(10));
        assert!(config.plain);
    }

    #[test]
    fn ports_and_common_are_exclusive() {
        for mode in ["report", "port"] {
            assert_eq!(
                validate_args(&[mode, "-t", "example.com", "-p", "1-100", "--common"]),
                Err(ConfigError::PortsWithCommon),
                "{mode}"
            );
        }
    }

    #[test]
    fn ambiguous_ports_are_rejected() {
        for mode in ["report", "port"] {
            assert_eq!(
                validate_args(&[mode, "-t", "example.com", "-p", "1-10,20"]),
                Err(ConfigError::AmbiguousPortSpec),
                "{mode}"
            );
        }
    }

    #[test]
    fn port_mode_range() {
        let config = validate_args(&["port", "-t", "example.com", "-p", "1-1024"]).unwrap();
        assert_eq!(config.ports, Some(PortSpec::Range { start: 1, end: 1024 }));
        assert_eq!(config.effective_ports(), PortSpec::Range { start: 1, end: 1024 });
    }

    #[test]
    fn effective_ports_fallbacks() {
        let common = validate_args(&["port", "-t", "example.com", "--common"]).unwrap();
        assert_eq!(common.ports, None);
        assert_eq!(common.effective_ports(), PortSpec::Set(COMMON_PORTS.to_vec()));

        let full = validate_args(&["port", "-t", "example.com"]).unwrap();
        assert_eq!(
            full.effective_ports(),
            PortSpec::Range {
                start: DEFAULT_START_PORT,
                end: DEFAULT_END_PORT
            }
        );
    }

    #[test]
    fn timeout_bounds() {
        for mode in ["report", "port"] {
            for timeout in ["0", "101", "-1"] {
                assert!(
                    matches!(
                        validate_args(&[mode, "-t", "example.com", "--timeout", timeout]),
                        Err(ConfigError::TimeoutOutOfRange(_))
                    ),
                    "{mode} {timeout}"
                );
            }
            for timeout in ["1", "100"] {
                assert!(
                    validate_args(&[mode, "-t", "example.com", "--timeout", timeout]).is_ok(),
                    "{mode} {timeout}"
                );
            }
        }
    }

    #[test]
    fn virustotal_requires_database() {
        for mode in ["report", "subdomain"] {
            assert_eq!(
                validate_args(&[mode, "-t", "example.com", "--virustotal"]),
                Err(ConfigError::VirusTotalWithoutDatabase),
                "{mode}"
            );
            assert!(validate_args(&[mode, "-t", "example.com", "--virustotal", "--db"]).is_ok());
        }
    }

    #[test]
    fn no_check_rules() {
        assert_eq!(
            validate_args(&["subdomain", "-t", "example.com", "--no-check"]),
            Err(ConfigError::NoCheckWithoutDatabase)
        );
        assert_eq!(
            validate_args(&["subdomain", "-t", "example.com", "--no-check", "--db", "-w", "words.txt"]),
            Err(ConfigError::NoCheckWithWordlist)
        );
        assert_eq!(
            validate_args(&["subdomain", "-t", "example.com", "--no-check", "--db", "-i", "www"]),
            Err(ConfigError::NoCheckWithIgnore)
        );
        assert_eq!(
            validate_args(&["subdomain", "-t", "example.com", "--no-check", "--db", "--crawler"]),
            Err(ConfigError::NoCheckWithCrawler)
        );

        let config = validate_args(&["subdomain", "-t", "example.com", "--no-check", "--db"]).unwrap();
        assert!(config.no_check);
        assert!(config.use_subdomain_db);
        assert_eq!(config.wordlist, None);
        assert!(!config.use_crawler);
    }

    #[test]
    fn subdomain_mode_sources() {
        let config = validate_args(&[
            "subdomain",
            "-t",
            "example.com",
            "-w",
            "words.txt",
            "--crawler",
            "-i",
            "dev,staging,dev",
        ])
        .unwrap();

        assert_eq!(config.wordlist.as_deref(), Some("words.txt"));
        assert!(config.use_crawler);
        assert_eq!(config.ignore_subdomains, vec!["dev", "staging", "dev"]);
    }

    #[test]
    fn dir_mode_ignore_list() {
        let config = validate_args(&["dir", "-t", "https://example.com", "-i", "img,css"]).unwrap();
        assert_eq!(config.mode, ScanMode::Dir);
        assert_eq!(config.ignore_directories, vec!["img", "css"]);
        assert!(config.ignore_subdomains.is_empty());
    }

    #[test]
    fn validation_is_deterministic() {
        let args = [
            "report",
            "-t",
            "example.com",
            "-p",
            "22",
            "--json",
            "a.json",
            "--txt",
            "a.txt",
        ];
        assert_eq!(validate_args(&args).unwrap(), validate_args(&args).unwrap());
    }

    #[test]
    fn enabled_outputs_in_fixed_order() {
        let outputs = OutputPaths::new(Some("scan.json"), Some(""), Some("scan.txt")).unwrap();
        let enabled: Vec<_> = outputs.enabled().collect();
        assert_eq!(
            enabled,
            vec![(OutputFormat::Json, "scan.json"), (OutputFormat::Txt, "scan.txt")]
        );
    }

    #[test]
    fn blank_outputs_are_unset() {
        let outputs = OutputPaths::new(Some(" "), Some(" "), None).unwrap();
        assert_eq!(outputs, OutputPaths::default());
        assert_eq!(outputs.enabled().count(), 0);

        let config = validate_args(&["dns", "-t", "example.com", "--json", " ", "--html", " ", "--txt", "a.txt"]).unwrap();
        assert_eq!(config.outputs.json, None);
        assert_eq!(config.outputs.html, None);
        assert_eq!(config.outputs.txt.as_deref(), Some("a.txt"));
    }

    #[test]
    fn blank_ports_are_unset() {
        for mode in ["report", "port"] {
            let config = validate_args(&[mode, "-t", "example.com", "-p", " ", "--common"]).unwrap();
            assert_eq!(config.ports, None, "{mode}");
            assert!(config.use_common_ports, "{mode}");
        }
    }

    #[test]
    fn scan_mode_display() {
        assert_eq!(ScanMode::Subdomain.to_string(), "subdomain");
        assert_eq!(ScanMode::Dns.to_string(), "dns");
    }
}
