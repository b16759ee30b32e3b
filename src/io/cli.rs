use clap::{Args, CommandFactory, Parser, Subcommand};
use colored::Colorize;

use crate::config::{ScanConfig, ScanMode};

/// Command-line arguments for the program
#[derive(Parser, Debug)]
#[command(
    name = "scoutline",
    author = "Alex Ogden",
    version = env!("CARGO_PKG_VERSION"),
    about = "An information gathering tool for DNS records, subdomains, ports and directories",
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Scan modes, each with its own flags
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Full report: DNS records, subdomains, directories and open ports
    Report(ReportArgs),
    /// Enumerate DNS records of the target
    Dns(DnsArgs),
    /// Enumerate subdomains of the target
    Subdomain(SubdomainArgs),
    /// Scan the target's open ports
    Port(PortArgs),
    /// Enumerate directories served by the target
    Dir(DirArgs),
}

impl Command {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Report(_) => "report",
            Self::Dns(_) => "dns",
            Self::Subdomain(_) => "subdomain",
            Self::Port(_) => "port",
            Self::Dir(_) => "dir",
        }
    }
}

/// Report destinations and console rendering, shared by every mode
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Path of the JSON report, one JSON object per line
    #[arg(long, env = "SCOUTLINE_JSON")]
    pub json: Option<String>,

    /// Path of the HTML report
    #[arg(long, env = "SCOUTLINE_HTML")]
    pub html: Option<String>,

    /// Path of the plain text report
    #[arg(long, env = "SCOUTLINE_TXT")]
    pub txt: Option<String>,

    /// Print only the results, without colors or banner
    #[arg(long, env = "SCOUTLINE_PLAIN")]
    pub plain: bool,
}

#[derive(Args, Debug, Clone, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct ReportArgs {
    /// Target URL or host
    #[arg(short, long, env = "SCOUTLINE_TARGET")]
    pub target: Option<String>,

    /// Ports to scan, a range ('1-1024') or a list ('80,443')
    #[arg(short, long, env = "SCOUTLINE_PORTS")]
    pub ports: Option<String>,

    /// Scan only the most common ports
    #[arg(long, env = "SCOUTLINE_COMMON")]
    pub common: bool,

    /// Query open databases for subdomains
    #[arg(long, env = "SCOUTLINE_DB")]
    pub db: bool,

    /// Query VirusTotal for subdomains (requires --db)
    #[arg(long, env = "SCOUTLINE_VIRUSTOTAL")]
    pub virustotal: bool,

    /// Directories to ignore (comma-separated)
    #[arg(long, env = "SCOUTLINE_IGNORE_DIR")]
    pub ignore_dir: Option<String>,

    /// Subdomains to ignore (comma-separated)
    #[arg(long, env = "SCOUTLINE_IGNORE_SUB")]
    pub ignore_sub: Option<String>,

    /// Port scan timeout in seconds, between 1 and 100
    #[arg(long, default_value_t = 3, allow_negative_numbers = true, env = "SCOUTLINE_TIMEOUT")]
    pub timeout: i64,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct DnsArgs {
    /// Target URL or host
    #[arg(short, long, env = "SCOUTLINE_TARGET")]
    pub target: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct SubdomainArgs {
    /// Target URL or host
    #[arg(short, long, env = "SCOUTLINE_TARGET")]
    pub target: Option<String>,

    /// Query open databases for subdomains
    #[arg(long, env = "SCOUTLINE_DB")]
    pub db: bool,

    /// Query VirusTotal for subdomains (requires --db)
    #[arg(long, env = "SCOUTLINE_VIRUSTOTAL")]
    pub virustotal: bool,

    /// Don't check whether database results are alive (requires --db)
    #[arg(long, env = "SCOUTLINE_NO_CHECK")]
    pub no_check: bool,

    /// Path to subdomain wordlist
    #[arg(short, long, env = "SCOUTLINE_WORDLIST")]
    pub wordlist: Option<String>,

    /// Crawl the target to discover subdomains
    #[arg(long, env = "SCOUTLINE_CRAWLER")]
    pub crawler: bool,

    /// Subdomains to ignore (comma-separated)
    #[arg(short, long, env = "SCOUTLINE_IGNORE")]
    pub ignore: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct PortArgs {
    /// Target URL or host
    #[arg(short, long, env = "SCOUTLINE_TARGET")]
    pub target: Option<String>,

    /// Ports to scan, a range ('1-1024') or a list ('80,443')
    #[arg(short, long, env = "SCOUTLINE_PORTS")]
    pub ports: Option<String>,

    /// Scan only the most common ports
    #[arg(long, env = "SCOUTLINE_COMMON")]
    pub common: bool,

    /// Port scan timeout in seconds, between 1 and 100
    #[arg(long, default_value_t = 3, allow_negative_numbers = true, env = "SCOUTLINE_TIMEOUT")]
    pub timeout: i64,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct DirArgs {
    /// Target URL or host
    #[arg(short, long, env = "SCOUTLINE_TARGET")]
    pub target: Option<String>,

    /// Directories to ignore (comma-separated)
    #[arg(short, long, env = "SCOUTLINE_IGNORE")]
    pub ignore: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn get_parsed_args() -> Cli {
    Cli::parse()
}

/// Prints the flags of a single subcommand, used when the target is missing
pub fn print_usage(subcommand: &str) {
    let mut command = Cli::command();
    if let Some(subcommand) = command.find_subcommand_mut(subcommand) {
        let _ = subcommand.print_help();
    } else {
        let _ = command.print_help();
    }
}

/// Prints the ASCII art banner
pub fn print_ascii_art() {
    let title_art = r"
   _____                  __  ___
  / ___/_________  __  __/ /_/ (_)___  ___
  \__ \/ ___/ __ \/ / / / __/ / / __ \/ _ \
 ___/ / /__/ /_/ / /_/ / /_/ / / / / /  __/
/____/\___/\____/\__,_/\__/_/_/_/ /_/\___/
";
    println!("{}", title_art.cyan());
    println!("Version: {}\n", env!("CARGO_PKG_VERSION"));
}

/// Prints the validated options before the scan starts
pub fn print_options(config: &ScanConfig) {
    let option = |name: &str, value: &str| {
        println!("{:<10} {}", format!("{name}:").bold(), value);
    };

    option("Mode", &config.mode.to_string());
    option("Target", &config.target);
    if let Some(timeout) = config.timeout {
        option("Timeout", &format!("{timeout}s"));
    }
    if matches!(config.mode, ScanMode::Report | ScanMode::Port) {
        let ports = config.effective_ports();
        let label = if config.use_common_ports { "common " } else { "" };
        option(
            "Ports",
            &format!("{label}{ports} ({} ports)", ports.len()),
        );
    }
    let sources: Vec<&str> = [
        (config.use_subdomain_db, "database"),
        (config.use_virus_total, "virustotal"),
        (config.use_crawler, "crawler"),
    ]
    .into_iter()
    .filter_map(|(enabled, source)| enabled.then_some(source))
    .collect();
    if !sources.is_empty() {
        option("Sources", &sources.join(", "));
    }
    if let Some(wordlist) = &config.wordlist {
        option("Wordlist", wordlist);
    }
    if config.no_check {
        option("No check", "enabled");
    }
    if !config.ignore_directories.is_empty() {
        option("Ignore dir", &config.ignore_directories.join(", "));
    }
    if !config.ignore_subdomains.is_empty() {
        option("Ignore sub", &config.ignore_subdomains.join(", "));
    }
    for (format, path) in config.outputs.enabled() {
        option(&format.to_string().to_uppercase(), path);
    }
    println!();
}
