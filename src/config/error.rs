use thiserror::Error;

/// A scan configuration rejected before any lookup, scan or file write took place.
/// The `Display` text is the diagnostic shown to the user.
#[allow(clippy::module_name_repetitions)]
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("The target is required.")]
    MissingTarget,
    #[error("The inputted target is not valid.")]
    InvalidTarget(String),
    #[error("The output paths must be all different.")]
    DuplicateOutputPaths,
    #[error("Port Scan timeout must be an integer between 1 and 100.")]
    TimeoutOutOfRange(i64),
    #[error("You can't specify a port range and common option together.")]
    PortsWithCommon,
    #[error(
        "You can't specify VirusTotal and not the Open Database option.\nIf you want to use VirusTotal Api, set also -db option."
    )]
    VirusTotalWithoutDatabase,
    #[error("You can use no-check only with db option.")]
    NoCheckWithoutDatabase,
    #[error("You can't use no-check with wordlist option.")]
    NoCheckWithWordlist,
    #[error("You can't use no-check with ignore option.")]
    NoCheckWithIgnore,
    #[error("You can't use no-check with crawler option.")]
    NoCheckWithCrawler,
    #[error("You can specify a ports range or an array, not both.")]
    AmbiguousPortSpec,
    #[error("The inputted port is not valid: {0}")]
    InvalidPortToken(String),
    #[error("The inputted port range is not valid: {start}-{end}")]
    InvalidPortRange { start: u16, end: u16 },
}
