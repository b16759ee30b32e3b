use std::fmt;

use super::error::ConfigError;

pub const DEFAULT_START_PORT: u16 = 1;
pub const DEFAULT_END_PORT: u16 = 65535;

pub const COMMON_PORTS: &[u16] = &[
    21, 22, 23, 25, 53, 80, 110, 139, 143, 443, 445, 3306, 3389, 5432, 6379, 8080, 8443,
];

const RANGE_DELIMITER: char = '-';
const LIST_DELIMITER: char = ',';

/// Ports selected for a scan, either an inclusive range or an explicit list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PortSpec {
    Range { start: u16, end: u16 },
    Set(Vec<u16>),
}

impl PortSpec {
    /// Parses a raw ports expression such as `1-1024`, `80,443` or `8080`.
    ///
    /// Endpoints missing from a range keep the given defaults, so a bare number
    /// only replaces the start of the range.
    pub fn parse(input: &str, default_start: u16, default_end: u16) -> Result<Self, ConfigError> {
        let has_range = input.contains(RANGE_DELIMITER);
        let has_list = input.contains(LIST_DELIMITER);

        match (has_range, has_list) {
            (true, true) => Err(ConfigError::AmbiguousPortSpec),
            (false, true) => parse_set(input),
            _ => parse_range(input, default_start, default_end),
        }
    }

    /// Number of selected ports, duplicates in a list included
    pub fn len(&self) -> usize {
        match self {
            Self::Range { start, end } => (*start..=*end).len(),
            Self::Set(values) => values.len(),
        }
    }
}

impl Default for PortSpec {
    fn default() -> Self {
        Self::Range {
            start: DEFAULT_START_PORT,
            end: DEFAULT_END_PORT,
        }
    }
}

impl fmt::Display for PortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range { start, end } => write!(f, "{start}-{end}"),
            Self::Set(values) => {
                let joined = values
                    .iter()
                    .map(u16::to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                write!(f, "{joined}")
            }
        }
    }
}

fn parse_range(input: &str, default_start: u16, default_end: u16) -> Result<PortSpec, ConfigError> {
    let (start, end) = input.split_once(RANGE_DELIMITER).unwrap_or((input, ""));

    let start = parse_endpoint(start, default_start)?;
    let end = parse_endpoint(end, default_end)?;
    if start > end {
        return Err(ConfigError::InvalidPortRange { start, end });
    }

    Ok(PortSpec::Range { start, end })
}

fn parse_endpoint(token: &str, default: u16) -> Result<u16, ConfigError> {
    if token.trim().is_empty() {
        Ok(default)
    } else {
        parse_port(token)
    }
}

fn parse_set(input: &str) -> Result<PortSpec, ConfigError> {
    input
        .split(LIST_DELIMITER)
        .map(parse_port)
        .collect::<Result<Vec<_>, _>>()
        .map(PortSpec::Set)
}

fn parse_port(token: &str) -> Result<u16, ConfigError> {
    let token = token.trim();
    match token.parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPortToken(token.to_string())),
    }
}
