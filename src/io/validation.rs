use std::collections::HashSet;
use std::ops::RangeInclusive;

use url::{Host, Url};

use crate::config::error::ConfigError;

const DEFAULT_SCHEME_PREFIX: &str = "http://";
const TIMEOUT_RANGE: RangeInclusive<i64> = 1..=100;

/// A target that passed URL validation, with the bare host used for lookups
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target {
    pub url: String,
    pub host: String,
}

pub fn validate_target(input: &str) -> Result<Target, ConfigError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ConfigError::MissingTarget);
    }

    let with_scheme = if input.contains("://") {
        input.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{input}")
    };

    let parsed = Url::parse(&with_scheme).map_err(|_| ConfigError::InvalidTarget(input.to_string()))?;

    // Ipv6 hosts are unbracketed so they can be handed straight to the resolver
    let host = match parsed.host() {
        Some(Host::Domain(domain)) if !domain.is_empty() => domain.to_string(),
        Some(Host::Ipv4(ip)) => ip.to_string(),
        Some(Host::Ipv6(ip)) => ip.to_string(),
        _ => return Err(ConfigError::InvalidTarget(input.to_string())),
    };

    Ok(Target {
        url: input.to_string(),
        host,
    })
}

/// Every configured (non-blank) output path must differ from the others.
pub fn check_distinct_outputs<'a>(
    paths: impl IntoIterator<Item = &'a str>,
) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for path in paths.into_iter().filter(|path| !path.trim().is_empty()) {
        if !seen.insert(path) {
            return Err(ConfigError::DuplicateOutputPaths);
        }
    }
    Ok(())
}

pub fn validate_timeout(timeout: i64) -> Result<u8, ConfigError> {
    if TIMEOUT_RANGE.contains(&timeout) {
        u8::try_from(timeout).map_err(|_| ConfigError::TimeoutOutOfRange(timeout))
    } else {
        Err(ConfigError::TimeoutOutOfRange(timeout))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn valid_targets() {
        let valid_targets = [
            "example.com",
            "http://example.com",
            "https://sub.example.com/path?q=1",
            "http://test.local",
            "localhost",
            "192.168.0.1",
            "http://[::1]:8080/",
        ];
        for target in valid_targets {
            assert!(validate_target(target).is_ok(), "Expected valid: {target}");
        }
    }

    #[test]
    fn invalid_targets() {
        let invalid_targets = ["http://", "exam ple.com", "https://a b.com", "http://:80"];
        for target in invalid_targets {
            assert!(
                matches!(validate_target(target), Err(ConfigError::InvalidTarget(_))),
                "Expected invalid: {target}"
            );
        }
    }

    #[test]
    fn empty_target_is_missing() {
        assert_eq!(validate_target(""), Err(ConfigError::MissingTarget));
        assert_eq!(validate_target("   "), Err(ConfigError::MissingTarget));
    }

    #[test]
    fn host_is_extracted() {
        let target = validate_target(" http://Test.Local/index.html ").unwrap();
        assert_eq!(target.url, "http://Test.Local/index.html");
        assert_eq!(target.host, "test.local");

        assert_eq!(validate_target("https://[::1]:443").unwrap().host, "::1");
        assert_eq!(validate_target("10.0.0.1:8080").unwrap().host, "10.0.0.1");
    }

    #[test]
    fn distinct_output_paths() {
        assert!(check_distinct_outputs(["a.json", "a.html", "a.txt"]).is_ok());
        assert!(check_distinct_outputs(["a.json", "", ""]).is_ok());
        assert!(check_distinct_outputs(["", "", ""]).is_ok());
        assert!(check_distinct_outputs([" ", " ", "a.txt"]).is_ok());
    }

    #[test]
    fn duplicate_output_paths() {
        let duplicated = [
            ["out", "out", ""],
            ["out", "", "out"],
            ["", "out", "out"],
            ["out", "out", "out"],
        ];
        for paths in duplicated {
            assert_eq!(
                check_distinct_outputs(paths),
                Err(ConfigError::DuplicateOutputPaths),
                "{paths:?}"
            );
        }
    }

    #[test]
    fn timeout_bounds_are_inclusive() {
        assert_eq!(validate_timeout(1), Ok(1));
        assert_eq!(validate_timeout(100), Ok(100));
        assert_eq!(validate_timeout(0), Err(ConfigError::TimeoutOutOfRange(0)));
        assert_eq!(validate_timeout(101), Err(ConfigError::TimeoutOutOfRange(101)));
        assert_eq!(validate_timeout(-5), Err(ConfigError::TimeoutOutOfRange(-5)));
    }
}
