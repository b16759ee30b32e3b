use anyhow::{Context, Result};
use hickory_resolver::Resolver;
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::RData;
use std::net::IpAddr;

use super::error::DnsError;
use super::types::{MxRecord, SrvRecord};

/// Record lookups used by the enumerator. Each lookup fails independently.
pub trait DnsLookup {
    fn lookup_ips(&self, domain: &str) -> Result<Vec<IpAddr>, DnsError>;
    fn lookup_cname(&self, domain: &str) -> Result<String, DnsError>;
    fn lookup_ns(&self, domain: &str) -> Result<Vec<String>, DnsError>;
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, DnsError>;
    fn lookup_srv(&self, service: &str, protocol: &str, domain: &str) -> Result<Vec<SrvRecord>, DnsError>;
    fn lookup_txt(&self, domain: &str) -> Result<Vec<String>, DnsError>;
}

/// Resolver using the nameservers configured on this host
pub struct SystemResolver {
    resolver: Resolver,
}

impl SystemResolver {
    pub fn new() -> Result<Self> {
        let resolver =
            Resolver::from_system_conf().context("Failed to load the system resolver configuration")?;
        Ok(Self { resolver })
    }
}

impl DnsLookup for SystemResolver {
    fn lookup_ips(&self, domain: &str) -> Result<Vec<IpAddr>, DnsError> {
        match self.resolver.lookup_ip(domain) {
            Ok(lookup) => Ok(lookup.iter().collect()),
            Err(err) => empty_on_no_records(err),
        }
    }

    fn lookup_cname(&self, domain: &str) -> Result<String, DnsError> {
        match self.resolver.lookup_ip(domain) {
            Ok(lookup) => Ok(canonical_name(domain, lookup.as_lookup().iter())),
            // A name without an alias is its own canonical name
            Err(err) => match map_resolve_error(&err) {
                DnsError::NoRecordsFound => Ok(fully_qualified(domain)),
                other => Err(other),
            },
        }
    }

    fn lookup_ns(&self, domain: &str) -> Result<Vec<String>, DnsError> {
        match self.resolver.ns_lookup(domain) {
            Ok(lookup) => Ok(lookup.iter().map(|ns| ns.0.to_string()).collect()),
            Err(err) => empty_on_no_records(err),
        }
    }

    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, DnsError> {
        match self.resolver.mx_lookup(domain) {
            Ok(lookup) => Ok(lookup
                .iter()
                .map(|mx| MxRecord {
                    host: mx.exchange().to_string(),
                    preference: mx.preference(),
                })
                .collect()),
            Err(err) => empty_on_no_records(err),
        }
    }

    fn lookup_srv(&self, service: &str, protocol: &str, domain: &str) -> Result<Vec<SrvRecord>, DnsError> {
        let name = format!("_{service}._{protocol}.{domain}");
        match self.resolver.srv_lookup(name.as_str()) {
            Ok(lookup) => Ok(lookup
                .iter()
                .map(|srv| SrvRecord {
                    target: srv.target().to_string(),
                    port: srv.port(),
                    priority: srv.priority(),
                    weight: srv.weight(),
                })
                .collect()),
            Err(err) => empty_on_no_records(err),
        }
    }

    fn lookup_txt(&self, domain: &str) -> Result<Vec<String>, DnsError> {
        match self.resolver.txt_lookup(domain) {
            Ok(lookup) => Ok(lookup
                .iter()
                .map(|txt| {
                    txt.txt_data()
                        .iter()
                        .map(|segment| String::from_utf8_lossy(segment))
                        .collect::<String>()
                })
                .collect()),
            Err(err) => empty_on_no_records(err),
        }
    }
}

/// Final name of the alias chain carried by an address answer
fn canonical_name<'a>(domain: &str, answers: impl Iterator<Item = &'a RData>) -> String {
    answers
        .filter_map(RData::as_cname)
        .last()
        .map_or_else(|| fully_qualified(domain), |cname| cname.0.to_string())
}

fn fully_qualified(domain: &str) -> String {
    if domain.ends_with('.') {
        domain.to_string()
    } else {
        format!("{domain}.")
    }
}

fn empty_on_no_records<T>(err: ResolveError) -> Result<Vec<T>, DnsError> {
    match map_resolve_error(&err) {
        DnsError::NoRecordsFound => Ok(Vec::new()),
        other => Err(other),
    }
}

fn map_resolve_error(err: &ResolveError) -> DnsError {
    match err.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => match *response_code {
            ResponseCode::NXDomain => DnsError::NonExistentDomain,
            ResponseCode::NoError => DnsError::NoRecordsFound,
            ResponseCode::ServFail => DnsError::Nameserver("Server Failed".to_owned()),
            ResponseCode::Refused => DnsError::Nameserver("Refused".to_owned()),
            code => DnsError::Nameserver(code.to_string()),
        },
        ResolveErrorKind::Timeout => DnsError::Timeout,
        ResolveErrorKind::Io(io_err) => DnsError::Network(io_err.to_string()),
        ResolveErrorKind::Proto(proto_err) => DnsError::Network(proto_err.to_string()),
        _ => DnsError::Internal(err.to_string()),
    }
}
