#![allow(clippy::upper_case_acronyms)]

use serde::Serialize;
use strum_macros::Display;

/// Category tag attached to every record produced by the DNS enumerator
pub const DNS_CATEGORY: &str = "DNS";

#[derive(Debug, PartialEq, Eq, Clone, Copy, Display, Hash, Serialize)]
pub enum RecordType {
    #[strum(to_string = "A")]
    A,
    #[strum(to_string = "CNAME")]
    CNAME,
    #[strum(to_string = "NS")]
    NS,
    #[strum(to_string = "MX")]
    MX,
    #[strum(to_string = "SRV")]
    SRV,
    #[strum(to_string = "TXT")]
    TXT,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct MxRecord {
    pub host: String,
    pub preference: u16,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct SrvRecord {
    pub target: String,
    pub port: u16,
    pub priority: u16,
    pub weight: u16,
}

/// One discovered DNS fact, ready to be fanned out to the report sinks
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Record {
    pub value: String,
    pub secondary_value: Option<String>,
    pub category: &'static str,
    pub record_type: RecordType,
}

impl Record {
    pub fn new(value: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            value: value.into(),
            secondary_value: None,
            category: DNS_CATEGORY,
            record_type,
        }
    }

    #[must_use]
    pub fn with_secondary(mut self, secondary_value: impl Into<String>) -> Self {
        self.secondary_value = Some(secondary_value.into());
        self
    }
}

impl From<MxRecord> for Record {
    fn from(mx: MxRecord) -> Self {
        Self::new(mx.host, RecordType::MX).with_secondary(mx.preference.to_string())
    }
}

impl From<SrvRecord> for Record {
    fn from(srv: SrvRecord) -> Self {
        Self::new(srv.target, RecordType::SRV)
            .with_secondary(format!("{}:{}:{}", srv.port, srv.priority, srv.weight))
    }
}
