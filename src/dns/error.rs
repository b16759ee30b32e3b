use thiserror::Error;

#[allow(clippy::module_name_repetitions)]
#[derive(Error, Debug, PartialEq, Eq, Hash, Clone)]
pub enum DnsError {
    #[error("No records found")]
    NoRecordsFound,
    #[error("None existent domain")]
    NonExistentDomain,
    #[error("Nameserver Error: {0}")]
    Nameserver(String),
    #[error("Network Error: {0}")]
    Network(String),
    #[error("Internal Error: {0}")]
    Internal(String),
    #[error("Connection Timeout")]
    Timeout,
}
