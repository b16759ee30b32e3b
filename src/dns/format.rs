use colored::Colorize;

use super::types::{Record, RecordType};

/// Value as shown on the console: MX as `host preference`, SRV as `target:port:priority:weight`
pub fn format_value(record: &Record) -> String {
    match (&record.record_type, &record.secondary_value) {
        (RecordType::SRV, Some(metadata)) => format!("{}:{metadata}", record.value),
        (_, Some(secondary)) => format!("{} {secondary}", record.value),
        (_, None) => record.value.clone(),
    }
}

pub fn format_found(domain: &str, record: &Record, plain: bool) -> String {
    let value = format_value(record);
    if plain {
        value
    } else {
        format!("[+]FOUND {domain} IN {}: {}", record.record_type, value.green())
    }
}
