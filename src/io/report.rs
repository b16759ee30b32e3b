use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use strum_macros::{Display, EnumIter};

use crate::dns::types::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Html,
    Txt,
}

/// Destination for report entries. Every call appends to the file at `path`.
pub trait ReportWriter {
    fn write_header(&self, section: &str, path: &Path) -> Result<()>;
    fn append(&self, record: &Record, format: OutputFormat, path: &Path) -> Result<()>;
    fn write_footer(&self, path: &Path) -> Result<()>;
}

/// Writes report files on disk: JSON Lines, an HTML table, or plain text lines
#[derive(Debug, Default, Clone, Copy)]
pub struct FileReportWriter;

impl ReportWriter for FileReportWriter {
    fn write_header(&self, section: &str, path: &Path) -> Result<()> {
        let header = format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<h2>{title}</h2>\n<table>\n<tr><th>Category</th><th>Type</th><th>Value</th><th>Details</th></tr>\n",
            title = escape_html(section)
        );
        append_to(path, &header)
    }

    fn append(&self, record: &Record, format: OutputFormat, path: &Path) -> Result<()> {
        let entry = match format {
            OutputFormat::Json => {
                let mut line = serde_json::to_string(record)?;
                line.push('\n');
                line
            }
            OutputFormat::Html => format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape_html(record.category),
                record.record_type,
                escape_html(&record.value),
                escape_html(record.secondary_value.as_deref().unwrap_or_default())
            ),
            OutputFormat::Txt => match &record.secondary_value {
                Some(secondary) => format!(
                    "{} {} {} {}\n",
                    record.category, record.record_type, record.value, secondary
                ),
                None => format!("{} {} {}\n", record.category, record.record_type, record.value),
            },
        };
        append_to(path, &entry)
    }

    fn write_footer(&self, path: &Path) -> Result<()> {
        append_to(path, "</table>\n</body>\n</html>\n")
    }
}

fn open_for_append(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open report file: {}", path.display()))
}

fn append_to(path: &Path, content: &str) -> Result<()> {
    let mut file = open_for_append(path)?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write report file: {}", path.display()))
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
