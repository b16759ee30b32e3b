use anyhow::Result;
use std::io::Write;
use std::path::Path;

use super::format::format_found;
use super::types::Record;
use crate::config::{OutputPaths, ScanConfig};
use crate::io::report::ReportWriter;

/// Fans each discovered record out to the console and every configured report file
pub struct ReportEmitter<'a, W: Write, R: ReportWriter> {
    domain: &'a str,
    plain: bool,
    outputs: &'a OutputPaths,
    writer: &'a R,
    console: W,
}

impl<'a, W: Write, R: ReportWriter> ReportEmitter<'a, W, R> {
    pub fn new(config: &'a ScanConfig, writer: &'a R, console: W) -> Self {
        Self {
            domain: config.host.as_str(),
            plain: config.plain,
            outputs: &config.outputs,
            writer,
            console,
        }
    }

    pub fn domain(&self) -> &str {
        self.domain
    }

    /// Opens the HTML document for a section, if an HTML report is configured
    pub fn begin(&mut self, section: &str) -> Result<()> {
        if let Some(path) = self.outputs.html.as_deref() {
            self.writer.write_header(section, Path::new(path))?;
        }
        Ok(())
    }

    pub fn emit(&mut self, record: &Record) -> Result<()> {
        writeln!(
            self.console,
            "{}",
            format_found(self.domain, record, self.plain)
        )?;

        for (format, path) in self.outputs.enabled() {
            self.writer.append(record, format, Path::new(path))?;
        }

        Ok(())
    }

    /// Closes the HTML document and prints the separator line
    pub fn finish(&mut self) -> Result<()> {
        if let Some(path) = self.outputs.html.as_deref() {
            self.writer.write_footer(Path::new(path))?;
        }
        writeln!(self.console)?;
        self.console.flush()?;
        Ok(())
    }
}
