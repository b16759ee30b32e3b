use anyhow::Result;
use std::io::Write;

use super::emitter::ReportEmitter;
use super::error::DnsError;
use super::resolver::DnsLookup;
use super::types::{Record, RecordType};
use crate::io::logger::{Status, write_status};
use crate::io::report::ReportWriter;

pub const SECTION_TITLE: &str = "DNS ENUMERATION";
const SRV_SERVICE: &str = "xmpp-server";
const SRV_PROTOCOL: &str = "tcp";

/// Queries A, CNAME, NS, MX, SRV and TXT records for the emitter's domain, in that order,
/// emitting every answer as soon as it arrives.
///
/// A failed lookup is reported on `diagnostics` and the next record type is queried.
/// The CNAME result is always emitted, even when the lookup failed, and TXT failures
/// are dropped without a diagnostic.
pub fn enumerate_records<L, W, R>(
    lookup: &L,
    emitter: &mut ReportEmitter<'_, W, R>,
    diagnostics: &mut impl Write,
) -> Result<()>
where
    L: DnsLookup,
    W: Write,
    R: ReportWriter,
{
    let domain = emitter.domain().to_string();
    emitter.begin(SECTION_TITLE)?;

    let ips = lookup
        .lookup_ips(&domain)
        .map(|ips| {
            ips.into_iter()
                .map(|ip| Record::new(ip.to_string(), RecordType::A))
                .collect::<Vec<_>>()
        });
    emit_all(emitter, diagnostics, "IPs", ips)?;

    let cname = lookup.lookup_cname(&domain).or_else(|err| {
        report_failure(diagnostics, "CNAME", &err).map(|()| String::new())
    })?;
    emitter.emit(&Record::new(cname, RecordType::CNAME))?;

    let nameservers = lookup.lookup_ns(&domain).map(|hosts| {
        hosts
            .into_iter()
            .map(|host| Record::new(host, RecordType::NS))
            .collect::<Vec<_>>()
    });
    emit_all(emitter, diagnostics, "NSs", nameservers)?;

    let mail_exchangers = lookup
        .lookup_mx(&domain)
        .map(|records| records.into_iter().map(Record::from).collect::<Vec<_>>());
    emit_all(emitter, diagnostics, "MXs", mail_exchangers)?;

    let services = lookup
        .lookup_srv(SRV_SERVICE, SRV_PROTOCOL, &domain)
        .map(|records| records.into_iter().map(Record::from).collect::<Vec<_>>());
    emit_all(emitter, diagnostics, "SRVs", services)?;

    if let Ok(texts) = lookup.lookup_txt(&domain) {
        for text in texts {
            emitter.emit(&Record::new(text, RecordType::TXT))?;
        }
    }

    emitter.finish()
}

fn emit_all<W: Write, R: ReportWriter>(
    emitter: &mut ReportEmitter<'_, W, R>,
    diagnostics: &mut impl Write,
    label: &str,
    records: Result<Vec<Record>, DnsError>,
) -> Result<()> {
    match records {
        Ok(records) => records.iter().try_for_each(|record| emitter.emit(record)),
        Err(err) => report_failure(diagnostics, label, &err),
    }
}

fn report_failure(diagnostics: &mut impl Write, label: &str, err: &DnsError) -> Result<()> {
    write_status(
        diagnostics,
        &Status::Error,
        &format!("Could not get {label}: {err}"),
        false,
    )?;
    Ok(())
}
