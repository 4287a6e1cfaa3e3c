use std::fmt::Write;
use xmpp_srv_check_domain::{CategoryReport, DisplayRecord, ServiceClass, XmppDnsReport};

/// Plain-text rendering of a report for terminal output.
pub fn render_text(report: &XmppDnsReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "XMPP DNS SRV records for {}", report.hostname);
    let servers: Vec<String> = report.name_servers.iter().map(|ip| ip.to_string()).collect();
    let source = if report.authoritative {
        "authoritative"
    } else {
        "NOT authoritative, delegation walk failed"
    };
    let _ = writeln!(out, "Queried name servers: {} ({})", servers.join(", "), source);

    render_category(&mut out, &report.client);
    render_category(&mut out, &report.server);

    out
}

fn render_category(out: &mut String, category: &CategoryReport) {
    let title = match category.service_class {
        ServiceClass::Client => "Client records",
        ServiceClass::Server => "Server records",
    };
    let _ = writeln!(out, "\n{}", title);

    if let Some(message) = &category.missing_records_message {
        let _ = writeln!(out, "  {}", message);
        return;
    }

    let width = category
        .records
        .iter()
        .map(|r| r.target.len())
        .max()
        .unwrap_or(0)
        .max("Target".len());

    let _ = writeln!(
        out,
        "  {:<width$}  {:>5}  {:>8}  {:>6}  Notes",
        "Target",
        "Port",
        "Priority",
        "Weight",
        width = width
    );
    for record in &category.records {
        let _ = writeln!(
            out,
            "  {:<width$}  {:>5}  {:>8}  {:>6}  {}",
            record.target,
            record.port,
            record.priority,
            record.weight,
            render_notes(record, category),
            width = width
        );
    }

    if !category.footnotes.is_empty() {
        out.push('\n');
        for footnote in &category.footnotes {
            let _ = writeln!(out, "  [{}] {}", footnote.index, footnote.text);
        }
    }
}

fn render_notes(record: &DisplayRecord, category: &CategoryReport) -> String {
    record
        .notes
        .iter()
        .map(|note| match category.footnote_index.get(note.kind) {
            Some(index) => format!("{} [{}]", note.message, index),
            None => note.message.clone(),
        })
        .collect::<Vec<_>>()
        .join("; ")
}
