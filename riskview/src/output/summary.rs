use std::collections::BTreeMap;
use std::io::Write;

use colored::Colorize;

use crate::counters::{RiskCounters, StatusLabel};
use crate::severity::Severity;

/// Print the main header with box-drawing characters.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_header(writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(writer)?;
    writeln!(
        writer,
        "{}",
        "╔════════════════════════════════════════╗".cyan()
    )?;
    writeln!(
        writer,
        "{}",
        "║  Security Scan Report                  ║".cyan().bold()
    )?;
    writeln!(
        writer,
        "{}",
        "╚════════════════════════════════════════╝".cyan()
    )?;
    writeln!(writer)?;
    Ok(())
}

fn status_descriptor(status: StatusLabel) -> String {
    match status {
        StatusLabel::Critical => status.as_str().red().bold().to_string(),
        StatusLabel::MediumConcern => status.as_str().yellow().bold().to_string(),
        StatusLabel::LowConcern => status.as_str().blue().to_string(),
        StatusLabel::InfoConcern => status.as_str().cyan().to_string(),
        StatusLabel::Acceptable => status.as_str().green().to_string(),
    }
}

/// Print the status descriptor and per-level count pills for the latest
/// scan.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_status(writer: &mut impl Write, counters: &RiskCounters) -> std::io::Result<()> {
    fn pill(label: &str, count: u32) -> String {
        if count == 0 {
            format!("{}: {}", label, count.to_string().green())
        } else {
            format!("{}: {}", label, count.to_string().red().bold())
        }
    }

    let latest = counters.latest();
    writeln!(
        writer,
        "Status: {}  (scans recorded: {})",
        status_descriptor(counters.status_label()),
        counters.scan_count()
    )?;
    writeln!(
        writer,
        "{}  {}  {}  {}  Acceptable: {}",
        pill("High", latest.high),
        pill("Medium", latest.medium),
        pill("Low", latest.low),
        pill("Info", latest.informational),
        latest.acceptable.to_string().green(),
    )?;
    writeln!(writer)?;
    Ok(())
}

/// Print trend series as one line per severity level, oldest scan first.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_trend(
    writer: &mut impl Write,
    series: &BTreeMap<Severity, Vec<u32>>,
) -> std::io::Result<()> {
    if series.is_empty() {
        return Ok(());
    }

    writeln!(writer, "{}", "Risk trend".bold().underline())?;
    for (level, counts) in series {
        let joined = counts
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "  {:>10}: {joined}", level.as_str())?;
    }
    writeln!(writer)?;
    Ok(())
}
