use crate::severity::Severity;
use crate::table::TableRow;
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use std::io::Write;

fn create_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers);

    if cfg!(test) {
        table.set_width(120);
    }
    table
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::High => Color::Red,
        Severity::Medium => Color::Yellow,
        Severity::Low => Color::Blue,
        Severity::Informational | Severity::Acceptable => Color::White,
    }
}

/// Print the issues table (Name, Type, Risk).
///
/// Rows whose check failed to run are marked after the name.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_issue_table(
    writer: &mut impl Write,
    title: &str,
    rows: &[TableRow],
) -> std::io::Result<()> {
    if rows.is_empty() {
        return Ok(());
    }

    writeln!(writer, "\n{}", title.bold().underline())?;
    let mut table = create_table(vec!["Name", "Type", "Risk"]);

    for row in rows {
        let name = if row.failed {
            format!("{} (check failed)", row.name)
        } else {
            row.name.clone()
        };
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(&row.category),
            Cell::new(row.severity.as_str()).fg(severity_color(row.severity)),
        ]);
    }

    writeln!(writer, "{table}")?;
    Ok(())
}

/// Print the acceptable-findings table (Name, Type).
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_acceptable_table(
    writer: &mut impl Write,
    title: &str,
    rows: &[TableRow],
) -> std::io::Result<()> {
    if rows.is_empty() {
        return Ok(());
    }

    writeln!(writer, "\n{}", title.bold().underline())?;
    let mut table = create_table(vec!["Name", "Type"]);

    for row in rows {
        table.add_row(vec![
            Cell::new(&row.name).add_attribute(Attribute::Dim),
            Cell::new(&row.category),
        ]);
    }

    writeln!(writer, "{table}")?;
    Ok(())
}
