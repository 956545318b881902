use std::fmt::Write as _;

use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::metadata::Envelope;

/// Plain-text rows for `--format table`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<&'static str>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Two-column `field | value` table.
    pub fn key_value() -> Self {
        Self::new(vec!["field", "value"])
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn push_pair(&mut self, key: impl Into<String>, value: impl ToString) {
        self.rows.push(vec![key.into(), value.to_string()]);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Columns are left-aligned and padded to their widest cell.
    pub fn to_text(&self) -> String {
        let mut widths = self.headers.iter().map(|h| h.len()).collect::<Vec<_>>();
        for row in &self.rows {
            for (index, cell) in row.iter().enumerate() {
                if let Some(width) = widths.get_mut(index) {
                    *width = (*width).max(cell.chars().count());
                }
            }
        }

        let mut out = String::new();
        let header = self.headers.iter().map(|h| h.to_string()).collect::<Vec<_>>();
        push_line(&mut out, &header, &widths);
        let rule = widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>();
        push_line(&mut out, &rule, &widths);
        for row in &self.rows {
            push_line(&mut out, row, &widths);
        }
        out
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

pub fn render(
    envelope: &Envelope<Value>,
    table: &Table,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(envelope)?
            } else {
                serde_json::to_string(envelope)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => print!("{}", render_table(envelope, table)),
    }

    Ok(())
}

fn render_table(envelope: &Envelope<Value>, table: &Table) -> String {
    let meta = &envelope.meta;
    let mut out = String::new();
    let _ = writeln!(out, "request_id  : {}", meta.request_id);
    let _ = writeln!(out, "generated_at: {}", meta.generated_at);
    let _ = writeln!(out, "source      : {}", meta.source);
    let _ = writeln!(out, "latency_ms  : {}", meta.latency_ms);
    let _ = writeln!(out, "cache_hit   : {}", meta.cache_hit);

    if !meta.warnings.is_empty() {
        out.push_str("warnings:\n");
        for warning in &meta.warnings {
            let _ = writeln!(out, "  - {warning}");
        }
    }

    out.push('\n');
    if table.is_empty() {
        out.push_str("(no rows)\n");
    } else {
        out.push_str(&table.to_text());
    }
    out
}

/// `$50,000,000` style amount.
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}")
}
