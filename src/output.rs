//! Rendering of extraction results for the terminal.

use anyhow::Result;

use crate::extract::{TableCellRecord, TextTable};

/// Output format for table records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// Human-readable record list
    #[default]
    Records,
    /// Pretty-printed JSON array
    Json,
    /// One markdown table per document table
    Markdown,
}

/// Human-readable list, one record per line.
pub fn format_records(records: &[TableCellRecord]) -> String {
    if records.is_empty() {
        return "[]\n".to_string();
    }

    let mut out = String::from("[\n");
    for record in records {
        out.push_str(&format!(
            "  {{ x: {}, y: {}, char: {:?} }},\n",
            record.x, record.y, record.char
        ));
    }
    out.push_str("]\n");
    out
}

pub fn format_json(records: &[TableCellRecord]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(records)?;
    json.push('\n');
    Ok(json)
}

/// Markdown tables separated by blank lines.
pub fn format_markdown(tables: &[TextTable]) -> String {
    tables
        .iter()
        .map(TextTable::to_markdown)
        .filter(|md| !md.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render records or tables in the requested format.
pub fn render(
    format: OutputFormat,
    records: &[TableCellRecord],
    tables: &[TextTable],
) -> Result<String> {
    Ok(match format {
        OutputFormat::Records => format_records(records),
        OutputFormat::Json => format_json(records)?,
        OutputFormat::Markdown => format_markdown(tables),
    })
}
