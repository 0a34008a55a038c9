//! Fetch a document and extract its tables.

use anyhow::Result;
use tracing::info;

use crate::error::DocsError;
use crate::extract::{extract_table_cells, extract_tables, TableCellRecord, TextTable};
use crate::http_client::DocsClient;

/// Everything extracted from one document.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub document_id: String,
    pub title: String,
    /// Cell records of every table, row-major, per-table coordinates.
    pub records: Vec<TableCellRecord>,
    /// The same cells grouped by table.
    pub tables: Vec<TextTable>,
}

/// Fetch `document_id` and extract every top-level table.
///
/// A response without a body is an error rather than an empty result.
pub async fn run_extraction(client: &DocsClient, document_id: &str) -> Result<Extraction> {
    let document = client.get_document(document_id).await?;

    let content = document
        .content()
        .ok_or_else(|| DocsError::MissingBody(document_id.to_string()))?;

    let records = extract_table_cells(content);
    let tables = extract_tables(content);
    info!(tables = tables.len(), cells = records.len(), "Extracted tables");

    Ok(Extraction {
        document_id: document_id.to_string(),
        title: document.title.clone(),
        records,
        tables,
    })
}
