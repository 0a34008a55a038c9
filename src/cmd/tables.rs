use std::io::Write;

use anyhow::Result;

use doctab::output::render;
use doctab::{run_extraction, OutputFormat};

use super::client::build_target;
use crate::GlobalArgs;

pub async fn cmd_tables(
    global: &GlobalArgs,
    document: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let target = build_target(global, document)?;
    let extraction = run_extraction(&target.client, &target.document_id).await?;

    let out = render(format, &extraction.records, &extraction.tables)?;
    std::io::stdout().write_all(out.as_bytes())?;
    Ok(())
}
