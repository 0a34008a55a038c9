use anyhow::Result;

use doctab::{find_points, render_grid, run_extraction};

use super::client::build_target;
use crate::GlobalArgs;

pub async fn cmd_grid(global: &GlobalArgs, document: Option<String>) -> Result<()> {
    let target = build_target(global, document)?;
    let extraction = run_extraction(&target.client, &target.document_id).await?;

    let points = find_points(&extraction.tables);
    if points.is_empty() {
        println!("No valid coordinate data found in the document.");
        return Ok(());
    }

    print!("{}", render_grid(&points)?);
    Ok(())
}
