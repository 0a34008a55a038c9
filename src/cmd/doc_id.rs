use anyhow::Result;

pub fn cmd_doc_id(input: &str) -> Result<()> {
    println!("{}", doctab::resolve_document_id(input)?);
    Ok(())
}
