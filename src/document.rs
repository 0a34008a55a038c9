//! Google Docs API response types.
//!
//! Only the subset of the `documents.get` response that table extraction
//! reads is modelled; every other field is ignored by serde. List fields
//! default to empty so a sparse response still deserializes.
//!
//! ```text
//! Document → Body → StructuralElement → Table → TableRow → TableCell
//!                                                            └→ StructuralElement → Paragraph → ParagraphElement → TextRun
//! ```

use serde::Deserialize;

/// A document as returned by `GET /v1/documents/{documentId}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub document_id: String,
    #[serde(default)]
    pub title: String,
    pub body: Option<Body>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Body {
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}

/// A content element. Exactly one of the variant fields is set by the API;
/// variants other than paragraphs and tables are not modelled.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuralElement {
    pub paragraph: Option<Paragraph>,
    pub table: Option<Table>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    #[serde(default)]
    pub rows: usize,
    #[serde(default)]
    pub columns: usize,
    #[serde(default)]
    pub table_rows: Vec<TableRow>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    #[serde(default)]
    pub table_cells: Vec<TableCell>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableCell {
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Paragraph {
    #[serde(default)]
    pub elements: Vec<ParagraphElement>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphElement {
    pub text_run: Option<TextRun>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextRun {
    pub content: Option<String>,
}

impl Document {
    /// Top-level content of the body, or `None` when the response has no body.
    pub fn content(&self) -> Option<&[StructuralElement]> {
        self.body.as_ref().map(|b| b.content.as_slice())
    }
}
