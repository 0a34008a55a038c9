//! `doctab` - Google Docs table extraction
//!
//! # Features
//!
//! - **Authentication**: service-account keys (JWT bearer grant) or bearer tokens
//! - **Extraction**: every top-level table flattened to `(x, y, char)` records
//! - **Grids**: coordinate tables rendered as character grids
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use doctab::{run_extraction, DocsClient, ServiceAccountAuth, ServiceAccountKey};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let key = ServiceAccountKey::from_file(Path::new("credentials.json"))?;
//!     let client = DocsClient::new(Box::new(ServiceAccountAuth::new(key)))?;
//!     let extraction = run_extraction(&client, "1abc").await?;
//!     for record in &extraction.records {
//!         println!("({}, {}) {}", record.x, record.y, record.char);
//!     }
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod config;
pub mod credentials;
pub mod doc_id;
pub mod document;
pub mod error;
pub mod extract;
pub mod grid;
pub mod http_client;
pub mod output;
pub mod pipeline;

pub use auth::{ServiceAccountAuth, StaticToken, TokenSource, DOCUMENTS_READONLY_SCOPE};
pub use config::Config;
pub use credentials::ServiceAccountKey;
pub use doc_id::{resolve_document_id, DEFAULT_DOCUMENT_ID};
pub use document::Document;
pub use error::DocsError;
pub use extract::{cell_text, extract_table_cells, extract_tables, TableCellRecord, TextTable};
pub use grid::{find_points, render_grid, GridPoint};
pub use http_client::DocsClient;
pub use output::OutputFormat;
pub use pipeline::{run_extraction, Extraction};

/// Version of doctab
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
