//! Typed failures from the Docs and token endpoints.
//!
//! Application code carries these inside `anyhow::Error`; the binary
//! reports every cause the same way.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocsError {
    /// The Docs API answered with a non-success status.
    #[error("Docs API returned {status}: {body}")]
    Api { status: StatusCode, body: String },

    /// The token endpoint refused the service-account assertion.
    #[error("token exchange failed with {status}: {body}")]
    TokenExchange { status: StatusCode, body: String },

    /// The document response had no `body`.
    #[error("document {0} has no body content")]
    MissingBody(String),
}
