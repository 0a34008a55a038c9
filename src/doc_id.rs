//! Document identifier resolution from URLs or bare ids.

use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Document fetched when neither the command line nor the config names one.
pub const DEFAULT_DOCUMENT_ID: &str = "1yiZrWz0-1bqhvk4Rsrcj1TU5SjPn3_KKoYRNA40gJa4";

static PATH_PATTERNS: Lazy<[Regex; 2]> = Lazy::new(|| {
    [
        Regex::new(r"/document/d/([a-zA-Z0-9_-]+)").expect("valid regex"),
        Regex::new(r"/document/u/\d+/d/([a-zA-Z0-9_-]+)").expect("valid regex"),
    ]
});

static BARE_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("valid regex"));

/// Resolve a Google Docs URL or a bare document id to the id.
///
/// Accepts `/document/d/{id}` and `/document/u/{n}/d/{id}` paths, an `id`
/// query parameter, or an id on its own.
pub fn resolve_document_id(input: &str) -> Result<String> {
    let input = input.trim();

    for pattern in PATH_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(input) {
            return Ok(caps[1].to_string());
        }
    }

    if let Ok(url) = url::Url::parse(input) {
        if let Some((_, id)) = url.query_pairs().find(|(k, _)| k == "id") {
            if !id.is_empty() {
                return Ok(id.into_owned());
            }
        }
        bail!("could not extract document ID from URL: {input}");
    }

    if BARE_ID.is_match(input) {
        return Ok(input.to_string());
    }

    bail!("could not extract document ID from: {input}")
}
