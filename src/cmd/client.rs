use anyhow::Result;
use tracing::debug;

use doctab::{Config, DocsClient, ServiceAccountAuth, ServiceAccountKey, StaticToken, TokenSource};

use crate::GlobalArgs;

/// Resolved target of a fetch: an authenticated client and a document id.
pub struct Target {
    pub client: DocsClient,
    pub document_id: String,
}

/// Merge command-line arguments over the config file and build the client.
///
/// The key file is only read when no bearer token was given.
pub fn build_target(global: &GlobalArgs, document: Option<String>) -> Result<Target> {
    let config = Config::load(global.config.as_deref())?;

    let document_id = doctab::resolve_document_id(&config.document(document))?;
    let api_base = config.api_base(global.api_base.clone());

    let tokens: Box<dyn TokenSource> = if let Some(token) = &global.access_token {
        debug!("Using bearer token from command line");
        Box::new(StaticToken::new(token.clone()))
    } else {
        let path = config.credentials_path(global.credentials.clone());
        debug!(path = %path.display(), "Loading service-account key");
        Box::new(ServiceAccountAuth::new(ServiceAccountKey::from_file(&path)?))
    };

    Ok(Target {
        client: DocsClient::with_api_base(tokens, &api_base)?,
        document_id,
    })
}
