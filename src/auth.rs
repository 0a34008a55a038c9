//! Access tokens for the Docs API.
//!
//! Supports:
//! - Service-account keys via the OAuth 2.0 JWT bearer grant (RS256)
//! - Pre-obtained bearer tokens
//!
//! Tokens are requested once per run and never cached or refreshed.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::credentials::ServiceAccountKey;
use crate::error::DocsError;

/// Read-only access to Google Docs.
pub const DOCUMENTS_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/documents.readonly";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Lifetime of a signed assertion. Google rejects anything above one hour.
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Produces a bearer token for API requests.
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn access_token(&self, client: &Client) -> Result<String>;
}

/// A bearer token obtained elsewhere.
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[async_trait]
impl TokenSource for StaticToken {
    async fn access_token(&self, _client: &Client) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// JWT claim set for the bearer grant.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// Exchanges a signed service-account assertion for an access token.
pub struct ServiceAccountAuth {
    key: ServiceAccountKey,
    scope: String,
}

impl ServiceAccountAuth {
    /// Authenticate with the read-only documents scope.
    #[must_use]
    pub fn new(key: ServiceAccountKey) -> Self {
        Self::with_scope(key, DOCUMENTS_READONLY_SCOPE)
    }

    #[must_use]
    pub fn with_scope(key: ServiceAccountKey, scope: impl Into<String>) -> Self {
        Self {
            key,
            scope: scope.into(),
        }
    }

    /// Claims for an assertion issued at `now` (unix seconds).
    pub fn claims(&self, now: i64) -> Claims {
        Claims {
            iss: self.key.client_email.clone(),
            scope: self.scope.clone(),
            aud: self.key.token_uri.clone(),
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        }
    }

    /// Sign an assertion with the key's private key.
    pub fn assertion(&self, now: i64) -> Result<String> {
        let mut header = Header::new(Algorithm::RS256);
        header.kid.clone_from(&self.key.private_key_id);

        let key = EncodingKey::from_rsa_pem(self.key.private_key.as_bytes())
            .context("service-account private key is not a valid RSA PEM")?;

        jsonwebtoken::encode(&header, &self.claims(now), &key)
            .context("failed to sign service-account assertion")
    }
}

#[async_trait]
impl TokenSource for ServiceAccountAuth {
    #[instrument(skip(self, client), fields(account = %self.key.client_email))]
    async fn access_token(&self, client: &Client) -> Result<String> {
        let assertion = self.assertion(Utc::now().timestamp())?;
        debug!(token_uri = %self.key.token_uri, "Exchanging assertion");

        let response = client
            .post(&self.key.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await
            .context("failed to reach token endpoint")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DocsError::TokenExchange { status, body }.into());
        }

        let token: TokenResponse = response
            .json()
            .await
            .context("failed to parse token response")?;

        info!(expires_in = ?token.expires_in, "Access token granted");
        Ok(token.access_token)
    }
}
