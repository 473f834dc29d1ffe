//! Remote collaborators for tabdoc.
//!
//! Everything that talks to the outside world lives here: startup
//! configuration, service-account authentication, and the two REST clients
//! the tool layer composes: Docs for fetching and editing documents, Drive
//! for finding them. Calls are single round trips with no retry, cache, or
//! conflict handling; the services own those concerns.

pub mod auth;
pub mod config;
pub mod docs;
pub mod drive;
pub mod error;
mod rest;

use std::sync::Arc;

pub use auth::{SCOPES, ServiceAccountKey, TokenProvider};
pub use config::{Config, ConfigError, SERVICE_ACCOUNT_PATH_VAR, SUBJECT_EMAIL_VAR};
pub use docs::{BatchUpdateResponse, CreatedDocument, DocsClient};
pub use drive::{DriveClient, DriveFile};
pub use error::ApiError;

/// Build both clients from a loaded configuration.
///
/// This is the main entry point: it reads the service-account key once and
/// shares one HTTP connection pool and token cache across both clients.
pub fn connect(config: &Config) -> Result<(DocsClient, DriveClient), ApiError> {
    let key = ServiceAccountKey::from_file(&config.service_account_path)?;
    let http = reqwest::Client::new();
    let tokens = Arc::new(TokenProvider::new(key, config.subject_email.clone(), http.clone()));
    Ok((
        DocsClient::new(http.clone(), Arc::clone(&tokens)),
        DriveClient::new(http, tokens),
    ))
}
