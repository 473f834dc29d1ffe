//! Docs REST collaborator.
//!
//! Thin, stateless wrapper over the documents endpoints. Edit requests pass
//! through opaquely; this layer never inspects or validates their shapes, and
//! malformed batches are the service's to reject.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Value, json};

use tabdoc_core::Document;

use crate::auth::TokenProvider;
use crate::error::ApiError;
use crate::rest::read_json;

const DOCS_BASE: &str = "https://docs.googleapis.com/v1/documents";

/// Result of a batchUpdate round trip: one reply per request, in order.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchUpdateResponse {
    pub document_id: String,
    pub replies: Vec<Value>,
}

/// A freshly created document.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatedDocument {
    pub document_id: String,
    pub title: String,
}

/// Client for the Docs API. Cheap to clone; every call fetches fresh state.
#[derive(Clone)]
pub struct DocsClient {
    http: reqwest::Client,
    tokens: Arc<TokenProvider>,
}

impl DocsClient {
    pub fn new(http: reqwest::Client, tokens: Arc<TokenProvider>) -> Self {
        Self { http, tokens }
    }

    /// Fetch a document snapshot, optionally with all tab content inlined.
    pub async fn fetch_document(
        &self,
        document_id: &str,
        include_tabs: bool,
    ) -> Result<Document, ApiError> {
        let token = self.tokens.token().await?;
        let response = self
            .http
            .get(format!("{DOCS_BASE}/{document_id}"))
            .query(&[("includeTabsContent", include_tabs)])
            .bearer_auth(token)
            .send()
            .await?;
        read_json(response, "docs").await
    }

    /// Create an empty document with the given title.
    pub async fn create_document(&self, title: &str) -> Result<CreatedDocument, ApiError> {
        let token = self.tokens.token().await?;
        let response = self
            .http
            .post(DOCS_BASE)
            .bearer_auth(token)
            .json(&json!({ "title": title }))
            .send()
            .await?;
        read_json(response, "docs").await
    }

    /// Forward a batch of edit requests for execution.
    pub async fn execute_edits(
        &self,
        document_id: &str,
        requests: &[Value],
    ) -> Result<BatchUpdateResponse, ApiError> {
        let token = self.tokens.token().await?;
        let response = self
            .http
            .post(format!("{DOCS_BASE}/{document_id}:batchUpdate"))
            .bearer_auth(token)
            .json(&json!({ "requests": requests }))
            .send()
            .await?;
        read_json(response, "docs").await
    }
}
