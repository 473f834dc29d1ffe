//! MCP request and response types.
//!
//! One request struct per tool; schemars descriptions become the tool input
//! schemas shown to calling agents. `tab_id` beats `tab_title` whenever both
//! are supplied, and leaving both out targets the first tab.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Hard cap on `list_documents` page size.
pub const MAX_RESULTS_CAP: u32 = 100;

// ============================================================================
// Request Types
// ============================================================================

/// List all tabs in a document.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListTabsRequest {
    #[schemars(description = "The document ID (from the URL)")]
    pub document_id: String,
}

/// Read a document, or one tab of it, as markdown text.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ReadDocumentRequest {
    #[schemars(description = "The document ID (from the URL)")]
    pub document_id: String,
    #[schemars(description = "Optional tab ID to read a specific tab")]
    #[serde(default)]
    pub tab_id: Option<String>,
    #[schemars(description = "Optional tab title to read a specific tab (case-insensitive)")]
    #[serde(default)]
    pub tab_title: Option<String>,
}

/// Get lightweight document metadata.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetDocumentInfoRequest {
    #[schemars(description = "The document ID (from the URL)")]
    pub document_id: String,
}

/// Create a new document.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateDocumentRequest {
    #[schemars(description = "Title of the new document")]
    pub title: String,
    #[schemars(description = "Optional initial text content")]
    #[serde(default)]
    pub initial_text: Option<String>,
}

/// Append text to the end of a tab.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct AppendTextRequest {
    #[schemars(description = "The document ID")]
    pub document_id: String,
    #[schemars(description = "Text to append")]
    pub text: String,
    #[schemars(description = "Optional tab ID to target (default: first tab)")]
    #[serde(default)]
    pub tab_id: Option<String>,
    #[schemars(description = "Optional tab title to target (case-insensitive)")]
    #[serde(default)]
    pub tab_title: Option<String>,
}

/// Insert text at a character index.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct InsertTextRequest {
    #[schemars(description = "The document ID")]
    pub document_id: String,
    #[schemars(description = "Text to insert")]
    pub text: String,
    #[schemars(description = "Character index (1-based, 1 = start of the tab)")]
    pub index: i64,
    #[schemars(description = "Optional tab ID to target (default: first tab)")]
    #[serde(default)]
    pub tab_id: Option<String>,
    #[schemars(description = "Optional tab title to target (case-insensitive)")]
    #[serde(default)]
    pub tab_title: Option<String>,
}

/// Find and replace across a document or one tab.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ReplaceTextRequest {
    #[schemars(description = "The document ID")]
    pub document_id: String,
    #[schemars(description = "Text to search for")]
    pub find: String,
    #[schemars(description = "Replacement text")]
    pub replace_with: String,
    #[schemars(description = "Whether to match case (default: true)")]
    #[serde(default = "default_true")]
    pub match_case: bool,
    #[schemars(description = "Optional tab ID to limit replacement to")]
    #[serde(default)]
    pub tab_id: Option<String>,
    #[schemars(description = "Optional tab title to limit replacement to (case-insensitive)")]
    #[serde(default)]
    pub tab_title: Option<String>,
}

/// Forward raw batchUpdate requests, with automatic tab scoping.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct BatchUpdateRequest {
    #[schemars(description = "The document ID")]
    pub document_id: String,
    #[schemars(description = "batchUpdate request objects, forwarded as-is after tab scoping. \
        Any location/range/insertionLocation without a tabId, and any containsText without a \
        tabsCriteria, gets the resolved tab injected.")]
    pub requests: Vec<Value>,
    #[schemars(description = "Optional tab ID to scope unscoped requests to")]
    #[serde(default)]
    pub tab_id: Option<String>,
    #[schemars(description = "Optional tab title (case-insensitive), resolved to a tab ID")]
    #[serde(default)]
    pub tab_title: Option<String>,
}

/// Search Drive for documents by name.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListDocumentsRequest {
    #[schemars(description = "Search term for document names (empty = list recent docs)")]
    #[serde(default)]
    pub query: Option<String>,
    #[schemars(description = "Max number of results (default 20, max 100)")]
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

fn default_true() -> bool {
    true
}

fn default_max_results() -> u32 {
    20
}

// ============================================================================
// Response Types
// ============================================================================

/// One flattened tab in listing order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabEntry {
    pub tab_id: String,
    pub title: String,
    pub index: i32,
    pub depth: usize,
}

/// Tab identity for document metadata.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabInfo {
    pub tab_id: String,
    pub title: String,
}

/// One document listing hit.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentHit {
    pub document_id: String,
    pub title: String,
    pub modified_time: String,
    pub link: String,
}
