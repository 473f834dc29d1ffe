//! MCP server exposing Google Docs editing with tab support.
//!
//! Each tool fetches a fresh document snapshot, runs the tab-tree layer from
//! `tabdoc-core` over it, and forwards the transformed payload through the
//! `tabdoc-client` collaborators. Invocations are independent and stateless;
//! the remote service is the sole point of serialization for conflicting
//! edits.
//!
//! ## Module Structure
//!
//! - `models`: request and response types for the MCP tools

mod models;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde_json::{Value, json};

use tabdoc_client::{ApiError, DocsClient, DriveClient};
use tabdoc_core::{
    Document, TabError, append_offset, append_payload, extract_text, flatten_tabs,
    render_document, resolve_tab, scope_requests,
};

pub use models::*;

/// MCP server over the Docs and Drive collaborators.
#[derive(Clone)]
pub struct TabdocMcp {
    docs: DocsClient,
    drive: DriveClient,
    tool_router: ToolRouter<Self>,
}

impl TabdocMcp {
    pub fn new(docs: DocsClient, drive: DriveClient) -> Self {
        Self { docs, drive, tool_router: Self::tool_router() }
    }

    /// Web link for a document id.
    fn doc_link(document_id: &str) -> String {
        format!("https://docs.google.com/document/d/{document_id}/edit")
    }

    fn api_error(e: ApiError) -> McpError {
        McpError::internal_error(e.to_string(), None)
    }

    fn tab_error(e: TabError) -> McpError {
        McpError::invalid_params(e.to_string(), None)
    }

    /// Fetch a snapshot with all tab content inlined.
    async fn fetch(&self, document_id: &str) -> Result<Document, McpError> {
        self.docs
            .fetch_document(document_id, true)
            .await
            .map_err(Self::api_error)
    }

    /// Resolve the tab id used for scoping edit requests.
    ///
    /// An explicit id is trusted as-is (no fetch); a title alone forces a
    /// snapshot fetch to find it. An empty result means "do not scope".
    async fn resolve_scope_id(
        &self,
        document_id: &str,
        tab_id: Option<&str>,
        tab_title: Option<&str>,
    ) -> Result<String, McpError> {
        if let Some(id) = tab_id.filter(|id| !id.is_empty()) {
            return Ok(id.to_string());
        }
        match tab_title.filter(|title| !title.is_empty()) {
            Some(title) => {
                let doc = self.fetch(document_id).await?;
                let resolved =
                    resolve_tab(&doc, None, Some(title)).map_err(Self::tab_error)?;
                Ok(resolved.tab_id.to_string())
            }
            None => Ok(String::new()),
        }
    }
}

fn json_result(value: Value) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(&value)
        .map_err(|e| McpError::internal_error(format!("serialize result: {e}"), None))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

fn text_result(text: String) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

#[tool_router]
impl TabdocMcp {
    // ========================================================================
    // Read Tools
    // ========================================================================

    #[tool(
        description = "List all tabs in a Google Doc, in reading order with nesting depth.",
        annotations(read_only_hint = true, destructive_hint = false, open_world_hint = true)
    )]
    async fn list_tabs(
        &self,
        Parameters(req): Parameters<ListTabsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let doc = self.fetch(&req.document_id).await?;
        let tabs: Vec<TabEntry> = flatten_tabs(&doc.tabs)
            .iter()
            .map(|entry| TabEntry {
                tab_id: entry.id().to_string(),
                title: entry.title().to_string(),
                index: entry.index(),
                depth: entry.depth,
            })
            .collect();

        let count = tabs.len();
        json_result(json!({
            "documentTitle": doc.display_title(),
            "tabs": tabs,
            "count": count,
        }))
    }

    #[tool(
        description = "Read a Google Doc tab and return its content as markdown-formatted text. \
            If no tab is specified, reads all tabs with headers.",
        annotations(read_only_hint = true, destructive_hint = false, open_world_hint = true)
    )]
    async fn read_document(
        &self,
        Parameters(req): Parameters<ReadDocumentRequest>,
    ) -> Result<CallToolResult, McpError> {
        let doc = self.fetch(&req.document_id).await?;

        let tab_id = req.tab_id.as_deref().filter(|id| !id.is_empty());
        let tab_title = req.tab_title.as_deref().filter(|title| !title.is_empty());

        if tab_id.is_some() || tab_title.is_some() {
            let resolved = resolve_tab(&doc, tab_id, tab_title).map_err(Self::tab_error)?;
            let tab_name = flatten_tabs(&doc.tabs)
                .iter()
                .find(|entry| entry.id() == resolved.tab_id)
                .map(|entry| entry.title().to_string())
                .unwrap_or_default();
            let text = extract_text(resolved.body);
            return text_result(format!("# {} — [{tab_name}]\n\n{text}", doc.display_title()));
        }

        text_result(render_document(&doc))
    }

    #[tool(
        description = "Get metadata about a Google Doc (title, ID, link, tabs). Lightweight.",
        annotations(read_only_hint = true, destructive_hint = false, open_world_hint = true)
    )]
    async fn get_document_info(
        &self,
        Parameters(req): Parameters<GetDocumentInfoRequest>,
    ) -> Result<CallToolResult, McpError> {
        let doc = self.fetch(&req.document_id).await?;
        let document_id = if doc.document_id.is_empty() {
            req.document_id.clone()
        } else {
            doc.document_id.clone()
        };
        let tabs: Vec<TabInfo> = flatten_tabs(&doc.tabs)
            .iter()
            .map(|entry| TabInfo {
                tab_id: entry.id().to_string(),
                title: entry.title().to_string(),
            })
            .collect();

        json_result(json!({
            "title": doc.display_title(),
            "documentId": document_id,
            "link": Self::doc_link(&document_id),
            "tabs": tabs,
        }))
    }

    #[tool(
        description = "Search for Google Docs in Drive by name, most recently modified first.",
        annotations(read_only_hint = true, destructive_hint = false, open_world_hint = true)
    )]
    async fn list_documents(
        &self,
        Parameters(req): Parameters<ListDocumentsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let max_results = req.max_results.min(MAX_RESULTS_CAP);
        let files = self
            .drive
            .search_documents(req.query.as_deref(), max_results)
            .await
            .map_err(Self::api_error)?;

        if files.is_empty() {
            return json_result(json!({ "documents": [], "message": "No documents found" }));
        }

        let documents: Vec<DocumentHit> = files
            .into_iter()
            .map(|file| DocumentHit {
                document_id: file.id,
                title: file.name,
                modified_time: file.modified_time,
                link: file.web_view_link,
            })
            .collect();
        let count = documents.len();

        json_result(json!({ "documents": documents, "count": count }))
    }

    // ========================================================================
    // Edit Tools
    // ========================================================================

    #[tool(
        description = "Create a new Google Doc, optionally with initial text content.",
        annotations(read_only_hint = false, destructive_hint = false, open_world_hint = true)
    )]
    #[tracing::instrument(skip(self, req), name = "mcp.create_document")]
    async fn create_document(
        &self,
        Parameters(req): Parameters<CreateDocumentRequest>,
    ) -> Result<CallToolResult, McpError> {
        let created = self
            .docs
            .create_document(&req.title)
            .await
            .map_err(Self::api_error)?;

        if let Some(text) = req.initial_text.as_deref().filter(|text| !text.is_empty()) {
            let requests = vec![json!({
                "insertText": { "location": { "index": 1 }, "text": text }
            })];
            self.docs
                .execute_edits(&created.document_id, &requests)
                .await
                .map_err(Self::api_error)?;
        }

        tracing::info!(doc = %created.document_id, "document created");

        json_result(json!({
            "documentId": created.document_id,
            "title": req.title,
            "link": Self::doc_link(&created.document_id),
        }))
    }

    #[tool(
        description = "Append text to the end of a Google Doc tab (default: first tab).",
        annotations(read_only_hint = false, destructive_hint = false, open_world_hint = true)
    )]
    #[tracing::instrument(skip(self, req), name = "mcp.append_text")]
    async fn append_text(
        &self,
        Parameters(req): Parameters<AppendTextRequest>,
    ) -> Result<CallToolResult, McpError> {
        let doc = self.fetch(&req.document_id).await?;
        let resolved = resolve_tab(&doc, req.tab_id.as_deref(), req.tab_title.as_deref())
            .map_err(Self::tab_error)?;

        let offset = append_offset(resolved.body);
        let payload = append_payload(&req.text, offset);

        let mut location = json!({ "index": offset });
        if !resolved.tab_id.is_empty() {
            location["tabId"] = json!(resolved.tab_id);
        }
        let requests = vec![json!({
            "insertText": { "location": location, "text": payload }
        })];

        self.docs
            .execute_edits(&req.document_id, &requests)
            .await
            .map_err(Self::api_error)?;

        json_result(json!({
            "status": "ok",
            "appendedChars": payload.chars().count(),
            "atIndex": offset,
            "tabId": resolved.tab_id,
        }))
    }

    #[tool(
        description = "Insert text at a specific character index in a Google Doc tab.",
        annotations(read_only_hint = false, destructive_hint = false, open_world_hint = true)
    )]
    #[tracing::instrument(skip(self, req), name = "mcp.insert_text")]
    async fn insert_text(
        &self,
        Parameters(req): Parameters<InsertTextRequest>,
    ) -> Result<CallToolResult, McpError> {
        let scope_id = self
            .resolve_scope_id(&req.document_id, req.tab_id.as_deref(), req.tab_title.as_deref())
            .await?;

        let mut location = json!({ "index": req.index });
        if !scope_id.is_empty() {
            location["tabId"] = json!(scope_id);
        }
        let requests = vec![json!({
            "insertText": { "location": location, "text": req.text }
        })];

        self.docs
            .execute_edits(&req.document_id, &requests)
            .await
            .map_err(Self::api_error)?;

        json_result(json!({
            "status": "ok",
            "insertedChars": req.text.chars().count(),
            "atIndex": req.index,
            "tabId": scope_id,
        }))
    }

    #[tool(
        description = "Find and replace all occurrences of text in a Google Doc. \
            Can be limited to a specific tab.",
        annotations(read_only_hint = false, destructive_hint = true, open_world_hint = true)
    )]
    #[tracing::instrument(skip(self, req), name = "mcp.replace_text")]
    async fn replace_text(
        &self,
        Parameters(req): Parameters<ReplaceTextRequest>,
    ) -> Result<CallToolResult, McpError> {
        let scope_id = self
            .resolve_scope_id(&req.document_id, req.tab_id.as_deref(), req.tab_title.as_deref())
            .await?;

        let mut request = json!({
            "replaceAllText": {
                "containsText": { "text": req.find, "matchCase": req.match_case },
                "replaceText": req.replace_with,
            }
        });
        if !scope_id.is_empty() {
            request["replaceAllText"]["tabsCriteria"] = json!({ "tabIds": [scope_id] });
        }

        let result = self
            .docs
            .execute_edits(&req.document_id, &[request])
            .await
            .map_err(Self::api_error)?;

        let occurrences = result
            .replies
            .first()
            .and_then(|reply| reply.get("replaceAllText"))
            .and_then(|reply| reply.get("occurrencesChanged"))
            .and_then(Value::as_i64)
            .unwrap_or(0);

        tracing::info!(doc = %req.document_id, occurrences, "replace_text applied");

        json_result(json!({
            "status": "ok",
            "occurrencesReplaced": occurrences,
            "tabId": scope_id,
        }))
    }

    #[tool(
        description = "Execute a raw batchUpdate on a Google Doc: formatting, styling, tables, \
            images, and any other documented request shape. When tab_id or tab_title is given, \
            requests without an explicit tab scope have the resolved tab injected automatically.",
        annotations(read_only_hint = false, destructive_hint = true, open_world_hint = true)
    )]
    #[tracing::instrument(skip(self, req), name = "mcp.batch_update")]
    async fn batch_update(
        &self,
        Parameters(req): Parameters<BatchUpdateRequest>,
    ) -> Result<CallToolResult, McpError> {
        let scope_id = self
            .resolve_scope_id(&req.document_id, req.tab_id.as_deref(), req.tab_title.as_deref())
            .await?;

        let requests = scope_requests(req.requests, &scope_id);
        let result = self
            .docs
            .execute_edits(&req.document_id, &requests)
            .await
            .map_err(Self::api_error)?;

        tracing::info!(
            doc = %req.document_id,
            requests = requests.len(),
            replies = result.replies.len(),
            "batch_update applied"
        );

        json_result(json!({
            "status": "ok",
            "repliesCount": result.replies.len(),
            "documentId": if result.document_id.is_empty() {
                req.document_id.clone()
            } else {
                result.document_id
            },
            "tabId": scope_id,
        }))
    }
}

#[tool_handler]
impl ServerHandler for TabdocMcp {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.instructions = Some(
            "Google Docs MCP server with multi-tab support. Reads render tab content as \
             markdown; edits target a tab via tab_id or tab_title (first tab by default), \
             and batch_update requests without an explicit tab scope are scoped \
             automatically."
                .into(),
        );
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info
    }
}
