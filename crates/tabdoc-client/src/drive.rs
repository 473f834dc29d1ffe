//! Drive file-search collaborator.
//!
//! Limited to listing Docs files by name, newest first. Search terms are
//! interpolated into Drive's single-quoted query syntax, so embedded quotes
//! must be escaped before interpolation.

use std::sync::Arc;

use serde::Deserialize;

use crate::auth::TokenProvider;
use crate::error::ApiError;
use crate::rest::read_json;

const DRIVE_FILES_URL: &str = "https://www.googleapis.com/drive/v3/files";
const DOCS_MIME_TYPE: &str = "application/vnd.google-apps.document";

/// One search hit.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DriveFile {
    pub id: String,
    pub name: String,
    pub modified_time: String,
    pub web_view_link: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileList {
    files: Vec<DriveFile>,
}

/// Client for the Drive API.
#[derive(Clone)]
pub struct DriveClient {
    http: reqwest::Client,
    tokens: Arc<TokenProvider>,
}

impl DriveClient {
    pub fn new(http: reqwest::Client, tokens: Arc<TokenProvider>) -> Self {
        Self { http, tokens }
    }

    /// Search Docs files by name substring, most recently modified first.
    /// An empty or absent term lists recent documents.
    pub async fn search_documents(
        &self,
        name_contains: Option<&str>,
        max_results: u32,
    ) -> Result<Vec<DriveFile>, ApiError> {
        let token = self.tokens.token().await?;
        let q = build_query(name_contains);
        let page_size = max_results.to_string();

        let response = self
            .http
            .get(DRIVE_FILES_URL)
            .query(&[
                ("q", q.as_str()),
                ("pageSize", page_size.as_str()),
                ("fields", "files(id, name, modifiedTime, webViewLink)"),
                ("orderBy", "modifiedTime desc"),
            ])
            .bearer_auth(token)
            .send()
            .await?;

        let list: FileList = read_json(response, "drive").await?;
        Ok(list.files)
    }
}

/// Drive query for non-trashed Docs files, name-filtered when a term is
/// given.
fn build_query(name_contains: Option<&str>) -> String {
    let mut q = format!("mimeType='{DOCS_MIME_TYPE}' and trashed=false");
    if let Some(term) = name_contains.filter(|term| !term.is_empty()) {
        q.push_str(&format!(" and name contains '{}'", escape_query(term)));
    }
    q
}

/// Escape a user-supplied substring for Drive's single-quoted query strings.
fn escape_query(term: &str) -> String {
    term.replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_without_term() {
        assert_eq!(
            build_query(None),
            "mimeType='application/vnd.google-apps.document' and trashed=false"
        );
    }

    #[test]
    fn test_empty_term_means_no_name_filter() {
        assert_eq!(build_query(Some("")), build_query(None));
    }

    #[test]
    fn test_query_with_term() {
        assert_eq!(
            build_query(Some("roadmap")),
            "mimeType='application/vnd.google-apps.document' and trashed=false \
             and name contains 'roadmap'"
        );
    }

    #[test]
    fn test_single_quote_escaped() {
        assert_eq!(escape_query("Q3 'draft'"), "Q3 \\'draft\\'");
        assert!(build_query(Some("it's")).contains("name contains 'it\\'s'"));
    }

    #[test]
    fn test_file_list_parses() {
        let list: FileList = serde_json::from_str(
            r#"{"files": [{
                "id": "f1",
                "name": "Roadmap",
                "modifiedTime": "2025-11-02T10:00:00Z",
                "webViewLink": "https://docs.google.com/document/d/f1/edit"
            }]}"#,
        )
        .unwrap();
        assert_eq!(list.files.len(), 1);
        assert_eq!(list.files[0].name, "Roadmap");
    }
}
