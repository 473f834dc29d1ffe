//! Tab resolution: caller-supplied id/title to a concrete content body.

use crate::error::TabError;
use crate::flatten::flatten_tabs;
use crate::model::{Body, Document};

/// Shared body for legacy documents fetched without one and for content-less
/// tabs; keeps the resolved reference tied to the snapshot's lifetime.
static EMPTY_BODY: Body = Body { content: Vec::new() };

/// A resolved tab target: the content body plus the canonical tab id.
///
/// `tab_id` is empty for legacy tab-less documents, which signals downstream
/// scoping to leave edit requests untouched.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedTab<'a> {
    pub body: &'a Body,
    pub tab_id: &'a str,
}

/// Resolve the target tab of an operation.
///
/// - Neither id nor title given: a tab-less document resolves to its flat
///   body with an empty id; otherwise the first tab in pre-order wins.
/// - An id is matched exactly (ids are opaque, case-sensitive tokens) and
///   takes precedence over any title.
/// - A title alone is matched case-insensitively, first match in pre-order.
///   Later tabs with a duplicate title are unreachable by title lookup.
///
/// A non-empty id or title that matches nothing is an error carrying both
/// requested values.
pub fn resolve_tab<'a>(
    doc: &'a Document,
    tab_id: Option<&str>,
    tab_title: Option<&str>,
) -> Result<ResolvedTab<'a>, TabError> {
    let tab_id = tab_id.unwrap_or("");
    let tab_title = tab_title.unwrap_or("");

    let flat = flatten_tabs(&doc.tabs);

    if tab_id.is_empty() && tab_title.is_empty() {
        return Ok(match flat.first() {
            Some(first) => ResolvedTab {
                body: first.tab.body().unwrap_or(&EMPTY_BODY),
                tab_id: first.id(),
            },
            None => ResolvedTab {
                body: doc.body.as_ref().unwrap_or(&EMPTY_BODY),
                tab_id: "",
            },
        });
    }

    let found = if !tab_id.is_empty() {
        flat.iter().find(|entry| entry.id() == tab_id)
    } else {
        let want = tab_title.to_lowercase();
        flat.iter().find(|entry| entry.title().to_lowercase() == want)
    };

    match found {
        Some(entry) => Ok(ResolvedTab {
            body: entry.tab.body().unwrap_or(&EMPTY_BODY),
            tab_id: entry.id(),
        }),
        None => Err(TabError::TabNotFound {
            tab_id: tab_id.to_string(),
            tab_title: tab_title.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocumentTab, ParagraphElement, StructuralElement, Tab, TabProperties, TextRun};

    fn tab(id: &str, title: &str, children: Vec<Tab>) -> Tab {
        Tab {
            tab_properties: TabProperties {
                tab_id: id.to_string(),
                title: title.to_string(),
                index: 0,
            },
            document_tab: Some(DocumentTab { body: Body::default() }),
            child_tabs: children,
        }
    }

    fn doc_with_tabs(tabs: Vec<Tab>) -> Document {
        Document { document_id: "d".to_string(), tabs, ..Document::default() }
    }

    #[test]
    fn test_default_resolves_first_tab() {
        let doc = doc_with_tabs(vec![tab("x", "X", vec![]), tab("y", "Y", vec![])]);
        let resolved = resolve_tab(&doc, None, None).unwrap();
        assert_eq!(resolved.tab_id, "x");
    }

    #[test]
    fn test_legacy_document_resolves_flat_body() {
        let mut doc = doc_with_tabs(vec![]);
        doc.body = Some(Body {
            content: vec![StructuralElement {
                start_index: Some(1),
                end_index: Some(6),
                paragraph: Some(crate::model::Paragraph {
                    elements: vec![ParagraphElement {
                        text_run: Some(TextRun { content: "hi\n".to_string() }),
                    }],
                    ..Default::default()
                }),
            }],
        });

        let resolved = resolve_tab(&doc, None, None).unwrap();
        assert_eq!(resolved.tab_id, "");
        assert_eq!(resolved.body.content.len(), 1);
    }

    #[test]
    fn test_resolve_by_id_exact() {
        let doc = doc_with_tabs(vec![tab("t.abc", "Notes", vec![tab("t.def", "Inner", vec![])])]);
        let resolved = resolve_tab(&doc, Some("t.def"), None).unwrap();
        assert_eq!(resolved.tab_id, "t.def");
    }

    #[test]
    fn test_resolve_by_title_case_insensitive_first_wins() {
        let doc = doc_with_tabs(vec![tab("a", "Notes", vec![]), tab("b", "NOTES", vec![])]);
        let resolved = resolve_tab(&doc, None, Some("notes")).unwrap();
        assert_eq!(resolved.tab_id, "a");
    }

    #[test]
    fn test_id_takes_precedence_over_title() {
        let doc = doc_with_tabs(vec![tab("a", "First", vec![]), tab("b", "Second", vec![])]);
        let resolved = resolve_tab(&doc, Some("b"), Some("First")).unwrap();
        assert_eq!(resolved.tab_id, "b");
    }

    #[test]
    fn test_unknown_id_is_error_with_diagnostics() {
        let doc = doc_with_tabs(vec![tab("a", "A", vec![])]);
        let err = resolve_tab(&doc, Some("zzz"), None).unwrap_err();
        let TabError::TabNotFound { tab_id, tab_title } = err;
        assert_eq!(tab_id, "zzz");
        assert_eq!(tab_title, "");
    }

    #[test]
    fn test_unknown_title_is_error() {
        let doc = doc_with_tabs(vec![tab("a", "A", vec![])]);
        assert!(resolve_tab(&doc, None, Some("missing")).is_err());
    }

    #[test]
    fn test_content_less_tab_resolves_empty_body() {
        let mut bare = tab("a", "A", vec![]);
        bare.document_tab = None;
        let doc = doc_with_tabs(vec![bare]);
        let resolved = resolve_tab(&doc, Some("a"), None).unwrap();
        assert!(resolved.body.content.is_empty());
    }
}
