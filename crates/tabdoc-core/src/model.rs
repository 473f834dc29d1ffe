//! Wire model of the Docs document resource.
//!
//! Mirrors the JSON shapes the Docs API returns (camelCase on the wire),
//! limited to the pieces this system interprets: the tab forest and the
//! paragraph/text-run structure of content bodies. Everything else in a
//! structural element (tables, section breaks, images) is opaque to us and
//! simply absent from the model; serde skips the unknown keys.

use serde::{Deserialize, Serialize};

/// A document snapshot as fetched from the service.
///
/// Legacy documents created before tabs existed carry a flat `body` and an
/// empty `tabs` list; tabbed documents carry their content inside the tabs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    pub document_id: String,
    pub title: String,
    /// Flat content body of a legacy tab-less document.
    pub body: Option<Body>,
    /// Top-level tabs, in sibling order. Each may nest further.
    pub tabs: Vec<Tab>,
}

impl Document {
    /// Document title, with the service's placeholder for untitled documents.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() { "Untitled" } else { &self.title }
    }
}

/// One tab: properties, optional content, ordered children.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tab {
    pub tab_properties: TabProperties,
    pub document_tab: Option<DocumentTab>,
    pub child_tabs: Vec<Tab>,
}

impl Tab {
    pub fn id(&self) -> &str {
        &self.tab_properties.tab_id
    }

    pub fn title(&self) -> &str {
        &self.tab_properties.title
    }

    pub fn body(&self) -> Option<&Body> {
        self.document_tab.as_ref().map(|dt| &dt.body)
    }
}

/// Tab identity and position. `tab_id` is assigned by the service and
/// immutable; `title` is user-editable and not guaranteed unique.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TabProperties {
    pub tab_id: String,
    pub title: String,
    /// Position among siblings.
    pub index: i32,
}

/// Document-typed tab payload, holding the tab's content body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentTab {
    pub body: Body,
}

/// An ordered sequence of block-level structural elements.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Body {
    pub content: Vec<StructuralElement>,
}

/// One block-level element. Offsets live in the service's monotonically
/// increasing character space; `end_index` is one past the element's last
/// addressable character.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StructuralElement {
    pub start_index: Option<i64>,
    pub end_index: Option<i64>,
    /// Present only for paragraph elements; other element kinds are opaque.
    pub paragraph: Option<Paragraph>,
}

/// A styled paragraph: named style plus ordered inline elements.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Paragraph {
    pub paragraph_style: ParagraphStyle,
    pub elements: Vec<ParagraphElement>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParagraphStyle {
    pub named_style_type: NamedStyle,
}

/// Named paragraph styles the extractor maps to markdown prefixes.
///
/// The service's style vocabulary is open-ended; anything we don't recognize
/// deserializes as [`NamedStyle::Other`] and renders without a prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NamedStyle {
    #[default]
    #[serde(rename = "NORMAL_TEXT")]
    NormalText,
    #[serde(rename = "TITLE")]
    Title,
    #[serde(rename = "SUBTITLE")]
    Subtitle,
    #[serde(rename = "HEADING_1")]
    Heading1,
    #[serde(rename = "HEADING_2")]
    Heading2,
    #[serde(rename = "HEADING_3")]
    Heading3,
    #[serde(rename = "HEADING_4")]
    Heading4,
    #[serde(rename = "HEADING_5")]
    Heading5,
    #[serde(rename = "HEADING_6")]
    Heading6,
    #[serde(other)]
    Other,
}

impl NamedStyle {
    /// Markdown block prefix for this style; empty for body text.
    pub fn prefix(self) -> &'static str {
        match self {
            NamedStyle::Title | NamedStyle::Heading1 => "# ",
            NamedStyle::Subtitle | NamedStyle::Heading2 => "## ",
            NamedStyle::Heading3 => "### ",
            NamedStyle::Heading4 => "#### ",
            NamedStyle::Heading5 => "##### ",
            NamedStyle::Heading6 => "###### ",
            NamedStyle::NormalText | NamedStyle::Other => "",
        }
    }
}

/// One inline element. Elements without a text run (page breaks, inline
/// images) contribute nothing to extraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParagraphElement {
    pub text_run: Option<TextRun>,
}

/// A run of text. The service terminates every paragraph's last run with a
/// structural newline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextRun {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_from_wire_json() {
        let doc: Document = serde_json::from_str(
            r#"{
                "documentId": "doc1",
                "title": "Plan",
                "tabs": [{
                    "tabProperties": {"tabId": "t.0", "title": "Overview", "index": 0},
                    "documentTab": {"body": {"content": [
                        {"startIndex": 1, "endIndex": 7, "paragraph": {
                            "paragraphStyle": {"namedStyleType": "HEADING_1"},
                            "elements": [{"textRun": {"content": "Intro\n"}}]
                        }}
                    ]}},
                    "childTabs": []
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(doc.document_id, "doc1");
        assert_eq!(doc.tabs.len(), 1);
        let tab = &doc.tabs[0];
        assert_eq!(tab.id(), "t.0");
        assert_eq!(tab.title(), "Overview");
        let body = tab.body().unwrap();
        assert_eq!(body.content[0].end_index, Some(7));
        let para = body.content[0].paragraph.as_ref().unwrap();
        assert_eq!(para.paragraph_style.named_style_type, NamedStyle::Heading1);
        assert_eq!(para.elements[0].text_run.as_ref().unwrap().content, "Intro\n");
    }

    #[test]
    fn test_missing_fields_default() {
        // The API omits keys freely; everything must have a default.
        let doc: Document = serde_json::from_str(r#"{"documentId": "d"}"#).unwrap();
        assert!(doc.body.is_none());
        assert!(doc.tabs.is_empty());
        assert_eq!(doc.display_title(), "Untitled");
    }

    #[test]
    fn test_unknown_named_style_is_other() {
        let style: ParagraphStyle =
            serde_json::from_str(r#"{"namedStyleType": "SOME_FUTURE_STYLE"}"#).unwrap();
        assert_eq!(style.named_style_type, NamedStyle::Other);
        assert_eq!(style.named_style_type.prefix(), "");
    }

    #[test]
    fn test_unknown_structural_element_kinds_ignored() {
        // A table element carries no `paragraph`; it must parse and stay opaque.
        let body: Body = serde_json::from_str(
            r#"{"content": [{"startIndex": 1, "endIndex": 40, "table": {"rows": 2}}]}"#,
        )
        .unwrap();
        assert_eq!(body.content.len(), 1);
        assert!(body.content[0].paragraph.is_none());
    }
}
