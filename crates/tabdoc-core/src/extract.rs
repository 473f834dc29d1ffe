//! Best-effort plain-text rendering of content bodies.
//!
//! Only paragraphs are rendered; every other structural element kind is
//! skipped. Heading styles become markdown `#` prefixes, so a rendered tab
//! reads naturally in a terminal or a chat transcript. The rendering is one
//! way: markdown is never parsed back into styled content.

use crate::flatten::flatten_tabs;
use crate::model::{Body, Document};

/// Render a content body as markdown-flavored plain text.
///
/// Each paragraph's line is the concatenation of its text runs with the
/// structural trailing newline stripped before the style prefix is applied.
/// Blank normal paragraphs survive as blank lines; an empty heading
/// paragraph emits nothing rather than a bare `#` marker.
pub fn extract_text(body: &Body) -> String {
    let mut lines = Vec::new();

    for element in &body.content {
        let Some(para) = &element.paragraph else { continue };
        let prefix = para.paragraph_style.named_style_type.prefix();

        let mut line = String::new();
        for elem in &para.elements {
            if let Some(run) = &elem.text_run {
                line.push_str(&run.content);
            }
        }

        let stripped = line.trim_end_matches('\n');
        if !stripped.is_empty() {
            lines.push(format!("{prefix}{stripped}"));
        } else if prefix.is_empty() {
            lines.push(String::new());
        }
    }

    lines.join("\n")
}

/// Render a whole document: title header, then every tab in pre-order.
///
/// Tab headers scale with nesting depth starting at `##`, and sections are
/// separated by a horizontal rule. Legacy tab-less documents render their
/// flat body directly under the title.
pub fn render_document(doc: &Document) -> String {
    let title = doc.display_title();

    if doc.tabs.is_empty() {
        let text = doc.body.as_ref().map(extract_text).unwrap_or_default();
        return format!("# {title}\n\n{text}");
    }

    let mut sections = vec![format!("# {title}\n")];
    for entry in flatten_tabs(&doc.tabs) {
        let text = entry.tab.body().map(extract_text).unwrap_or_default();
        let marks = "#".repeat(entry.depth + 2);
        sections.push(format!("{marks} [{}]\n\n{text}", entry.title()));
    }

    sections.join("\n\n---\n\n")
}
