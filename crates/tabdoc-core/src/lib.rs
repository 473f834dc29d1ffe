//! Document model and tab-tree layer for tabdoc.
//!
//! This crate is the pure heart of the system: it models the Docs document
//! resource (with its forest of tabs) and implements every transformation
//! the tool layer needs before talking to the service. No I/O happens here:
//! callers fetch a snapshot, run these functions over it, and discard it.
//!
//! ## Module Structure
//!
//! - `model`: serde wire model of documents, tabs, and content bodies
//! - `flatten`: pre-order flattening of the tab forest
//! - `resolve`: caller-supplied id/title to a concrete tab body
//! - `extract`: body to markdown-flavored plain text
//! - `offset`: append-safe insertion offsets
//! - `scope`: tab scoping of opaque edit-request batches

pub mod error;
pub mod extract;
pub mod flatten;
pub mod model;
pub mod offset;
pub mod resolve;
pub mod scope;

pub use error::TabError;
pub use extract::{extract_text, render_document};
pub use flatten::{FlatTab, flatten_tabs};
pub use model::{
    Body, Document, DocumentTab, NamedStyle, Paragraph, ParagraphElement, ParagraphStyle,
    StructuralElement, Tab, TabProperties, TextRun,
};
pub use offset::{append_offset, append_payload};
pub use resolve::{ResolvedTab, resolve_tab};
pub use scope::scope_requests;
