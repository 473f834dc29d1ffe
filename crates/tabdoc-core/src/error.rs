//! Error types for tab resolution.

use thiserror::Error;

/// Errors produced by the tab-tree layer.
#[derive(Error, Debug)]
pub enum TabError {
    /// No tab matched a non-empty requested id or title. Both requested
    /// values are carried for diagnostics.
    #[error("tab not found: id={tab_id:?} title={tab_title:?}")]
    TabNotFound { tab_id: String, tab_title: String },
}
