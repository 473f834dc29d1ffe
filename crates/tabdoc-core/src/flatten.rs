//! Pre-order flattening of the tab forest.
//!
//! The flattened sequence is an ephemeral, read-only index computed from the
//! owned tab tree; it borrows the tabs rather than copying them. Pre-order
//! (parent before children, siblings in their given order) is the canonical
//! reading and listing order for the whole document.

use crate::model::Tab;

/// Read-only projection of one tab in the flattened sequence.
#[derive(Debug, Clone, Copy)]
pub struct FlatTab<'a> {
    /// The owning tab node.
    pub tab: &'a Tab,
    /// Nesting depth, 0 for top-level tabs.
    pub depth: usize,
}

impl<'a> FlatTab<'a> {
    pub fn id(&self) -> &'a str {
        self.tab.id()
    }

    pub fn title(&self) -> &'a str {
        self.tab.title()
    }

    pub fn index(&self) -> i32 {
        self.tab.tab_properties.index
    }
}

/// Flatten a tab forest into pre-order.
///
/// No tabs is not an error; the result is simply empty.
pub fn flatten_tabs(tabs: &[Tab]) -> Vec<FlatTab<'_>> {
    let mut entries = Vec::new();
    push_pre_order(tabs, 0, &mut entries);
    entries
}

fn push_pre_order<'a>(tabs: &'a [Tab], depth: usize, entries: &mut Vec<FlatTab<'a>>) {
    for tab in tabs {
        entries.push(FlatTab { tab, depth });
        push_pre_order(&tab.child_tabs, depth + 1, entries);
    }
}
