//! Textual edits and workspace-wide changes.

use std::collections::BTreeMap;
use url::Url;

use crate::Range;

/// A replacement of the text in `range` with `new_text`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct TextEdit {
    pub range: Range,
    pub new_text: String,
}

impl TextEdit {
    /// Creates a text edit.
    pub fn new(range: Range, new_text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }

    /// Creates an edit that inserts `text` at the start of `range`.
    pub fn insert(range: Range, text: impl Into<String>) -> Self {
        Self::new(Range::empty(range.start), text)
    }
}

/// An edit that either inserts or replaces text depending on the client's preference.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct InsertReplaceEdit {
    pub new_text: String,
    /// Range used when inserting.
    pub insert: Range,
    /// Range used when replacing.
    pub replace: Range,
}

/// Changes to many documents.
///
/// Ranges in each document's edits are relative to that document's text.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WorkspaceEdit {
    /// Text edits grouped by document.
    pub changes: BTreeMap<Url, Vec<TextEdit>>,
    /// Ordered (and optionally versioned) document edits and resource operations.
    pub document_changes: Vec<DocumentChange>,
}

impl WorkspaceEdit {
    /// Returns true if the edit doesn't change anything.
    pub fn is_empty(&self) -> bool {
        self.changes.values().all(Vec::is_empty) && self.document_changes.is_empty()
    }
}

/// A single step of an ordered workspace change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentChange {
    Edit(DocumentEdit),
    Create {
        uri: Url,
        options: FileOptions,
    },
    Rename {
        old_uri: Url,
        new_uri: Url,
        options: FileOptions,
    },
    Delete {
        uri: Url,
        options: DeleteOptions,
    },
}

/// Edits for a single (optionally versioned) document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEdit {
    pub uri: Url,
    pub version: Option<i32>,
    pub edits: Vec<TextEdit>,
}

/// Options for creating and renaming files.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileOptions {
    pub overwrite: Option<bool>,
    pub ignore_if_exists: Option<bool>,
}

/// Options for deleting files.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeleteOptions {
    pub recursive: Option<bool>,
    pub ignore_if_not_exists: Option<bool>,
}
