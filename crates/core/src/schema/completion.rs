//! Completion and inline completion entities.

use serde_json::Value;

use crate::{Command, InsertReplaceEdit, MarkupContent, Range, TextEdit};

/// A completion suggestion.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CompletionItem {
    /// Text shown in the completion list (also inserted by default).
    pub label: String,
    pub label_details: Option<CompletionLabelDetails>,
    pub kind: Option<CompletionKind>,
    pub tags: Vec<CompletionTag>,
    /// Additional human readable information (e.g. a type signature).
    pub detail: Option<String>,
    pub documentation: Option<MarkupContent>,
    pub deprecated: bool,
    /// Whether this item should be selected when the list is shown.
    pub preselect: bool,
    pub sort_text: Option<String>,
    pub filter_text: Option<String>,
    pub insert_text: Option<String>,
    pub insert_text_format: Option<InsertTextFormat>,
    pub insert_text_mode: Option<InsertTextMode>,
    /// The edit applied when the item is accepted.
    pub edit: Option<CompletionEdit>,
    /// Edits applied in addition to the main edit (e.g. adding an import).
    pub additional_edits: Vec<TextEdit>,
    pub commit_characters: Vec<String>,
    pub command: Option<Command>,
    pub data: Option<Value>,
}

impl CompletionItem {
    /// Creates a completion item that replaces `range` with `new_text`.
    pub fn new(label: impl Into<String>, range: Range, new_text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            edit: Some(CompletionEdit::Replace(TextEdit::new(range, new_text))),
            ..Default::default()
        }
    }
}

/// Additional details rendered next to a completion label.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct CompletionLabelDetails {
    pub detail: Option<String>,
    pub description: Option<String>,
}

/// The edit of a completion item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CompletionEdit {
    Replace(TextEdit),
    InsertReplace(InsertReplaceEdit),
}

/// A list of completion items.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CompletionList {
    /// Whether further typing should recompute the list.
    pub is_incomplete: bool,
    pub items: Vec<CompletionItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletionKind {
    Text,
    Method,
    Function,
    Constructor,
    Field,
    Variable,
    Class,
    Interface,
    Module,
    Property,
    Unit,
    Value,
    Enum,
    Keyword,
    Snippet,
    Color,
    File,
    Reference,
    Folder,
    EnumMember,
    Constant,
    Struct,
    Event,
    Operator,
    TypeParameter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletionTag {
    Deprecated,
}

/// How the insert text of a completion should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsertTextFormat {
    PlainText,
    Snippet,
}

/// How whitespace and indentation are handled when inserting a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsertTextMode {
    AsIs,
    AdjustIndentation,
}

/// A suggestion rendered inline (i.e. as ghost text) at the cursor.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InlineCompletionItem {
    pub insert_text: String,
    pub filter_text: Option<String>,
    /// The range replaced by the insert text (defaults to the cursor position).
    pub range: Option<Range>,
    pub command: Option<Command>,
    pub insert_text_format: Option<InsertTextFormat>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct InlineCompletionList {
    pub items: Vec<InlineCompletionItem>,
}
