use serde_json::Value;

use crate::{Position, TextEdit};

/// An inline annotation (e.g. an inferred type or a parameter name).
///
/// Structured labels and rich tooltips are flattened to plain text.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InlayHint {
    pub position: Position,
    pub label: String,
    pub kind: Option<InlayHintKind>,
    /// Edits applied when the hint is accepted (i.e. inserted into the document).
    pub text_edits: Vec<TextEdit>,
    pub tooltip: Option<String>,
    pub padding_left: bool,
    pub padding_right: bool,
    pub data: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlayHintKind {
    Type,
    Parameter,
}
