use crate::Range;

/// A range to highlight (e.g. all references to the symbol under the cursor).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentHighlight {
    pub range: Range,
    pub kind: Option<HighlightKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightKind {
    /// A textual occurrence.
    Text,
    /// Read-access of a symbol.
    Read,
    /// Write-access of a symbol.
    Write,
}
