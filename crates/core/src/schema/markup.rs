//! Documentation and other human readable content.

/// The format of a [`MarkupContent`] value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkupKind {
    #[default]
    PlainText,
    Markdown,
}

/// Human readable content (e.g. documentation and hover content).
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct MarkupContent {
    pub kind: MarkupKind,
    pub value: String,
}

impl MarkupContent {
    /// Creates plain text content.
    pub fn plain_text(value: impl Into<String>) -> Self {
        Self {
            kind: MarkupKind::PlainText,
            value: value.into(),
        }
    }

    /// Creates markdown content.
    pub fn markdown(value: impl Into<String>) -> Self {
        Self {
            kind: MarkupKind::Markdown,
            value: value.into(),
        }
    }
}
