use crate::{MarkupContent, Range};

/// Hover content for a range.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Hover {
    pub contents: MarkupContent,
    pub range: Option<Range>,
}
