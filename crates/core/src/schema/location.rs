use url::Url;

use crate::Range;

/// A range in a specific document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub uri: Url,
    pub range: Range,
}

impl Location {
    pub fn new(uri: Url, range: Range) -> Self {
        Self { uri, range }
    }
}

/// A link from a range in the origin document to a range in a target document.
///
/// The origin and target ranges are relative to the texts of two (possibly different) documents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocationLink {
    /// Range of the link in the origin document (defaults to the word at the request position).
    pub origin_selection_range: Option<Range>,
    pub target_uri: Url,
    /// Full range of the target (e.g. a whole function definition).
    pub target_range: Range,
    /// Range in the target that should be selected (e.g. a function's name).
    pub target_selection_range: Range,
}
