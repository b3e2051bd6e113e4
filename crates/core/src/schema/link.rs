use serde_json::Value;
use url::Url;

use crate::Range;

/// A range in a document that links to a resource.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DocumentLink {
    pub range: Range,
    pub target: Option<Url>,
    pub tooltip: Option<String>,
    pub data: Option<Value>,
}
