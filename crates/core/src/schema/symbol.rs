//! Document and workspace symbols.

use serde_json::Value;
use url::Url;

use crate::{Location, Range};

/// A symbol in a document, with its nested symbols (e.g. the methods of a type).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentSymbol {
    pub name: String,
    pub detail: Option<String>,
    pub kind: SymbolKind,
    pub tags: Vec<SymbolTag>,
    pub deprecated: bool,
    /// Full range of the symbol (e.g. including its body and doc comments).
    pub range: Range,
    /// Range selected when navigating to the symbol (e.g. its name).
    ///
    /// Must be contained in `range`.
    pub selection_range: Range,
    pub children: Vec<DocumentSymbol>,
}

impl DocumentSymbol {
    /// Creates a symbol without details, tags or children.
    pub fn new(
        name: impl Into<String>,
        kind: SymbolKind,
        range: Range,
        selection_range: Range,
    ) -> Self {
        Self {
            name: name.into(),
            detail: None,
            kind,
            tags: Vec::new(),
            deprecated: false,
            range,
            selection_range,
            children: Vec::new(),
        }
    }

    /// Returns the symbol with `children` as its nested symbols.
    pub fn with_children(mut self, children: Vec<DocumentSymbol>) -> Self {
        self.children = children;
        self
    }
}

/// A symbol found by a workspace-wide search.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceSymbol {
    pub name: String,
    pub kind: SymbolKind,
    pub tags: Vec<SymbolTag>,
    pub container_name: Option<String>,
    pub location: SymbolLocation,
    pub data: Option<Value>,
}

/// The location of a workspace symbol, the range may be resolved lazily.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SymbolLocation {
    Range(Location),
    Document(Url),
}

impl SymbolLocation {
    /// Returns the URI of the document that contains the symbol.
    pub fn uri(&self) -> &Url {
        match self {
            SymbolLocation::Range(location) => &location.uri,
            SymbolLocation::Document(uri) => uri,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    File,
    Module,
    Namespace,
    Package,
    Class,
    Method,
    Property,
    Field,
    Constructor,
    Enum,
    Interface,
    Function,
    Variable,
    Constant,
    String,
    Number,
    Boolean,
    Array,
    Object,
    Key,
    Null,
    EnumMember,
    Struct,
    Event,
    Operator,
    TypeParameter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolTag {
    Deprecated,
}
