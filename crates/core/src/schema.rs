//! Byte-oriented entity types exchanged by language tooling features.
//!
//! Every [`Range`](crate::Range) and [`Position`](crate::Position) in these types counts columns in UTF-8 bytes
//! relative to the text of the document the entity refers to.

pub use self::{
    action::{CodeAction, CodeActionKind, CodeActionOrCommand},
    color::{Color, ColorInformation, ColorPresentation},
    command::Command,
    completion::{
        CompletionEdit, CompletionItem, CompletionKind, CompletionLabelDetails, CompletionList,
        CompletionTag, InlineCompletionItem, InlineCompletionList, InsertTextFormat,
        InsertTextMode,
    },
    diagnostic::{Diagnostic, DiagnosticCode, DiagnosticTag, RelatedInformation, Severity},
    edit::{
        DeleteOptions, DocumentChange, DocumentEdit, FileOptions, InsertReplaceEdit, TextEdit,
        WorkspaceEdit,
    },
    folding::{FoldingKind, FoldingRange},
    highlight::{DocumentHighlight, HighlightKind},
    hover::Hover,
    inlay_hint::{InlayHint, InlayHintKind},
    link::DocumentLink,
    location::{Location, LocationLink},
    markup::{MarkupContent, MarkupKind},
    selection::{SelectionId, SelectionNode, SelectionRanges},
    signature::{ParameterInformation, ParameterLabel, SignatureHelp, SignatureInformation},
    symbol::{DocumentSymbol, SymbolKind, SymbolLocation, SymbolTag, WorkspaceSymbol},
};

pub use url::Url;

mod action;
mod color;
mod command;
mod completion;
mod diagnostic;
mod edit;
mod folding;
mod highlight;
mod hover;
mod inlay_hint;
mod link;
mod location;
mod markup;
mod selection;
mod signature;
mod symbol;
