//! Utilities for ferrule LSP translator integration tests.

#![allow(dead_code)]

use std::collections::HashMap;

use ferrule_core::{
    codec, Command, CompletionEdit, CompletionItem, CompletionKind, CompletionLabelDetails,
    CompletionTag, Diagnostic, DiagnosticCode, DiagnosticTag, DocumentSymbol, InsertReplaceEdit,
    InsertTextFormat, InsertTextMode, Location, MarkupContent, Range, RelatedInformation, Severity,
    SymbolKind, SymbolTag, TextEdit, Url,
};
use ferrule_lsp::PositionTranslationContext;
use test_utils::fixtures::{OTHER_SOURCE, SOURCE};

/// Returns the URI of the [`SOURCE`] fixture.
pub fn source_uri() -> Url {
    test_utils::document_uri("greeter.go")
}

/// Returns the URI of the [`OTHER_SOURCE`] fixture.
pub fn other_uri() -> Url {
    test_utils::document_uri("helpers.go")
}

/// Returns the byte-oriented range between the offsets of `start_pat` and `end_pat` in `text`
/// (see [`test_utils::parse_offset_at`]).
pub fn text_range(text: &str, start_pat: &str, end_pat: &str) -> Range {
    let offset = |pat| test_utils::parse_offset_at(text, pat).unwrap();
    Range::new(
        codec::byte_offset_to_position(text.as_bytes(), offset(start_pat)),
        codec::byte_offset_to_position(text.as_bytes(), offset(end_pat)),
    )
}

/// Returns a byte-oriented range in the [`SOURCE`] fixture.
pub fn source_range(start_pat: &str, end_pat: &str) -> Range {
    text_range(SOURCE, start_pat, end_pat)
}

/// Returns a byte-oriented range in the [`OTHER_SOURCE`] fixture.
pub fn other_range(start_pat: &str, end_pat: &str) -> Range {
    text_range(OTHER_SOURCE, start_pat, end_pat)
}

/// Returns UTF-16 translation contexts for both fixtures keyed by their URIs.
pub fn documents() -> HashMap<Url, PositionTranslationContext<'static>> {
    HashMap::from([
        (source_uri(), PositionTranslationContext::utf16(SOURCE)),
        (other_uri(), PositionTranslationContext::utf16(OTHER_SOURCE)),
    ])
}

/// Returns a completion item with every field set.
pub fn full_completion_item() -> CompletionItem {
    CompletionItem {
        label: "name".to_string(),
        label_details: Some(CompletionLabelDetails {
            detail: Some(" string".to_string()),
            description: Some("Greeter".to_string()),
        }),
        kind: Some(CompletionKind::Field),
        tags: vec![CompletionTag::Deprecated],
        detail: Some("名前".to_string()),
        documentation: Some(MarkupContent::markdown("The greeter's **name**.")),
        deprecated: true,
        preselect: true,
        sort_text: Some("0".to_string()),
        filter_text: Some("name".to_string()),
        insert_text: None,
        insert_text_format: Some(InsertTextFormat::Snippet),
        insert_text_mode: Some(InsertTextMode::AdjustIndentation),
        edit: Some(CompletionEdit::InsertReplace(InsertReplaceEdit {
            new_text: "name".to_string(),
            insert: source_range("<-name +", "<-name +"),
            replace: source_range("<-name +", "g.name"),
        })),
        additional_edits: vec![TextEdit::insert(
            source_range("<-emoji->", "<-emoji->"),
            "👋",
        )],
        commit_characters: vec![".".to_string()],
        command: Some(Command {
            title: "Trigger".to_string(),
            command: "editor.action.triggerSuggest".to_string(),
            arguments: vec![serde_json::json!({"retrigger": true})],
        }),
        data: Some(serde_json::json!(42)),
    }
}

/// Returns a diagnostic with every field set (its related information points to [`OTHER_SOURCE`]).
pub fn full_diagnostic() -> Diagnostic {
    Diagnostic {
        range: source_range("<-emoji->", "emoji->"),
        severity: Some(Severity::Warning),
        code: Some(DiagnosticCode::String("unused-emoji".to_string())),
        code_description: Some(Url::parse("https://example.com/lints/unused-emoji").unwrap()),
        source: Some("ferrule".to_string()),
        message: "emoji is concatenated after the name".to_string(),
        related_information: vec![RelatedInformation {
            location: Location::new(other_uri(), other_range("<-🦀🦀", "🦀🦀")),
            message: "crabs are declared here".to_string(),
        }],
        tags: vec![DiagnosticTag::Unnecessary],
        data: Some(serde_json::json!({"fix": "remove"})),
    }
}

/// Returns a three level symbol tree (i.e. type -> method -> parameter and field usage).
pub fn greeter_symbol() -> DocumentSymbol {
    let mut name = DocumentSymbol::new(
        "g.name",
        SymbolKind::Field,
        source_range("<-g.name", "g.name"),
        source_range("<-name +", "g.name"),
    );
    name.detail = Some("string".to_string());

    let mut emoji = DocumentSymbol::new(
        "emoji",
        SymbolKind::Variable,
        source_range("<-emoji->", "emoji->"),
        source_range("<-emoji->", "emoji->"),
    );
    emoji.tags = vec![SymbolTag::Deprecated];
    emoji.deprecated = true;

    let greet = DocumentSymbol::new(
        "Greet",
        SymbolKind::Method,
        source_range("<-func", "}->"),
        source_range("<-Greet(", "<-(emoji"),
    )
    .with_children(vec![name, emoji]);

    DocumentSymbol::new(
        "Greeter",
        SymbolKind::Struct,
        source_range("<-type", "}"),
        source_range("<-Greeter", "Greeter"),
    )
    .with_children(vec![greet])
}
