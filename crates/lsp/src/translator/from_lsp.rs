//! Utilities for translating from LSP to ferrule types.

use ferrule_core::{
    codec, CodeAction, CodeActionKind, CodeActionOrCommand, Color, ColorInformation,
    ColorPresentation, Command, CompletionEdit, CompletionItem, CompletionLabelDetails,
    CompletionList, DeleteOptions, Diagnostic, DiagnosticCode, DocumentChange, DocumentEdit,
    DocumentHighlight, DocumentLink, DocumentSymbol, FileOptions, FoldingRange, Hover, InlayHint,
    InlineCompletionItem, InlineCompletionList, InsertReplaceEdit, Location, LocationLink,
    MarkupContent, ParameterInformation, ParameterLabel, Position, Range, RelatedInformation,
    SelectionId, SelectionRanges, SignatureHelp, SignatureInformation, SymbolKind, SymbolLocation,
    TextEdit, WorkspaceEdit, WorkspaceSymbol,
};

use super::{kinds, ContextResolver, PositionTranslationContext};

/// Symbol kind used for LSP symbol kinds that ferrule doesn't know about.
const FALLBACK_SYMBOL_KIND: SymbolKind = SymbolKind::Object;

/// Translates LSP position to ferrule position.
///
/// Stale positions are clamped to the nearest valid position in the context's text,
/// and columns inside a codepoint are rounded down to the start of the codepoint.
pub fn position(
    position: lsp_types::Position,
    context: &PositionTranslationContext,
) -> Position {
    codec::decode_position(
        context.text,
        position.line,
        position.character,
        context.encoding,
    )
}

/// Translates LSP position to ferrule byte offset.
pub fn offset(position: lsp_types::Position, context: &PositionTranslationContext) -> usize {
    codec::position_to_byte_offset(context.text, self::position(position, context))
}

/// Translates LSP range to ferrule range.
pub fn range(range: lsp_types::Range, context: &PositionTranslationContext) -> Range {
    Range::new(
        position(range.start, context),
        position(range.end, context),
    )
}

/// Translates LSP text edit to ferrule text edit.
pub fn text_edit(edit: lsp_types::TextEdit, context: &PositionTranslationContext) -> TextEdit {
    TextEdit {
        range: range(edit.range, context),
        new_text: edit.new_text,
    }
}

/// Translates LSP insert/replace edit to ferrule insert/replace edit.
pub fn insert_replace_edit(
    edit: lsp_types::InsertReplaceEdit,
    context: &PositionTranslationContext,
) -> InsertReplaceEdit {
    InsertReplaceEdit {
        new_text: edit.new_text,
        insert: range(edit.insert, context),
        replace: range(edit.replace, context),
    }
}

/// Translates LSP markup content to ferrule markup content.
pub fn markup(content: lsp_types::MarkupContent) -> MarkupContent {
    MarkupContent {
        kind: kinds::markup_kind_from_lsp(content.kind).unwrap_or_default(),
        value: content.value,
    }
}

/// Translates LSP documentation to ferrule markup content (bare strings are plain text).
pub fn documentation(documentation: lsp_types::Documentation) -> MarkupContent {
    match documentation {
        lsp_types::Documentation::String(value) => MarkupContent::plain_text(value),
        lsp_types::Documentation::MarkupContent(content) => markup(content),
    }
}

/// Translates LSP command to ferrule command.
pub fn command(command: lsp_types::Command) -> Command {
    Command {
        title: command.title,
        command: command.command,
        arguments: command.arguments.unwrap_or_default(),
    }
}

/// Translates LSP completion item to ferrule completion item.
#[allow(deprecated)]
pub fn completion_item(
    item: lsp_types::CompletionItem,
    context: &PositionTranslationContext,
) -> CompletionItem {
    CompletionItem {
        label: item.label,
        label_details: item.label_details.map(|details| CompletionLabelDetails {
            detail: details.detail,
            description: details.description,
        }),
        kind: item.kind.and_then(kinds::completion_kind_from_lsp),
        tags: item
            .tags
            .unwrap_or_default()
            .into_iter()
            .filter_map(kinds::completion_tag_from_lsp)
            .collect(),
        detail: item.detail,
        documentation: item.documentation.map(documentation),
        deprecated: item.deprecated.unwrap_or(false),
        preselect: item.preselect.unwrap_or(false),
        sort_text: item.sort_text,
        filter_text: item.filter_text,
        insert_text: item.insert_text,
        insert_text_format: item
            .insert_text_format
            .and_then(kinds::insert_text_format_from_lsp),
        insert_text_mode: item
            .insert_text_mode
            .and_then(kinds::insert_text_mode_from_lsp),
        edit: item.text_edit.map(|edit| match edit {
            lsp_types::CompletionTextEdit::Edit(edit) => {
                CompletionEdit::Replace(text_edit(edit, context))
            }
            lsp_types::CompletionTextEdit::InsertAndReplace(edit) => {
                CompletionEdit::InsertReplace(insert_replace_edit(edit, context))
            }
        }),
        additional_edits: text_edits(item.additional_text_edits, context),
        commit_characters: item.commit_characters.unwrap_or_default(),
        command: item.command.map(command),
        data: item.data,
    }
}

/// Translates LSP completion list to ferrule completion list.
pub fn completion_list(
    list: lsp_types::CompletionList,
    context: &PositionTranslationContext,
) -> CompletionList {
    CompletionList {
        is_incomplete: list.is_incomplete,
        items: list
            .items
            .into_iter()
            .map(|item| completion_item(item, context))
            .collect(),
    }
}

/// Translates LSP completion response (if any) to ferrule completion list.
///
/// A bare array of items is a complete list.
pub fn completion_response(
    response: Option<lsp_types::CompletionResponse>,
    context: &PositionTranslationContext,
) -> Option<CompletionList> {
    response.map(|response| match response {
        lsp_types::CompletionResponse::Array(items) => completion_list(
            lsp_types::CompletionList {
                is_incomplete: false,
                items,
            },
            context,
        ),
        lsp_types::CompletionResponse::List(list) => completion_list(list, context),
    })
}

/// Translates LSP inline completion item to ferrule inline completion item.
pub fn inline_completion_item(
    item: lsp_types::InlineCompletionItem,
    context: &PositionTranslationContext,
) -> InlineCompletionItem {
    InlineCompletionItem {
        insert_text: item.insert_text,
        filter_text: item.filter_text,
        range: item.range.map(|it| range(it, context)),
        command: item.command.map(command),
        insert_text_format: item
            .insert_text_format
            .and_then(kinds::insert_text_format_from_lsp),
    }
}

/// Translates LSP inline completion list to ferrule inline completion list.
pub fn inline_completion_list(
    list: lsp_types::InlineCompletionList,
    context: &PositionTranslationContext,
) -> InlineCompletionList {
    InlineCompletionList {
        items: list
            .items
            .into_iter()
            .map(|item| inline_completion_item(item, context))
            .collect(),
    }
}

/// Translates LSP document highlight to ferrule document highlight.
pub fn document_highlight(
    highlight: lsp_types::DocumentHighlight,
    context: &PositionTranslationContext,
) -> DocumentHighlight {
    DocumentHighlight {
        range: range(highlight.range, context),
        kind: highlight.kind.and_then(kinds::highlight_kind_from_lsp),
    }
}

/// Translates LSP inlay hint to ferrule inlay hint.
///
/// Label parts are concatenated into a single label (their tooltips, locations and commands are dropped),
/// and rich content tooltips are reduced to their text.
pub fn inlay_hint(hint: lsp_types::InlayHint, context: &PositionTranslationContext) -> InlayHint {
    InlayHint {
        position: position(hint.position, context),
        label: match hint.label {
            lsp_types::InlayHintLabel::String(label) => label,
            lsp_types::InlayHintLabel::LabelParts(parts) => {
                parts.into_iter().map(|part| part.value).collect()
            }
        },
        kind: hint.kind.and_then(kinds::inlay_hint_kind_from_lsp),
        text_edits: text_edits(hint.text_edits, context),
        tooltip: hint.tooltip.map(|tooltip| match tooltip {
            lsp_types::InlayHintTooltip::String(tooltip) => tooltip,
            lsp_types::InlayHintTooltip::MarkupContent(content) => content.value,
        }),
        padding_left: hint.padding_left.unwrap_or(false),
        padding_right: hint.padding_right.unwrap_or(false),
        data: hint.data,
    }
}

/// Translates LSP folding range to ferrule folding range.
///
/// Lines past the end of the text are clamped to the last line.
pub fn folding_range(
    folding: lsp_types::FoldingRange,
    context: &PositionTranslationContext,
) -> FoldingRange {
    let endpoint = |line: u32, character: Option<u32>| {
        let decoded = position(lsp_types::Position::new(line, character.unwrap_or(0)), context);
        (decoded.line, character.map(|_| decoded.column))
    };
    let (start_line, start_column) = endpoint(folding.start_line, folding.start_character);
    let (end_line, end_column) = endpoint(folding.end_line, folding.end_character);
    FoldingRange {
        start_line,
        start_column,
        end_line,
        end_column,
        kind: folding.kind.and_then(kinds::folding_kind_from_lsp),
        collapsed_text: folding.collapsed_text,
    }
}

/// Translates LSP document symbol (and its children) to ferrule document symbol.
///
/// Unknown symbol kinds are translated to [`SymbolKind::Object`].
#[allow(deprecated)]
pub fn document_symbol(
    symbol: lsp_types::DocumentSymbol,
    context: &PositionTranslationContext,
) -> DocumentSymbol {
    DocumentSymbol {
        name: symbol.name,
        detail: symbol.detail,
        kind: kinds::symbol_kind_from_lsp(symbol.kind).unwrap_or(FALLBACK_SYMBOL_KIND),
        tags: symbol
            .tags
            .unwrap_or_default()
            .into_iter()
            .filter_map(kinds::symbol_tag_from_lsp)
            .collect(),
        deprecated: symbol.deprecated.unwrap_or(false),
        range: range(symbol.range, context),
        selection_range: range(symbol.selection_range, context),
        children: symbol
            .children
            .unwrap_or_default()
            .into_iter()
            .map(|child| document_symbol(child, context))
            .collect(),
    }
}

/// Adds the LSP selection range (and its parents) to `ranges` and returns the id of the innermost node.
pub fn selection_range(
    selection: lsp_types::SelectionRange,
    ranges: &mut SelectionRanges,
    context: &PositionTranslationContext,
) -> SelectionId {
    let mut ancestors = Vec::new();
    let mut next = selection.parent.as_deref();
    while let Some(node) = next {
        ancestors.push(range(node.range, context));
        next = node.parent.as_deref();
    }
    let parent = ranges.push_chain(ancestors);
    ranges.push(range(selection.range, context), parent)
}

/// Translates LSP selection ranges to a ferrule selection range arena,
/// and returns the arena and the ids of the innermost nodes (in the order of `selections`).
pub fn selection_ranges(
    selections: Vec<lsp_types::SelectionRange>,
    context: &PositionTranslationContext,
) -> (SelectionRanges, Vec<SelectionId>) {
    let mut ranges = SelectionRanges::new();
    let ids = selections
        .into_iter()
        .map(|selection| selection_range(selection, &mut ranges, context))
        .collect();
    (ranges, ids)
}

/// Translates LSP color to ferrule color.
pub fn color(color: lsp_types::Color) -> Color {
    Color {
        red: color.red,
        green: color.green,
        blue: color.blue,
        alpha: color.alpha,
    }
}

/// Translates LSP color information to ferrule color information.
pub fn color_information(
    info: lsp_types::ColorInformation,
    context: &PositionTranslationContext,
) -> ColorInformation {
    ColorInformation {
        range: range(info.range, context),
        color: color(info.color),
    }
}

/// Translates LSP color presentation to ferrule color presentation.
pub fn color_presentation(
    presentation: lsp_types::ColorPresentation,
    context: &PositionTranslationContext,
) -> ColorPresentation {
    ColorPresentation {
        label: presentation.label,
        text_edit: presentation.text_edit.map(|edit| text_edit(edit, context)),
        additional_text_edits: text_edits(presentation.additional_text_edits, context),
    }
}

/// Translates LSP location to ferrule location.
///
/// `context` must be the context of the document the location points to.
pub fn location(location: lsp_types::Location, context: &PositionTranslationContext) -> Location {
    Location {
        uri: location.uri,
        range: range(location.range, context),
    }
}

/// Translates LSP location link to ferrule location link.
///
/// The origin selection range is translated using the `origin` context
/// while the target ranges are translated using the `target` context.
pub fn location_link(
    link: lsp_types::LocationLink,
    origin: &PositionTranslationContext,
    target: &PositionTranslationContext,
) -> LocationLink {
    LocationLink {
        origin_selection_range: link.origin_selection_range.map(|it| range(it, origin)),
        target_uri: link.target_uri,
        target_range: range(link.target_range, target),
        target_selection_range: range(link.target_selection_range, target),
    }
}

/// Translates LSP workspace edit to ferrule workspace edit.
///
/// Change annotations are dropped.
pub fn workspace_edit(
    edit: lsp_types::WorkspaceEdit,
    documents: &(impl ContextResolver + ?Sized),
) -> WorkspaceEdit {
    WorkspaceEdit {
        changes: edit
            .changes
            .unwrap_or_default()
            .into_iter()
            .map(|(uri, edits)| {
                let edits = edits
                    .into_iter()
                    .map(|edit| resolved_text_edit(edit, &uri, documents))
                    .collect();
                (uri, edits)
            })
            .collect(),
        document_changes: match edit.document_changes {
            Some(lsp_types::DocumentChanges::Edits(edits)) => edits
                .into_iter()
                .map(|edit| DocumentChange::Edit(document_edit(edit, documents)))
                .collect(),
            Some(lsp_types::DocumentChanges::Operations(operations)) => operations
                .into_iter()
                .map(|operation| document_change(operation, documents))
                .collect(),
            None => Vec::new(),
        },
    }
}

/// Translates LSP code action to ferrule code action.
///
/// `context` is the context of the document the action was requested for,
/// other documents (e.g. the targets of edits) are resolved using `documents`.
pub fn code_action(
    action: lsp_types::CodeAction,
    context: &PositionTranslationContext,
    documents: &(impl ContextResolver + ?Sized),
) -> CodeAction {
    CodeAction {
        title: action.title,
        kind: action.kind.map(|kind| CodeActionKind::from(kind.as_str())),
        diagnostics: action
            .diagnostics
            .unwrap_or_default()
            .into_iter()
            .map(|it| diagnostic(it, context, documents))
            .collect(),
        edit: action.edit.map(|edit| workspace_edit(edit, documents)),
        command: action.command.map(command),
        is_preferred: action.is_preferred.unwrap_or(false),
        disabled: action.disabled.map(|disabled| disabled.reason),
        data: action.data,
    }
}

/// Translates LSP code action or command to ferrule code action or command.
pub fn code_action_or_command(
    action: lsp_types::CodeActionOrCommand,
    context: &PositionTranslationContext,
    documents: &(impl ContextResolver + ?Sized),
) -> CodeActionOrCommand {
    match action {
        lsp_types::CodeActionOrCommand::CodeAction(action) => {
            CodeActionOrCommand::CodeAction(code_action(action, context, documents))
        }
        lsp_types::CodeActionOrCommand::Command(it) => CodeActionOrCommand::Command(command(it)),
    }
}

/// Translates LSP diagnostic to ferrule diagnostic.
///
/// Related information may point to other documents, those are resolved using `documents`.
pub fn diagnostic(
    diagnostic: lsp_types::Diagnostic,
    context: &PositionTranslationContext,
    documents: &(impl ContextResolver + ?Sized),
) -> Diagnostic {
    Diagnostic {
        range: range(diagnostic.range, context),
        severity: diagnostic.severity.and_then(kinds::severity_from_lsp),
        code: diagnostic.code.map(|code| match code {
            lsp_types::NumberOrString::Number(number) => DiagnosticCode::Number(number),
            lsp_types::NumberOrString::String(code) => DiagnosticCode::String(code),
        }),
        code_description: diagnostic.code_description.map(|it| it.href),
        source: diagnostic.source,
        message: diagnostic.message,
        related_information: diagnostic
            .related_information
            .unwrap_or_default()
            .into_iter()
            .map(|info| RelatedInformation {
                location: resolved_location(info.location, documents),
                message: info.message,
            })
            .collect(),
        tags: diagnostic
            .tags
            .unwrap_or_default()
            .into_iter()
            .filter_map(kinds::diagnostic_tag_from_lsp)
            .collect(),
        data: diagnostic.data,
    }
}

/// Translates LSP document link to ferrule document link.
pub fn document_link(
    link: lsp_types::DocumentLink,
    context: &PositionTranslationContext,
) -> DocumentLink {
    DocumentLink {
        range: range(link.range, context),
        target: link.target,
        tooltip: link.tooltip,
        data: link.data,
    }
}

/// Translates LSP workspace symbol to ferrule workspace symbol.
///
/// Unknown symbol kinds are translated to [`SymbolKind::Object`].
pub fn workspace_symbol(
    symbol: lsp_types::WorkspaceSymbol,
    documents: &(impl ContextResolver + ?Sized),
) -> WorkspaceSymbol {
    WorkspaceSymbol {
        name: symbol.name,
        kind: kinds::symbol_kind_from_lsp(symbol.kind).unwrap_or(FALLBACK_SYMBOL_KIND),
        tags: symbol
            .tags
            .unwrap_or_default()
            .into_iter()
            .filter_map(kinds::symbol_tag_from_lsp)
            .collect(),
        container_name: symbol.container_name,
        location: match symbol.location {
            lsp_types::OneOf::Left(location) => {
                SymbolLocation::Range(resolved_location(location, documents))
            }
            lsp_types::OneOf::Right(location) => SymbolLocation::Document(location.uri),
        },
        data: symbol.data,
    }
}

/// Translates LSP signature help to ferrule signature help.
///
/// Parameter label offsets are decoded to byte offsets into the signature label using the context's encoding.
pub fn signature_help(
    help: lsp_types::SignatureHelp,
    context: &PositionTranslationContext,
) -> SignatureHelp {
    SignatureHelp {
        signatures: help
            .signatures
            .into_iter()
            .map(|signature| {
                let parameters = signature
                    .parameters
                    .unwrap_or_default()
                    .into_iter()
                    .map(|parameter| ParameterInformation {
                        label: match parameter.label {
                            lsp_types::ParameterLabel::Simple(text) => ParameterLabel::Text(text),
                            lsp_types::ParameterLabel::LabelOffsets([start, end]) => {
                                ParameterLabel::Span(
                                    label_offset(&signature.label, start, context),
                                    label_offset(&signature.label, end, context),
                                )
                            }
                        },
                        documentation: parameter.documentation.map(documentation),
                    })
                    .collect();
                SignatureInformation {
                    label: signature.label,
                    documentation: signature.documentation.map(documentation),
                    parameters,
                    active_parameter: signature.active_parameter,
                }
            })
            .collect(),
        active_signature: help.active_signature,
        active_parameter: help.active_parameter,
    }
}

/// Translates LSP hover content to ferrule hover content.
///
/// Marked strings are translated to markdown (code blocks are fenced, and arrays are joined by blank lines).
pub fn hover(hover: lsp_types::Hover, context: &PositionTranslationContext) -> Hover {
    let contents = match hover.contents {
        lsp_types::HoverContents::Markup(content) => markup(content),
        lsp_types::HoverContents::Scalar(content) => MarkupContent::markdown(marked_string(content)),
        lsp_types::HoverContents::Array(contents) => MarkupContent::markdown(
            contents
                .into_iter()
                .map(marked_string)
                .collect::<Vec<_>>()
                .join("\n\n"),
        ),
    };
    Hover {
        contents,
        range: hover.range.map(|it| range(it, context)),
    }
}

fn marked_string(content: lsp_types::MarkedString) -> String {
    match content {
        lsp_types::MarkedString::String(value) => value,
        lsp_types::MarkedString::LanguageString(code) => {
            format!("```{}\n{}\n```", code.language, code.value)
        }
    }
}

fn text_edits(
    edits: Option<Vec<lsp_types::TextEdit>>,
    context: &PositionTranslationContext,
) -> Vec<TextEdit> {
    edits
        .unwrap_or_default()
        .into_iter()
        .map(|edit| text_edit(edit, context))
        .collect()
}

fn document_edit(
    edit: lsp_types::TextDocumentEdit,
    documents: &(impl ContextResolver + ?Sized),
) -> DocumentEdit {
    let uri = edit.text_document.uri;
    let edits = edit
        .edits
        .into_iter()
        .map(|edit| {
            let edit = match edit {
                lsp_types::OneOf::Left(edit) => edit,
                lsp_types::OneOf::Right(annotated) => annotated.text_edit,
            };
            resolved_text_edit(edit, &uri, documents)
        })
        .collect();
    DocumentEdit {
        uri,
        version: edit.text_document.version,
        edits,
    }
}

fn document_change(
    operation: lsp_types::DocumentChangeOperation,
    documents: &(impl ContextResolver + ?Sized),
) -> DocumentChange {
    match operation {
        lsp_types::DocumentChangeOperation::Edit(edit) => {
            DocumentChange::Edit(document_edit(edit, documents))
        }
        lsp_types::DocumentChangeOperation::Op(lsp_types::ResourceOp::Create(create)) => {
            DocumentChange::Create {
                uri: create.uri,
                options: create
                    .options
                    .map(|options| FileOptions {
                        overwrite: options.overwrite,
                        ignore_if_exists: options.ignore_if_exists,
                    })
                    .unwrap_or_default(),
            }
        }
        lsp_types::DocumentChangeOperation::Op(lsp_types::ResourceOp::Rename(rename)) => {
            DocumentChange::Rename {
                old_uri: rename.old_uri,
                new_uri: rename.new_uri,
                options: rename
                    .options
                    .map(|options| FileOptions {
                        overwrite: options.overwrite,
                        ignore_if_exists: options.ignore_if_exists,
                    })
                    .unwrap_or_default(),
            }
        }
        lsp_types::DocumentChangeOperation::Op(lsp_types::ResourceOp::Delete(delete)) => {
            DocumentChange::Delete {
                uri: delete.uri,
                options: delete
                    .options
                    .map(|options| DeleteOptions {
                        recursive: options.recursive,
                        ignore_if_not_exists: options.ignore_if_not_exists,
                    })
                    .unwrap_or_default(),
            }
        }
    }
}

fn resolved_location(
    location: lsp_types::Location,
    documents: &(impl ContextResolver + ?Sized),
) -> Location {
    let range = resolved_range(location.range, &location.uri, documents);
    Location {
        uri: location.uri,
        range,
    }
}

fn resolved_text_edit(
    edit: lsp_types::TextEdit,
    uri: &lsp_types::Url,
    documents: &(impl ContextResolver + ?Sized),
) -> TextEdit {
    TextEdit {
        range: resolved_range(edit.range, uri, documents),
        new_text: edit.new_text,
    }
}

/// Translates a range in the document `uri`, ranges in unknown documents are copied as is.
fn resolved_range(
    range: lsp_types::Range,
    uri: &lsp_types::Url,
    documents: &(impl ContextResolver + ?Sized),
) -> Range {
    match documents.resolve(uri) {
        Some(context) => self::range(range, &context),
        None => Range::new(
            Position::new(range.start.line, range.start.character),
            Position::new(range.end.line, range.end.character),
        ),
    }
}

/// Decodes an offset into `label` to a byte offset (rounded down to a codepoint boundary).
fn label_offset(label: &str, offset: u32, context: &PositionTranslationContext) -> u32 {
    let len = match context.encoding.wide() {
        Some(wide) => codec::wide_to_utf8_len(label.as_bytes(), offset as usize, wide),
        None => codec::floor_char_boundary(label.as_bytes(), offset as usize),
    };
    u32::try_from(len).unwrap_or(u32::MAX)
}
