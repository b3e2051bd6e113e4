//! Utilities for translating from ferrule to LSP types.

use std::collections::HashMap;

use ferrule_core::{
    codec, CodeAction, CodeActionOrCommand, Color, ColorInformation, ColorPresentation, Command,
    CompletionEdit, CompletionItem, CompletionList, Diagnostic, DiagnosticCode, DocumentChange,
    DocumentHighlight, DocumentLink, DocumentSymbol, FoldingRange, Hover, InlayHint,
    InlineCompletionItem, InlineCompletionList, InsertReplaceEdit, Location, LocationLink,
    MarkupContent, MarkupKind, ParameterLabel, Position, Range, SelectionId, SelectionRanges,
    SignatureHelp, SymbolLocation, TextEdit, WorkspaceEdit, WorkspaceSymbol,
};

use super::{kinds, ContextResolver, PositionTranslationContext};

/// Translates ferrule position to LSP position.
///
/// Stale positions are clamped to the nearest valid position in the context's text.
pub fn position(
    position: Position,
    context: &PositionTranslationContext,
) -> lsp_types::Position {
    let (line, character) = codec::encode_position(context.text, position, context.encoding);
    lsp_types::Position::new(line, character)
}

/// Translates ferrule byte offset to LSP position.
pub fn position_at(offset: usize, context: &PositionTranslationContext) -> lsp_types::Position {
    position(
        codec::byte_offset_to_position(context.text, offset),
        context,
    )
}

/// Translates ferrule range to LSP range.
pub fn range(range: Range, context: &PositionTranslationContext) -> lsp_types::Range {
    lsp_types::Range::new(
        position(range.start, context),
        position(range.end, context),
    )
}

/// Translates ferrule text edit to LSP text edit.
pub fn text_edit(edit: TextEdit, context: &PositionTranslationContext) -> lsp_types::TextEdit {
    lsp_types::TextEdit {
        range: range(edit.range, context),
        new_text: edit.new_text,
    }
}

/// Translates ferrule insert/replace edit to LSP insert/replace edit.
pub fn insert_replace_edit(
    edit: InsertReplaceEdit,
    context: &PositionTranslationContext,
) -> lsp_types::InsertReplaceEdit {
    lsp_types::InsertReplaceEdit {
        new_text: edit.new_text,
        insert: range(edit.insert, context),
        replace: range(edit.replace, context),
    }
}

/// Translates ferrule markup content to LSP markup content.
pub fn markup(content: MarkupContent) -> lsp_types::MarkupContent {
    lsp_types::MarkupContent {
        kind: kinds::markup_kind_to_lsp(content.kind),
        value: content.value,
    }
}

/// Translates ferrule markup content to LSP documentation.
///
/// Plain text is emitted as a bare string.
pub fn documentation(content: MarkupContent) -> lsp_types::Documentation {
    match content.kind {
        MarkupKind::PlainText => lsp_types::Documentation::String(content.value),
        MarkupKind::Markdown => lsp_types::Documentation::MarkupContent(markup(content)),
    }
}

/// Translates ferrule command to LSP command.
pub fn command(command: Command) -> lsp_types::Command {
    lsp_types::Command {
        title: command.title,
        command: command.command,
        arguments: non_empty(command.arguments),
    }
}

/// Translates ferrule completion item to LSP completion item.
#[allow(deprecated)]
pub fn completion_item(
    item: CompletionItem,
    context: &PositionTranslationContext,
) -> lsp_types::CompletionItem {
    lsp_types::CompletionItem {
        label: item.label,
        label_details: item
            .label_details
            .map(|details| lsp_types::CompletionItemLabelDetails {
                detail: details.detail,
                description: details.description,
            }),
        kind: item.kind.map(kinds::completion_kind_to_lsp),
        detail: item.detail,
        documentation: item.documentation.map(documentation),
        deprecated: flag(item.deprecated),
        preselect: flag(item.preselect),
        sort_text: item.sort_text,
        filter_text: item.filter_text,
        insert_text: item.insert_text,
        insert_text_format: item.insert_text_format.map(kinds::insert_text_format_to_lsp),
        insert_text_mode: item.insert_text_mode.map(kinds::insert_text_mode_to_lsp),
        text_edit: item.edit.map(|edit| match edit {
            CompletionEdit::Replace(edit) => {
                lsp_types::CompletionTextEdit::Edit(text_edit(edit, context))
            }
            CompletionEdit::InsertReplace(edit) => {
                lsp_types::CompletionTextEdit::InsertAndReplace(insert_replace_edit(edit, context))
            }
        }),
        additional_text_edits: text_edits(item.additional_edits, context),
        command: item.command.map(command),
        commit_characters: non_empty(item.commit_characters),
        data: item.data,
        tags: non_empty(
            item.tags
                .into_iter()
                .map(kinds::completion_tag_to_lsp)
                .collect(),
        ),
        ..Default::default()
    }
}

/// Translates ferrule completion list to LSP completion list.
pub fn completion_list(
    list: CompletionList,
    context: &PositionTranslationContext,
) -> lsp_types::CompletionList {
    lsp_types::CompletionList {
        is_incomplete: list.is_incomplete,
        items: list
            .items
            .into_iter()
            .map(|item| completion_item(item, context))
            .collect(),
    }
}

/// Translates ferrule completion list (if any) to LSP completion response.
///
/// Complete lists are emitted as a bare array of items.
pub fn completion_response(
    list: Option<CompletionList>,
    context: &PositionTranslationContext,
) -> Option<lsp_types::CompletionResponse> {
    list.map(|list| {
        if list.is_incomplete {
            lsp_types::CompletionResponse::List(completion_list(list, context))
        } else {
            lsp_types::CompletionResponse::Array(completion_list(list, context).items)
        }
    })
}

/// Translates ferrule inline completion item to LSP inline completion item.
pub fn inline_completion_item(
    item: InlineCompletionItem,
    context: &PositionTranslationContext,
) -> lsp_types::InlineCompletionItem {
    lsp_types::InlineCompletionItem {
        insert_text: item.insert_text,
        filter_text: item.filter_text,
        range: item.range.map(|it| range(it, context)),
        command: item.command.map(command),
        insert_text_format: item.insert_text_format.map(kinds::insert_text_format_to_lsp),
    }
}

/// Translates ferrule inline completion list to LSP inline completion list.
pub fn inline_completion_list(
    list: InlineCompletionList,
    context: &PositionTranslationContext,
) -> lsp_types::InlineCompletionList {
    lsp_types::InlineCompletionList {
        items: list
            .items
            .into_iter()
            .map(|item| inline_completion_item(item, context))
            .collect(),
    }
}

/// Translates ferrule document highlight to LSP document highlight.
pub fn document_highlight(
    highlight: DocumentHighlight,
    context: &PositionTranslationContext,
) -> lsp_types::DocumentHighlight {
    lsp_types::DocumentHighlight {
        range: range(highlight.range, context),
        kind: highlight.kind.map(kinds::highlight_kind_to_lsp),
    }
}

/// Translates ferrule inlay hint to LSP inlay hint.
///
/// The label and tooltip are always emitted as plain strings.
pub fn inlay_hint(hint: InlayHint, context: &PositionTranslationContext) -> lsp_types::InlayHint {
    lsp_types::InlayHint {
        position: position(hint.position, context),
        label: lsp_types::InlayHintLabel::String(hint.label),
        kind: hint.kind.map(kinds::inlay_hint_kind_to_lsp),
        text_edits: text_edits(hint.text_edits, context),
        tooltip: hint.tooltip.map(lsp_types::InlayHintTooltip::String),
        padding_left: flag(hint.padding_left),
        padding_right: flag(hint.padding_right),
        data: hint.data,
    }
}

/// Translates ferrule folding range to LSP folding range.
///
/// Columns are re-encoded relative to their line,
/// lines past the end of the text are clamped to the last line.
pub fn folding_range(
    folding: FoldingRange,
    context: &PositionTranslationContext,
) -> lsp_types::FoldingRange {
    let endpoint = |line: u32, column: Option<u32>| {
        let lsp_position = position(Position::new(line, column.unwrap_or(0)), context);
        (lsp_position.line, column.map(|_| lsp_position.character))
    };
    let (start_line, start_character) = endpoint(folding.start_line, folding.start_column);
    let (end_line, end_character) = endpoint(folding.end_line, folding.end_column);
    lsp_types::FoldingRange {
        start_line,
        start_character,
        end_line,
        end_character,
        kind: folding.kind.map(kinds::folding_kind_to_lsp),
        collapsed_text: folding.collapsed_text,
    }
}

/// Translates ferrule document symbol (and its children) to LSP document symbol.
#[allow(deprecated)]
pub fn document_symbol(
    symbol: DocumentSymbol,
    context: &PositionTranslationContext,
) -> lsp_types::DocumentSymbol {
    lsp_types::DocumentSymbol {
        name: symbol.name,
        detail: symbol.detail,
        kind: kinds::symbol_kind_to_lsp(symbol.kind),
        tags: non_empty(
            symbol
                .tags
                .into_iter()
                .map(kinds::symbol_tag_to_lsp)
                .collect(),
        ),
        deprecated: flag(symbol.deprecated),
        range: range(symbol.range, context),
        selection_range: range(symbol.selection_range, context),
        children: non_empty(
            symbol
                .children
                .into_iter()
                .map(|child| document_symbol(child, context))
                .collect(),
        ),
    }
}

/// Translates the ferrule selection range node `id` (and its ancestors) to LSP selection range.
///
/// Returns `None` if `id` isn't in `ranges`.
pub fn selection_range(
    ranges: &SelectionRanges,
    id: SelectionId,
    context: &PositionTranslationContext,
) -> Option<lsp_types::SelectionRange> {
    let chain: Vec<Range> = ranges.chain(id).map(|(_, node)| node.range).collect();
    // Builds the chain from the outermost range inwards.
    chain.into_iter().rev().fold(None, |parent, node_range| {
        Some(lsp_types::SelectionRange {
            range: range(node_range, context),
            parent: parent.map(Box::new),
        })
    })
}

/// Translates ferrule selection range nodes to LSP selection ranges (ids that aren't in `ranges` are skipped).
pub fn selection_ranges(
    ranges: &SelectionRanges,
    ids: &[SelectionId],
    context: &PositionTranslationContext,
) -> Vec<lsp_types::SelectionRange> {
    ids.iter()
        .filter_map(|id| selection_range(ranges, *id, context))
        .collect()
}

/// Translates ferrule color to LSP color.
pub fn color(color: Color) -> lsp_types::Color {
    lsp_types::Color {
        red: color.red,
        green: color.green,
        blue: color.blue,
        alpha: color.alpha,
    }
}

/// Translates ferrule color information to LSP color information.
pub fn color_information(
    info: ColorInformation,
    context: &PositionTranslationContext,
) -> lsp_types::ColorInformation {
    lsp_types::ColorInformation {
        range: range(info.range, context),
        color: color(info.color),
    }
}

/// Translates ferrule color presentation to LSP color presentation.
pub fn color_presentation(
    presentation: ColorPresentation,
    context: &PositionTranslationContext,
) -> lsp_types::ColorPresentation {
    lsp_types::ColorPresentation {
        label: presentation.label,
        text_edit: presentation.text_edit.map(|edit| text_edit(edit, context)),
        additional_text_edits: text_edits(presentation.additional_text_edits, context),
    }
}

/// Translates ferrule location to LSP location.
///
/// `context` must be the context of the document the location points to.
pub fn location(location: Location, context: &PositionTranslationContext) -> lsp_types::Location {
    lsp_types::Location {
        uri: location.uri,
        range: range(location.range, context),
    }
}

/// Translates ferrule location link to LSP location link.
///
/// The origin selection range is translated using the `origin` context
/// while the target ranges are translated using the `target` context.
pub fn location_link(
    link: LocationLink,
    origin: &PositionTranslationContext,
    target: &PositionTranslationContext,
) -> lsp_types::LocationLink {
    lsp_types::LocationLink {
        origin_selection_range: link.origin_selection_range.map(|it| range(it, origin)),
        target_uri: link.target_uri,
        target_range: range(link.target_range, target),
        target_selection_range: range(link.target_selection_range, target),
    }
}

/// Translates ferrule workspace edit to LSP workspace edit.
///
/// Edits are translated using the context `documents` resolves for their document
/// (edits for unknown documents are copied as is).
pub fn workspace_edit(
    edit: WorkspaceEdit,
    documents: &(impl ContextResolver + ?Sized),
) -> lsp_types::WorkspaceEdit {
    let changes: HashMap<lsp_types::Url, Vec<lsp_types::TextEdit>> = edit
        .changes
        .into_iter()
        .map(|(uri, edits)| {
            let edits = edits
                .into_iter()
                .map(|edit| resolved_text_edit(edit, &uri, documents))
                .collect();
            (uri, edits)
        })
        .collect();

    let document_changes = (!edit.document_changes.is_empty()).then(|| {
        if edit
            .document_changes
            .iter()
            .all(|change| matches!(change, DocumentChange::Edit(_)))
        {
            lsp_types::DocumentChanges::Edits(
                edit.document_changes
                    .into_iter()
                    .filter_map(|change| match change {
                        DocumentChange::Edit(edit) => Some(document_edit(edit, documents)),
                        _ => None,
                    })
                    .collect(),
            )
        } else {
            lsp_types::DocumentChanges::Operations(
                edit.document_changes
                    .into_iter()
                    .map(|change| document_change(change, documents))
                    .collect(),
            )
        }
    });

    lsp_types::WorkspaceEdit {
        changes: (!changes.is_empty()).then_some(changes),
        document_changes,
        change_annotations: None,
    }
}

/// Translates ferrule code action to LSP code action.
///
/// `context` is the context of the document the action was computed for,
/// other documents (e.g. the targets of edits) are resolved using `documents`.
pub fn code_action(
    action: CodeAction,
    context: &PositionTranslationContext,
    documents: &(impl ContextResolver + ?Sized),
) -> lsp_types::CodeAction {
    lsp_types::CodeAction {
        title: action.title,
        kind: action
            .kind
            .map(|kind| lsp_types::CodeActionKind::from(kind.as_str().to_owned())),
        diagnostics: non_empty(
            action
                .diagnostics
                .into_iter()
                .map(|it| diagnostic(it, context, documents))
                .collect(),
        ),
        edit: action.edit.map(|edit| workspace_edit(edit, documents)),
        command: action.command.map(command),
        is_preferred: flag(action.is_preferred),
        disabled: action
            .disabled
            .map(|reason| lsp_types::CodeActionDisabled { reason }),
        data: action.data,
    }
}

/// Translates ferrule code action or command to LSP code action or command.
pub fn code_action_or_command(
    action: CodeActionOrCommand,
    context: &PositionTranslationContext,
    documents: &(impl ContextResolver + ?Sized),
) -> lsp_types::CodeActionOrCommand {
    match action {
        CodeActionOrCommand::CodeAction(action) => {
            lsp_types::CodeActionOrCommand::CodeAction(code_action(action, context, documents))
        }
        CodeActionOrCommand::Command(it) => lsp_types::CodeActionOrCommand::Command(command(it)),
    }
}

/// Translates ferrule diagnostic to LSP diagnostic.
///
/// Related information may point to other documents, those are resolved using `documents`.
pub fn diagnostic(
    diagnostic: Diagnostic,
    context: &PositionTranslationContext,
    documents: &(impl ContextResolver + ?Sized),
) -> lsp_types::Diagnostic {
    lsp_types::Diagnostic {
        range: range(diagnostic.range, context),
        severity: diagnostic.severity.map(kinds::severity_to_lsp),
        code: diagnostic.code.map(|code| match code {
            DiagnosticCode::Number(number) => lsp_types::NumberOrString::Number(number),
            DiagnosticCode::String(code) => lsp_types::NumberOrString::String(code),
        }),
        code_description: diagnostic
            .code_description
            .map(|href| lsp_types::CodeDescription { href }),
        source: diagnostic.source,
        message: diagnostic.message,
        related_information: non_empty(
            diagnostic
                .related_information
                .into_iter()
                .map(|info| lsp_types::DiagnosticRelatedInformation {
                    location: resolved_location(info.location, documents),
                    message: info.message,
                })
                .collect(),
        ),
        tags: non_empty(
            diagnostic
                .tags
                .into_iter()
                .map(kinds::diagnostic_tag_to_lsp)
                .collect(),
        ),
        data: diagnostic.data,
    }
}

/// Translates ferrule document link to LSP document link.
pub fn document_link(
    link: DocumentLink,
    context: &PositionTranslationContext,
) -> lsp_types::DocumentLink {
    lsp_types::DocumentLink {
        range: range(link.range, context),
        target: link.target,
        tooltip: link.tooltip,
        data: link.data,
    }
}

/// Translates ferrule workspace symbol to LSP workspace symbol.
pub fn workspace_symbol(
    symbol: WorkspaceSymbol,
    documents: &(impl ContextResolver + ?Sized),
) -> lsp_types::WorkspaceSymbol {
    lsp_types::WorkspaceSymbol {
        name: symbol.name,
        kind: kinds::symbol_kind_to_lsp(symbol.kind),
        tags: non_empty(
            symbol
                .tags
                .into_iter()
                .map(kinds::symbol_tag_to_lsp)
                .collect(),
        ),
        container_name: symbol.container_name,
        location: match symbol.location {
            SymbolLocation::Range(location) => {
                lsp_types::OneOf::Left(resolved_location(location, documents))
            }
            SymbolLocation::Document(uri) => {
                lsp_types::OneOf::Right(lsp_types::WorkspaceLocation { uri })
            }
        },
        data: symbol.data,
    }
}

/// Translates ferrule signature help to LSP signature help.
///
/// Parameter label offsets are re-encoded relative to the signature label using the context's encoding.
pub fn signature_help(
    help: SignatureHelp,
    context: &PositionTranslationContext,
) -> lsp_types::SignatureHelp {
    lsp_types::SignatureHelp {
        signatures: help
            .signatures
            .into_iter()
            .map(|signature| {
                let parameters = signature
                    .parameters
                    .into_iter()
                    .map(|parameter| lsp_types::ParameterInformation {
                        label: match parameter.label {
                            ParameterLabel::Text(text) => lsp_types::ParameterLabel::Simple(text),
                            ParameterLabel::Span(start, end) => {
                                lsp_types::ParameterLabel::LabelOffsets([
                                    label_offset(&signature.label, start, context),
                                    label_offset(&signature.label, end, context),
                                ])
                            }
                        },
                        documentation: parameter.documentation.map(documentation),
                    })
                    .collect();
                lsp_types::SignatureInformation {
                    label: signature.label,
                    documentation: signature.documentation.map(documentation),
                    parameters: non_empty(parameters),
                    active_parameter: signature.active_parameter,
                }
            })
            .collect(),
        active_signature: help.active_signature,
        active_parameter: help.active_parameter,
    }
}

/// Translates ferrule hover content to LSP hover content.
pub fn hover(hover: Hover, context: &PositionTranslationContext) -> lsp_types::Hover {
    lsp_types::Hover {
        contents: lsp_types::HoverContents::Markup(markup(hover.contents)),
        range: hover.range.map(|it| range(it, context)),
    }
}

fn text_edits(
    edits: Vec<TextEdit>,
    context: &PositionTranslationContext,
) -> Option<Vec<lsp_types::TextEdit>> {
    non_empty(
        edits
            .into_iter()
            .map(|edit| text_edit(edit, context))
            .collect(),
    )
}

fn document_edit(
    edit: ferrule_core::DocumentEdit,
    documents: &(impl ContextResolver + ?Sized),
) -> lsp_types::TextDocumentEdit {
    let edits = edit
        .edits
        .into_iter()
        .map(|it| lsp_types::OneOf::Left(resolved_text_edit(it, &edit.uri, documents)))
        .collect();
    lsp_types::TextDocumentEdit {
        text_document: lsp_types::OptionalVersionedTextDocumentIdentifier {
            uri: edit.uri,
            version: edit.version,
        },
        edits,
    }
}

fn document_change(
    change: DocumentChange,
    documents: &(impl ContextResolver + ?Sized),
) -> lsp_types::DocumentChangeOperation {
    let op = match change {
        DocumentChange::Edit(edit) => {
            return lsp_types::DocumentChangeOperation::Edit(document_edit(edit, documents))
        }
        DocumentChange::Create { uri, options } => {
            lsp_types::ResourceOp::Create(lsp_types::CreateFile {
                uri,
                options: (options != Default::default()).then_some(
                    lsp_types::CreateFileOptions {
                        overwrite: options.overwrite,
                        ignore_if_exists: options.ignore_if_exists,
                    },
                ),
                annotation_id: None,
            })
        }
        DocumentChange::Rename {
            old_uri,
            new_uri,
            options,
        } => lsp_types::ResourceOp::Rename(lsp_types::RenameFile {
            old_uri,
            new_uri,
            options: (options != Default::default()).then_some(lsp_types::RenameFileOptions {
                overwrite: options.overwrite,
                ignore_if_exists: options.ignore_if_exists,
            }),
            annotation_id: None,
        }),
        DocumentChange::Delete { uri, options } => {
            lsp_types::ResourceOp::Delete(lsp_types::DeleteFile {
                uri,
                options: (options != Default::default()).then_some(
                    lsp_types::DeleteFileOptions {
                        recursive: options.recursive,
                        ignore_if_not_exists: options.ignore_if_not_exists,
                        annotation_id: None,
                    },
                ),
            })
        }
    };
    lsp_types::DocumentChangeOperation::Op(op)
}

fn resolved_location(
    location: Location,
    documents: &(impl ContextResolver + ?Sized),
) -> lsp_types::Location {
    let range = resolved_range(location.range, &location.uri, documents);
    lsp_types::Location {
        uri: location.uri,
        range,
    }
}

fn resolved_text_edit(
    edit: TextEdit,
    uri: &lsp_types::Url,
    documents: &(impl ContextResolver + ?Sized),
) -> lsp_types::TextEdit {
    lsp_types::TextEdit {
        range: resolved_range(edit.range, uri, documents),
        new_text: edit.new_text,
    }
}

/// Translates a range in the document `uri`, ranges in unknown documents are copied as is.
fn resolved_range(
    range: Range,
    uri: &lsp_types::Url,
    documents: &(impl ContextResolver + ?Sized),
) -> lsp_types::Range {
    match documents.resolve(uri) {
        Some(context) => self::range(range, &context),
        None => lsp_types::Range::new(
            lsp_types::Position::new(range.start.line, range.start.column),
            lsp_types::Position::new(range.end.line, range.end.column),
        ),
    }
}

/// Re-encodes a byte offset into `label` (rounded down to a codepoint boundary).
fn label_offset(label: &str, offset: u32, context: &PositionTranslationContext) -> u32 {
    let bytes = label.as_bytes();
    let len = (offset as usize).min(bytes.len());
    let units = match context.encoding.wide() {
        Some(wide) => codec::utf8_to_wide_len(bytes, len, wide),
        None => codec::floor_char_boundary(bytes, len),
    };
    u32::try_from(units).unwrap_or(u32::MAX)
}

fn flag(value: bool) -> Option<bool> {
    value.then_some(true)
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}
