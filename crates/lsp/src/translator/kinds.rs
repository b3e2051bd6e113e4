//! One-to-one translations between ferrule and LSP enumerations.
//!
//! LSP values without a ferrule counterpart translate to `None`.

use ferrule_core::{
    CompletionKind, CompletionTag, DiagnosticTag, FoldingKind, HighlightKind, InlayHintKind,
    InsertTextFormat, InsertTextMode, MarkupKind, Severity, SymbolKind, SymbolTag,
};

/// Generates a pair of functions that translate between a ferrule enum and its LSP counterpart.
macro_rules! translate_enum {
    ($to_lsp:ident, $from_lsp:ident, $core:ident => $lsp:ident { $($variant:ident => $value:ident),+ $(,)? }) => {
        pub fn $to_lsp(value: $core) -> lsp_types::$lsp {
            match value {
                $($core::$variant => lsp_types::$lsp::$value,)+
            }
        }

        #[allow(unreachable_patterns)]
        pub fn $from_lsp(value: lsp_types::$lsp) -> Option<$core> {
            match value {
                $(lsp_types::$lsp::$value => Some($core::$variant),)+
                _ => None,
            }
        }
    };
}

translate_enum!(completion_kind_to_lsp, completion_kind_from_lsp, CompletionKind => CompletionItemKind {
    Text => TEXT,
    Method => METHOD,
    Function => FUNCTION,
    Constructor => CONSTRUCTOR,
    Field => FIELD,
    Variable => VARIABLE,
    Class => CLASS,
    Interface => INTERFACE,
    Module => MODULE,
    Property => PROPERTY,
    Unit => UNIT,
    Value => VALUE,
    Enum => ENUM,
    Keyword => KEYWORD,
    Snippet => SNIPPET,
    Color => COLOR,
    File => FILE,
    Reference => REFERENCE,
    Folder => FOLDER,
    EnumMember => ENUM_MEMBER,
    Constant => CONSTANT,
    Struct => STRUCT,
    Event => EVENT,
    Operator => OPERATOR,
    TypeParameter => TYPE_PARAMETER,
});

translate_enum!(completion_tag_to_lsp, completion_tag_from_lsp, CompletionTag => CompletionItemTag {
    Deprecated => DEPRECATED,
});

translate_enum!(insert_text_format_to_lsp, insert_text_format_from_lsp, InsertTextFormat => InsertTextFormat {
    PlainText => PLAIN_TEXT,
    Snippet => SNIPPET,
});

translate_enum!(insert_text_mode_to_lsp, insert_text_mode_from_lsp, InsertTextMode => InsertTextMode {
    AsIs => AS_IS,
    AdjustIndentation => ADJUST_INDENTATION,
});

translate_enum!(highlight_kind_to_lsp, highlight_kind_from_lsp, HighlightKind => DocumentHighlightKind {
    Text => TEXT,
    Read => READ,
    Write => WRITE,
});

translate_enum!(inlay_hint_kind_to_lsp, inlay_hint_kind_from_lsp, InlayHintKind => InlayHintKind {
    Type => TYPE,
    Parameter => PARAMETER,
});

translate_enum!(folding_kind_to_lsp, folding_kind_from_lsp, FoldingKind => FoldingRangeKind {
    Comment => Comment,
    Imports => Imports,
    Region => Region,
});

translate_enum!(symbol_kind_to_lsp, symbol_kind_from_lsp, SymbolKind => SymbolKind {
    File => FILE,
    Module => MODULE,
    Namespace => NAMESPACE,
    Package => PACKAGE,
    Class => CLASS,
    Method => METHOD,
    Property => PROPERTY,
    Field => FIELD,
    Constructor => CONSTRUCTOR,
    Enum => ENUM,
    Interface => INTERFACE,
    Function => FUNCTION,
    Variable => VARIABLE,
    Constant => CONSTANT,
    String => STRING,
    Number => NUMBER,
    Boolean => BOOLEAN,
    Array => ARRAY,
    Object => OBJECT,
    Key => KEY,
    Null => NULL,
    EnumMember => ENUM_MEMBER,
    Struct => STRUCT,
    Event => EVENT,
    Operator => OPERATOR,
    TypeParameter => TYPE_PARAMETER,
});

translate_enum!(symbol_tag_to_lsp, symbol_tag_from_lsp, SymbolTag => SymbolTag {
    Deprecated => DEPRECATED,
});

translate_enum!(severity_to_lsp, severity_from_lsp, Severity => DiagnosticSeverity {
    Error => ERROR,
    Warning => WARNING,
    Information => INFORMATION,
    Hint => HINT,
});

translate_enum!(diagnostic_tag_to_lsp, diagnostic_tag_from_lsp, DiagnosticTag => DiagnosticTag {
    Unnecessary => UNNECESSARY,
    Deprecated => DEPRECATED,
});

translate_enum!(markup_kind_to_lsp, markup_kind_from_lsp, MarkupKind => MarkupKind {
    PlainText => PlainText,
    Markdown => Markdown,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_translations_work() {
        for kind in [
            SymbolKind::File,
            SymbolKind::Struct,
            SymbolKind::TypeParameter,
        ] {
            assert_eq!(symbol_kind_from_lsp(symbol_kind_to_lsp(kind)), Some(kind));
        }
        assert_eq!(
            completion_kind_to_lsp(CompletionKind::EnumMember),
            lsp_types::CompletionItemKind::ENUM_MEMBER
        );
        assert_eq!(
            severity_to_lsp(Severity::Hint),
            lsp_types::DiagnosticSeverity::HINT
        );

        // Unknown LSP values have no ferrule counterpart.
        assert_eq!(
            severity_from_lsp(serde_json::from_value(serde_json::json!(9)).unwrap()),
            None
        );
        assert_eq!(
            symbol_kind_from_lsp(serde_json::from_value(serde_json::json!(0)).unwrap()),
            None
        );
    }
}
