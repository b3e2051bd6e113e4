//! Code actions (e.g. quick fixes and refactorings).

use serde_json::Value;

use crate::{Command, Diagnostic, WorkspaceEdit};

/// A change (and/or a command) that can be applied to the workspace.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CodeAction {
    pub title: String,
    pub kind: Option<CodeActionKind>,
    /// Diagnostics resolved by this action.
    pub diagnostics: Vec<Diagnostic>,
    pub edit: Option<WorkspaceEdit>,
    /// Command executed after the edit (if any) is applied.
    pub command: Option<Command>,
    pub is_preferred: bool,
    /// Reason why the action can't currently be applied (if any).
    pub disabled: Option<String>,
    pub data: Option<Value>,
}

/// A code action or a bare command.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeActionOrCommand {
    CodeAction(CodeAction),
    Command(Command),
}

/// The kind of a code action.
///
/// Kinds are hierarchical and dot separated (e.g. `refactor.extract`),
/// kinds without a dedicated variant are kept as is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CodeActionKind {
    Empty,
    QuickFix,
    Refactor,
    RefactorExtract,
    RefactorInline,
    RefactorRewrite,
    Source,
    SourceOrganizeImports,
    SourceFixAll,
    Other(String),
}

impl CodeActionKind {
    /// Returns the dot separated representation of the kind.
    pub fn as_str(&self) -> &str {
        match self {
            CodeActionKind::Empty => "",
            CodeActionKind::QuickFix => "quickfix",
            CodeActionKind::Refactor => "refactor",
            CodeActionKind::RefactorExtract => "refactor.extract",
            CodeActionKind::RefactorInline => "refactor.inline",
            CodeActionKind::RefactorRewrite => "refactor.rewrite",
            CodeActionKind::Source => "source",
            CodeActionKind::SourceOrganizeImports => "source.organizeImports",
            CodeActionKind::SourceFixAll => "source.fixAll",
            CodeActionKind::Other(kind) => kind,
        }
    }
}

impl From<&str> for CodeActionKind {
    fn from(kind: &str) -> Self {
        match kind {
            "" => CodeActionKind::Empty,
            "quickfix" => CodeActionKind::QuickFix,
            "refactor" => CodeActionKind::Refactor,
            "refactor.extract" => CodeActionKind::RefactorExtract,
            "refactor.inline" => CodeActionKind::RefactorInline,
            "refactor.rewrite" => CodeActionKind::RefactorRewrite,
            "source" => CodeActionKind::Source,
            "source.organizeImports" => CodeActionKind::SourceOrganizeImports,
            "source.fixAll" => CodeActionKind::SourceFixAll,
            other => CodeActionKind::Other(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_action_kinds_work() {
        for kind in [
            "",
            "quickfix",
            "refactor.extract",
            "source.organizeImports",
            "source.fixAll",
            "refactor.move",
        ] {
            assert_eq!(CodeActionKind::from(kind).as_str(), kind);
        }
        assert_eq!(
            CodeActionKind::from("refactor.move"),
            CodeActionKind::Other("refactor.move".to_string())
        );
    }
}
