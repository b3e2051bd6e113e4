//! Signature help.

use crate::MarkupContent;

/// Signatures of the callable at the cursor.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct SignatureHelp {
    pub signatures: Vec<SignatureInformation>,
    pub active_signature: Option<u32>,
    pub active_parameter: Option<u32>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct SignatureInformation {
    /// The rendered signature (e.g. `fn add(a: i32, b: i32) -> i32`).
    pub label: String,
    pub documentation: Option<MarkupContent>,
    pub parameters: Vec<ParameterInformation>,
    /// Overrides the active parameter of the enclosing [`SignatureHelp`].
    pub active_parameter: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterInformation {
    pub label: ParameterLabel,
    pub documentation: Option<MarkupContent>,
}

/// The label of a parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParameterLabel {
    /// A substring of the signature label.
    Text(String),
    /// Start and end byte offsets (end exclusive) into the signature label.
    Span(u32, u32),
}
