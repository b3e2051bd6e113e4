//! Diagnostics (e.g. errors and warnings).

use serde_json::Value;
use url::Url;

use crate::{Location, Range};

/// A diagnostic (e.g. an error or a warning).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Diagnostic {
    pub range: Range,
    pub severity: Option<Severity>,
    pub code: Option<DiagnosticCode>,
    /// A link to documentation for the diagnostic code.
    pub code_description: Option<Url>,
    /// The tool that produced the diagnostic.
    pub source: Option<String>,
    pub message: String,
    /// Locations (possibly in other documents) related to the diagnostic.
    pub related_information: Vec<RelatedInformation>,
    pub tags: Vec<DiagnosticTag>,
    pub data: Option<Value>,
}

impl Diagnostic {
    /// Creates a diagnostic.
    pub fn new(range: Range, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            range,
            severity: Some(severity),
            message: message.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Error,
    Warning,
    Information,
    Hint,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    Number(i32),
    String(String),
}

/// A message attached to a location related to a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelatedInformation {
    pub location: Location,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticTag {
    /// Unused or unnecessary code.
    Unnecessary,
    Deprecated,
}
