use crate::{Range, TextEdit};

/// An RGBA color with components in the range `[0, 1]`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

/// A color reference in a document.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ColorInformation {
    pub range: Range,
    pub color: Color,
}

/// A textual representation of a color.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct ColorPresentation {
    pub label: String,
    /// Edit applied when the presentation is selected (defaults to inserting the label).
    pub text_edit: Option<TextEdit>,
    pub additional_text_edits: Vec<TextEdit>,
}
