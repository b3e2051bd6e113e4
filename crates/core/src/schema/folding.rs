/// A foldable region.
///
/// Columns are optional and, when present, count UTF-8 bytes on their respective lines.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct FoldingRange {
    pub start_line: u32,
    pub start_column: Option<u32>,
    pub end_line: u32,
    pub end_column: Option<u32>,
    pub kind: Option<FoldingKind>,
    /// Text shown in place of the folded region.
    pub collapsed_text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoldingKind {
    Comment,
    Imports,
    Region,
}
