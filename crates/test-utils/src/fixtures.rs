//! Test fixtures for ferrule.

/// A line with a single astral plane emoji (U+1F600) at byte offset 6.
pub const EMOJI_TEXT: &str = "hello 😀 world";

/// A line of Han ideographs (3 bytes and 1 UTF-16 code unit each).
pub const CJK_TEXT: &str = "你好世界";

/// A line made up only of astral plane codepoints (U+1D11E, 4 bytes and 2 UTF-16 code units each).
pub const ASTRAL_TEXT: &str = "𝄞𝄞𝄞";

/// A small program with multi-byte characters on some lines.
///
/// Line 1 ends with two Han ideographs, line 5 contains a waving hand emoji (U+1F44B).
pub const SOURCE: &str = "type Greeter struct {
\tname string // 名前
}

func (g *Greeter) Greet(emoji string) string {
\treturn \"👋 \" + g.name + emoji
}
";

/// A second document (line 0 contains two crab emojis, U+1F980).
pub const OTHER_SOURCE: &str = "// 🦀🦀 helpers
func helper() {}
";

/// Returns a fixture with text, and groups of UTF-8 offsets and their equivalent UTF-8, UTF-16 and UTF-32 columns.
pub fn offset_position_encoding_fixture() -> (&'static str, Vec<OffsetPositionGroup>) {
    // Character - Description | UTF-8 code units | UTF-16 code units | UTF-32 code units
    // A - Latin A. | 1 | 1 | 1
    // 好 - Han ideograph (U+597D). | 3 | 1 | 1
    // 𣎴 - Han ideograph (U+233B4). | 4 | 2 | 1
    // 😀 - Grinning face (U+1F600). | 4 | 2 | 1
    (
        "A\n好\n𣎴\n\nhello 😀 world",
        vec![
            OffsetPositionGroup::new(0, 0, 0, 0, 0),
            OffsetPositionGroup::new(1, 0, 1, 1, 1),
            OffsetPositionGroup::new(2, 1, 0, 0, 0),
            OffsetPositionGroup::new(5, 1, 3, 1, 1),
            OffsetPositionGroup::new(6, 2, 0, 0, 0),
            OffsetPositionGroup::new(10, 2, 4, 2, 1),
            // Empty line.
            OffsetPositionGroup::new(11, 3, 0, 0, 0),
            OffsetPositionGroup::new(12, 4, 0, 0, 0),
            // Before and after the emoji.
            OffsetPositionGroup::new(18, 4, 6, 6, 6),
            OffsetPositionGroup::new(22, 4, 10, 8, 7),
            // End of text.
            OffsetPositionGroup::new(28, 4, 16, 14, 13),
        ],
    )
}

/// A UTF-8 offset and its equivalent line and UTF-8, UTF-16 and UTF-32 columns.
#[derive(Debug, Clone, Copy)]
pub struct OffsetPositionGroup {
    pub offset: usize,
    pub line: u32,
    pub col_utf8: u32,
    pub col_utf16: u32,
    pub col_utf32: u32,
}

impl OffsetPositionGroup {
    /// Creates new offset/position group.
    pub fn new(offset: usize, line: u32, col_utf8: u32, col_utf16: u32, col_utf32: u32) -> Self {
        Self {
            offset,
            line,
            col_utf8,
            col_utf16,
            col_utf32,
        }
    }
}
