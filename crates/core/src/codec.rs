//! Conversions between absolute byte offsets, byte-oriented positions and
//! wide (i.e. UTF-16 or UTF-32 code unit) columns of a text buffer.
//!
//! Text buffers are taken as raw bytes and split into lines on line feeds (`\n`).
//! Bytes that aren't part of a valid UTF-8 sequence count as one byte and one code unit each.
//!
//! None of the operations in this module fail or panic on out-of-range input,
//! offsets and positions are instead clamped to the nearest valid boundary
//! (see the `try_*` variants for checked conversions).
//!
//! Clamping is reported only as `trace` level [`tracing`] events. The crate installs no subscriber,
//! so nothing is emitted unless the embedding application opts in, and callers that need to detect
//! stale coordinates should compare document versions (or use the `try_*` variants) instead.

use crate::error::OffsetError;
use crate::text::Position;

/// A position encoding i.e. the unit used to count columns.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Columns count UTF-8 code units (i.e. bytes).
    Utf8,
    /// Columns count UTF-16 code units.
    #[default]
    Utf16,
    /// Columns count UTF-32 code units (i.e. Unicode scalar values).
    Utf32,
}

impl Encoding {
    /// Returns the wide encoding (if any).
    pub fn wide(self) -> Option<WideEncoding> {
        match self {
            Encoding::Utf8 => None,
            Encoding::Utf16 => Some(WideEncoding::Utf16),
            Encoding::Utf32 => Some(WideEncoding::Utf32),
        }
    }
}

/// An encoding whose code units are wider than a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WideEncoding {
    Utf16,
    Utf32,
}

/// Returns the number of lines in `text` (a trailing line feed starts a final empty line).
pub fn line_count(text: &[u8]) -> usize {
    text.iter().filter(|byte| **byte == b'\n').count() + 1
}

/// Returns the bytes of `line` excluding its line feed terminator (if any).
pub fn line(text: &[u8], line: u32) -> Option<&[u8]> {
    line_span(text, line).map(|(start, end)| &text[start..end])
}

/// Converts an absolute byte offset to a byte-oriented position,
/// offsets past the end of `text` are clamped to the end of the text.
pub fn byte_offset_to_position(text: &[u8], offset: usize) -> Position {
    if offset > text.len() {
        tracing::trace!(offset, len = text.len(), "clamped byte offset to end of text");
    }
    locate(text, offset.min(text.len()))
}

/// Converts an absolute byte offset to a byte-oriented position,
/// or returns an error if the offset is past the end of `text`.
pub fn try_byte_offset_to_position(text: &[u8], offset: usize) -> Result<Position, OffsetError> {
    if offset > text.len() {
        return Err(OffsetError::OffsetOutOfBounds {
            offset,
            len: text.len(),
        });
    }
    Ok(locate(text, offset))
}

/// Converts a byte-oriented position to an absolute byte offset,
/// lines past the end of `text` are clamped to the end of the text and
/// columns past the end of a line are clamped to the end of the line.
pub fn position_to_byte_offset(text: &[u8], position: Position) -> usize {
    resolve(text, position).unwrap_or_else(|(offset, error)| {
        tracing::trace!(%error, offset, "clamped position");
        offset
    })
}

/// Converts a byte-oriented position to an absolute byte offset,
/// or returns an error if either the line or the column doesn't exist in `text`.
pub fn try_position_to_byte_offset(text: &[u8], position: Position) -> Result<usize, OffsetError> {
    resolve(text, position).map_err(|(_, error)| error)
}

/// Returns the nearest valid position to `position` in `text`.
///
/// Lines past the end of `text` are clamped to the end of the text,
/// columns past the end of a line are clamped to the end of the line, and
/// columns inside a multi-byte codepoint are rounded down to the start of the codepoint.
pub fn clamp_position(text: &[u8], position: Position) -> Position {
    match self::line(text, position.line) {
        Some(bytes) => {
            let column = floor_char_boundary(bytes, position.column as usize);
            if column != position.column as usize {
                tracing::trace!(%position, column, "clamped column to a codepoint boundary");
            }
            Position::new(position.line, saturate(column))
        }
        None => {
            tracing::trace!(%position, "clamped line to end of text");
            locate(text, text.len())
        }
    }
}

/// Converts a byte column on `line` to a UTF-16 code unit column.
///
/// Columns past the end of the line are clamped to the end of the line,
/// columns inside a multi-byte codepoint are rounded down to the start of the codepoint,
/// and lines that don't exist yield zero.
pub fn utf8_to_utf16_offset(text: &[u8], line: u32, column: u32) -> u32 {
    utf8_to_wide_offset(text, line, column, WideEncoding::Utf16)
}

/// Converts a UTF-16 code unit column on `line` to a byte column.
///
/// Columns past the end of the line are clamped to the end of the line,
/// columns between the two halves of a surrogate pair are rounded down to the start of the pair,
/// and lines that don't exist yield zero.
pub fn utf16_to_utf8_offset(text: &[u8], line: u32, column: u32) -> u32 {
    wide_to_utf8_offset(text, line, column, WideEncoding::Utf16)
}

/// Converts a byte column on `line` to a wide column (see [`utf8_to_utf16_offset`]).
pub fn utf8_to_wide_offset(text: &[u8], line: u32, column: u32, encoding: WideEncoding) -> u32 {
    match self::line(text, line) {
        Some(bytes) => saturate(utf8_to_wide_len(bytes, column as usize, encoding)),
        None => {
            tracing::trace!(line, "line not found");
            0
        }
    }
}

/// Converts a wide column on `line` to a byte column (see [`utf16_to_utf8_offset`]).
pub fn wide_to_utf8_offset(text: &[u8], line: u32, column: u32, encoding: WideEncoding) -> u32 {
    match self::line(text, line) {
        Some(bytes) => saturate(wide_to_utf8_len(bytes, column as usize, encoding)),
        None => {
            tracing::trace!(line, "line not found");
            0
        }
    }
}

/// Returns the number of wide code units in `bytes`.
pub fn wide_len(bytes: &[u8], encoding: WideEncoding) -> usize {
    utf8_to_wide_len(bytes, bytes.len(), encoding)
}

/// Returns the number of wide code units spanned by the codepoints of `bytes` that end at or before `len`
/// (a codepoint that would straddle `len` is excluded).
pub fn utf8_to_wide_len(bytes: &[u8], len: usize, encoding: WideEncoding) -> usize {
    let prefix = &bytes[..len.min(bytes.len())];
    if prefix.is_ascii() {
        return prefix.len();
    }

    let mut consumed = 0;
    let mut units = 0;
    for scalar in scalars(bytes) {
        consumed += scalar.len_utf8;
        if consumed > len {
            break;
        }
        units += scalar.width(encoding);
    }
    units
}

/// Returns the number of leading bytes of `bytes` that span at most `units` wide code units
/// (a codepoint that would straddle `units` is excluded).
pub fn wide_to_utf8_len(bytes: &[u8], units: usize, encoding: WideEncoding) -> usize {
    if bytes.is_ascii() {
        return units.min(bytes.len());
    }

    let mut len = 0;
    let mut counted = 0;
    for scalar in scalars(bytes) {
        counted += scalar.width(encoding);
        if counted > units {
            break;
        }
        len += scalar.len_utf8;
    }
    len
}

/// Converts a byte-oriented position to a `(line, column)` pair where the column is counted in `encoding`.
///
/// The position is clamped first (see [`clamp_position`]).
pub fn encode_position(text: &[u8], position: Position, encoding: Encoding) -> (u32, u32) {
    let position = clamp_position(text, position);
    let column = match encoding.wide() {
        Some(wide) => utf8_to_wide_offset(text, position.line, position.column, wide),
        None => position.column,
    };
    (position.line, column)
}

/// Converts a `(line, column)` pair where the column is counted in `encoding` to a byte-oriented position.
///
/// Lines past the end of `text` are clamped to the end of the text,
/// and columns are clamped to the nearest preceding codepoint boundary on the line.
pub fn decode_position(text: &[u8], line: u32, column: u32, encoding: Encoding) -> Position {
    match self::line(text, line) {
        Some(bytes) => {
            let column = match encoding.wide() {
                Some(wide) => wide_to_utf8_len(bytes, column as usize, wide),
                None => floor_char_boundary(bytes, column as usize),
            };
            Position::new(line, saturate(column))
        }
        None => {
            tracing::trace!(line, column, "clamped line to end of text");
            locate(text, text.len())
        }
    }
}

/// Returns the start and end offsets of `line` (excluding the line feed).
fn line_span(text: &[u8], line: u32) -> Option<(usize, usize)> {
    let mut start = 0;
    for _ in 0..line {
        start += text[start..].iter().position(|byte| *byte == b'\n')? + 1;
    }
    let end = text[start..]
        .iter()
        .position(|byte| *byte == b'\n')
        .map_or(text.len(), |idx| start + idx);
    Some((start, end))
}

/// Returns the position of an offset that's known to be within bounds.
fn locate(text: &[u8], offset: usize) -> Position {
    let prefix = &text[..offset];
    let line = prefix.iter().filter(|byte| **byte == b'\n').count();
    let line_start = prefix
        .iter()
        .rposition(|byte| *byte == b'\n')
        .map_or(0, |idx| idx + 1);
    Position::new(saturate(line), saturate(offset - line_start))
}

/// Returns the offset for `position`, or the clamped offset and the reason for clamping.
fn resolve(text: &[u8], position: Position) -> Result<usize, (usize, OffsetError)> {
    let Some((start, end)) = line_span(text, position.line) else {
        return Err((
            text.len(),
            OffsetError::LineOutOfBounds {
                line: position.line,
                line_count: line_count(text),
            },
        ));
    };
    let len = end - start;
    let column = position.column as usize;
    if column > len {
        return Err((
            end,
            OffsetError::ColumnOutOfBounds {
                line: position.line,
                column: position.column,
                len,
            },
        ));
    }
    Ok(start + column)
}

/// Returns the largest codepoint boundary in `bytes` that's less than or equal to `column`.
///
/// Columns past the end of `bytes` are clamped to its length.
pub fn floor_char_boundary(bytes: &[u8], column: usize) -> usize {
    let prefix = &bytes[..column.min(bytes.len())];
    if prefix.is_ascii() {
        return prefix.len();
    }

    let mut len = 0;
    for scalar in scalars(bytes) {
        if len + scalar.len_utf8 > column {
            break;
        }
        len += scalar.len_utf8;
    }
    len
}

/// The size of a decoded codepoint (or of an invalid byte).
#[derive(Debug, Clone, Copy)]
struct Scalar {
    len_utf8: usize,
    len_utf16: usize,
}

impl Scalar {
    /// An invalid byte is replaced by a single code unit.
    const INVALID: Scalar = Scalar {
        len_utf8: 1,
        len_utf16: 1,
    };

    fn width(self, encoding: WideEncoding) -> usize {
        match encoding {
            WideEncoding::Utf16 => self.len_utf16,
            WideEncoding::Utf32 => 1,
        }
    }
}

/// Decodes `bytes` into scalars, yielding one replacement scalar per invalid byte.
fn scalars(bytes: &[u8]) -> impl Iterator<Item = Scalar> + '_ {
    bytes.utf8_chunks().flat_map(|chunk| {
        chunk
            .valid()
            .chars()
            .map(|ch| Scalar {
                len_utf8: ch.len_utf8(),
                len_utf16: ch.len_utf16(),
            })
            .chain(std::iter::repeat(Scalar::INVALID).take(chunk.invalid().len()))
    })
}

fn saturate(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_utils::fixtures;

    #[test]
    fn offsets_and_positions_work() {
        // Retrieves a fixture with text, and groups of UTF-8 offsets and their equivalent UTF-8, UTF-16 and UTF-32 columns.
        let (text, groups) = fixtures::offset_position_encoding_fixture();
        let text = text.as_bytes();

        for group in groups {
            let position = Position::new(group.line, group.col_utf8);

            // Verifies offset <-> position conversions.
            assert_eq!(byte_offset_to_position(text, group.offset), position);
            assert_eq!(position_to_byte_offset(text, position), group.offset);

            // Verifies byte column <-> wide column conversions.
            assert_eq!(
                utf8_to_utf16_offset(text, group.line, group.col_utf8),
                group.col_utf16
            );
            assert_eq!(
                utf16_to_utf8_offset(text, group.line, group.col_utf16),
                group.col_utf8
            );
            assert_eq!(
                utf8_to_wide_offset(text, group.line, group.col_utf8, WideEncoding::Utf32),
                group.col_utf32
            );
            assert_eq!(
                wide_to_utf8_offset(text, group.line, group.col_utf32, WideEncoding::Utf32),
                group.col_utf8
            );

            // Verifies encoded positions for all encodings.
            for (encoding, expected_column) in [
                (Encoding::Utf8, group.col_utf8),
                (Encoding::Utf16, group.col_utf16),
                (Encoding::Utf32, group.col_utf32),
            ] {
                assert_eq!(
                    encode_position(text, position, encoding),
                    (group.line, expected_column)
                );
                assert_eq!(
                    decode_position(text, group.line, expected_column, encoding),
                    position
                );
            }
        }
    }

    #[test]
    fn surrogate_pairs_and_cjk_work() {
        for (text, byte_column, utf16_column) in [
            // Emoji (U+1F600) at byte 6 is 4 bytes and 2 UTF-16 code units.
            (fixtures::EMOJI_TEXT, 10, 8),
            (fixtures::EMOJI_TEXT, 6, 6),
            (fixtures::EMOJI_TEXT, 14, 12),
            // Each Han ideograph is 3 bytes and 1 UTF-16 code unit.
            (fixtures::CJK_TEXT, 6, 2),
            (fixtures::CJK_TEXT, 12, 4),
            // Each musical symbol (U+1D11E) is 4 bytes and 2 UTF-16 code units.
            (fixtures::ASTRAL_TEXT, 8, 4),
            (fixtures::ASTRAL_TEXT, 12, 6),
        ] {
            let bytes = text.as_bytes();
            assert_eq!(utf8_to_utf16_offset(bytes, 0, byte_column), utf16_column);
            assert_eq!(utf16_to_utf8_offset(bytes, 0, utf16_column), byte_column);
        }
    }

    #[test]
    fn inner_columns_round_down() {
        for (text, byte_column, expected_utf16_column) in [
            // Inside the emoji.
            (fixtures::EMOJI_TEXT, 7, 6),
            (fixtures::EMOJI_TEXT, 9, 6),
            // Inside the second ideograph.
            (fixtures::CJK_TEXT, 4, 1),
            // Inside the last musical symbol.
            (fixtures::ASTRAL_TEXT, 11, 4),
        ] {
            assert_eq!(
                utf8_to_utf16_offset(text.as_bytes(), 0, byte_column),
                expected_utf16_column
            );
        }

        for (text, utf16_column, expected_byte_column) in [
            // Between the two halves of the emoji's surrogate pair.
            (fixtures::EMOJI_TEXT, 7, 6),
            (fixtures::ASTRAL_TEXT, 1, 0),
            (fixtures::ASTRAL_TEXT, 5, 8),
        ] {
            assert_eq!(
                utf16_to_utf8_offset(text.as_bytes(), 0, utf16_column),
                expected_byte_column
            );
        }

        // Clamped positions are also rounded down.
        assert_eq!(
            clamp_position(fixtures::CJK_TEXT.as_bytes(), Position::new(0, 8)),
            Position::new(0, 6)
        );

        for (text, column, expected_column) in [
            (fixtures::EMOJI_TEXT, 6, 6),
            (fixtures::EMOJI_TEXT, 9, 6),
            (fixtures::CJK_TEXT, 4, 3),
            // Past the end.
            (fixtures::CJK_TEXT, 100, fixtures::CJK_TEXT.len()),
        ] {
            assert_eq!(
                floor_char_boundary(text.as_bytes(), column),
                expected_column
            );
        }
    }

    #[test]
    fn empty_lines_work() {
        for (text, line) in [("", 0), ("a\n\nb", 1), ("a\n", 1)] {
            let bytes = text.as_bytes();
            assert_eq!(utf8_to_utf16_offset(bytes, line, 0), 0);
            assert_eq!(utf16_to_utf8_offset(bytes, line, 0), 0);
            // Non-zero columns on empty lines are clamped to zero.
            assert_eq!(utf8_to_utf16_offset(bytes, line, 3), 0);
            assert_eq!(utf16_to_utf8_offset(bytes, line, 3), 0);
        }
    }

    #[test]
    fn clamping_works() {
        let (text, _) = fixtures::offset_position_encoding_fixture();
        let text = text.as_bytes();
        let end = byte_offset_to_position(text, text.len());

        // Offsets past the end of the text.
        assert_eq!(byte_offset_to_position(text, text.len() + 1), end);
        assert_eq!(byte_offset_to_position(text, usize::MAX), end);

        // Lines past the end of the text.
        assert_eq!(position_to_byte_offset(text, Position::new(9, 0)), text.len());
        assert_eq!(clamp_position(text, Position::new(9, 3)), end);
        assert_eq!(decode_position(text, 9, 3, Encoding::Utf16), end);

        // Columns past the end of a line.
        assert_eq!(position_to_byte_offset(text, Position::new(0, 7)), 1);
        assert_eq!(position_to_byte_offset(text, Position::new(1, 99)), 5);
        assert_eq!(utf8_to_utf16_offset(text, 4, 99), 14);
        assert_eq!(utf16_to_utf8_offset(text, 4, 99), 16);

        // Lines that don't exist have no columns.
        assert_eq!(utf8_to_utf16_offset(text, 99, 5), 0);
        assert_eq!(utf16_to_utf8_offset(text, 99, 5), 0);
    }

    #[test]
    fn checked_conversions_work() {
        let text = b"ab\ncde";

        assert_eq!(try_byte_offset_to_position(text, 4), Ok(Position::new(1, 1)));
        assert_eq!(
            try_byte_offset_to_position(text, 7),
            Err(OffsetError::OffsetOutOfBounds { offset: 7, len: 6 })
        );
        assert_eq!(try_position_to_byte_offset(text, Position::new(1, 3)), Ok(6));
        assert_eq!(
            try_position_to_byte_offset(text, Position::new(2, 0)),
            Err(OffsetError::LineOutOfBounds {
                line: 2,
                line_count: 2
            })
        );
        assert_eq!(
            try_position_to_byte_offset(text, Position::new(0, 3)),
            Err(OffsetError::ColumnOutOfBounds {
                line: 0,
                column: 3,
                len: 2
            })
        );
    }

    #[test]
    fn invalid_bytes_work() {
        // `a`, an invalid byte, `b`, then a 4 byte emoji.
        let text = b"a\xFFb\xF0\x9F\x98\x80";
        for (byte_column, utf16_column) in [(0, 0), (2, 2), (3, 3), (7, 5)] {
            assert_eq!(utf8_to_utf16_offset(text, 0, byte_column), utf16_column);
            assert_eq!(utf16_to_utf8_offset(text, 0, utf16_column), byte_column);
        }
        // Inside the emoji.
        assert_eq!(utf8_to_utf16_offset(text, 0, 5), 3);
        assert_eq!(utf16_to_utf8_offset(text, 0, 4), 3);

        // A truncated sequence contributes one code unit per byte.
        let text = b"x\xE4\xBD\ny";
        assert_eq!(utf8_to_utf16_offset(text, 0, 3), 3);
        assert_eq!(utf16_to_utf8_offset(text, 0, 2), 2);
        assert_eq!(byte_offset_to_position(text, 5), Position::new(1, 1));
    }

    #[test]
    fn line_helpers_work() {
        let text = b"one\ntwo\r\n\nfour";
        assert_eq!(line_count(text), 4);
        assert_eq!(line(text, 0), Some(&b"one"[..]));
        // Carriage returns are part of the line.
        assert_eq!(line(text, 1), Some(&b"two\r"[..]));
        assert_eq!(line(text, 2), Some(&b""[..]));
        assert_eq!(line(text, 3), Some(&b"four"[..]));
        assert_eq!(line(text, 4), None);
        assert_eq!(line(b"", 0), Some(&b""[..]));
    }

    #[test]
    fn concurrent_conversions_work() {
        let (text, groups) = fixtures::offset_position_encoding_fixture();
        let text = text.as_bytes();

        // Converts the same buffer from several threads at once.
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for group in &groups {
                        let position = byte_offset_to_position(text, group.offset);
                        assert_eq!(
                            encode_position(text, position, Encoding::Utf16),
                            (group.line, group.col_utf16)
                        );
                    }
                });
            }
        });
    }

    /// Returns a text, and an offset at a codepoint boundary in the text.
    fn text_and_boundary() -> impl Strategy<Value = (String, usize)> {
        "(\\PC|\n){0,64}".prop_flat_map(|text| {
            let boundaries: Vec<usize> = text
                .char_indices()
                .map(|(idx, _)| idx)
                .chain([text.len()])
                .collect();
            (Just(text), proptest::sample::select(boundaries))
        })
    }

    proptest! {
        #[test]
        fn positions_round_trip((text, offset) in text_and_boundary()) {
            let bytes = text.as_bytes();
            let position = byte_offset_to_position(bytes, offset);
            prop_assert_eq!(position_to_byte_offset(bytes, position), offset);

            for encoding in [Encoding::Utf8, Encoding::Utf16, Encoding::Utf32] {
                let (line, column) = encode_position(bytes, position, encoding);
                prop_assert_eq!(decode_position(bytes, line, column, encoding), position);
            }
        }

        #[test]
        fn ascii_columns_are_identical(text in "[ -~]{0,64}") {
            let bytes = text.as_bytes();
            for column in 0..=text.len() as u32 {
                prop_assert_eq!(utf8_to_utf16_offset(bytes, 0, column), column);
                prop_assert_eq!(utf16_to_utf8_offset(bytes, 0, column), column);
            }
        }

        #[test]
        fn offsets_past_the_end_are_clamped(text in "(\\PC|\n){0,64}", extra in 1usize..1024) {
            let bytes = text.as_bytes();
            prop_assert_eq!(
                byte_offset_to_position(bytes, bytes.len() + extra),
                byte_offset_to_position(bytes, bytes.len())
            );
        }

        #[test]
        fn arbitrary_bytes_never_panic(
            bytes in proptest::collection::vec(any::<u8>(), 0..64),
            line in 0u32..4,
            column in 0u32..80,
        ) {
            let utf16_column = utf8_to_utf16_offset(&bytes, line, column);
            let byte_column = utf16_to_utf8_offset(&bytes, line, utf16_column);
            prop_assert!(byte_column <= column);
            let position = clamp_position(&bytes, Position::new(line, column));
            prop_assert!(position_to_byte_offset(&bytes, position) <= bytes.len());
        }
    }
}
