//! property tests for translating ranges to LSP ranges and back.

use ferrule_core::{codec, codec::Encoding, Range};
use ferrule_lsp::translator::{from_lsp, to_lsp};
use ferrule_lsp::PositionTranslationContext;
use proptest::prelude::*;

/// Generates a text and two (ordered) codepoint boundaries in it.
fn text_and_boundaries() -> impl Strategy<Value = (String, usize, usize)> {
    "(\\PC|\n){0,48}".prop_flat_map(|text| {
        let boundaries: Vec<usize> = text
            .char_indices()
            .map(|(idx, _)| idx)
            .chain([text.len()])
            .collect();
        (
            Just(text),
            proptest::sample::select(boundaries.clone()),
            proptest::sample::select(boundaries),
        )
            .prop_map(|(text, a, b)| (text, a.min(b), a.max(b)))
    })
}

fn encodings() -> impl Strategy<Value = Encoding> {
    prop_oneof![
        Just(Encoding::Utf8),
        Just(Encoding::Utf16),
        Just(Encoding::Utf32)
    ]
}

proptest! {
    #[test]
    fn ranges_round_trip((text, start, end) in text_and_boundaries(), encoding in encodings()) {
        let context = PositionTranslationContext::new(&text, encoding);
        let range = Range::new(
            codec::byte_offset_to_position(text.as_bytes(), start),
            codec::byte_offset_to_position(text.as_bytes(), end),
        );

        let lsp_range = to_lsp::range(range, &context);
        prop_assert!(
            (lsp_range.start.line, lsp_range.start.character)
                <= (lsp_range.end.line, lsp_range.end.character)
        );
        prop_assert_eq!(from_lsp::range(lsp_range, &context), range);
    }

    #[test]
    fn arbitrary_lsp_positions_never_panic(
        bytes in proptest::collection::vec(any::<u8>(), 0..64),
        line in 0u32..8,
        character in 0u32..80,
        encoding in encodings(),
    ) {
        let context = PositionTranslationContext::new(&bytes, encoding);
        let position = from_lsp::position(lsp_types::Position::new(line, character), &context);

        // Translated positions are always valid positions in the text.
        prop_assert_eq!(codec::clamp_position(&bytes, position), position);
        prop_assert!(from_lsp::offset(lsp_types::Position::new(line, character), &context) <= bytes.len());
    }
}
