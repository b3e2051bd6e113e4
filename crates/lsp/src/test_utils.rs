//! Test utilities for ferrule LSP translators.

#![cfg(test)]

use ferrule_core::{codec, Range};
use test_utils::fixtures::SOURCE;

use crate::translator::PositionTranslationContext;

/// Returns a UTF-16 translation context for the [`SOURCE`] fixture.
pub fn source_context() -> PositionTranslationContext<'static> {
    PositionTranslationContext::utf16(SOURCE)
}

/// Returns the byte-oriented range between the offsets of `start_pat` and `end_pat` in [`SOURCE`]
/// (see [`test_utils::parse_offset_at`]).
pub fn source_range(start_pat: &str, end_pat: &str) -> Range {
    let offset = |pat| test_utils::parse_offset_at(SOURCE, pat).unwrap();
    Range::new(
        codec::byte_offset_to_position(SOURCE.as_bytes(), offset(start_pat)),
        codec::byte_offset_to_position(SOURCE.as_bytes(), offset(end_pat)),
    )
}
