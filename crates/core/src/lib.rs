//! # ferrule core
//! Byte-oriented text positions, an offset/position codec and the entity types exchanged by
//! language tooling features (completions, symbols, diagnostics, code actions e.t.c).
//!
//! Every position in this crate counts columns in UTF-8 bytes.
//! Translating entities to and from a protocol that counts columns in UTF-16 (or UTF-32) code units
//! is done with the [`codec`] (see also the `ferrule-lsp` crate).
//!
//! # Example
//! Converting between offsets, positions and UTF-16 columns.
//!
//! ```
//! use ferrule_core::{codec, Position};
//!
//! let text = "let greeting = \"hello 😀 world\";";
//!
//! // Byte offset of the space after the emoji.
//! let offset = text.find(" world").unwrap();
//! let position = codec::byte_offset_to_position(text.as_bytes(), offset);
//! assert_eq!(position, Position::new(0, 26));
//!
//! // The emoji is 4 bytes but only 2 UTF-16 code units.
//! let utf16_column = codec::utf8_to_utf16_offset(text.as_bytes(), position.line, position.column);
//! assert_eq!(utf16_column, 24);
//! assert_eq!(codec::utf16_to_utf8_offset(text.as_bytes(), 0, utf16_column), 26);
//! ```

pub use self::{
    error::OffsetError,
    schema::*,
    text::{Position, Range},
};

pub mod codec;
mod error;
mod schema;
mod text;
