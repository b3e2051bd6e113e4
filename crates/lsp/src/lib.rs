//! Translates [ferrule](ferrule_core)'s byte-oriented entities to and from
//! [Language Server Protocol (LSP)](https://microsoft.github.io/language-server-protocol/) types.
//!
//! # Example
//! Translating a ferrule range to an LSP range (and back).
//!
//! ```
//! use ferrule_core::{Position, Range};
//! use ferrule_lsp::translator::{from_lsp, to_lsp, PositionTranslationContext};
//!
//! let text = "let greeting = \"hello 😀 world\";";
//! let context = PositionTranslationContext::utf16(text);
//!
//! // The byte range of `world`.
//! let range = Range::new(Position::new(0, 27), Position::new(0, 32));
//! let lsp_range = to_lsp::range(range, &context);
//! assert_eq!(lsp_range.start, lsp_types::Position::new(0, 25));
//! assert_eq!(from_lsp::range(lsp_range, &context), range);
//! ```

pub use translator::{ContextResolver, PositionTranslationContext};

mod test_utils;
pub mod translator;
pub mod utils;
