//! Translates between ferrule and LSP types.

use std::collections::HashMap;
use std::hash::BuildHasher;

use ferrule_core::codec::Encoding;

pub mod from_lsp;
pub mod to_lsp;

mod kinds;

/// Represents context information necessary to translate between an LSP position/range and a ferrule position/range.
///
/// `text` must be the exact snapshot the ferrule positions were (or will be) computed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionTranslationContext<'a> {
    pub encoding: Encoding,
    pub text: &'a [u8],
}

impl<'a> PositionTranslationContext<'a> {
    /// Creates a translation context for `text` using the negotiated position `encoding`.
    pub fn new(text: &'a (impl AsRef<[u8]> + ?Sized), encoding: Encoding) -> Self {
        Self {
            encoding,
            text: text.as_ref(),
        }
    }

    /// Creates a translation context for `text` using UTF-16 (i.e. the LSP default position encoding).
    pub fn utf16(text: &'a (impl AsRef<[u8]> + ?Sized)) -> Self {
        Self::new(text, Encoding::Utf16)
    }
}

/// Resolves translation contexts for entities that refer to other documents
/// (e.g. workspace edits, related diagnostic information and workspace symbols).
pub trait ContextResolver {
    /// Returns the translation context for the document (if it's known).
    fn resolve(&self, uri: &lsp_types::Url) -> Option<PositionTranslationContext<'_>>;
}

/// A single context resolves every document to the same snapshot.
impl ContextResolver for PositionTranslationContext<'_> {
    fn resolve(&self, _uri: &lsp_types::Url) -> Option<PositionTranslationContext<'_>> {
        Some(*self)
    }
}

impl<'a, S: BuildHasher> ContextResolver for HashMap<lsp_types::Url, PositionTranslationContext<'a>, S> {
    fn resolve(&self, uri: &lsp_types::Url) -> Option<PositionTranslationContext<'_>> {
        self.get(uri).copied()
    }
}

impl<T: ContextResolver + ?Sized> ContextResolver for &T {
    fn resolve(&self, uri: &lsp_types::Url) -> Option<PositionTranslationContext<'_>> {
        (**self).resolve(uri)
    }
}
