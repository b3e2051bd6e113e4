//! Position encoding negotiation utilities.

use ferrule_core::codec::Encoding;
use lsp_types::{ClientCapabilities, PositionEncodingKind};

/// Returns the preferred LSP `PositionEncodingKind` based on the LSP client's capabilities.
pub fn position_encoding(client_capabilities: &ClientCapabilities) -> PositionEncodingKind {
    client_capabilities
        .general
        .as_ref()
        .and_then(|it| it.position_encodings.as_deref())
        .unwrap_or_default()
        .iter()
        .find_map(|encoding| {
            // Prefer the first of UTF-8 or UTF-32 if supported by the client
            // because they don't require surrogate pair accounting.
            (encoding == &PositionEncodingKind::UTF8 || encoding == &PositionEncodingKind::UTF32)
                .then_some(encoding.clone())
        })
        // Fallback to UTF-16 if either no encodings were sent by the client or
        // if neither UTF-8 nor UTF-32 are supported by the client.
        .unwrap_or(PositionEncodingKind::UTF16)
}

/// Returns the ferrule column encoding for an LSP `PositionEncodingKind`.
///
/// Unknown encodings are treated as UTF-16 (i.e. the only encoding every LSP client must support).
pub fn encoding(kind: &PositionEncodingKind) -> Encoding {
    if kind == &PositionEncodingKind::UTF8 {
        Encoding::Utf8
    } else if kind == &PositionEncodingKind::UTF32 {
        Encoding::Utf32
    } else {
        Encoding::Utf16
    }
}

/// Returns the LSP `PositionEncodingKind` for a ferrule column encoding
/// (e.g. for advertising the negotiated encoding in the server's capabilities).
pub fn encoding_kind(encoding: Encoding) -> PositionEncodingKind {
    match encoding {
        Encoding::Utf8 => PositionEncodingKind::UTF8,
        Encoding::Utf16 => PositionEncodingKind::UTF16,
        Encoding::Utf32 => PositionEncodingKind::UTF32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::client_config;

    #[test]
    fn position_encoding_works() {
        for (client_capabilities, expected_encoding) in [
            // Default position encoding is UTF-16.
            (ClientCapabilities::default(), PositionEncodingKind::UTF16),
            // No encoding defaults to UTF-16.
            (client_config(None), PositionEncodingKind::UTF16),
            (client_config(Some(Vec::new())), PositionEncodingKind::UTF16),
            // UTF-8 and UTF-32 are preferred over UTF-16 when supported by the client.
            (
                client_config(Some(vec![
                    PositionEncodingKind::UTF16,
                    PositionEncodingKind::UTF8,
                ])),
                PositionEncodingKind::UTF8,
            ),
            (
                client_config(Some(vec![
                    PositionEncodingKind::UTF16,
                    PositionEncodingKind::UTF32,
                ])),
                PositionEncodingKind::UTF32,
            ),
            // UTF-8 or UTF-32 preference is respected.
            (
                client_config(Some(vec![
                    PositionEncodingKind::UTF8,
                    PositionEncodingKind::UTF32,
                ])),
                PositionEncodingKind::UTF8,
            ),
            (
                client_config(Some(vec![
                    PositionEncodingKind::UTF16,
                    PositionEncodingKind::UTF32,
                    PositionEncodingKind::UTF8,
                ])),
                PositionEncodingKind::UTF32,
            ),
            // UTF-16 only support works.
            (
                client_config(Some(vec![PositionEncodingKind::UTF16])),
                PositionEncodingKind::UTF16,
            ),
            // Unknown encodings are ignored.
            (
                client_config(Some(vec![PositionEncodingKind::new("latin-1")])),
                PositionEncodingKind::UTF16,
            ),
        ] {
            // Verifies the position encoding is properly set based on client capabilities.
            assert_eq!(position_encoding(&client_capabilities), expected_encoding);
        }
    }

    #[test]
    fn encoding_works() {
        for (kind, expected) in [
            (PositionEncodingKind::UTF8, Encoding::Utf8),
            (PositionEncodingKind::UTF16, Encoding::Utf16),
            (PositionEncodingKind::UTF32, Encoding::Utf32),
            (PositionEncodingKind::new("latin-1"), Encoding::Utf16),
        ] {
            assert_eq!(encoding(&kind), expected);
        }

        for encoding in [Encoding::Utf8, Encoding::Utf16, Encoding::Utf32] {
            assert_eq!(super::encoding(&encoding_kind(encoding)), encoding);
        }
    }
}
