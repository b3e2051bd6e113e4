//! Test utilities for ferrule.

pub mod fixtures;

/// Returns the byte offset of `pat` in `subject`.
///
/// The offset is placed at the end of `pat` by default,
/// unless `pat` starts with `<-`, in which case the offset is placed at the beginning of the rest of `pat`.
/// `pat` is searched from the beginning of `subject` by default,
/// unless `pat` ends with `->`, in which case it's searched from the end of `subject`.
pub fn parse_offset_at(subject: &str, pat: &str) -> Option<usize> {
    let (pat, at_start) = match pat.strip_prefix("<-") {
        Some(rest) => (rest, true),
        None => (pat, false),
    };
    let (pat, from_end) = match pat.strip_suffix("->") {
        Some(rest) => (rest, true),
        None => (pat, false),
    };

    let idx = if from_end {
        subject.rfind(pat)
    } else {
        subject.find(pat)
    }?;
    Some(if at_start { idx } else { idx + pat.len() })
}

/// Returns client capabilities that advertise the given position encodings.
pub fn client_config(
    encodings: Option<Vec<lsp_types::PositionEncodingKind>>,
) -> lsp_types::ClientCapabilities {
    lsp_types::ClientCapabilities {
        general: Some(lsp_types::GeneralClientCapabilities {
            position_encodings: encodings,
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Returns a file URI for a test document.
pub fn document_uri(name: &str) -> lsp_types::Url {
    lsp_types::Url::parse(&format!("file:///workspace/{name}")).expect("valid test uri")
}
