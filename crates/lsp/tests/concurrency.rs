//! integration tests for concurrent translations against shared texts.

mod utils;

use std::thread;

use ferrule_core::{codec, Position};
use ferrule_lsp::translator::{from_lsp, to_lsp};
use ferrule_lsp::PositionTranslationContext;
use test_utils::fixtures::SOURCE;

#[test]
fn concurrent_translations_work() {
    let context = PositionTranslationContext::utf16(SOURCE);
    let documents = utils::documents();
    let symbol = utils::greeter_symbol();
    let expected = to_lsp::document_symbol(symbol.clone(), &context);

    // Every thread translates the same entities against the same snapshots.
    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|idx| {
                let symbol = symbol.clone();
                let documents = &documents;
                scope.spawn(move || {
                    let lsp_symbol = to_lsp::document_symbol(symbol.clone(), &context);
                    assert_eq!(from_lsp::document_symbol(lsp_symbol.clone(), &context), symbol);

                    let diagnostic = utils::full_diagnostic();
                    let lsp_diagnostic = to_lsp::diagnostic(diagnostic.clone(), &context, documents);
                    assert_eq!(
                        from_lsp::diagnostic(lsp_diagnostic, &context, documents),
                        diagnostic
                    );

                    // Each thread also walks a different slice of the text.
                    for offset in (idx..SOURCE.len()).step_by(8) {
                        if SOURCE.is_char_boundary(offset) {
                            let position = codec::byte_offset_to_position(SOURCE.as_bytes(), offset);
                            let lsp_position = to_lsp::position(position, &context);
                            assert_eq!(from_lsp::position(lsp_position, &context), position);
                        }
                    }
                    lsp_symbol
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });

    // The shared snapshot is unchanged.
    assert_eq!(
        codec::position_to_byte_offset(SOURCE.as_bytes(), Position::new(5, 32)),
        SOURCE.rfind('\n').unwrap() - 2
    );
}
