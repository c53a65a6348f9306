#![cfg(test)]
crate::reexport!(synthetic);

use crate::*;

pub(crate) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Only initialize once for all tests
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env()) // <- reads RUST_LOG
            .with_test_writer() // ensures it integrates with `cargo test` output
            .init();
    });
}

/// Join fixture lines with `\n`.
pub(crate) fn lines(lines: &[&str]) -> String {
    lines.join("\n")
}

/// Indentation column of every line of `document`.
pub(crate) fn columns(document: &Document) -> Vec<usize> {
    document
        .text()
        .split('\n')
        .map(|line| indentation_width(line, 8))
        .collect()
}

/// Indent `text` top to bottom with the default scanner and return the
/// resulting column of every line.
pub(crate) fn indent_columns(text: &[&str], config: &Config) -> Vec<usize> {
    common_init();
    let mut document = Document::new(lines(text));
    indent_buffer(&mut document, &SqlScanner, config);
    columns(&document)
}

mod fixtures {
    use super::*;

    #[test]
    fn lines_and_columns_agree() {
        let doc = Document::new(lines(&["a", "  b", "\tc"]));
        assert_eq!(columns(&doc), vec![0, 2, 8]);
    }
}
