//! Lenient SQL lexical layer used by the indenter.
//!
//! Modules:
//! - `keyword` : Fixed list of indentation keywords and the runtime `KeywordSet`.
//! - `lexical` : The `LexicalClassifier` capability (string/comment/code, paren balance)
//!   and `Sweep`, its resumable form for top-down passes.
//! - `scanner` : `SqlScanner`, the default single-pass classifier.
//!
//! Design Principles:
//! 1. Accept incomplete / syntactically invalid SQL (robust for live editing).
//! 2. Never fail: unterminated literals and unbalanced parentheses still yield answers.
//! 3. Keep the keyword list small; it drives indentation, not parsing.

pub mod keyword;
pub mod lexical;
pub mod scanner;

pub use keyword::{Keyword, KeywordSet};
pub use lexical::{Checkpoint, LexicalClassifier, Sweep, Syntax};
pub use scanner::{ScanState, SqlScanner};

/// Convenience prelude re-exporting the most commonly used items.
pub mod prelude {
    pub use super::{Keyword, KeywordSet, LexicalClassifier, SqlScanner, Syntax};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn keyword_inside_string_is_not_code() {
        let sql = "x = 'select'";
        let pos = sql.find("select").unwrap();
        assert!(SqlScanner.is_string_or_comment(sql, pos));
        assert!(KeywordSet::default().contains("SELECT"));
    }

    #[test]
    fn classifier_works_through_references() {
        fn depth(c: impl LexicalClassifier, sql: &str) -> isize {
            c.paren_depth_delta(sql, 0, sql.len())
        }
        assert_eq!(depth(&SqlScanner, "(("), 2);
        assert_eq!(depth(SqlScanner, "(')'"), 1);
    }
}
