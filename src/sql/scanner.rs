use crate::sql::lexical::{Checkpoint, LexicalClassifier, Syntax};

/// Default [`LexicalClassifier`] for SQL text.
///
/// Recognizes:
/// - String literals delimited by `'`, `"` or `` ` ``. A doubled quote closes
///   and immediately reopens, so `'it''s'` stays a single literal.
/// - Line comments starting with `--` or `#`, ending at the newline.
/// - Block comments `/* ... */` (not nested).
///
/// Guarantees:
/// - Never panics on valid UTF-8 (positions past the end are clamped).
/// - Unterminated literals run to the end of the text.
///
/// Complexity:
/// - A point query scans from the start of the text, O(position), so edits
///   between queries are always seen. A [`Sweep`](crate::sql::lexical::Sweep)
///   resumes from checkpoints instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SqlScanner;

/// Where the scanner is between two bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanState {
    #[default]
    Code,
    /// Inside a literal opened by the given quote byte.
    Quoted(u8),
    LineComment,
    BlockComment,
}

impl From<ScanState> for Syntax {
    fn from(state: ScanState) -> Self {
        match state {
            ScanState::Code => Syntax::Code,
            ScanState::Quoted(_) => Syntax::String,
            ScanState::LineComment | ScanState::BlockComment => Syntax::Comment,
        }
    }
}

impl LexicalClassifier for SqlScanner {
    type State = ScanState;

    fn start(&self) -> Checkpoint<ScanState> {
        Checkpoint {
            position: 0,
            depth: 0,
            state: ScanState::Code,
        }
    }

    /// Two-byte delimiters are consumed as a unit, which may carry the
    /// checkpoint one byte past `position`.
    fn advance(&self, text: &str, checkpoint: &mut Checkpoint<ScanState>, position: usize) {
        let bytes = text.as_bytes();
        let target = position.min(bytes.len());
        while checkpoint.position < target {
            let c = bytes[checkpoint.position];
            let next = bytes.get(checkpoint.position + 1).copied();
            checkpoint.position += 1;
            match checkpoint.state {
                ScanState::Code => match (c, next) {
                    (b'\'' | b'"' | b'`', _) => checkpoint.state = ScanState::Quoted(c),
                    (b'-', Some(b'-')) => {
                        checkpoint.position += 1;
                        checkpoint.state = ScanState::LineComment;
                    }
                    (b'#', _) => checkpoint.state = ScanState::LineComment,
                    (b'/', Some(b'*')) => {
                        checkpoint.position += 1;
                        checkpoint.state = ScanState::BlockComment;
                    }
                    (b'(', _) => checkpoint.depth += 1,
                    (b')', _) => checkpoint.depth -= 1,
                    _ => {}
                },
                ScanState::Quoted(quote) if c == quote => checkpoint.state = ScanState::Code,
                ScanState::Quoted(_) => {}
                ScanState::LineComment if c == b'\n' => checkpoint.state = ScanState::Code,
                ScanState::LineComment => {}
                ScanState::BlockComment => {
                    if c == b'*' && next == Some(b'/') {
                        checkpoint.position += 1;
                        checkpoint.state = ScanState::Code;
                    }
                }
            }
        }
    }

    fn syntax_of(&self, checkpoint: &Checkpoint<ScanState>) -> Syntax {
        checkpoint.state.into()
    }
}
