use crate::*;
use std::ops::Range;

/// A [`LexicalClassifier`] driven by explicit string and comment spans, with
/// no knowledge of SQL syntax at all.
#[derive(Debug, Clone, Default)]
pub struct SyntheticSyntax {
    strings: Vec<Range<usize>>,
    comments: Vec<Range<usize>>,
}

impl SyntheticSyntax {
    pub fn string(mut self, span: Range<usize>) -> Self {
        self.strings.push(span);
        self
    }

    pub fn comment(mut self, span: Range<usize>) -> Self {
        self.comments.push(span);
        self
    }

    fn lookup(&self, position: usize) -> Syntax {
        if self.strings.iter().any(|s| s.contains(&position)) {
            Syntax::String
        } else if self.comments.iter().any(|s| s.contains(&position)) {
            Syntax::Comment
        } else {
            Syntax::Code
        }
    }
}

impl LexicalClassifier for SyntheticSyntax {
    type State = ();

    fn start(&self) -> Checkpoint<()> {
        Checkpoint {
            position: 0,
            depth: 0,
            state: (),
        }
    }

    fn advance(&self, text: &str, checkpoint: &mut Checkpoint<()>, position: usize) {
        if position <= checkpoint.position {
            return;
        }
        checkpoint.depth += text
            .bytes()
            .enumerate()
            .take(position)
            .skip(checkpoint.position)
            .filter(|&(i, _)| self.lookup(i) == Syntax::Code)
            .map(|(_, b)| match b {
                b'(' => 1,
                b')' => -1,
                _ => 0,
            })
            .sum::<isize>();
        checkpoint.position = position;
    }

    fn syntax_of(&self, checkpoint: &Checkpoint<()>) -> Syntax {
        self.lookup(checkpoint.position)
    }
}
