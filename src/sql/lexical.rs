//! The lexical capability consumed by the indenter.
//!
//! The indentation engine never looks for quotes or comment markers on its
//! own. Everything it needs to know about literals goes through a
//! [`LexicalClassifier`] passed in by the caller, so a host with its own
//! syntax tables can plug them in and tests can use synthetic spans.
use std::fmt::Debug;

/// Lexical context of a single position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Syntax {
    #[display("code")]
    Code,
    #[display("string")]
    String,
    #[display("comment")]
    Comment,
}

/// Where a forward scan stopped and what it had seen by then.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint<S> {
    /// Bytes consumed. May sit one past the requested position when a
    /// two-byte delimiter straddles it.
    pub position: usize,
    /// Parenthesis depth of the code consumed so far.
    pub depth: isize,
    pub state: S,
}

/// Classifies positions of a SQL text and measures parenthesis nesting.
///
/// Positions are byte offsets into `text`. Every query must be total: an
/// unterminated literal extends to the end of the text and unmatched
/// parentheses simply contribute to the delta.
///
/// Implementors provide a resumable forward scan; the point queries are
/// derived from it and start from the beginning of the text each time.
pub trait LexicalClassifier {
    /// Scanner state carried by a [`Checkpoint`].
    type State: Clone + Debug;

    /// Checkpoint before the first byte of any text.
    fn start(&self) -> Checkpoint<Self::State>;

    /// Consume `text` from `checkpoint` up to `position`. Positions at or
    /// before the checkpoint leave it unchanged.
    fn advance(&self, text: &str, checkpoint: &mut Checkpoint<Self::State>, position: usize);

    /// Context at the position a checkpoint reached.
    fn syntax_of(&self, checkpoint: &Checkpoint<Self::State>) -> Syntax;

    /// Context of the character at `position`, i.e. the state after
    /// consuming `text[..position]`.
    fn syntax_at(&self, text: &str, position: usize) -> Syntax {
        let mut checkpoint = self.start();
        self.advance(text, &mut checkpoint, position);
        self.syntax_of(&checkpoint)
    }

    /// Net nesting change between `from` and `to` (`from <= to`), counting
    /// only parentheses that sit in code.
    fn paren_depth_delta(&self, text: &str, from: usize, to: usize) -> isize {
        let mut checkpoint = self.start();
        self.advance(text, &mut checkpoint, from);
        let before = checkpoint.depth;
        self.advance(text, &mut checkpoint, to.max(from));
        checkpoint.depth - before
    }

    fn is_string_or_comment(&self, text: &str, position: usize) -> bool {
        self.syntax_at(text, position) != Syntax::Code
    }
}

impl<C: LexicalClassifier + ?Sized> LexicalClassifier for &C {
    type State = C::State;

    fn start(&self) -> Checkpoint<Self::State> {
        (**self).start()
    }

    fn advance(&self, text: &str, checkpoint: &mut Checkpoint<Self::State>, position: usize) {
        (**self).advance(text, checkpoint, position)
    }

    fn syntax_of(&self, checkpoint: &Checkpoint<Self::State>) -> Syntax {
        (**self).syntax_of(checkpoint)
    }

    fn syntax_at(&self, text: &str, position: usize) -> Syntax {
        (**self).syntax_at(text, position)
    }

    fn paren_depth_delta(&self, text: &str, from: usize, to: usize) -> isize {
        (**self).paren_depth_delta(text, from, to)
    }
}

/// A classifier for one top-down pass over a text.
///
/// Keeps two checkpoints, an anchor and a frontier, both only ever moving
/// forward, and answers each query by resuming from the closest one at or
/// before the queried position. Queries behind the anchor fall back to a
/// scan from the start.
///
/// The text before the frontier must not change while the sweep is in use.
#[derive(Debug)]
pub struct Sweep<'c, C: LexicalClassifier + ?Sized> {
    classifier: &'c C,
    anchor: Checkpoint<C::State>,
    frontier: Checkpoint<C::State>,
}

impl<'c, C: LexicalClassifier + ?Sized> Sweep<'c, C> {
    pub fn new(classifier: &'c C) -> Self {
        let start = classifier.start();
        Self {
            classifier,
            anchor: start.clone(),
            frontier: start,
        }
    }

    pub fn frontier(&self) -> usize {
        self.frontier.position
    }

    /// Move the frontier forward to `position`.
    pub fn advance_to(&mut self, text: &str, position: usize) {
        self.classifier.advance(text, &mut self.frontier, position);
    }

    /// Pin the anchor at the current frontier.
    pub fn anchor_at_frontier(&mut self) {
        self.anchor = self.frontier.clone();
    }

    fn resume(&self, text: &str, position: usize) -> Checkpoint<C::State> {
        let mut checkpoint = if self.frontier.position <= position {
            self.frontier.clone()
        } else if self.anchor.position <= position {
            self.anchor.clone()
        } else {
            self.classifier.start()
        };
        self.classifier.advance(text, &mut checkpoint, position);
        checkpoint
    }
}

impl<C: LexicalClassifier + ?Sized> LexicalClassifier for Sweep<'_, C> {
    type State = C::State;

    fn start(&self) -> Checkpoint<Self::State> {
        self.classifier.start()
    }

    fn advance(&self, text: &str, checkpoint: &mut Checkpoint<Self::State>, position: usize) {
        self.classifier.advance(text, checkpoint, position)
    }

    fn syntax_of(&self, checkpoint: &Checkpoint<Self::State>) -> Syntax {
        self.classifier.syntax_of(checkpoint)
    }

    fn syntax_at(&self, text: &str, position: usize) -> Syntax {
        self.classifier.syntax_of(&self.resume(text, position))
    }

    fn paren_depth_delta(&self, text: &str, from: usize, to: usize) -> isize {
        let to = self.resume(text, to.max(from)).depth;
        to - self.resume(text, from).depth
    }
}
