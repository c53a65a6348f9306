/// Editing cursor expressed as a byte offset into a [`crate::Document`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, derive_more::Display)]
#[display("{offset}")]
pub struct Cursor {
    offset: usize,
}

impl Cursor {
    pub fn new(offset: usize) -> Self {
        Self { offset }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Distance to the end of a text of length `len`. Stays valid while text
    /// before the cursor is rewritten.
    pub fn distance_from_end(&self, len: usize) -> usize {
        len.saturating_sub(self.offset)
    }

    /// Cursor at `distance` from the end of a text of length `len`.
    pub fn from_end(len: usize, distance: usize) -> Self {
        Self::new(len.saturating_sub(distance))
    }
}
