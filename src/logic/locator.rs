use crate::*;

/// The previous non-blank line: where it starts and how far it is indented.
///
/// Produced fresh for every indentation decision. Any edit above a line can
/// change which line is "previous", so a state is never kept across edits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::Display)]
#[display("line at {start} indented {indent}")]
pub struct IndentState {
    pub start: usize,
    pub indent: usize,
}

impl IndentState {
    /// State describing the line that starts at (or contains) `position`.
    pub fn of_line(document: &Document, position: usize, tab_width: usize) -> Self {
        Self {
            start: document.line_start(position),
            indent: document.indentation(position, tab_width),
        }
    }
}

/// Find the nearest non-blank line above the line containing `position`.
///
/// Falls back to indentation 0 at the document start when every line above
/// is blank, or when `position` is on the first line.
pub fn previous_line_state(document: &Document, position: usize, tab_width: usize) -> IndentState {
    let mut start = document.line_start(position);
    while let Some(previous) = document.previous_line_start(start) {
        if !document.is_blank_line(previous) {
            return IndentState::of_line(document, previous, tab_width);
        }
        start = previous;
    }
    IndentState::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("select a\n    b", 1, IndentState { start: 0, indent: 0 })]
    #[case("select a\n    b\nc", 2, IndentState { start: 9, indent: 4 })]
    #[case("  select a\n\n   \t\nb", 3, IndentState { start: 0, indent: 2 })]
    #[case("first", 0, IndentState { start: 0, indent: 0 })]
    #[case("  first\nsecond", 0, IndentState { start: 0, indent: 0 })]
    #[case("\n   \nx", 2, IndentState { start: 0, indent: 0 })]
    #[case("\tx\ny", 1, IndentState { start: 0, indent: 8 })]
    fn finds_previous_non_blank_line(
        #[case] text: &str,
        #[case] line_index: usize,
        #[case] expected: IndentState,
    ) {
        let doc = Document::new(text);
        let start = doc.line_start_of(line_index + 1).expect("line exists");
        assert_eq!(previous_line_state(&doc, start, 8), expected);
    }

    #[test]
    fn reflects_edits_above() {
        let mut doc = Document::new("a\n  b\nc");
        let c = doc.line_start_of(3).unwrap();
        assert_eq!(previous_line_state(&doc, c, 8).indent, 2);
        doc.replace(2..4, "      ");
        let c = doc.line_start_of(3).unwrap();
        assert_eq!(previous_line_state(&doc, c, 8).indent, 6);
    }
}
