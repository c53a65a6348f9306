//! Rewrites line indentation from the computed level delta.
//!
//! Lines are always processed top to bottom and one at a time: a line's
//! decision reads its predecessor's indentation, so the predecessor has to be
//! final first. Nothing here fails; malformed SQL only yields a less useful
//! column.
use crate::*;
use std::ops::RangeInclusive;

/// What happened to a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display(
    "line {line}: level delta {level_delta}, prev {previous_indent}, indent {indent}"
)]
pub struct LineIndent {
    /// 1-based line number.
    pub line: usize,
    pub level_delta: isize,
    pub previous_indent: usize,
    /// Column the line was indented to.
    pub indent: usize,
    /// Whether the document text changed.
    pub changed: bool,
}

/// `previous_indent + offset * level_delta`, floored at zero.
pub fn new_indent(previous_indent: usize, level_delta: isize, indent_offset: usize) -> usize {
    let step = indent_offset.saturating_mul(level_delta.unsigned_abs());
    if level_delta < 0 {
        previous_indent.saturating_sub(step)
    } else {
        previous_indent.saturating_add(step)
    }
}

/// Set the indentation of the line at `line_start` to `indent` columns of
/// spaces. Lines already at that column are left alone, tabs included.
pub(crate) fn rewrite_indentation(
    document: &mut Document,
    line_start: usize,
    indent: usize,
    tab_width: usize,
) -> bool {
    if document.indentation(line_start, tab_width) == indent {
        return false;
    }
    let end = document.indentation_end(line_start);
    document.replace(line_start..end, &" ".repeat(indent));
    true
}

/// Run `indent` on the cursor's line, then restore the cursor: when it sat
/// in the old indentation it lands after the new one, otherwise it keeps its
/// distance from the end of the document.
pub(crate) fn on_cursor_line<T>(
    document: &mut Document,
    indent: impl FnOnce(&mut Document, usize) -> T,
) -> T {
    let distance = document.cursor().distance_from_end(document.len());
    let line_start = document.line_start(document.cursor().offset());

    let out = indent(document, line_start);

    let indentation_end = document.indentation_end(line_start);
    let restored = Cursor::from_end(document.len(), distance).offset();
    document.set_cursor(restored.max(indentation_end));
    out
}

/// Indent the line at `line_start`.
///
/// `previous` is the state of the previous non-blank line when the caller
/// already knows it. A line that starts inside a string literal is reported
/// but never rewritten, since its leading whitespace belongs to the literal.
pub fn indent_line_at<C>(
    document: &mut Document,
    line_start: usize,
    previous: Option<IndentState>,
    classifier: &C,
    config: &Config,
) -> LineIndent
where
    C: LexicalClassifier + ?Sized,
{
    let line_start = document.line_start(line_start);
    let line = document.line_number(line_start);
    indent_numbered_line(document, line_start, line, previous, classifier, config)
}

/// [`indent_line_at`] for a caller that already knows the line number.
fn indent_numbered_line<C>(
    document: &mut Document,
    line_start: usize,
    line: usize,
    previous: Option<IndentState>,
    classifier: &C,
    config: &Config,
) -> LineIndent
where
    C: LexicalClassifier + ?Sized,
{
    let LevelDelta {
        level_delta,
        previous_indent,
    } = level_delta(document, line_start, previous, classifier, config);
    let indent = new_indent(previous_indent, level_delta, config.indent_offset);

    if config.debug_logging {
        debug!(line, level_delta, previous_indent, indent, "SQL indent");
    }

    let changed = if classifier.syntax_at(document.text(), line_start) == Syntax::String {
        trace!(line, "line starts inside a string literal, left as is");
        false
    } else {
        rewrite_indentation(document, line_start, indent, config.tab_width)
    };

    LineIndent {
        line,
        level_delta,
        previous_indent,
        indent,
        changed,
    }
}

/// Indent the line holding the cursor.
pub fn indent_line<C>(document: &mut Document, classifier: &C, config: &Config) -> LineIndent
where
    C: LexicalClassifier + ?Sized,
{
    on_cursor_line(document, |document, line_start| {
        indent_line_at(document, line_start, None, classifier, config)
    })
}

/// Indent the 1-based, inclusive line range `lines`. Returns the number of
/// lines whose text changed.
pub fn indent_region<C>(
    document: &mut Document,
    lines: RangeInclusive<usize>,
    classifier: &C,
    config: &Config,
) -> usize
where
    C: LexicalClassifier + ?Sized,
{
    let Some(mut start) = document.line_start_of(*lines.start()) else {
        return 0;
    };
    let mut line = *lines.start();
    let mut previous = None;
    let mut changed = 0;
    // Rewrites only touch text at or after the current line start, so the
    // scan behind it stays valid for the whole pass.
    let mut sweep = Sweep::new(classifier);

    // The last line only exists when there is text on it.
    while line <= *lines.end() && start < document.len() {
        sweep.advance_to(document.text(), start);
        let result = indent_numbered_line(document, start, line, previous, &sweep, config);
        changed += usize::from(result.changed);
        if !document.is_blank_line(start) {
            previous = Some(IndentState::of_line(document, start, config.tab_width));
            sweep.anchor_at_frontier();
        }
        match document.next_line_start(start) {
            Some(next) => start = next,
            None => break,
        }
        line += 1;
    }

    debug!("Indented lines {lines:?}, {changed} changed");
    changed
}

/// Indent every line of `document`, first to last.
pub fn indent_buffer<C>(document: &mut Document, classifier: &C, config: &Config) -> usize
where
    C: LexicalClassifier + ?Sized,
{
    indent_region(document, 1..=usize::MAX, classifier, config)
}

/// Indent an owned SQL text and return the result.
pub fn indent_source<C>(text: impl Into<String>, classifier: &C, config: &Config) -> String
where
    C: LexicalClassifier + ?Sized,
{
    let mut document = Document::new(text);
    indent_buffer(&mut document, classifier, config);
    document.into_text()
}
