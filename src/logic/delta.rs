use crate::*;

/// Signed change in nesting level between the previous non-blank line and
/// the current one, together with the previous line's indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("{level_delta:+} from {previous_indent}")]
pub struct LevelDelta {
    pub level_delta: isize,
    pub previous_indent: usize,
}

/// Compute the level delta for the line starting at (or containing)
/// `line_start`.
///
/// The delta is the parenthesis balance between the two line starts, plus
/// one when the previous line starts with a keyword, minus one when the
/// current line does. Two adjustments follow, in order:
/// 1. below one level, a line following `THEN` or `(` gains a level;
/// 2. at zero or above, a line opening with `)`, `--` or `#` loses one.
///
/// `previous` short-circuits the search for the previous non-blank line
/// when the caller already knows it.
pub fn level_delta<C>(
    document: &Document,
    line_start: usize,
    previous: Option<IndentState>,
    classifier: &C,
    config: &Config,
) -> LevelDelta
where
    C: LexicalClassifier + ?Sized,
{
    let line_start = document.line_start(line_start);
    let previous =
        previous.unwrap_or_else(|| previous_line_state(document, line_start, config.tab_width));
    let keywords = &config.recognized_keywords;

    let mut level_delta = classifier.paren_depth_delta(document.text(), previous.start, line_start);
    if starts_with_keyword(document, previous.start, classifier, keywords) {
        level_delta += 1;
    }
    if starts_with_keyword(document, line_start, classifier, keywords) {
        level_delta -= 1;
    }
    if level_delta < 1 && follows_continuation(document, line_start, classifier) {
        level_delta += 1;
    }
    if level_delta >= 0 && starts_with_closer(document, line_start, classifier) {
        level_delta -= 1;
    }

    LevelDelta {
        level_delta,
        previous_indent: previous.indent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{SyntheticSyntax, lines};
    use rstest::rstest;

    fn delta_of_last_line(text: &str) -> LevelDelta {
        let doc = Document::new(text);
        let start = doc.line_start(doc.len());
        level_delta(&doc, start, None, &SqlScanner, &Config::default())
    }

    #[rstest]
    // previous keyword line, plain current line
    #[case(&["select a,", "b"], 1)]
    // keyword after keyword cancels out
    #[case(&["select a", "from t"], 0)]
    // keyword after a plain line dedents
    #[case(&["    b", "from t"], -1)]
    // open paren plus keyword
    #[case(&["select (", "1"], 2)]
    // closing paren is a keyword; the closer rule only applies at >= 0
    #[case(&["1", ")"], -1)]
    // paren balance alone
    #[case(&["f(a,", "b"], 1)]
    #[case(&["f(a, (b,", "c"], 2)]
    #[case(&["  x)", "y"], -1)]
    // continuation after THEN
    #[case(&["if x then", "y := 1"], 1)]
    // continuation does not apply at one level or more
    #[case(&["select case when a then", "b"], 1)]
    // closer rule
    #[case(&["x", ");"], -1)]
    #[case(&["x", "-- note"], -1)]
    #[case(&["select a", "-- note"], 0)]
    #[case(&["select a", "# note"], 0)]
    // parens and keywords inside literals are invisible
    #[case(&["x = ')' -- (", "y"], 0)]
    #[case(&["/* select */ x", "y"], 0)]
    fn arithmetic(#[case] text: &[&str], #[case] expected: isize) {
        assert_eq!(delta_of_last_line(&lines(text)).level_delta, expected);
    }

    #[test]
    fn reports_previous_indent() {
        let delta = delta_of_last_line(&lines(&["select a,", "      b", "", "   ", "c"]));
        assert_eq!(
            delta,
            LevelDelta {
                level_delta: 0,
                previous_indent: 6
            }
        );
    }

    #[test]
    fn first_line_is_neutral() {
        for text in ["select 1", "x", "(", "then"] {
            assert_eq!(delta_of_last_line(text).level_delta, 0, "{text:?}");
        }
        assert_eq!(delta_of_last_line(")").level_delta, -1);
    }

    #[test]
    fn precomputed_state_is_used_as_given() {
        let doc = Document::new(lines(&["select a,", "b", "c"]));
        let c = doc.line_start_of(3).unwrap();
        let pretend = IndentState { start: 0, indent: 12 };
        let delta = level_delta(&doc, c, Some(pretend), &SqlScanner, &Config::default());
        assert_eq!(delta.level_delta, 1);
        assert_eq!(delta.previous_indent, 12);
    }

    #[test]
    fn custom_keywords_drive_classification() {
        let doc = Document::new(lines(&["with x as", "y"]));
        let y = doc.line_start_of(2).unwrap();
        let config = Config::default().with_keywords(KeywordSet::from_iter(["with"]));
        assert_eq!(level_delta(&doc, y, None, &SqlScanner, &config).level_delta, 1);
        let default = level_delta(&doc, y, None, &SqlScanner, &Config::default());
        assert_eq!(default.level_delta, 0);
    }

    #[test]
    fn only_the_injected_classifier_decides_literals() {
        // `select` on line one is hidden by a synthetic comment span, the
        // paren on line two by a synthetic string span.
        let text = lines(&["select a", "f(", "x"]);
        let doc = Document::new(text.as_str());
        let second = doc.line_start_of(2).unwrap();
        let third = doc.line_start_of(3).unwrap();
        let syntax = SyntheticSyntax::default()
            .comment(0..8)
            .string(second + 1..second + 2);

        assert_eq!(level_delta(&doc, second, None, &SqlScanner, &Config::default()).level_delta, 1);
        assert_eq!(level_delta(&doc, second, None, &syntax, &Config::default()).level_delta, 0);

        assert_eq!(level_delta(&doc, third, None, &SqlScanner, &Config::default()).level_delta, 1);
        assert_eq!(level_delta(&doc, third, None, &syntax, &Config::default()).level_delta, 0);
    }
}
