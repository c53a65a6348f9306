//! Line-shape tests feeding the level delta.
//!
//! Each test asks the classifier about the exact position it inspects and
//! returns false when that position is inside a string or comment.
use crate::*;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// True if the line at `line_start` begins with one of `keywords`.
pub fn starts_with_keyword<C>(
    document: &Document,
    line_start: usize,
    classifier: &C,
    keywords: &KeywordSet,
) -> bool
where
    C: LexicalClassifier + ?Sized,
{
    let first = document.indentation_end(line_start);
    !classifier.is_string_or_comment(document.text(), first)
        && keywords.matches_line(document.line_text(line_start))
}

/// True if the line at `line_start` opens with a closing parenthesis or a
/// line comment marker (`--` or `#`).
pub fn starts_with_closer<C>(document: &Document, line_start: usize, classifier: &C) -> bool
where
    C: LexicalClassifier + ?Sized,
{
    let first = document.indentation_end(line_start);
    if classifier.is_string_or_comment(document.text(), first) {
        return false;
    }
    let rest = &document.text()[first..document.line_end(line_start)];
    rest.starts_with(')') || rest.starts_with("--") || rest.starts_with('#')
}

/// True if the text before `line_start`, ignoring trailing whitespace and
/// blank lines, ends with an open parenthesis or the word `THEN`.
pub fn follows_continuation<C>(document: &Document, line_start: usize, classifier: &C) -> bool
where
    C: LexicalClassifier + ?Sized,
{
    let text = document.text();
    let before = text[..line_start].trim_end();
    let end = before.len();
    if before.ends_with('(') {
        return !classifier.is_string_or_comment(text, end - 1);
    }
    let Some(word_start) = end.checked_sub(4) else {
        return false;
    };
    let Some(word) = before.get(word_start..) else {
        return false;
    };
    word.eq_ignore_ascii_case("then")
        && !before[..word_start].chars().next_back().is_some_and(is_word_char)
        && !classifier.is_string_or_comment(text, word_start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn second_line(text: &str) -> (Document, usize) {
        let doc = Document::new(text);
        let start = doc.line_start_of(2).expect("two lines");
        (doc, start)
    }

    #[rstest]
    #[case("x\n  SELECT a", true)]
    #[case("x\nend if;", true)]
    #[case("x\n)", true)]
    #[case("x\n  selected", false)]
    #[case("x\n'select'", false)]
    #[case("x\n-- select", false)]
    #[case("/* note\nselect a */", false)]
    #[case("x = 'a\nselect b'", false)]
    fn keyword_lines(#[case] text: &str, #[case] expected: bool) {
        let (doc, start) = second_line(text);
        let keywords = KeywordSet::default();
        assert_eq!(starts_with_keyword(&doc, start, &SqlScanner, &keywords), expected);
    }

    #[rstest]
    #[case("x\n)", true)]
    #[case("x\n   ) as t", true)]
    #[case("x\n);", true)]
    #[case("x\n-- note", true)]
    #[case("x\n# note", true)]
    #[case("x\n- 1", false)]
    #[case("x\nfoo)", false)]
    #[case("x = '\n) still text'", false)]
    #[case("/*\n-- inside */", false)]
    fn closer_lines(#[case] text: &str, #[case] expected: bool) {
        let (doc, start) = second_line(text);
        assert_eq!(starts_with_closer(&doc, start, &SqlScanner), expected);
    }

    #[rstest]
    #[case("if x then\ny", true)]
    #[case("IF x THEN  \t\ny", true)]
    #[case("when a then\n\n   \ny", true)]
    #[case("f(\ny", true)]
    #[case("f(  \ny", true)]
    #[case("x = athen\ny", false)]
    #[case("x = 'then'\ny", false)]
    #[case("x -- then\ny", false)]
    #[case("x -- open (\ny", false)]
    #[case("x = '('\ny", false)]
    #[case("f()\ny", false)]
    #[case("then\ny", true)]
    fn continuation(#[case] text: &str, #[case] expected: bool) {
        let doc = Document::new(text);
        let start = doc.line_start(text.len());
        assert_eq!(follows_continuation(&doc, start, &SqlScanner), expected, "{text:?}");
    }

    #[test]
    fn nothing_precedes_the_first_line() {
        let doc = Document::new("(");
        assert!(!follows_continuation(&doc, 0, &SqlScanner));
    }
}
