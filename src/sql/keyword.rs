//! Keywords that shape SQL indentation.
//!
//! A line "starts with a keyword" when its first whitespace-delimited word is
//! one of the recognized keywords, compared case-insensitively. The closing
//! parenthesis is part of the default list: a line made of `)` followed by
//! whitespace or end of line classifies the same way `end` does.
//!
//! Design notes:
//! - [`Keyword`] is the fixed default list. It only changes when the indenter
//!   itself changes.
//! - [`KeywordSet`] is the data-driven form used at runtime. It starts from
//!   [`Keyword::ALL`] and can be replaced from configuration.
//! - Matching is a set lookup on the leading word. The boundary rule (next
//!   character is whitespace or end of line) falls out of splitting on
//!   whitespace, so `select*` or `end;` do not match.

use itertools::Itertools as _;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Select,
    Update,
    Insert,
    Delete,
    Union,
    Intersect,
    From,
    Where,
    Into,
    Group,
    Having,
    Order,
    Set,
    Use,
    Alter,
    Create,
    Drop,
    Truncate,
    Begin,
    Else,
    End,
    CloseParen,
    Delimiter,
    Source,
}

impl Keyword {
    /// The default recognized keywords, in classification order.
    pub const ALL: [Self; 24] = [
        Keyword::Select,
        Keyword::Update,
        Keyword::Insert,
        Keyword::Delete,
        Keyword::Union,
        Keyword::Intersect,
        Keyword::From,
        Keyword::Where,
        Keyword::Into,
        Keyword::Group,
        Keyword::Having,
        Keyword::Order,
        Keyword::Set,
        Keyword::Use,
        Keyword::Alter,
        Keyword::Create,
        Keyword::Drop,
        Keyword::Truncate,
        Keyword::Begin,
        Keyword::Else,
        Keyword::End,
        Keyword::CloseParen,
        Keyword::Delimiter,
        Keyword::Source,
    ];

    /// Canonical lowercase string form of the keyword.
    pub const fn as_str(self) -> &'static str {
        use Keyword::*;
        match self {
            Select => "select",
            Update => "update",
            Insert => "insert",
            Delete => "delete",
            Union => "union",
            Intersect => "intersect",
            From => "from",
            Where => "where",
            Into => "into",
            Group => "group",
            Having => "having",
            Order => "order",
            Set => "set",
            Use => "use",
            Alter => "alter",
            Create => "create",
            Drop => "drop",
            Truncate => "truncate",
            Begin => "begin",
            Else => "else",
            End => "end",
            CloseParen => ")",
            Delimiter => "delimiter",
            Source => "source",
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime set of recognized keywords.
///
/// Entries are stored trimmed and ASCII-lowercased; empty entries are
/// dropped. Since matching works on the first whitespace-delimited word of a
/// line, an entry containing whitespace can never match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    words: BTreeSet<String>,
}

impl Default for KeywordSet {
    fn default() -> Self {
        Keyword::ALL.iter().map(|kw| kw.as_str()).collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(|w| w.as_ref().trim().to_ascii_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }
}

impl KeywordSet {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-insensitive membership test for a single word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_lowercase())
    }

    /// True if `line`, after leading whitespace, begins with a recognized
    /// keyword followed by whitespace or end of line.
    pub fn matches_line(&self, line: &str) -> bool {
        line.split_whitespace()
            .next()
            .is_some_and(|word| self.contains(word))
    }
}

impl std::fmt::Display for KeywordSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.words.iter().join(", "))
    }
}
