//! Line scanner for the infographic DSL using logos
//!
//! The DSL is line oriented: every non-blank line is a keyword optionally
//! followed by an argument. Only the head word of each line is lexed, the
//! remainder is kept verbatim so values like `desc Fast & cheap` survive intact.

use logos::Logos;

use super::ast::Span;

/// Head word of a line
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    #[token("infographic")]
    Infographic,
    #[token("data")]
    Data,
    #[token("theme")]
    Theme,
    #[token("title")]
    Title,
    #[token("items")]
    Items,
    #[token("children")]
    Children,

    // Item properties
    #[token("label")]
    Label,
    #[token("value")]
    Value,
    #[token("desc")]
    Desc,
    #[token("icon")]
    Icon,

    /// Item entry marker `- `
    #[token("-")]
    Dash,

    /// Anything else; skipped by every block rule
    #[regex(r"[^\s]+", priority = 1)]
    Word,
}

/// A classified source line
#[derive(Debug, Clone, PartialEq)]
pub struct Line<'a> {
    /// Zero-based line number
    pub number: usize,
    /// Byte range of the line in the source, newline excluded
    pub span: Span,
    /// Count of leading whitespace characters
    pub indent: usize,
    /// Head keyword, `None` for blank lines
    pub head: Option<Keyword>,
    /// Trimmed line text
    pub text: &'a str,
    /// Text following the head keyword, untrimmed
    pub rest: &'a str,
}

impl<'a> Line<'a> {
    fn classify(number: usize, offset: usize, raw: &'a str) -> Self {
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        let indent = raw.chars().take_while(|c| c.is_whitespace()).count();
        let text = raw.trim();

        let mut lexer = Keyword::lexer(text);
        let (head, rest) = match lexer.next() {
            Some(Ok(keyword)) => (Some(keyword), lexer.remainder()),
            _ => (None, ""),
        };

        Line {
            number,
            span: offset..offset + raw.len(),
            indent,
            head,
            text,
            rest,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }

    /// The keyword argument: present only when the keyword is followed by
    /// whitespace and at least one more non-blank character.
    pub fn argument(&self) -> Option<&'a str> {
        argument_of(self.rest)
    }

    /// True when the line consists of `keyword` alone
    pub fn is_bare(&self, keyword: Keyword) -> bool {
        self.head == Some(keyword) && self.rest.is_empty()
    }

    /// Argument of `keyword` if this line is a `<keyword> <argument>` pair
    pub fn keyword_argument(&self, keyword: Keyword) -> Option<&'a str> {
        if self.head == Some(keyword) {
            self.argument()
        } else {
            None
        }
    }
}

fn argument_of(rest: &str) -> Option<&str> {
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let trimmed = rest.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Classify a single fragment of text, as used for the `- label <x>` header form
pub fn split_head(text: &str) -> (Option<Keyword>, Option<&str>) {
    let mut lexer = Keyword::lexer(text);
    match lexer.next() {
        Some(Ok(keyword)) => (Some(keyword), argument_of(lexer.remainder())),
        _ => (None, None),
    }
}

/// Split source into classified lines
pub fn lines(source: &str) -> Vec<Line<'_>> {
    let mut offset = 0;
    source
        .split('\n')
        .enumerate()
        .map(|(number, raw)| {
            let line = Line::classify(number, offset, raw);
            offset += raw.len() + 1;
            line
        })
        .collect()
}
