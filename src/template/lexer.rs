use regex::Regex;
use std::sync::LazyLock;

use super::{Position, TemplateError, TemplateResult};

static IDENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9_]*").expect("ident pattern should compile")
});

const PUNCT: &str = "-[!@#$%^&*()+_={}|:;\"'<,>.?/]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Ident,
    Punct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub position: Position,
}

impl Token<'_> {
    pub fn is_punct(&self, ch: char) -> bool {
        self.kind == TokenKind::Punct && self.text.starts_with(ch)
    }
}

/// Single forward scan over a template. Yields `Err` once on the first
/// character that is neither an identifier nor punctuation, then stops.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    position: Position,
    failed: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            position: Position::start(),
            failed: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    // tokens never span a newline; '\n' itself is rejected
    fn advance(&mut self, text: &str) {
        self.position.column += text.chars().count();
        self.position.offset += text.len();
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = TemplateResult<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let rest = &self.input[self.position.offset..];
        let ch = rest.chars().next()?;
        let position = self.position;

        let (kind, text) = if let Some(found) = IDENT.find(rest) {
            (TokenKind::Ident, &rest[..found.end()])
        } else if PUNCT.contains(ch) {
            (TokenKind::Punct, &rest[..ch.len_utf8()])
        } else {
            self.failed = true;
            return Some(Err(TemplateError::UnexpectedCharacter {
                template: self.input.to_string(),
                found: ch,
                position,
            }));
        };

        self.advance(text);
        Some(Ok(Token {
            kind,
            text,
            position,
        }))
    }
}
