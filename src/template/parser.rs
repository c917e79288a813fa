use smallvec::smallvec;

use super::ast::{SegmentAst, SegmentsAst, TemplateAst, VariableAst};
use super::lexer::{Lexer, Token, TokenKind};
use super::{Position, TemplateError, TemplateResult};
use crate::types::FieldPath;

/// Parses `Template = "/" Segments [ ":" Verb ]`.
#[tracing::instrument(level = "trace", skip_all, fields(template = %template))]
pub fn parse_template(template: &str) -> TemplateResult<TemplateAst> {
    let mut parser = TemplateParser::new(template);
    parser.parse_template()
}

struct TemplateParser<'a> {
    template: &'a str,
    lexer: Lexer<'a>,
    lookahead: Option<Token<'a>>,
    variable_depth: usize,
}

impl<'a> TemplateParser<'a> {
    fn new(template: &'a str) -> Self {
        Self {
            template,
            lexer: Lexer::new(template),
            lookahead: None,
            variable_depth: 0,
        }
    }

    fn parse_template(&mut self) -> TemplateResult<TemplateAst> {
        match self.peek()? {
            Some(token) if token.is_punct('/') => {
                self.bump()?;
            }
            other => {
                return Err(TemplateError::MissingLeadingSlash {
                    template: self.template.to_string(),
                    position: other.map_or_else(Position::start, |t| t.position),
                });
            }
        }

        let segments = self.parse_segments()?;

        let verb = if self.eat_punct(':')? {
            Some(self.expect_ident("verb")?.text.to_string())
        } else {
            None
        };

        if let Some(token) = self.peek()? {
            return Err(self.unexpected(token, "end of template"));
        }

        Ok(TemplateAst { segments, verb })
    }

    fn parse_segments(&mut self) -> TemplateResult<SegmentsAst> {
        let mut segments = vec![self.parse_segment()?];
        while self.eat_punct('/')? {
            segments.push(self.parse_segment()?);
        }
        Ok(SegmentsAst::new(segments))
    }

    fn parse_segment(&mut self) -> TemplateResult<SegmentAst> {
        let Some(token) = self.peek()? else {
            return Err(self.unexpected_end("path segment"));
        };

        if token.is_punct('*') {
            self.bump()?;
            if self.eat_punct('*')? {
                return Ok(SegmentAst::DoubleStar);
            }
            return Ok(SegmentAst::Star);
        }

        if token.kind == TokenKind::Ident {
            self.bump()?;
            return Ok(SegmentAst::Literal(token.text.to_string()));
        }

        if token.is_punct('{') {
            return self.parse_variable().map(SegmentAst::Variable);
        }

        Err(self.unexpected(token, "path segment"))
    }

    fn parse_variable(&mut self) -> TemplateResult<VariableAst> {
        let open = self.bump()?.map_or_else(Position::start, |t| t.position);
        if self.variable_depth > 0 {
            return Err(TemplateError::NestedVariable {
                template: self.template.to_string(),
                position: open,
            });
        }

        let mut fields: FieldPath = smallvec![self.expect_ident("field name")?.text.to_string()];
        while self.eat_punct('.')? {
            fields.push(self.expect_ident("field name")?.text.to_string());
        }

        let segments = if self.eat_punct('=')? {
            self.variable_depth += 1;
            let nested = self.parse_segments()?;
            self.variable_depth -= 1;
            Some(nested)
        } else {
            None
        };

        match self.peek()? {
            Some(token) if token.is_punct('}') => {
                self.bump()?;
                Ok(VariableAst::new(fields, segments))
            }
            Some(token) => Err(self.unexpected(token, "'}'")),
            None => Err(TemplateError::UnterminatedVariable {
                template: self.template.to_string(),
                position: open,
            }),
        }
    }

    fn expect_ident(&mut self, expected: &'static str) -> TemplateResult<Token<'a>> {
        match self.bump()? {
            Some(token) if token.kind == TokenKind::Ident => Ok(token),
            Some(token) => Err(self.unexpected(token, expected)),
            None => Err(self.unexpected_end(expected)),
        }
    }

    fn eat_punct(&mut self, ch: char) -> TemplateResult<bool> {
        match self.peek()? {
            Some(token) if token.is_punct(ch) => {
                self.bump()?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn peek(&mut self) -> TemplateResult<Option<Token<'a>>> {
        if self.lookahead.is_none() {
            self.lookahead = self.lexer.next().transpose()?;
        }
        Ok(self.lookahead)
    }

    fn bump(&mut self) -> TemplateResult<Option<Token<'a>>> {
        let token = self.peek()?;
        self.lookahead = None;
        Ok(token)
    }

    fn unexpected(&self, token: Token<'a>, expected: &'static str) -> TemplateError {
        TemplateError::UnexpectedToken {
            template: self.template.to_string(),
            found: token.text.to_string(),
            expected,
            position: token.position,
        }
    }

    fn unexpected_end(&self, expected: &'static str) -> TemplateError {
        TemplateError::UnexpectedEnd {
            template: self.template.to_string(),
            expected,
            position: self.lexer.position(),
        }
    }
}
