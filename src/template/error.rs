use std::fmt;

use thiserror::Error;

/// Location of a token inside a template string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn start() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} (byte {})", self.line, self.column, self.offset)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template '{template}' contains unexpected character '{found}' at {position}")]
    UnexpectedCharacter {
        template: String,
        found: char,
        position: Position,
    },
    #[error("template '{template}' must start with '/'")]
    MissingLeadingSlash { template: String, position: Position },
    #[error("template '{template}' has unexpected token '{found}' at {position}, expected {expected}")]
    UnexpectedToken {
        template: String,
        found: String,
        expected: &'static str,
        position: Position,
    },
    #[error("template '{template}' ended unexpectedly at {position}, expected {expected}")]
    UnexpectedEnd {
        template: String,
        expected: &'static str,
        position: Position,
    },
    #[error("variable opened at {position} in template '{template}' is missing '}}'")]
    UnterminatedVariable { template: String, position: Position },
    #[error("variable at {position} in template '{template}' is nested inside another variable")]
    NestedVariable { template: String, position: Position },
}

impl TemplateError {
    pub fn position(&self) -> Position {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::MissingLeadingSlash { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEnd { position, .. }
            | Self::UnterminatedVariable { position, .. }
            | Self::NestedVariable { position, .. } => *position,
        }
    }
}

pub type TemplateResult<T> = Result<T, TemplateError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("request has {actual} segments but the route needs at least {expected}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("request verb '{actual}' does not match route verb '{expected}'")]
    VerbMismatch { expected: String, actual: String },
    #[error("segment {index} '{actual}' does not match route literal '{expected}'")]
    PathMismatch {
        index: usize,
        expected: String,
        actual: String,
    },
}

pub type SegmentMatchResult<T> = Result<T, MatchError>;
