use crate::template::TemplateError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("template '{template}' compiles to an empty path")]
    EmptyPath { template: String },
    #[error("no route segment matches '{segment}' for {method} '{path}'")]
    SegmentNotMatched {
        method: String,
        path: String,
        segment: String,
    },
    #[error("no route matched for {method} '{path}'")]
    RouteNotFound { method: String, path: String },
    #[error("route {method} '{template}' is already registered (verb '{verb}')")]
    DuplicateRoute {
        method: String,
        verb: String,
        template: String,
    },
    #[error("template is {length} bytes long, limit is {limit}")]
    TemplateTooLong { length: usize, limit: usize },
    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl TreeError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::SegmentNotMatched { .. } | Self::RouteNotFound { .. }
        )
    }
}

pub type TreeResult<T> = Result<T, TreeError>;
