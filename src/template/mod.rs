pub mod ast;
mod compiled;
mod error;
pub mod lexer;
mod matcher;
mod parser;
mod render;

pub use compiled::{
    CaptureEnd, CompiledRoute, DOUBLE_STAR, PathSegment, STAR, VariableCapture, bind_captures,
    compile,
};
pub use error::{MatchError, Position, SegmentMatchResult, TemplateError, TemplateResult};
pub use parser::parse_template;

/// Parses and compiles a template in one step.
pub fn compile_template(template: &str) -> TemplateResult<CompiledRoute> {
    parse_template(template).map(|ast| compile(&ast))
}
