use serde::{Deserialize, Serialize};

use super::ast::{SegmentAst, SegmentsAst, TemplateAst};
use crate::types::{FieldPath, PathVar};

pub const STAR: &str = "*";
pub const DOUBLE_STAR: &str = "**";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathSegment {
    Literal(String),
    Star,
    DoubleStar,
}

impl PathSegment {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(value) => value,
            Self::Star => STAR,
            Self::DoubleStar => DOUBLE_STAR,
        }
    }
}

/// Last segment covered by a capture. `Open` runs to the end of the request
/// path and is used iff the capture ends in `**`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureEnd {
    Bounded(usize),
    Open,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableCapture {
    pub fields: FieldPath,
    pub start: usize,
    pub end: CaptureEnd,
}

impl VariableCapture {
    pub fn field_path(&self) -> String {
        self.fields.join(".")
    }

    /// Inclusive index of the last covered segment, given `len` available
    /// segments. `None` when the range falls outside them.
    pub fn last_index(&self, len: usize) -> Option<usize> {
        let last = match self.end {
            CaptureEnd::Bounded(end) => end,
            CaptureEnd::Open => len.checked_sub(1)?,
        };
        (self.start <= last && last < len).then_some(last)
    }

    /// Joins the covered request segments with `/`.
    pub fn extract<S: AsRef<str>>(&self, segments: &[S]) -> String {
        let Some(last) = self.last_index(segments.len()) else {
            return String::new();
        };
        let mut value = String::new();
        for (i, segment) in segments[self.start..=last].iter().enumerate() {
            if i > 0 {
                value.push('/');
            }
            value.push_str(segment.as_ref());
        }
        value
    }
}

/// Values for `captures`, read from the request segments rather than the
/// route's own segments.
pub fn bind_captures<S: AsRef<str>>(captures: &[VariableCapture], segments: &[S]) -> Vec<PathVar> {
    captures
        .iter()
        .map(|capture| PathVar {
            fields: capture.fields.clone(),
            value: capture.extract(segments),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompiledRoute {
    pub segments: Vec<PathSegment>,
    pub verb: Option<String>,
    pub variables: Vec<VariableCapture>,
}

impl CompiledRoute {
    pub fn verb_or_empty(&self) -> &str {
        self.verb.as_deref().unwrap_or("")
    }
}

#[tracing::instrument(level = "trace", skip_all, fields(segments = ast.segments.segments.len() as u64))]
pub fn compile(ast: &TemplateAst) -> CompiledRoute {
    let mut route = CompiledRoute {
        verb: ast.verb.clone(),
        ..Default::default()
    };
    compile_segments(&ast.segments, &mut route);
    route
}

fn compile_segments(segments: &SegmentsAst, route: &mut CompiledRoute) {
    for segment in &segments.segments {
        compile_segment(segment, route);
    }
}

fn compile_segment(segment: &SegmentAst, route: &mut CompiledRoute) {
    let variable = match segment {
        SegmentAst::DoubleStar => {
            route.segments.push(PathSegment::DoubleStar);
            return;
        }
        SegmentAst::Star => {
            route.segments.push(PathSegment::Star);
            return;
        }
        SegmentAst::Literal(value) => {
            route.segments.push(PathSegment::Literal(value.clone()));
            return;
        }
        SegmentAst::Variable(variable) => variable,
    };

    let start = route.segments.len();
    // reserve the slot so captures stay in opening-brace order
    let slot = route.variables.len();
    route.variables.push(VariableCapture {
        fields: variable.fields.clone(),
        start,
        end: CaptureEnd::Open,
    });

    match &variable.segments {
        Some(nested) => compile_segments(nested, route),
        None => route.segments.push(PathSegment::Star),
    }

    let end = match route.segments.last() {
        Some(PathSegment::DoubleStar) => CaptureEnd::Open,
        _ => CaptureEnd::Bounded(route.segments.len() - 1),
    };
    route.variables[slot].end = end;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::parse_template;

    fn compile_str(template: &str) -> CompiledRoute {
        compile(&parse_template(template).unwrap())
    }

    #[test]
    fn flattens_variable_subpattern() {
        let route = compile_str("/v1/users/{a.b=x/*}/z");
        let segments: Vec<&str> = route.segments.iter().map(PathSegment::as_str).collect();
        assert_eq!(segments, vec!["v1", "users", "x", "*", "z"]);
        assert_eq!(route.variables.len(), 1);
        assert_eq!(route.variables[0].fields.as_slice(), ["a", "b"]);
        assert_eq!(route.variables[0].start, 2);
        assert_eq!(route.variables[0].end, CaptureEnd::Bounded(3));
    }

    #[test]
    fn double_star_capture_is_open() {
        let route = compile_str("/a/{id=**}");
        assert_eq!(route.variables[0].start, 1);
        assert_eq!(route.variables[0].end, CaptureEnd::Open);
    }

    #[test]
    fn bare_variable_binds_one_star() {
        let route = compile_str("/a/{id}:get");
        assert_eq!(
            route.segments,
            vec![PathSegment::Literal("a".to_string()), PathSegment::Star]
        );
        assert_eq!(route.variables[0].end, CaptureEnd::Bounded(1));
        assert_eq!(route.verb.as_deref(), Some("get"));
    }

    #[test]
    fn first_segment_capture_is_bounded() {
        let route = compile_str("/{x}/y");
        assert_eq!(route.variables[0].start, 0);
        assert_eq!(route.variables[0].end, CaptureEnd::Bounded(0));
        assert_eq!(route.variables[0].extract(&["p", "y", "z"]), "p");
    }

    #[test]
    fn extract_tolerates_short_input() {
        let route = compile_str("/a/{id=b/c}");
        assert_eq!(route.variables[0].extract(&["a", "b"]), "");
    }
}
