use super::compiled::{CompiledRoute, PathSegment, bind_captures};
use super::{MatchError, SegmentMatchResult};
use crate::types::PathVar;

impl CompiledRoute {
    /// Matches an already split request against this route alone.
    ///
    /// Extra trailing request segments are accepted; they belong to an
    /// open `**` capture if the route has one.
    #[tracing::instrument(level = "trace", skip_all, fields(request_segments = segments.len() as u64, verb = %verb))]
    pub fn match_segments<S: AsRef<str>>(
        &self,
        segments: &[S],
        verb: &str,
    ) -> SegmentMatchResult<Vec<PathVar>> {
        if segments.len() < self.segments.len() {
            return Err(MatchError::LengthMismatch {
                expected: self.segments.len(),
                actual: segments.len(),
            });
        }

        if let Some(expected) = &self.verb
            && expected != verb
        {
            return Err(MatchError::VerbMismatch {
                expected: expected.clone(),
                actual: verb.to_string(),
            });
        }

        for (index, (pattern, actual)) in self.segments.iter().zip(segments).enumerate() {
            if let PathSegment::Literal(expected) = pattern
                && expected != actual.as_ref()
            {
                return Err(MatchError::PathMismatch {
                    index,
                    expected: expected.clone(),
                    actual: actual.as_ref().to_string(),
                });
            }
        }

        Ok(bind_captures(&self.variables, segments))
    }
}
