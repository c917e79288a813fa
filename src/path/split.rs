use memchr::{memchr, memchr_iter};
use smallvec::SmallVec;

pub type RequestSegments<'a> = SmallVec<[&'a str; 16]>;

/// A request path cut into `/` segments with the `:verb` suffix removed
/// from the last one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestPath<'a> {
    pub segments: RequestSegments<'a>,
    pub verb: &'a str,
}

/// Trims surrounding `/` (and whitespace when asked), splits on `/` and
/// strips the verb at the first `:` of the last segment. A path made only of
/// slashes yields one empty segment.
#[inline]
#[tracing::instrument(level = "trace", skip(path), fields(path_len = path.len() as u64))]
pub fn split_request_path(path: &str, trim_whitespace: bool) -> RequestPath<'_> {
    let path = if trim_whitespace { path.trim() } else { path };
    let trimmed = path.trim_matches('/');

    let mut segments = RequestSegments::new();
    let mut start = 0usize;
    for idx in memchr_iter(b'/', trimmed.as_bytes()) {
        segments.push(&trimmed[start..idx]);
        start = idx + 1;
    }

    let last = &trimmed[start..];
    let (last, verb) = match memchr(b':', last.as_bytes()) {
        Some(colon) => (&last[..colon], &last[colon + 1..]),
        None => (last, ""),
    };
    segments.push(last);

    RequestPath { segments, verb }
}
