use serde::{Deserialize, Serialize};

use super::node::{PathNode, RouteTarget};
use super::{RouteTree, TreeError, TreeResult};
use crate::path::{RequestPath, split_request_path};
use crate::template::{CompiledRoute, PathSegment};
use crate::types::MatchResult;

enum Miss<'p> {
    Segment(&'p str),
    Exhausted,
}

/// One registered route, rebuilt from the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub method: String,
    pub template: String,
    pub operation: String,
}

impl RouteTree {
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn find(&self, method: &str, path: &str) -> TreeResult<MatchResult> {
        let request = split_request_path(path, self.options.trim_whitespace);
        let method = self.options.normalize_method(method);

        match self.lookup(&method, &request) {
            Ok(target) => Ok(MatchResult {
                operation: target.operation.clone(),
                verb: request.verb.to_string(),
                variables: target.bind(&request.segments),
            }),
            Err(Miss::Segment(segment)) => Err(TreeError::SegmentNotMatched {
                method: method.into_owned(),
                path: path.to_string(),
                segment: segment.to_string(),
            }),
            Err(Miss::Exhausted) => Err(TreeError::RouteNotFound {
                method: method.into_owned(),
                path: path.to_string(),
            }),
        }
    }

    // Any visited node holding a target for (verb, method) ends the walk,
    // which lets `**` routes absorb the rest of the request.
    fn lookup<'p>(
        &self,
        method: &str,
        request: &RequestPath<'p>,
    ) -> Result<&RouteTarget, Miss<'p>> {
        let mut node = &self.root;
        for &segment in &request.segments {
            let Some(child) = node.child(segment) else {
                return Err(Miss::Segment(segment));
            };
            if let Some(target) = child.target(request.verb, method) {
                return Ok(target);
            }
            node = child;
        }
        Err(Miss::Exhausted)
    }

    /// Every registered route with its canonical template, sorted by
    /// template then method.
    pub fn entries(&self) -> Vec<RouteEntry> {
        let mut out = Vec::with_capacity(self.len());
        let mut trail = Vec::new();
        collect_entries(&self.root, &mut trail, &mut out);
        out.sort_by(|a, b| {
            a.template
                .cmp(&b.template)
                .then_with(|| a.method.cmp(&b.method))
        });
        out
    }
}

fn collect_entries(node: &PathNode, trail: &mut Vec<PathSegment>, out: &mut Vec<RouteEntry>) {
    for (verb, target) in &node.targets {
        let route = CompiledRoute {
            segments: trail.clone(),
            verb: (!verb.is_empty()).then(|| verb.to_string()),
            variables: target.variables.to_vec(),
        };
        out.push(RouteEntry {
            method: target.method.clone(),
            template: route.render(),
            operation: target.operation.clone(),
        });
    }

    for (segment, child) in node.children() {
        trail.push(segment);
        collect_entries(child, trail, out);
        trail.pop();
    }
}
