use bitflags::bitflags;
use hashbrown::HashMap as FastHashMap;
use std::sync::Arc;

use crate::template::{PathSegment, VariableCapture, bind_captures};
use crate::types::PathVar;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NodeFlags: u8 {
        const HAS_TARGETS = 0b00000001;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTarget {
    pub method: String,
    pub operation: String,
    pub variables: Arc<[VariableCapture]>,
}

impl RouteTarget {
    pub fn bind<S: AsRef<str>>(&self, segments: &[S]) -> Vec<PathVar> {
        bind_captures(&self.variables, segments)
    }
}

// verb -> target
pub(super) type TargetTable = FastHashMap<Box<str>, RouteTarget>;

#[derive(Debug, Default)]
pub struct PathNode {
    pub(super) literals: FastHashMap<Box<str>, PathNode>,
    pub(super) star: Option<Box<PathNode>>,
    pub(super) double_star: Option<Box<PathNode>>,
    pub(super) targets: TargetTable,
    pub(super) flags: NodeFlags,
}

impl PathNode {
    #[inline(always)]
    pub fn has_targets(&self) -> bool {
        self.flags.contains(NodeFlags::HAS_TARGETS)
    }

    pub(super) fn child_or_insert(&mut self, segment: &PathSegment) -> &mut PathNode {
        match segment {
            PathSegment::Literal(value) => self
                .literals
                .entry(value.as_str().into())
                .or_default(),
            PathSegment::Star => &mut **self.star.get_or_insert_with(Default::default),
            PathSegment::DoubleStar => {
                &mut **self.double_star.get_or_insert_with(Default::default)
            }
        }
    }

    /// Child for a request segment: exact literal first, then `*`, then `**`.
    #[inline]
    pub(super) fn child(&self, segment: &str) -> Option<&PathNode> {
        if let Some(node) = self.literals.get(segment) {
            return Some(node);
        }
        self.star.as_deref().or(self.double_star.as_deref())
    }

    /// Target registered for `verb`, whatever its method.
    #[inline]
    pub(super) fn verb_target(&self, verb: &str) -> Option<&RouteTarget> {
        if !self.has_targets() {
            return None;
        }
        self.targets.get(verb)
    }

    /// Target for `verb` that also accepts `method`.
    #[inline]
    pub(super) fn target(&self, verb: &str, method: &str) -> Option<&RouteTarget> {
        self.verb_target(verb).filter(|target| target.method == method)
    }

    /// One target per verb: a later registration replaces the earlier one
    /// even when the methods differ.
    pub(super) fn set_target(&mut self, verb: &str, target: RouteTarget) -> Option<RouteTarget> {
        self.flags.insert(NodeFlags::HAS_TARGETS);
        self.targets.insert(verb.into(), target)
    }

    pub(super) fn children(&self) -> impl Iterator<Item = (PathSegment, &PathNode)> {
        let literals = self
            .literals
            .iter()
            .map(|(key, node)| (PathSegment::Literal(key.to_string()), node));
        let star = self.star.as_deref().map(|node| (PathSegment::Star, node));
        let double_star = self
            .double_star
            .as_deref()
            .map(|node| (PathSegment::DoubleStar, node));
        literals.chain(star).chain(double_star)
    }
}
