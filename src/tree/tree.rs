use std::sync::Arc;

use super::node::{PathNode, RouteTarget};
use super::{TreeError, TreeResult};
use crate::router::{DuplicatePolicy, RouterOptions};
use crate::template::{CompiledRoute, compile_template};

/// Prefix tree over compiled route segments.
///
/// Built with `&mut self` calls (`add`, `insert`) and queried through `&self`
/// (`find`), so a finished tree can be shared across threads without locks.
#[derive(Debug, Default)]
pub struct RouteTree {
    pub(super) root: PathNode,
    pub(super) options: RouterOptions,
    len: usize,
}

impl RouteTree {
    pub fn new(options: RouterOptions) -> Self {
        Self {
            root: PathNode::default(),
            options,
            len: 0,
        }
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    /// Number of registered (path, verb) targets.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Parses, compiles and inserts `template`. Returns the target it
    /// replaced, if any.
    pub fn add(
        &mut self,
        method: &str,
        template: &str,
        operation: &str,
    ) -> TreeResult<Option<RouteTarget>> {
        let limit = self.options.max_template_length;
        if template.len() > limit {
            return Err(TreeError::TemplateTooLong {
                length: template.len(),
                limit,
            });
        }
        let route = compile_template(template)?;
        self.insert(method, &route, operation)
    }

    #[tracing::instrument(level = "trace", skip(self, route), fields(route = %route))]
    pub fn insert(
        &mut self,
        method: &str,
        route: &CompiledRoute,
        operation: &str,
    ) -> TreeResult<Option<RouteTarget>> {
        if route.segments.is_empty() {
            return Err(TreeError::EmptyPath {
                template: route.render(),
            });
        }

        let method = self.options.normalize_method(method);
        let verb = route.verb_or_empty();

        let mut node = &mut self.root;
        for segment in &route.segments {
            node = node.child_or_insert(segment);
        }

        if self.options.duplicate_policy == DuplicatePolicy::Reject
            && node.verb_target(verb).is_some()
        {
            return Err(TreeError::DuplicateRoute {
                method: method.into_owned(),
                verb: verb.to_string(),
                template: route.render(),
            });
        }

        let target = RouteTarget {
            method: method.into_owned(),
            operation: operation.to_string(),
            variables: Arc::from(route.variables.as_slice()),
        };
        let replaced = node.set_target(verb, target);

        match &replaced {
            Some(previous) => tracing::debug!(
                method = %previous.method,
                verb,
                previous = %previous.operation,
                operation,
                "route target replaced"
            ),
            None => self.len += 1,
        }

        Ok(replaced)
    }
}
