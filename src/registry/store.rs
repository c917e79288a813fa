use crate::registry::RegistryMetrics;
use crate::router::RouterOptions;
use crate::tree::{RouteTree, TreeResult};

#[derive(Debug)]
pub struct RouteRegistry {
    tree: RouteTree,
    metrics: RegistryMetrics,
}

impl RouteRegistry {
    pub fn new(options: RouterOptions) -> Self {
        Self {
            tree: RouteTree::new(options),
            metrics: RegistryMetrics::default(),
        }
    }

    pub fn insert(&mut self, method: &str, template: &str, operation: &str) -> TreeResult<()> {
        let replaced = self.tree.add(method, template, operation)?;
        self.metrics.record_insert(replaced.is_some());
        Ok(())
    }

    /// Hands the built tree out and leaves an empty one with the same
    /// options in its place.
    pub fn take_tree(&mut self) -> RouteTree {
        let options = self.tree.options().clone();
        std::mem::replace(&mut self.tree, RouteTree::new(options))
    }

    pub fn metrics(&self) -> &RegistryMetrics {
        &self.metrics
    }
}
