use crate::registry::{RegistryMetrics, RouteRegistry};
use crate::router::{RouterError, RouterOptions, RouterResult};
use crate::tree::RouteTree;
use crate::types::MatchResult;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::OnceLock;

#[derive(Debug)]
struct RouterState {
    registry: RouteRegistry,
    readonly: OnceLock<Arc<RouteTree>>,
}

impl RouterState {
    fn new(options: RouterOptions) -> Self {
        Self {
            registry: RouteRegistry::new(options),
            readonly: OnceLock::new(),
        }
    }
}

/// Route registry with a build phase (`add`, `add_bulk`) followed by a
/// lookup phase (`find`) once `seal` has been called.
#[derive(Debug)]
pub struct Router {
    inner: RwLock<RouterState>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Router {
    pub fn new(options: Option<RouterOptions>) -> Self {
        Self {
            inner: RwLock::new(RouterState::new(options.unwrap_or_default())),
        }
    }

    pub fn add(&self, method: &str, template: &str, operation: &str) -> RouterResult<()> {
        let mut guard = self.inner.write();

        if guard.readonly.get().is_some() {
            return Err(RouterError::AddWhileSealed {
                template: template.to_string(),
            });
        }

        guard.registry.insert(method, template, operation)?;
        Ok(())
    }

    /// Registers `(method, template, operation)` triples in order and stops
    /// at the first failure; earlier entries stay registered.
    pub fn add_bulk<I, M, T, O>(&self, entries: I) -> RouterResult<usize>
    where
        I: IntoIterator<Item = (M, T, O)>,
        M: AsRef<str>,
        T: AsRef<str>,
        O: AsRef<str>,
    {
        let mut guard = self.inner.write();

        if guard.readonly.get().is_some() {
            let count = entries.into_iter().count();
            return Err(RouterError::BulkAddWhileSealed { count });
        }

        let mut added = 0usize;
        for (method, template, operation) in entries {
            guard
                .registry
                .insert(method.as_ref(), template.as_ref(), operation.as_ref())?;
            added += 1;
        }
        Ok(added)
    }

    pub fn seal(&self) {
        let mut guard = self.inner.write();
        if guard.readonly.get().is_some() {
            return;
        }

        let tree = guard.registry.take_tree();
        tracing::debug!(
            routes = tree.len(),
            replaced = guard.registry.metrics().targets_replaced,
            "router sealed"
        );
        let _ = guard.readonly.set(Arc::new(tree));
    }

    pub fn is_sealed(&self) -> bool {
        self.inner.read().readonly.get().is_some()
    }

    pub fn find(&self, method: &str, path: &str) -> RouterResult<MatchResult> {
        let guard = self.inner.read();

        match guard.readonly.get() {
            Some(tree) => Ok(tree.find(method, path)?),
            None => Err(RouterError::FindWhileMutable),
        }
    }

    pub fn get_readonly(&self) -> RouterResult<Arc<RouteTree>> {
        let guard = self.inner.read();

        match guard.readonly.get() {
            Some(tree) => Ok(tree.clone()),
            None => Err(RouterError::ReadOnlyUnavailable),
        }
    }

    pub fn metrics(&self) -> RegistryMetrics {
        *self.inner.read().registry.metrics()
    }
}
