//! Catalogue selector - which example is currently highlighted

use super::registry::{Lookup, SnippetRegistry};

/// Holds the identifier of the highlighted example
///
/// `select` accepts any identifier, including ones the registry doesn't
/// know. Downstream rendering resolves those to the placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueSelector {
    current: String,
}

impl CatalogueSelector {
    pub fn new(default_id: impl Into<String>) -> Self {
        Self {
            current: default_id.into(),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Select an identifier. Returns true if the selection changed.
    pub fn select(&mut self, id: &str) -> bool {
        if self.current == id {
            return false;
        }
        tracing::debug!(from = %self.current, to = %id, "selection changed");
        self.current = id.to_string();
        true
    }

    /// Resolve the current selection against a registry
    pub fn resolve(&self, registry: &SnippetRegistry) -> Lookup<'static> {
        registry.lookup(&self.current)
    }

    /// Move to the next registry identifier, wrapping at the end
    ///
    /// From an identifier the registry doesn't contain, starts at the first.
    pub fn cycle_next(&mut self, registry: &SnippetRegistry) {
        if registry.is_empty() {
            return;
        }
        let next = match registry.position(&self.current) {
            Some(idx) => (idx + 1) % registry.len(),
            None => 0,
        };
        if let Some(id) = registry.id_at(next) {
            self.select(id);
        }
    }

    /// Move to the previous registry identifier, wrapping at the start
    pub fn cycle_prev(&mut self, registry: &SnippetRegistry) {
        if registry.is_empty() {
            return;
        }
        let last = registry.len() - 1;
        let prev = match registry.position(&self.current) {
            Some(0) | None => last,
            Some(idx) => idx - 1,
        };
        if let Some(id) = registry.id_at(prev) {
            self.select(id);
        }
    }
}
