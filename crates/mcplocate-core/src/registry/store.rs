//! Tool registry storage and lookup.

use super::types::ToolDescriptor;

/// Central catalog of supported tools.
///
/// Descriptors are kept in definition order and never mutated after
/// startup; the catalog is small enough that lookup is a linear scan.
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
}

impl ToolRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Create a registry pre-populated with all built-in tools.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for descriptor in super::builtins::builtin_descriptors() {
            registry.register(descriptor);
        }
        registry
    }

    /// Register a tool. A descriptor with an already-registered key
    /// replaces the existing one in place.
    pub fn register(&mut self, descriptor: ToolDescriptor) {
        match self.tools.iter_mut().find(|t| t.key == descriptor.key) {
            Some(existing) => *existing = descriptor,
            None => self.tools.push(descriptor),
        }
    }

    /// Look up a tool by key or alias.
    ///
    /// The query is trimmed and lowercased; matching is exact (no prefix
    /// or fuzzy matching). `None` means the query names no registered
    /// tool - an expected outcome, not an error.
    pub fn find(&self, query: &str) -> Option<&ToolDescriptor> {
        let normalized = query.trim().to_lowercase();
        self.tools
            .iter()
            .find(|t| t.key == normalized)
            .or_else(|| {
                self.tools
                    .iter()
                    .find(|t| t.aliases.iter().any(|a| a == &normalized))
            })
    }

    /// All canonical keys in definition order.
    pub fn keys(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.key.as_str()).collect()
    }

    /// Check if a tool key is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.tools.iter().any(|t| t.key == key)
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Iterate over all descriptors in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.iter()
    }

    /// All descriptors as a vec, in definition order.
    pub fn all(&self) -> Vec<&ToolDescriptor> {
        self.tools.iter().collect()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
