//! # Schema Registry
//!
//! A build-once, read-only catalogue of root object schemas, keyed by their
//! qualified `module:name`. Constructed at schema-load time, then shared
//! immutably — the registry has no interior mutability, so concurrent reads
//! are safe by construction. Process-wide placement (for instance inside a
//! `std::sync::OnceLock`) is the embedding application's choice.

use std::collections::HashMap;
use std::sync::Arc;

use crate::object::ObjectSchema;
use crate::types::SchemaError;

/// Catalogue of root schemas, keyed `module:name`.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    roots: HashMap<String, Arc<ObjectSchema>>,
}

impl SchemaRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a root schema under its qualified name.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateSchema`] when the qualified name is
    /// already taken.
    pub fn register(&mut self, root: Arc<ObjectSchema>) -> Result<(), SchemaError> {
        let key = qualified(root.module(), root.name());
        if self.roots.contains_key(&key) {
            return Err(SchemaError::DuplicateSchema { name: key });
        }
        self.roots.insert(key, root);
        Ok(())
    }

    /// Look up a root schema by module and element name.
    pub fn lookup(&self, module: &str, name: &str) -> Option<Arc<ObjectSchema>> {
        self.roots.get(&qualified(module, name)).cloned()
    }

    /// Number of registered roots.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Qualified names of all registered roots, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.roots.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

fn qualified(module: &str, name: &str) -> String {
    format!("{module}:{name}")
}
