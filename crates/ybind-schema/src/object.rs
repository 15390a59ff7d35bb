//! # Object Schemas
//!
//! An [`ObjectSchema`] is the immutable shape of one schema-modeled object:
//! its module, its element name, and its declarations in schema order —
//! scalar leaves, leaf-lists, child containers, and keyed lists. Shapes are
//! supplied by the schema-definition source at model-construction time
//! (typically emitted by a schema compiler) and shared via `Arc`; the data
//! layer treats them as given, immutable inputs.
//!
//! Schema identity is `Arc` pointer identity: two lists declare "the same"
//! entry shape only when they share the same `Arc<ObjectSchema>`.

use std::collections::HashSet;
use std::sync::Arc;

use crate::types::{LeafType, SchemaError};

/// A scalar leaf declaration.
#[derive(Debug, Clone)]
pub struct LeafDecl {
    /// Element name.
    pub name: String,
    /// The leaf's type descriptor.
    pub ty: LeafType,
}

/// A leaf-list declaration: an ordered collection of scalars.
#[derive(Debug, Clone)]
pub struct LeafListDecl {
    /// Element name.
    pub name: String,
    /// The element type every appended value is checked against.
    pub ty: LeafType,
}

/// A keyed-list declaration: an ordered collection of objects.
#[derive(Debug, Clone)]
pub struct ListDecl {
    /// Element name.
    pub name: String,
    /// The schema every appended entry must carry.
    pub entry: Arc<ObjectSchema>,
}

/// The immutable shape of a schema-modeled object.
#[derive(Debug)]
pub struct ObjectSchema {
    module: String,
    name: String,
    leafs: Vec<LeafDecl>,
    leaf_lists: Vec<LeafListDecl>,
    containers: Vec<Arc<ObjectSchema>>,
    lists: Vec<ListDecl>,
}

impl ObjectSchema {
    /// Start building a schema for `name` declared by `module`.
    pub fn builder(module: &str, name: &str) -> ObjectSchemaBuilder {
        ObjectSchemaBuilder {
            module: module.to_string(),
            name: name.to_string(),
            leafs: Vec::new(),
            leaf_lists: Vec::new(),
            containers: Vec::new(),
            lists: Vec::new(),
        }
    }

    /// The declaring module's name.
    pub fn module(&self) -> &str {
        &self.module
    }

    /// The element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Scalar leaf declarations, in schema order.
    pub fn leafs(&self) -> &[LeafDecl] {
        &self.leafs
    }

    /// Leaf-list declarations, in schema order.
    pub fn leaf_lists(&self) -> &[LeafListDecl] {
        &self.leaf_lists
    }

    /// Child container shapes, in schema order.
    pub fn containers(&self) -> &[Arc<ObjectSchema>] {
        &self.containers
    }

    /// Keyed-list declarations, in schema order.
    pub fn lists(&self) -> &[ListDecl] {
        &self.lists
    }

    /// Index of the named leaf, if declared.
    pub fn leaf_index(&self, name: &str) -> Option<usize> {
        self.leafs.iter().position(|d| d.name == name)
    }

    /// Index of the named leaf-list, if declared.
    pub fn leaf_list_index(&self, name: &str) -> Option<usize> {
        self.leaf_lists.iter().position(|d| d.name == name)
    }

    /// Index of the named child container, if declared.
    pub fn container_index(&self, name: &str) -> Option<usize> {
        self.containers.iter().position(|c| c.name == name)
    }

    /// Index of the named keyed list, if declared.
    pub fn list_index(&self, name: &str) -> Option<usize> {
        self.lists.iter().position(|d| d.name == name)
    }
}

/// Builder for [`ObjectSchema`]. Declaration order is preserved; element
/// names share one namespace per object and must be unique.
#[derive(Debug)]
pub struct ObjectSchemaBuilder {
    module: String,
    name: String,
    leafs: Vec<LeafDecl>,
    leaf_lists: Vec<LeafListDecl>,
    containers: Vec<Arc<ObjectSchema>>,
    lists: Vec<ListDecl>,
}

impl ObjectSchemaBuilder {
    /// Declare a scalar leaf.
    pub fn leaf(mut self, name: &str, ty: LeafType) -> Self {
        self.leafs.push(LeafDecl {
            name: name.to_string(),
            ty,
        });
        self
    }

    /// Declare a leaf-list.
    pub fn leaf_list(mut self, name: &str, ty: LeafType) -> Self {
        self.leaf_lists.push(LeafListDecl {
            name: name.to_string(),
            ty,
        });
        self
    }

    /// Declare a child container with the given shape.
    pub fn container(mut self, child: Arc<ObjectSchema>) -> Self {
        self.containers.push(child);
        self
    }

    /// Declare a keyed list whose entries carry `entry`.
    pub fn list(mut self, name: &str, entry: Arc<ObjectSchema>) -> Self {
        self.lists.push(ListDecl {
            name: name.to_string(),
            entry,
        });
        self
    }

    /// Freeze the shape.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateElement`] when two declarations share
    /// an element name.
    pub fn build(self) -> Result<Arc<ObjectSchema>, SchemaError> {
        let mut seen = HashSet::new();
        let names = self
            .leafs
            .iter()
            .map(|d| d.name.as_str())
            .chain(self.leaf_lists.iter().map(|d| d.name.as_str()))
            .chain(self.containers.iter().map(|c| c.name.as_str()))
            .chain(self.lists.iter().map(|d| d.name.as_str()));
        for name in names {
            if !seen.insert(name.to_string()) {
                return Err(SchemaError::DuplicateElement {
                    object: self.name.clone(),
                    name: name.to_string(),
                });
            }
        }

        Ok(Arc::new(ObjectSchema {
            module: self.module,
            name: self.name,
            leafs: self.leafs,
            leaf_lists: self.leaf_lists,
            containers: self.containers,
            lists: self.lists,
        }))
    }
}
