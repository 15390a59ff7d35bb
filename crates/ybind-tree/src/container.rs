//! # Structural Container Fields
//!
//! Leaf-lists (ordered scalars) and keyed lists (ordered entry objects) are
//! managed collections: they grow only through `append`/`extend`, each
//! element individually type-checked at the call site, and they can never be
//! replaced wholesale by a raw sequence. Wholesale replacement is a
//! structural-integrity violation detected before any element-level check —
//! a different failure mode, and a different timing, from a scalar leaf's
//! deferred domain check.

use ybind_core::{CanonicalValue, ModelError, RawValue, YError};

use crate::node::{DataTree, NodeId};

/// An ordered collection of validated scalar values.
#[derive(Debug, Clone, Default)]
pub struct LeafList {
    pub(crate) values: Vec<CanonicalValue>,
}

impl LeafList {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// The validated values, in append order.
    pub fn values(&self) -> &[CanonicalValue] {
        &self.values
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the leaf-list is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.values.clear();
    }
}

/// An ordered collection of keyed-list entry handles.
#[derive(Debug, Clone, Default)]
pub struct EntryList {
    pub(crate) entries: Vec<NodeId>,
}

impl EntryList {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// The entry handles, in append order.
    pub fn entries(&self) -> &[NodeId] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn drain(&mut self) -> Vec<NodeId> {
        std::mem::take(&mut self.entries)
    }
}

impl DataTree {
    // ─── Leaf-lists ─────────────────────────────────────────────────

    /// Append one value to the named leaf-list, type-checking it against
    /// the element descriptor immediately.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownElement`] for an undeclared name and
    /// [`ModelError::InvalidValue`] when the element fails its type domain.
    pub fn append_leaf_list(
        &mut self,
        id: NodeId,
        name: &str,
        raw: impl Into<RawValue>,
    ) -> Result<(), YError> {
        let raw = raw.into();
        let index = match self.node(id).schema.leaf_list_index(name) {
            Some(i) => i,
            None => return Err(self.unknown_element(id, name)),
        };
        let checked = {
            let decl = &self.node(id).schema.leaf_lists()[index];
            ybind_schema::canonicalize(&decl.ty, &raw)
        };
        match checked {
            Ok(value) => {
                self.nodes[id.0].leaf_lists[index].values.push(value);
                Ok(())
            }
            Err(violation) => Err(ModelError::InvalidValue {
                path: self.leaf_path(id, name),
                element: name.to_string(),
                value: violation.rendered,
                expected: violation.expected,
            }
            .into()),
        }
    }

    /// Append each value in order, aborting on the first element that fails
    /// its type domain. Elements appended before the failure remain.
    pub fn extend_leaf_list<I, V>(&mut self, id: NodeId, name: &str, values: I) -> Result<(), YError>
    where
        I: IntoIterator<Item = V>,
        V: Into<RawValue>,
    {
        for value in values {
            self.append_leaf_list(id, name, value)?;
        }
        Ok(())
    }

    /// Wholesale replacement of a leaf-list by a raw sequence. Always fails
    /// with a structural-integrity error, before any element-level check —
    /// managed collections grow only through append/extend.
    pub fn assign_leaf_list(
        &mut self,
        id: NodeId,
        name: &str,
        replacement: Vec<RawValue>,
    ) -> Result<(), YError> {
        let Some(index) = self.node(id).schema.leaf_list_index(name) else {
            return Err(self.unknown_element(id, name));
        };
        let decl = &self.node(id).schema.leaf_lists()[index];
        Err(ModelError::LeafListReplaced {
            path: self.leaf_path(id, name),
            field: name.to_string(),
            value: RawValue::Sequence(replacement).to_string(),
            expected: decl.ty.kind_name().to_string(),
        }
        .into())
    }

    /// Read access to the named leaf-list.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownElement`] for an undeclared name.
    pub fn leaf_list(&self, id: NodeId, name: &str) -> Result<&LeafList, YError> {
        match self.node(id).schema.leaf_list_index(name) {
            Some(index) => Ok(&self.node(id).leaf_lists[index]),
            None => Err(self.unknown_element(id, name)),
        }
    }

    /// Read access to a leaf-list by declaration index.
    pub fn leaf_list_at(&self, id: NodeId, index: usize) -> &LeafList {
        &self.node(id).leaf_lists[index]
    }

    // ─── Keyed lists ────────────────────────────────────────────────

    /// Append a detached entry to the named keyed list, checking its schema
    /// identity against the declared entry schema immediately and adopting
    /// it as a child.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownElement`] for an undeclared name,
    /// [`ModelError::IncompatibleElement`] when the entry carries a
    /// different schema, and [`ModelError::EntryReused`] when the entry
    /// already has a parent.
    pub fn append_entry(&mut self, id: NodeId, name: &str, entry: NodeId) -> Result<(), YError> {
        let Some(index) = self.node(id).schema.list_index(name) else {
            return Err(self.unknown_element(id, name));
        };
        let declared = std::sync::Arc::clone(&self.node(id).schema.lists()[index].entry);
        let actual = std::sync::Arc::clone(&self.node(entry).schema);

        if !std::sync::Arc::ptr_eq(&declared, &actual) {
            return Err(ModelError::IncompatibleElement {
                path: self.leaf_path(id, name),
                field: name.to_string(),
                value: actual.name().to_string(),
                expected: declared.name().to_string(),
            }
            .into());
        }
        if self.node(entry).parent.is_some() {
            return Err(ModelError::EntryReused {
                path: self.leaf_path(id, name),
                field: name.to_string(),
                value: actual.name().to_string(),
                expected: declared.name().to_string(),
            }
            .into());
        }

        self.nodes[entry.0].parent = Some(id);
        self.nodes[id.0].lists[index].entries.push(entry);
        Ok(())
    }

    /// Append each entry in order, aborting on the first incompatible one.
    /// Entries appended before the failure remain.
    pub fn extend_entries<I>(&mut self, id: NodeId, name: &str, entries: I) -> Result<(), YError>
    where
        I: IntoIterator<Item = NodeId>,
    {
        for entry in entries {
            self.append_entry(id, name, entry)?;
        }
        Ok(())
    }

    /// Wholesale replacement of a keyed list by a sequence of entries.
    /// Always fails with a structural-integrity error, regardless of how
    /// well-typed the replacement entries are.
    pub fn assign_entries(
        &mut self,
        id: NodeId,
        name: &str,
        replacement: Vec<NodeId>,
    ) -> Result<(), YError> {
        let Some(index) = self.node(id).schema.list_index(name) else {
            return Err(self.unknown_element(id, name));
        };
        let declared = &self.node(id).schema.lists()[index].entry;
        let rendered: Vec<String> = replacement
            .iter()
            .map(|&e| format!("<{}>", self.node(e).schema.name()))
            .collect();
        Err(ModelError::ListReplaced {
            path: self.leaf_path(id, name),
            field: name.to_string(),
            value: format!("[{}]", rendered.join(", ")),
            expected: declared.name().to_string(),
        }
        .into())
    }

    /// Read access to the named keyed list.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownElement`] for an undeclared name.
    pub fn entries(&self, id: NodeId, name: &str) -> Result<&[NodeId], YError> {
        match self.node(id).schema.list_index(name) {
            Some(index) => Ok(self.node(id).lists[index].entries()),
            None => Err(self.unknown_element(id, name)),
        }
    }

    /// Read access to a keyed list by declaration index.
    pub fn list_at(&self, id: NodeId, index: usize) -> &EntryList {
        &self.node(id).lists[index]
    }
}
