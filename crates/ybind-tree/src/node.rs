//! # Arena Nodes
//!
//! [`DataTree`] owns every node of one object graph in a single `Vec`;
//! [`NodeId`] is the copyable handle callers pass around. A node's declared
//! child containers are materialized eagerly at construction (mirroring
//! generated bindings, where nested containers exist from the moment the
//! root is built), while keyed-list entries are created detached via
//! [`DataTree::create_entry`] and adopted on append.

use std::sync::Arc;

use ybind_core::{ModelError, RawValue, YError};
use ybind_schema::ObjectSchema;

use crate::container::{EntryList, LeafList};
use crate::leaf::Leaf;

/// Handle to a node inside one [`DataTree`]. Only meaningful for the tree
/// that minted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) schema: Arc<ObjectSchema>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) leafs: Vec<Leaf>,
    pub(crate) leaf_lists: Vec<LeafList>,
    pub(crate) containers: Vec<NodeId>,
    pub(crate) lists: Vec<EntryList>,
}

/// One schema-modeled object graph.
#[derive(Debug)]
pub struct DataTree {
    pub(crate) nodes: Vec<Node>,
}

impl DataTree {
    /// Build a tree for the given root schema, materializing the declared
    /// container hierarchy. Returns the tree and its root handle.
    pub fn new(root_schema: Arc<ObjectSchema>) -> (Self, NodeId) {
        let mut tree = Self { nodes: Vec::new() };
        let root = tree.materialize(root_schema, None);
        (tree, root)
    }

    /// Create a detached entry for a keyed list. The entry has no parent
    /// until it is appended to a list declared with the same entry schema.
    pub fn create_entry(&mut self, schema: Arc<ObjectSchema>) -> NodeId {
        self.materialize(schema, None)
    }

    fn materialize(&mut self, schema: Arc<ObjectSchema>, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            leafs: schema.leafs().iter().map(|_| Leaf::new()).collect(),
            leaf_lists: schema.leaf_lists().iter().map(|_| LeafList::new()).collect(),
            containers: Vec::with_capacity(schema.containers().len()),
            lists: schema.lists().iter().map(|_| EntryList::new()).collect(),
            parent,
            schema: Arc::clone(&schema),
        });
        let children: Vec<Arc<ObjectSchema>> = schema.containers().to_vec();
        for child in children {
            let child_id = self.materialize(child, Some(id));
            self.nodes[id.0].containers.push(child_id);
        }
        id
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// The node's schema shape.
    pub fn schema_of(&self, id: NodeId) -> &Arc<ObjectSchema> {
        &self.node(id).schema
    }

    /// The node's parent, `None` for the root and for detached entries.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Number of nodes in the arena, detached entries included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // ─── Scalar leaves ──────────────────────────────────────────────

    /// Assign a raw value to the named leaf. Always succeeds for a declared
    /// name; no validation happens here — domain checks are deferred to the
    /// boundary validation pass.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownElement`] when the schema declares no
    /// such leaf.
    pub fn set_leaf(
        &mut self,
        id: NodeId,
        name: &str,
        raw: impl Into<RawValue>,
    ) -> Result<(), YError> {
        let index = match self.node(id).schema.leaf_index(name) {
            Some(i) => i,
            None => return Err(self.unknown_element(id, name)),
        };
        self.nodes[id.0].leafs[index].set(raw.into());
        Ok(())
    }

    /// Read access to the named leaf.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownElement`] when the schema declares no
    /// such leaf.
    pub fn leaf(&self, id: NodeId, name: &str) -> Result<&Leaf, YError> {
        match self.node(id).schema.leaf_index(name) {
            Some(index) => Ok(&self.node(id).leafs[index]),
            None => Err(self.unknown_element(id, name)),
        }
    }

    /// Read access to a leaf by declaration index. The index must come from
    /// the node's schema.
    pub fn leaf_at(&self, id: NodeId, index: usize) -> &Leaf {
        &self.node(id).leafs[index]
    }

    /// Record a canonical value on a leaf by declaration index. Called by
    /// the validation engine after a fully successful pass.
    pub fn stamp_canonical(
        &mut self,
        id: NodeId,
        index: usize,
        value: ybind_core::CanonicalValue,
    ) {
        self.nodes[id.0].leafs[index].record_canonical(value);
    }

    // ─── Child containers ───────────────────────────────────────────

    /// Handle of the named child container.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownElement`] when the schema declares no
    /// such container.
    pub fn child(&self, id: NodeId, name: &str) -> Result<NodeId, YError> {
        match self.node(id).schema.container_index(name) {
            Some(index) => Ok(self.node(id).containers[index]),
            None => Err(self.unknown_element(id, name)),
        }
    }

    /// Handle of a child container by declaration index.
    pub fn container_at(&self, id: NodeId, index: usize) -> NodeId {
        self.node(id).containers[index]
    }

    // ─── Lifecycle ──────────────────────────────────────────────────

    /// Whether the subtree under `id` carries any populated content: an
    /// assigned leaf, a non-empty leaf-list or keyed list, or a descendant
    /// container with content.
    pub fn has_content(&self, id: NodeId) -> bool {
        let node = self.node(id);
        node.leafs.iter().any(Leaf::is_set)
            || node.leaf_lists.iter().any(|ll| !ll.is_empty())
            || node.lists.iter().any(|l| !l.is_empty())
            || node.containers.iter().any(|&c| self.has_content(c))
    }

    /// Clear the subtree under `id` back to its just-constructed state:
    /// leaves unset, leaf-lists empty, keyed lists empty with their entries
    /// detached. The node shapes themselves remain, ready for reuse.
    pub fn reset_subtree(&mut self, id: NodeId) {
        for leaf in &mut self.nodes[id.0].leafs {
            leaf.reset();
        }
        for leaf_list in &mut self.nodes[id.0].leaf_lists {
            leaf_list.clear();
        }
        let mut detached: Vec<NodeId> = Vec::new();
        for list in &mut self.nodes[id.0].lists {
            detached.extend(list.drain());
        }
        for entry in detached {
            self.nodes[entry.0].parent = None;
        }
        let containers = self.node(id).containers.clone();
        for child in containers {
            self.reset_subtree(child);
        }
    }

    pub(crate) fn unknown_element(&self, id: NodeId, name: &str) -> YError {
        ModelError::UnknownElement {
            path: self.instance_path(id),
            element: name.to_string(),
        }
        .into()
    }
}
