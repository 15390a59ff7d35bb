//! # Validation Engine
//!
//! Depth-first pre-order walk over a schema-modeled data tree. At each node
//! the scalar leaves are checked in declaration order against the type
//! constraint acceptors; the first failure anywhere aborts the walk and is
//! stamped with the exact schema instance path. Structural containers were
//! already enforced element-by-element at mutation time, so their values are
//! carried into the output as-is.
//!
//! Canonical write-back is all-or-nothing: results are staged during the
//! walk and applied to the tree only after the entire pass succeeds, so a
//! failed boundary call leaves the tree exactly as it found it.

use std::sync::Arc;

use tracing::{debug, warn};

use ybind_core::{CanonicalValue, ModelError, YError};
use ybind_schema::canonicalize;
use ybind_tree::{DataTree, NodeId};

use crate::graph::{CanonicalGraph, CanonicalLeaf, CanonicalNode};

/// Observable state of one validator.
///
/// `Failed` is terminal for that invocation: the caller fixes the tree and
/// retries the whole boundary operation with a fresh pass. A `Validated`
/// tree may be mutated and re-validated later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationState {
    /// No pass has run.
    Unvalidated,
    /// A pass is in flight.
    Validating,
    /// The last pass succeeded and canonical values were written back.
    Validated,
    /// The last pass aborted on its first failure; the tree is untouched.
    Failed,
}

/// A single-use-at-a-time validation pass over one tree.
#[derive(Debug)]
pub struct Validator {
    state: ValidationState,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// A fresh validator.
    pub fn new() -> Self {
        Self {
            state: ValidationState::Unvalidated,
        }
    }

    /// The state left behind by the most recent pass.
    pub fn state(&self) -> ValidationState {
        self.state
    }

    /// Run one full pass: walk the tree from `root`, check every assigned
    /// scalar, and on success stamp canonical values and return the
    /// canonical graph.
    ///
    /// # Errors
    ///
    /// Returns the first [`ModelError`] found in traversal order. On error
    /// no canonical value is written back anywhere in the tree.
    pub fn validate(
        &mut self,
        tree: &mut DataTree,
        root: NodeId,
    ) -> Result<CanonicalGraph, YError> {
        self.state = ValidationState::Validating;
        let mut staged: Vec<(NodeId, usize, CanonicalValue)> = Vec::new();

        match walk(tree, root, None, &mut staged) {
            Ok(node) => {
                for (id, index, value) in staged {
                    tree.stamp_canonical(id, index, value);
                }
                self.state = ValidationState::Validated;
                Ok(CanonicalGraph { root: node })
            }
            Err(err) => {
                warn!(path = err.path(), value = err.offending_value(), "validation failed");
                self.state = ValidationState::Failed;
                Err(err)
            }
        }
    }
}

/// One-shot convenience form of [`Validator::validate`].
pub fn validate_and_canonicalize(
    tree: &mut DataTree,
    root: NodeId,
) -> Result<CanonicalGraph, YError> {
    Validator::new().validate(tree, root)
}

fn walk(
    tree: &DataTree,
    id: NodeId,
    parent_module: Option<&str>,
    staged: &mut Vec<(NodeId, usize, CanonicalValue)>,
) -> Result<CanonicalNode, YError> {
    let schema = Arc::clone(tree.schema_of(id));
    debug!(element = schema.name(), "validating node");

    let mut leaves = Vec::new();

    // Scalar leaves, in declaration order. First failure wins.
    for (index, decl) in schema.leafs().iter().enumerate() {
        let leaf = tree.leaf_at(id, index);
        if let Some(raw) = leaf.raw() {
            match canonicalize(&decl.ty, raw) {
                Ok(value) => {
                    leaves.push(CanonicalLeaf {
                        name: decl.name.clone(),
                        value: value.render(),
                    });
                    staged.push((id, index, value));
                }
                Err(violation) => {
                    return Err(ModelError::InvalidValue {
                        path: tree.leaf_path(id, &decl.name),
                        element: decl.name.clone(),
                        value: violation.rendered,
                        expected: violation.expected,
                    }
                    .into());
                }
            }
        }
    }

    // Leaf-list values were checked at append time; carry them as-is.
    for (index, decl) in schema.leaf_lists().iter().enumerate() {
        for value in tree.leaf_list_at(id, index).values() {
            leaves.push(CanonicalLeaf {
                name: decl.name.clone(),
                value: value.render(),
            });
        }
    }

    let mut children = Vec::new();

    // Child containers in declaration order, content-free ones omitted.
    for container_index in 0..schema.containers().len() {
        let child_id = tree.container_at(id, container_index);
        if tree.has_content(child_id) {
            children.push(walk(tree, child_id, Some(schema.module()), staged)?);
        }
    }

    // Keyed-list entries in append order.
    for list_index in 0..schema.lists().len() {
        for &entry in tree.list_at(id, list_index).entries() {
            children.push(walk(tree, entry, Some(schema.module()), staged)?);
        }
    }

    let element = if parent_module == Some(schema.module()) {
        schema.name().to_string()
    } else {
        format!("{}:{}", schema.module(), schema.name())
    };

    Ok(CanonicalNode {
        element,
        leaves,
        children,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ybind_core::ErrorKind;
    use ybind_schema::{LeafType, ObjectSchema};
    use ybind_tree::LeafValue;

    fn limits_tree() -> (DataTree, NodeId) {
        let limits = ObjectSchema::builder("switch-config", "limits")
            .leaf("retry-count", LeafType::Uint8)
            .leaf("timeout", LeafType::Uint16)
            .build()
            .unwrap();
        let device = ObjectSchema::builder("switch-config", "device")
            .container(limits)
            .build()
            .unwrap();
        DataTree::new(device)
    }

    #[test]
    fn test_state_machine_transitions() {
        let (mut tree, root) = limits_tree();
        let limits = tree.child(root, "limits").unwrap();

        let mut validator = Validator::new();
        assert_eq!(validator.state(), ValidationState::Unvalidated);

        tree.set_leaf(limits, "retry-count", 3u8).unwrap();
        validator.validate(&mut tree, root).unwrap();
        assert_eq!(validator.state(), ValidationState::Validated);

        tree.set_leaf(limits, "retry-count", 256i64).unwrap();
        assert!(validator.validate(&mut tree, root).is_err());
        assert_eq!(validator.state(), ValidationState::Failed);
    }

    #[test]
    fn test_fail_fast_reports_first_in_declaration_order() {
        let (mut tree, root) = limits_tree();
        let limits = tree.child(root, "limits").unwrap();
        tree.set_leaf(limits, "retry-count", -1i64).unwrap();
        tree.set_leaf(limits, "timeout", 70_000i64).unwrap();

        let err = validate_and_canonicalize(&mut tree, root).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Model);
        assert_eq!(err.path(), "/switch-config:device/limits/retry-count");
        assert_eq!(err.offending_value(), "-1");
    }

    #[test]
    fn test_failure_stamps_nothing() {
        let (mut tree, root) = limits_tree();
        let limits = tree.child(root, "limits").unwrap();
        // Valid leaf first, invalid second: the valid one must not be
        // canonicalized by the failed pass.
        tree.set_leaf(limits, "retry-count", 3u8).unwrap();
        tree.set_leaf(limits, "timeout", -1i64).unwrap();

        assert!(validate_and_canonicalize(&mut tree, root).is_err());
        assert!(tree.leaf(limits, "retry-count").unwrap().canonical().is_none());
    }

    #[test]
    fn test_success_stamps_canonical_values() {
        let (mut tree, root) = limits_tree();
        let limits = tree.child(root, "limits").unwrap();
        tree.set_leaf(limits, "retry-count", "3").unwrap();

        let graph = validate_and_canonicalize(&mut tree, root).unwrap();
        match tree.leaf(limits, "retry-count").unwrap().get() {
            Some(LeafValue::Canonical(CanonicalValue::Uint8(3))) => {}
            other => panic!("expected canonical uint8 3, got {other:?}"),
        }
        let limits_node = graph.root.child("limits").unwrap();
        assert_eq!(limits_node.values_of("retry-count"), ["3"]);
    }

    #[test]
    fn test_unassigned_leaves_are_skipped() {
        let (mut tree, root) = limits_tree();
        let graph = validate_and_canonicalize(&mut tree, root).unwrap();
        // Nothing assigned anywhere: the content-free container is omitted.
        assert!(graph.root.children.is_empty());
        assert!(graph.root.leaves.is_empty());
    }
}
