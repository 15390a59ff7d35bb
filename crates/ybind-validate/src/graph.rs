//! # Canonical Graph
//!
//! The validated, serializable form of a data tree: element names, rendered
//! canonical leaf values, and children, in traversal order. This is the
//! only type the session layer consumes — raw object graphs never cross the
//! transport boundary.
//!
//! Subtrees with no populated content are omitted, so the payload carries
//! exactly what the caller assembled and nothing schema-shaped but empty.

use serde::{Deserialize, Serialize};

/// A validated data tree, ready for transmission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalGraph {
    /// The root node.
    pub root: CanonicalNode,
}

/// One node of a canonical graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalNode {
    /// Element name, module-qualified when the module changes from the
    /// parent (the root is always qualified), e.g. `switch-config:device`.
    pub element: String,
    /// Rendered canonical leaf values, scalar leaves first in declaration
    /// order, then leaf-list values (one entry per value) in append order.
    pub leaves: Vec<CanonicalLeaf>,
    /// Child nodes in traversal order: containers with content, then keyed
    /// list entries in append order.
    pub children: Vec<CanonicalNode>,
}

/// One rendered leaf value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalLeaf {
    /// The leaf's element name.
    pub name: String,
    /// The wire-canonical string form of the validated value.
    pub value: String,
}

impl CanonicalNode {
    /// The rendered values carried under `name` on this node, in order.
    /// Scalar leaves yield at most one; leaf-lists may yield several.
    pub fn values_of(&self, name: &str) -> Vec<&str> {
        self.leaves
            .iter()
            .filter(|l| l.name == name)
            .map(|l| l.value.as_str())
            .collect()
    }

    /// The first child with the given element name, if any.
    pub fn child(&self, element: &str) -> Option<&CanonicalNode> {
        self.children.iter().find(|c| c.element == element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CanonicalNode {
        CanonicalNode {
            element: "switch-config:device".to_string(),
            leaves: vec![
                CanonicalLeaf {
                    name: "hostname".to_string(),
                    value: "edge-1".to_string(),
                },
                CanonicalLeaf {
                    name: "dns-servers".to_string(),
                    value: "10.0.0.1".to_string(),
                },
                CanonicalLeaf {
                    name: "dns-servers".to_string(),
                    value: "10.0.0.2".to_string(),
                },
            ],
            children: vec![CanonicalNode {
                element: "limits".to_string(),
                leaves: vec![],
                children: vec![],
            }],
        }
    }

    #[test]
    fn test_values_of_collects_repeats() {
        let node = sample();
        assert_eq!(node.values_of("hostname"), ["edge-1"]);
        assert_eq!(node.values_of("dns-servers"), ["10.0.0.1", "10.0.0.2"]);
        assert!(node.values_of("missing").is_empty());
    }

    #[test]
    fn test_child_lookup() {
        let node = sample();
        assert!(node.child("limits").is_some());
        assert!(node.child("ports").is_none());
    }

    #[test]
    fn test_serde_roundtrip() {
        let graph = CanonicalGraph { root: sample() };
        let json = serde_json::to_string(&graph).unwrap();
        let parsed: CanonicalGraph = serde_json::from_str(&json).unwrap();
        assert_eq!(graph, parsed);
    }
}
