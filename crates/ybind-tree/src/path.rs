//! # Instance Path Tracker
//!
//! Computes the absolute schema instance path of any node or field: parent
//! links are walked up to the root, each segment is the element name, and a
//! segment is module-qualified when its module differs from its parent's
//! (the root is always qualified). A pure function of graph structure —
//! field values never influence the path — so repeated calls over a fixed
//! graph are byte-identical.

use crate::node::{DataTree, NodeId};

impl DataTree {
    /// Absolute path of a node, e.g. `/switch-config:device/limits`.
    pub fn instance_path(&self, id: NodeId) -> String {
        let mut lineage = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            lineage.push(current);
            cursor = self.node(current).parent;
        }
        lineage.reverse();

        let mut path = String::new();
        let mut previous_module: Option<&str> = None;
        for node_id in lineage {
            let schema = &self.node(node_id).schema;
            path.push('/');
            if previous_module != Some(schema.module()) {
                path.push_str(schema.module());
                path.push(':');
            }
            path.push_str(schema.name());
            previous_module = Some(schema.module());
        }
        path
    }

    /// Absolute path of a field on a node, e.g.
    /// `/switch-config:device/limits/retry-count`. Field names share the
    /// owning node's module, so the final segment is never re-qualified.
    pub fn leaf_path(&self, id: NodeId, field: &str) -> String {
        let mut path = self.instance_path(id);
        path.push('/');
        path.push_str(field);
        path
    }
}
