//! Shared fixture model and mock session provider for the integration
//! suites.
//!
//! The model mirrors a small network-device configuration module,
//! `switch-config`, with one leaf of every built-in type kind under
//! `device/types/built-in`, a leaf-list and a keyed list on `device`.

#![allow(dead_code)]

use std::sync::Arc;

use ybind_core::ServiceError;
use ybind_schema::{BitsType, EnumType, IdentityType, LeafType, ObjectSchema, StringType};
use ybind_tree::{DataTree, NodeId};
use ybind_validate::{CanonicalGraph, Operation, SessionProvider};

/// A constructed fixture tree plus the handles tests need.
pub struct Fixture {
    pub tree: DataTree,
    pub root: NodeId,
    pub port: Arc<ObjectSchema>,
}

impl Fixture {
    /// Handle of the `device/types/built-in` container.
    pub fn built_in(&self) -> NodeId {
        let types = self.tree.child(self.root, "types").unwrap();
        self.tree.child(types, "built-in").unwrap()
    }
}

/// Build the `switch-config` fixture model.
pub fn fixture() -> Fixture {
    let port = ObjectSchema::builder("switch-config", "port")
        .leaf("index", LeafType::Uint16)
        .leaf("name", LeafType::string())
        .build()
        .unwrap();

    let built_in = ObjectSchema::builder("switch-config", "built-in")
        .leaf("number8", LeafType::Int8)
        .leaf("number16", LeafType::Int16)
        .leaf("number32", LeafType::Int32)
        .leaf("number64", LeafType::Int64)
        .leaf("u-number8", LeafType::Uint8)
        .leaf("u-number16", LeafType::Uint16)
        .leaf("u-number32", LeafType::Uint32)
        .leaf("u-number64", LeafType::Uint64)
        .leaf("threshold", LeafType::decimal64(2).unwrap())
        .leaf(
            "name",
            LeafType::Str(StringType::any().with_length(1, 63).unwrap()),
        )
        .leaf("enabled", LeafType::Boolean)
        .leaf("presence", LeafType::Empty)
        .leaf(
            "access-level",
            LeafType::Enumeration(EnumType::new(["none", "read", "write"]).unwrap()),
        )
        .leaf(
            "protocols",
            LeafType::Bits(BitsType::new(["ssh", "telnet", "https"]).unwrap()),
        )
        .leaf(
            "port-type",
            LeafType::IdentityRef(IdentityType::new(["ethernet", "loopback"]).unwrap()),
        )
        .build()
        .unwrap();

    let types = ObjectSchema::builder("switch-config", "types")
        .container(built_in)
        .build()
        .unwrap();

    let device = ObjectSchema::builder("switch-config", "device")
        .leaf_list("dns-servers", LeafType::string())
        .container(types)
        .list("port", Arc::clone(&port))
        .build()
        .unwrap();

    let (tree, root) = DataTree::new(device);
    Fixture { tree, root, port }
}

/// A session provider that records every call and can be primed to fail.
#[derive(Debug, Default)]
pub struct RecordingProvider {
    pub calls: Vec<(Operation, CanonicalGraph)>,
    pub fail_with: Option<ServiceError>,
}

impl RecordingProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionProvider for RecordingProvider {
    fn execute(
        &mut self,
        operation: Operation,
        payload: &CanonicalGraph,
    ) -> Result<Option<CanonicalGraph>, ServiceError> {
        self.calls.push((operation, payload.clone()));
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(None),
        }
    }
}
