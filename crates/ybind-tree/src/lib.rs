//! # ybind-tree — The Schema-Modeled Data Tree
//!
//! An in-memory object graph bound to schema shapes: nodes own scalar leaf
//! fields and structural container fields, and every node except the root
//! has exactly one parent.
//!
//! ## Ownership Model
//!
//! The whole graph lives in one arena ([`DataTree`] owns a `Vec` of nodes);
//! a [`NodeId`] is a copyable index handle. Parent back-references are plain
//! `Option<NodeId>` — non-owning, so there are no reference cycles between
//! parent and child, and the ownership tree is acyclic by construction.
//!
//! ## Enforcement Timing
//!
//! Two different timings coexist deliberately:
//!
//! - Scalar leaf assignment ([`DataTree::set_leaf`]) always succeeds and
//!   stores the raw value verbatim. Configuration is assembled
//!   incrementally — values may be provisional or recomputed before the
//!   graph is finalized — so domain checks are deferred to the boundary
//!   validation pass.
//! - Structural container mutation is checked immediately. `append`/`extend`
//!   type-check each element at the call site, and wholesale replacement
//!   (`assign_*`) is refused unconditionally, because container identity and
//!   ordering must be correct before further graph construction depends on
//!   them.
//!
//! ## Crate Policy
//!
//! - No interior mutability and no locking: one writer per tree is the
//!   caller's discipline, and independent trees validate concurrently.
//! - No `panic!()` or `.unwrap()` outside tests; arena indexing is the one
//!   slice-indexing exception, reachable only through a [`NodeId`] minted by
//!   the owning tree.

pub mod container;
pub mod leaf;
pub mod node;
pub mod path;

pub use container::{EntryList, LeafList};
pub use leaf::{Leaf, LeafValue};
pub use node::{DataTree, NodeId};
