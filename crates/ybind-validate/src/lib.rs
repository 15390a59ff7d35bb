//! # ybind-validate — Validation Engine & Boundary Seam
//!
//! The commit-time half of the data binding: a depth-first walk over a
//! schema-modeled [`DataTree`](ybind_tree::DataTree) that checks every
//! assigned scalar against its declared type domain, stamps canonical
//! values on full success, and produces the [`CanonicalGraph`] — the only
//! form of data the session layer is allowed to transmit.
//!
//! ## Fail-Fast, All-or-Nothing
//!
//! The first failure anywhere in the traversal aborts the walk and is
//! returned with its exact schema instance path; nothing is aggregated and
//! nothing is written back to the tree on failure. Canonicalization is
//! all-or-nothing per boundary call.
//!
//! ## Boundary Seam
//!
//! [`CrudService`] owns the create/read/update/delete verbs only insofar as
//! they invoke validation: each verb validates first and hands the canonical
//! payload to a [`SessionProvider`]. On a validation error the provider is
//! never called. Provider failures come back as
//! [`ServiceError`](ybind_core::ServiceError)s and pass through unchanged —
//! the engine never converts or swallows them.
//!
//! ## Crate Policy
//!
//! - One validation pass is synchronous and suspension-free; independent
//!   trees may validate concurrently on separate threads.
//! - Engine progress is reported through `tracing` at debug level, the
//!   first failure at warn level.

pub mod boundary;
pub mod engine;
pub mod graph;

pub use boundary::{CrudService, Operation, SessionProvider};
pub use engine::{validate_and_canonicalize, ValidationState, Validator};
pub use graph::{CanonicalGraph, CanonicalLeaf, CanonicalNode};
